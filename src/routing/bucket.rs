//! Path buckets
//!
//! One bucket per distinct template string, holding the compiled template
//! and the per-method action records.

use std::collections::HashMap;
use std::sync::Arc;

use super::action::ActionInfo;
use crate::template::Template;

/// Storage unit associating one template with its per-method actions.
///
/// The `None` method key is the wildcard entry matching any method.
#[derive(Debug)]
pub(crate) struct PathBucket {
    template: Template,
    actions: HashMap<Option<String>, Arc<ActionInfo>>,
}

impl PathBucket {
    pub(crate) fn new(template: Template) -> Self {
        Self {
            template,
            actions: HashMap::new(),
        }
    }

    pub(crate) fn template(&self) -> &Template {
        &self.template
    }

    pub(crate) fn contains(&self, method: Option<&str>) -> bool {
        self.actions
            .contains_key(&method.map(str::to_uppercase))
    }

    /// Store an action under its method key; returns the replaced record
    /// when this was a duplicate registration.
    pub(crate) fn insert(&mut self, info: Arc<ActionInfo>) -> Option<Arc<ActionInfo>> {
        let key = info.method().map(str::to_string);
        self.actions.insert(key, info)
    }

    /// Exact method entry first, wildcard-method entry as fallback.
    pub(crate) fn lookup(&self, method: Option<&str>) -> Option<&Arc<ActionInfo>> {
        if let Some(method) = method {
            if let Some(info) = self.actions.get(&Some(method.to_uppercase())) {
                return Some(info);
            }
        }
        self.actions.get(&None)
    }

    /// All actions in this bucket, wildcard-method entry first, then by
    /// method name.
    pub(crate) fn actions(&self) -> Vec<&Arc<ActionInfo>> {
        let mut entries: Vec<_> = self.actions.iter().collect();
        entries.sort_by(|(a, _), (b, _)| a.cmp(b));
        entries.into_iter().map(|(_, info)| info).collect()
    }
}
