//! Route table
//!
//! Two collections back the table:
//! - a hash map of literal (placeholder-free) templates keyed by exact path
//! - a vector of parametric templates kept sorted by `(depth, source)`,
//!   scanned at lookup with an early break once the depth band is passed
//!
//! Among competing parametric matches of equal depth the highest literal
//! score wins; the sort order makes ties resolve to the lexicographically
//! smallest template, never to insertion or hash order.

use std::collections::HashMap;
use std::sync::Arc;

use super::action::{ActionDef, ActionInfo};
use super::bucket::PathBucket;
use crate::config::TemplateConfig;
use crate::error::RouterError;
use crate::logger;
use crate::template::Template;

/// Owns every template, bucket and action record for its lifetime.
///
/// Registration mutates; lookup is read-only and borrow-checked against it,
/// so a table published behind `Arc` after the build phase is safe for
/// unbounded concurrent readers.
#[derive(Debug)]
pub struct RouteTable {
    config: TemplateConfig,
    literal: HashMap<String, PathBucket>,
    parametric: Vec<PathBucket>,
    by_handler: HashMap<String, Arc<ActionInfo>>,
    actions_count: usize,
    async_mode: bool,
}

impl RouteTable {
    pub fn new(config: TemplateConfig) -> Self {
        Self {
            config,
            literal: HashMap::new(),
            parametric: Vec::new(),
            by_handler: HashMap::new(),
            actions_count: 0,
            async_mode: false,
        }
    }

    /// Register one action.
    ///
    /// A second registration of the same `(template, method)` pair fails
    /// when duplicate detection is on, and silently replaces the previous
    /// action otherwise. Template sources are compared textually;
    /// `/${a}` and `/${b}` are distinct templates.
    pub fn register(&mut self, def: ActionDef) -> Result<&ActionInfo, RouterError> {
        let template = Template::compile(&def.template, &self.config)?;
        let info = Arc::new(ActionInfo::from_def(&def));

        logger::log_debug(&format!(
            "Registering action: {} to: {}",
            def.template,
            info.handler()
        ));

        let replaced = if template.is_literal() {
            let bucket = self
                .literal
                .entry(def.template.clone())
                .or_insert_with(|| PathBucket::new(template));
            if self.config.detect_duplicate_paths && bucket.contains(def.method.as_deref()) {
                return Err(RouterError::DuplicateRoute {
                    template: def.template,
                    method: info.method().map(str::to_string),
                });
            }
            bucket.insert(Arc::clone(&info))
        } else {
            let at = match self
                .parametric
                .iter()
                .position(|bucket| bucket.template().source() == def.template)
            {
                Some(at) => at,
                None => {
                    let depth = template.depth();
                    let at = self.parametric.partition_point(|bucket| {
                        (bucket.template().depth(), bucket.template().source())
                            < (depth, template.source())
                    });
                    self.parametric.insert(at, PathBucket::new(template));
                    at
                }
            };
            let bucket = &mut self.parametric[at];
            if self.config.detect_duplicate_paths && bucket.contains(def.method.as_deref()) {
                return Err(RouterError::DuplicateRoute {
                    template: def.template,
                    method: info.method().map(str::to_string),
                });
            }
            bucket.insert(Arc::clone(&info))
        };

        if let Some(previous) = replaced {
            logger::log_warning(&format!(
                "Replacing action for path `{}`: {} -> {}",
                def.template,
                previous.handler(),
                info.handler()
            ));
        } else {
            self.actions_count += 1;
        }

        if info.is_async() {
            self.async_mode = true;
        }

        let slot = self
            .by_handler
            .entry(info.handler().to_string())
            .and_modify(|existing| *existing = Arc::clone(&info))
            .or_insert_with(|| Arc::clone(&info));
        Ok(&**slot)
    }

    /// Resolve `(path, method)` to a registered action.
    ///
    /// The literal map is consulted first; parametric templates are only
    /// scanned within the path's depth band.
    pub fn lookup(&self, path: &str, method: Option<&str>) -> Option<&ActionInfo> {
        if let Some(bucket) = self.literal.get(path) {
            if let Some(info) = bucket.lookup(method) {
                return Some(info.as_ref());
            }
        }

        let depth = path.matches('/').count();

        let mut best: Option<(usize, usize)> = None;
        for (index, bucket) in self.parametric.iter().enumerate() {
            let bucket_depth = bucket.template().depth();
            if bucket_depth < depth {
                continue;
            }
            if bucket_depth > depth {
                // Sorted order: nothing eligible remains.
                break;
            }
            if let Some(score) = bucket.template().match_score(path) {
                if best.map_or(true, |(_, max)| score > max) {
                    best = Some((index, score));
                }
            }
        }

        let (index, _) = best?;
        self.parametric[index].lookup(method).map(Arc::as_ref)
    }

    /// Direct lookup by handler identifier; the latest registration under
    /// an identifier wins.
    pub fn lookup_by_handler(&self, id: &str) -> Option<&ActionInfo> {
        self.by_handler.get(id).map(Arc::as_ref)
    }

    /// Every registered action: literal buckets ordered by path, then
    /// parametric buckets in table order.
    pub fn all(&self) -> Vec<&ActionInfo> {
        let mut out = Vec::with_capacity(self.actions_count);

        let mut literal: Vec<_> = self.literal.values().collect();
        literal.sort_by(|a, b| a.template().source().cmp(b.template().source()));
        for bucket in literal {
            out.extend(bucket.actions().into_iter().map(Arc::as_ref));
        }
        for bucket in &self.parametric {
            out.extend(bucket.actions().into_iter().map(Arc::as_ref));
        }
        out
    }

    /// Total number of registered actions; replaced duplicates count once.
    pub fn count(&self) -> usize {
        self.actions_count
    }

    /// Whether at least one registered handler is asynchronous.
    pub fn async_mode_on(&self) -> bool {
        self.async_mode
    }
}
