//! Action records
//!
//! An [`ActionDef`] is the registration input; an [`ActionInfo`] is the
//! immutable record the router stores and hands back on lookup. Handler
//! identifiers are opaque strings; the `"Class#method"` signature form is
//! conventional but not enforced.

/// Registration request for one action.
#[derive(Debug, Clone)]
pub struct ActionDef {
    pub template: String,
    pub handler: String,
    /// HTTP method this action is bound to; `None` binds any method.
    pub method: Option<String>,
    /// Opaque async marker, carried through to [`ActionInfo`].
    pub async_handler: bool,
}

impl ActionDef {
    pub fn new(template: impl Into<String>, handler: impl Into<String>) -> Self {
        Self {
            template: template.into(),
            handler: handler.into(),
            method: None,
            async_handler: false,
        }
    }

    /// Bind the action to one HTTP method.
    #[must_use]
    pub fn method(mut self, method: impl Into<String>) -> Self {
        self.method = Some(method.into());
        self
    }

    /// Mark the handler as asynchronous.
    #[must_use]
    pub fn asynchronous(mut self) -> Self {
        self.async_handler = true;
        self
    }
}

/// Registered action, immutable once stored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActionInfo {
    handler: String,
    template: String,
    method: Option<String>,
    async_handler: bool,
}

impl ActionInfo {
    /// Build the stored record; the method is normalized to uppercase.
    pub(crate) fn from_def(def: &ActionDef) -> Self {
        Self {
            handler: def.handler.clone(),
            template: def.template.clone(),
            method: def.method.as_deref().map(str::to_uppercase),
            async_handler: def.async_handler,
        }
    }

    /// Opaque handler identifier.
    pub fn handler(&self) -> &str {
        &self.handler
    }

    /// Template string this action was registered under.
    pub fn template(&self) -> &str {
        &self.template
    }

    /// Bound HTTP method, uppercase; `None` means any method.
    pub fn method(&self) -> Option<&str> {
        self.method.as_deref()
    }

    pub fn is_async(&self) -> bool {
        self.async_handler
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_def_builder() {
        let def = ActionDef::new("/user/${id}", "UserAction#view")
            .method("get")
            .asynchronous();
        assert_eq!(def.template, "/user/${id}");
        assert_eq!(def.handler, "UserAction#view");
        assert_eq!(def.method.as_deref(), Some("get"));
        assert!(def.async_handler);
    }

    #[test]
    fn test_info_normalizes_method() {
        let def = ActionDef::new("/user/${id}", "UserAction#view").method("post");
        let info = ActionInfo::from_def(&def);
        assert_eq!(info.method(), Some("POST"));
        assert!(!info.is_async());
    }

    #[test]
    fn test_info_without_method() {
        let def = ActionDef::new("/dummy", "FooAction#one");
        let info = ActionInfo::from_def(&def);
        assert_eq!(info.method(), None);
        assert_eq!(info.template(), "/dummy");
    }
}
