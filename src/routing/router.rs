//! Router facade
//!
//! Thin wrapper over the route table adding path aliases and the
//! convenience registration surface. The router is a plain value: several
//! routers with different configurations can coexist in one process.

use std::collections::HashMap;

use super::action::{ActionDef, ActionInfo};
use super::table::RouteTable;
use crate::config::RouterConfig;
use crate::error::RouterError;

/// Action router: registration during the build phase, read-only lookups
/// afterwards.
#[derive(Debug)]
pub struct Router {
    table: RouteTable,
    aliases: HashMap<String, String>,
}

impl Router {
    /// Router with default configuration (wildcard dialect, strict
    /// duplicate detection, `${name:pattern}` delimiters).
    pub fn new() -> Self {
        Self::with_config(RouterConfig::default())
    }

    pub fn with_config(config: RouterConfig) -> Self {
        Self {
            table: RouteTable::new(config.template),
            aliases: HashMap::new(),
        }
    }

    /// Register a handler under a path template, optionally bound to one
    /// HTTP method.
    pub fn register(
        &mut self,
        template: &str,
        handler: &str,
        method: Option<&str>,
    ) -> Result<&ActionInfo, RouterError> {
        let mut def = ActionDef::new(template, handler);
        if let Some(method) = method {
            def = def.method(method);
        }
        self.table.register(def)
    }

    /// Register a fully described action.
    pub fn register_action(&mut self, def: ActionDef) -> Result<&ActionInfo, RouterError> {
        self.table.register(def)
    }

    /// Resolve a request path to a registered action.
    ///
    /// Never fails; an unmatched path is a miss and returns `None`.
    pub fn lookup(&self, path: &str, method: Option<&str>) -> Option<&ActionInfo> {
        self.table.lookup(path, method)
    }

    /// Resolve a handler identifier directly.
    pub fn lookup_by_handler(&self, id: &str) -> Option<&ActionInfo> {
        self.table.lookup_by_handler(id)
    }

    /// Register a path alias. Aliases are a plain name-to-path map,
    /// unrelated to template matching.
    pub fn register_alias(&mut self, alias: &str, path: &str) {
        self.aliases.insert(alias.to_string(), path.to_string());
    }

    pub fn resolve_alias(&self, alias: &str) -> Option<&str> {
        self.aliases.get(alias).map(String::as_str)
    }

    /// Number of registered actions.
    pub fn count(&self) -> usize {
        self.table.count()
    }

    /// Whether any registered handler is asynchronous.
    pub fn async_mode_on(&self) -> bool {
        self.table.async_mode_on()
    }

    /// Every registered action.
    pub fn all(&self) -> Vec<&ActionInfo> {
        self.table.all()
    }
}

impl Default for Router {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::TemplateConfig;
    use crate::placeholder::Dialect;

    fn router() -> Router {
        Router::new()
    }

    fn regex_router() -> Router {
        Router::with_config(RouterConfig {
            template: TemplateConfig {
                dialect: Dialect::Regex,
                ..TemplateConfig::default()
            },
            ..RouterConfig::default()
        })
    }

    fn handler_at<'a>(router: &'a Router, path: &str) -> Option<&'a str> {
        router.lookup(path, None).map(ActionInfo::handler)
    }

    #[test]
    fn test_single_parametric_action() {
        let mut router = router();
        router.register("/${one}", "FooAction#one", None).unwrap();

        assert!(router.lookup("/foo", None).is_some());
        assert!(router.lookup("/foo/boo", None).is_none());
        assert!(router.lookup("/foo/boo/zoo", None).is_none());
    }

    #[test]
    fn test_best_match_wins() {
        let mut router = router();
        router.register("/${one}", "FooAction#one", None).unwrap();
        router.register("/xxx-${two}", "FooAction#two", None).unwrap();

        assert_eq!(handler_at(&router, "/foo"), Some("FooAction#one"));
        assert_eq!(handler_at(&router, "/foo/boo"), None);
        assert_eq!(handler_at(&router, "/xxx-foo"), Some("FooAction#two"));
    }

    #[test]
    fn test_non_overlapping_parametric_actions() {
        let mut router = router();
        router.register("/yyy-${one}", "FooAction#one", None).unwrap();
        router.register("/xxx-${two}", "FooAction#two", None).unwrap();

        assert_eq!(router.count(), 2);

        assert_eq!(handler_at(&router, "/foo"), None);
        assert_eq!(handler_at(&router, "/yyy-111"), Some("FooAction#one"));
        assert_eq!(handler_at(&router, "/xxx-222"), Some("FooAction#two"));

        let result = router.register("/xxx-${two}", "FooAction#two", None);
        assert!(result.is_err());
    }

    #[test]
    fn test_mixed_literal_and_parametric() {
        let mut router = router();
        router.register("/${one}", "FooAction#one", None).unwrap();
        router.register("/dummy", "FooAction#dummy", None).unwrap();
        router.register("/${two}/${three}", "FooAction#two", None).unwrap();
        router.register("/life/${three}", "FooAction#three", None).unwrap();

        assert_eq!(handler_at(&router, "/foo"), Some("FooAction#one"));
        assert_eq!(handler_at(&router, "/dummy"), Some("FooAction#dummy"));
        assert_eq!(handler_at(&router, "/scott/ramonna"), Some("FooAction#two"));
        assert_eq!(handler_at(&router, "/life/universe"), Some("FooAction#three"));
        assert_eq!(handler_at(&router, "/scott/ramonna/envy"), None);
        assert_eq!(handler_at(&router, "/life/universe/else"), None);
    }

    #[test]
    fn test_regex_dialect_routing() {
        let mut router = regex_router();
        router.register("/${one:[ab]+}", "FooAction#one", None).unwrap();

        assert!(router.lookup("/a", None).is_some());
        assert!(router.lookup("/ac", None).is_none());
    }

    #[test]
    fn test_wildcard_dialect_routing() {
        let mut router = router();
        router.register("/${one:a?a}", "FooAction#one", None).unwrap();

        assert!(router.lookup("/aaa", None).is_some());
        assert!(router.lookup("/aab", None).is_none());
    }

    #[test]
    fn test_trailing_literal_discriminates() {
        let mut router = router();
        router
            .register("/${entityName}/dba.delete", "DbaAction#delete", None)
            .unwrap();
        router
            .register("/${entityName}/dba.delete_multi", "DbaAction#deleteMulti", None)
            .unwrap();

        assert_eq!(
            handler_at(&router, "/config/dba.delete_multi"),
            Some("DbaAction#deleteMulti")
        );
        assert_eq!(
            handler_at(&router, "/config/dba.delete"),
            Some("DbaAction#delete")
        );
    }

    #[test]
    fn test_register_returns_action_info() {
        let mut router = router();
        let info = router
            .register("/user/${id}", "UserAction#view", Some("get"))
            .unwrap();
        assert_eq!(info.template(), "/user/${id}");
        assert_eq!(info.handler(), "UserAction#view");
        assert_eq!(info.method(), Some("GET"));
    }

    #[test]
    fn test_lookup_by_handler() {
        let mut router = router();
        router.register("/user/${id}", "UserAction#view", None).unwrap();

        let info = router.lookup_by_handler("UserAction#view").unwrap();
        assert_eq!(info.template(), "/user/${id}");
        assert!(router.lookup_by_handler("UserAction#missing").is_none());
    }

    #[test]
    fn test_aliases() {
        let mut router = router();
        router.register_alias("home", "/index.html");

        assert_eq!(router.resolve_alias("home"), Some("/index.html"));
        assert_eq!(router.resolve_alias("missing"), None);

        router.register_alias("home", "/welcome.html");
        assert_eq!(router.resolve_alias("home"), Some("/welcome.html"));
    }

    #[test]
    fn test_count_and_all() {
        let mut router = router();
        router.register("/a", "FooAction#a", None).unwrap();
        router.register("/${x}", "FooAction#x", None).unwrap();
        router
            .register_action(ActionDef::new("/b", "FooAction#b").method("GET"))
            .unwrap();

        assert_eq!(router.count(), 3);
        assert_eq!(router.all().len(), 3);
    }

    #[test]
    fn test_async_mode() {
        let mut router = router();
        assert!(!router.async_mode_on());

        router
            .register_action(ActionDef::new("/jobs/${id}", "JobAction#status").asynchronous())
            .unwrap();
        assert!(router.async_mode_on());
    }

    #[test]
    fn test_multiple_routers_coexist() {
        let mut strict = router();
        let mut angled = Router::with_config(RouterConfig {
            template: TemplateConfig {
                prefix: "<".to_string(),
                suffix: ">".to_string(),
                ..TemplateConfig::default()
            },
            ..RouterConfig::default()
        });

        strict.register("/img-${id}.png", "ImgAction#view", None).unwrap();
        angled.register("/img-<id>.png", "ImgAction#view", None).unwrap();

        assert!(strict.lookup("/img-42.png", None).is_some());
        assert!(angled.lookup("/img-42.png", None).is_some());

        // In the angled router, `${...}` is literal text: this template has
        // no placeholders and only matches its exact spelling.
        angled.register("/raw-${x}", "RawAction#get", None).unwrap();
        assert!(angled.lookup("/raw-${x}", None).is_some());
        assert!(angled.lookup("/raw-foo", None).is_none());
    }
}
