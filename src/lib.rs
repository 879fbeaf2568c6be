//! Parametric HTTP action router.
//!
//! Binds URL path templates, literal or containing named placeholders such
//! as `/user/${id}` or `/user-${id:1*3}`, to opaque handler identifiers
//! keyed by HTTP method, and resolves incoming `(path, method)` pairs to
//! the most specific registered action.
//!
//! Placeholders may carry sub-patterns interpreted by a configurable
//! dialect (wildcard globs by default, anchored regular expressions as an
//! alternative). Overlapping templates are disambiguated deterministically:
//! exact literal paths first, then the template matching the most literal
//! characters, with ties broken by template order.
//!
//! ```
//! use action_router::Router;
//!
//! let mut router = Router::new();
//! router.register("/user/${id}", "UserAction#view", Some("GET")).unwrap();
//! router.register("/dummy", "DummyAction#index", None).unwrap();
//!
//! let action = router.lookup("/user/173", Some("GET")).unwrap();
//! assert_eq!(action.handler(), "UserAction#view");
//! assert!(router.lookup("/user/173/extra", None).is_none());
//! ```
//!
//! Registration is a build phase (`&mut self`); lookups are read-only and
//! safe for any number of concurrent readers once the router is published.

pub mod config;
pub mod error;
pub mod logger;
pub mod placeholder;
pub mod routing;
pub mod template;

pub use config::{LoggingConfig, RouterConfig, TemplateConfig};
pub use error::RouterError;
pub use placeholder::Dialect;
pub use routing::{ActionDef, ActionInfo, RouteTable, Router};
pub use template::Template;
