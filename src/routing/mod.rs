//! Action routing subsystem.
//!
//! # Data Flow
//! ```text
//! Registration (build phase):
//!     template string
//!     → template parser + placeholder compilation
//!     → PathBucket (literal map or sorted parametric list)
//!
//! Lookup (serve phase):
//!     (path, method)
//!     → exact hit in the literal map, or
//!     → depth-banded scan of parametric templates, best score wins
//!     → bucket method dispatch → ActionInfo
//! ```
//!
//! # Design Decisions
//! - Registration and lookup are separate phases; lookup is read-only
//! - Parametric templates are kept sorted by (depth, source) so the
//!   winner of a score tie is deterministic
//! - Lookup never fails; misses are `None`, not errors

mod action;
mod bucket;
mod router;
mod table;

pub use action::{ActionDef, ActionInfo};
pub use router::Router;
pub use table::RouteTable;
