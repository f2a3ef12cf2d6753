//! Route self-description subsystem.
//!
//! # Data Flow
//! ```text
//! OPTIONS /some/scope
//!     → middleware.rs (method + RouteContext check, else pass through)
//!     → scope.rs (segment, filter, relativize against the route table)
//!     → render.rs (encode RouteList with the configured RenderFn)
//!     → 200 + Content-Type + body, or 500 + error log
//! ```
//!
//! # Design Decisions
//! - Nothing is cached between requests; each description walks the table
//! - Options are captured per middleware instance, never global
//! - Routers built by `DescribedRouter` wire this in automatically; other
//!   axum routers can add `Extension(RouteContext)` and
//!   `middleware::from_fn_with_state(options, describe_routes)` themselves

pub mod middleware;
pub mod render;
pub mod scope;
pub mod types;

pub use middleware::describe_routes;
pub use render::{DescribeOptions, RenderError, RenderFn, RenderFormat};
pub use scope::{normalize_pattern, resolve, segments, RequestScope};
pub use types::{RouteInfo, RouteList};
