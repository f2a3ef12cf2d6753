//! Routing subsystem.
//!
//! # Data Flow
//! ```text
//! Route registration (at startup):
//!     DescribedRouter::get/post/.../nest/mount
//!     → builder.rs (record (method, pattern), keep handler)
//!     → into_router: flat axum Router + RouteContext(RouteTable)
//!
//! Per request:
//!     RouteContext in extensions
//!     → table.rs (RouteWalker::walk over registered routes)
//! ```
//!
//! # Design Decisions
//! - Route table is immutable once the router is built
//! - Enumeration order is registration order
//! - Mount markers are recorded, not resolved, at this layer

pub mod builder;
pub mod table;

pub use builder::{DescribedRouter, RouterError};
pub use table::{RegisteredRoute, RouteContext, RouteTable, RouteWalker, MOUNT_MARKER};
