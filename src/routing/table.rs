//! Registered route storage and enumeration.
//!
//! # Responsibilities
//! - Hold every `(method, pattern)` pair registered on a router
//! - Enumerate them in registration order
//! - Travel with each request as the route-tree context
//!
//! # Design Decisions
//! - Immutable after construction (thread-safe without locks)
//! - Pull-style enumeration through `RouteWalker::walk`
//! - Patterns are stored verbatim: `{name}` placeholders and the `/*`
//!   mount marker are left for the resolver to interpret

use axum::http::Method;
use std::fmt;
use std::sync::Arc;

/// Marker inserted between a mount prefix and the mounted sub-router's paths.
pub const MOUNT_MARKER: &str = "/*";

/// One handler binding in the route tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegisteredRoute {
    pub method: Method,
    /// Absolute pattern from the tree root.
    pub pattern: String,
}

impl RegisteredRoute {
    pub fn new(method: Method, pattern: impl Into<String>) -> Self {
        Self {
            method,
            pattern: pattern.into(),
        }
    }
}

/// Read-only traversal over a populated route tree.
///
/// Implementations must yield every registered route, including routes
/// under mounted sub-routers, in a stable order. An empty tree yields nothing.
pub trait RouteWalker: Send + Sync {
    fn walk(&self) -> Box<dyn Iterator<Item = &RegisteredRoute> + '_>;
}

/// Route list recorded by [`DescribedRouter`](crate::routing::DescribedRouter).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RouteTable {
    routes: Vec<RegisteredRoute>,
}

impl RouteTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, route: RegisteredRoute) {
        self.routes.push(route);
    }

    pub fn len(&self) -> usize {
        self.routes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }
}

impl FromIterator<RegisteredRoute> for RouteTable {
    fn from_iter<I: IntoIterator<Item = RegisteredRoute>>(iter: I) -> Self {
        Self {
            routes: iter.into_iter().collect(),
        }
    }
}

impl RouteWalker for RouteTable {
    fn walk(&self) -> Box<dyn Iterator<Item = &RegisteredRoute> + '_> {
        Box::new(self.routes.iter())
    }
}

/// Route-tree context attached to requests handled by a described router.
///
/// The description middleware only answers when this extension is present.
#[derive(Clone)]
pub struct RouteContext {
    walker: Arc<dyn RouteWalker>,
}

impl RouteContext {
    pub fn new(walker: Arc<dyn RouteWalker>) -> Self {
        Self { walker }
    }

    pub fn walker(&self) -> &dyn RouteWalker {
        self.walker.as_ref()
    }
}

impl From<RouteTable> for RouteContext {
    fn from(table: RouteTable) -> Self {
        Self::new(Arc::new(table))
    }
}

impl fmt::Debug for RouteContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RouteContext")
            .field("routes", &self.walker.walk().count())
            .finish()
    }
}
