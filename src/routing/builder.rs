//! Router builder that records what it registers.
//!
//! # Responsibilities
//! - Register handlers on an axum `Router`
//! - Record every `(method, pattern)` pair into a `RouteTable`
//! - Flatten nested groups and mounted sub-routers into one route tree
//! - Wire the description middleware and route context around all routes
//!
//! # Design Decisions
//! - Handlers are served under their effective path, so the described
//!   surface and the served surface are the same
//! - Mounted sub-routers are recorded with the `/*` marker between prefix
//!   and inner path; nested groups are recorded without it
//! - Registration is infallible; the first error is reported by
//!   `into_router` so builder chains stay linear

use axum::{
    handler::Handler,
    http::{Method, StatusCode},
    middleware,
    routing::{on, MethodFilter, MethodRouter},
    Extension, Router,
};
use std::collections::HashSet;

use crate::describe::{describe_routes, DescribeOptions};
use crate::routing::table::{RegisteredRoute, RouteContext, RouteTable, MOUNT_MARKER};

/// Errors surfaced while assembling a described router.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RouterError {
    #[error("method {0} cannot be routed")]
    UnsupportedMethod(Method),

    #[error("route path {0:?} must start with '/'")]
    InvalidPath(String),

    #[error("prefix {0:?} must start with '/' and must not end with '/'")]
    InvalidPrefix(String),

    #[error("{method} {path} is registered more than once")]
    DuplicateRoute { method: Method, path: String },

    #[error("invalid route {path:?}: {reason}")]
    InvalidRoute { path: String, reason: String },
}

struct Entry<S> {
    method: Method,
    /// Pattern as reported to description requests.
    pattern: String,
    /// Path the handler is served under.
    path: String,
    endpoint: MethodRouter<S>,
}

/// Builder for an axum router whose routes can describe themselves.
///
/// ```
/// use route_describer::routing::{DescribedRouter, RouteWalker};
///
/// async fn hello() -> &'static str { "Hello world!" }
///
/// let inner = DescribedRouter::<()>::new().get("/inner", hello);
/// let router = DescribedRouter::<()>::new()
///     .get("/get", hello)
///     .mount("/test2", inner);
///
/// let table = router.table();
/// let patterns: Vec<_> = table.walk().map(|r| r.pattern.clone()).collect();
/// assert_eq!(patterns, vec!["/get", "/test2/*/inner"]);
/// ```
pub struct DescribedRouter<S = ()> {
    entries: Vec<Entry<S>>,
    error: Option<RouterError>,
}

impl<S> Default for DescribedRouter<S>
where
    S: Clone + Send + Sync + 'static,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<S> DescribedRouter<S>
where
    S: Clone + Send + Sync + 'static,
{
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
            error: None,
        }
    }

    pub fn get<H, T>(self, path: &str, handler: H) -> Self
    where
        H: Handler<T, S>,
        T: 'static,
    {
        self.register(Method::GET, MethodFilter::GET, path, handler)
    }

    pub fn post<H, T>(self, path: &str, handler: H) -> Self
    where
        H: Handler<T, S>,
        T: 'static,
    {
        self.register(Method::POST, MethodFilter::POST, path, handler)
    }

    pub fn put<H, T>(self, path: &str, handler: H) -> Self
    where
        H: Handler<T, S>,
        T: 'static,
    {
        self.register(Method::PUT, MethodFilter::PUT, path, handler)
    }

    pub fn patch<H, T>(self, path: &str, handler: H) -> Self
    where
        H: Handler<T, S>,
        T: 'static,
    {
        self.register(Method::PATCH, MethodFilter::PATCH, path, handler)
    }

    pub fn delete<H, T>(self, path: &str, handler: H) -> Self
    where
        H: Handler<T, S>,
        T: 'static,
    {
        self.register(Method::DELETE, MethodFilter::DELETE, path, handler)
    }

    pub fn head<H, T>(self, path: &str, handler: H) -> Self
    where
        H: Handler<T, S>,
        T: 'static,
    {
        self.register(Method::HEAD, MethodFilter::HEAD, path, handler)
    }

    /// Register a handler for an arbitrary method.
    ///
    /// Methods axum cannot filter on are reported by `into_router`.
    pub fn route<H, T>(self, method: Method, path: &str, handler: H) -> Self
    where
        H: Handler<T, S>,
        T: 'static,
    {
        match MethodFilter::try_from(method.clone()) {
            Ok(filter) => self.register(method, filter, path, handler),
            Err(_) => self.fail(RouterError::UnsupportedMethod(method)),
        }
    }

    /// Attach a group of routes under `prefix`, recorded as if declared inline.
    pub fn nest(self, prefix: &str, group: DescribedRouter<S>) -> Self {
        self.attach(prefix, group, false)
    }

    /// Attach a sub-router under `prefix`, recorded behind the mount marker.
    pub fn mount(self, prefix: &str, sub: DescribedRouter<S>) -> Self {
        self.attach(prefix, sub, true)
    }

    /// Snapshot of the recorded route tree.
    pub fn table(&self) -> RouteTable {
        self.entries
            .iter()
            .map(|e| RegisteredRoute::new(e.method.clone(), e.pattern.clone()))
            .collect()
    }

    /// Build the router with the default JSON description.
    pub fn into_router(self) -> Result<Router<S>, RouterError> {
        self.into_router_with(DescribeOptions::default())
    }

    /// Build the router, describing routes with `options`.
    pub fn into_router_with(self, options: DescribeOptions) -> Result<Router<S>, RouterError> {
        let context = RouteContext::from(self.table());
        let Self { entries, error } = self;
        if let Some(err) = error {
            return Err(err);
        }

        let mut seen = HashSet::new();
        let mut checked = HashSet::new();
        let mut paths = matchit::Router::new();
        let mut router = Router::new();

        for entry in entries {
            if !seen.insert((entry.method.clone(), entry.path.clone())) {
                return Err(RouterError::DuplicateRoute {
                    method: entry.method,
                    path: entry.path,
                });
            }
            // Methods on one path share a matchit node; check the path once.
            if checked.insert(entry.path.clone()) {
                check_path(&entry.path)?;
                paths
                    .insert(entry.path.as_str(), ())
                    .map_err(|e| RouterError::InvalidRoute {
                        path: entry.path.clone(),
                        reason: e.to_string(),
                    })?;
            }
            router = router.route(&entry.path, entry.endpoint);
        }

        tracing::debug!(routes = seen.len(), "Described router assembled");

        Ok(router
            .fallback(not_found)
            .layer(middleware::from_fn_with_state(options, describe_routes))
            .layer(Extension(context)))
    }

    fn register<H, T>(mut self, method: Method, filter: MethodFilter, path: &str, handler: H) -> Self
    where
        H: Handler<T, S>,
        T: 'static,
    {
        if !path.starts_with('/') {
            return self.fail(RouterError::InvalidPath(path.to_string()));
        }
        self.entries.push(Entry {
            method,
            pattern: path.to_string(),
            path: path.to_string(),
            endpoint: on(filter, handler),
        });
        self
    }

    fn attach(mut self, prefix: &str, sub: DescribedRouter<S>, mounted: bool) -> Self {
        if !prefix.starts_with('/') || prefix.ends_with('/') {
            return self.fail(RouterError::InvalidPrefix(prefix.to_string()));
        }
        if let Some(err) = sub.error {
            return self.fail(err);
        }

        let marker = if mounted { MOUNT_MARKER } else { "" };
        self.entries.extend(sub.entries.into_iter().map(|e| Entry {
            method: e.method,
            pattern: format!("{}{}{}", prefix, marker, e.pattern),
            path: format!("{}{}", prefix, e.path),
            endpoint: e.endpoint,
        }));
        self
    }

    fn fail(mut self, err: RouterError) -> Self {
        if self.error.is_none() {
            self.error = Some(err);
        }
        self
    }
}

/// Reject capture syntax axum 0.8 refuses to route.
fn check_path(path: &str) -> Result<(), RouterError> {
    match path
        .split('/')
        .find(|segment| segment.starts_with(':') || segment.starts_with('*'))
    {
        Some(segment) => Err(RouterError::InvalidRoute {
            path: path.to_string(),
            reason: format!(
                "segment {:?} uses old capture syntax, write `{{name}}` or `{{*name}}`",
                segment
            ),
        }),
        None => Ok(()),
    }
}

async fn not_found() -> StatusCode {
    StatusCode::NOT_FOUND
}
