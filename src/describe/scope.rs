//! Route scope resolution.
//!
//! # Responsibilities
//! - Split request paths and registered patterns into segments
//! - Collapse mount markers so mounted sub-routers are transparent
//! - Keep routes at or beneath the requested scope, re-rooted at `/`
//!
//! # Design Decisions
//! - The root path has zero segments; every other path drops exactly one
//!   leading `/` before splitting, so a trailing `/` is an empty last segment
//! - Matching is whole-segment: `/route/test` never matches `/route/test2`
//! - No deduplication and no ordering; callers sort if they need to

use crate::describe::types::{RouteInfo, RouteList};
use crate::routing::RouteWalker;

/// Split a path on `/`.
///
/// ```
/// use route_describer::describe::segments;
///
/// assert!(segments("/").is_empty());
/// assert_eq!(segments("/route/test"), vec!["route", "test"]);
/// assert_eq!(segments("/route/test/"), vec!["route", "test", ""]);
/// ```
pub fn segments(path: &str) -> Vec<&str> {
    if path == "/" {
        return Vec::new();
    }
    path.strip_prefix('/').unwrap_or(path).split('/').collect()
}

/// Replace every `/*/` mount marker with a plain separator.
pub fn normalize_pattern(pattern: &str) -> String {
    pattern.replace("/*/", "/")
}

/// The segments of one inbound description request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestScope<'a> {
    segments: Vec<&'a str>,
}

impl<'a> RequestScope<'a> {
    pub fn new(path: &'a str) -> Self {
        Self {
            segments: segments(path),
        }
    }

    pub fn depth(&self) -> usize {
        self.segments.len()
    }

    /// Path of `pattern` relative to this scope, or `None` when the pattern
    /// lies outside it.
    pub fn relativize(&self, pattern: &str) -> Option<String> {
        let normalized = normalize_pattern(pattern);
        let route = segments(&normalized);
        let depth = self.depth();

        if route.len() < depth {
            return None;
        }
        if route[..depth] != self.segments[..] {
            return None;
        }
        Some(format!("/{}", route[depth..].join("/")))
    }
}

/// Collect every route of `walker` at or beneath `path`.
pub fn resolve(path: &str, walker: &dyn RouteWalker) -> RouteList {
    let scope = RequestScope::new(path);
    walker
        .walk()
        .filter_map(|route| {
            scope
                .relativize(&route.pattern)
                .map(|relative| RouteInfo::new(route.method.as_str(), relative))
        })
        .collect()
}
