//! Encoding of description responses.
//!
//! # Responsibilities
//! - Pair a content type with a serialization function
//! - Provide the built-in JSON encodings
//!
//! # Design Decisions
//! - Options are immutable values captured by each middleware instance
//! - Render functions are shared behind `Arc` so options stay cheap to clone

use axum::http::HeaderValue;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;

use crate::describe::types::RouteList;

/// Failure to encode a route list.
#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    #[error("json encoding failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("{0}")]
    Custom(String),
}

/// Serializes a route list into a response body.
pub type RenderFn = Arc<dyn Fn(&RouteList) -> Result<Vec<u8>, RenderError> + Send + Sync>;

/// Built-in encodings selectable from configuration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum RenderFormat {
    #[default]
    Json,
    JsonPretty,
}

impl RenderFormat {
    pub fn render_fn(self) -> RenderFn {
        match self {
            RenderFormat::Json => Arc::new(render_json),
            RenderFormat::JsonPretty => Arc::new(render_json_pretty),
        }
    }
}

pub fn render_json(routes: &RouteList) -> Result<Vec<u8>, RenderError> {
    Ok(serde_json::to_vec(routes)?)
}

pub fn render_json_pretty(routes: &RouteList) -> Result<Vec<u8>, RenderError> {
    Ok(serde_json::to_vec_pretty(routes)?)
}

/// Content type and encoder used to answer description requests.
#[derive(Clone)]
pub struct DescribeOptions {
    pub content_type: HeaderValue,
    pub render: RenderFn,
    /// Sort routes by path before rendering.
    pub sort_by_path: bool,
}

impl DescribeOptions {
    pub fn new<F>(content_type: HeaderValue, render: F) -> Self
    where
        F: Fn(&RouteList) -> Result<Vec<u8>, RenderError> + Send + Sync + 'static,
    {
        Self {
            content_type,
            render: Arc::new(render),
            sort_by_path: false,
        }
    }

    pub fn with_sort_by_path(mut self, sort: bool) -> Self {
        self.sort_by_path = sort;
        self
    }

    /// Use the first supplied options, falling back to the JSON default.
    pub fn first_or_default<I>(options: I) -> Self
    where
        I: IntoIterator<Item = DescribeOptions>,
    {
        options.into_iter().next().unwrap_or_default()
    }

    pub fn render(&self, routes: &RouteList) -> Result<Vec<u8>, RenderError> {
        (self.render)(routes)
    }
}

impl Default for DescribeOptions {
    fn default() -> Self {
        Self {
            content_type: HeaderValue::from_static("application/json"),
            render: RenderFormat::Json.render_fn(),
            sort_by_path: false,
        }
    }
}

impl fmt::Debug for DescribeOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DescribeOptions")
            .field("content_type", &self.content_type)
            .field("sort_by_path", &self.sort_by_path)
            .finish_non_exhaustive()
    }
}
