//! Configuration schema definitions.
//!
//! All types derive Serde traits for deserialization from config files.

use axum::http::HeaderValue;
use serde::{Deserialize, Serialize};

use crate::describe::{DescribeOptions, RenderFormat};

/// Root configuration for the describing server.
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq)]
#[serde(default)]
pub struct ServerConfig {
    /// Listener configuration.
    pub listener: ListenerConfig,

    /// Timeout configuration.
    pub timeouts: TimeoutConfig,

    /// How description requests are answered.
    pub describe: DescribeConfig,

    /// Observability settings.
    pub observability: ObservabilityConfig,
}

/// Listener configuration.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct ListenerConfig {
    /// Bind address (e.g., "0.0.0.0:8080").
    pub bind_address: String,
}

impl Default for ListenerConfig {
    fn default() -> Self {
        Self {
            bind_address: "0.0.0.0:8080".to_string(),
        }
    }
}

/// Timeout configuration.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct TimeoutConfig {
    /// Request timeout (total time for request/response) in seconds.
    pub request_secs: u64,
}

impl Default for TimeoutConfig {
    fn default() -> Self {
        Self { request_secs: 30 }
    }
}

/// Description response settings.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct DescribeConfig {
    /// Content-Type header of description responses.
    pub content_type: String,

    /// Body encoding.
    pub format: RenderFormat,

    /// Sort routes by path before rendering.
    pub sort_by_path: bool,
}

impl Default for DescribeConfig {
    fn default() -> Self {
        Self {
            content_type: "application/json".to_string(),
            format: RenderFormat::Json,
            sort_by_path: false,
        }
    }
}

impl DescribeConfig {
    /// Build middleware options. Fails only on a content type that is not a
    /// valid header value, which validation rejects beforehand.
    pub fn to_options(&self) -> Result<DescribeOptions, axum::http::header::InvalidHeaderValue> {
        Ok(DescribeOptions {
            content_type: HeaderValue::from_str(&self.content_type)?,
            render: self.format.render_fn(),
            sort_by_path: self.sort_by_path,
        })
    }
}

/// Observability configuration.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Log level (trace, debug, info, warn, error).
    pub log_level: String,

    /// Enable metrics endpoint.
    pub metrics_enabled: bool,

    /// Metrics endpoint bind address.
    pub metrics_address: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            metrics_enabled: false,
            metrics_address: "0.0.0.0:9090".to_string(),
        }
    }
}
