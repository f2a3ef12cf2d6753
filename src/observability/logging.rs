//! Structured logging.
//!
//! # Responsibilities
//! - Initialize the tracing subscriber
//! - Resolve the log filter from environment or configuration
//!
//! # Design Decisions
//! - `RUST_LOG` wins over the configured level
//! - Configured level applies to this crate and tower_http

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Filter directive used when `RUST_LOG` is unset.
pub fn default_directive(log_level: &str) -> String {
    format!("route_describer={level},tower_http={level}", level = log_level)
}

/// Install the global subscriber. Call once at process start.
pub fn init_tracing(log_level: &str) {
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_directive(log_level).into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();
}
