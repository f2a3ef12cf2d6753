//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! Description middleware and server produce:
//!     → logging.rs (structured log events via tracing)
//!     → metrics.rs (request counters, route-count histogram)
//!
//! Consumers:
//!     → stdout (fmt layer)
//!     → Metrics endpoint (Prometheus scrape)
//! ```
//!
//! # Design Decisions
//! - Structured fields on every event, request ID included when present
//! - Metrics are no-ops until a recorder is installed

pub mod logging;
pub mod metrics;
