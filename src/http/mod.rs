//! HTTP protocol handling subsystem.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (Axum setup, tracing, request ID, timeout)
//!     → described router (RouteContext + description middleware)
//!     → OPTIONS: route description / otherwise: registered handler
//! ```

pub mod demo;
pub mod server;

pub use server::{HttpServer, ServerError};
