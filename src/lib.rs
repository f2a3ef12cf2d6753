//! Self-describing HTTP routing for axum.
//!
//! An `OPTIONS` request against any path of a router built with
//! [`DescribedRouter`] returns the routes reachable beneath that path,
//! relative to it.

pub mod config;
pub mod describe;
pub mod http;
pub mod observability;
pub mod routing;

pub use config::ServerConfig;
pub use describe::{DescribeOptions, RouteInfo, RouteList};
pub use http::HttpServer;
pub use routing::{DescribedRouter, RouteContext, RouteTable, RouteWalker};
