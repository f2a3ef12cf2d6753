//! Description request middleware.
//! Answers `OPTIONS` with the routes beneath the requested path.

use axum::{
    body::Body,
    extract::{Request, State},
    http::{header, Method, StatusCode},
    middleware::Next,
    response::{IntoResponse, Response},
};
use std::time::Instant;

use crate::describe::render::DescribeOptions;
use crate::describe::scope::resolve;
use crate::observability::metrics;
use crate::routing::RouteContext;

/// Intercepts description requests; every other request passes through.
///
/// A request is a description request when its method is `OPTIONS` and a
/// [`RouteContext`] is present in its extensions.
pub async fn describe_routes(
    State(options): State<DescribeOptions>,
    request: Request,
    next: Next,
) -> Response {
    if request.method() != Method::OPTIONS {
        return next.run(request).await;
    }
    let Some(context) = request.extensions().get::<RouteContext>() else {
        return next.run(request).await;
    };

    let start_time = Instant::now();
    let path = request.uri().path();
    let request_id = request
        .headers()
        .get("x-request-id")
        .and_then(|v| v.to_str().ok())
        .unwrap_or("unknown");

    let mut routes = resolve(path, context.walker());
    if options.sort_by_path {
        routes.sort_by_path();
    }

    tracing::debug!(
        request_id = %request_id,
        scope = %path,
        routes = routes.len(),
        "Describing routes"
    );

    match options.render(&routes) {
        Ok(body) => {
            metrics::record_description(StatusCode::OK.as_u16(), routes.len(), start_time);
            (
                StatusCode::OK,
                [(header::CONTENT_TYPE, options.content_type.clone())],
                Body::from(body),
            )
                .into_response()
        }
        Err(e) => {
            tracing::error!(
                request_id = %request_id,
                scope = %path,
                error = %e,
                "rendering OPTIONS description failed"
            );
            metrics::record_description(
                StatusCode::INTERNAL_SERVER_ERROR.as_u16(),
                routes.len(),
                start_time,
            );
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}
