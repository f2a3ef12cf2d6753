//! Shared utilities for integration tests.

use axum::{
    body::Body,
    http::{Method, Request, Response},
    Router,
};
use std::io;
use std::net::SocketAddr;
use std::sync::{Arc, Mutex};
use tokio::net::TcpListener;
use tokio::sync::oneshot;
use tower::ServiceExt;

use route_describer::describe::{RouteInfo, RouteList};
use route_describer::{HttpServer, ServerConfig};
use route_describer::routing::DescribedRouter;

/// Send one request through `router` without a network listener.
pub async fn send(router: &Router, method: Method, uri: &str) -> Response<Body> {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    router.clone().oneshot(request).await.unwrap()
}

pub async fn body_bytes(response: Response<Body>) -> Vec<u8> {
    axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap()
        .to_vec()
}

/// Issue `OPTIONS uri` and return the routes sorted by path.
#[allow(dead_code)]
pub async fn describe(router: &Router, uri: &str) -> RouteList {
    let response = send(router, Method::OPTIONS, uri).await;
    assert_eq!(response.status(), 200, "OPTIONS {} failed", uri);
    let mut routes: RouteList = serde_json::from_slice(&body_bytes(response).await).unwrap();
    routes.sort_by_path();
    routes
}

/// Build a sorted route list from `(method, path)` pairs.
#[allow(dead_code)]
pub fn routes(items: &[(&str, &str)]) -> RouteList {
    let mut list: RouteList = items.iter().map(|(m, p)| RouteInfo::new(*m, *p)).collect();
    list.sort_by_path();
    list
}

/// Formatted log output captured from a test-local subscriber.
#[allow(dead_code)]
#[derive(Clone, Default)]
pub struct LogBuffer(Arc<Mutex<Vec<u8>>>);

#[allow(dead_code)]
impl LogBuffer {
    pub fn contents(&self) -> String {
        String::from_utf8_lossy(&self.0.lock().unwrap()).into_owned()
    }

    /// Lines logged at ERROR level.
    pub fn errors(&self) -> Vec<String> {
        self.contents()
            .lines()
            .filter(|line| line.contains("ERROR"))
            .map(str::to_string)
            .collect()
    }
}

impl io::Write for LogBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Route all events on this thread into a buffer until the guard drops.
#[allow(dead_code)]
pub fn capture_logs() -> (LogBuffer, tracing::subscriber::DefaultGuard) {
    let buffer = LogBuffer::default();
    let writer = buffer.clone();
    let subscriber = tracing_subscriber::fmt()
        .with_writer(move || writer.clone())
        .with_ansi(false)
        .without_time()
        .with_max_level(tracing::Level::TRACE)
        .finish();
    (buffer, tracing::subscriber::set_default(subscriber))
}

/// A running server bound to an ephemeral local port.
#[allow(dead_code)]
pub struct TestServer {
    pub addr: SocketAddr,
    shutdown: Option<oneshot::Sender<()>>,
    handle: tokio::task::JoinHandle<()>,
}

#[allow(dead_code)]
impl TestServer {
    pub async fn start(config: ServerConfig, routes: DescribedRouter) -> Self {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let server = HttpServer::new(config, routes).unwrap();
        let (tx, rx) = oneshot::channel::<()>();

        let handle = tokio::spawn(async move {
            let _ = server
                .run_until(listener, async {
                    let _ = rx.await;
                })
                .await;
        });

        Self {
            addr,
            shutdown: Some(tx),
            handle,
        }
    }

    pub fn url(&self, path: &str) -> String {
        format!("http://{}{}", self.addr, path)
    }

    pub async fn stop(mut self) {
        if let Some(tx) = self.shutdown.take() {
            let _ = tx.send(());
        }
        let _ = self.handle.await;
    }
}
