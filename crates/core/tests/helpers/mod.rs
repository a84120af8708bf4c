//! Test harness for the HTTP data source.
//!
//! Serves fixture bodies from a local axum server bound to an ephemeral port,
//! so `HttpUserSource` is exercised end to end without external network.

use axum::http::{header, StatusCode};
use axum::routing::get;
use axum::Router;
use std::time::Duration;
use tokio::net::TcpListener;

pub const USERS_JSON: &str = include_str!("../fixtures/users.json");

pub struct DirectoryServer {
    pub base_url: String,
}

impl DirectoryServer {
    pub fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }
}

/// Start a server with `/users` (fixture), `/down` (503), `/html` (non-JSON), `/object`
/// and `/slow` (fixture after half a second) routes.
pub async fn spawn_directory_server() -> DirectoryServer {
    let app = Router::new()
        .route("/users", get(|| async { ([(header::CONTENT_TYPE, "application/json")], USERS_JSON) }))
        .route("/down", get(|| async { StatusCode::SERVICE_UNAVAILABLE }))
        .route("/html", get(|| async { "<html><body>maintenance</body></html>" }))
        .route(
            "/object",
            get(|| async {
                ([(header::CONTENT_TYPE, "application/json")], r#"{"name": "Leanne Graham"}"#)
            }),
        )
        .route(
            "/slow",
            get(|| async {
                tokio::time::sleep(Duration::from_millis(500)).await;
                ([(header::CONTENT_TYPE, "application/json")], USERS_JSON)
            }),
        );

    let listener = TcpListener::bind("127.0.0.1:0").await.expect("Failed to bind test server");
    let addr = listener.local_addr().expect("Failed to read local addr");
    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("Test server failed");
    });

    DirectoryServer { base_url: format!("http://{addr}") }
}

/// A URL nothing listens on.
pub async fn unreachable_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.expect("Failed to bind");
    let addr = listener.local_addr().expect("Failed to read local addr");
    drop(listener);
    format!("http://{addr}/users")
}
