//! Local preview server for the generated site
//!
//! The article collection is compiled into the binary, so there is nothing
//! to watch; this is a plain static file server over the public directory.

use anyhow::Result;
use axum::{
    body::Body,
    extract::State,
    http::{Request, StatusCode},
    response::{Html, IntoResponse, Response},
    Router,
};
use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;
use tower_http::services::ServeDir;

use crate::Blog;

/// Server state
struct ServerState {
    public_dir: PathBuf,
}

/// Start the preview server
pub async fn start(blog: &Blog, ip: &str, port: u16) -> Result<()> {
    if !crate::generator::site_exists(&blog.public_dir) {
        tracing::warn!(
            "No generated site found in {:?}; run `modernblog generate` first",
            blog.public_dir
        );
    }

    let state = Arc::new(ServerState {
        public_dir: blog.public_dir.clone(),
    });

    let app = Router::new().fallback(fallback_handler).with_state(state);

    // Handle "localhost" specially
    let bind_ip = if ip == "localhost" { "127.0.0.1" } else { ip };
    let addr: SocketAddr = format!("{}:{}", bind_ip, port).parse()?;

    println!("Server running at http://{}:{}", ip, port);
    println!("Press Ctrl+C to stop.");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// Serve files from the public directory, resolving directory index pages
/// and falling back to the generated 404 page
async fn fallback_handler(
    State(state): State<Arc<ServerState>>,
    request: Request<Body>,
) -> Response {
    let path = request.uri().path().trim_start_matches('/');
    let candidate = state.public_dir.join(path);

    let exists = if candidate.is_dir() {
        candidate.join("index.html").exists()
    } else {
        candidate.exists()
    };

    if exists {
        let mut service = ServeDir::new(&state.public_dir).append_index_html_on_directories(true);
        match service.try_call(request).await {
            Ok(response) => response.into_response(),
            Err(_) => (StatusCode::INTERNAL_SERVER_ERROR, "Server error").into_response(),
        }
    } else {
        not_found(&state).await
    }
}

/// Render the generated 404 page, or a plain fallback when it is missing
async fn not_found(state: &ServerState) -> Response {
    match tokio::fs::read_to_string(state.public_dir.join("404.html")).await {
        Ok(content) => (StatusCode::NOT_FOUND, Html(content)).into_response(),
        Err(_) => (StatusCode::NOT_FOUND, "Not found").into_response(),
    }
}
