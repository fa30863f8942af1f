//! HTTP server rendering pages on request

use anyhow::Result;
use axum::{
    body::Body,
    extract::{Path, Query, State},
    http::{Request, StatusCode},
    response::{Html, IntoResponse, Response},
    routing::get,
    Router,
};
use serde::Deserialize;
use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::pages::{PageError, Pages};
use crate::templates::TemplateRenderer;
use crate::Site;

/// Server state
struct ServerState {
    pages: Pages,
    public_dir: PathBuf,
}

/// Query string of the article list
#[derive(Debug, Deserialize)]
struct BlogParams {
    page: Option<String>,
}

impl BlogParams {
    /// Requested page; anything unparsable is the first page
    fn page(&self) -> u32 {
        self.page
            .as_deref()
            .and_then(|page| page.trim().parse().ok())
            .unwrap_or(1)
    }
}

/// Start the server
pub async fn start(site: &Site, ip: &str, port: u16) -> Result<()> {
    let pages = Pages::new(site.queries(), TemplateRenderer::new()?, site.config.clone());
    let app = router(pages, site.public_dir.clone());

    // Parse address - handle "localhost" specially
    let bind_ip = if ip == "localhost" { "127.0.0.1" } else { ip };
    let addr: SocketAddr = format!("{}:{}", bind_ip, port).parse()?;

    println!("Server running at http://{}:{}", ip, port);
    println!("Reading posts from {}", site.config.backend_url);
    println!("Press Ctrl+C to stop.");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// Build the application router
pub fn router(pages: Pages, public_dir: PathBuf) -> Router {
    let state = Arc::new(ServerState { pages, public_dir });

    Router::new()
        .route("/", get(home_handler))
        .route("/blog", get(blog_handler))
        .route("/blog/:id", get(post_handler))
        .fallback(fallback_handler)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn home_handler(State(state): State<Arc<ServerState>>) -> Response {
    respond(&state.pages, "/", state.pages.home().await)
}

async fn blog_handler(
    State(state): State<Arc<ServerState>>,
    Query(params): Query<BlogParams>,
) -> Response {
    respond(&state.pages, "/blog", state.pages.blog(params.page()).await)
}

async fn post_handler(
    State(state): State<Arc<ServerState>>,
    Path(id): Path<String>,
) -> Response {
    let path = format!("/blog/{}", id);
    respond(&state.pages, &path, state.pages.post(&id).await)
}

/// Fallback handler that serves static files or the 404 page
async fn fallback_handler(
    State(state): State<Arc<ServerState>>,
    request: Request<Body>,
) -> Response {
    let path = request.uri().path().to_string();

    let mut service = ServeDir::new(&state.public_dir);
    match service.try_call(request).await {
        Ok(response) if response.status() != StatusCode::NOT_FOUND => response.into_response(),
        Ok(_) => respond(&state.pages, &path, Err(PageError::NotFound)),
        Err(_) => (StatusCode::INTERNAL_SERVER_ERROR, "Server error").into_response(),
    }
}

fn respond(pages: &Pages, path: &str, result: Result<String, PageError>) -> Response {
    match result {
        Ok(html) => Html(html).into_response(),
        Err(err) => {
            let (status, body) = pages.failure(&err, path);
            (status, Html(body)).into_response()
        }
    }
}
