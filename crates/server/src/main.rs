//! Patternbook Server
//!
//! Axum server for the design patterns guide: server-rendered HTML views
//! (overview, pattern list, pattern detail), a versioned JSON API, and
//! embedded static assets.

use axum::{
    body::Body,
    extract::{Path, State},
    http::{header, Response, StatusCode, Uri},
    response::{Html, IntoResponse},
    routing::get,
    Router,
};
use clap::{Parser, Subcommand};
use patternbook_core::{Catalog, Highlighter, PlainHighlighter, SpanHighlighter, View};
use rust_embed::RustEmbed;
use std::{net::SocketAddr, sync::Arc};
use tokio::net::TcpListener;

mod api;
mod pages;

/// Embedded static assets (stylesheet)
#[derive(RustEmbed)]
#[folder = "assets"]
struct Assets;

/// Application state
///
/// The catalog is built once at startup and never mutated, so handlers
/// share it read-only without locking.
pub struct AppState {
    catalog: Catalog,
    highlighter: Box<dyn Highlighter>,
}

pub type SharedState = Arc<AppState>;

#[derive(Parser)]
#[command(name = "patternbook", about = "Interactive design patterns guide")]
struct Args {
    #[command(subcommand)]
    command: Option<CliCommand>,
}

#[derive(Subcommand, Clone)]
enum CliCommand {
    /// Start the Patternbook server (default)
    Serve {
        /// Port to listen on
        #[arg(short, long, default_value = "8080")]
        port: u16,
        /// Render code samples without token highlighting
        #[arg(long)]
        plain_code: bool,
    },
}

// === HTML Handlers ===

/// Overview page: intro copy and the category distribution chart
async fn overview(State(state): State<SharedState>) -> Html<String> {
    Html(pages::overview_page(&state.catalog))
}

/// Full pattern list
async fn patterns_index(State(state): State<SharedState>) -> Html<String> {
    Html(pages::list_page(&state.catalog))
}

/// Detail page for one pattern, or a 404 page for unknown slugs
async fn pattern_detail(
    State(state): State<SharedState>,
    Path(slug): Path<String>,
) -> axum::response::Response {
    match View::for_slug(&state.catalog, Some(&slug)) {
        View::Detail(record) => Html(pages::detail_page(
            &state.catalog,
            record,
            state.highlighter.as_ref(),
        ))
        .into_response(),
        _ => (
            StatusCode::NOT_FOUND,
            Html(pages::not_found_page(&state.catalog)),
        )
            .into_response(),
    }
}

// === Static File Serving ===

async fn serve_static(State(state): State<SharedState>, uri: Uri) -> impl IntoResponse {
    let path = uri.path().trim_start_matches('/');

    if let Some(file) = Assets::get(path) {
        let mime = mime_guess::from_path(path).first_or_octet_stream();
        return Response::builder()
            .status(StatusCode::OK)
            .header(header::CONTENT_TYPE, mime.as_ref())
            .body(Body::from(file.data.to_vec()))
            .unwrap();
    }

    // Server-rendered app, no SPA fallback: anything unknown is a 404 page
    Response::builder()
        .status(StatusCode::NOT_FOUND)
        .header(header::CONTENT_TYPE, "text/html; charset=utf-8")
        .body(Body::from(pages::not_found_page(&state.catalog)))
        .unwrap()
}

// === Server Entry ===

fn build_router(state: SharedState) -> Router {
    Router::new()
        .route("/", get(overview))
        .route("/patterns", get(patterns_index))
        .route("/patterns/:slug", get(pattern_detail))
        .nest("/api/v1", api::catalog_routes())
        .fallback(get(serve_static))
        .with_state(state)
}

pub async fn run_server() -> anyhow::Result<()> {
    let args = Args::parse();

    let (server_port, plain_code) = match args.command {
        Some(CliCommand::Serve { port, plain_code }) => (port, plain_code),
        None => (8080, false),
    };

    let catalog = Catalog::builtin();
    catalog
        .verify()
        .map_err(|e| anyhow::anyhow!("catalog integrity check failed: {e}"))?;

    let highlighter: Box<dyn Highlighter> = if plain_code {
        Box::new(PlainHighlighter)
    } else {
        Box::new(SpanHighlighter)
    };

    let state: SharedState = Arc::new(AppState {
        catalog,
        highlighter,
    });
    let app = build_router(state);

    let addr = SocketAddr::from(([127, 0, 0, 1], server_port));
    println!("Patternbook running at http://{}", addr);
    println!("   Pages:  /  /patterns  /patterns/{{slug}}");
    println!("   API v1: /api/v1/patterns  /api/v1/patterns/{{slug}}  /api/v1/stats");
    println!("   Docs:   /api/v1/openapi.json");

    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    run_server().await
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::to_bytes;

    fn test_state() -> SharedState {
        Arc::new(AppState {
            catalog: Catalog::builtin(),
            highlighter: Box::new(SpanHighlighter),
        })
    }

    async fn body_text(response: axum::response::Response) -> String {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    #[tokio::test]
    async fn test_overview_lists_every_pattern() {
        let state = test_state();
        let Html(html) = overview(State(state.clone())).await;
        for record in state.catalog.iter() {
            assert!(html.contains(record.name), "missing {}", record.name);
        }
        assert!(html.contains("Design Patterns Overview"));
    }

    #[tokio::test]
    async fn test_detail_route_known_slug() {
        let response = pattern_detail(
            State(test_state()),
            Path("abstract-factory".to_string()),
        )
        .await;
        assert_eq!(response.status(), StatusCode::OK);
        let html = body_text(response).await;
        assert!(html.contains("Abstract Factory"));
        assert!(html.contains("Brief Code Example"));
    }

    #[tokio::test]
    async fn test_detail_route_unknown_slug_is_404() {
        let response = pattern_detail(
            State(test_state()),
            Path("nonexistent-pattern".to_string()),
        )
        .await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        let html = body_text(response).await;
        assert!(html.contains("Pattern Not Found"));
    }

    #[tokio::test]
    async fn test_static_stylesheet_is_served() {
        let response = serve_static(State(test_state()), "/style.css".parse().unwrap())
            .await
            .into_response();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers().get(header::CONTENT_TYPE).unwrap(),
            "text/css"
        );
    }

    #[tokio::test]
    async fn test_unknown_path_is_404() {
        let response = serve_static(State(test_state()), "/no/such/path".parse().unwrap())
            .await
            .into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
