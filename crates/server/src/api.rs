//! # Catalog API
//!
//! JSON endpoints mirroring the HTML views, versioned under `/api/v1`.

use axum::{
    body::Body,
    extract::{Path, State},
    http::{header, Response, StatusCode},
    response::IntoResponse,
    routing::get,
    Json, Router,
};
use serde::Serialize;
use utoipa::{OpenApi, ToSchema};

use patternbook_core::slugify;

use crate::SharedState;

/// One pattern in the list response
#[derive(Serialize, ToSchema)]
pub struct PatternSummary {
    pub name: String,
    pub slug: String,
    pub category: String,
}

/// Full pattern record
#[derive(Serialize, ToSchema)]
pub struct PatternResponse {
    pub name: String,
    pub slug: String,
    pub category: String,
    pub explanation: String,
    pub brief_code: String,
    pub simplest_code: String,
}

/// Category distribution
#[derive(Serialize, ToSchema)]
pub struct StatsResponse {
    pub creational: usize,
    pub structural: usize,
    pub behavioral: usize,
    pub total: usize,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ApiError {
    pub error: String,
}

pub fn catalog_routes() -> Router<SharedState> {
    Router::new()
        .route("/patterns", get(list_patterns))
        .route("/patterns/:slug", get(get_pattern))
        .route("/stats", get(get_stats))
        .route("/openapi.json", get(serve_openapi))
}

/// List every pattern in declaration order
#[utoipa::path(
    get,
    path = "/api/v1/patterns",
    tag = "patterns",
    responses(
        (status = 200, description = "All patterns in catalog order", body = [PatternSummary])
    )
)]
async fn list_patterns(State(state): State<SharedState>) -> Json<Vec<PatternSummary>> {
    let patterns = state
        .catalog
        .iter()
        .map(|record| PatternSummary {
            name: record.name.to_string(),
            slug: slugify(record.name),
            category: record.category.display_name().to_string(),
        })
        .collect();
    Json(patterns)
}

/// Fetch one pattern by slug
#[utoipa::path(
    get,
    path = "/api/v1/patterns/{slug}",
    tag = "patterns",
    params(("slug" = String, Path, description = "Slugified pattern name")),
    responses(
        (status = 200, description = "The matching pattern", body = PatternResponse),
        (status = 404, description = "No pattern matches the slug", body = ApiError)
    )
)]
async fn get_pattern(
    State(state): State<SharedState>,
    Path(slug): Path<String>,
) -> Result<Json<PatternResponse>, (StatusCode, Json<ApiError>)> {
    match state.catalog.resolve(&slug) {
        Some(record) => Ok(Json(PatternResponse {
            name: record.name.to_string(),
            slug: slugify(record.name),
            category: record.category.display_name().to_string(),
            explanation: record.explanation.to_string(),
            brief_code: record.brief_code.to_string(),
            simplest_code: record.simplest_code.to_string(),
        })),
        None => Err((
            StatusCode::NOT_FOUND,
            Json(ApiError {
                error: format!("no pattern matches slug `{slug}`"),
            }),
        )),
    }
}

/// Category distribution used by the overview chart
#[utoipa::path(
    get,
    path = "/api/v1/stats",
    tag = "patterns",
    responses(
        (status = 200, description = "Pattern counts per category", body = StatsResponse)
    )
)]
async fn get_stats(State(state): State<SharedState>) -> Json<StatsResponse> {
    let counts = state.catalog.category_counts();
    Json(StatsResponse {
        creational: counts[0].1,
        structural: counts[1].1,
        behavioral: counts[2].1,
        total: state.catalog.len(),
    })
}

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Patternbook API",
        version = "1.0.0",
        description = "JSON API for the interactive design patterns guide"
    ),
    paths(list_patterns, get_pattern, get_stats)
)]
struct ApiDoc;

async fn serve_openapi() -> impl IntoResponse {
    let spec = ApiDoc::openapi().to_json().unwrap_or_default();
    Response::builder()
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(spec))
        .unwrap()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::AppState;
    use patternbook_core::{Catalog, SpanHighlighter};
    use std::sync::Arc;

    fn test_state() -> SharedState {
        Arc::new(AppState {
            catalog: Catalog::builtin(),
            highlighter: Box::new(SpanHighlighter),
        })
    }

    #[tokio::test]
    async fn test_list_patterns_in_catalog_order() {
        let Json(patterns) = list_patterns(State(test_state())).await;
        assert_eq!(patterns.len(), 22);
        assert_eq!(patterns[0].name, "Abstract Factory");
        assert_eq!(patterns[0].slug, "abstract-factory");
        assert_eq!(patterns[0].category, "Creational");
    }

    #[tokio::test]
    async fn test_get_pattern_by_slug() {
        let result = get_pattern(State(test_state()), Path("decorator".to_string())).await;
        let Json(pattern) = result.expect("decorator exists");
        assert_eq!(pattern.name, "Decorator");
        assert_eq!(pattern.category, "Structural");
        assert!(!pattern.brief_code.is_empty());
        assert!(!pattern.simplest_code.is_empty());
    }

    #[tokio::test]
    async fn test_get_pattern_unknown_slug() {
        let result = get_pattern(State(test_state()), Path("nonexistent".to_string())).await;
        let (status, Json(error)) = result.err().expect("unknown slug is an error");
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert!(error.error.contains("nonexistent"));
    }

    #[tokio::test]
    async fn test_stats_sum_to_total() {
        let Json(stats) = get_stats(State(test_state())).await;
        assert_eq!(stats.total, 22);
        assert_eq!(
            stats.creational + stats.structural + stats.behavioral,
            stats.total
        );
    }

    #[test]
    fn test_openapi_spec_builds() {
        let spec = ApiDoc::openapi().to_json().unwrap();
        assert!(spec.contains("/api/v1/patterns"));
        assert!(spec.contains("/api/v1/stats"));
    }
}
