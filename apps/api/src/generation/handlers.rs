//! Axum route handlers for the Post Generation API.

use axum::{
    extract::{Path, State},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::generation::generator::{generate_posts, GenerateRequest, GenerateResponse};
use crate::generation::models::{count_words, Draft, PostStats, TemplateInfo, TemplateVariant, WordBand};
use crate::generation::random::request_rng;
use crate::generation::trending::known_categories;
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct NormalizeRequest {
    pub content: String,
    #[serde(default)]
    pub target_band: WordBand,
    #[serde(default)]
    pub seed: Option<u64>,
}

#[derive(Debug, Serialize)]
pub struct NormalizeResponse {
    pub content: String,
    pub original_word_count: usize,
    pub stats: PostStats,
    pub changed: bool,
}

#[derive(Debug, Serialize)]
pub struct TrendingResponse {
    pub category: String,
    pub topics: Vec<&'static str>,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// GET /api/v1/templates
///
/// Lists the eight template variants with their structure and intended use.
pub async fn handle_list_templates() -> Json<Vec<TemplateInfo>> {
    Json(TemplateVariant::ALL.iter().map(|v| v.info()).collect())
}

/// POST /api/v1/posts/generate
///
/// Compose → normalize for each variation. Rejects blank topic/category with 400.
pub async fn handle_generate(
    State(state): State<AppState>,
    Json(request): Json<GenerateRequest>,
) -> Result<Json<GenerateResponse>, AppError> {
    let response = generate_posts(
        request,
        state.trending.as_ref(),
        &state.normalizer,
        state.config.variations_per_request,
    )?;

    Ok(Json(response))
}

/// POST /api/v1/posts/normalize
///
/// Brings arbitrary post text into a word band. In-band text is returned as sent.
pub async fn handle_normalize(
    State(state): State<AppState>,
    Json(request): Json<NormalizeRequest>,
) -> Result<Json<NormalizeResponse>, AppError> {
    if request.content.trim().is_empty() {
        return Err(AppError::Validation("content cannot be empty".to_string()));
    }

    let mut rng = request_rng(request.seed);
    let content = state
        .normalizer
        .normalize_text(&request.content, request.target_band, &mut rng);
    let stats = Draft::parse(&content).stats();

    Ok(Json(NormalizeResponse {
        changed: content != request.content,
        original_word_count: count_words(&request.content),
        stats,
        content,
    }))
}

/// GET /api/v1/trending/:category
///
/// Returns today's rotated trending window for a category.
pub async fn handle_trending(
    State(state): State<AppState>,
    Path(category): Path<String>,
) -> Result<Json<TrendingResponse>, AppError> {
    let topics = state
        .trending
        .window(&category)
        .ok_or_else(|| {
            AppError::NotFound(format!(
                "No trending topics for category '{category}' (known: {})",
                known_categories().join(", ")
            ))
        })?;

    Ok(Json(TrendingResponse { category, topics }))
}
