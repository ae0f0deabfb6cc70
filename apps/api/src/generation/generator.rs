//! Post Generation: orchestrates the full generation pipeline.
//!
//! Flow: validate → resolve trending phrase (once per request) →
//!       for each variation: compose → normalize → stats → return response.
//!
//! Pure computation; nothing here touches the network or disk.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::info;
use uuid::Uuid;

use crate::errors::AppError;
use crate::generation::composer::{compose, validate};
use crate::generation::models::{Draft, GenerationParameters, PostStats};
use crate::generation::normalizer::Normalizer;
use crate::generation::random::request_rng;
use crate::generation::trending::{TrendingContext, TrendingProvider};

/// Upper bound on variations a single request may ask for.
pub const MAX_VARIATIONS: usize = 10;

// ────────────────────────────────────────────────────────────────────────────
// Data models
// ────────────────────────────────────────────────────────────────────────────

/// Request body for post generation.
#[derive(Debug, Clone, Deserialize)]
pub struct GenerateRequest {
    #[serde(flatten)]
    pub parameters: GenerationParameters,
    /// Fixes the random draws so the same request yields the same posts.
    #[serde(default)]
    pub seed: Option<u64>,
    /// Overrides the configured number of variations (1..=MAX_VARIATIONS).
    #[serde(default)]
    pub variations: Option<usize>,
}

/// One finished post.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratedPost {
    pub content: String,
    pub stats: PostStats,
    /// False only when normalization could not land exactly in the band
    /// (hashtag slack after trimming, or a final filler overshoot).
    pub within_band: bool,
}

/// Response from the generation pipeline.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerateResponse {
    pub generation_id: Uuid,
    pub generated_at: DateTime<Utc>,
    pub target_band: String,
    pub trending_context: Option<TrendingContext>,
    pub posts: Vec<GeneratedPost>,
}

// ────────────────────────────────────────────────────────────────────────────
// Generation pipeline
// ────────────────────────────────────────────────────────────────────────────

/// Generates `variations` independent posts for one set of parameters.
///
/// The trending phrase is drawn once and shared by every variation; phrasing,
/// emoji, and filler choices are drawn per variation from the request's own RNG.
pub fn generate_posts(
    request: GenerateRequest,
    trending: &dyn TrendingProvider,
    normalizer: &Normalizer,
    default_variations: usize,
) -> Result<GenerateResponse, AppError> {
    let params = request.parameters;
    validate(&params)?;

    let variations = request.variations.unwrap_or(default_variations);
    if variations == 0 || variations > MAX_VARIATIONS {
        return Err(AppError::Validation(format!(
            "variations must be between 1 and {MAX_VARIATIONS}"
        )));
    }

    let mut rng = request_rng(request.seed);

    let trending_context = if params.use_trending_context {
        trending.phrase(&params.category, &mut rng)
    } else {
        None
    };

    info!(
        "Generating {} {:?} posts on '{}' ({}), band={:?}, trending={:?}",
        variations,
        params.template_variant,
        params.topic.trim(),
        params.category.trim(),
        params.target_band,
        trending_context.as_ref().map(|t| t.phrase.as_str())
    );

    let mut posts = Vec::with_capacity(variations);
    for _ in 0..variations {
        let draft = compose(&params, trending_context.as_ref(), &mut rng)?;
        let normalized = normalizer.normalize(draft, params.target_band, &mut rng);
        posts.push(finish(normalized, &params));
    }

    Ok(GenerateResponse {
        generation_id: Uuid::new_v4(),
        generated_at: Utc::now(),
        target_band: params.target_band.label().to_string(),
        trending_context,
        posts,
    })
}

fn finish(draft: Draft, params: &GenerationParameters) -> GeneratedPost {
    let stats = draft.stats();
    GeneratedPost {
        content: draft.to_string(),
        within_band: params.target_band.contains(stats.word_count),
        stats,
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
