//! Template Composer: fills a variant's role sequence to build an unnormalized draft.
//!
//! Output shape: content blocks in role order, then exactly one hashtag block
//! `#<category> #<topic> #<tag> #<tag>`. No I/O; the only failure is a bad parameter.

use thiserror::Error;

use crate::generation::models::{Draft, GenerationParameters};
use crate::generation::random::{choose, RandomSource};
use crate::generation::templates::{shape, Phrasing, RoleSpec};
use crate::generation::tone::pick_emoji;
use crate::generation::trending::TrendingContext;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ComposeError {
    #[error("{field} {reason}")]
    InvalidParameter { field: &'static str, reason: String },
}

/// Placeholder values for one generation call.
struct Slots<'a> {
    topic: &'a str,
    category: &'a str,
    category_lower: String,
    trend: Option<String>,
    emoji: &'a str,
}

/// Checks topic and category without generating anything.
pub fn validate(params: &GenerationParameters) -> Result<(), ComposeError> {
    check_label("topic", &params.topic)?;
    check_label("category", &params.category)?;
    Ok(())
}

/// Builds a draft from the parameters.
///
/// `trending` is consulted only when `use_trending_context` is set; without it the
/// variant's fallback clause is used instead.
pub fn compose(
    params: &GenerationParameters,
    trending: Option<&TrendingContext>,
    rng: &mut dyn RandomSource,
) -> Result<Draft, ComposeError> {
    let topic = check_label("topic", &params.topic)?;
    let category = check_label("category", &params.category)?;

    let emoji = pick_emoji(params.tone, params.include_emoji, rng);
    let trend = trending
        .filter(|_| params.use_trending_context)
        .map(|t| t.phrase.trim().to_lowercase())
        .filter(|t| !t.is_empty());

    let slots = Slots {
        topic,
        category,
        category_lower: category.to_lowercase(),
        trend,
        emoji,
    };

    let template = shape(params.template_variant);

    let mut blocks: Vec<String> = template
        .blocks
        .iter()
        .map(|block| {
            block
                .roles
                .iter()
                .map(|role| render_role(role, &slots, rng))
                .filter(|text| !text.is_empty())
                .collect::<Vec<_>>()
                .join(" ")
        })
        .collect();

    blocks.push(hashtag_line(category, topic, template.tags));

    Ok(Draft::from_blocks(blocks))
}

/// `#<category> #<topic> #<tag1> #<tag2>` with whitespace removed from each label.
pub fn hashtag_line(category: &str, topic: &str, tags: [&str; 2]) -> String {
    [category, topic, tags[0], tags[1]]
        .iter()
        .map(|label| format!("#{}", strip_whitespace(label)))
        .collect::<Vec<_>>()
        .join(" ")
}

// ────────────────────────────────────────────────────────────────────────────
// Internal helpers
// ────────────────────────────────────────────────────────────────────────────

fn check_label<'a>(field: &'static str, value: &'a str) -> Result<&'a str, ComposeError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(ComposeError::InvalidParameter {
            field,
            reason: "must not be empty".to_string(),
        });
    }
    // A `#` token would turn a content block into a second hashtag block.
    if trimmed.split_whitespace().any(|token| token.starts_with('#')) {
        return Err(ComposeError::InvalidParameter {
            field,
            reason: "must not contain hashtags".to_string(),
        });
    }
    Ok(trimmed)
}

fn strip_whitespace(text: &str) -> String {
    text.chars().filter(|c| !c.is_whitespace()).collect()
}

fn render_role(spec: &RoleSpec, slots: &Slots<'_>, rng: &mut dyn RandomSource) -> String {
    match spec.phrasing {
        Phrasing::Fixed(text) => fill(text, slots),
        Phrasing::OneOf(options) => fill(choose(rng, options).copied().unwrap_or_default(), slots),
        Phrasing::Trending {
            with_trend,
            fallback,
        } => {
            if slots.trend.is_some() {
                fill(with_trend, slots)
            } else {
                fill(fallback, slots)
            }
        }
        Phrasing::Bulleted(items) => {
            let marker = if slots.emoji.is_empty() {
                "•"
            } else {
                slots.emoji
            };
            items
                .iter()
                .map(|item| format!("{marker} {}", fill(item, slots)))
                .collect::<Vec<_>>()
                .join("\n")
        }
        Phrasing::Numbered(items) => items
            .iter()
            .enumerate()
            .map(|(i, item)| {
                let marker = if slots.emoji.is_empty() {
                    "."
                } else {
                    slots.emoji
                };
                format!("{}{marker} {}", i + 1, fill(item, slots))
            })
            .collect::<Vec<_>>()
            .join("\n"),
    }
}

/// Substitutes placeholders, then collapses whitespace so an empty emoji leaves
/// no leading, trailing, or doubled spaces.
fn fill(template: &str, slots: &Slots<'_>) -> String {
    let filled = template
        .replace("{topic}", slots.topic)
        .replace("{category_lower}", &slots.category_lower)
        .replace("{category}", slots.category)
        .replace("{trend}", slots.trend.as_deref().unwrap_or_default())
        .replace("{emoji}", slots.emoji);
    filled.split_whitespace().collect::<Vec<_>>().join(" ")
}
