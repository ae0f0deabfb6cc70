//! Length Normalizer: brings a draft's word count into a target band.
//!
//! One pass, three outcomes:
//! - InBand   → returned untouched
//! - TooLong  → content flattened and cut to `max - trim_margin` words, hashtag blocks re-appended
//! - TooShort → filler sentences inserted ahead of the hashtag block until `min` is reached
//!
//! Hashtag blocks are never edited, dropped, or moved ahead of content. Trimming does
//! not account for the hashtag words themselves, so a trimmed draft can still sit a
//! few words above `max` when the hashtag block is longer than the margin.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::generation::models::{count_words, is_hashtag_block, Draft, WordBand};
use crate::generation::random::{choose, RandomSource};

pub const DEFAULT_TRIM_MARGIN: usize = 10;
pub const DEFAULT_LARGE_DEFICIT: usize = 15;

/// Generic sentences used to pad short drafts.
pub const FILLER_SENTENCES: &[&str] = &[
    "This shift is happening across industries.",
    "The timing couldn't be better for professionals.",
    "Early adopters are seeing competitive advantages.",
    "Success requires strategic thinking and execution.",
    "The impact extends beyond just operational efficiency.",
];

// ────────────────────────────────────────────────────────────────────────────
// Types
// ────────────────────────────────────────────────────────────────────────────

/// Where a word count sits relative to a band.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LengthVerdict {
    InBand,
    TooLong { excess: usize },
    TooShort { deficit: usize },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct NormalizerSettings {
    /// Words held back below `max` when trimming.
    pub trim_margin: usize,
    /// Deficits above this get a new paragraph; smaller ones extend the last paragraph.
    pub large_deficit: usize,
}

impl Default for NormalizerSettings {
    fn default() -> Self {
        Self {
            trim_margin: DEFAULT_TRIM_MARGIN,
            large_deficit: DEFAULT_LARGE_DEFICIT,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Normalizer {
    settings: NormalizerSettings,
}

// ────────────────────────────────────────────────────────────────────────────
// Core functions
// ────────────────────────────────────────────────────────────────────────────

/// Classifies a word count against a band.
pub fn classify(word_count: usize, band: WordBand) -> LengthVerdict {
    let (min, max) = band.range();
    if word_count > max {
        LengthVerdict::TooLong {
            excess: word_count - max,
        }
    } else if word_count < min {
        LengthVerdict::TooShort {
            deficit: min - word_count,
        }
    } else {
        LengthVerdict::InBand
    }
}

impl Normalizer {
    pub fn new(settings: NormalizerSettings) -> Self {
        Self { settings }
    }

    /// Returns a draft whose word count lies in `band`, within the documented slack.
    pub fn normalize(&self, draft: Draft, band: WordBand, rng: &mut dyn RandomSource) -> Draft {
        let count = draft.word_count();
        match classify(count, band) {
            LengthVerdict::InBand => {
                debug!("Draft in band {:?} at {} words", band, count);
                draft
            }
            LengthVerdict::TooLong { excess } => {
                debug!(
                    "Draft too long for {:?}: {} words ({} over), trimming",
                    band, count, excess
                );
                self.trim(draft, band)
            }
            LengthVerdict::TooShort { deficit } => {
                debug!(
                    "Draft too short for {:?}: {} words ({} under), expanding",
                    band, count, deficit
                );
                self.expand(draft, band, rng)
            }
        }
    }

    /// Text-level entry point. In-band input comes back byte-for-byte.
    pub fn normalize_text(&self, text: &str, band: WordBand, rng: &mut dyn RandomSource) -> String {
        if band.contains(count_words(text)) {
            return text.to_string();
        }
        self.normalize(Draft::parse(text), band, rng).to_string()
    }

    /// Keeps the first `max - trim_margin` content words as one paragraph and
    /// re-appends every hashtag block unchanged.
    fn trim(&self, draft: Draft, band: WordBand) -> Draft {
        let keep = band.max().saturating_sub(self.settings.trim_margin);

        let (hashtag_blocks, content_blocks): (Vec<String>, Vec<String>) = draft
            .into_blocks()
            .into_iter()
            .partition(|b| is_hashtag_block(b));

        let content = content_blocks
            .iter()
            .flat_map(|b| b.split_whitespace())
            .take(keep)
            .collect::<Vec<_>>()
            .join(" ");

        let trimmed = Draft::from_blocks(std::iter::once(content).chain(hashtag_blocks));
        debug!("Trimmed draft to {} words", trimmed.word_count());
        trimmed
    }

    /// Inserts fillers until `min` is reached. Stops after the first filler that
    /// pushes the count past `max`.
    fn expand(&self, mut draft: Draft, band: WordBand, rng: &mut dyn RandomSource) -> Draft {
        let (min, max) = band.range();
        let mut count = draft.word_count();
        let mut inserted = 0usize;

        while count < min {
            let Some(filler) = choose(rng, FILLER_SENTENCES).copied() else {
                break;
            };

            if min - count > self.settings.large_deficit {
                draft.insert_before_hashtags(filler);
            } else {
                draft.push_trailing_content(filler);
            }

            count += count_words(filler);
            inserted += 1;

            if count > max {
                break;
            }
        }

        debug!("Expanded draft with {} filler sentences to {} words", inserted, count);
        draft
    }
}
