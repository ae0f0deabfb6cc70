//! Core data model for post generation: parameters, word bands, and the block-structured draft.

use std::fmt;

use serde::{Deserialize, Serialize};

// ────────────────────────────────────────────────────────────────────────────
// Generation parameters
// ────────────────────────────────────────────────────────────────────────────

/// Writing style of a post. Selects the emoji palette.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Tone {
    #[default]
    Professional,
    Conversational,
    Inspirational,
    Educational,
    Humorous,
    #[serde(rename = "Thought-provoking", alias = "ThoughtProvoking")]
    ThoughtProvoking,
}

/// One of the eight structural shapes a post can take.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TemplateVariant {
    #[default]
    Story,
    Insight,
    Tips,
    Question,
    Data,
    Opinion,
    Achievement,
    List,
}

/// Catalogue entry describing a template variant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TemplateInfo {
    pub variant: TemplateVariant,
    pub description: &'static str,
    pub structure: &'static str,
    pub best_for: &'static str,
}

impl TemplateVariant {
    pub const ALL: [TemplateVariant; 8] = [
        TemplateVariant::Story,
        TemplateVariant::Insight,
        TemplateVariant::Tips,
        TemplateVariant::Question,
        TemplateVariant::Data,
        TemplateVariant::Opinion,
        TemplateVariant::Achievement,
        TemplateVariant::List,
    ];

    pub fn info(self) -> TemplateInfo {
        let (description, structure, best_for) = match self {
            TemplateVariant::Story => (
                "Personal experience or anecdote",
                "Hook → Story → Lesson → Call-to-Action",
                "Building personal connection and relatability",
            ),
            TemplateVariant::Insight => (
                "Industry knowledge or observation",
                "Observation → Analysis → Implication → Discussion",
                "Establishing thought leadership",
            ),
            TemplateVariant::Tips => (
                "Actionable advice or how-to",
                "Problem → Solution → Steps → Outcome",
                "Providing practical value",
            ),
            TemplateVariant::Question => (
                "Engaging discussion starter",
                "Context → Question → Your Take → Open Discussion",
                "Community engagement and comments",
            ),
            TemplateVariant::Data => (
                "Statistics or research findings",
                "Statistic → Context → Analysis → Takeaway",
                "Building credibility with facts",
            ),
            TemplateVariant::Opinion => (
                "Thought-provoking viewpoint",
                "Statement → Evidence → Nuance → Discussion",
                "Generating engagement and debate",
            ),
            TemplateVariant::Achievement => (
                "Celebrating success or milestone",
                "Achievement → Journey → Lessons → Inspiration",
                "Personal branding and inspiration",
            ),
            TemplateVariant::List => (
                "Curated tips or insights",
                "Setup → Numbered Points → Summary → Engagement",
                "Easy consumption and sharing",
            ),
        };
        TemplateInfo {
            variant: self,
            description,
            structure,
            best_for,
        }
    }
}

/// Named inclusive word-count range a finished post must land in.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WordBand {
    #[serde(alias = "Short (50-100 words)")]
    Short,
    #[default]
    #[serde(alias = "Medium (100-200 words)")]
    Medium,
    #[serde(alias = "Long (200-300 words)")]
    Long,
}

impl WordBand {
    /// Inclusive `(min, max)` word counts.
    pub fn range(self) -> (usize, usize) {
        match self {
            WordBand::Short => (50, 100),
            WordBand::Medium => (100, 200),
            WordBand::Long => (200, 300),
        }
    }

    pub fn min(self) -> usize {
        self.range().0
    }

    pub fn max(self) -> usize {
        self.range().1
    }

    pub fn contains(self, word_count: usize) -> bool {
        let (min, max) = self.range();
        (min..=max).contains(&word_count)
    }

    pub fn label(self) -> &'static str {
        match self {
            WordBand::Short => "Short (50-100 words)",
            WordBand::Medium => "Medium (100-200 words)",
            WordBand::Long => "Long (200-300 words)",
        }
    }
}

/// Caller-supplied inputs for a single generation call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerationParameters {
    pub topic: String,
    /// Industry or domain label, e.g. "Technology".
    pub category: String,
    #[serde(default)]
    pub tone: Tone,
    #[serde(default)]
    pub template_variant: TemplateVariant,
    #[serde(default)]
    pub target_band: WordBand,
    #[serde(default = "default_include_emoji")]
    pub include_emoji: bool,
    #[serde(default)]
    pub use_trending_context: bool,
}

fn default_include_emoji() -> bool {
    true
}

// ────────────────────────────────────────────────────────────────────────────
// Draft
// ────────────────────────────────────────────────────────────────────────────

/// Whitespace-delimited word count, the only length measure used for posts.
pub fn count_words(text: &str) -> usize {
    text.split_whitespace().count()
}

/// True if any whitespace token in the block is a `#` tag.
pub fn is_hashtag_block(block: &str) -> bool {
    block.split_whitespace().any(|token| token.starts_with('#'))
}

/// Summary figures for a rendered post.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostStats {
    pub word_count: usize,
    pub character_count: usize,
    pub hashtag_count: usize,
    pub block_count: usize,
}

/// A post as an ordered list of blank-line-separated blocks.
///
/// A block may span several lines (a numbered list is one block). Blocks are
/// never empty and never contain blank lines.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Draft {
    blocks: Vec<String>,
}

impl Draft {
    /// Builds a draft from blocks, dropping any that are blank.
    pub fn from_blocks<I, S>(blocks: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            blocks: blocks
                .into_iter()
                .map(Into::into)
                .filter(|b| !b.trim().is_empty())
                .collect(),
        }
    }

    /// Splits serialized text into blocks on blank lines.
    pub fn parse(text: &str) -> Self {
        let mut blocks = Vec::new();
        let mut current: Vec<&str> = Vec::new();

        for line in text.lines() {
            if line.trim().is_empty() {
                if !current.is_empty() {
                    blocks.push(current.join("\n"));
                    current.clear();
                }
            } else {
                current.push(line.trim_end());
            }
        }
        if !current.is_empty() {
            blocks.push(current.join("\n"));
        }

        Self { blocks }
    }

    pub fn blocks(&self) -> &[String] {
        &self.blocks
    }

    pub fn into_blocks(self) -> Vec<String> {
        self.blocks
    }

    /// Word count of the serialized draft. Block separators are whitespace,
    /// so this is the sum over blocks.
    pub fn word_count(&self) -> usize {
        self.blocks.iter().map(|b| count_words(b)).sum()
    }

    /// Index of the first hashtag block, if any.
    pub fn hashtag_block_index(&self) -> Option<usize> {
        self.blocks.iter().position(|b| is_hashtag_block(b))
    }

    /// Every `#`-prefixed token, in order of appearance.
    pub fn hashtags(&self) -> Vec<&str> {
        self.blocks
            .iter()
            .flat_map(|b| b.split_whitespace())
            .filter(|token| token.starts_with('#'))
            .collect()
    }

    /// Inserts a new block directly before the first hashtag block, or at the end
    /// if the draft has none.
    pub fn insert_before_hashtags(&mut self, block: &str) {
        if block.trim().is_empty() {
            return;
        }
        let at = self.hashtag_block_index().unwrap_or(self.blocks.len());
        self.blocks.insert(at, block.to_string());
    }

    /// Adds a new block directly after the last content block. Existing blocks
    /// are left untouched; with no content block this is `insert_before_hashtags`.
    pub fn push_trailing_content(&mut self, block: &str) {
        if block.trim().is_empty() {
            return;
        }
        match self.blocks.iter().rposition(|b| !is_hashtag_block(b)) {
            Some(last) => self.blocks.insert(last + 1, block.to_string()),
            None => self.insert_before_hashtags(block),
        }
    }

    pub fn stats(&self) -> PostStats {
        PostStats {
            word_count: self.word_count(),
            character_count: self.to_string().chars().count(),
            hashtag_count: self.hashtags().len(),
            block_count: self.blocks.len(),
        }
    }
}

impl fmt::Display for Draft {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.blocks.join("\n\n"))
    }
}
