//! Tone calibration: maps a post tone to its emoji palette.
//!
//! One emoji is drawn per generation call and reused in every slot that asks for it.

use crate::generation::models::Tone;
use crate::generation::random::{choose, RandomSource};

/// Returns the emoji palette for a tone.
pub fn emoji_palette(tone: Tone) -> &'static [&'static str] {
    match tone {
        Tone::Professional => &["📊", "💼", "🎯", "📈", "⭐", "💡", "🔍"],
        Tone::Conversational => &["💬", "🤔", "👥", "💭", "🚀", "✨", "🌟"],
        Tone::Inspirational => &["✨", "🌟", "💪", "🔥", "🎉", "🌈", "⚡"],
        Tone::Educational => &["📚", "🧠", "💭", "🔍", "📖", "🎓", "💡"],
        Tone::Humorous => &["😄", "🤣", "😅", "🎭", "😊", "🙃", "😉"],
        Tone::ThoughtProvoking => &["🤯", "💭", "🧐", "⚡", "🔮", "🎯", "💫"],
    }
}

/// Draws the emoji for one generation call. Empty when emoji are disabled.
pub fn pick_emoji(tone: Tone, include_emoji: bool, rng: &mut dyn RandomSource) -> &'static str {
    if !include_emoji {
        return "";
    }
    choose(rng, emoji_palette(tone)).copied().unwrap_or_default()
}
