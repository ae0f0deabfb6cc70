//! Trending context: rotating per-category pools of "current topic" phrases.
//!
//! Rotation is deterministic: for a list of length `L` and day-of-year `D`
//! the window starts at `(D * ROTATION_STEP) mod L` and wraps to the front.

use chrono::{Datelike, Local};
use serde::{Deserialize, Serialize};

use crate::generation::random::{choose, RandomSource};

pub const ROTATION_STEP: usize = 2;
pub const WINDOW_SIZE: usize = 8;

const GENERAL: &[&str] = &[
    "AI automation in workplace",
    "Remote work productivity",
    "Sustainable business practices",
    "Mental health at work",
    "Skills-based hiring",
    "Digital transformation",
    "Employee retention",
    "Authentic leadership",
    "Work-life balance",
    "Diversity and inclusion",
    "Career development",
    "Professional networking",
    "Continuous learning",
    "Emotional intelligence",
    "Future of work",
];

const TECHNOLOGY: &[&str] = &[
    "AI ethics and deployment",
    "Quantum computing",
    "Cybersecurity trends",
    "Low-code platforms",
    "Cloud optimization",
    "DevOps practices",
    "API architecture",
    "Machine learning",
    "Data privacy",
    "Tech leadership",
];

const HEALTHCARE: &[&str] = &[
    "Telehealth expansion",
    "AI diagnostics",
    "Patient experience",
    "Healthcare innovation",
    "Digital therapeutics",
    "Health equity",
    "Medical technology",
    "Care coordination",
    "Health data",
    "Preventive care",
];

const FINANCE: &[&str] = &[
    "ESG investing",
    "Fintech innovation",
    "Digital payments",
    "Financial inclusion",
    "Blockchain technology",
    "RegTech solutions",
    "Investment strategies",
    "Risk management",
    "Banking transformation",
    "Wealth management",
];

const MARKETING: &[&str] = &[
    "Content marketing",
    "Social media strategy",
    "Brand authenticity",
    "Customer experience",
    "Marketing automation",
    "Influencer marketing",
    "Data-driven marketing",
    "Personalization",
    "Video marketing",
    "Community building",
];

const POOLS: &[(&str, &[&str])] = &[
    ("general", GENERAL),
    ("Technology", TECHNOLOGY),
    ("Healthcare", HEALTHCARE),
    ("Finance", FINANCE),
    ("Marketing", MARKETING),
];

/// The phrase chosen for one generation call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrendingContext {
    pub category: String,
    pub phrase: String,
}

/// Category names that have a trending pool.
pub fn known_categories() -> Vec<&'static str> {
    POOLS.iter().map(|(name, _)| *name).collect()
}

/// Case-insensitive lookup on the trimmed category label.
fn pool_for(category: &str) -> Option<&'static [&'static str]> {
    let wanted = category.trim();
    POOLS
        .iter()
        .find(|(name, _)| name.eq_ignore_ascii_case(wanted))
        .map(|(_, pool)| *pool)
}

/// Returns `min(size, L)` items starting at `(day_of_year * step) mod L`, wrapping.
pub fn rotation_window<'a>(
    list: &[&'a str],
    day_of_year: u32,
    step: usize,
    size: usize,
) -> Vec<&'a str> {
    if list.is_empty() {
        return Vec::new();
    }
    let len = list.len();
    let start = (day_of_year as usize).wrapping_mul(step) % len;
    (0..size.min(len)).map(|i| list[(start + i) % len]).collect()
}

// ────────────────────────────────────────────────────────────────────────────
// Providers
// ────────────────────────────────────────────────────────────────────────────

/// Source of trending phrases. Zero or one phrase per category.
pub trait TrendingProvider: Send + Sync {
    /// Today's rotated window for a category, `None` for unknown categories.
    fn window(&self, category: &str) -> Option<Vec<&'static str>>;

    /// Draws one phrase uniformly from the category's window.
    fn phrase(&self, category: &str, rng: &mut dyn RandomSource) -> Option<TrendingContext> {
        let window = self.window(category)?;
        let phrase = choose(rng, &window)?;
        Some(TrendingContext {
            category: category.trim().to_string(),
            phrase: (*phrase).to_string(),
        })
    }
}

/// Rotation pinned to a fixed day of the year.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RotatingTrends {
    day_of_year: u32,
}

impl RotatingTrends {
    pub fn new(day_of_year: u32) -> Self {
        Self { day_of_year }
    }

    pub fn today() -> Self {
        Self::new(Local::now().ordinal())
    }
}

impl TrendingProvider for RotatingTrends {
    fn window(&self, category: &str) -> Option<Vec<&'static str>> {
        pool_for(category)
            .map(|pool| rotation_window(pool, self.day_of_year, ROTATION_STEP, WINDOW_SIZE))
    }
}

/// Rotation that follows the local calendar, re-reading the date on every call.
#[derive(Debug, Clone, Copy, Default)]
pub struct CalendarTrends;

impl TrendingProvider for CalendarTrends {
    fn window(&self, category: &str) -> Option<Vec<&'static str>> {
        RotatingTrends::today().window(category)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generation::random::ScriptedSource;

    #[test]
    fn test_window_start_is_day_times_step_mod_len() {
        // 10 items, day 3 → start (3 * 2) % 10 = 6
        let window = rotation_window(TECHNOLOGY, 3, ROTATION_STEP, WINDOW_SIZE);
        assert_eq!(window.len(), 8);
        assert_eq!(window[0], "API architecture");
        assert_eq!(window[3], "Tech leadership");
        // Wraps to the start of the list
        assert_eq!(window[4], "AI ethics and deployment");
        assert_eq!(window[7], "Low-code platforms");
    }

    #[test]
    fn test_window_has_no_duplicates_when_list_is_short() {
        let list = ["a", "b", "c"];
        let window = rotation_window(&list, 5, ROTATION_STEP, WINDOW_SIZE);
        // start = 10 % 3 = 1
        assert_eq!(window, vec!["b", "c", "a"]);
    }

    #[test]
    fn test_empty_list_gives_empty_window() {
        assert!(rotation_window(&[], 100, ROTATION_STEP, WINDOW_SIZE).is_empty());
    }

    #[test]
    fn test_rotation_is_deterministic_for_a_day() {
        let trends = RotatingTrends::new(200);
        assert_eq!(trends.window("Finance"), trends.window("Finance"));
        assert_eq!(
            RotatingTrends::new(200).window("general"),
            RotatingTrends::new(200).window("general")
        );
    }

    #[test]
    fn test_different_days_rotate() {
        let a = RotatingTrends::new(1).window("Healthcare").unwrap();
        let b = RotatingTrends::new(2).window("Healthcare").unwrap();
        assert_ne!(a[0], b[0]);
    }

    #[test]
    fn test_category_lookup_is_case_insensitive() {
        let trends = RotatingTrends::new(10);
        assert_eq!(trends.window(" marketing "), trends.window("Marketing"));
    }

    #[test]
    fn test_unknown_category_has_no_phrase() {
        let trends = RotatingTrends::new(10);
        let mut rng = ScriptedSource::first();
        assert!(trends.window("Agriculture").is_none());
        assert!(trends.phrase("Agriculture", &mut rng).is_none());
    }

    #[test]
    fn test_phrase_is_drawn_from_window() {
        let trends = RotatingTrends::new(45);
        let mut rng = ScriptedSource::new(vec![2]);
        let ctx = trends.phrase("Technology", &mut rng).unwrap();
        let window = trends.window("Technology").unwrap();
        assert_eq!(ctx.phrase, window[2]);
        assert_eq!(ctx.category, "Technology");
    }

    #[test]
    fn test_known_categories_include_general() {
        let names = known_categories();
        assert!(names.contains(&"general"));
        assert_eq!(names.len(), 5);
    }
}
