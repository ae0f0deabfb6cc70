use std::sync::Arc;

use crate::config::Config;
use crate::generation::normalizer::Normalizer;
use crate::generation::trending::TrendingProvider;

/// Shared application state injected into all route handlers via Axum extractors.
///
/// Holds no random generator: each request builds its own.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub normalizer: Normalizer,
    /// Pluggable trending-phrase source. Default: CalendarTrends (rotates with the local date).
    pub trending: Arc<dyn TrendingProvider>,
}
