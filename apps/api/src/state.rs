use std::sync::Arc;

use sqlx::PgPool;

use crate::config::Config;
use crate::recommend::scoring::MatchScorer;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub db: PgPool,
    pub config: Config,
    /// Pluggable match scorer. Default: the deterministic WeightedSumScorer.
    pub match_scorer: Arc<dyn MatchScorer>,
}
