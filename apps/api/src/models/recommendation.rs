use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use sqlx::FromRow;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct RecommendationRow {
    pub id: Uuid,
    pub user_id: Uuid,
    pub career_title: String,
    pub match_percentage: f64,
    pub recommendation_data: Value,
    pub saved: bool,
    pub created_at: DateTime<Utc>,
}
