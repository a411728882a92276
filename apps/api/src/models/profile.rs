use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct ProfileRow {
    pub id: Uuid,
    pub user_id: Uuid,
    pub full_name: Option<String>,
    pub email: Option<String>,
    pub education_level: Option<String>,
    pub current_role: Option<String>,
    pub location: Option<String>,
    pub skills: Option<String>,
    pub interests: Option<String>,
    pub bio: Option<String>,
    pub linkedin: Option<String>,
    pub portfolio: Option<String>,
    pub profile_completion: f64,
    pub created_at: DateTime<Utc>,
    pub updated_at: Option<DateTime<Utc>>,
}
