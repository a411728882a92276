//! Axum route handlers for assessment storage. One assessment row per user,
//! overwritten on resubmission; the stored answers feed the scoring engine
//! unchanged.

use axum::{extract::State, http::StatusCode, Json};
use serde::Deserialize;
use serde_json::Value;
use tracing::info;
use uuid::Uuid;

use crate::auth::extractor::AuthUser;
use crate::errors::AppError;
use crate::models::assessment::AssessmentRow;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct AssessmentRequest {
    pub assessment_data: Value,
}

/// POST /api/assessment
pub async fn handle_submit_assessment(
    State(state): State<AppState>,
    AuthUser(user): AuthUser,
    Json(request): Json<AssessmentRequest>,
) -> Result<(StatusCode, Json<AssessmentRow>), AppError> {
    let existing = sqlx::query_as::<_, AssessmentRow>(
        "SELECT * FROM assessments WHERE user_id = $1",
    )
    .bind(user.id)
    .fetch_optional(&state.db)
    .await?;

    let assessment = match existing {
        Some(row) => {
            sqlx::query_as::<_, AssessmentRow>(
                r#"
                UPDATE assessments
                SET assessment_data = $2, completed = TRUE, updated_at = now()
                WHERE id = $1
                RETURNING *
                "#,
            )
            .bind(row.id)
            .bind(&request.assessment_data)
            .fetch_one(&state.db)
            .await?
        }
        None => {
            sqlx::query_as::<_, AssessmentRow>(
                r#"
                INSERT INTO assessments (id, user_id, assessment_data, completed)
                VALUES ($1, $2, $3, TRUE)
                RETURNING *
                "#,
            )
            .bind(Uuid::new_v4())
            .bind(user.id)
            .bind(&request.assessment_data)
            .fetch_one(&state.db)
            .await?
        }
    };

    info!("Stored assessment for user {}", user.id);
    Ok((StatusCode::CREATED, Json(assessment)))
}

/// GET /api/assessment
pub async fn handle_get_assessment(
    State(state): State<AppState>,
    AuthUser(user): AuthUser,
) -> Result<Json<AssessmentRow>, AppError> {
    let assessment = sqlx::query_as::<_, AssessmentRow>(
        "SELECT * FROM assessments WHERE user_id = $1",
    )
    .bind(user.id)
    .fetch_optional(&state.db)
    .await?
    .ok_or_else(|| AppError::NotFound("Assessment not found".to_string()))?;
    Ok(Json(assessment))
}
