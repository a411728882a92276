//! Axum route handlers for the recommendation endpoints. The scorer itself
//! is pure; persistence here upserts one row per (user, career title) so a
//! regenerated score overwrites rather than duplicates, and the `saved` flag
//! survives regeneration untouched.

use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde::Deserialize;
use serde_json::json;
use tracing::info;
use uuid::Uuid;

use crate::auth::extractor::AuthUser;
use crate::errors::AppError;
use crate::models::assessment::AssessmentRow;
use crate::models::recommendation::RecommendationRow;
use crate::state::AppState;

/// POST /api/recommendations/generate
pub async fn handle_generate(
    State(state): State<AppState>,
    AuthUser(user): AuthUser,
) -> Result<Json<Vec<RecommendationRow>>, AppError> {
    let assessment = sqlx::query_as::<_, AssessmentRow>(
        "SELECT * FROM assessments WHERE user_id = $1",
    )
    .bind(user.id)
    .fetch_optional(&state.db)
    .await?;

    let assessment = match assessment {
        Some(a) if a.completed => a,
        _ => {
            return Err(AppError::Validation(
                "Please complete the assessment first".to_string(),
            ))
        }
    };

    let results = state
        .match_scorer
        .recommend(&assessment.assessment_data)
        .await?;

    let mut saved_rows = Vec::with_capacity(results.len());
    for result in &results {
        let existing = sqlx::query_as::<_, RecommendationRow>(
            "SELECT * FROM recommendations WHERE user_id = $1 AND career_title = $2",
        )
        .bind(user.id)
        .bind(result.career.title)
        .fetch_optional(&state.db)
        .await?;

        let row = match existing {
            Some(row) => {
                sqlx::query_as::<_, RecommendationRow>(
                    r#"
                    UPDATE recommendations
                    SET match_percentage = $2, recommendation_data = $3
                    WHERE id = $1
                    RETURNING *
                    "#,
                )
                .bind(row.id)
                .bind(result.match_percentage)
                .bind(result.to_payload())
                .fetch_one(&state.db)
                .await?
            }
            None => {
                sqlx::query_as::<_, RecommendationRow>(
                    r#"
                    INSERT INTO recommendations
                        (id, user_id, career_title, match_percentage, recommendation_data)
                    VALUES ($1, $2, $3, $4, $5)
                    RETURNING *
                    "#,
                )
                .bind(Uuid::new_v4())
                .bind(user.id)
                .bind(result.career.title)
                .bind(result.match_percentage)
                .bind(result.to_payload())
                .fetch_one(&state.db)
                .await?
            }
        };
        saved_rows.push(row);
    }

    info!(
        "Generated {} recommendations for user {}",
        saved_rows.len(),
        user.id
    );
    Ok(Json(saved_rows))
}

/// GET /api/recommendations
pub async fn handle_list(
    State(state): State<AppState>,
    AuthUser(user): AuthUser,
) -> Result<Json<Vec<RecommendationRow>>, AppError> {
    let rows = sqlx::query_as::<_, RecommendationRow>(
        "SELECT * FROM recommendations WHERE user_id = $1 ORDER BY match_percentage DESC",
    )
    .bind(user.id)
    .fetch_all(&state.db)
    .await?;
    Ok(Json(rows))
}

#[derive(Debug, Deserialize)]
pub struct SaveParams {
    #[serde(default = "default_saved")]
    pub saved: bool,
}

fn default_saved() -> bool {
    true
}

/// PUT /api/recommendations/:id/save
pub async fn handle_toggle_saved(
    State(state): State<AppState>,
    AuthUser(user): AuthUser,
    Path(recommendation_id): Path<Uuid>,
    Query(params): Query<SaveParams>,
) -> Result<Json<serde_json::Value>, AppError> {
    let updated = sqlx::query(
        "UPDATE recommendations SET saved = $3 WHERE id = $1 AND user_id = $2",
    )
    .bind(recommendation_id)
    .bind(user.id)
    .bind(params.saved)
    .execute(&state.db)
    .await?;

    if updated.rows_affected() == 0 {
        return Err(AppError::NotFound("Recommendation not found".to_string()));
    }

    Ok(Json(json!({
        "message": "Recommendation updated",
        "saved": params.saved
    })))
}
