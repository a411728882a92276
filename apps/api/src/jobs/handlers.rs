//! Axum route handlers for job search and saved jobs.

use axum::{extract::State, http::StatusCode, Json};
use serde::Deserialize;
use serde_json::{json, Value};
use tracing::info;
use uuid::Uuid;

use crate::auth::extractor::AuthUser;
use crate::errors::AppError;
use crate::jobs::board::JobPosting;
use crate::jobs::search::{search_jobs, JobFilters};
use crate::models::job::SavedJobRow;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct JobSearchRequest {
    pub search_term: Option<String>,
    #[serde(flatten)]
    pub filters: JobFilters,
}

/// POST /api/jobs/search
pub async fn handle_search(
    AuthUser(_user): AuthUser,
    Json(request): Json<JobSearchRequest>,
) -> Json<Vec<&'static JobPosting>> {
    let jobs = search_jobs(request.search_term.as_deref(), &request.filters);
    Json(jobs)
}

/// POST /api/jobs/save
///
/// Persists the posting payload opaquely; a few display columns are lifted
/// out for listings.
pub async fn handle_save_job(
    State(state): State<AppState>,
    AuthUser(user): AuthUser,
    Json(job_data): Json<Value>,
) -> Result<(StatusCode, Json<Value>), AppError> {
    let field = |key: &str| {
        job_data
            .get(key)
            .and_then(|v| v.as_str())
            .map(|s| s.to_string())
    };

    sqlx::query(
        r#"
        INSERT INTO saved_jobs (id, user_id, job_title, company, location, salary, job_data)
        VALUES ($1, $2, $3, $4, $5, $6, $7)
        "#,
    )
    .bind(Uuid::new_v4())
    .bind(user.id)
    .bind(field("title").unwrap_or_default())
    .bind(field("company"))
    .bind(field("location"))
    .bind(field("salary"))
    .bind(&job_data)
    .execute(&state.db)
    .await?;

    info!("Saved job for user {}", user.id);
    Ok((
        StatusCode::CREATED,
        Json(json!({ "message": "Job saved successfully" })),
    ))
}

/// GET /api/jobs/saved
pub async fn handle_saved_jobs(
    State(state): State<AppState>,
    AuthUser(user): AuthUser,
) -> Result<Json<Vec<Value>>, AppError> {
    let rows = sqlx::query_as::<_, SavedJobRow>(
        "SELECT * FROM saved_jobs WHERE user_id = $1 ORDER BY created_at DESC",
    )
    .bind(user.id)
    .fetch_all(&state.db)
    .await?;

    Ok(Json(rows.into_iter().map(|r| r.job_data).collect()))
}
