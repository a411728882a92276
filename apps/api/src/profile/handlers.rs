//! Axum route handlers for the profile endpoints. Every write recomputes the
//! completion score from the merged field set before persisting.

use axum::{extract::State, http::StatusCode, Json};
use tracing::info;
use uuid::Uuid;

use crate::auth::extractor::AuthUser;
use crate::errors::AppError;
use crate::models::profile::ProfileRow;
use crate::profile::completion::{calculate_profile_completion, ProfileFields};
use crate::state::AppState;

const SELECT_BY_USER: &str = "SELECT * FROM user_profiles WHERE user_id = $1";

const UPDATE_PROFILE: &str = r#"
    UPDATE user_profiles SET
        full_name = $2, email = $3, education_level = $4, "current_role" = $5,
        location = $6, skills = $7, interests = $8, bio = $9, linkedin = $10,
        portfolio = $11, profile_completion = $12, updated_at = now()
    WHERE user_id = $1
    RETURNING *
"#;

const INSERT_PROFILE: &str = r#"
    INSERT INTO user_profiles
        (id, user_id, full_name, email, education_level, "current_role",
         location, skills, interests, bio, linkedin, portfolio, profile_completion)
    VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13)
    RETURNING *
"#;

/// GET /api/profile
pub async fn handle_get_profile(
    State(state): State<AppState>,
    AuthUser(user): AuthUser,
) -> Result<Json<ProfileRow>, AppError> {
    let profile = sqlx::query_as::<_, ProfileRow>(SELECT_BY_USER)
        .bind(user.id)
        .fetch_optional(&state.db)
        .await?
        .ok_or_else(|| AppError::NotFound("Profile not found".to_string()))?;
    Ok(Json(profile))
}

/// POST /api/profile
///
/// Creates the profile on first write, updates it afterwards.
pub async fn handle_upsert_profile(
    State(state): State<AppState>,
    AuthUser(user): AuthUser,
    Json(request): Json<ProfileFields>,
) -> Result<(StatusCode, Json<ProfileRow>), AppError> {
    let existing = sqlx::query_as::<_, ProfileRow>(SELECT_BY_USER)
        .bind(user.id)
        .fetch_optional(&state.db)
        .await?;

    let profile = match existing {
        Some(row) => write_merged(&state, &row, &request).await?,
        None => {
            let completion = calculate_profile_completion(&request);
            let row = sqlx::query_as::<_, ProfileRow>(INSERT_PROFILE)
                .bind(Uuid::new_v4())
                .bind(user.id)
                .bind(&request.full_name)
                .bind(&request.email)
                .bind(&request.education_level)
                .bind(&request.current_role)
                .bind(&request.location)
                .bind(&request.skills)
                .bind(&request.interests)
                .bind(&request.bio)
                .bind(&request.linkedin)
                .bind(&request.portfolio)
                .bind(completion)
                .fetch_one(&state.db)
                .await?;
            info!("Created profile for user {} ({completion}% complete)", user.id);
            row
        }
    };

    Ok((StatusCode::CREATED, Json(profile)))
}

/// PUT /api/profile
///
/// Update only; 404 when the profile has never been created.
pub async fn handle_update_profile(
    State(state): State<AppState>,
    AuthUser(user): AuthUser,
    Json(request): Json<ProfileFields>,
) -> Result<Json<ProfileRow>, AppError> {
    let existing = sqlx::query_as::<_, ProfileRow>(SELECT_BY_USER)
        .bind(user.id)
        .fetch_optional(&state.db)
        .await?
        .ok_or_else(|| AppError::NotFound("Profile not found".to_string()))?;

    let profile = write_merged(&state, &existing, &request).await?;
    Ok(Json(profile))
}

async fn write_merged(
    state: &AppState,
    existing: &ProfileRow,
    request: &ProfileFields,
) -> Result<ProfileRow, AppError> {
    let merged = request.merged_over(existing);
    let completion = calculate_profile_completion(&merged);

    let row = sqlx::query_as::<_, ProfileRow>(UPDATE_PROFILE)
        .bind(existing.user_id)
        .bind(&merged.full_name)
        .bind(&merged.email)
        .bind(&merged.education_level)
        .bind(&merged.current_role)
        .bind(&merged.location)
        .bind(&merged.skills)
        .bind(&merged.interests)
        .bind(&merged.bio)
        .bind(&merged.linkedin)
        .bind(&merged.portfolio)
        .bind(completion)
        .fetch_one(&state.db)
        .await?;

    info!(
        "Updated profile for user {} ({completion}% complete)",
        existing.user_id
    );
    Ok(row)
}
