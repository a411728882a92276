//! Axum route handlers for signup, login, and the current-user endpoint.

use axum::{extract::State, http::StatusCode, Json};
use serde::{Deserialize, Serialize};
use tracing::info;
use uuid::Uuid;

use crate::auth::extractor::AuthUser;
use crate::auth::{jwt, password};
use crate::errors::AppError;
use crate::models::user::{UserRow, UserView};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct SignupRequest {
    pub email: String,
    pub name: String,
    pub password: String,
}

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Serialize)]
pub struct TokenResponse {
    pub access_token: String,
    pub token_type: String,
    pub user: UserView,
}

/// POST /api/auth/signup
pub async fn handle_signup(
    State(state): State<AppState>,
    Json(request): Json<SignupRequest>,
) -> Result<(StatusCode, Json<UserView>), AppError> {
    let email = request.email.trim().to_string();
    if email.is_empty() || !email.contains('@') {
        return Err(AppError::Validation("A valid email is required".to_string()));
    }
    if request.name.trim().is_empty() {
        return Err(AppError::Validation("Name cannot be empty".to_string()));
    }
    if request.password.is_empty() {
        return Err(AppError::Validation("Password cannot be empty".to_string()));
    }

    let existing = sqlx::query_as::<_, UserRow>("SELECT * FROM users WHERE email = $1")
        .bind(&email)
        .fetch_optional(&state.db)
        .await?;
    if existing.is_some() {
        return Err(AppError::Validation("Email already registered".to_string()));
    }

    let hashed_password = password::hash_password(&request.password)?;
    let user = sqlx::query_as::<_, UserRow>(
        r#"
        INSERT INTO users (id, email, name, hashed_password)
        VALUES ($1, $2, $3, $4)
        RETURNING *
        "#,
    )
    .bind(Uuid::new_v4())
    .bind(&email)
    .bind(request.name.trim())
    .bind(&hashed_password)
    .fetch_one(&state.db)
    .await?;

    info!("Created user {} ({})", user.id, user.email);
    Ok((StatusCode::CREATED, Json(UserView::from(&user))))
}

/// POST /api/auth/login
pub async fn handle_login(
    State(state): State<AppState>,
    Json(request): Json<LoginRequest>,
) -> Result<Json<TokenResponse>, AppError> {
    let user = sqlx::query_as::<_, UserRow>("SELECT * FROM users WHERE email = $1")
        .bind(request.email.trim())
        .fetch_optional(&state.db)
        .await?;

    let user = match user {
        Some(u) if password::verify_password(&request.password, &u.hashed_password) => u,
        _ => {
            tracing::warn!("Failed login attempt for {}", request.email);
            return Err(AppError::Unauthorized);
        }
    };

    let access_token = jwt::issue_token(
        &user.email,
        &state.config.jwt_secret,
        state.config.token_expiry_minutes,
    )?;

    Ok(Json(TokenResponse {
        access_token,
        token_type: "bearer".to_string(),
        user: UserView::from(&user),
    }))
}

/// GET /api/auth/me
pub async fn handle_me(AuthUser(user): AuthUser) -> Json<UserView> {
    Json(UserView::from(&user))
}
