pub mod health;

use anyhow::{Context, Result};
use axum::{
    http::{header, HeaderValue, Method},
    routing::{get, post, put},
    Router,
};
use tower_http::cors::{AllowOrigin, CorsLayer};

use crate::state::AppState;
use crate::{assessment, auth, jobs, profile, recommend, trends};

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(health::root_handler))
        .route("/api/health", get(health::health_handler))
        .route("/api/database/test", get(health::db_test_handler))
        // Authentication
        .route("/api/auth/signup", post(auth::handlers::handle_signup))
        .route("/api/auth/login", post(auth::handlers::handle_login))
        .route("/api/auth/me", get(auth::handlers::handle_me))
        // Profile
        .route(
            "/api/profile",
            get(profile::handlers::handle_get_profile)
                .post(profile::handlers::handle_upsert_profile)
                .put(profile::handlers::handle_update_profile),
        )
        // Assessment
        .route(
            "/api/assessment",
            post(assessment::handlers::handle_submit_assessment)
                .get(assessment::handlers::handle_get_assessment),
        )
        // Recommendations
        .route(
            "/api/recommendations/generate",
            post(recommend::handlers::handle_generate),
        )
        .route("/api/recommendations", get(recommend::handlers::handle_list))
        .route(
            "/api/recommendations/:id/save",
            put(recommend::handlers::handle_toggle_saved),
        )
        // Jobs
        .route("/api/jobs/search", post(jobs::handlers::handle_search))
        .route("/api/jobs/save", post(jobs::handlers::handle_save_job))
        .route("/api/jobs/saved", get(jobs::handlers::handle_saved_jobs))
        // Market trends
        .route("/api/market-trends", get(trends::handle_market_trends))
        .with_state(state)
}

/// CORS layer restricted to the configured frontend origins. Credentials are
/// allowed, so origins must be listed explicitly rather than wildcarded.
pub fn build_cors(origins: &[String]) -> Result<CorsLayer> {
    let origins = origins
        .iter()
        .map(|origin| {
            origin
                .parse::<HeaderValue>()
                .with_context(|| format!("Invalid CORS origin '{origin}'"))
        })
        .collect::<Result<Vec<_>>>()?;

    Ok(CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::PATCH,
            Method::DELETE,
        ])
        .allow_headers([header::AUTHORIZATION, header::CONTENT_TYPE])
        .allow_credentials(true))
}
