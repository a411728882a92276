use axum::{extract::State, Json};
use serde_json::{json, Value};

use crate::db;
use crate::state::AppState;

/// GET /
/// Service banner.
pub async fn root_handler() -> Json<Value> {
    Json(json!({
        "message": "Career Compass API",
        "version": env!("CARGO_PKG_VERSION"),
        "status": "running"
    }))
}

/// GET /api/health
/// Liveness probe.
pub async fn health_handler() -> Json<Value> {
    Json(json!({ "status": "healthy" }))
}

/// GET /api/database/test
/// Connectivity probe: runs `SELECT 1` and reports the target database name.
pub async fn db_test_handler(State(state): State<AppState>) -> Json<Value> {
    match db::ping(&state.db).await {
        Ok(()) => Json(json!({
            "status": "connected",
            "database": db::database_name_from_url(&state.config.database_url),
            "database_type": "PostgreSQL"
        })),
        Err(e) => Json(json!({
            "status": "error",
            "message": e.to_string(),
            "hint": "Check PostgreSQL is running and DATABASE_URL is correct"
        })),
    }
}
