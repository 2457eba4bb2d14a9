//! HTTP surface: `/run`, `/read` and the health probe.

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

use crate::error::TaskError;
use crate::router::classify;
use crate::{sandbox, tasks, AppState};

#[derive(Debug, Deserialize)]
pub struct RunQuery {
    pub task: String,
}

#[derive(Debug, Serialize)]
pub struct RunResponse {
    pub message: String,
}

/// `POST /run?task=<text>`: classify the description and run the matched
/// handler to completion.
pub async fn run_task(
    State(state): State<Arc<AppState>>,
    Query(params): Query<RunQuery>,
) -> Result<Json<RunResponse>, TaskError> {
    let kind = classify(&params.task)?;
    info!(task = %params.task, kind = ?kind, "Dispatching task");

    let message = tasks::execute(&state, kind).await?;
    info!(kind = ?kind, "Task completed");

    Ok(Json(RunResponse { message }))
}

#[derive(Debug, Deserialize)]
pub struct ReadQuery {
    pub path: String,
}

/// `GET /read?path=<path>`: return the raw text content of a file inside the
/// sandbox. The path is validated before any filesystem access.
pub async fn read_file(
    State(state): State<Arc<AppState>>,
    Query(params): Query<ReadQuery>,
) -> Result<String, TaskError> {
    let path = sandbox::resolve(&state.config.data_dir, &params.path)?;

    if tokio::fs::metadata(&path).await.is_err() {
        warn!(path = %path.display(), "Read requested for missing file");
        return Err(TaskError::NotFound);
    }

    Ok(tokio::fs::read_to_string(&path).await?)
}

async fn health_check() -> impl IntoResponse {
    (StatusCode::OK, "Automation backend operational")
}

pub fn create_router(state: Arc<AppState>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/run", post(run_task))
        .route("/read", get(read_file))
        .route("/api/health", get(health_check))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}
