use std::{net::SocketAddr, sync::Arc};

use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
};
use parking_lot::RwLock;
use serde::Serialize;
use serde_json::json;
use tracing::info;

use crate::{
    Activity, ActivityInput, GraphExport, RegistryError, Schedule, ScheduleMetadata,
    ScheduleReport, ScheduleSummary,
};

/// Shared schedule. Writers hold the lock across "add activity + recompute",
/// so readers never see derived times that lag the activity set.
#[derive(Clone)]
pub struct AppState {
    schedule: Arc<RwLock<Schedule>>,
}

impl AppState {
    pub fn new(schedule: Schedule) -> Self {
        Self {
            schedule: Arc::new(RwLock::new(schedule)),
        }
    }

    pub fn with_shared(schedule: Arc<RwLock<Schedule>>) -> Self {
        Self { schedule }
    }

    fn schedule(&self) -> Arc<RwLock<Schedule>> {
        self.schedule.clone()
    }
}

#[derive(Debug, Serialize)]
struct ErrorBody<'a> {
    error: &'a str,
    message: String,
}

#[derive(Debug)]
enum ApiError {
    NotFound(String),
    Conflict(RegistryError),
    Rejected(RegistryError),
}

impl From<RegistryError> for ApiError {
    fn from(value: RegistryError) -> Self {
        match value {
            RegistryError::UnknownActivity { .. } => ApiError::NotFound(value.to_string()),
            RegistryError::DuplicateName { .. } => ApiError::Conflict(value),
            other => ApiError::Rejected(other),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::NotFound(message) => {
                let body = Json(ErrorBody {
                    error: "not_found",
                    message,
                });
                (StatusCode::NOT_FOUND, body).into_response()
            }
            ApiError::Conflict(err) => {
                let body = Json(ErrorBody {
                    error: err.kind(),
                    message: err.to_string(),
                });
                (StatusCode::CONFLICT, body).into_response()
            }
            ApiError::Rejected(err) => {
                let body = Json(ErrorBody {
                    error: err.kind(),
                    message: err.to_string(),
                });
                (StatusCode::BAD_REQUEST, body).into_response()
            }
        }
    }
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/metadata", get(get_metadata).put(update_metadata))
        .route("/activities", get(list_activities).post(create_activity))
        .route("/activities/:name", get(get_activity))
        .route("/schedule", get(get_report))
        .route("/graph", get(get_graph))
        .route("/refresh", post(refresh_schedule))
        .with_state(state)
}

pub async fn serve(addr: SocketAddr, schedule: Schedule) -> std::io::Result<()> {
    let state = AppState::new(schedule);
    let app = router(state);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!(%addr, "http api listening");
    axum::serve(listener, app).await
}

async fn health() -> impl IntoResponse {
    Json(json!({ "status": "ok" }))
}

async fn get_metadata(State(state): State<AppState>) -> Json<ScheduleMetadata> {
    let schedule = state.schedule();
    let metadata = schedule.read().metadata().clone();
    Json(metadata)
}

async fn update_metadata(
    State(state): State<AppState>,
    Json(metadata): Json<ScheduleMetadata>,
) -> Json<ScheduleMetadata> {
    let schedule = state.schedule();
    let mut guard = schedule.write();
    guard.set_metadata(metadata);
    Json(guard.metadata().clone())
}

async fn list_activities(State(state): State<AppState>) -> Json<Vec<Activity>> {
    let schedule = state.schedule();
    let activities = schedule.read().activities().to_vec();
    Json(activities)
}

async fn get_activity(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Result<Json<Activity>, ApiError> {
    let schedule = state.schedule();
    let guard = schedule.read();
    let activity = guard.find_activity(&name)?.clone();
    Ok(Json(activity))
}

async fn create_activity(
    State(state): State<AppState>,
    Json(input): Json<ActivityInput>,
) -> Result<(StatusCode, Json<Activity>), ApiError> {
    let schedule = state.schedule();
    let created = {
        let mut guard = schedule.write();
        let idx = guard.add_activity(&input.name, input.duration, input.predecessors)?;
        guard.activities()[idx].clone()
    };
    Ok((StatusCode::CREATED, Json(created)))
}

async fn get_report(State(state): State<AppState>) -> Json<ScheduleReport> {
    let schedule = state.schedule();
    let report = ScheduleReport::from_schedule(&schedule.read());
    Json(report)
}

async fn get_graph(State(state): State<AppState>) -> Json<GraphExport> {
    let schedule = state.schedule();
    let export = GraphExport::from_schedule(&schedule.read());
    Json(export)
}

async fn refresh_schedule(State(state): State<AppState>) -> Json<ScheduleSummary> {
    let schedule = state.schedule();
    let summary = schedule.write().refresh().clone();
    Json(summary)
}
