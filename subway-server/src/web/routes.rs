//! HTTP route handlers.

use axum::{
    Json, Router,
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{delete, get, post},
};
use tower_http::trace::TraceLayer;
use tracing::warn;

use crate::domain::{LineError, LineId, NewLine, StationId};
use crate::service::ServiceError;
use crate::store::StoreError;

use super::dto::*;
use super::state::AppState;

/// Create the application router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/stations", get(list_stations).post(create_station))
        .route("/stations/:id", delete(delete_station))
        .route("/lines", get(list_lines).post(create_line))
        .route(
            "/lines/:id",
            get(get_line).put(update_line).delete(delete_line),
        )
        .route(
            "/lines/:id/sections",
            post(add_section).delete(remove_station),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Health check endpoint.
async fn health() -> &'static str {
    "ok"
}

/// Create a station.
async fn create_station(
    State(state): State<AppState>,
    Json(req): Json<StationRequest>,
) -> Result<(StatusCode, Json<StationResponse>), AppError> {
    let station = state.stations.create_station(req.name).await?;
    Ok((
        StatusCode::CREATED,
        Json(StationResponse::from_station(&station)),
    ))
}

/// List all stations.
async fn list_stations(
    State(state): State<AppState>,
) -> Result<Json<Vec<StationResponse>>, AppError> {
    let stations = state.stations.list_stations().await?;
    Ok(Json(
        stations.iter().map(StationResponse::from_station).collect(),
    ))
}

/// Delete a station that no line uses.
async fn delete_station(
    State(state): State<AppState>,
    Path(id): Path<u64>,
) -> Result<StatusCode, AppError> {
    state.stations.delete_station(StationId(id)).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Create a line with its first section.
async fn create_line(
    State(state): State<AppState>,
    Json(req): Json<LineRequest>,
) -> Result<(StatusCode, Json<LineResponse>), AppError> {
    let line = NewLine::new(
        req.name,
        req.color,
        req.up_station_id,
        req.down_station_id,
        req.distance,
    )
    .map_err(ServiceError::from)?;

    let view = state.lines.create_line(line).await?;
    Ok((StatusCode::CREATED, Json(LineResponse::from_view(&view))))
}

/// List all lines with their stations in order.
async fn list_lines(State(state): State<AppState>) -> Result<Json<Vec<LineResponse>>, AppError> {
    let views = state.lines.list_lines().await?;
    Ok(Json(views.iter().map(LineResponse::from_view).collect()))
}

/// Get one line with its stations in order.
async fn get_line(
    State(state): State<AppState>,
    Path(id): Path<u64>,
) -> Result<Json<LineResponse>, AppError> {
    let view = state.lines.get_line(LineId(id)).await?;
    Ok(Json(LineResponse::from_view(&view)))
}

/// Rename or recolor a line.
async fn update_line(
    State(state): State<AppState>,
    Path(id): Path<u64>,
    Json(req): Json<UpdateLineRequest>,
) -> Result<Json<LineResponse>, AppError> {
    let view = state
        .lines
        .update_line(LineId(id), req.name, req.color)
        .await?;
    Ok(Json(LineResponse::from_view(&view)))
}

/// Delete a line and its sections.
async fn delete_line(
    State(state): State<AppState>,
    Path(id): Path<u64>,
) -> Result<StatusCode, AppError> {
    state.lines.delete_line(LineId(id)).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Add a section to a line.
async fn add_section(
    State(state): State<AppState>,
    Path(id): Path<u64>,
    Json(req): Json<SectionRequest>,
) -> Result<Json<LineResponse>, AppError> {
    let view = state
        .lines
        .add_section(
            LineId(id),
            req.up_station_id,
            req.down_station_id,
            req.distance,
        )
        .await?;
    Ok(Json(LineResponse::from_view(&view)))
}

/// Remove a station from a line.
async fn remove_station(
    State(state): State<AppState>,
    Path(id): Path<u64>,
    Query(query): Query<RemoveStationQuery>,
) -> Result<StatusCode, AppError> {
    state
        .lines
        .remove_station(LineId(id), query.station_id)
        .await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Application error type.
#[derive(Debug)]
pub enum AppError {
    BadRequest { message: String },
    NotFound { message: String },
    Conflict { message: String },
    Internal { message: String },
}

impl From<ServiceError> for AppError {
    fn from(e: ServiceError) -> Self {
        let message = e.to_string();
        match e {
            ServiceError::Line(LineError::CorruptPath(_)) => AppError::Internal { message },
            ServiceError::Line(_) | ServiceError::InvalidStation(_) => {
                AppError::BadRequest { message }
            }
            ServiceError::LineNotFound(_)
            | ServiceError::StationNotFound(_)
            | ServiceError::Store(StoreError::NotFound { .. }) => AppError::NotFound { message },
            ServiceError::StationInUse(_) => AppError::Conflict { message },
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::BadRequest { message } => (StatusCode::BAD_REQUEST, message),
            AppError::NotFound { message } => (StatusCode::NOT_FOUND, message),
            AppError::Conflict { message } => (StatusCode::CONFLICT, message),
            AppError::Internal { message } => (StatusCode::INTERNAL_SERVER_ERROR, message),
        };

        warn!(status = status.as_u16(), %message, "request failed");

        let body = Json(ErrorResponse { error: message });
        (status, body).into_response()
    }
}
