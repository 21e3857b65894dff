//! HTTP handlers: thin adapters from routes to store operations.
//!
//! All input validation lives in `metrio_core::MetricUpdate::parse`; handlers
//! only map its errors onto HTTP statuses and JSON bodies. The store call is
//! synchronous from the handler's point of view, so a `200 OK` means the
//! update has been applied.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

use metrio_core::error::ErrorCode;
use metrio_core::{MetricKind, MetricUpdate, MetrioError};

use crate::app_state::AppState;

/// HTTP projection of a core error: stable code in the body, status from the
/// error class.
pub struct ApiError(pub MetrioError);

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let code = self.0.client_code();
        let status = match code {
            ErrorCode::InvalidMetricType | ErrorCode::InvalidMetricValue => {
                StatusCode::BAD_REQUEST
            }
            ErrorCode::InvalidMetricName | ErrorCode::MetricNotFound => StatusCode::NOT_FOUND,
            ErrorCode::Transport | ErrorCode::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        };
        (status, Json(json!({ "error": code.as_str() }))).into_response()
    }
}

impl From<MetrioError> for ApiError {
    fn from(e: MetrioError) -> Self {
        ApiError(e)
    }
}

/// `POST /update/:type/:name/:value`
pub async fn update(
    State(state): State<AppState>,
    Path((kind, name, value)): Path<(String, String, String)>,
) -> Result<StatusCode, ApiError> {
    let update = MetricUpdate::parse(&kind, &name, &value)?;
    state.store().apply(&update);
    tracing::debug!(kind = %kind, name = %name, value = %value, "update applied");
    Ok(StatusCode::OK)
}

/// `GET /value/:type/:name` -- bare JSON scalar of the stored value.
pub async fn value(
    State(state): State<AppState>,
    Path((kind, name)): Path<(String, String)>,
) -> Result<Response, ApiError> {
    let kind = MetricKind::parse(&kind)?;
    match kind {
        MetricKind::Gauge => match state.store().gauge(&name) {
            Some(v) => Ok(Json(v).into_response()),
            None => Err(MetrioError::MetricNotFound(name).into()),
        },
        MetricKind::Counter => match state.store().counter(&name) {
            Some(v) => Ok(Json(v).into_response()),
            None => Err(MetrioError::MetricNotFound(name).into()),
        },
    }
}

/// `GET /` -- consistent snapshot, `{"gauge": {...}, "counter": {...}}`.
pub async fn index(State(state): State<AppState>) -> Response {
    Json(state.store().snapshot()).into_response()
}

/// Fallback for unmatched paths, including updates with an empty name segment
/// (the router cannot match those). Keeps the JSON error shape.
pub async fn not_found() -> Response {
    (
        StatusCode::NOT_FOUND,
        Json(json!({ "error": ErrorCode::MetricNotFound.as_str() })),
    )
        .into_response()
}
