// HTTP request handlers
use axum::{body::Bytes, extract::State, http::StatusCode, response::IntoResponse, Json};
use tracing::{error, info, warn};

use crate::errors::ApiError;
use crate::models::{EncodeRequest, EncodeResponse};
use crate::server::state::AppState;

/// Health check endpoint
pub async fn health_check() -> impl IntoResponse {
    (StatusCode::OK, "Encoder service is running")
}

/// Encode endpoint - runs the sidecar on `data` and returns its output
///
/// The body is decoded by hand rather than through the `Json` extractor so
/// that every decode failure, whatever the content type, is a plain 400.
pub async fn encode_handler(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<EncodeResponse>, ApiError> {
    let request: EncodeRequest = serde_json::from_slice(&body).map_err(|e| {
        warn!(error = %e, body_len = body.len(), "Rejected malformed encode request");
        ApiError::BadRequest(e)
    })?;

    info!(data_len = request.data.len(), "Received encode request");

    let encoded = state.sidecar.encode(&request.data).await.map_err(|e| {
        error!(
            error = %e,
            path = %state.sidecar.path().display(),
            "Sidecar invocation failed"
        );
        ApiError::Sidecar(e)
    })?;

    Ok(Json(EncodeResponse { encoded }))
}
