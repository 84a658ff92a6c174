//! Axum request handlers for all service endpoints.

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use common::{
    protocol::{
        DecryptRequest, DecryptResponse, EncryptRequest, EncryptResponse, ErrorResponse,
        HealthResponse,
    },
    ServiceError,
};
use dyniv_codec::CodecError;
use tracing::{debug, error, warn};

use super::state::AppState;

/// `POST /encrypt` — encrypt a value under the configured key.
pub async fn encrypt(State(state): State<AppState>, Json(req): Json<EncryptRequest>) -> Response {
    match state.codec.encrypt(&req.value, &*state.key) {
        Ok(blob) => (StatusCode::OK, Json(EncryptResponse { blob })).into_response(),
        Err(e) => {
            warn!(error = %e, "encryption failed");
            error_response(&ServiceError::EncryptionFailure("could not encrypt value".into()))
        }
    }
}

/// `POST /decrypt` — recover a value from a blob.
///
/// Every rejected blob gets the same `422 invalid_value` response. Expiry is
/// logged at `warn`, corruption at `debug`.
pub async fn decrypt(State(state): State<AppState>, Json(req): Json<DecryptRequest>) -> Response {
    let blob_len = req.blob.len();
    match state.codec.open(&req.blob, &*state.key) {
        Ok(value) => (StatusCode::OK, Json(DecryptResponse { value })).into_response(),
        Err(CodecError::Decode(failure)) => {
            if failure.is_expired() {
                warn!(blob_len, reason = %failure, "encrypted value expired");
            } else {
                debug!(blob_len, reason = %failure, "encrypted value rejected");
            }
            error_response(&ServiceError::InvalidValue)
        }
        Err(e) => {
            error!(error = %e, "decryption failed");
            error_response(&ServiceError::Internal("could not decrypt value".into()))
        }
    }
}

/// `GET /health` — liveness check reporting the active freshness window.
pub async fn health(State(state): State<AppState>) -> Response {
    let freshness_window_ms =
        u64::try_from(state.codec.freshness_window().as_millis()).unwrap_or(u64::MAX);
    let body = HealthResponse {
        status: "ok".into(),
        freshness_window_ms,
    };
    (StatusCode::OK, Json(body)).into_response()
}

/// Catch-all 404 handler.
pub async fn not_found() -> impl IntoResponse {
    let err = ErrorResponse::new("not_found", "the requested resource does not exist");
    (StatusCode::NOT_FOUND, Json(err))
}

/// Render a [`ServiceError`] as its status code and JSON body.
fn error_response(err: &ServiceError) -> Response {
    let status =
        StatusCode::from_u16(err.http_status()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
    (status, Json(ErrorResponse::new(err.code(), err.to_string()))).into_response()
}
