use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use crm_core_api::error::ApiError;
use serde_json::json;

/// HTTP rendering of [`ApiError`].
///
/// Server-side failures are answered with a fixed message; the underlying
/// error is only written to the log.
#[derive(Debug)]
pub struct HttpError(pub ApiError);

impl From<ApiError> for HttpError {
    fn from(error: ApiError) -> Self {
        HttpError(error)
    }
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        let status = match &self.0 {
            ApiError::SourceFetchFailure { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        };
        tracing::error!(error = %self.0, "Request failed");
        (status, Json(json!({ "error": "Erreur serveur" }))).into_response()
    }
}
