use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use kochchef_shared::Error;
use serde_json::json;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error(transparent)]
    Domain(#[from] Error),

    #[error("Bad request: {0}")]
    BadRequest(String),
}

impl AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::Domain(e) => match e {
                Error::InvalidFormat(_) | Error::Validate(_) | Error::EmptySelection => {
                    StatusCode::UNPROCESSABLE_ENTITY
                }
                Error::CategoryNotEmpty { .. } => StatusCode::CONFLICT,
                Error::NotFound(_) => StatusCode::NOT_FOUND,
                Error::NotLoaded | Error::LoadFailure(_) => StatusCode::SERVICE_UNAVAILABLE,
                Error::Json(_) | Error::Unknown(_) => StatusCode::INTERNAL_SERVER_ERROR,
            },
        }
    }

    fn kind(&self) -> &'static str {
        match self {
            AppError::BadRequest(_) => "bad_request",
            AppError::Domain(e) => e.kind(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        if status.is_server_error() {
            tracing::error!(error = %self, "Request failed");
        } else {
            tracing::warn!(error = %self, "Request rejected");
        }

        let mut body = json!({
            "error": self.kind(),
            "message": self.to_string(),
        });

        if let AppError::Domain(Error::CategoryNotEmpty { count, .. }) = &self {
            body["count"] = json!(count);
        }

        (status, Json(body)).into_response()
    }
}
