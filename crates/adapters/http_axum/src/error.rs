//! HTTP error response mapping.

use axum::Json;
use axum::extract::multipart::{MultipartError, MultipartRejection};
use axum::extract::rejection::{BytesRejection, FormRejection, JsonRejection, PathRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use restohub_domain::error::{RestoHubError, ValidationError};

/// JSON error body returned by API endpoints.
#[derive(Serialize)]
struct ErrorBody {
    message: String,
}

/// Everything a handler can fail with.
#[derive(Debug)]
pub enum ApiError {
    /// Error raised by the application or domain layer.
    Domain(RestoHubError),
    /// The request body could not be extracted.
    Rejected { status: StatusCode, message: String },
}

impl From<RestoHubError> for ApiError {
    fn from(err: RestoHubError) -> Self {
        Self::Domain(err)
    }
}

impl From<ValidationError> for ApiError {
    fn from(err: ValidationError) -> Self {
        Self::Domain(err.into())
    }
}

macro_rules! from_rejection {
    ($($rejection:ty),+ $(,)?) => {
        $(
            impl From<$rejection> for ApiError {
                fn from(rejection: $rejection) -> Self {
                    Self::Rejected {
                        status: rejection.status(),
                        message: rejection.body_text(),
                    }
                }
            }
        )+
    };
}

from_rejection!(
    BytesRejection,
    JsonRejection,
    FormRejection,
    MultipartRejection,
    MultipartError,
    PathRejection,
);

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            Self::Domain(RestoHubError::Validation(err)) => {
                (StatusCode::BAD_REQUEST, err.to_string())
            }
            Self::Domain(RestoHubError::NotFound(err)) => (StatusCode::NOT_FOUND, err.to_string()),
            Self::Domain(RestoHubError::Storage(err)) => {
                tracing::error!(error = %err, "storage error");
                (StatusCode::INTERNAL_SERVER_ERROR, err.to_string())
            }
            Self::Rejected { status, message } => {
                tracing::debug!(%status, %message, "request rejected");
                (status, message)
            }
        };

        (status, Json(ErrorBody { message })).into_response()
    }
}
