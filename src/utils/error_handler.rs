use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::models::ErrorResponse;

#[derive(Debug)]
pub enum AppError {
    BadRequestErr(String),
    NotFound(String),
    /// Failure talking to an upstream service. Only the message is sent
    /// to the client; the source is logged.
    Upstream(String, anyhow::Error),
    AnyError(anyhow::Error),
}

impl AppError {
    pub fn unknown_error() -> Self {
        Self::AnyError(anyhow::anyhow!("Unknown error"))
    }

    pub fn upstream<E: Into<anyhow::Error>>(message: &str, err: E) -> Self {
        Self::Upstream(message.to_owned(), err.into())
    }
}

impl<E: Into<anyhow::Error>> From<E> for AppError {
    fn from(err: E) -> Self {
        Self::AnyError(err.into())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            Self::BadRequestErr(msg) => {
                tracing::debug!("Bad request: {}", msg);
                let response = ErrorResponse { error: msg };
                (StatusCode::BAD_REQUEST, Json(response)).into_response()
            }
            Self::NotFound(msg) => {
                tracing::debug!("Not Found: {}", msg);
                let response = ErrorResponse { error: msg };
                (StatusCode::NOT_FOUND, Json(response)).into_response()
            }
            Self::Upstream(msg, err) => {
                tracing::error!("{msg}: {err:?}");
                let response = ErrorResponse { error: msg };
                (StatusCode::INTERNAL_SERVER_ERROR, Json(response)).into_response()
            }
            Self::AnyError(err) => {
                tracing::error!("Something went wrong: {err:?}");
                let response = ErrorResponse {
                    error: "Something went wrong".to_owned(),
                };
                (StatusCode::INTERNAL_SERVER_ERROR, Json(response)).into_response()
            }
        }
    }
}
