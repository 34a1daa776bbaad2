use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use std::error::Error as StdError;

use crate::error::StoreError;

/// Generic error document answered for 404 and 5xx responses.
#[derive(Debug)]
pub struct Error {
    pub status: StatusCode,
    pub title: String,
    pub detail: Option<Box<dyn StdError + Send + Sync>>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct SerializableError {
    pub status: u16,
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
}

impl Error {
    pub fn not_found(detail: impl Into<String>) -> Self {
        let detail: String = detail.into();
        Self {
            status: StatusCode::NOT_FOUND,
            title: "Not found".to_string(),
            detail: Some(detail.into()),
        }
    }

    pub fn internal() -> Self {
        Self {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            title: "Internal server error".to_string(),
            detail: None,
        }
    }
}

pub fn status(err: &StoreError) -> StatusCode {
    match err {
        StoreError::NotFound(..) => StatusCode::NOT_FOUND,
        StoreError::ConstraintViolation(_) => StatusCode::UNPROCESSABLE_ENTITY,
        StoreError::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

impl From<StoreError> for Error {
    fn from(value: StoreError) -> Self {
        match value {
            StoreError::Database(e) => {
                tracing::error!(error = %e, "Unhandled database error");
                Self::internal()
            }
            err => Self {
                status: status(&err),
                title: err.to_string(),
                detail: None,
            },
        }
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        if self.status.is_server_error() {
            tracing::error!(status = %self.status, title = %self.title, "Request failed");
        }
        let err = SerializableError {
            status: u16::from(self.status),
            title: self.title,
            detail: self.detail.map(|e| e.to_string()),
        };
        (self.status, Json(err)).into_response()
    }
}
