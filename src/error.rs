//! Defines the app level error type and its conversion to JSON error responses.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};

/// The errors that may occur in the application.
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum Error {
    /// The requested transaction was not found.
    ///
    /// For HTTP request handlers, the client should check that the ID is
    /// correct and that the transaction has not been deleted.
    ///
    /// Internally, this error occurs when a query returns no rows or when an
    /// update or delete affects zero rows.
    #[error("Transaction not found")]
    NotFound,

    /// The request body or path could not be parsed into the expected shape.
    ///
    /// The string is the rejection message produced by the extractor.
    #[error("{0}")]
    InvalidRequest(String),

    /// An SQL error, including constraint violations such as an invalid
    /// transaction type.
    ///
    /// The raw SQLite message is shown to the client as-is.
    #[error("{0}")]
    SqlError(rusqlite::Error),

    /// Could not acquire the database lock
    #[error("could not acquire the database lock")]
    DatabaseLockError,

    /// A response body produced by a handler could not be read.
    #[error("could not read response body: {0}")]
    ResponseBody(String),
}

impl From<rusqlite::Error> for Error {
    fn from(value: rusqlite::Error) -> Self {
        match value {
            rusqlite::Error::QueryReturnedNoRows => Error::NotFound,
            error => {
                tracing::error!("an unhandled SQL error occurred: {}", error);
                Error::SqlError(error)
            }
        }
    }
}

/// The JSON body sent to the client for every error response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorBody {
    /// A human readable description of what went wrong.
    pub error: String,
}

impl ErrorBody {
    /// Create an error body with the given message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            error: message.into(),
        }
    }
}

impl Error {
    /// The HTTP status code that corresponds to this error.
    pub fn status_code(&self) -> StatusCode {
        match self {
            Error::NotFound => StatusCode::NOT_FOUND,
            Error::InvalidRequest(_) => StatusCode::BAD_REQUEST,
            Error::SqlError(_) | Error::DatabaseLockError | Error::ResponseBody(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        let status = self.status_code();

        if status.is_server_error() {
            tracing::error!("Responding with {status}: {self}");
        } else {
            tracing::debug!("Responding with {status}: {self}");
        }

        (status, Json(ErrorBody::new(self.to_string()))).into_response()
    }
}
