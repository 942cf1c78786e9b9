//! Error types for the echo server.

use axum::http::StatusCode;
use axum::http::header::CONTENT_TYPE;
use axum::response::{IntoResponse, Response};
use thiserror::Error;

/// Failure while building a response. Rendered as a 500.
#[derive(Debug, Error)]
pub enum ResponderError {
    /// The payload could not be encoded as JSON.
    #[error("failed to serialize response payload: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl IntoResponse for ResponderError {
    fn into_response(self) -> Response {
        tracing::error!(error = %self, "responder failed");

        (
            StatusCode::INTERNAL_SERVER_ERROR,
            [(CONTENT_TYPE, "text/plain; charset=utf-8")],
            self.to_string(),
        )
            .into_response()
    }
}

/// Invalid command-line configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing port argument (usage: echo-server <port>)")]
    MissingPort,

    #[error("invalid port {value:?}: {reason}")]
    InvalidPort { value: String, reason: String },
}

/// Fatal startup and serving errors. These terminate the process.
#[derive(Debug, Error)]
pub enum ServerError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("failed to bind {addr}: {source}")]
    Bind {
        addr: String,
        #[source]
        source: std::io::Error,
    },

    #[error("server error: {0}")]
    Serve(#[source] std::io::Error),
}
