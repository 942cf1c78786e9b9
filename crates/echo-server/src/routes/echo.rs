//! The fixed-payload responder mounted for every method and path.

use axum::http::StatusCode;
use axum::http::header::CONTENT_TYPE;
use axum::response::{IntoResponse, Response};
use common::ResponsePayload;
use serde::Serialize;

use crate::error::ResponderError;

/// ANY /* — returns `{"Test":true}` regardless of the request.
pub async fn respond() -> Result<Response, ResponderError> {
    render(&ResponsePayload::new())
}

/// Serializes `payload` and wraps it in a `200 application/json` response.
pub fn render<T: Serialize>(payload: &T) -> Result<Response, ResponderError> {
    let body = serde_json::to_vec(payload)?;

    Ok((StatusCode::OK, [(CONTENT_TYPE, "application/json")], body).into_response())
}
