//! Request handlers. Each handler composes the same pipeline: parse, then
//! validate the payload, then run the precondition gates, then hand off to
//! the repository (or a cascade) and translate the outcome into a status.

pub mod articles;
pub mod associations;
pub mod categories;
pub mod comments;
pub mod faqs;
pub mod guides;
pub mod packages;
pub mod users;

use axum::{http::StatusCode, Json};
use serde::Serialize;
use serde_json::{json, Value};

use crate::error::ApiError;

/// 201 body: the accepted payload echoed back with the generated identifier.
pub(crate) fn created<T: Serialize>(
    id: i64,
    input: &T,
) -> Result<(StatusCode, Json<Value>), ApiError> {
    let mut body = serde_json::to_value(input).map_err(|e| {
        tracing::error!("failed to serialize created response: {}", e);
        ApiError::internal_server_error("Failed to format response")
    })?;
    if let Value::Object(map) = &mut body {
        map.insert("id".to_string(), json!(id));
    }
    Ok((StatusCode::CREATED, Json(body)))
}
