/*
 * SPDX-FileCopyrightText: 2026 Wavelens GmbH <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

use axum::Json;
use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use recipes_core::input::InputError;
use recipes_core::store::StoreError;
use recipes_core::types::ErrorResponse;
use std::fmt;

#[derive(Debug)]
pub enum WebError {
    NotFound(String),
    InputValidation(InputError),
    Store(StoreError),
    JsonParsing(JsonRejection),
    PathParsing(PathRejection),
}

impl fmt::Display for WebError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WebError::NotFound(msg) => write!(f, "Not Found: {}", msg),
            WebError::InputValidation(err) => write!(f, "Input validation error: {}", err),
            WebError::Store(err) => write!(f, "Datastore error: {}", err),
            WebError::JsonParsing(err) => write!(f, "JSON parsing error: {}", err),
            WebError::PathParsing(err) => write!(f, "Path parsing error: {}", err),
        }
    }
}

impl std::error::Error for WebError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            WebError::InputValidation(err) => Some(err),
            WebError::Store(err) => Some(err),
            WebError::JsonParsing(err) => Some(err),
            WebError::PathParsing(err) => Some(err),
            _ => None,
        }
    }
}

impl From<InputError> for WebError {
    fn from(err: InputError) -> Self {
        WebError::InputValidation(err)
    }
}

impl From<StoreError> for WebError {
    fn from(err: StoreError) -> Self {
        WebError::Store(err)
    }
}

impl From<JsonRejection> for WebError {
    fn from(err: JsonRejection) -> Self {
        WebError::JsonParsing(err)
    }
}

impl From<PathRejection> for WebError {
    fn from(err: PathRejection) -> Self {
        WebError::PathParsing(err)
    }
}

impl IntoResponse for WebError {
    fn into_response(self) -> Response {
        let (status, error_message) = match self {
            WebError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            WebError::InputValidation(err) => (StatusCode::BAD_REQUEST, err.to_string()),
            WebError::Store(err) => {
                tracing::error!("Datastore error: {}", err);
                (StatusCode::INTERNAL_SERVER_ERROR, err.to_string())
            }
            WebError::JsonParsing(err) => {
                (StatusCode::BAD_REQUEST, format!("Invalid JSON: {}", err))
            }
            WebError::PathParsing(err) => {
                (StatusCode::BAD_REQUEST, format!("Invalid path: {}", err))
            }
        };

        let body = Json(ErrorResponse {
            error: error_message,
            details: None,
        });

        (status, body).into_response()
    }
}

pub type WebResult<T> = Result<T, WebError>;

impl WebError {
    pub fn not_found(resource: &str) -> Self {
        WebError::NotFound(format!("{} not found", resource))
    }
}
