/*
 * SPDX-FileCopyrightText: 2026 Wavelens GmbH <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

pub mod recipes;

use crate::error::{WebError, WebResult};
use axum::extract::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use recipes_core::types::{ErrorResponse, MessageResponse};
use std::any::Any;

pub async fn handle_404() -> WebError {
    WebError::NotFound("Not Found".to_string())
}

pub async fn get_health() -> WebResult<Json<MessageResponse>> {
    let res = MessageResponse {
        message: "200 ALIVE".to_string(),
    };

    Ok(Json(res))
}

/// Turns a panicking handler into a 500 instead of a dropped connection.
pub fn handle_panic(err: Box<dyn Any + Send + 'static>) -> Response {
    let details = if let Some(msg) = err.downcast_ref::<String>() {
        msg.clone()
    } else if let Some(msg) = err.downcast_ref::<&str>() {
        msg.to_string()
    } else {
        "Unknown panic".to_string()
    };

    tracing::error!("Request handler panicked: {}", details);

    let body = Json(ErrorResponse {
        error: "Internal Server Error".to_string(),
        details: Some(details),
    });

    (StatusCode::INTERNAL_SERVER_ERROR, body).into_response()
}
