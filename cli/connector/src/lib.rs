/*
 * SPDX-FileCopyrightText: 2026 Wavelens GmbH <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

pub mod recipes;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone)]
pub struct RequestConfig {
    pub server_url: String,
}

#[derive(Debug, thiserror::Error)]
pub enum ConnectorError {
    /// The request never produced a response.
    #[error("{0}")]
    Transport(#[from] reqwest::Error),
    #[error("{message}")]
    Api { status: u16, message: String },
    #[error("Unexpected response: {0}")]
    Decode(#[from] serde_json::Error),
}

pub type ConnectorResult<T> = Result<T, ConnectorError>;

#[derive(Serialize, Deserialize, Debug)]
pub struct MessageResponse {
    pub message: String,
}

#[derive(Deserialize, Debug)]
struct ErrorResponse {
    error: Option<String>,
}

pub type RequestType = reqwest::Method;

fn get_client(
    config: &RequestConfig,
    endpoint: &str,
    request_type: RequestType,
) -> reqwest::RequestBuilder {
    let server_url = config.server_url.trim_end_matches('/');

    reqwest::Client::new()
        .request(request_type, format!("{}/{}", server_url, endpoint))
        .header("Content-Type", "application/json")
}

async fn parse_response<T: DeserializeOwned>(res: reqwest::Response) -> ConnectorResult<T> {
    let status = res.status();
    let bytes = res.bytes().await?;

    if status.is_success() {
        return Ok(serde_json::from_slice(&bytes)?);
    }

    // Servers answer failures with `{"error": ...}`; anything else falls back to the status text.
    let message = serde_json::from_slice::<ErrorResponse>(&bytes)
        .ok()
        .and_then(|body| body.error)
        .filter(|error| !error.is_empty())
        .unwrap_or_else(|| {
            status
                .canonical_reason()
                .map(str::to_string)
                .unwrap_or_else(|| status.as_u16().to_string())
        });

    Err(ConnectorError::Api {
        status: status.as_u16(),
        message,
    })
}

pub async fn health(config: &RequestConfig) -> ConnectorResult<MessageResponse> {
    let res = get_client(config, "health", RequestType::GET).send().await?;

    parse_response(res).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_unreachable_server_is_transport_error() {
        let config = RequestConfig {
            server_url: "http://127.0.0.1:1".to_string(),
        };

        let err = health(&config).await.unwrap_err();
        assert!(matches!(err, ConnectorError::Transport(_)));
    }

    #[test]
    fn test_api_error_displays_message_only() {
        let err = ConnectorError::Api {
            status: 400,
            message: "Title, description, and instructions are required".to_string(),
        };

        assert_eq!(
            err.to_string(),
            "Title, description, and instructions are required"
        );
    }
}
