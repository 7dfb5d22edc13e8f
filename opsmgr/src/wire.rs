//! Response envelope shared by all management-server endpoints.

use chrono::{DateTime, Utc};
use reqwest::{Response, StatusCode};
use serde::de::DeserializeOwned;
use serde::Deserialize;

use crate::error::ClientError;
use crate::types::MonitoredObject;

#[derive(Debug, Deserialize)]
pub(crate) struct Envelope<T> {
    pub success: bool,
    #[serde(default = "Option::default")]
    pub data: Option<T>,
    #[serde(default)]
    pub error: Option<String>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct SessionData {
    pub token: String,
    #[serde(default)]
    pub expires_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ObjectList {
    pub objects: Vec<MonitoredObject>,
}

/// Map transport-level status codes common to every endpoint.
async fn check_status(host: &str, response: Response) -> Result<Response, ClientError> {
    let status = response.status();

    if status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN {
        return Err(ClientError::AuthenticationFailed {
            host: host.to_string(),
        });
    }

    if !status.is_success() {
        let body = response.text().await.unwrap_or_default();
        return Err(ClientError::ServerError {
            host: host.to_string(),
            message: format!("status {}: {}", status, body),
        });
    }

    Ok(response)
}

/// Parse an envelope and hand back its data payload.
pub(crate) async fn parse_data<T: DeserializeOwned>(
    host: &str,
    response: Response,
) -> Result<T, ClientError> {
    let response = check_status(host, response).await?;

    let envelope: Envelope<T> =
        response
            .json()
            .await
            .map_err(|e| ClientError::InvalidResponse {
                host: host.to_string(),
                reason: e.to_string(),
            })?;

    if !envelope.success {
        return Err(ClientError::ServerError {
            host: host.to_string(),
            message: envelope
                .error
                .unwrap_or_else(|| "unknown error".to_string()),
        });
    }

    envelope.data.ok_or_else(|| ClientError::InvalidResponse {
        host: host.to_string(),
        reason: "response carried no data".to_string(),
    })
}

/// Parse an envelope where only the success flag matters.
pub(crate) async fn parse_ack(host: &str, response: Response) -> Result<(), ClientError> {
    let response = check_status(host, response).await?;

    // Some endpoints acknowledge with an empty 204
    if response.status() == StatusCode::NO_CONTENT {
        return Ok(());
    }

    let envelope: Envelope<serde_json::Value> =
        response
            .json()
            .await
            .map_err(|e| ClientError::InvalidResponse {
                host: host.to_string(),
                reason: e.to_string(),
            })?;

    if !envelope.success {
        return Err(ClientError::ServerError {
            host: host.to_string(),
            message: envelope
                .error
                .unwrap_or_else(|| "unknown error".to_string()),
        });
    }

    Ok(())
}
