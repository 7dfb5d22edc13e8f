//! Entry point for talking to a management server.
//!
//! Building a [`ManagementClient`] performs no network traffic; the first
//! remote call happens when a session is opened.

use reqwest::Client;
use serde_json::json;
use tracing::{debug, info};

use crate::constants;
use crate::error::ClientError;
use crate::session::Session;
use crate::types::Credential;
use crate::wire::{self, SessionData};

pub struct ManagementClient {
    base_url: String,
    client: Client,
}

impl ManagementClient {
    /// Build a client for the given server address.
    ///
    /// Accepts a bare host, host:port, or a full http(s) URL; bare
    /// addresses default to https.
    pub fn new(server: &str) -> Result<Self, ClientError> {
        let base_url = normalize_base_url(server)?;

        let client = Client::builder()
            .connect_timeout(constants::CONNECT_TIMEOUT)
            .timeout(constants::REQUEST_TIMEOUT)
            .build()
            .map_err(|e| ClientError::ClientBuild {
                reason: e.to_string(),
            })?;

        Ok(Self { base_url, client })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Authenticate and open a session.
    pub async fn open_session(&self, credential: &Credential) -> Result<Session, ClientError> {
        let url = format!("{}/auth/session", self.base_url);
        info!(
            "Opening session on {} as {}",
            self.base_url, credential.account
        );

        let response = self
            .client
            .post(&url)
            .json(&json!({
                "account": credential.account,
                "secret": credential.secret.expose(),
            }))
            .send()
            .await
            .map_err(|e| ClientError::ConnectionFailed {
                host: self.base_url.clone(),
                reason: e.to_string(),
            })?;

        let data: SessionData = wire::parse_data(&self.base_url, response).await?;
        debug!(
            "Session opened on {} (expires: {:?})",
            self.base_url, data.expires_at
        );

        Ok(Session::new(
            self.client.clone(),
            self.base_url.clone(),
            data.token,
        ))
    }
}

fn normalize_base_url(server: &str) -> Result<String, ClientError> {
    let trimmed = server.trim().trim_end_matches('/');

    if trimmed.is_empty() {
        return Err(ClientError::InvalidServerAddress {
            address: server.to_string(),
            reason: "address is empty".to_string(),
        });
    }

    if trimmed.contains(char::is_whitespace) {
        return Err(ClientError::InvalidServerAddress {
            address: server.to_string(),
            reason: "address contains whitespace".to_string(),
        });
    }

    if trimmed.starts_with("http://") || trimmed.starts_with("https://") {
        Ok(trimmed.to_string())
    } else {
        Ok(format!("https://{}", trimmed))
    }
}
