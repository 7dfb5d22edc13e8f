//! An authenticated session with one management server.

use chrono::{DateTime, Utc};
use reqwest::Client;
use serde_json::json;
use tracing::{debug, info};

use crate::constants;
use crate::error::ClientError;
use crate::types::{Lookup, MaintenanceReason, MonitoredObject};
use crate::wire::{self, ObjectList};

#[derive(Debug)]
pub struct Session {
    client: Client,
    base_url: String,
    token: String,
}

impl Session {
    pub(crate) fn new(client: Client, base_url: String, token: String) -> Self {
        Self {
            client,
            base_url,
            token,
        }
    }

    pub fn server(&self) -> &str {
        &self.base_url
    }

    /// Enumerate all computer objects visible through this session.
    pub async fn list_computers(&self) -> Result<Vec<MonitoredObject>, ClientError> {
        let url = format!("{}/objects", self.base_url);

        let response = self
            .client
            .get(&url)
            .query(&[("class", constants::WINDOWS_COMPUTER_CLASS)])
            .bearer_auth(&self.token)
            .send()
            .await
            .map_err(|e| ClientError::ConnectionFailed {
                host: self.base_url.clone(),
                reason: e.to_string(),
            })?;

        let list: ObjectList = wire::parse_data(&self.base_url, response).await?;
        debug!(
            "Enumerated {} computer objects on {}",
            list.objects.len(),
            self.base_url
        );

        Ok(list.objects)
    }

    /// Find the computer whose display name equals `fqdn`.
    ///
    /// Only an enumeration failure is an `Err`; zero or multiple matches
    /// come back as explicit [`Lookup`] outcomes.
    pub async fn find_computer(&self, fqdn: &str) -> Result<Lookup, ClientError> {
        let computers = self.list_computers().await?;
        Ok(select_by_display_name(computers, fqdn))
    }

    /// Open a maintenance window on `object` until `end_time`.
    pub async fn start_maintenance(
        &self,
        object: &MonitoredObject,
        end_time: DateTime<Utc>,
        comment: &str,
        reason: MaintenanceReason,
    ) -> Result<(), ClientError> {
        let url = format!(
            "{}/objects/{}/maintenance/start",
            self.base_url, object.id
        );
        info!(
            "Starting maintenance for {} until {}",
            object.display_name, end_time
        );

        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.token)
            .json(&json!({
                "end_time": end_time,
                "comment": comment,
                "reason": reason,
            }))
            .send()
            .await
            .map_err(|e| ClientError::ConnectionFailed {
                host: self.base_url.clone(),
                reason: e.to_string(),
            })?;

        wire::parse_ack(&self.base_url, response).await
    }

    /// End the active maintenance window on `object`.
    pub async fn stop_maintenance(
        &self,
        object: &MonitoredObject,
        stopped_at: DateTime<Utc>,
    ) -> Result<(), ClientError> {
        let url = format!("{}/objects/{}/maintenance/stop", self.base_url, object.id);
        info!("Stopping maintenance for {}", object.display_name);

        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.token)
            .json(&json!({ "stopped_at": stopped_at }))
            .send()
            .await
            .map_err(|e| ClientError::ConnectionFailed {
                host: self.base_url.clone(),
                reason: e.to_string(),
            })?;

        wire::parse_ack(&self.base_url, response).await
    }

    /// Release the session. Consumes the handle so it cannot be reused.
    pub async fn close(self) -> Result<(), ClientError> {
        let url = format!("{}/auth/session", self.base_url);
        debug!("Releasing session on {}", self.base_url);

        let response = self
            .client
            .delete(&url)
            .bearer_auth(&self.token)
            .send()
            .await
            .map_err(|e| ClientError::ConnectionFailed {
                host: self.base_url.clone(),
                reason: e.to_string(),
            })?;

        wire::parse_ack(&self.base_url, response).await
    }
}

fn select_by_display_name(computers: Vec<MonitoredObject>, fqdn: &str) -> Lookup {
    let mut matches: Vec<MonitoredObject> = computers
        .into_iter()
        .filter(|object| object.display_name == fqdn)
        .collect();

    match matches.len() {
        0 => Lookup::NotFound,
        1 => Lookup::Found(matches.remove(0)),
        _ => Lookup::Ambiguous(matches),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn computer(id: &str, display_name: &str) -> MonitoredObject {
        MonitoredObject {
            id: id.to_string(),
            display_name: display_name.to_string(),
            class_id: constants::WINDOWS_COMPUTER_CLASS.to_string(),
            in_maintenance: false,
        }
    }

    #[test]
    fn selects_the_single_exact_match() {
        let computers = vec![
            computer("obj-1", "web01.corp.example"),
            computer("obj-2", "db01.corp.example"),
        ];

        match select_by_display_name(computers, "db01.corp.example") {
            Lookup::Found(object) => assert_eq!(object.id, "obj-2"),
            other => panic!("expected Found, got {:?}", other),
        }
    }

    #[test]
    fn zero_matches_is_not_found() {
        let computers = vec![computer("obj-1", "web01.corp.example")];

        assert!(matches!(
            select_by_display_name(computers, "missing.corp.example"),
            Lookup::NotFound
        ));
    }

    #[test]
    fn multiple_matches_are_ambiguous() {
        let computers = vec![
            computer("obj-1", "web01.corp.example"),
            computer("obj-2", "web01.corp.example"),
        ];

        match select_by_display_name(computers, "web01.corp.example") {
            Lookup::Ambiguous(candidates) => assert_eq!(candidates.len(), 2),
            other => panic!("expected Ambiguous, got {:?}", other),
        }
    }

    #[test]
    fn match_is_case_sensitive() {
        let computers = vec![computer("obj-1", "WEB01.corp.example")];

        assert!(matches!(
            select_by_display_name(computers, "web01.corp.example"),
            Lookup::NotFound
        ));
    }
}
