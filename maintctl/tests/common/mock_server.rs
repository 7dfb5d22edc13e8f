//! Mock management server for integration tests.
//!
//! Simulates the server's session, object enumeration, and maintenance
//! endpoints without a real backend.

use serde_json::{json, Value};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

pub struct MockManagementServer {
    pub server: MockServer,
    pub base_url: String,
}

impl MockManagementServer {
    pub async fn start() -> Self {
        let server = MockServer::start().await;
        let base_url = server.uri();
        Self { server, base_url }
    }

    /// A computer object as the server would list it
    pub fn computer(id: &str, display_name: &str) -> Value {
        json!({
            "id": id,
            "display_name": display_name,
            "class_id": "windows.computer",
            "in_maintenance": false
        })
    }

    pub async fn mock_session_open(&self, token: &str) {
        Mock::given(method("POST"))
            .and(path("/auth/session"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "success": true,
                "data": { "token": token, "expires_at": null }
            })))
            .mount(&self.server)
            .await;
    }

    pub async fn mock_session_open_denied(&self) {
        Mock::given(method("POST"))
            .and(path("/auth/session"))
            .respond_with(ResponseTemplate::new(401))
            .mount(&self.server)
            .await;
    }

    /// Mount the release endpoint and require exactly one call to it
    pub async fn expect_session_close(&self) {
        Mock::given(method("DELETE"))
            .and(path("/auth/session"))
            .respond_with(ResponseTemplate::new(204))
            .expect(1)
            .mount(&self.server)
            .await;
    }

    pub async fn mock_computers(&self, objects: Value) {
        Mock::given(method("GET"))
            .and(path("/objects"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "success": true,
                "data": { "objects": objects }
            })))
            .mount(&self.server)
            .await;
    }

    pub async fn mock_computers_failure(&self) {
        Mock::given(method("GET"))
            .and(path("/objects"))
            .respond_with(ResponseTemplate::new(500).set_body_string("enumeration failed"))
            .mount(&self.server)
            .await;
    }

    pub async fn mock_maintenance_start_success(&self, object_id: &str) {
        Mock::given(method("POST"))
            .and(path(format!("/objects/{}/maintenance/start", object_id)))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "success": true })))
            .mount(&self.server)
            .await;
    }

    pub async fn mock_maintenance_start_rejected(&self, object_id: &str, error: &str) {
        Mock::given(method("POST"))
            .and(path(format!("/objects/{}/maintenance/start", object_id)))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "success": false,
                "error": error
            })))
            .mount(&self.server)
            .await;
    }

    pub async fn mock_maintenance_stop_success(&self, object_id: &str) {
        Mock::given(method("POST"))
            .and(path(format!("/objects/{}/maintenance/stop", object_id)))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "success": true })))
            .mount(&self.server)
            .await;
    }

    /// JSON bodies of every request received for `request_path`
    pub async fn bodies_for(&self, request_path: &str) -> Vec<Value> {
        self.server
            .received_requests()
            .await
            .unwrap_or_default()
            .iter()
            .filter(|request| request.url.path() == request_path)
            .filter_map(|request| serde_json::from_slice(&request.body).ok())
            .collect()
    }
}
