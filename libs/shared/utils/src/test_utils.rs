use std::sync::{Arc, Mutex};
use serde_json::json;
use uuid::Uuid;

use shared_config::AppConfig;
use shared_models::{Navigator, User};

pub struct TestConfig {
    pub backend_url: String,
    pub backend_anon_key: String,
    pub identification_bucket: String,
}

impl Default for TestConfig {
    fn default() -> Self {
        Self {
            backend_url: "http://localhost:54321".to_string(),
            backend_anon_key: "test-anon-key".to_string(),
            identification_bucket: "identification-documents".to_string(),
        }
    }
}

impl TestConfig {
    /// Points the config at a mock server.
    pub fn with_backend(url: impl Into<String>) -> Self {
        Self {
            backend_url: url.into(),
            ..Self::default()
        }
    }

    pub fn to_app_config(&self) -> AppConfig {
        AppConfig {
            backend_url: self.backend_url.clone(),
            backend_anon_key: self.backend_anon_key.clone(),
            identification_bucket: self.identification_bucket.clone(),
        }
    }
}

pub struct TestUser;

impl TestUser {
    pub fn new(name: &str, email: &str, phone: &str) -> User {
        User {
            id: Uuid::new_v4().simple().to_string(),
            name: name.to_string(),
            email: email.to_string(),
            phone: phone.to_string(),
        }
    }

    pub fn patient() -> User {
        Self::new("Anand Prakash", "anand@example.com", "+919876543210")
    }
}

/// Navigator that remembers every path it was asked to open.
#[derive(Default, Clone)]
pub struct RecordingNavigator {
    visited: Arc<Mutex<Vec<String>>>,
}

impl RecordingNavigator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn visited(&self) -> Vec<String> {
        self.visited.lock().unwrap_or_else(|p| p.into_inner()).clone()
    }

    pub fn last(&self) -> Option<String> {
        self.visited().last().cloned()
    }
}

impl Navigator for RecordingNavigator {
    fn push(&self, path: &str) {
        self.visited
            .lock()
            .unwrap_or_else(|p| p.into_inner())
            .push(path.to_string());
    }
}

pub struct MockBackendResponses;

impl MockBackendResponses {
    pub fn user_row(id: &str, name: &str, email: &str, phone: &str) -> serde_json::Value {
        json!({
            "id": id,
            "name": name,
            "email": email,
            "phone": phone,
            "created_at": "2024-01-01T00:00:00Z"
        })
    }

    pub fn patient_row(id: &str, user_id: &str) -> serde_json::Value {
        json!({
            "id": id,
            "userId": user_id,
            "created_at": "2024-01-01T00:00:00Z"
        })
    }

    pub fn appointment_row(id: &str, status: &str) -> serde_json::Value {
        json!({
            "id": id,
            "status": status,
            "created_at": "2024-01-01T00:00:00Z"
        })
    }

    pub fn stored_object(key: &str) -> serde_json::Value {
        json!({
            "Key": key,
            "Id": Uuid::new_v4()
        })
    }

    pub fn error_response(message: &str, code: &str) -> serde_json::Value {
        json!({
            "message": message,
            "code": code
        })
    }
}
