use async_trait::async_trait;
use reqwest::Method;
use serde_json::{json, Value};
use tracing::{debug, info};

use shared_config::AppConfig;
use shared_database::supabase::SupabaseClient;
use shared_models::{RemoteCallError, User};

use crate::models::NewUser;
use crate::services::UserDirectory;

pub struct UserService {
    supabase: SupabaseClient,
}

impl UserService {
    pub fn new(config: &AppConfig) -> Self {
        Self {
            supabase: SupabaseClient::new(config),
        }
    }

    pub async fn find_by_email(&self, email: &str) -> Result<Option<User>, RemoteCallError> {
        debug!("Looking up user by email: {}", email);

        let path = format!("/rest/v1/users?email=eq.{}", urlencoding::encode(email));
        let result: Vec<Value> = self.supabase.request(
            Method::GET,
            &path,
            None,
        ).await?;

        result.into_iter()
            .next()
            .map(|row| serde_json::from_value(row).map_err(|e| RemoteCallError::Decode(e.to_string())))
            .transpose()
    }
}

#[async_trait]
impl UserDirectory for UserService {
    /// Creates the user, or returns the existing one when the email is taken.
    async fn create_user(&self, user: NewUser) -> Result<User, RemoteCallError> {
        debug!("Creating user for: {}", user.email);

        let user_data = json!({
            "name": user.name,
            "email": user.email,
            "phone": user.phone,
        });

        let created: Result<Vec<Value>, RemoteCallError> = self.supabase.request_with_headers(
            Method::POST,
            "/rest/v1/users",
            Some(user_data),
            Some(SupabaseClient::return_representation()),
        ).await;

        match created {
            Ok(rows) => {
                let row = rows.into_iter()
                    .next()
                    .ok_or_else(|| RemoteCallError::Decode("Failed to create user".to_string()))?;
                let user: User = serde_json::from_value(row)
                    .map_err(|e| RemoteCallError::Decode(e.to_string()))?;
                debug!("User created successfully with ID: {}", user.id);
                Ok(user)
            }
            Err(RemoteCallError::Conflict(message)) => {
                info!("User with email {} already exists, reusing it", user.email);
                self.find_by_email(&user.email)
                    .await?
                    .ok_or(RemoteCallError::Conflict(message))
            }
            Err(e) => Err(e),
        }
    }
}
