use std::env;
use tracing::warn;

pub const DEFAULT_IDENTIFICATION_BUCKET: &str = "identification-documents";

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub backend_url: String,
    pub backend_anon_key: String,
    pub identification_bucket: String,
}

impl AppConfig {
    pub fn from_env() -> Self {
        let config = Self {
            backend_url: env::var("BACKEND_URL")
                .unwrap_or_else(|_| {
                    warn!("BACKEND_URL not set, using empty value");
                    String::new()
                }),
            backend_anon_key: env::var("BACKEND_ANON_KEY")
                .unwrap_or_else(|_| {
                    warn!("BACKEND_ANON_KEY not set, using empty value");
                    String::new()
                }),
            identification_bucket: env::var("IDENTIFICATION_BUCKET")
                .unwrap_or_else(|_| {
                    warn!("IDENTIFICATION_BUCKET not set, using default");
                    DEFAULT_IDENTIFICATION_BUCKET.to_string()
                }),
        };

        if !config.is_configured() {
            warn!("Booking client not fully configured - missing environment variables");
        }

        config
    }

    pub fn is_configured(&self) -> bool {
        !self.backend_url.is_empty() && !self.backend_anon_key.is_empty()
    }
}
