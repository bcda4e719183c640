use reqwest::{
    Client,
    header::{HeaderMap, HeaderName, HeaderValue, CONTENT_TYPE, AUTHORIZATION},
    multipart::Form,
    Method,
};
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::{debug, error};

use shared_config::AppConfig;
use shared_models::RemoteCallError;

pub struct SupabaseClient {
    client: Client,
    base_url: String,
    anon_key: String,
}

impl SupabaseClient {
    pub fn new(config: &AppConfig) -> Self {
        Self {
            client: Client::new(),
            base_url: config.backend_url.clone(),
            anon_key: config.backend_anon_key.clone(),
        }
    }

    fn get_headers(&self) -> Result<HeaderMap, RemoteCallError> {
        let mut headers = HeaderMap::new();

        let key = HeaderValue::from_str(&self.anon_key)
            .map_err(|e| RemoteCallError::Transport(format!("Invalid anon key header: {}", e)))?;
        let bearer = HeaderValue::from_str(&format!("Bearer {}", self.anon_key))
            .map_err(|e| RemoteCallError::Transport(format!("Invalid authorization header: {}", e)))?;

        headers.insert(HeaderName::from_static("apikey"), key);
        headers.insert(AUTHORIZATION, bearer);

        Ok(headers)
    }

    pub async fn request<T>(&self, method: Method, path: &str, body: Option<Value>)
                            -> Result<T, RemoteCallError>
    where T: DeserializeOwned {
        self.request_with_headers(method, path, body, None).await
    }

    pub async fn request_with_headers<T>(&self, method: Method, path: &str,
                                         body: Option<Value>, extra_headers: Option<HeaderMap>)
                                         -> Result<T, RemoteCallError>
    where T: DeserializeOwned {
        let url = format!("{}{}", self.base_url, path);
        debug!("Making {} request to {}", method, url);

        let mut headers = self.get_headers()?;
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        if let Some(extra) = extra_headers {
            headers.extend(extra);
        }

        let mut req = self.client.request(method, &url)
            .headers(headers);

        if let Some(body_data) = body {
            req = req.json(&body_data);
        }

        let response = req.send().await
            .map_err(|e| RemoteCallError::Transport(e.to_string()))?;

        Self::decode(response).await
    }

    /// Sends a multipart body; reqwest sets the boundary content type itself.
    pub async fn upload_multipart<T>(&self, path: &str, form: Form) -> Result<T, RemoteCallError>
    where T: DeserializeOwned {
        let url = format!("{}{}", self.base_url, path);
        debug!("Uploading multipart body to {}", url);

        let response = self.client.post(&url)
            .headers(self.get_headers()?)
            .multipart(form)
            .send()
            .await
            .map_err(|e| RemoteCallError::Transport(e.to_string()))?;

        Self::decode(response).await
    }

    async fn decode<T>(response: reqwest::Response) -> Result<T, RemoteCallError>
    where T: DeserializeOwned {
        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await
                .map_err(|e| RemoteCallError::Transport(e.to_string()))?;
            error!("API error ({}): {}", status, error_text);

            return Err(RemoteCallError::from_status(status.as_u16(), error_text));
        }

        response.json::<T>().await
            .map_err(|e| RemoteCallError::Decode(e.to_string()))
    }

    /// Header asking PostgREST to echo the written row back.
    pub fn return_representation() -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert("Prefer", HeaderValue::from_static("return=representation"));
        headers
    }

    pub fn get_public_url(&self, storage_path: &str) -> String {
        format!("{}{}", self.base_url, storage_path)
    }
}
