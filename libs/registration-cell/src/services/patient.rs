use async_trait::async_trait;
use reqwest::{multipart::{Form, Part}, Method};
use serde_json::{json, Value};
use tracing::debug;
use uuid::Uuid;

use shared_config::AppConfig;
use shared_database::supabase::SupabaseClient;
use shared_models::{PatientRef, RemoteCallError};

use crate::models::{DocumentUpload, PatientRegistration};
use crate::services::PatientRegistry;

pub struct PatientService {
    supabase: SupabaseClient,
    bucket: String,
}

impl PatientService {
    pub fn new(config: &AppConfig) -> Self {
        Self {
            supabase: SupabaseClient::new(config),
            bucket: config.identification_bucket.clone(),
        }
    }

    /// Stores the identification document and returns its id and public URL.
    pub async fn upload_identification(
        &self,
        document: &DocumentUpload,
    ) -> Result<(String, String), RemoteCallError> {
        let file_id = Uuid::new_v4().to_string();
        let path = format!("/storage/v1/object/{}/{}", self.bucket, file_id);
        debug!("Uploading identification document {} to {}", document.file_name, path);

        let _stored: Value = self.supabase.upload_multipart(&path, document_form(document)?).await?;

        let public_path = format!("/storage/v1/object/public/{}/{}", self.bucket, file_id);
        Ok((file_id, self.supabase.get_public_url(&public_path)))
    }
}

/// Multipart body carrying the blob under `blobFile` and its name under `fileName`.
pub fn document_form(document: &DocumentUpload) -> Result<Form, RemoteCallError> {
    let blob = Part::bytes(document.bytes.clone())
        .file_name(document.file_name.clone())
        .mime_str(&document.media_type)
        .map_err(|e| RemoteCallError::Transport(format!("Invalid media type {}: {}", document.media_type, e)))?;

    Ok(Form::new()
        .part("blobFile", blob)
        .text("fileName", document.file_name.clone()))
}

#[async_trait]
impl PatientRegistry for PatientService {
    async fn register_patient(&self, patient: PatientRegistration) -> Result<PatientRef, RemoteCallError> {
        debug!("Registering patient for user: {}", patient.user_id);

        let (document_id, document_url) = match &patient.identification_document {
            Some(document) => {
                let (id, url) = self.upload_identification(document).await?;
                (Some(id), Some(url))
            }
            None => (None, None),
        };

        let mut patient_data = serde_json::to_value(&patient)
            .map_err(|e| RemoteCallError::Decode(e.to_string()))?;
        if let Value::Object(row) = &mut patient_data {
            row.insert("identificationDocumentId".to_string(), json!(document_id));
            row.insert("identificationDocumentUrl".to_string(), json!(document_url));
        }

        let result: Vec<Value> = self.supabase.request_with_headers(
            Method::POST,
            "/rest/v1/patients",
            Some(patient_data),
            Some(SupabaseClient::return_representation()),
        ).await?;

        let id = result.first()
            .and_then(|row| row.get("id"))
            .and_then(|id| id.as_str())
            .ok_or_else(|| RemoteCallError::Decode("Failed to create patient profile".to_string()))?;

        debug!("Patient profile created successfully with ID: {}", id);
        Ok(PatientRef { id: id.to_string() })
    }
}
