use std::io;
use std::path::Path;

use chrono::{NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use shared_models::{Gender, IdentificationType, User};

// ==============================================================================
// FIELD STATE
// ==============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RegistrationFields {
    // Personal information
    pub name: String,
    pub email: String,
    pub phone: String,
    pub birth_date: NaiveDate,
    pub gender: Gender,
    pub address: String,
    pub occupation: String,
    pub emergency_contact_name: String,
    pub emergency_contact_number: String,

    // Medical information
    pub primary_physician: String,
    pub insurance_provider: String,
    pub insurance_policy_number: String,
    pub allergies: String,
    pub current_medication: String,
    pub family_medical_history: String,
    pub past_medical_history: String,

    // Identification and verification
    pub identification_type: Option<IdentificationType>,
    pub identification_number: String,
    #[serde(skip)]
    pub identification_document: Vec<DocumentUpload>,

    // Consent and privacy
    pub treatment_consent: bool,
    pub disclosure_consent: bool,
    pub privacy_consent: bool,
}

impl Default for RegistrationFields {
    fn default() -> Self {
        Self {
            name: String::new(),
            email: String::new(),
            phone: String::new(),
            birth_date: Utc::now().date_naive(),
            gender: Gender::Male,
            address: String::new(),
            occupation: String::new(),
            emergency_contact_name: String::new(),
            emergency_contact_number: String::new(),
            primary_physician: String::new(),
            insurance_provider: String::new(),
            insurance_policy_number: String::new(),
            allergies: String::new(),
            current_medication: String::new(),
            family_medical_history: String::new(),
            past_medical_history: String::new(),
            identification_type: Some(IdentificationType::BirthCertificate),
            identification_number: String::new(),
            identification_document: Vec::new(),
            treatment_consent: false,
            disclosure_consent: false,
            privacy_consent: false,
        }
    }
}

impl RegistrationFields {
    /// Defaults with the contact details already known for `user`.
    pub fn seeded_from(user: &User) -> Self {
        Self {
            name: user.name.clone(),
            email: user.email.clone(),
            phone: user.phone.clone(),
            ..Self::default()
        }
    }
}

// ==============================================================================
// IDENTIFICATION DOCUMENT
// ==============================================================================

/// An uploaded file held in memory with its declared media type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentUpload {
    pub file_name: String,
    pub media_type: String,
    pub bytes: Vec<u8>,
}

impl DocumentUpload {
    pub fn new(file_name: impl Into<String>, media_type: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            file_name: file_name.into(),
            media_type: media_type.into(),
            bytes,
        }
    }

    /// Reads a document from disk, guessing the media type from its extension.
    pub async fn from_path(path: impl AsRef<Path>) -> io::Result<Self> {
        let path = path.as_ref();
        let bytes = tokio::fs::read(path).await?;
        let file_name = path
            .file_name()
            .and_then(|name| name.to_str())
            .unwrap_or("document")
            .to_string();

        Ok(Self::new(file_name, media_type_for(path), bytes))
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}

pub fn media_type_for(path: &Path) -> &'static str {
    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.to_ascii_lowercase());

    match extension.as_deref() {
        Some("png") => "image/png",
        Some("jpg") | Some("jpeg") => "image/jpeg",
        Some("gif") => "image/gif",
        Some("webp") => "image/webp",
        Some("svg") => "image/svg+xml",
        Some("pdf") => "application/pdf",
        _ => "application/octet-stream",
    }
}

// ==============================================================================
// REGISTRATION PAYLOAD
// ==============================================================================

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PatientRegistration {
    pub user_id: String,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub birth_date: NaiveDate,
    pub gender: Gender,
    pub address: String,
    pub occupation: String,
    pub emergency_contact_name: String,
    pub emergency_contact_number: String,
    pub primary_physician: String,
    pub insurance_provider: String,
    pub insurance_policy_number: String,
    pub allergies: Option<String>,
    pub current_medication: Option<String>,
    pub family_medical_history: Option<String>,
    pub past_medical_history: Option<String>,
    pub identification_type: Option<IdentificationType>,
    pub identification_number: Option<String>,
    /// Sent as a separate multipart upload, never in the JSON row.
    #[serde(skip)]
    pub identification_document: Option<DocumentUpload>,
    pub treatment_consent: bool,
    pub disclosure_consent: bool,
    pub privacy_consent: bool,
}

impl PatientRegistration {
    pub fn from_fields(user_id: &str, fields: RegistrationFields) -> Self {
        Self {
            user_id: user_id.to_string(),
            name: fields.name.trim().to_string(),
            email: fields.email.trim().to_string(),
            phone: fields.phone.trim().to_string(),
            birth_date: fields.birth_date,
            gender: fields.gender,
            address: fields.address.trim().to_string(),
            occupation: fields.occupation.trim().to_string(),
            emergency_contact_name: fields.emergency_contact_name.trim().to_string(),
            emergency_contact_number: fields.emergency_contact_number.trim().to_string(),
            primary_physician: fields.primary_physician,
            insurance_provider: fields.insurance_provider.trim().to_string(),
            insurance_policy_number: fields.insurance_policy_number.trim().to_string(),
            allergies: non_empty(fields.allergies),
            current_medication: non_empty(fields.current_medication),
            family_medical_history: non_empty(fields.family_medical_history),
            past_medical_history: non_empty(fields.past_medical_history),
            identification_type: fields.identification_type,
            identification_number: non_empty(fields.identification_number),
            identification_document: fields.identification_document.into_iter().next(),
            treatment_consent: fields.treatment_consent,
            disclosure_consent: fields.disclosure_consent,
            privacy_consent: fields.privacy_consent,
        }
    }
}

fn non_empty(value: String) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}
