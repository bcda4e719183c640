use thiserror::Error;

/// A single field that failed its schema constraint.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{field}: {message}")]
pub struct ValidationError {
    pub field: &'static str,
    pub message: String,
}

impl ValidationError {
    pub fn new(field: &'static str, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RemoteCallError {
    #[error("Authentication error: {0}")]
    Auth(String),

    #[error("Resource not found: {0}")]
    NotFound(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Backend error ({status}): {message}")]
    Backend { status: u16, message: String },

    #[error("Transport error: {0}")]
    Transport(String),

    #[error("Unexpected response: {0}")]
    Decode(String),
}

impl RemoteCallError {
    /// Maps a non-success HTTP status and its body onto an error variant.
    pub fn from_status(status: u16, message: String) -> Self {
        match status {
            401 | 403 => RemoteCallError::Auth(message),
            404 => RemoteCallError::NotFound(message),
            409 => RemoteCallError::Conflict(message),
            _ => RemoteCallError::Backend { status, message },
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FormError {
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    #[error("A submission is already in progress for this form")]
    SubmissionInProgress,

    #[error("Cannot create an appointment without a patient reference")]
    MissingPatientReference,

    #[error("Cannot update an appointment without an appointment reference")]
    MissingAppointmentReference,

    #[error("Remote call failed: {0}")]
    Remote(#[from] RemoteCallError),
}

impl FormError {
    /// The field the error should be shown next to, if any.
    pub fn field(&self) -> Option<&'static str> {
        match self {
            FormError::Validation(err) => Some(err.field),
            _ => None,
        }
    }

    pub fn is_validation(&self) -> bool {
        matches!(self, FormError::Validation(_))
    }
}
