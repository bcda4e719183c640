pub mod patient;

pub use patient::PatientService;

use async_trait::async_trait;
use shared_models::{PatientRef, RemoteCallError};

use crate::models::PatientRegistration;

/// Remote patient-registration call.
#[async_trait]
pub trait PatientRegistry: Send + Sync {
    async fn register_patient(&self, patient: PatientRegistration) -> Result<PatientRef, RemoteCallError>;
}
