// libs/appointment-cell/src/services/booking.rs
use async_trait::async_trait;
use reqwest::Method;
use serde_json::Value;
use tracing::{debug, info};

use shared_config::AppConfig;
use shared_database::supabase::SupabaseClient;
use shared_models::{AppointmentRef, RemoteCallError};

use crate::models::{AppointmentUpdate, NewAppointment};
use crate::services::AppointmentBooking;

pub struct AppointmentService {
    supabase: SupabaseClient,
}

impl AppointmentService {
    pub fn new(config: &AppConfig) -> Self {
        Self {
            supabase: SupabaseClient::new(config),
        }
    }

    fn first_id(rows: Vec<Value>, context: &str) -> Result<AppointmentRef, RemoteCallError> {
        rows.first()
            .and_then(|row| row.get("id"))
            .and_then(|id| id.as_str())
            .map(|id| AppointmentRef { id: id.to_string() })
            .ok_or_else(|| RemoteCallError::Decode(format!("Failed to {} appointment", context)))
    }
}

#[async_trait]
impl AppointmentBooking for AppointmentService {
    async fn create_appointment(&self, appointment: NewAppointment) -> Result<AppointmentRef, RemoteCallError> {
        debug!("Creating appointment for patient: {}", appointment.patient_id);

        let appointment_data = serde_json::to_value(&appointment)
            .map_err(|e| RemoteCallError::Decode(e.to_string()))?;

        let result: Vec<Value> = self.supabase.request_with_headers(
            Method::POST,
            "/rest/v1/appointments",
            Some(appointment_data),
            Some(SupabaseClient::return_representation()),
        ).await?;

        let created = Self::first_id(result, "create")?;
        info!("Appointment {} created with status {}", created.id, appointment.status);
        Ok(created)
    }

    async fn update_appointment(&self, update: AppointmentUpdate) -> Result<AppointmentRef, RemoteCallError> {
        debug!("Updating appointment {} to {}", update.appointment_id, update.changes.status());

        let changes = serde_json::to_value(&update.changes)
            .map_err(|e| RemoteCallError::Decode(e.to_string()))?;

        let path = format!("/rest/v1/appointments?id=eq.{}", update.appointment_id);
        let result: Vec<Value> = self.supabase.request_with_headers(
            Method::PATCH,
            &path,
            Some(changes),
            Some(SupabaseClient::return_representation()),
        ).await?;

        if result.is_empty() {
            return Err(RemoteCallError::NotFound(format!("Appointment {}", update.appointment_id)));
        }

        Self::first_id(result, "update")
    }
}
