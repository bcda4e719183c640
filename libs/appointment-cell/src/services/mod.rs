pub mod booking;

pub use booking::AppointmentService;

use async_trait::async_trait;
use shared_models::{AppointmentRef, RemoteCallError};

use crate::models::{AppointmentUpdate, NewAppointment};

/// Remote appointment-booking calls.
#[async_trait]
pub trait AppointmentBooking: Send + Sync {
    async fn create_appointment(&self, appointment: NewAppointment) -> Result<AppointmentRef, RemoteCallError>;

    async fn update_appointment(&self, update: AppointmentUpdate) -> Result<AppointmentRef, RemoteCallError>;
}
