// libs/appointment-cell/src/models.rs
use serde::{Deserialize, Serialize};
use chrono::{DateTime, Duration, DurationRound, Utc};
use std::fmt;

// ==============================================================================
// CORE APPOINTMENT MODELS
// ==============================================================================

/// Status written to the backend. Only reachable through `AppointmentMode::status`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum AppointmentStatus {
    Pending,
    Scheduled,
    Cancelled,
}

impl fmt::Display for AppointmentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppointmentStatus::Pending => write!(f, "pending"),
            AppointmentStatus::Scheduled => write!(f, "scheduled"),
            AppointmentStatus::Cancelled => write!(f, "cancelled"),
        }
    }
}

/// An appointment that already exists, opened for rescheduling or cancellation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExistingAppointment {
    pub id: String,
    pub user_id: String,
    pub patient_id: String,
    pub primary_physician: String,
    pub schedule: DateTime<Utc>,
    pub reason: String,
    pub note: Option<String>,
    pub cancellation_reason: Option<String>,
    pub status: AppointmentStatus,
}

// ==============================================================================
// FIELD STATE
// ==============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AppointmentFields {
    pub primary_physician: String,
    pub schedule: DateTime<Utc>,
    pub reason: String,
    pub note: String,
    pub cancellation_reason: String,
}

impl Default for AppointmentFields {
    fn default() -> Self {
        Self {
            primary_physician: String::new(),
            schedule: next_minute(Utc::now()),
            reason: String::new(),
            note: String::new(),
            cancellation_reason: String::new(),
        }
    }
}

/// Start of the minute after `now`, so an untouched default stays bookable.
pub fn next_minute(now: DateTime<Utc>) -> DateTime<Utc> {
    now.duration_trunc(Duration::minutes(1)).unwrap_or(now) + Duration::minutes(1)
}

impl From<&ExistingAppointment> for AppointmentFields {
    fn from(appointment: &ExistingAppointment) -> Self {
        Self {
            primary_physician: appointment.primary_physician.clone(),
            schedule: appointment.schedule,
            reason: appointment.reason.clone(),
            note: appointment.note.clone().unwrap_or_default(),
            cancellation_reason: appointment.cancellation_reason.clone().unwrap_or_default(),
        }
    }
}

// ==============================================================================
// REQUEST MODELS
// ==============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewAppointment {
    pub user_id: String,
    pub patient_id: String,
    pub primary_physician: String,
    pub schedule: DateTime<Utc>,
    pub reason: String,
    pub note: Option<String>,
    pub status: AppointmentStatus,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AppointmentUpdate {
    pub appointment_id: String,
    pub user_id: String,
    pub changes: AppointmentChanges,
}

/// The columns an update writes; everything else on the row is left alone.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged, rename_all_fields = "camelCase")]
pub enum AppointmentChanges {
    Reschedule {
        primary_physician: String,
        schedule: DateTime<Utc>,
        reason: String,
        note: Option<String>,
        status: AppointmentStatus,
    },
    Cancel {
        cancellation_reason: String,
        status: AppointmentStatus,
    },
}

impl AppointmentChanges {
    pub fn status(&self) -> AppointmentStatus {
        match self {
            AppointmentChanges::Reschedule { status, .. } => *status,
            AppointmentChanges::Cancel { status, .. } => *status,
        }
    }
}
