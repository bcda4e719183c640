use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use shared_models::ButtonStyle;

use crate::models::AppointmentStatus;

/// Fixed for the lifetime of a form instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AppointmentMode {
    Create,
    Cancel,
    Schedule,
}

impl AppointmentMode {
    pub const ALL: [AppointmentMode; 3] = [
        AppointmentMode::Create,
        AppointmentMode::Cancel,
        AppointmentMode::Schedule,
    ];

    pub fn status(&self) -> AppointmentStatus {
        match self {
            AppointmentMode::Create => AppointmentStatus::Pending,
            AppointmentMode::Schedule => AppointmentStatus::Scheduled,
            AppointmentMode::Cancel => AppointmentStatus::Cancelled,
        }
    }

    pub fn button_label(&self) -> &'static str {
        match self {
            AppointmentMode::Create => "Create Appointment",
            AppointmentMode::Schedule => "Schedule Appointment",
            AppointmentMode::Cancel => "Cancel Appointment",
        }
    }

    pub fn button_style(&self) -> ButtonStyle {
        match self {
            AppointmentMode::Cancel => ButtonStyle::Danger,
            AppointmentMode::Create | AppointmentMode::Schedule => ButtonStyle::Primary,
        }
    }

    pub fn visibility(&self) -> FieldVisibility {
        match self {
            AppointmentMode::Cancel => FieldVisibility::Cancellation,
            AppointmentMode::Create | AppointmentMode::Schedule => FieldVisibility::Scheduling,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            AppointmentMode::Create => "create",
            AppointmentMode::Cancel => "cancel",
            AppointmentMode::Schedule => "schedule",
        }
    }
}

impl fmt::Display for AppointmentMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AppointmentMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        AppointmentMode::ALL
            .into_iter()
            .find(|mode| mode.as_str() == s)
            .ok_or_else(|| format!("Unknown appointment mode: {}", s))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AppointmentField {
    PrimaryPhysician,
    Schedule,
    Reason,
    Note,
    CancellationReason,
}

impl AppointmentField {
    pub fn name(&self) -> &'static str {
        match self {
            AppointmentField::PrimaryPhysician => "primaryPhysician",
            AppointmentField::Schedule => "schedule",
            AppointmentField::Reason => "reason",
            AppointmentField::Note => "note",
            AppointmentField::CancellationReason => "cancellationReason",
        }
    }
}

/// Which inputs an appointment form shows. Rendering and validation both read
/// from here, so they cannot disagree about the visible set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldVisibility {
    Scheduling,
    Cancellation,
}

impl FieldVisibility {
    pub fn visible_fields(&self) -> &'static [AppointmentField] {
        match self {
            FieldVisibility::Scheduling => &[
                AppointmentField::PrimaryPhysician,
                AppointmentField::Schedule,
                AppointmentField::Reason,
                AppointmentField::Note,
            ],
            FieldVisibility::Cancellation => &[AppointmentField::CancellationReason],
        }
    }

    pub fn shows(&self, field: AppointmentField) -> bool {
        self.visible_fields().contains(&field)
    }
}
