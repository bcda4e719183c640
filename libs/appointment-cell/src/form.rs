use std::sync::Arc;

use chrono::Utc;
use tracing::{debug, error, info, instrument};

use shared_models::{
    routes, AppointmentRef, FieldDescriptor, FormError, FormFieldType, Navigator, SubmitButton,
    DOCTOR_NAMES,
};
use shared_utils::{FieldErrors, FormState, Schema};

use crate::mode::{AppointmentField, AppointmentMode};
use crate::models::{
    AppointmentChanges, AppointmentFields, AppointmentUpdate, ExistingAppointment, NewAppointment,
};
use crate::schema::appointment_schema;
use crate::services::AppointmentBooking;

pub struct AppointmentForm {
    mode: AppointmentMode,
    user_id: String,
    patient_id: Option<String>,
    appointment_id: Option<String>,
    state: FormState<AppointmentFields>,
    schema: Schema<AppointmentFields>,
    booking: Arc<dyn AppointmentBooking>,
    navigator: Arc<dyn Navigator>,
}

impl AppointmentForm {
    /// A blank form. Creating needs `patient_id`; the other modes need an
    /// existing appointment, see [`AppointmentForm::for_existing`].
    pub fn new(
        mode: AppointmentMode,
        user_id: impl Into<String>,
        patient_id: Option<String>,
        booking: Arc<dyn AppointmentBooking>,
        navigator: Arc<dyn Navigator>,
    ) -> Self {
        Self {
            mode,
            user_id: user_id.into(),
            patient_id,
            appointment_id: None,
            state: FormState::new(AppointmentFields::default()),
            schema: appointment_schema(mode),
            booking,
            navigator,
        }
    }

    /// A form seeded from an appointment that is being rescheduled or cancelled.
    pub fn for_existing(
        mode: AppointmentMode,
        appointment: &ExistingAppointment,
        booking: Arc<dyn AppointmentBooking>,
        navigator: Arc<dyn Navigator>,
    ) -> Self {
        Self {
            mode,
            user_id: appointment.user_id.clone(),
            patient_id: Some(appointment.patient_id.clone()),
            appointment_id: Some(appointment.id.clone()),
            state: FormState::new(AppointmentFields::from(appointment)),
            schema: appointment_schema(mode),
            booking,
            navigator,
        }
    }

    pub fn mode(&self) -> AppointmentMode {
        self.mode
    }

    pub fn values(&self) -> AppointmentFields {
        self.state.values()
    }

    pub fn update(&self, apply: impl FnOnce(&mut AppointmentFields)) {
        self.state.update(apply);
    }

    pub fn errors(&self) -> FieldErrors {
        self.state.errors()
    }

    pub fn is_submitting(&self) -> bool {
        self.state.is_submitting()
    }

    pub fn schema(&self) -> &Schema<AppointmentFields> {
        &self.schema
    }

    pub fn fields(&self) -> Vec<FieldDescriptor> {
        self.mode
            .visibility()
            .visible_fields()
            .iter()
            .map(|field| describe(*field))
            .collect()
    }

    pub fn submit_button(&self) -> SubmitButton {
        SubmitButton {
            label: self.mode.button_label(),
            style: self.mode.button_style(),
            busy: self.is_submitting(),
        }
    }

    #[instrument(skip(self), fields(mode = %self.mode, user_id = %self.user_id))]
    pub async fn submit(&self) -> Result<AppointmentRef, FormError> {
        let _guard = self.state.begin_submit()?;
        let values = self.state.validate(&self.schema, Utc::now())?;

        let result = match self.mode {
            AppointmentMode::Create => {
                let patient_id = self.patient_id.clone().ok_or_else(|| {
                    error!("No patient reference for user {}, not creating appointment", self.user_id);
                    FormError::MissingPatientReference
                })?;

                let appointment = NewAppointment {
                    user_id: self.user_id.clone(),
                    patient_id,
                    primary_physician: values.primary_physician,
                    schedule: values.schedule,
                    reason: values.reason.trim().to_string(),
                    note: non_empty(&values.note),
                    status: self.mode.status(),
                };
                debug!("Creating appointment with {} at {}", appointment.primary_physician, appointment.schedule);
                self.booking.create_appointment(appointment).await
            }
            AppointmentMode::Schedule | AppointmentMode::Cancel => {
                let appointment_id = self.appointment_id.clone().ok_or_else(|| {
                    error!("No appointment reference to {}", self.mode);
                    FormError::MissingAppointmentReference
                })?;

                let changes = match self.mode {
                    AppointmentMode::Cancel => AppointmentChanges::Cancel {
                        cancellation_reason: values.cancellation_reason.trim().to_string(),
                        status: self.mode.status(),
                    },
                    _ => AppointmentChanges::Reschedule {
                        primary_physician: values.primary_physician,
                        schedule: values.schedule,
                        reason: values.reason.trim().to_string(),
                        note: non_empty(&values.note),
                        status: self.mode.status(),
                    },
                };
                debug!("Updating appointment {} to {}", appointment_id, changes.status());
                self.booking
                    .update_appointment(AppointmentUpdate {
                        appointment_id,
                        user_id: self.user_id.clone(),
                        changes,
                    })
                    .await
            }
        };

        match result {
            Ok(appointment) => {
                info!("Appointment {} saved as {}", appointment.id, self.mode.status());
                if self.mode == AppointmentMode::Create {
                    self.navigator.push(&routes::appointment_success(&self.user_id, &appointment.id));
                }
                Ok(appointment)
            }
            Err(e) => {
                error!("Failed to {} appointment: {}", self.mode, e);
                Err(FormError::Remote(e))
            }
        }
    }
}

fn describe(field: AppointmentField) -> FieldDescriptor {
    let name = field.name();
    match field {
        AppointmentField::PrimaryPhysician => FieldDescriptor::new(name, "Doctor", FormFieldType::Select)
            .placeholder("Select a doctor")
            .options(DOCTOR_NAMES),
        AppointmentField::Schedule => FieldDescriptor::new(name, "Expected Appointment Date", FormFieldType::DatePicker)
            .date_format("MM/dd/yyyy - h:mm aa"),
        AppointmentField::Reason => FieldDescriptor::new(name, "Reason for Appointment", FormFieldType::Textarea)
            .placeholder("Enter the reason for your appointment"),
        AppointmentField::Note => FieldDescriptor::new(name, "Notes", FormFieldType::Textarea)
            .placeholder("Enter any notes"),
        AppointmentField::CancellationReason => FieldDescriptor::new(name, "Reason for Cancellation", FormFieldType::Textarea)
            .placeholder("Enter the reason for cancellation"),
    }
}

fn non_empty(value: &str) -> Option<String> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}
