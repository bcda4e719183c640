use shared_models::DOCTOR_NAMES;
use shared_utils::{FieldValue, Schema};

use crate::mode::{AppointmentField, AppointmentMode};
use crate::models::AppointmentFields;

/// Builds the schema for `mode` from its visible fields only.
pub fn appointment_schema(mode: AppointmentMode) -> Schema<AppointmentFields> {
    mode.visibility()
        .visible_fields()
        .iter()
        .fold(Schema::<AppointmentFields>::new(), |schema, field| {
            field_rule(schema, *field, mode)
        })
}

fn field_rule(
    schema: Schema<AppointmentFields>,
    field: AppointmentField,
    mode: AppointmentMode,
) -> Schema<AppointmentFields> {
    match field {
        AppointmentField::PrimaryPhysician => schema
            .field(field.name(), |f| FieldValue::Text(&f.primary_physician))
            .required("Select at least one doctor")
            .one_of(&DOCTOR_NAMES, "Select at least one doctor"),
        AppointmentField::Schedule => schema
            .field(field.name(), |f| FieldValue::Timestamp(f.schedule))
            .not_in_past("Appointment must be scheduled for now or later"),
        AppointmentField::Reason if mode == AppointmentMode::Create => schema
            .field(field.name(), |f| FieldValue::Text(&f.reason))
            .required("Reason must be at least 2 characters")
            .min_length(2, "Reason must be at least 2 characters")
            .max_length(500, "Reason must be at most 500 characters"),
        AppointmentField::Reason => schema
            .field(field.name(), |f| FieldValue::Text(&f.reason))
            .max_length(500, "Reason must be at most 500 characters"),
        AppointmentField::Note => schema
            .field(field.name(), |f| FieldValue::Text(&f.note))
            .max_length(500, "Note must be at most 500 characters"),
        AppointmentField::CancellationReason => schema
            .field(field.name(), |f| FieldValue::Text(&f.cancellation_reason))
            .required("Reason must be at least 2 characters")
            .min_length(2, "Reason must be at least 2 characters")
            .max_length(500, "Reason must be at most 500 characters"),
    }
}
