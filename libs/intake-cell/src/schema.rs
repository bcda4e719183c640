use shared_utils::{FieldValue, Schema};

use crate::models::IntakeFields;

pub fn intake_schema() -> Schema<IntakeFields> {
    Schema::<IntakeFields>::new()
        .field("name", |f| FieldValue::Text(&f.name))
        .required("Name must be at least 2 characters")
        .min_length(2, "Name must be at least 2 characters")
        .max_length(50, "Name must be at most 50 characters")
        .field("email", |f| FieldValue::Text(&f.email))
        .required("Invalid email address")
        .email("Invalid email address")
        .field("phone", |f| FieldValue::Text(&f.phone))
        .required("Invalid phone number")
        .phone("Invalid phone number")
}
