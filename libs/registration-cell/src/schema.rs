use shared_models::DOCTOR_NAMES;
use shared_utils::{FieldValue, Schema};

use crate::models::RegistrationFields;

/// Constraints for patient registration, in on-screen order.
pub fn registration_schema() -> Schema<RegistrationFields> {
    Schema::<RegistrationFields>::new()
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
        .field("address", |f| FieldValue::Text(&f.address))
        .required("Address must be at least 5 characters")
        .min_length(5, "Address must be at least 5 characters")
        .max_length(500, "Address must be at most 500 characters")
        .field("occupation", |f| FieldValue::Text(&f.occupation))
        .required("Occupation must be at least 2 characters")
        .min_length(2, "Occupation must be at least 2 characters")
        .max_length(500, "Occupation must be at most 500 characters")
        .field("emergencyContactName", |f| FieldValue::Text(&f.emergency_contact_name))
        .required("Contact name must be at least 2 characters")
        .min_length(2, "Contact name must be at least 2 characters")
        .max_length(50, "Contact name must be at most 50 characters")
        .field("emergencyContactNumber", |f| FieldValue::Text(&f.emergency_contact_number))
        .required("Invalid phone number")
        .phone("Invalid phone number")
        .field("primaryPhysician", |f| FieldValue::Text(&f.primary_physician))
        .required("Select at least one doctor")
        .one_of(&DOCTOR_NAMES, "Select at least one doctor")
        .field("insuranceProvider", |f| FieldValue::Text(&f.insurance_provider))
        .required("Insurance name must be at least 2 characters")
        .min_length(2, "Insurance name must be at least 2 characters")
        .max_length(50, "Insurance name must be at most 50 characters")
        .field("insurancePolicyNumber", |f| FieldValue::Text(&f.insurance_policy_number))
        .required("Policy number must be at least 2 characters")
        .min_length(2, "Policy number must be at least 2 characters")
        .max_length(50, "Policy number must be at most 50 characters")
        .field("identificationDocument", |f| FieldValue::Files(f.identification_document.len()))
        .field("treatmentConsent", |f| FieldValue::Flag(f.treatment_consent))
        .accepted("You must consent to treatment in order to proceed")
        .field("disclosureConsent", |f| FieldValue::Flag(f.disclosure_consent))
        .accepted("You must consent to disclosure in order to proceed")
        .field("privacyConsent", |f| FieldValue::Flag(f.privacy_consent))
        .accepted("You must consent to privacy in order to proceed")
}
