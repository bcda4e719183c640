use std::sync::Arc;

use chrono::Utc;
use tracing::{debug, error, info, instrument};

use shared_models::{
    routes, ButtonStyle, FieldDescriptor, FormError, FormFieldType, FormSection, Gender,
    IdentificationType, Navigator, PatientRef, SubmitButton, User, DOCTOR_NAMES,
};
use shared_utils::{FieldErrors, FormState, Schema};

use crate::models::{PatientRegistration, RegistrationFields};
use crate::schema::registration_schema;
use crate::services::PatientRegistry;

/// Full patient registration for a user created by the intake form.
pub struct RegistrationForm {
    user: User,
    state: FormState<RegistrationFields>,
    schema: Schema<RegistrationFields>,
    registry: Arc<dyn PatientRegistry>,
    navigator: Arc<dyn Navigator>,
}

impl RegistrationForm {
    pub fn new(user: User, registry: Arc<dyn PatientRegistry>, navigator: Arc<dyn Navigator>) -> Self {
        let defaults = RegistrationFields::seeded_from(&user);
        Self {
            user,
            state: FormState::new(defaults),
            schema: registration_schema(),
            registry,
            navigator,
        }
    }

    pub fn user(&self) -> &User {
        &self.user
    }

    pub fn values(&self) -> RegistrationFields {
        self.state.values()
    }

    pub fn update(&self, apply: impl FnOnce(&mut RegistrationFields)) {
        self.state.update(apply);
    }

    pub fn errors(&self) -> FieldErrors {
        self.state.errors()
    }

    pub fn is_submitting(&self) -> bool {
        self.state.is_submitting()
    }

    pub fn submit_button(&self) -> SubmitButton {
        SubmitButton {
            label: "Get Started",
            style: ButtonStyle::Primary,
            busy: self.is_submitting(),
        }
    }

    pub fn sections(&self) -> Vec<FormSection> {
        vec![
            FormSection {
                title: "Personal Information",
                fields: vec![
                    FieldDescriptor::new("name", "Full Name", FormFieldType::Input)
                        .placeholder("Anand Prakash"),
                    FieldDescriptor::new("email", "Email", FormFieldType::Input)
                        .placeholder("anand@gmail.com"),
                    FieldDescriptor::new("phone", "Phone number", FormFieldType::PhoneInput)
                        .placeholder("(+91) 123-456-7890"),
                    FieldDescriptor::new("birthDate", "Date of Birth", FormFieldType::DatePicker),
                    FieldDescriptor::new("gender", "Gender", FormFieldType::Skeleton)
                        .options(Gender::ALL.iter().map(|gender| gender.as_str())),
                    FieldDescriptor::new("address", "Address", FormFieldType::Input)
                        .placeholder("Kutelabhata Durg"),
                    FieldDescriptor::new("occupation", "Occupation", FormFieldType::Input)
                        .placeholder("House Maker"),
                    FieldDescriptor::new("emergencyContactName", "Emergency Contact Name", FormFieldType::Input)
                        .placeholder("Guardian's name"),
                    FieldDescriptor::new("emergencyContactNumber", "Emergency Contact Number", FormFieldType::PhoneInput)
                        .placeholder("(+91) 123-456-7890"),
                ],
            },
            FormSection {
                title: "Medical Information",
                fields: vec![
                    FieldDescriptor::new("primaryPhysician", "Primary Physician", FormFieldType::Select)
                        .placeholder("Select a physician")
                        .options(DOCTOR_NAMES),
                    FieldDescriptor::new("insuranceProvider", "Insurance Provider", FormFieldType::Input)
                        .placeholder("Govt India Scheme"),
                    FieldDescriptor::new("insurancePolicyNumber", "Insurance Policy Number", FormFieldType::Input)
                        .placeholder("abs123456789"),
                    FieldDescriptor::new("allergies", "Allergies (if any)", FormFieldType::Textarea)
                        .placeholder("Peanuts, Penicillin, Pollen"),
                    FieldDescriptor::new("currentMedication", "Current Medication (if any)", FormFieldType::Textarea)
                        .placeholder("Paracetamol 500mg, Cetirizine 10mg"),
                    FieldDescriptor::new("familyMedicalHistory", "Family Medical History", FormFieldType::Textarea)
                        .placeholder("Mother had diabetes, father had insomnia"),
                    FieldDescriptor::new("pastMedicalHistory", "Past Medical History", FormFieldType::Textarea)
                        .placeholder("Appendectomy, Tonsillectomy"),
                ],
            },
            FormSection {
                title: "Identification and Verification",
                fields: vec![
                    FieldDescriptor::new("identificationType", "Identification Type", FormFieldType::Select)
                        .placeholder("Select an identification type")
                        .options(IdentificationType::ALL.iter().map(|kind| kind.as_str())),
                    FieldDescriptor::new("identificationNumber", "Identification Number", FormFieldType::Input)
                        .placeholder("123456789"),
                    FieldDescriptor::new(
                        "identificationDocument",
                        "Scanned copy of identification document",
                        FormFieldType::Skeleton,
                    ),
                ],
            },
            FormSection {
                title: "Consent and Privacy",
                fields: vec![
                    FieldDescriptor::new("treatmentConsent", "I consent to treatment", FormFieldType::Checkbox),
                    FieldDescriptor::new("disclosureConsent", "I consent to disclosure of information", FormFieldType::Checkbox),
                    FieldDescriptor::new("privacyConsent", "I consent to the privacy policy", FormFieldType::Checkbox),
                ],
            },
        ]
    }

    /// Registers the patient and moves on to booking the first appointment.
    #[instrument(skip(self), fields(user_id = %self.user.id))]
    pub async fn submit(&self) -> Result<PatientRef, FormError> {
        let _guard = self.state.begin_submit()?;
        let values = self.state.validate(&self.schema, Utc::now())?;

        let registration = PatientRegistration::from_fields(&self.user.id, values);
        match &registration.identification_document {
            Some(document) => debug!(
                "Attaching identification document {} ({}, {} bytes)",
                document.file_name, document.media_type, document.len()
            ),
            None => debug!("No identification document attached"),
        }

        match self.registry.register_patient(registration).await {
            Ok(patient) => {
                info!("Patient {} registered", patient.id);
                self.navigator.push(&routes::new_appointment(&self.user.id));
                Ok(patient)
            }
            Err(e) => {
                error!("Failed to register patient: {}", e);
                Err(FormError::Remote(e))
            }
        }
    }
}
