use std::sync::Arc;

use assert_matches::assert_matches;
use async_trait::async_trait;
use chrono::NaiveDate;
use mockall::mock;

use registration_cell::*;
use shared_models::{FormError, Gender, IdentificationType, PatientRef, RemoteCallError, User};
use shared_utils::test_utils::{RecordingNavigator, TestUser};

mock! {
    pub Registry {}

    #[async_trait]
    impl PatientRegistry for Registry {
        async fn register_patient(&self, patient: PatientRegistration) -> Result<PatientRef, RemoteCallError>;
    }
}

fn user() -> User {
    User {
        id: "user-42".to_string(),
        name: "Anand Prakash".to_string(),
        email: "anand@example.com".to_string(),
        phone: "+919876543210".to_string(),
    }
}

fn complete(fields: &mut RegistrationFields) {
    fields.birth_date = NaiveDate::from_ymd_opt(1990, 5, 15).unwrap();
    fields.gender = Gender::Female;
    fields.address = "12 Station Road, Durg".to_string();
    fields.occupation = "Engineer".to_string();
    fields.emergency_contact_name = "Priya Prakash".to_string();
    fields.emergency_contact_number = "+919812345678".to_string();
    fields.primary_physician = "Leila Cameron".to_string();
    fields.insurance_provider = "Govt India Scheme".to_string();
    fields.insurance_policy_number = "ABC123456789".to_string();
    fields.allergies = "Penicillin".to_string();
    fields.identification_type = Some(IdentificationType::Passport);
    fields.identification_number = "P1234567".to_string();
    fields.treatment_consent = true;
    fields.disclosure_consent = true;
    fields.privacy_consent = true;
}

#[test]
fn test_defaults_are_seeded_from_known_user() {
    let form = RegistrationForm::new(user(), Arc::new(MockRegistry::new()), Arc::new(RecordingNavigator::new()));
    let values = form.values();

    assert_eq!(values.name, "Anand Prakash");
    assert_eq!(values.email, "anand@example.com");
    assert_eq!(values.phone, "+919876543210");
    assert_eq!(values.gender, Gender::Male);
    assert_eq!(values.identification_type, Some(IdentificationType::BirthCertificate));
    assert!(values.identification_document.is_empty());
    assert!(!values.treatment_consent && !values.disclosure_consent && !values.privacy_consent);
}

#[tokio::test]
async fn test_registration_without_consent_never_reaches_backend() {
    let mut registry = MockRegistry::new();
    registry.expect_register_patient().never();

    let navigator = RecordingNavigator::new();
    let form = RegistrationForm::new(user(), Arc::new(registry), Arc::new(navigator.clone()));
    form.update(|f| {
        complete(f);
        f.treatment_consent = false;
        f.disclosure_consent = false;
        f.privacy_consent = false;
    });

    let result = form.submit().await;

    assert_matches!(result, Err(FormError::Validation(ref err)) if err.field == "treatmentConsent");
    assert_eq!(
        form.errors().get("treatmentConsent").map(String::as_str),
        Some("You must consent to treatment in order to proceed")
    );
    assert!(navigator.visited().is_empty());
}

#[tokio::test]
async fn test_each_consent_is_required() {
    for field in ["treatmentConsent", "disclosureConsent", "privacyConsent"] {
        let mut registry = MockRegistry::new();
        registry.expect_register_patient().never();

        let form = RegistrationForm::new(user(), Arc::new(registry), Arc::new(RecordingNavigator::new()));
        form.update(|f| {
            complete(f);
            match field {
                "treatmentConsent" => f.treatment_consent = false,
                "disclosureConsent" => f.disclosure_consent = false,
                _ => f.privacy_consent = false,
            }
        });

        let err = form.submit().await.unwrap_err();
        assert_eq!(err.field(), Some(field));
    }
}

#[tokio::test]
async fn test_unknown_physician_is_rejected() {
    let mut registry = MockRegistry::new();
    registry.expect_register_patient().never();

    let form = RegistrationForm::new(user(), Arc::new(registry), Arc::new(RecordingNavigator::new()));
    form.update(|f| {
        complete(f);
        f.primary_physician = "Dr. Nobody".to_string();
    });

    let err = form.submit().await.unwrap_err();
    assert_eq!(err.field(), Some("primaryPhysician"));
}

#[tokio::test]
async fn test_identification_file_is_packaged_with_name_and_type() {
    let mut registry = MockRegistry::new();
    registry.expect_register_patient()
        .withf(|patient| {
            patient.identification_document.as_ref().is_some_and(|doc| {
                doc.file_name == "id.png" && doc.media_type == "image/png" && doc.bytes == vec![0x89, 0x50, 0x4e, 0x47]
            })
        })
        .times(1)
        .returning(|_| Ok(PatientRef { id: "patient-9".to_string() }));

    let navigator = RecordingNavigator::new();
    let form = RegistrationForm::new(user(), Arc::new(registry), Arc::new(navigator.clone()));
    form.update(|f| {
        complete(f);
        f.identification_document = vec![DocumentUpload::new("id.png", "image/png", vec![0x89, 0x50, 0x4e, 0x47])];
    });

    let patient = form.submit().await.expect("registration should succeed");

    assert_eq!(patient.id, "patient-9");
    assert_eq!(navigator.last().as_deref(), Some("/patients/user-42/new-appointment"));
    assert!(!form.is_submitting());
}

#[tokio::test]
async fn test_missing_document_leaves_payload_empty() {
    let mut registry = MockRegistry::new();
    registry.expect_register_patient()
        .withf(|patient| {
            patient.identification_document.is_none()
                && patient.user_id == "user-42"
                && patient.allergies.as_deref() == Some("Penicillin")
                && patient.current_medication.is_none()
        })
        .times(1)
        .returning(|_| Ok(PatientRef { id: "patient-1".to_string() }));

    let form = RegistrationForm::new(user(), Arc::new(registry), Arc::new(RecordingNavigator::new()));
    form.update(complete);

    assert!(form.submit().await.is_ok());
}

#[tokio::test]
async fn test_remote_failure_preserves_entered_values() {
    let mut registry = MockRegistry::new();
    registry.expect_register_patient()
        .times(1)
        .returning(|_| Err(RemoteCallError::Transport("connection reset".to_string())));

    let navigator = RecordingNavigator::new();
    let form = RegistrationForm::new(TestUser::patient(), Arc::new(registry), Arc::new(navigator.clone()));
    form.update(complete);
    let before = form.values();

    let result = form.submit().await;

    assert_matches!(result, Err(FormError::Remote(RemoteCallError::Transport(_))));
    assert_eq!(form.values(), before);
    assert!(!form.is_submitting());
    assert!(navigator.visited().is_empty());
}

#[test]
fn test_sections_cover_every_validated_field() {
    let form = RegistrationForm::new(user(), Arc::new(MockRegistry::new()), Arc::new(RecordingNavigator::new()));
    let sections = form.sections();

    let titles: Vec<_> = sections.iter().map(|s| s.title).collect();
    assert_eq!(
        titles,
        vec!["Personal Information", "Medical Information", "Identification and Verification", "Consent and Privacy"]
    );

    let rendered: Vec<_> = sections.iter().flat_map(|s| s.field_names()).collect();
    for field in registration_schema().field_names() {
        assert!(rendered.contains(&field), "{} is validated but never rendered", field);
    }
}
