use assert_matches::assert_matches;
use chrono::{TimeZone, Utc};
use serde_json::json;
use wiremock::{MockServer, Mock, ResponseTemplate};
use wiremock::matchers::{body_json, header, method, path, query_param};

use appointment_cell::*;
use shared_models::RemoteCallError;
use shared_utils::test_utils::{TestConfig, MockBackendResponses};

#[tokio::test]
async fn test_create_appointment_posts_pending_row() {
    let mock_server = MockServer::start().await;
    let config = TestConfig::with_backend(mock_server.uri()).to_app_config();
    let schedule = Utc.with_ymd_and_hms(2030, 5, 14, 9, 30, 0).unwrap();

    Mock::given(method("POST"))
        .and(path("/rest/v1/appointments"))
        .and(header("Prefer", "return=representation"))
        .and(body_json(json!({
            "userId": "user-1",
            "patientId": "patient-1",
            "primaryPhysician": "John Green",
            "schedule": "2030-05-14T09:30:00Z",
            "reason": "Annual check-up",
            "note": null,
            "status": "pending"
        })))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!([
            MockBackendResponses::appointment_row("appt-1", "pending")
        ])))
        .expect(1)
        .mount(&mock_server)
        .await;

    let service = AppointmentService::new(&config);
    let created = service
        .create_appointment(NewAppointment {
            user_id: "user-1".to_string(),
            patient_id: "patient-1".to_string(),
            primary_physician: "John Green".to_string(),
            schedule,
            reason: "Annual check-up".to_string(),
            note: None,
            status: AppointmentStatus::Pending,
        })
        .await
        .expect("appointment should be created");

    assert_eq!(created.id, "appt-1");
}

#[tokio::test]
async fn test_cancel_patches_only_cancellation_columns() {
    let mock_server = MockServer::start().await;
    let config = TestConfig::with_backend(mock_server.uri()).to_app_config();

    Mock::given(method("PATCH"))
        .and(path("/rest/v1/appointments"))
        .and(query_param("id", "eq.appt-1"))
        .and(body_json(json!({
            "cancellationReason": "Feeling better",
            "status": "cancelled"
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            MockBackendResponses::appointment_row("appt-1", "cancelled")
        ])))
        .expect(1)
        .mount(&mock_server)
        .await;

    let service = AppointmentService::new(&config);
    let updated = service
        .update_appointment(AppointmentUpdate {
            appointment_id: "appt-1".to_string(),
            user_id: "user-1".to_string(),
            changes: AppointmentChanges::Cancel {
                cancellation_reason: "Feeling better".to_string(),
                status: AppointmentStatus::Cancelled,
            },
        })
        .await
        .expect("appointment should be cancelled");

    assert_eq!(updated.id, "appt-1");
}

#[tokio::test]
async fn test_update_of_missing_appointment() {
    let mock_server = MockServer::start().await;
    let config = TestConfig::with_backend(mock_server.uri()).to_app_config();

    Mock::given(method("PATCH"))
        .and(path("/rest/v1/appointments"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .mount(&mock_server)
        .await;

    let service = AppointmentService::new(&config);
    let result = service
        .update_appointment(AppointmentUpdate {
            appointment_id: "missing".to_string(),
            user_id: "user-1".to_string(),
            changes: AppointmentChanges::Reschedule {
                primary_physician: "John Green".to_string(),
                schedule: Utc::now(),
                reason: "Follow-up".to_string(),
                note: None,
                status: AppointmentStatus::Scheduled,
            },
        })
        .await;

    assert_matches!(result, Err(RemoteCallError::NotFound(_)));
}

#[tokio::test]
async fn test_backend_rejection_is_typed() {
    let mock_server = MockServer::start().await;
    let config = TestConfig::with_backend(mock_server.uri()).to_app_config();

    Mock::given(method("POST"))
        .and(path("/rest/v1/appointments"))
        .respond_with(ResponseTemplate::new(401).set_body_json(
            MockBackendResponses::error_response("JWT expired", "PGRST301"),
        ))
        .mount(&mock_server)
        .await;

    let service = AppointmentService::new(&config);
    let result = service
        .create_appointment(NewAppointment {
            user_id: "user-1".to_string(),
            patient_id: "patient-1".to_string(),
            primary_physician: "John Green".to_string(),
            schedule: Utc::now(),
            reason: "Annual check-up".to_string(),
            note: None,
            status: AppointmentStatus::Pending,
        })
        .await;

    assert_matches!(result, Err(RemoteCallError::Auth(_)));
}
