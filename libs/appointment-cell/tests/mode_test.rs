use chrono::{Duration, TimeZone, Utc};

use appointment_cell::*;
use shared_models::ButtonStyle;

fn filled() -> AppointmentFields {
    AppointmentFields {
        primary_physician: "John Green".to_string(),
        schedule: Utc::now() + Duration::days(2),
        reason: "Annual check-up".to_string(),
        note: String::new(),
        cancellation_reason: String::new(),
    }
}

#[test]
fn test_mode_maps_to_status() {
    assert_eq!(AppointmentMode::Create.status(), AppointmentStatus::Pending);
    assert_eq!(AppointmentMode::Schedule.status(), AppointmentStatus::Scheduled);
    assert_eq!(AppointmentMode::Cancel.status(), AppointmentStatus::Cancelled);
}

#[test]
fn test_button_label_and_style() {
    assert_eq!(AppointmentMode::Create.button_label(), "Create Appointment");
    assert_eq!(AppointmentMode::Schedule.button_label(), "Schedule Appointment");
    assert_eq!(AppointmentMode::Cancel.button_label(), "Cancel Appointment");

    assert_eq!(AppointmentMode::Cancel.button_style(), ButtonStyle::Danger);
    assert_eq!(AppointmentMode::Create.button_style(), ButtonStyle::Primary);
    assert_eq!(AppointmentMode::Schedule.button_style(), ButtonStyle::Primary);
}

#[test]
fn test_mode_parses_from_str() {
    for mode in AppointmentMode::ALL {
        assert_eq!(mode.to_string().parse::<AppointmentMode>(), Ok(mode));
    }
    assert!("reschedule".parse::<AppointmentMode>().is_err());
}

#[test]
fn test_visibility_per_mode() {
    let cancel = AppointmentMode::Cancel.visibility();
    assert!(cancel.shows(AppointmentField::CancellationReason));
    assert!(!cancel.shows(AppointmentField::PrimaryPhysician));
    assert!(!cancel.shows(AppointmentField::Schedule));

    for mode in [AppointmentMode::Create, AppointmentMode::Schedule] {
        let visibility = mode.visibility();
        assert!(visibility.shows(AppointmentField::PrimaryPhysician));
        assert!(visibility.shows(AppointmentField::Schedule));
        assert!(visibility.shows(AppointmentField::Reason));
        assert!(visibility.shows(AppointmentField::Note));
        assert!(!visibility.shows(AppointmentField::CancellationReason));
    }
}

#[test]
fn test_schema_only_covers_visible_fields() {
    for mode in AppointmentMode::ALL {
        let schema = appointment_schema(mode);
        let visible: Vec<&str> = mode
            .visibility()
            .visible_fields()
            .iter()
            .map(|field| field.name())
            .collect();

        assert_eq!(schema.field_names(), visible, "mode {}", mode);
    }
}

#[test]
fn test_required_fields_per_mode() {
    assert_eq!(
        appointment_schema(AppointmentMode::Create).required_fields(),
        vec!["primaryPhysician", "reason"]
    );
    assert_eq!(
        appointment_schema(AppointmentMode::Schedule).required_fields(),
        vec!["primaryPhysician"]
    );
    assert_eq!(
        appointment_schema(AppointmentMode::Cancel).required_fields(),
        vec!["cancellationReason"]
    );
}

#[test]
fn test_cancellation_reason_ignored_outside_cancel() {
    let now = Utc::now();
    let fields = filled();

    assert!(appointment_schema(AppointmentMode::Create).validate(&fields, now).is_ok());
    assert!(appointment_schema(AppointmentMode::Schedule).validate(&fields, now).is_ok());

    let err = appointment_schema(AppointmentMode::Cancel)
        .validate(&fields, now)
        .unwrap_err();
    assert_eq!(err.field, "cancellationReason");
}

#[test]
fn test_schedule_mode_allows_blank_reason() {
    let fields = AppointmentFields {
        reason: String::new(),
        ..filled()
    };

    assert!(appointment_schema(AppointmentMode::Schedule).validate(&fields, Utc::now()).is_ok());

    let err = appointment_schema(AppointmentMode::Create)
        .validate(&fields, Utc::now())
        .unwrap_err();
    assert_eq!(err.field, "reason");
}

#[test]
fn test_past_schedule_rejected() {
    let fields = AppointmentFields {
        schedule: Utc::now() - Duration::hours(3),
        ..filled()
    };

    let err = appointment_schema(AppointmentMode::Create)
        .validate(&fields, Utc::now())
        .unwrap_err();
    assert_eq!(err.field, "schedule");
}

#[test]
fn test_unknown_doctor_rejected() {
    let fields = AppointmentFields {
        primary_physician: "Gregory House".to_string(),
        ..filled()
    };

    let err = appointment_schema(AppointmentMode::Create)
        .validate(&fields, Utc::now())
        .unwrap_err();
    assert_eq!(err.field, "primaryPhysician");
    assert_eq!(err.message, "Select at least one doctor");
}

#[test]
fn test_changes_serialize_only_written_columns() {
    let cancel = AppointmentChanges::Cancel {
        cancellation_reason: "Feeling better".to_string(),
        status: AppointmentStatus::Cancelled,
    };

    assert_eq!(
        serde_json::to_value(&cancel).unwrap(),
        serde_json::json!({
            "cancellationReason": "Feeling better",
            "status": "cancelled"
        })
    );
}

#[test]
fn test_reschedule_sends_reason_and_note() {
    let schedule = Utc.with_ymd_and_hms(2030, 5, 14, 9, 30, 0).unwrap();
    let reschedule = AppointmentChanges::Reschedule {
        primary_physician: "Leila Cameron".to_string(),
        schedule,
        reason: "Chest pain now".to_string(),
        note: Some("Bring x-ray".to_string()),
        status: AppointmentStatus::Scheduled,
    };

    assert_eq!(
        serde_json::to_value(&reschedule).unwrap(),
        serde_json::json!({
            "primaryPhysician": "Leila Cameron",
            "schedule": "2030-05-14T09:30:00Z",
            "reason": "Chest pain now",
            "note": "Bring x-ray",
            "status": "scheduled"
        })
    );
}

#[test]
fn test_default_schedule_survives_minute_rollover() {
    let built_at = Utc.with_ymd_and_hms(2030, 5, 14, 10, 15, 30).unwrap();
    let fields = AppointmentFields {
        schedule: next_minute(built_at),
        ..filled()
    };
    let schema = appointment_schema(AppointmentMode::Create);

    assert_eq!(fields.schedule, Utc.with_ymd_and_hms(2030, 5, 14, 10, 16, 0).unwrap());
    assert!(schema.validate(&fields, built_at + Duration::seconds(75)).is_ok());

    let err = schema
        .validate(&fields, built_at + Duration::seconds(90))
        .unwrap_err();
    assert_eq!(err.field, "schedule");
}

#[test]
fn test_default_fields_start_in_the_future() {
    let fields = AppointmentFields::default();

    assert!(fields.schedule > Utc::now() - Duration::seconds(1));
    assert!(appointment_schema(AppointmentMode::Schedule)
        .validate(&AppointmentFields { primary_physician: "John Green".to_string(), ..fields }, Utc::now())
        .is_ok());
}
