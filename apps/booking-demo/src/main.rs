use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{bail, Context};
use dotenv::dotenv;
use serde::Deserialize;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use appointment_cell::{AppointmentFields, AppointmentForm, AppointmentMode, AppointmentService};
use intake_cell::{IntakeFields, IntakeForm, UserService};
use registration_cell::{DocumentUpload, PatientService, RegistrationFields, RegistrationForm};
use shared_config::AppConfig;
use shared_models::LoggingNavigator;

/// One walk through the booking flow, read from a JSON file.
#[derive(Debug, Deserialize)]
struct Script {
    intake: IntakeFields,
    #[serde(default)]
    registration: RegistrationFields,
    document: Option<PathBuf>,
    appointment: AppointmentFields,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Loading Env Vars
    dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let script_path = std::env::args()
        .nth(1)
        .context("usage: booking-demo <script.json>")?;
    let raw = tokio::fs::read_to_string(&script_path)
        .await
        .with_context(|| format!("reading {}", script_path))?;
    let script: Script = serde_json::from_str(&raw)
        .with_context(|| format!("parsing {}", script_path))?;

    let config = AppConfig::from_env();
    if !config.is_configured() {
        bail!("BACKEND_URL and BACKEND_ANON_KEY must be set");
    }

    info!("Starting booking flow from {}", script_path);
    let navigator = Arc::new(LoggingNavigator);

    // Intake
    let intake = IntakeForm::new(Arc::new(UserService::new(&config)), navigator.clone());
    intake.update(|fields| *fields = script.intake);
    let user = match intake.submit().await {
        Ok(user) => user,
        Err(e) => {
            warn!("Intake errors: {:?}", intake.errors());
            return Err(e).context("intake failed");
        }
    };

    // Registration
    let document = match &script.document {
        Some(path) => vec![DocumentUpload::from_path(path)
            .await
            .with_context(|| format!("reading document {}", path.display()))?],
        None => Vec::new(),
    };
    let registration = RegistrationForm::new(
        user.clone(),
        Arc::new(PatientService::new(&config)),
        navigator.clone(),
    );
    registration.update(|fields| {
        *fields = RegistrationFields {
            name: fields.name.clone(),
            email: fields.email.clone(),
            phone: fields.phone.clone(),
            identification_document: document,
            ..script.registration
        };
    });
    let patient = match registration.submit().await {
        Ok(patient) => patient,
        Err(e) => {
            warn!("Registration errors: {:?}", registration.errors());
            return Err(e).context("registration failed");
        }
    };

    // Appointment
    let appointment = AppointmentForm::new(
        AppointmentMode::Create,
        user.id.clone(),
        Some(patient.id),
        Arc::new(AppointmentService::new(&config)),
        navigator,
    );
    appointment.update(|fields| *fields = script.appointment);
    let booked = match appointment.submit().await {
        Ok(booked) => booked,
        Err(e) => {
            warn!("Appointment errors: {:?}", appointment.errors());
            return Err(e).context("appointment failed");
        }
    };

    info!("Booked appointment {} for {}", booked.id, user.name);
    Ok(())
}
