use tracing::info;

/// Screen transitions requested by a form after a successful submission.
pub trait Navigator: Send + Sync {
    fn push(&self, path: &str);
}

/// Navigator that only records the transition in the log.
#[derive(Debug, Default, Clone)]
pub struct LoggingNavigator;

impl Navigator for LoggingNavigator {
    fn push(&self, path: &str) {
        info!("Navigating to {}", path);
    }
}

pub mod routes {
    pub fn register(user_id: &str) -> String {
        format!("/patients/{}/register", user_id)
    }

    pub fn new_appointment(user_id: &str) -> String {
        format!("/patients/{}/new-appointment", user_id)
    }

    pub fn appointment_success(user_id: &str, appointment_id: &str) -> String {
        format!(
            "/patients/{}/new-appointment/success?appointmentId={}",
            user_id, appointment_id
        )
    }
}
