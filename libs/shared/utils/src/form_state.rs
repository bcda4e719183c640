use std::collections::BTreeMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Mutex, MutexGuard};

use chrono::{DateTime, Utc};
use tracing::debug;

use shared_models::FormError;

use crate::validation::Schema;

pub type FieldErrors = BTreeMap<&'static str, String>;

/// Per-instance field values, field errors and the in-progress flag.
pub struct FormState<F> {
    values: Mutex<F>,
    errors: Mutex<FieldErrors>,
    submitting: AtomicBool,
}

impl<F: Clone> FormState<F> {
    pub fn new(defaults: F) -> Self {
        Self {
            values: Mutex::new(defaults),
            errors: Mutex::new(FieldErrors::new()),
            submitting: AtomicBool::new(false),
        }
    }

    pub fn values(&self) -> F {
        lock(&self.values).clone()
    }

    pub fn update(&self, apply: impl FnOnce(&mut F)) {
        apply(&mut lock(&self.values));
    }

    pub fn errors(&self) -> FieldErrors {
        lock(&self.errors).clone()
    }

    pub fn error(&self, field: &str) -> Option<String> {
        lock(&self.errors).get(field).cloned()
    }

    pub fn clear_error(&self, field: &str) {
        lock(&self.errors).remove(field);
    }

    pub fn is_submitting(&self) -> bool {
        self.submitting.load(Ordering::Acquire)
    }

    /// Claims the in-progress flag. Fails while another submission holds it.
    pub fn begin_submit(&self) -> Result<SubmitGuard<'_>, FormError> {
        self.submitting
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .map_err(|_| FormError::SubmissionInProgress)?;
        Ok(SubmitGuard { flag: &self.submitting })
    }

    /// Validates a snapshot of the current values.
    ///
    /// A failure is recorded against the failing field only; every other
    /// field keeps its value and previous error. Success clears all errors.
    pub fn validate(&self, schema: &Schema<F>, now: DateTime<Utc>) -> Result<F, FormError> {
        let values = self.values();

        match schema.validate(&values, now) {
            Ok(()) => {
                lock(&self.errors).clear();
                Ok(values)
            }
            Err(err) => {
                debug!("Rejecting submission: {}", err);
                lock(&self.errors).insert(err.field, err.message.clone());
                Err(FormError::Validation(err))
            }
        }
    }
}

/// Clears the in-progress flag when dropped, including when the pending
/// submission future is abandoned.
#[derive(Debug)]
pub struct SubmitGuard<'a> {
    flag: &'a AtomicBool,
}

impl Drop for SubmitGuard<'_> {
    fn drop(&mut self) {
        self.flag.store(false, Ordering::Release);
    }
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::FieldValue;
    use assert_matches::assert_matches;

    #[derive(Clone, Debug, Default)]
    struct Login {
        user: String,
        email: String,
    }

    fn schema() -> Schema<Login> {
        Schema::<Login>::new()
            .field("user", |l| FieldValue::Text(&l.user))
            .required("User is required")
            .field("email", |l| FieldValue::Text(&l.email))
            .required("Email is required")
            .email("Invalid email address")
    }

    #[test]
    fn test_guard_blocks_second_submit_until_dropped() {
        let state = FormState::new(Login::default());

        let guard = state.begin_submit().unwrap();
        assert!(state.is_submitting());
        assert_matches!(state.begin_submit(), Err(FormError::SubmissionInProgress));

        drop(guard);
        assert!(!state.is_submitting());
        assert!(state.begin_submit().is_ok());
    }

    #[test]
    fn test_failure_records_only_the_failing_field() {
        let state = FormState::new(Login::default());
        state.update(|l| l.user = "ada".to_string());
        state.update(|l| l.email = "nope".to_string());

        let err = state.validate(&schema(), Utc::now()).unwrap_err();
        assert_eq!(err.field(), Some("email"));
        assert_eq!(state.error("email").as_deref(), Some("Invalid email address"));
        assert_eq!(state.error("user"), None);

        // Earlier errors on other fields are left alone.
        state.update(|l| {
            l.user.clear();
            l.email = "ada@example.com".to_string();
        });
        let err = state.validate(&schema(), Utc::now()).unwrap_err();
        assert_eq!(err.field(), Some("user"));
        assert_eq!(state.errors().len(), 2);

        assert_eq!(state.values().email, "ada@example.com");
    }

    #[test]
    fn test_success_clears_errors() {
        let state = FormState::new(Login::default());
        assert!(state.validate(&schema(), Utc::now()).is_err());

        state.update(|l| {
            l.user = "ada".to_string();
            l.email = "ada@example.com".to_string();
        });
        let values = state.validate(&schema(), Utc::now()).unwrap();
        assert_eq!(values.user, "ada");
        assert!(state.errors().is_empty());
    }
}
