pub mod form_state;
pub mod test_utils;
pub mod validation;

pub use form_state::{FieldErrors, FormState, SubmitGuard};
pub use validation::{FieldValue, Schema};
