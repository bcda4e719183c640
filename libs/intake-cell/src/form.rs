use std::sync::Arc;

use chrono::Utc;
use tracing::{debug, error, info, instrument};

use shared_models::{
    routes, ButtonStyle, FieldDescriptor, FormError, FormFieldType, Navigator, SubmitButton, User,
};
use shared_utils::{FieldErrors, FormState, Schema};

use crate::models::{IntakeFields, NewUser};
use crate::schema::intake_schema;
use crate::services::UserDirectory;

/// First screen of the booking flow: collects name, email and phone.
pub struct IntakeForm {
    state: FormState<IntakeFields>,
    schema: Schema<IntakeFields>,
    users: Arc<dyn UserDirectory>,
    navigator: Arc<dyn Navigator>,
}

impl IntakeForm {
    pub fn new(users: Arc<dyn UserDirectory>, navigator: Arc<dyn Navigator>) -> Self {
        Self {
            state: FormState::new(IntakeFields::default()),
            schema: intake_schema(),
            users,
            navigator,
        }
    }

    pub fn values(&self) -> IntakeFields {
        self.state.values()
    }

    pub fn update(&self, apply: impl FnOnce(&mut IntakeFields)) {
        self.state.update(apply);
    }

    pub fn errors(&self) -> FieldErrors {
        self.state.errors()
    }

    pub fn is_submitting(&self) -> bool {
        self.state.is_submitting()
    }

    pub fn fields(&self) -> Vec<FieldDescriptor> {
        vec![
            FieldDescriptor::new("name", "Full Name", FormFieldType::Input)
                .placeholder("Anand Prakash"),
            FieldDescriptor::new("email", "Email", FormFieldType::Input)
                .placeholder("anand@gmail.com"),
            FieldDescriptor::new("phone", "Phone number", FormFieldType::PhoneInput)
                .placeholder("(+91) 123-456-7890"),
        ]
    }

    pub fn submit_button(&self) -> SubmitButton {
        SubmitButton {
            label: "Get Started",
            style: ButtonStyle::Primary,
            busy: self.is_submitting(),
        }
    }

    /// Creates the user and moves on to registration.
    ///
    /// Field values are never modified here, so a failed attempt can be
    /// retried without retyping.
    #[instrument(skip(self))]
    pub async fn submit(&self) -> Result<User, FormError> {
        let _guard = self.state.begin_submit()?;
        let values = self.state.validate(&self.schema, Utc::now())?;

        let new_user = NewUser::from(values);
        debug!("Submitting intake for {}", new_user.email);

        match self.users.create_user(new_user).await {
            Ok(user) => {
                info!("User {} created", user.id);
                self.navigator.push(&routes::register(&user.id));
                Ok(user)
            }
            Err(e) => {
                error!("Failed to create user: {}", e);
                Err(FormError::Remote(e))
            }
        }
    }
}
