use serde::{Deserialize, Serialize};

/// Field state of the intake form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IntakeFields {
    pub name: String,
    pub email: String,
    pub phone: String,
}

/// Payload of the user-creation call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewUser {
    pub name: String,
    pub email: String,
    pub phone: String,
}

impl From<IntakeFields> for NewUser {
    fn from(fields: IntakeFields) -> Self {
        Self {
            name: fields.name.trim().to_string(),
            email: fields.email.trim().to_string(),
            phone: fields.phone.trim().to_string(),
        }
    }
}
