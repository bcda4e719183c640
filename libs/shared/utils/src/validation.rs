// =====================================================================================
// SCHEMA VALIDATION - DECLARATIVE PER-FIELD CONSTRAINTS
// =====================================================================================

use std::collections::BTreeMap;
use std::sync::OnceLock;

use chrono::{DateTime, Duration, DurationRound, Utc};
use regex::Regex;
use tracing::debug;

use shared_models::ValidationError;

/// Borrowed view of a single field's current value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FieldValue<'a> {
    Text(&'a str),
    Flag(bool),
    Timestamp(DateTime<Utc>),
    /// Number of files currently selected in an uploader.
    Files(usize),
}

impl FieldValue<'_> {
    fn is_empty(&self) -> bool {
        match self {
            FieldValue::Text(text) => text.trim().is_empty(),
            FieldValue::Files(count) => *count == 0,
            FieldValue::Flag(_) | FieldValue::Timestamp(_) => false,
        }
    }
}

#[derive(Debug, Clone)]
pub enum Constraint {
    MinLength(usize),
    MaxLength(usize),
    Email,
    Phone,
    OneOf(&'static [&'static str]),
    /// A checkbox that must be ticked.
    Accepted,
    /// Timestamp may not be earlier than the current minute.
    NotInPast,
}

impl Constraint {
    fn check(&self, value: FieldValue<'_>, now: DateTime<Utc>) -> bool {
        match (self, value) {
            (Constraint::MinLength(min), FieldValue::Text(text)) => text.trim().chars().count() >= *min,
            (Constraint::MaxLength(max), FieldValue::Text(text)) => text.trim().chars().count() <= *max,
            (Constraint::Email, FieldValue::Text(text)) => is_valid_email(text),
            (Constraint::Phone, FieldValue::Text(text)) => is_valid_phone(text),
            (Constraint::OneOf(options), FieldValue::Text(text)) => options.iter().any(|option| *option == text),
            (Constraint::Accepted, FieldValue::Flag(flag)) => flag,
            (Constraint::NotInPast, FieldValue::Timestamp(at)) => {
                let floor = now.duration_trunc(Duration::minutes(1)).unwrap_or(now);
                at >= floor
            }
            // A constraint applied to the wrong kind of value never passes.
            _ => false,
        }
    }
}

type Accessor<F> = for<'a> fn(&'a F) -> FieldValue<'a>;

pub struct FieldRule<F> {
    pub name: &'static str,
    accessor: Accessor<F>,
    required: Option<String>,
    constraints: Vec<(Constraint, String)>,
}

impl<F> FieldRule<F> {
    pub fn is_required(&self) -> bool {
        self.required.is_some()
    }

    fn check(&self, fields: &F, now: DateTime<Utc>) -> Result<(), ValidationError> {
        let value = (self.accessor)(fields);

        if value.is_empty() {
            return match &self.required {
                Some(message) => Err(ValidationError::new(self.name, message.clone())),
                None => Ok(()),
            };
        }

        for (constraint, message) in &self.constraints {
            if !constraint.check(value, now) {
                return Err(ValidationError::new(self.name, message.clone()));
            }
        }

        Ok(())
    }
}

/// Ordered set of field rules. The first failing field wins.
pub struct Schema<F> {
    rules: Vec<FieldRule<F>>,
}

impl<F> Default for Schema<F> {
    fn default() -> Self {
        Self::new()
    }
}

impl<F> Schema<F> {
    pub fn new() -> Self {
        Self { rules: Vec::new() }
    }

    /// Starts a new optional field; following constraint calls apply to it.
    pub fn field(mut self, name: &'static str, accessor: Accessor<F>) -> Self {
        self.rules.push(FieldRule {
            name,
            accessor,
            required: None,
            constraints: Vec::new(),
        });
        self
    }

    pub fn required(self, message: impl Into<String>) -> Self {
        let message = message.into();
        self.with_last(|rule| rule.required = Some(message))
    }

    pub fn min_length(self, min: usize, message: impl Into<String>) -> Self {
        self.constraint(Constraint::MinLength(min), message)
    }

    pub fn max_length(self, max: usize, message: impl Into<String>) -> Self {
        self.constraint(Constraint::MaxLength(max), message)
    }

    pub fn email(self, message: impl Into<String>) -> Self {
        self.constraint(Constraint::Email, message)
    }

    pub fn phone(self, message: impl Into<String>) -> Self {
        self.constraint(Constraint::Phone, message)
    }

    pub fn one_of(self, options: &'static [&'static str], message: impl Into<String>) -> Self {
        self.constraint(Constraint::OneOf(options), message)
    }

    pub fn accepted(self, message: impl Into<String>) -> Self {
        self.constraint(Constraint::Accepted, message)
    }

    pub fn not_in_past(self, message: impl Into<String>) -> Self {
        self.constraint(Constraint::NotInPast, message)
    }

    pub fn constraint(self, constraint: Constraint, message: impl Into<String>) -> Self {
        let message = message.into();
        self.with_last(|rule| rule.constraints.push((constraint, message)))
    }

    fn with_last(mut self, apply: impl FnOnce(&mut FieldRule<F>)) -> Self {
        // Constraints declared before any field have nothing to attach to.
        if let Some(rule) = self.rules.last_mut() {
            apply(rule);
        }
        self
    }

    pub fn field_names(&self) -> Vec<&'static str> {
        self.rules.iter().map(|rule| rule.name).collect()
    }

    pub fn required_fields(&self) -> Vec<&'static str> {
        self.rules
            .iter()
            .filter(|rule| rule.is_required())
            .map(|rule| rule.name)
            .collect()
    }

    pub fn covers(&self, field: &str) -> bool {
        self.rules.iter().any(|rule| rule.name == field)
    }

    /// Returns the first failing field in declaration order.
    pub fn validate(&self, fields: &F, now: DateTime<Utc>) -> Result<(), ValidationError> {
        for rule in &self.rules {
            if let Err(err) = rule.check(fields, now) {
                debug!("Field '{}' failed validation: {}", err.field, err.message);
                return Err(err);
            }
        }
        Ok(())
    }

    /// Collects every failing field, keyed by field name.
    pub fn validate_all(&self, fields: &F, now: DateTime<Utc>) -> BTreeMap<&'static str, String> {
        self.rules
            .iter()
            .filter_map(|rule| rule.check(fields, now).err())
            .map(|err| (err.field, err.message))
            .collect()
    }
}

fn email_regex() -> &'static Regex {
    static EMAIL: OnceLock<Regex> = OnceLock::new();
    EMAIL.get_or_init(|| {
        Regex::new(r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$")
            .expect("email pattern is valid")
    })
}

fn phone_regex() -> &'static Regex {
    static PHONE: OnceLock<Regex> = OnceLock::new();
    PHONE.get_or_init(|| Regex::new(r"^\+\d{10,15}$").expect("phone pattern is valid"))
}

pub fn is_valid_email(email: &str) -> bool {
    email.len() <= 254 && email_regex().is_match(email)
}

/// International number: a leading `+` followed by 10 to 15 digits.
pub fn is_valid_phone(phone: &str) -> bool {
    phone_regex().is_match(phone)
}
