// ==============================================================================
// FIELD DESCRIPTORS
// Widget kinds and view-model types shared by every form.
// ==============================================================================

use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FormFieldType {
    Input,
    Textarea,
    PhoneInput,
    Checkbox,
    DatePicker,
    Select,
    /// Custom-rendered widget such as a radio group or a file uploader.
    Skeleton,
}

impl fmt::Display for FormFieldType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FormFieldType::Input => write!(f, "input"),
            FormFieldType::Textarea => write!(f, "textarea"),
            FormFieldType::PhoneInput => write!(f, "phoneInput"),
            FormFieldType::Checkbox => write!(f, "checkbox"),
            FormFieldType::DatePicker => write!(f, "datePicker"),
            FormFieldType::Select => write!(f, "select"),
            FormFieldType::Skeleton => write!(f, "skeleton"),
        }
    }
}

/// Describes one input widget the view should render.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldDescriptor {
    pub name: &'static str,
    pub label: &'static str,
    pub kind: FormFieldType,
    pub placeholder: Option<&'static str>,
    pub options: Vec<&'static str>,
    pub date_format: Option<&'static str>,
}

impl FieldDescriptor {
    pub fn new(name: &'static str, label: &'static str, kind: FormFieldType) -> Self {
        Self {
            name,
            label,
            kind,
            placeholder: None,
            options: Vec::new(),
            date_format: None,
        }
    }

    pub fn placeholder(mut self, placeholder: &'static str) -> Self {
        self.placeholder = Some(placeholder);
        self
    }

    pub fn options(mut self, options: impl IntoIterator<Item = &'static str>) -> Self {
        self.options = options.into_iter().collect();
        self
    }

    pub fn date_format(mut self, format: &'static str) -> Self {
        self.date_format = Some(format);
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FormSection {
    pub title: &'static str,
    pub fields: Vec<FieldDescriptor>,
}

impl FormSection {
    pub fn field_names(&self) -> Vec<&'static str> {
        self.fields.iter().map(|field| field.name).collect()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ButtonStyle {
    Primary,
    /// Destructive action, rendered in the danger palette.
    Danger,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SubmitButton {
    pub label: &'static str,
    pub style: ButtonStyle,
    /// Shows the busy indicator and disables the control.
    pub busy: bool,
}

impl SubmitButton {
    pub fn is_disabled(&self) -> bool {
        self.busy
    }
}
