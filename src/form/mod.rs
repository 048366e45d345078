//! Form element tree for composing a note
//!
//! The form is a flat tree of identified fields. Field lookup by identifier
//! is the only discovery mechanism the picker binder uses, mirroring how a
//! selector finds an input element on a page.

pub mod validate;

use chrono::NaiveDateTime;

use crate::clock::Clock;
use crate::constants::{
    CONTENT_FIELD_ID, EXPIRATION_FIELD_ID, LABEL_CONTENT, LABEL_EXPIRATION, LABEL_SECRET, SECRET_FIELD_ID,
};
use crate::picker::format;
use validate::{validate_content, validate_expiration, validate_secret, ValidationError};

/// What kind of input a field accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// Free text, masked when rendered.
    Secret,
    /// Free text.
    Text,
    /// A date-time in the fixed display format.
    DateTime,
}

/// One input field in the form tree.
#[derive(Debug, Clone)]
pub struct Field {
    /// Unique identifier used for lookup.
    pub id: String,
    /// Human-readable label.
    pub label: String,
    pub kind: FieldKind,
    /// Current raw value.
    pub value: String,
}

impl Field {
    fn new(id: &str, label: &str, kind: FieldKind) -> Self {
        Self {
            id: id.to_string(),
            label: label.to_string(),
            kind,
            value: String::new(),
        }
    }
}

/// The validated output of a successful form submission.
///
/// The expiration value is carried both as a timestamp and in its fixed
/// textual representation, which is what downstream submission consumes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Submission {
    pub secret: String,
    pub content: String,
    pub expiration: NaiveDateTime,
}

impl Submission {
    /// The expiration value rendered with the fixed display format.
    pub fn expiration_text(&self) -> String {
        format::format_value(self.expiration)
    }
}

/// The note-composition form: secret, content, expiration date.
#[derive(Debug, Clone)]
pub struct Form {
    fields: Vec<Field>,
}

impl Form {
    /// Build the note-composition form with its three empty fields.
    pub fn compose() -> Self {
        Self {
            fields: vec![
                Field::new(SECRET_FIELD_ID, LABEL_SECRET, FieldKind::Secret),
                Field::new(CONTENT_FIELD_ID, LABEL_CONTENT, FieldKind::Text),
                Field::new(EXPIRATION_FIELD_ID, LABEL_EXPIRATION, FieldKind::DateTime),
            ],
        }
    }

    /// Build an empty form with no fields at all.
    pub fn empty() -> Self {
        Self { fields: Vec::new() }
    }

    /// Look up a field by identifier.
    pub fn field(&self, id: &str) -> Option<&Field> {
        self.fields.iter().find(|field| field.id == id)
    }

    /// Look up a field by identifier, mutably.
    pub fn field_mut(&mut self, id: &str) -> Option<&mut Field> {
        self.fields.iter_mut().find(|field| field.id == id)
    }

    /// All fields in declaration order.
    pub fn fields(&self) -> &[Field] {
        &self.fields
    }

    /// Validate every field and produce the submission payload.
    ///
    /// All failures are collected rather than stopping at the first, so the
    /// UI can surface everything that needs fixing at once.
    pub fn validate(&self, clock: &dyn Clock) -> Result<Submission, Vec<ValidationError>> {
        let mut errors = Vec::new();

        let secret = self.field_value(SECRET_FIELD_ID);
        if let Err(e) = validate_secret(secret) {
            errors.push(e);
        }

        let content = self.field_value(CONTENT_FIELD_ID);
        if let Err(e) = validate_content(content) {
            errors.push(e);
        }

        let expiration = match validate_expiration(self.field_value(EXPIRATION_FIELD_ID), clock) {
            Ok(value) => Some(value),
            Err(e) => {
                errors.push(e);
                None
            }
        };

        match (expiration, errors.is_empty()) {
            (Some(expiration), true) => Ok(Submission {
                secret: secret.to_string(),
                content: content.to_string(),
                expiration,
            }),
            _ => Err(errors),
        }
    }

    fn field_value(&self, id: &str) -> &str {
        self.field(id).map(|field| field.value.as_str()).unwrap_or("")
    }
}
