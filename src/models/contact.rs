use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

lazy_static! {
  static ref EMAIL_RE: Regex = Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("Invalid regex EMAIL_RE");
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Field {
  Name,
  Email,
  Message,
}

impl Field {
  pub const ALL: [Field; 3] = [Field::Name, Field::Email, Field::Message];

  pub fn id(&self) -> &'static str {
    match self {
      Field::Name => "name",
      Field::Email => "email",
      Field::Message => "message",
    }
  }

  pub fn label_key(&self) -> &'static str {
    match self {
      Field::Name => "contact.form.name",
      Field::Email => "contact.form.email",
      Field::Message => "contact.form.message",
    }
  }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FieldError {
  NameRequired,
  EmailRequired,
  EmailInvalid,
  MessageRequired,
}

impl FieldError {
  pub fn message_key(&self) -> &'static str {
    match self {
      FieldError::NameRequired => "contact.errors.nameRequired",
      FieldError::EmailRequired => "contact.errors.emailRequired",
      FieldError::EmailInvalid => "contact.errors.emailInvalid",
      FieldError::MessageRequired => "contact.errors.messageRequired",
    }
  }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactForm {
  pub name: String,
  pub email: String,
  pub message: String,
}

impl ContactForm {
  pub fn value(&self, field: Field) -> &str {
    match field {
      Field::Name => &self.name,
      Field::Email => &self.email,
      Field::Message => &self.message,
    }
  }

  pub fn set(&mut self, field: Field, value: String) {
    match field {
      Field::Name => self.name = value,
      Field::Email => self.email = value,
      Field::Message => self.message = value,
    }
  }

  pub fn validate(&self) -> FieldErrors {
    let mut errors = FieldErrors::default();
    for field in Field::ALL {
      errors.update(field, self.value(field));
    }
    errors
  }
}

pub fn validate_field(field: Field, value: &str) -> Option<FieldError> {
  // Blank means whitespace-only; the email shape is checked on the raw value
  let blank = value.trim().is_empty();
  match field {
    Field::Name if blank => Some(FieldError::NameRequired),
    Field::Email if blank => Some(FieldError::EmailRequired),
    Field::Email if !EMAIL_RE.is_match(value) => Some(FieldError::EmailInvalid),
    Field::Message if blank => Some(FieldError::MessageRequired),
    _ => None,
  }
}

/// Current validation failures, at most one per field.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FieldErrors(BTreeMap<Field, FieldError>);

impl FieldErrors {
  /// Re-validate one field, returning whether it is now valid.
  pub fn update(&mut self, field: Field, value: &str) -> bool {
    match validate_field(field, value) {
      Some(err) => {
        self.0.insert(field, err);
        false
      }
      None => {
        self.0.remove(&field);
        true
      }
    }
  }

  pub fn get(&self, field: Field) -> Option<FieldError> {
    self.0.get(&field).copied()
  }

  pub fn is_empty(&self) -> bool {
    self.0.is_empty()
  }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SubmitStatus {
  Success,
  Error,
}

impl SubmitStatus {
  pub fn message_key(&self) -> &'static str {
    match self {
      SubmitStatus::Success => "contact.status.success",
      SubmitStatus::Error => "contact.status.error",
    }
  }
}
