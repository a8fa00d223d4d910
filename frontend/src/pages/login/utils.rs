use std::collections::BTreeMap;

use crate::api::SignInRequest;

pub const INVALID_EMAIL: &str = "Invalid email address";
pub const PASSWORD_TOO_SHORT: &str = "Password must be at least 6 characters long";
pub const MIN_PASSWORD_LEN: usize = 6;

/// Raw values captured from the form on a submit attempt.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormInput {
    pub email: String,
    pub password: String,
}

impl FormInput {
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
        }
    }
}

impl From<FormInput> for SignInRequest {
    fn from(input: FormInput) -> Self {
        SignInRequest {
            email: input.email,
            password: input.password,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Field {
    Email,
    Password,
}

impl Field {
    pub fn as_str(&self) -> &'static str {
        match self {
            Field::Email => "email",
            Field::Password => "password",
        }
    }
}

/// Per-field messages from one validation run. A missing key means the field passed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrors(BTreeMap<Field, String>);

impl ValidationErrors {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn get(&self, field: Field) -> Option<&str> {
        self.0.get(&field).map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (Field, &str)> {
        self.0.iter().map(|(field, msg)| (*field, msg.as_str()))
    }

    fn insert(&mut self, field: Field, message: &str) {
        self.0.insert(field, message.to_string());
    }
}

pub fn is_valid_email(email: &str) -> bool {
    !email.is_empty()
        && email_address::EmailAddress::parse_with_options(
            email,
            email_address::Options::default()
                .with_required_tld()
                .without_display_text()
                .without_domain_literal(),
        )
        .is_ok()
}

/// Checks both fields every time; never stops at the first failure.
pub fn validate(input: &FormInput) -> ValidationErrors {
    let mut errors = ValidationErrors::default();
    if !is_valid_email(&input.email) {
        errors.insert(Field::Email, INVALID_EMAIL);
    }
    if input.password.chars().count() < MIN_PASSWORD_LEN {
        errors.insert(Field::Password, PASSWORD_TOO_SHORT);
    }
    errors
}
