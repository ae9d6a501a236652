//! # Form validation for the sign-in and sign-up pages
//!
//! Drafts hold exactly what the user typed. [`SignInDraft::validate`] and
//! [`SignUpDraft::validate`] either produce the typed request body for
//! [`NotesClient`](crate::NotesClient) or a [`FormErrors`] map with one message
//! per failing field. Validation is a UX affordance: the server validates again
//! and its verdict wins.
//!
//! ## Rules
//!
//! | Field | Rule | Message |
//! |-------|------|---------|
//! | `name` | at least 3 characters | [`NAME_TOO_SHORT`] |
//! | `email` | `local@domain.tld` shape | [`INVALID_EMAIL`] |
//! | `password` | at least 8 characters | [`PASSWORD_TOO_SHORT`] |
//! | `password` (sign-up) | letters, digits and `@$!%*?&` only; one of each of lowercase, uppercase, digit, symbol | [`PASSWORD_TOO_WEAK`] |
//! | `age` | finite number, 18 or more | [`INVALID_AGE`] |
//! | `phone` | digits only, at least 10 | [`INVALID_PHONE`] |
//!
//! Only the first failing rule of a field is reported.

use std::collections::BTreeMap;
use std::fmt;

use once_cell::sync::Lazy;
use regex::Regex;

use crate::models::{SignInRequest, SignUpRequest};

pub const INVALID_EMAIL: &str = "Invalid email address";
pub const PASSWORD_TOO_SHORT: &str = "Password must be at least 8 characters";
pub const PASSWORD_TOO_WEAK: &str =
    "Password must include uppercase, lowercase, number, and special character";
pub const NAME_TOO_SHORT: &str = "Name must be at least 3 characters";
pub const INVALID_AGE: &str = "Enter a valid age";
pub const INVALID_PHONE: &str = "Enter a valid phone number";

/// Symbols accepted (and one required) in a sign-up password.
pub const PASSWORD_SYMBOLS: &str = "@$!%*?&";

const MIN_PASSWORD_LEN: usize = 8;
const MIN_NAME_LEN: usize = 3;
const MIN_AGE: f64 = 18.0;

static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Za-z0-9_'+\-.]*[A-Za-z0-9_+\-]@([A-Za-z0-9][A-Za-z0-9\-]*\.)+[A-Za-z]{2,}$")
        .expect("email pattern is valid")
});

static PHONE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[0-9]{10,}$").expect("phone pattern is valid"));

/// A validated form field.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Field {
    Name,
    Email,
    Password,
    Age,
    Phone,
}

impl Field {
    pub fn as_str(&self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Email => "email",
            Field::Password => "password",
            Field::Age => "age",
            Field::Phone => "phone",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Per-field validation messages, in form order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FormErrors {
    fields: BTreeMap<Field, &'static str>,
}

impl FormErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn get(&self, field: Field) -> Option<&'static str> {
        self.fields.get(&field).copied()
    }

    /// Record `message` unless the field already failed an earlier rule.
    pub fn add(&mut self, field: Field, message: &'static str) {
        self.fields.entry(field).or_insert(message);
    }

    pub fn clear(&mut self) {
        self.fields.clear();
    }

    pub fn iter(&self) -> impl Iterator<Item = (Field, &'static str)> + '_ {
        self.fields.iter().map(|(field, message)| (*field, *message))
    }

    fn into_result<T>(self, value: impl FnOnce() -> T) -> Result<T, FormErrors> {
        if self.is_empty() {
            Ok(value())
        } else {
            Err(self)
        }
    }
}

pub fn is_valid_email(email: &str) -> bool {
    !email.starts_with('.') && !email.contains("..") && EMAIL_RE.is_match(email)
}

fn is_strong_password(password: &str) -> bool {
    let allowed = |c: char| c.is_ascii_alphanumeric() || PASSWORD_SYMBOLS.contains(c);
    password.chars().all(allowed)
        && password.chars().any(|c| c.is_ascii_lowercase())
        && password.chars().any(|c| c.is_ascii_uppercase())
        && password.chars().any(|c| c.is_ascii_digit())
        && password.chars().any(|c| PASSWORD_SYMBOLS.contains(c))
}

/// Parse the age field the way a numeric input is read: surrounding
/// whitespace ignored, any finite decimal or exponent form accepted.
pub fn parse_age(raw: &str) -> Option<f64> {
    raw.trim()
        .parse::<f64>()
        .ok()
        .filter(|age| age.is_finite() && *age >= MIN_AGE)
}

fn check_email(errors: &mut FormErrors, email: &str) {
    if !is_valid_email(email) {
        errors.add(Field::Email, INVALID_EMAIL);
    }
}

fn check_password_length(errors: &mut FormErrors, password: &str) {
    if password.chars().count() < MIN_PASSWORD_LEN {
        errors.add(Field::Password, PASSWORD_TOO_SHORT);
    }
}

/// Contents of the sign-in form.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SignInDraft {
    pub email: String,
    pub password: String,
}

impl SignInDraft {
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
        }
    }

    pub fn validate(&self) -> Result<SignInRequest, FormErrors> {
        let mut errors = FormErrors::new();
        check_email(&mut errors, &self.email);
        check_password_length(&mut errors, &self.password);

        errors.into_result(|| SignInRequest {
            email: self.email.clone(),
            password: self.password.clone(),
        })
    }
}

/// Contents of the sign-up form. `age` is kept as typed.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SignUpDraft {
    pub name: String,
    pub email: String,
    pub password: String,
    pub age: String,
    pub phone: String,
}

impl SignUpDraft {
    pub fn validate(&self) -> Result<SignUpRequest, FormErrors> {
        let mut errors = FormErrors::new();

        if self.name.chars().count() < MIN_NAME_LEN {
            errors.add(Field::Name, NAME_TOO_SHORT);
        }
        check_email(&mut errors, &self.email);
        check_password_length(&mut errors, &self.password);
        if !is_strong_password(&self.password) {
            errors.add(Field::Password, PASSWORD_TOO_WEAK);
        }
        let age = parse_age(&self.age);
        if age.is_none() {
            errors.add(Field::Age, INVALID_AGE);
        }
        if !PHONE_RE.is_match(&self.phone) {
            errors.add(Field::Phone, INVALID_PHONE);
        }

        errors.into_result(|| SignUpRequest {
            name: self.name.clone(),
            email: self.email.clone(),
            password: self.password.clone(),
            age: age.unwrap_or(MIN_AGE),
            phone: self.phone.clone(),
        })
    }
}
