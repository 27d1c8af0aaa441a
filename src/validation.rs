//! Boundary validation helpers.
//!
//! Validators report failures as values, never as returned errors:
//! callers get either a success value or an error-indicating message
//! whose text contains "invalid". Keeping failures in the value channel
//! is a behavioral contract of this library; only the container types
//! use the `Result` channel (see [`crate::errors`]).

use crate::config::{LengthPolicy, SignupPolicy};

/// Outcome of a boundary check that reports failures as values.
///
/// A check either produces a value or an error-indicating message. The
/// message always contains "invalid" (any case), so callers can match
/// on it the same way across every validator.
#[derive(Debug, Clone, PartialEq)]
pub enum Checked<T> {
    /// The check passed and produced a value.
    Value(T),
    /// The check failed; the message names what was invalid.
    Invalid(String),
}

impl<T> Checked<T> {
    /// Shorthand for building the invalid variant.
    pub fn invalid(message: impl Into<String>) -> Self {
        Self::Invalid(message.into())
    }

    /// The success value, if the check passed.
    pub fn value(self) -> Option<T> {
        match self {
            Self::Value(value) => Some(value),
            Self::Invalid(_) => None,
        }
    }

    /// The failure message, if the check failed.
    pub fn invalid_message(&self) -> Option<&str> {
        match self {
            Self::Value(_) => None,
            Self::Invalid(message) => Some(message),
        }
    }

    pub fn is_invalid(&self) -> bool {
        matches!(self, Self::Invalid(_))
    }
}

/// Validate a signup form.
///
/// Returns `"Validation successful"` when the username length and age
/// both fall within `policy`, otherwise a comma-joined message naming
/// every field that failed (`"Invalid username, Invalid age"`).
pub fn validate_user_input(username: &str, age: i64, policy: &SignupPolicy) -> String {
    let mut failures = Vec::new();

    let length = username.chars().count();
    if length < policy.username_min || length > policy.username_max {
        failures.push("Invalid username");
    }
    if age < policy.age_min || age > policy.age_max {
        failures.push("Invalid age");
    }

    if failures.is_empty() {
        "Validation successful".to_string()
    } else {
        failures.join(", ")
    }
}

/// Whether a username is present and its character length lies within
/// the configured inclusive range.
///
/// `None` stands in for absent input and is never valid.
pub fn is_valid_username(username: Option<&str>, policy: &LengthPolicy) -> bool {
    match username {
        Some(name) => (policy.min..=policy.max).contains(&name.chars().count()),
        None => false,
    }
}
