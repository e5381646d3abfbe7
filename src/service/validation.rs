//! Field validation rules and the errors they produce.

use regex::Regex;
use serde::Serialize;
use std::fmt;
use std::sync::LazyLock;

static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^[A-Za-z0-9!#$%&'*+/=?^_`{|}~-]+(?:\.[A-Za-z0-9!#$%&'*+/=?^_`{|}~-]+)*@[A-Za-z0-9](?:[A-Za-z0-9-]{0,61}[A-Za-z0-9])?(?:\.[A-Za-z0-9](?:[A-Za-z0-9-]{0,61}[A-Za-z0-9])?)+$",
    )
    .expect("email pattern compiles")
});

/// String formats a rule can require.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Format {
    Email,
}

/// Constraints for one field. Lengths count characters, not bytes.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ValidationRule {
    pub min_length: Option<usize>,
    pub max_length: Option<usize>,
    pub format: Option<Format>,
    pub exclusive_minimum: Option<f64>,
    pub minimum: Option<f64>,
    pub maximum: Option<f64>,
}

impl ValidationRule {
    pub const NONE: Self = Self {
        min_length: None,
        max_length: None,
        format: None,
        exclusive_minimum: None,
        minimum: None,
        maximum: None,
    };

    pub const fn length(min: usize, max: usize) -> Self {
        Self {
            min_length: Some(min),
            max_length: Some(max),
            ..Self::NONE
        }
    }

    pub const fn max_length(max: usize) -> Self {
        Self {
            max_length: Some(max),
            ..Self::NONE
        }
    }

    pub const fn email(max: usize) -> Self {
        Self {
            max_length: Some(max),
            format: Some(Format::Email),
            ..Self::NONE
        }
    }

    /// Inclusive range.
    pub const fn range(min: f64, max: f64) -> Self {
        Self {
            minimum: Some(min),
            maximum: Some(max),
            ..Self::NONE
        }
    }

    /// `min < value <= max`.
    pub const fn above(min: f64, max: f64) -> Self {
        Self {
            exclusive_minimum: Some(min),
            maximum: Some(max),
            ..Self::NONE
        }
    }
}

/// One failed constraint on one field.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct FieldError {
    pub field: String,
    pub constraint: &'static str,
    pub message: String,
}

/// Every constraint a payload failed, in field order.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct ValidationErrors {
    pub errors: Vec<FieldError>,
}

impl ValidationErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn fields(&self) -> Vec<&str> {
        self.errors.iter().map(|e| e.field.as_str()).collect()
    }

    fn push(&mut self, field: &str, constraint: &'static str, message: String) {
        self.errors.push(FieldError {
            field: field.to_string(),
            constraint,
            message,
        });
    }

    /// Check a string value against `rule`, recording every violation.
    pub fn check_str(&mut self, field: &str, value: &str, rule: &ValidationRule) {
        let len = value.chars().count();
        if let Some(min) = rule.min_length {
            if len < min {
                self.push(field, "min_length", format!("{} must be at least {} characters", field, min));
            }
        }
        if let Some(max) = rule.max_length {
            if len > max {
                self.push(field, "max_length", format!("{} must be at most {} characters", field, max));
            }
        }
        if let Some(Format::Email) = rule.format {
            if !EMAIL_RE.is_match(value) {
                self.push(field, "email", format!("{} must be a valid email address", field));
            }
        }
    }

    /// Check a number against `rule`.
    pub fn check_number(&mut self, field: &str, value: f64, rule: &ValidationRule) {
        if !value.is_finite() {
            self.push(field, "finite", format!("{} must be a finite number", field));
            return;
        }
        if let Some(min) = rule.exclusive_minimum {
            if value <= min {
                self.push(field, "gt", format!("{} must be greater than {}", field, min));
            }
        }
        if let Some(min) = rule.minimum {
            if value < min {
                self.push(field, "ge", format!("{} must be at least {}", field, min));
            }
        }
        if let Some(max) = rule.maximum {
            if value > max {
                self.push(field, "le", format!("{} must be at most {}", field, max));
            }
        }
    }

    pub fn into_result(self) -> Result<(), ValidationErrors> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(self)
        }
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<&str> = self.errors.iter().map(|e| e.message.as_str()).collect();
        f.write_str(&parts.join("; "))
    }
}

impl std::error::Error for ValidationErrors {}

/// A payload that can check its own field constraints after deserialization.
pub trait Validate {
    fn validate(&self) -> Result<(), ValidationErrors>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn length_bounds_count_characters() {
        let rule = ValidationRule::length(2, 4);
        let mut errors = ValidationErrors::new();
        errors.check_str("name", "жж", &rule);
        errors.check_str("name", "ж", &rule);
        errors.check_str("name", "abcde", &rule);
        assert_eq!(errors.errors.len(), 2);
        assert_eq!(errors.errors[0].constraint, "min_length");
        assert_eq!(errors.errors[1].constraint, "max_length");
    }

    #[test]
    fn email_format() {
        let rule = ValidationRule::email(128);
        for ok in ["user1@mail.ru", "a.b+c@sub.example.com"] {
            let mut errors = ValidationErrors::new();
            errors.check_str("email", ok, &rule);
            assert!(errors.is_empty(), "{ok} rejected");
        }
        for bad in [
            "not-an-email",
            "a@b",
            "@mail.ru",
            "a b@mail.ru",
            "a@-mail.ru",
            "a..b@mail.ru",
            ".a@mail.ru",
            "a.@mail.ru",
        ] {
            let mut errors = ValidationErrors::new();
            errors.check_str("email", bad, &rule);
            assert_eq!(errors.fields(), vec!["email"], "{bad} accepted");
        }
    }

    #[test]
    fn numeric_bounds() {
        let price = ValidationRule::above(0.0, 100000.0);
        let mut errors = ValidationErrors::new();
        errors.check_number("price", 0.0, &price);
        errors.check_number("price", 100000.0, &price);
        errors.check_number("price", 100000.5, &price);
        assert_eq!(
            errors.errors.iter().map(|e| e.constraint).collect::<Vec<_>>(),
            vec!["gt", "le"]
        );

        let tax = ValidationRule::range(0.0, 10.0);
        let mut errors = ValidationErrors::new();
        errors.check_number("tax", 0.0, &tax);
        errors.check_number("tax", 10.0, &tax);
        assert!(errors.into_result().is_ok());
    }

    #[test]
    fn display_joins_messages() {
        let mut errors = ValidationErrors::new();
        errors.check_str("name", "a", &ValidationRule::length(2, 32));
        errors.check_str("email", "x", &ValidationRule::email(128));
        assert_eq!(
            errors.to_string(),
            "name must be at least 2 characters; email must be a valid email address"
        );
    }
}
