//! # Auth API Types
//!
//! Request bodies for the auth endpoints and the rules each field must pass.
//!
//! Missing fields and JSON `null` decode to an empty string, and numbers or
//! booleans to their text form, so they are reported by the field's rule
//! rather than as a malformed body. Arrays and objects are still malformed.

use crate::validation::RuleSet;
use serde::{de::Error as _, Deserialize, Deserializer};
use serde_json::Value;
use std::borrow::Cow;
use validator::{Validate, ValidateEmail, ValidationError};

/// Body of `POST /api/auth/register`
///
/// ## Example JSON
/// ```json
/// {
///   "username": "alice",
///   "email": "alice@example.com",
///   "password": "hunter22"
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Validate)]
pub struct RegistrationRequest {
    /// Trimmed while decoding; the controller sees the trimmed value
    #[serde(default, deserialize_with = "trimmed_or_empty")]
    #[validate(length(min = 3, message = "Username must be at least 3 characters"))]
    pub username: String,

    #[serde(default, deserialize_with = "string_or_empty")]
    #[validate(custom(function = "email_address"))]
    pub email: String,

    #[serde(default, deserialize_with = "string_or_empty")]
    #[validate(length(min = 6, message = "Password must be at least 6 characters"))]
    pub password: String,
}

impl RuleSet for RegistrationRequest {
    const FIELDS: &'static [&'static str] = &["username", "email", "password"];
}

/// Body of `POST /api/auth/login`
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Validate)]
pub struct LoginRequest {
    #[serde(default, deserialize_with = "string_or_empty")]
    #[validate(custom(function = "email_address"))]
    pub email: String,

    #[serde(default, deserialize_with = "string_or_empty")]
    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
}

impl RuleSet for LoginRequest {
    const FIELDS: &'static [&'static str] = &["email", "password"];
}

/// Email syntax check with a public-looking domain.
///
/// On top of `validator`'s syntax check the domain must be dotted, must not
/// be a bracketed IP literal, and must end in an alphabetic TLD of two or
/// more characters (or a punycode `xn--` label).
fn email_address(value: &str) -> Result<(), ValidationError> {
    if value.validate_email() && has_public_domain(value) {
        return Ok(());
    }

    let mut error = ValidationError::new("email");
    error.message = Some(Cow::Borrowed("Invalid email"));
    Err(error)
}

fn has_public_domain(email: &str) -> bool {
    let Some((_, domain)) = email.rsplit_once('@') else {
        return false;
    };
    if domain.starts_with('[') {
        return false;
    }
    let Some((_, tld)) = domain.rsplit_once('.') else {
        return false;
    };

    let alphabetic = tld.chars().count() >= 2 && tld.chars().all(char::is_alphabetic);
    let punycode = tld.len() > 4
        && tld.get(..4).is_some_and(|prefix| prefix.eq_ignore_ascii_case("xn--"))
        && tld.chars().all(|c| c.is_ascii_alphanumeric() || c == '-');
    alphabetic || punycode
}

/// Text form of a scalar JSON value; `null` and absent become `""`.
fn string_or_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::Null => Ok(String::new()),
        Value::String(s) => Ok(s),
        Value::Number(n) => Ok(n.to_string()),
        Value::Bool(b) => Ok(b.to_string()),
        Value::Array(_) | Value::Object(_) => {
            Err(D::Error::custom("expected a string, number or boolean"))
        }
    }
}

/// Trims the same set as JavaScript's `String.prototype.trim`, which
/// includes the byte order mark.
fn trimmed_or_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = string_or_empty(deserializer)?;
    Ok(raw
        .trim_matches(|c: char| c.is_whitespace() || c == '\u{feff}')
        .to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::{validate_body, FieldError};
    use rstest::rstest;
    use serde_json::{json, Value};

    fn registration(body: Value) -> RegistrationRequest {
        serde_json::from_value(body).unwrap()
    }

    fn login(body: Value) -> LoginRequest {
        serde_json::from_value(body).unwrap()
    }

    fn fields(errors: &[FieldError]) -> Vec<&str> {
        errors.iter().map(|e| e.field.as_str()).collect()
    }

    #[test]
    fn valid_registration_passes() {
        let body = registration(json!({
            "username": "alice",
            "email": "alice@example.com",
            "password": "hunter22"
        }));

        assert_eq!(validate_body(&body), Ok(()));
    }

    #[rstest]
    #[case("")]
    #[case("ab")]
    #[case("  ab  ")]
    #[case("      ")]
    fn short_username_is_rejected(#[case] username: &str) {
        let body = registration(json!({
            "username": username,
            "email": "x@example.com",
            "password": "abcdef"
        }));

        let errors = validate_body(&body).unwrap_err();

        assert_eq!(
            errors.as_slice(),
            [FieldError::new("username", "Username must be at least 3 characters")]
        );
    }

    #[test]
    fn byte_order_mark_is_trimmed_from_username() {
        let body = registration(json!({
            "username": "ab\u{feff}",
            "email": "x@example.com",
            "password": "abcdef"
        }));

        assert_eq!(body.username, "ab");
        assert_eq!(
            validate_body(&body).unwrap_err().as_slice(),
            [FieldError::new("username", "Username must be at least 3 characters")]
        );
    }

    #[test]
    fn username_is_trimmed_before_length_check() {
        let body = registration(json!({
            "username": "  abc \t",
            "email": "x@example.com",
            "password": "abcdef"
        }));

        assert_eq!(body.username, "abc");
        assert_eq!(validate_body(&body), Ok(()));
    }

    #[rstest]
    #[case("bad")]
    #[case("")]
    #[case("missing-at.example.com")]
    #[case("two@@example.com")]
    #[case("user@localhost")]
    #[case("a@[127.0.0.1]")]
    #[case("a@b.c")]
    #[case("a@example.123")]
    fn invalid_registration_email_is_rejected(#[case] email: &str) {
        let body = registration(json!({
            "username": "alice",
            "email": email,
            "password": "abcdef"
        }));

        let errors = validate_body(&body).unwrap_err();

        assert_eq!(errors.as_slice(), [FieldError::new("email", "Invalid email")]);
    }

    #[rstest]
    #[case("", true)]
    #[case("12345", true)]
    #[case("123456", false)]
    #[case("ünïcødé", false)]
    fn registration_password_needs_six_characters(#[case] password: &str, #[case] rejected: bool) {
        let body = registration(json!({
            "username": "alice",
            "email": "alice@example.com",
            "password": password
        }));

        match validate_body(&body) {
            Ok(()) => assert!(!rejected),
            Err(errors) => {
                assert!(rejected);
                assert_eq!(
                    errors.as_slice(),
                    [FieldError::new("password", "Password must be at least 6 characters")]
                );
            }
        }
    }

    #[test]
    fn all_registration_violations_are_reported_in_field_order() {
        let body = registration(json!({ "username": "ab", "email": "bad", "password": "123" }));

        let errors = validate_body(&body).unwrap_err();

        assert_eq!(errors.as_slice().len(), 3);
        assert_eq!(fields(errors.as_slice()), ["username", "email", "password"]);
    }

    #[test]
    fn missing_and_null_fields_fail_their_rules() {
        let body = registration(json!({ "username": null }));

        let errors = validate_body(&body).unwrap_err();

        assert_eq!(fields(errors.as_slice()), ["username", "email", "password"]);
    }

    #[test]
    fn valid_login_passes() {
        let body = login(json!({ "email": "alice@example.com", "password": "x" }));

        assert_eq!(validate_body(&body), Ok(()));
    }

    #[test]
    fn login_reports_email_and_password_together() {
        let body = login(json!({ "email": "not-an-email", "password": "" }));

        let errors = validate_body(&body).unwrap_err();

        assert_eq!(
            errors.as_slice(),
            [
                FieldError::new("email", "Invalid email"),
                FieldError::new("password", "Password is required"),
            ]
        );
    }

    #[test]
    fn login_password_is_not_trimmed() {
        let body = login(json!({ "email": "alice@example.com", "password": "   " }));

        assert_eq!(body.password, "   ");
        assert_eq!(validate_body(&body), Ok(()));
    }

    #[rstest]
    #[case("user@localhost")]
    #[case("a@[127.0.0.1]")]
    #[case("a@b.c")]
    fn login_rejects_email_without_public_domain(#[case] email: &str) {
        let body = login(json!({ "email": email, "password": "x" }));

        let errors = validate_body(&body).unwrap_err();

        assert_eq!(errors.as_slice(), [FieldError::new("email", "Invalid email")]);
    }

    #[rstest]
    #[case("alice@example.co")]
    #[case("alice.smith+tag@mail.example.org")]
    #[case("alice@xn--bcher-kva.xn--p1ai")]
    fn login_accepts_ordinary_addresses(#[case] email: &str) {
        let body = login(json!({ "email": email, "password": "x" }));

        assert_eq!(validate_body(&body), Ok(()));
    }

    #[test]
    fn scalar_values_are_checked_as_text() {
        let body = login(json!({ "email": "alice@example.com", "password": 123456 }));
        assert_eq!(body.password, "123456");
        assert_eq!(validate_body(&body), Ok(()));

        let body = registration(json!({
            "username": true,
            "email": "x@example.com",
            "password": 12.5
        }));
        assert_eq!(body.username, "true");
        assert_eq!(body.password, "12.5");
        assert_eq!(
            validate_body(&body).unwrap_err().as_slice(),
            [FieldError::new("password", "Password must be at least 6 characters")]
        );
    }

    #[test]
    fn array_or_object_field_is_a_decode_error() {
        let array = serde_json::from_value::<LoginRequest>(json!({
            "email": ["alice@example.com"],
            "password": "x"
        }));
        let object = serde_json::from_value::<LoginRequest>(json!({
            "email": "alice@example.com",
            "password": { "value": "x" }
        }));

        assert!(array.is_err());
        assert!(object.is_err());
    }
}
