//! # Request Validation
//!
//! Field rules are declared on the request types with `validator` derive
//! attributes (see `auth::types`). This module turns the outcome into an
//! ordered list of `{field, message}` pairs and packages decode + validate as
//! a single axum extractor.
//!
//! ## Pipeline
//! A handler taking `ValidatedJson<T>` runs these stages in order, each one
//! either continuing or short-circuiting with an error response:
//! 1. Decode the JSON body (malformed → 400 `{"error": ...}`)
//! 2. Run every field rule (any violation → 400 `{"errors": [...]}`)
//! 3. Call the handler with the decoded, validated body

use crate::error::AppError;
use axum::{
    async_trait,
    extract::{FromRequest, Request},
    Json,
};
use serde::{de::DeserializeOwned, Serialize};
use std::fmt;
use validator::Validate;

/// A request body with a fixed set of validated fields.
///
/// `validator` collects errors in a map; `FIELDS` restores the declaration
/// order so responses are deterministic.
pub trait RuleSet: Validate {
    const FIELDS: &'static [&'static str];
}

/// One violated rule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

impl FieldError {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

/// Every violation found in one request body, in field order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct FieldErrors(Vec<FieldError>);

impl FieldErrors {
    pub fn as_slice(&self) -> &[FieldError] {
        &self.0
    }
}

impl From<Vec<FieldError>> for FieldErrors {
    fn from(errors: Vec<FieldError>) -> Self {
        Self(errors)
    }
}

impl fmt::Display for FieldErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, error) in self.as_slice().iter().enumerate() {
            if i > 0 {
                f.write_str("; ")?;
            }
            write!(f, "{}: {}", error.field, error.message)?;
        }
        Ok(())
    }
}

impl std::error::Error for FieldErrors {}

/// Run every rule of `T` against `body`.
///
/// All fields are checked; the error list is never cut short at the first
/// failure.
pub fn validate_body<T: RuleSet>(body: &T) -> Result<(), FieldErrors> {
    let Err(errors) = body.validate() else {
        return Ok(());
    };

    let by_field = errors.field_errors();
    let mut collected = Vec::new();
    for field in T::FIELDS {
        if let Some(field_errors) = by_field.get(*field) {
            collected.extend(field_errors.iter().map(|error| to_field_error(field, error)));
        }
    }

    // Fields missing from FIELDS still get reported, after the ordered ones.
    let mut unlisted: Vec<_> = by_field
        .iter()
        .filter(|(field, _)| !T::FIELDS.contains(*field))
        .collect();
    unlisted.sort_by(|a, b| a.0.cmp(b.0));
    for (field, field_errors) in unlisted {
        collected.extend(field_errors.iter().map(|error| to_field_error(field, error)));
    }

    Err(FieldErrors(collected))
}

fn to_field_error(field: &str, error: &validator::ValidationError) -> FieldError {
    let message = match &error.message {
        Some(message) => message.to_string(),
        None => error.code.to_string(),
    };
    FieldError::new(field, message)
}

/// JSON body extractor that also enforces the body's `RuleSet`.
#[derive(Debug, Clone)]
pub struct ValidatedJson<T>(pub T);

#[async_trait]
impl<T, S> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned + RuleSet,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(body) = Json::<T>::from_request(req, state).await?;
        validate_body(&body)?;
        Ok(ValidatedJson(body))
    }
}
