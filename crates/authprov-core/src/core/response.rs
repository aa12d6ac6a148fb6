// authprov-core/src/core/response.rs
// ============================================================================
// Module: AuthProv Response Assembly
// Description: Verdicts, structured errors, and the per-call accumulator.
// Purpose: Collect accepted changes and rejections into a validation report.
// Dependencies: serde
// ============================================================================

//! ## Overview
//! Each rule routine returns a [`Verdict`]; verdicts combine by AND on
//! acceptance and MAX on status, so 422 outranks 409 which outranks 200.
//! Errors and accepted changes accumulate in a [`ResponseAssembler`] owned by
//! a single validation call.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::collections::BTreeMap;
use std::fmt;

use serde::Serialize;

use crate::core::fields;
use crate::core::model::Change;

// ============================================================================
// SECTION: Status Codes
// ============================================================================

/// HTTP-style validation status, ordered by precedence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum StatusCode {
    /// 200: accepted.
    #[default]
    Ok,
    /// 409: constraint violation.
    Conflict,
    /// 422: the request could not be evaluated.
    UnprocessableEntity,
}

impl StatusCode {
    /// Returns the numeric HTTP code.
    #[must_use]
    pub const fn as_u16(self) -> u16 {
        match self {
            Self::Ok => 200,
            Self::Conflict => 409,
            Self::UnprocessableEntity => 422,
        }
    }
}

impl fmt::Display for StatusCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_u16())
    }
}

impl Serialize for StatusCode {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_u16(self.as_u16())
    }
}

// ============================================================================
// SECTION: Verdicts
// ============================================================================

/// Outcome of validating one change or a whole batch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Verdict {
    /// Whether the change (or batch) is accepted.
    pub accepted: bool,
    /// Status code reported for the outcome.
    pub status: StatusCode,
}

impl Verdict {
    /// Accepted with 200.
    #[must_use]
    pub const fn accepted() -> Self {
        Self {
            accepted: true,
            status: StatusCode::Ok,
        }
    }

    /// Rejected with `status`.
    #[must_use]
    pub const fn rejected(status: StatusCode) -> Self {
        Self {
            accepted: false,
            status,
        }
    }

    /// Combines two verdicts: AND on acceptance, MAX on status.
    #[must_use]
    pub fn combine(self, other: Self) -> Self {
        Self {
            accepted: self.accepted && other.accepted,
            status: self.status.max(other.status),
        }
    }
}

impl Default for Verdict {
    fn default() -> Self {
        Self::accepted()
    }
}

// ============================================================================
// SECTION: Errors
// ============================================================================

/// Error categories surfaced as `errorMessage`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Business or format constraint violated.
    ConstraintViolation,
    /// Validation could not be carried out.
    UnprocessableEntity,
}

impl ErrorKind {
    /// Returns the `errorMessage` text.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::ConstraintViolation => "Constraint Violation",
            Self::UnprocessableEntity => "Unprocessable entity",
        }
    }

    /// Returns the status the category maps to.
    #[must_use]
    pub const fn status(self) -> StatusCode {
        match self {
            Self::ConstraintViolation => StatusCode::Conflict,
            Self::UnprocessableEntity => StatusCode::UnprocessableEntity,
        }
    }
}

/// Key of the human-readable description detail.
pub const DETAIL_DESCRIPTION: &str = "description";

/// Structured validation error.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationError {
    /// Category text.
    #[serde(rename = "errorMessage")]
    pub message: String,
    /// Free-form details; always carries `resource_path` and `description`.
    #[serde(rename = "errorDetails")]
    pub details: BTreeMap<String, String>,
}

impl ValidationError {
    /// Builds an error for a resource path and description.
    #[must_use]
    pub fn for_path(kind: ErrorKind, resource_path: &str, description: impl Into<String>) -> Self {
        let mut details = BTreeMap::new();
        details.insert(fields::RESOURCE_PATH.to_string(), resource_path.to_string());
        details.insert(DETAIL_DESCRIPTION.to_string(), description.into());
        Self {
            message: kind.as_str().to_string(),
            details,
        }
    }

    /// Returns the description detail, if any.
    #[must_use]
    pub fn description(&self) -> Option<&str> {
        self.details.get(DETAIL_DESCRIPTION).map(String::as_str)
    }

    /// Returns the resource path detail, if any.
    #[must_use]
    pub fn resource_path(&self) -> Option<&str> {
        self.details.get(fields::RESOURCE_PATH).map(String::as_str)
    }
}

// ============================================================================
// SECTION: Assembler
// ============================================================================

/// Per-call accumulator of accepted changes and errors.
#[derive(Debug, Default)]
pub struct ResponseAssembler {
    /// Accepted changes, with derived fields applied.
    changes: Vec<Change>,
    /// Recorded errors in detection order.
    errors: Vec<ValidationError>,
}

impl ResponseAssembler {
    /// Creates an empty assembler.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Records an accepted change.
    pub fn accept(&mut self, change: Change) {
        self.changes.push(change);
    }

    /// Records an error of `kind` for `resource_path`.
    pub fn record(&mut self, kind: ErrorKind, resource_path: &str, description: impl Into<String>) {
        self.errors.push(ValidationError::for_path(kind, resource_path, description));
    }

    /// Records a Constraint Violation.
    pub fn constraint_violation(&mut self, resource_path: &str, description: impl Into<String>) {
        self.record(ErrorKind::ConstraintViolation, resource_path, description);
    }

    /// Records an Unprocessable entity error.
    pub fn unprocessable(&mut self, resource_path: &str, description: impl Into<String>) {
        self.record(ErrorKind::UnprocessableEntity, resource_path, description);
    }

    /// Records a prebuilt error.
    pub fn push_error(&mut self, error: ValidationError) {
        self.errors.push(error);
    }

    /// Returns the number of errors recorded so far.
    #[must_use]
    pub fn error_count(&self) -> usize {
        self.errors.len()
    }

    /// Returns true when any error has been recorded.
    #[must_use]
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// Finishes the call with the overall verdict.
    #[must_use]
    pub fn finish(self, verdict: Verdict) -> ValidationReport {
        let changes = if verdict.accepted { self.changes } else { Vec::new() };
        ValidationReport {
            verdict,
            changes,
            errors: self.errors,
        }
    }
}

// ============================================================================
// SECTION: Report
// ============================================================================

/// Result of validating a request.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationReport {
    /// Overall verdict.
    pub verdict: Verdict,
    /// Accepted changes; empty when the batch is rejected.
    pub changes: Vec<Change>,
    /// Errors in detection order.
    pub errors: Vec<ValidationError>,
}

impl ValidationReport {
    /// Returns true when the batch was accepted.
    #[must_use]
    pub const fn is_accepted(&self) -> bool {
        self.verdict.accepted
    }

    /// Returns the overall status code.
    #[must_use]
    pub const fn status(&self) -> StatusCode {
        self.verdict.status
    }

    /// Iterates error descriptions in detection order.
    pub fn descriptions(&self) -> impl Iterator<Item = &str> {
        self.errors.iter().filter_map(ValidationError::description)
    }
}
