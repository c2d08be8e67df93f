// Copyright (c) 2025 - Cowboy AI, Inc.
//! Field Paths and Field Errors
//!
//! A violation is a flat `(type, path, detail)` record. Checks append to an
//! [`ErrorList`] and keep going, so one call reports every problem it finds.

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Dotted path to a field of the configuration object, e.g. `networks.workers`
///
/// The empty path renders as `""` and identifies values that do not live in
/// the object itself, such as cluster-wide reference ranges.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct FieldPath(Vec<String>);

impl FieldPath {
    /// Path with a single root segment
    pub fn new(root: impl Into<String>) -> Self {
        Self(vec![root.into()])
    }

    /// Path that points at nothing inside the object
    pub fn empty() -> Self {
        Self::default()
    }

    /// Extend the path by one segment
    pub fn child(&self, name: impl Into<String>) -> Self {
        let mut segments = self.0.clone();
        segments.push(name.into());
        Self(segments)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for FieldPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.join("."))
    }
}

/// Classification of a violation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ErrorType {
    /// Value is present but malformed or breaks a rule
    Invalid,
    /// Value must be set
    Required,
    /// Value is not one of the accepted values
    NotSupported,
    /// Value must not be set
    Forbidden,
}

impl fmt::Display for ErrorType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let description = match self {
            ErrorType::Invalid => "Invalid value",
            ErrorType::Required => "Required value",
            ErrorType::NotSupported => "Unsupported value",
            ErrorType::Forbidden => "Forbidden",
        };
        write!(f, "{description}")
    }
}

/// A single validation failure tied to a field path
#[derive(Debug, Clone, PartialEq, Eq, Hash, Error, Serialize, Deserialize)]
#[error("{field}: {error_type}: {detail}")]
pub struct FieldError {
    pub error_type: ErrorType,
    pub field: String,
    pub detail: String,
}

impl FieldError {
    pub fn new(error_type: ErrorType, path: &FieldPath, detail: impl Into<String>) -> Self {
        Self {
            error_type,
            field: path.to_string(),
            detail: detail.into(),
        }
    }

    pub fn invalid(path: &FieldPath, detail: impl Into<String>) -> Self {
        Self::new(ErrorType::Invalid, path, detail)
    }

    pub fn required(path: &FieldPath, detail: impl Into<String>) -> Self {
        Self::new(ErrorType::Required, path, detail)
    }

    pub fn forbidden(path: &FieldPath, detail: impl Into<String>) -> Self {
        Self::new(ErrorType::Forbidden, path, detail)
    }

    /// Value outside `allowed`; the detail lists every accepted value, quoted
    pub fn not_supported(path: &FieldPath, allowed: &[&str]) -> Self {
        let quoted: Vec<String> = allowed.iter().map(|v| format!("{v:?}")).collect();
        Self::new(
            ErrorType::NotSupported,
            path,
            format!("supported values: {}", quoted.join(", ")),
        )
    }
}

/// Ordered collection of violations; empty means accepted
pub type ErrorList = Vec<FieldError>;
