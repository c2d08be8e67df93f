// Copyright (c) 2025 - Cowboy AI, Inc.
//! CIDR Field Checks
//!
//! Binds a CIDR string to the path it was read from so range checks can
//! report violations against the right field. Checks that need a parsed range
//! are silent when either side failed to parse; the parse failure itself is
//! reported once by [`CidrField::validate_parse`].

use crate::domain::{Cidr, CidrError};

use super::field::{ErrorList, FieldError, FieldPath};

/// A CIDR value together with the field it came from
#[derive(Debug, Clone)]
pub struct CidrField {
    path: FieldPath,
    value: String,
    parsed: Result<Cidr, CidrError>,
}

impl CidrField {
    pub fn new(value: impl Into<String>, path: FieldPath) -> Self {
        let value = value.into();
        let parsed = Cidr::parse(&value);
        Self { path, value, parsed }
    }

    /// A range supplied by the caller rather than read from the object
    pub fn reference(value: impl Into<String>) -> Self {
        Self::new(value, FieldPath::empty())
    }

    pub fn path(&self) -> &FieldPath {
        &self.path
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn cidr(&self) -> Option<&Cidr> {
        self.parsed.as_ref().ok()
    }

    pub fn validate_parse(&self) -> ErrorList {
        match &self.parsed {
            Ok(_) => Vec::new(),
            Err(err) => vec![FieldError::invalid(&self.path, err.to_string())],
        }
    }

    pub fn validate_canonical(&self) -> ErrorList {
        match &self.parsed {
            Ok(cidr) if !cidr.is_canonical() => {
                vec![FieldError::invalid(&self.path, "must be valid canonical CIDR")]
            }
            _ => Vec::new(),
        }
    }

    /// Every `inner` range must lie within `self`; violations land on `inner`
    pub fn validate_subset(&self, inner: &[&CidrField]) -> ErrorList {
        let Some(outer) = self.cidr() else {
            return Vec::new();
        };

        inner
            .iter()
            .filter(|field| field.cidr().is_some_and(|c| !c.is_subset_of(outer)))
            .map(|field| {
                FieldError::invalid(
                    &field.path,
                    format!("must be a subset of {:?} ({:?})", self.path.to_string(), self.value),
                )
            })
            .collect()
    }

    /// No `other` range may share an address with `self`; violations land on `other`
    pub fn validate_not_overlap(&self, others: &[&CidrField]) -> ErrorList {
        let Some(own) = self.cidr() else {
            return Vec::new();
        };

        others
            .iter()
            .filter(|field| field.cidr().is_some_and(|c| c.overlaps(own)))
            .map(|field| {
                FieldError::invalid(
                    &field.path,
                    format!("must not be a subset of {:?} ({:?})", self.path.to_string(), self.value),
                )
            })
            .collect()
    }
}
