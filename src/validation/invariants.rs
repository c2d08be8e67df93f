// Copyright (c) 2025 - Cowboy AI, Inc.
//! Pure Validation Functions - Structural Invariants
//!
//! Checks for the optional sub-sections of the network configuration. Every
//! function is pure and returns all violations it finds; nothing short-circuits
//! on the first failure.
//!
//! # Invariant Categories
//!
//! 1. **Allowed Values**: enum-like string fields
//! 2. **Required Together**: VPC name and cloud router
//! 3. **Value Ranges**: flow sampling ratio

use crate::domain::{FlowLogs, Vpc};

use super::field::{ErrorList, FieldError, FieldPath};

/// Accepted flow log aggregation intervals, in declared order
pub const AGGREGATION_INTERVALS: &[&str] = &[
    "INTERVAL_5_SEC",
    "INTERVAL_30_SEC",
    "INTERVAL_1_MIN",
    "INTERVAL_5_MIN",
    "INTERVAL_15_MIN",
];

/// Accepted flow log metadata settings
pub const FLOW_LOG_METADATA: &[&str] = &["INCLUDE_ALL_METADATA"];

/// Validate a value against a fixed allow-list
///
/// # Rules
/// - Empty values pass; presence is enforced elsewhere
/// - Anything else must be one of `allowed`
pub fn validate_enum(value: &str, allowed: &[&str], path: &FieldPath) -> Option<FieldError> {
    if value.is_empty() || allowed.contains(&value) {
        return None;
    }
    Some(FieldError::not_supported(path, allowed))
}

/// Validate the VPC reference
///
/// # Rules
/// - A cloud router needs a named VPC; both fields are reported when it is missing
pub fn validate_vpc(vpc: &Vpc, path: &FieldPath) -> ErrorList {
    let mut errors = ErrorList::new();

    if vpc.cloud_router.is_some() && vpc.name_is_empty() {
        errors.push(FieldError::invalid(
            &path.child("cloudRouter"),
            "cloud router can not be configured when the VPC name is not specified",
        ));
        errors.push(FieldError::invalid(
            &path.child("name"),
            "vpc name must not be empty when vpc key is provided",
        ));
    }

    errors
}

/// Validate the flow log section
///
/// # Rules
/// - A present section must set at least one parameter
/// - Aggregation interval and metadata must be supported values
/// - Flow sampling must lie within [0, 1]
pub fn validate_flow_logs(flow_logs: &FlowLogs, path: &FieldPath) -> ErrorList {
    let mut errors = ErrorList::new();

    if flow_logs.is_empty() {
        errors.push(FieldError::required(
            path,
            "at least one VPC flow log parameter must be specified when VPC flow log section is provided",
        ));
        return errors;
    }

    if let Some(interval) = &flow_logs.aggregation_interval {
        errors.extend(validate_enum(
            interval,
            AGGREGATION_INTERVALS,
            &path.child("aggregationInterval"),
        ));
    }

    if let Some(metadata) = &flow_logs.metadata {
        errors.extend(validate_enum(metadata, FLOW_LOG_METADATA, &path.child("metadata")));
    }

    if let Some(sampling) = flow_logs.flow_sampling {
        if !(0.0..=1.0).contains(&sampling) {
            errors.push(FieldError::invalid(
                &path.child("flowSampling"),
                "must contain a valid value",
            ));
        }
    }

    errors
}
