// Copyright (c) 2025 - Cowboy AI, Inc.
//! Validation of the infrastructure configuration
//!
//! - [`field`] - violation records and field paths
//! - [`cidr`] - range checks bound to field paths
//! - [`invariants`] - VPC and flow log rules, allow-list checks
//! - [`infrastructure`] - create and update entry points

pub mod cidr;
pub mod field;
pub mod infrastructure;
pub mod invariants;

pub use cidr::CidrField;
pub use field::{ErrorList, ErrorType, FieldError, FieldPath};
pub use infrastructure::{validate_infrastructure_config, validate_infrastructure_config_update};
pub use invariants::{validate_enum, validate_flow_logs, validate_vpc};

use crate::errors::{InfrastructureError, InfrastructureResult};

/// Turn a non-empty violation list into an error
pub fn into_result(errors: ErrorList) -> InfrastructureResult<()> {
    if errors.is_empty() {
        Ok(())
    } else {
        Err(InfrastructureError::Rejected(errors))
    }
}
