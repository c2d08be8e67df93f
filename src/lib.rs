//! Validation of GCP infrastructure network configuration
//!
//! Checks the network section of an infrastructure object before the cluster
//! is provisioned and on every update: CIDR syntax and canonical form, nesting
//! and overlap against the cluster ranges, and consistency of the optional VPC
//! and flow log sections. Findings are returned as an ordered list of field
//! violations; nothing here allocates or reserves address ranges.

pub mod config;
pub mod domain;
pub mod errors;
pub mod validation;

// Re-export commonly used types
pub use config::{load_infrastructure_config, ClusterNetworks};
pub use domain::{Cidr, CidrError, CloudRouter, FlowLogs, InfrastructureConfig, NetworkConfig, Vpc};
pub use errors::{InfrastructureError, InfrastructureResult};
pub use validation::{
    validate_infrastructure_config, validate_infrastructure_config_update, ErrorList, ErrorType,
    FieldError, FieldPath,
};
