// Copyright (c) 2025 - Cowboy AI, Inc.
//! Infrastructure Config Validation
//!
//! Entry points run on creation and on every update of the infrastructure
//! object. The caller passes the cluster-wide Nodes, Pods and Services
//! ranges; only Nodes constrains the network section.
//!
//! Violations are reported in field declaration order: workers, internal,
//! vpc, flowLogs.

use tracing::{debug, warn};

use crate::domain::InfrastructureConfig;

use super::cidr::CidrField;
use super::field::{ErrorList, FieldError, FieldPath};
use super::invariants::{validate_flow_logs, validate_vpc};

/// Validate an infrastructure configuration against the cluster ranges
pub fn validate_infrastructure_config(
    config: &InfrastructureConfig,
    nodes_cidr: Option<&str>,
    pods_cidr: Option<&str>,
    services_cidr: Option<&str>,
) -> ErrorList {
    let mut errors = ErrorList::new();
    let networks = &config.networks;
    let networks_path = FieldPath::new("networks");

    let nodes = nodes_cidr.map(CidrField::reference);

    let workers = CidrField::new(networks.workers.as_str(), networks_path.child("workers"));
    errors.extend(workers.validate_parse());
    errors.extend(workers.validate_canonical());
    if let Some(nodes) = &nodes {
        errors.extend(nodes.validate_subset(&[&workers]));
    }

    if let Some(internal) = &networks.internal {
        let internal = CidrField::new(internal.as_str(), networks_path.child("internal"));
        errors.extend(internal.validate_parse());
        errors.extend(internal.validate_canonical());
        if let Some(nodes) = &nodes {
            errors.extend(nodes.validate_not_overlap(&[&internal]));
        }
        errors.extend(workers.validate_not_overlap(&[&internal]));
    }

    if let Some(vpc) = &networks.vpc {
        errors.extend(validate_vpc(vpc, &networks_path.child("vpc")));
    }

    if let Some(flow_logs) = &networks.flow_logs {
        errors.extend(validate_flow_logs(flow_logs, &networks_path.child("flowLogs")));
    }

    debug!(
        nodes = ?nodes_cidr,
        pods = ?pods_cidr,
        services = ?services_cidr,
        violations = errors.len(),
        "validated infrastructure config"
    );

    errors
}

/// Validate an update of an infrastructure configuration
///
/// The new configuration must be valid on its own, and its network section
/// must equal the old one. A changed network section yields a single
/// violation no matter how many fields differ.
pub fn validate_infrastructure_config_update(
    old_config: &InfrastructureConfig,
    new_config: &InfrastructureConfig,
    nodes_cidr: Option<&str>,
    pods_cidr: Option<&str>,
    services_cidr: Option<&str>,
) -> ErrorList {
    let mut errors =
        validate_infrastructure_config(new_config, nodes_cidr, pods_cidr, services_cidr);

    if old_config.networks != new_config.networks {
        warn!("rejecting change to immutable network section");
        errors.push(FieldError::invalid(&FieldPath::new("networks"), "field is immutable"));
    }

    errors
}
