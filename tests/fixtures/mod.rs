// Copyright (c) 2025 - Cowboy AI, Inc.
//! Test Fixtures for gcp-infrastructure-validation
//!
//! Baseline infrastructure config and cluster ranges shared by the
//! integration tests. Every test starts from [`infrastructure_config`] and
//! changes only what it exercises.

#![allow(dead_code)]

use gcp_infrastructure_validation::{InfrastructureConfig, NetworkConfig, Vpc};

pub const PODS: &str = "100.96.0.0/11";
pub const SERVICES: &str = "100.64.0.0/13";
pub const NODES: &str = "10.250.0.0/16";
pub const INTERNAL: &str = "10.10.0.0/24";
pub const INVALID_CIDR: &str = "invalid-cidr";

/// Valid config: named VPC, workers equal to the nodes range, disjoint internal range
pub fn infrastructure_config() -> InfrastructureConfig {
    InfrastructureConfig {
        networks: NetworkConfig {
            vpc: Some(Vpc::named("hugo")),
            internal: Some(INTERNAL.to_string()),
            workers: "10.250.0.0/16".to_string(),
            flow_logs: None,
        },
    }
}
