// Copyright (c) 2025 - Cowboy AI, Inc.
//! Infrastructure Configuration Domain Model
//!
//! The provider-specific infrastructure object a shoot cluster is created
//! from. Every optional field is an explicit `Option` so that an absent key
//! stays distinguishable from a present but empty one.

use serde::{Deserialize, Serialize};

use crate::errors::InfrastructureResult;

/// Top-level infrastructure configuration
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InfrastructureConfig {
    /// Network topology, immutable once the infrastructure exists
    pub networks: NetworkConfig,
}

impl InfrastructureConfig {
    /// Decode a configuration from its JSON representation
    pub fn from_json(json: &str) -> InfrastructureResult<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

/// Network section of the infrastructure configuration
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NetworkConfig {
    /// Range the worker nodes are placed in
    pub workers: String,

    /// Additional range for internal load balancers
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub internal: Option<String>,

    /// Existing VPC to deploy into
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vpc: Option<Vpc>,

    /// VPC flow logging
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub flow_logs: Option<FlowLogs>,
}

/// Reference to a VPC network
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Vpc {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cloud_router: Option<CloudRouter>,
}

impl Vpc {
    /// Reference a VPC by name
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            cloud_router: None,
        }
    }

    /// True when the name is absent or empty
    pub fn name_is_empty(&self) -> bool {
        self.name.as_deref().map_or(true, str::is_empty)
    }
}

/// Reference to an existing cloud router of the VPC
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CloudRouter {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

/// VPC flow log settings
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FlowLogs {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub aggregation_interval: Option<String>,

    /// Fraction of flows that are sampled, 0.0 to 1.0
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub flow_sampling: Option<f32>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<String>,
}

impl FlowLogs {
    /// True when none of the parameters is set
    pub fn is_empty(&self) -> bool {
        self.aggregation_interval.is_none() && self.flow_sampling.is_none() && self.metadata.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_json() {
        let config = InfrastructureConfig::from_json(
            r#"{
                "networks": {
                    "workers": "10.250.0.0/16",
                    "internal": "10.10.0.0/24",
                    "vpc": { "name": "hugo", "cloudRouter": { "name": "router" } },
                    "flowLogs": { "aggregationInterval": "INTERVAL_5_SEC", "flowSampling": 0.2 }
                }
            }"#,
        )
        .unwrap();

        assert_eq!(config.networks.workers, "10.250.0.0/16");
        assert_eq!(config.networks.internal.as_deref(), Some("10.10.0.0/24"));
        let vpc = config.networks.vpc.unwrap();
        assert_eq!(vpc.name.as_deref(), Some("hugo"));
        assert!(vpc.cloud_router.is_some());
        let flow_logs = config.networks.flow_logs.unwrap();
        assert_eq!(flow_logs.flow_sampling, Some(0.2));
        assert!(flow_logs.metadata.is_none());
    }

    #[test]
    fn test_from_json_missing_workers() {
        assert!(InfrastructureConfig::from_json(r#"{"networks": {}}"#).is_err());
    }

    #[test]
    fn test_empty_flow_logs_section_is_present() {
        let config =
            InfrastructureConfig::from_json(r#"{"networks": {"workers": "10.0.0.0/8", "flowLogs": {}}}"#)
                .unwrap();
        assert!(config.networks.flow_logs.unwrap().is_empty());
    }

    #[test]
    fn test_vpc_name_is_empty() {
        assert!(Vpc::default().name_is_empty());
        assert!(Vpc::named("").name_is_empty());
        assert!(!Vpc::named("hugo").name_is_empty());
    }
}
