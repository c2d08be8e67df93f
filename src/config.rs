//! Cluster network ranges and configuration loading

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::domain::InfrastructureConfig;
use crate::errors::InfrastructureResult;
use crate::validation::{
    validate_infrastructure_config, validate_infrastructure_config_update, ErrorList,
};

/// Environment variable holding the Nodes range
pub const NODES_CIDR_ENV: &str = "NODES_CIDR";
/// Environment variable holding the Pods range
pub const PODS_CIDR_ENV: &str = "PODS_CIDR";
/// Environment variable holding the Services range
pub const SERVICES_CIDR_ENV: &str = "SERVICES_CIDR";

/// Cluster-wide ranges an infrastructure config is validated against
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClusterNetworks {
    /// Nodes range; the workers range must lie within it
    pub nodes: Option<String>,
    /// Pods range
    pub pods: Option<String>,
    /// Services range
    pub services: Option<String>,
}

impl ClusterNetworks {
    /// Load the ranges from environment variables
    ///
    /// Unset or empty variables leave the range absent.
    pub fn from_env() -> Self {
        let var = |name: &str| std::env::var(name).ok().filter(|v| !v.is_empty());

        let networks = Self {
            nodes: var(NODES_CIDR_ENV),
            pods: var(PODS_CIDR_ENV),
            services: var(SERVICES_CIDR_ENV),
        };
        debug!(?networks, "loaded cluster networks from environment");
        networks
    }

    pub fn with_nodes(mut self, cidr: impl Into<String>) -> Self {
        self.nodes = Some(cidr.into());
        self
    }

    pub fn with_pods(mut self, cidr: impl Into<String>) -> Self {
        self.pods = Some(cidr.into());
        self
    }

    pub fn with_services(mut self, cidr: impl Into<String>) -> Self {
        self.services = Some(cidr.into());
        self
    }

    /// Validate a configuration against these ranges
    pub fn validate(&self, config: &InfrastructureConfig) -> ErrorList {
        validate_infrastructure_config(
            config,
            self.nodes.as_deref(),
            self.pods.as_deref(),
            self.services.as_deref(),
        )
    }

    /// Validate an update against these ranges
    pub fn validate_update(
        &self,
        old_config: &InfrastructureConfig,
        new_config: &InfrastructureConfig,
    ) -> ErrorList {
        validate_infrastructure_config_update(
            old_config,
            new_config,
            self.nodes.as_deref(),
            self.pods.as_deref(),
            self.services.as_deref(),
        )
    }
}

/// Read an infrastructure config from a JSON file
pub fn load_infrastructure_config(path: impl AsRef<Path>) -> InfrastructureResult<InfrastructureConfig> {
    let path = path.as_ref();
    let json = std::fs::read_to_string(path)?;
    let config = InfrastructureConfig::from_json(&json)?;
    info!("Loaded infrastructure config from {}", path.display());
    Ok(config)
}
