// Copyright (c) 2025 - Cowboy AI, Inc.
//! Infrastructure Config Validator
//!
//! Validates an infrastructure config JSON file against the cluster ranges
//! taken from the environment. When a second file is given it is treated as
//! the previous snapshot and the change is validated as an update.
//!
//! Run with: cargo run --bin validate-infrastructure -- new.json [old.json]
//!
//! Environment:
//! - NODES_CIDR, PODS_CIDR, SERVICES_CIDR: cluster ranges (optional)
//! - RUST_LOG: log filter

use anyhow::{bail, Context, Result};
use gcp_infrastructure_validation::{load_infrastructure_config, ClusterNetworks};
use tracing::info;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let mut args = std::env::args().skip(1);
    let Some(new_path) = args.next() else {
        bail!("usage: validate-infrastructure <new.json> [old.json]");
    };
    let old_path = args.next();

    let networks = ClusterNetworks::from_env();
    let new_config = load_infrastructure_config(&new_path)
        .with_context(|| format!("Failed to load {new_path}"))?;

    let errors = match old_path {
        Some(old_path) => {
            let old_config = load_infrastructure_config(&old_path)
                .with_context(|| format!("Failed to load {old_path}"))?;
            networks.validate_update(&old_config, &new_config)
        }
        None => networks.validate(&new_config),
    };

    if errors.is_empty() {
        info!("Infrastructure config is valid");
        return Ok(());
    }

    for error in &errors {
        println!("{error}");
    }
    bail!("{} violation(s) found", errors.len());
}
