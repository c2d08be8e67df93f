// Copyright (c) 2025 - Cowboy AI, Inc.
//! Infrastructure Domain Models
//!
//! Value objects and configuration objects the validators operate on.
//!
//! # Value Objects with Invariants
//!
//! - [`Cidr`] - IPv4 range in CIDR notation with subset/overlap arithmetic
//!
//! # Configuration Objects
//!
//! - [`InfrastructureConfig`] - Top-level provider infrastructure object
//! - [`NetworkConfig`] - Workers/Internal ranges, VPC and flow logs
//! - [`Vpc`], [`CloudRouter`], [`FlowLogs`] - Optional sub-sections

pub mod infrastructure;
pub mod network;

pub use infrastructure::{CloudRouter, FlowLogs, InfrastructureConfig, NetworkConfig, Vpc};
pub use network::{is_canonical, Cidr, CidrError};
