// Copyright (c) 2025 - Cowboy AI, Inc.
//! Network Value Objects with Validation Invariants

use ipnet::Ipv4Net;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// CIDR parsing error
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CidrError {
    #[error("invalid CIDR address: {0}")]
    InvalidCidr(String),
}

/// IPv4 range in CIDR notation value object
///
/// Keeps the string it was parsed from next to the parsed network so that
/// canonical form can be judged against exactly what the caller supplied.
///
/// Invariants:
/// - Valid `address/prefix` IPv4 notation
/// - Prefix length 0-32
/// - Range arithmetic always uses the masked network
///
/// # Examples
///
/// ```rust
/// use gcp_infrastructure_validation::domain::Cidr;
///
/// let nodes = Cidr::parse("10.250.0.0/16").unwrap();
/// let workers = Cidr::parse("10.250.3.0/24").unwrap();
/// assert!(workers.is_subset_of(&nodes));
/// assert!(!Cidr::parse("10.250.0.3/16").unwrap().is_canonical());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Cidr {
    raw: String,
    net: Ipv4Net,
}

impl Cidr {
    /// Parse an IPv4 CIDR
    ///
    /// Host bits are allowed here; see [`Cidr::is_canonical`].
    pub fn parse(cidr: impl AsRef<str>) -> Result<Self, CidrError> {
        let raw = cidr.as_ref();
        let net = Ipv4Net::from_str(raw).map_err(|_| CidrError::InvalidCidr(raw.to_string()))?;

        Ok(Self {
            raw: raw.to_string(),
            net,
        })
    }

    /// The string this value was parsed from
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// The network with all host bits cleared
    pub fn network(&self) -> Ipv4Net {
        self.net.trunc()
    }

    /// Get the prefix length
    pub fn prefix_length(&self) -> u8 {
        self.net.prefix_len()
    }

    /// True when rendering the masked network reproduces the original string
    pub fn is_canonical(&self) -> bool {
        self.network().to_string() == self.raw
    }

    /// True when every address of `self` lies inside `outer`
    pub fn is_subset_of(&self, outer: &Cidr) -> bool {
        outer.network().contains(&self.network())
    }

    /// True when the two ranges share at least one address
    pub fn overlaps(&self, other: &Cidr) -> bool {
        let (a, b) = (self.network(), other.network());
        a.contains(&b.network()) || b.contains(&a.network())
    }
}

/// Check whether `cidr` parses and is already in canonical form
pub fn is_canonical(cidr: &str) -> bool {
    Cidr::parse(cidr).is_ok_and(|c| c.is_canonical())
}

impl fmt::Display for Cidr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.raw)
    }
}

impl FromStr for Cidr {
    type Err = CidrError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for Cidr {
    type Error = CidrError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(value)
    }
}

impl From<Cidr> for String {
    fn from(value: Cidr) -> Self {
        value.raw
    }
}
