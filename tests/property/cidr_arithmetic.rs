// Copyright (c) 2025 - Cowboy AI, Inc.
//! Property-Based Tests for CIDR Arithmetic
//!
//! Generated ranges cover the whole IPv4 space including the degenerate /0
//! and /32 prefixes.

use gcp_infrastructure_validation::domain::{is_canonical, Cidr};
use proptest::prelude::*;
use std::net::Ipv4Addr;

// ============================================================================
// Strategies
// ============================================================================

fn mask(prefix: u8) -> u32 {
    if prefix == 0 {
        0
    } else {
        u32::MAX << (32 - u32::from(prefix))
    }
}

/// Render `addr/prefix` with host bits cleared
fn canonical(addr: u32, prefix: u8) -> String {
    format!("{}/{}", Ipv4Addr::from(addr & mask(prefix)), prefix)
}

/// Any canonical CIDR string
fn canonical_cidr() -> impl Strategy<Value = String> {
    (any::<u32>(), 0u8..=32).prop_map(|(addr, prefix)| canonical(addr, prefix))
}

/// Any CIDR string, host bits possibly set
fn any_cidr() -> impl Strategy<Value = Cidr> {
    (any::<u32>(), 0u8..=32).prop_map(|(addr, prefix)| {
        Cidr::parse(format!("{}/{}", Ipv4Addr::from(addr), prefix)).unwrap()
    })
}

/// Three ranges sharing one address with non-decreasing prefixes: c ⊆ b ⊆ a
fn nested_triple() -> impl Strategy<Value = (Cidr, Cidr, Cidr)> {
    (any::<u32>(), 0u8..=32, 0u8..=32, 0u8..=32).prop_map(|(addr, p1, p2, p3)| {
        let mut prefixes = [p1, p2, p3];
        prefixes.sort_unstable();
        let parse = |p: u8| Cidr::parse(canonical(addr, p)).unwrap();
        (parse(prefixes[0]), parse(prefixes[1]), parse(prefixes[2]))
    })
}

// ============================================================================
// Property Tests
// ============================================================================

proptest! {
    /// Property: Canonical CIDRs round-trip unchanged
    #[test]
    fn prop_canonical_round_trip(s in canonical_cidr()) {
        let cidr = Cidr::parse(&s).unwrap();

        prop_assert_eq!(cidr.network().to_string(), s.clone());
        prop_assert!(cidr.is_canonical());
        prop_assert!(is_canonical(&s));
    }

    /// Property: Host bits make a CIDR non-canonical
    #[test]
    fn prop_host_bits_not_canonical(addr in any::<u32>(), prefix in 0u8..32) {
        prop_assume!(addr & !mask(prefix) != 0);
        let s = format!("{}/{}", Ipv4Addr::from(addr), prefix);

        prop_assert!(!is_canonical(&s));
    }

    /// Property: Subset is reflexive
    #[test]
    fn prop_subset_reflexive(x in any_cidr()) {
        prop_assert!(x.is_subset_of(&x));
    }

    /// Property: Subset is transitive along a nesting chain
    #[test]
    fn prop_subset_transitive((a, b, c) in nested_triple()) {
        prop_assert!(c.is_subset_of(&b));
        prop_assert!(b.is_subset_of(&a));
        prop_assert!(c.is_subset_of(&a));
    }

    /// Property: Subset is transitive for arbitrary ranges
    #[test]
    fn prop_subset_transitive_any(a in any_cidr(), b in any_cidr(), c in any_cidr()) {
        if a.is_subset_of(&b) && b.is_subset_of(&c) {
            prop_assert!(a.is_subset_of(&c));
        }
    }

    /// Property: Overlap is symmetric
    #[test]
    fn prop_overlap_symmetric(a in any_cidr(), b in any_cidr()) {
        prop_assert_eq!(a.overlaps(&b), b.overlaps(&a));
    }

    /// Property: Subset implies overlap
    #[test]
    fn prop_subset_implies_overlap(a in any_cidr(), b in any_cidr()) {
        if a.is_subset_of(&b) {
            prop_assert!(a.overlaps(&b));
        }
    }

    /// Property: Overlapping ranges are nested, since CIDR blocks never partially intersect
    #[test]
    fn prop_overlap_means_nested(a in any_cidr(), b in any_cidr()) {
        prop_assert_eq!(a.overlaps(&b), a.is_subset_of(&b) || b.is_subset_of(&a));
    }
}
