// Copyright (c) 2025 - Cowboy AI, Inc.
//! Property-Based Tests Module
//!
//! Properties of CIDR parsing, subset and overlap.

mod cidr_arithmetic;
