//! Common test utilities and helpers.
//!
//! This module provides shared functionality for all tests, including:
//! - Multi-page slide deck PDF builders
//! - Fixture file writers
//! - Synthetic page text sources

#![allow(dead_code)]

pub mod fixtures;

pub use fixtures::*;
