//! Common test utilities for API integration tests
//!
//! This module provides shared test infrastructure for integration tests,
//! including seed fixtures, in-memory stores, and helper functions.

#![allow(unused_imports)]

pub mod fixtures;
pub mod helpers;
pub mod mocks;

pub use fixtures::*;
pub use helpers::*;
pub use mocks::*;
