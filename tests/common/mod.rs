//! Common test utilities for embedfs contract and CLI tests.
//!
//! This module provides:
//! - `TestEnv`: Isolated project directory plus helpers to run the binary
//! - Assertion macros: `assert_output_contains!`
//! - Fixtures: Reusable test content constants

#![allow(dead_code, unused_imports)]

pub mod assertions;
pub mod env;
pub mod fixtures;

pub use assertions::*;
pub use env::*;
pub use fixtures::*;
