//! Application Layer
//!
//! Use cases that orchestrate the business flow.
//! This layer:
//! - Depends on Domain layer (entities, services, ports)
//! - Does NOT contain business rules (those are in Domain)
//! - Coordinates between Infrastructure and Domain
//!
//! ## Use Cases
//!
//! - `BundlePipeline` - Walk, encode and assemble a manifest
//! - `BuildUseCase` - Bundle, render and write the output

pub mod build;
pub mod bundle;

pub use build::{BuildResult, BuildUseCase};
pub use bundle::BundlePipeline;
