//! Domain Layer
//!
//! The bundling core: keys, filters, records and the services that produce
//! a manifest from source roots.
//!
//! ## Structure
//!
//! - `entities/` - Records (SourceFile, AssetFile, AssetDirectory, Manifest)
//! - `value_objects/` - Immutable value types (AssetKey, PathFilter, Encoding)
//! - `services/` - Walker and manifest builder
//! - `ports/` - Interface definitions for infrastructure

pub mod entities;
pub mod ports;
pub mod services;
pub mod value_objects;
