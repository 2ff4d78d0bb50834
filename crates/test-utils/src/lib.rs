//! Shared test utilities for the ogc-viewer workspace.
//!
//! Provides canned capabilities documents plus generators for building
//! documents with a chosen set of layers.
//!
//! # Usage
//!
//! Add to your crate's `Cargo.toml`:
//!
//! ```toml
//! [dev-dependencies]
//! test-utils = { path = "../test-utils" }
//! ```

pub mod fixtures;
pub mod generators;

pub use fixtures::*;
pub use generators::*;
