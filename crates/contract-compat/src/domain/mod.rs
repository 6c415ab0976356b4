//! Domain models for contract compatibility.
//!
//! Canonical definitions for the core entities:
//! - `RuntimeMode`: one operating mode of a runtime
//! - `Plugin`: one plugin's contract expectations
//! - `ContractVersion`: the seam over the concrete semver library

pub mod descriptor;
pub mod error;
pub mod version;

// Re-export main types and errors
pub use descriptor::{Plugin, RuntimeMode};
pub use error::{CompatError, Result};
pub use version::ContractVersion;
