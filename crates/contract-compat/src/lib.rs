//! Contract version compatibility for a runtime / plugin system.
//!
//! A runtime invokes a plugin by passing in Config and expecting Results
//! back. A single contract defines the data types and behaviour of both
//! Config and Results, and that contract evolves over time under semantic
//! versioning:
//!
//! - removing a field from Config or Results is a breaking change and forces
//!   a major version bump;
//! - adding a field forces a minor version bump;
//! - the system is forwards compatible within minor and patch versions.
//!
//! A plugin requires Config at a particular version. If the runtime provides
//! Config with a greater minor or patch version (same major), the plugin
//! still works. Symmetrically, if the plugin provides Results with a greater
//! minor or patch version than the runtime requires, the runtime can accept
//! that data, again only within the same major version.
//!
//! Plugins are assumed lightweight, but a runtime may support many modes,
//! each of which drives plugins at a single major version. [`check`] decides
//! whether one [`RuntimeMode`] can safely drive one [`Plugin`]; on rejection
//! the runtime may fall back to an older mode that does check ok.

pub mod compat;
pub mod domain;
pub mod telemetry;

pub use compat::check;
pub use domain::descriptor::{Plugin, RuntimeMode};
pub use domain::error::{CompatError, Result};
pub use domain::version::ContractVersion;
pub use telemetry::init_tracing;

/// The concrete version primitive descriptors default to.
pub use semver::Version;

/// Crate version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
