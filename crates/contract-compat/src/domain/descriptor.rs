//! Descriptor records for the two sides of the contract.
//!
//! Both are immutable value types constructed externally (configuration
//! loading, plugin registration) and passed by value into the checker. They
//! carry no identity beyond their field values and are never mutated.

use semver::Version;
use serde::{Deserialize, Serialize};

use crate::domain::error::Result;

/// One (of possibly several) modes of operation of the runtime.
///
/// If one mode fails to check against a plugin, the runtime may opt to fall
/// back to an older mode which does check ok.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuntimeMode<V = Version> {
    /// Version of the Config contract this mode supplies to plugins.
    pub provides_config: V,

    /// Minimum version of the Results contract this mode can consume.
    pub requires_results: V,
}

impl<V> RuntimeMode<V> {
    /// Create a runtime mode descriptor.
    pub fn new(provides_config: V, requires_results: V) -> Self {
        Self {
            provides_config,
            requires_results,
        }
    }
}

impl RuntimeMode {
    /// Parse a runtime mode descriptor from version strings.
    pub fn parse(provides_config: &str, requires_results: &str) -> Result<Self> {
        Ok(Self {
            provides_config: Version::parse(provides_config)?,
            requires_results: Version::parse(requires_results)?,
        })
    }
}

/// The required version of input Config and provided version of output
/// Results for a single plugin.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Plugin<V = Version> {
    /// Minimum version of Config the plugin needs to operate correctly.
    pub requires_config: V,

    /// Version of Results the plugin produces.
    pub provides_results: V,
}

impl<V> Plugin<V> {
    /// Create a plugin descriptor.
    pub fn new(requires_config: V, provides_results: V) -> Self {
        Self {
            requires_config,
            provides_results,
        }
    }
}

impl Plugin {
    /// Parse a plugin descriptor from version strings.
    pub fn parse(requires_config: &str, provides_results: &str) -> Result<Self> {
        Ok(Self {
            requires_config: Version::parse(requires_config)?,
            provides_results: Version::parse(provides_results)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::error::CompatError;

    #[test]
    fn parse_accepts_well_formed_versions() {
        let mode = RuntimeMode::parse("2.5.7", "1.0.0").expect("parse");
        assert_eq!(mode.provides_config, Version::new(2, 5, 7));
        assert_eq!(mode.requires_results, Version::new(1, 0, 0));
    }

    #[test]
    fn parse_rejects_malformed_versions() {
        let err = Plugin::parse("not-a-version", "1.0.0").unwrap_err();
        assert!(matches!(err, CompatError::InvalidVersion(_)));
    }
}
