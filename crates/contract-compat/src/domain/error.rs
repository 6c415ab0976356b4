//! Domain-level error taxonomy for contract compatibility.

/// Errors produced by descriptor construction and compatibility checking.
#[derive(Debug, thiserror::Error)]
pub enum CompatError {
    /// The runtime mode and plugin cannot interoperate. Carries no detail
    /// about which direction failed: the decision is all-or-nothing from the
    /// caller's perspective.
    #[error("incompatible versions")]
    Incompatible,

    /// A version string failed to parse. Only descriptor construction
    /// produces this; the checker itself never does.
    #[error("invalid version: {0}")]
    InvalidVersion(#[from] semver::Error),
}

/// Result type for contract compatibility operations.
pub type Result<T> = std::result::Result<T, CompatError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_incompatible_display() {
        let err = CompatError::Incompatible;
        assert_eq!(err.to_string(), "incompatible versions");
    }

    #[test]
    fn test_invalid_version_display() {
        let err: CompatError = semver::Version::parse("bogus").unwrap_err().into();
        assert!(err.to_string().contains("invalid version"));
    }
}
