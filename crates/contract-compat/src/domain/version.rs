//! Seam over the concrete semantic-version library.
//!
//! The checker only needs field access to the major component and a total
//! order consistent with lexicographic (major, minor, patch) comparison, so
//! it is written against this trait rather than `semver::Version` directly.

/// The subset of a semantic version the compatibility checker consumes.
///
/// Implementors must order values lexicographically by
/// (major, minor, patch); `semver::Version` does, with the usual
/// pre-release-sorts-first refinement for tagged versions.
pub trait ContractVersion: Ord {
    /// Major component; differences here are always breaking.
    fn major(&self) -> u64;

    /// Minor component; additive, forwards-compatible changes.
    fn minor(&self) -> u64;

    /// Patch component; non-breaking fixes.
    fn patch(&self) -> u64;
}

impl ContractVersion for semver::Version {
    fn major(&self) -> u64 {
        self.major
    }

    fn minor(&self) -> u64 {
        self.minor
    }

    fn patch(&self) -> u64 {
        self.patch
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn semver_accessors_expose_the_triple() {
        let v = semver::Version::new(2, 5, 7);
        assert_eq!(v.major(), 2);
        assert_eq!(v.minor(), 5);
        assert_eq!(v.patch(), 7);
    }

    #[test]
    fn semver_ordering_is_lexicographic_over_the_triple() {
        let low = semver::Version::new(2, 5, 7);
        let high = semver::Version::new(2, 6, 0);
        assert!(high > low);
        assert!(semver::Version::new(3, 0, 0) > high);
    }
}
