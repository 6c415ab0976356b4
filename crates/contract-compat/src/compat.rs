//! Compatibility checker for runtime/plugin contract versions.
//!
//! Evaluates one ([`RuntimeMode`], [`Plugin`]) pair and decides whether the
//! plugin can be safely invoked by that runtime mode. The decision is a pure
//! function of the four version fields: no state, no I/O, and identical
//! inputs always yield the identical verdict.

use tracing::debug;

use crate::domain::descriptor::{Plugin, RuntimeMode};
use crate::domain::error::{CompatError, Result};
use crate::domain::version::ContractVersion;

/// One direction of the contract: does `provides` satisfy `requirement`?
///
/// Majors must match exactly. A major difference is a breaking change no
/// matter which side is numerically ahead, so it is tested before the
/// ordering comparison. Within the same major, the provider must meet or
/// exceed the requirement under the full (major, minor, patch) order.
fn meets_requirement<V: ContractVersion>(provides: &V, requirement: &V) -> bool {
    if provides.major() != requirement.major() {
        return false;
    }
    provides >= requirement
}

/// Check whether `runtime` can safely drive `plugin`.
///
/// Two independent directions must both hold: the Config the runtime
/// provides must satisfy what the plugin requires, and the Results the
/// plugin provides must satisfy what the runtime requires. Semantic
/// versioning applies, so major version differences always fail; minor and
/// patch differences are allowed if and only if the provider version meets
/// or exceeds the required version.
///
/// Returns `Ok(())` when compatible and [`CompatError::Incompatible`]
/// otherwise, without distinguishing which direction failed.
///
/// # Example
///
/// ```
/// use contract_compat::{check, Plugin, RuntimeMode};
///
/// let runtime = RuntimeMode::parse("2.5.7", "2.5.7")?;
/// let plugin = Plugin::parse("2.5.7", "2.5.7")?;
/// assert!(check(&runtime, &plugin).is_ok());
/// # Ok::<(), contract_compat::CompatError>(())
/// ```
pub fn check<V: ContractVersion>(runtime: &RuntimeMode<V>, plugin: &Plugin<V>) -> Result<()> {
    let config_ok = meets_requirement(&runtime.provides_config, &plugin.requires_config);
    let results_ok = meets_requirement(&plugin.provides_results, &runtime.requires_results);

    debug!(event = "compat.checked", config_ok, results_ok);

    if config_ok && results_ok {
        Ok(())
    } else {
        Err(CompatError::Incompatible)
    }
}
