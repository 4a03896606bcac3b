//! Machine configuration.

use serde::{Deserialize, Serialize};
use std::num::NonZeroUsize;

const DEFAULT_MAX_STEPS: NonZeroUsize = match NonZeroUsize::new(16) {
    Some(steps) => steps,
    None => unreachable!(),
};

/// Settings applied to a machine when it is built.
///
/// # Example
///
/// ```rust
/// use statetable::MachineConfig;
///
/// let config = MachineConfig::from_json(r#"{ "default_max_steps": 4, "trace": false }"#).unwrap();
///
/// assert_eq!(config.default_max_steps.get(), 4);
/// assert!(!config.trace);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MachineConfig {
    /// Step budget used by `settle` and `settle_client`.
    pub default_max_steps: NonZeroUsize,

    /// Emit diagnostics through `tracing`. When false the machine is silent.
    pub trace: bool,
}

impl MachineConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the default step budget
    pub fn max_steps(mut self, steps: NonZeroUsize) -> Self {
        self.default_max_steps = steps;
        self
    }

    /// Enable or disable tracing
    pub fn trace(mut self, enabled: bool) -> Self {
        self.trace = enabled;
        self
    }

    /// Parse a configuration from JSON. Missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

impl Default for MachineConfig {
    fn default() -> Self {
        Self {
            default_max_steps: DEFAULT_MAX_STEPS,
            trace: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_trace_with_sixteen_steps() {
        let config = MachineConfig::default();
        assert_eq!(config.default_max_steps.get(), 16);
        assert!(config.trace);
    }

    #[test]
    fn builder_setters_override_defaults() {
        let config = MachineConfig::new()
            .max_steps(NonZeroUsize::new(3).unwrap())
            .trace(false);

        assert_eq!(config.default_max_steps.get(), 3);
        assert!(!config.trace);
    }

    #[test]
    fn partial_json_keeps_defaults() {
        let config = MachineConfig::from_json(r#"{ "trace": false }"#).unwrap();
        assert_eq!(config.default_max_steps.get(), 16);
        assert!(!config.trace);
    }

    #[test]
    fn zero_budget_is_rejected() {
        let result = MachineConfig::from_json(r#"{ "default_max_steps": 0 }"#);
        assert!(result.is_err());
    }

    #[test]
    fn config_roundtrips_through_json() {
        let config = MachineConfig::new().trace(false);
        let json = serde_json::to_string(&config).unwrap();
        assert_eq!(MachineConfig::from_json(&json).unwrap(), config);
    }
}
