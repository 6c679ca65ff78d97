//! Chain configuration.

use serde::{Deserialize, Serialize};

/// How `set` treats an index at or past the end of the chain.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SetPolicy {
    /// Return [`ChainError::IndexOutOfBounds`](crate::ChainError::IndexOutOfBounds).
    Reject,
    /// Push the value onto the end of the chain.
    Append,
}

impl Default for SetPolicy {
    fn default() -> Self {
        SetPolicy::Reject
    }
}

/// Chain configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChainConfig {
    /// Initial value of the `active` flag.
    pub active: bool,

    /// Initial value of the `enabled` flag.
    pub enabled: bool,

    /// Out-of-range handling for `set`.
    pub set_policy: SetPolicy,
}

impl Default for ChainConfig {
    fn default() -> Self {
        Self {
            active: true,
            enabled: true,
            set_policy: SetPolicy::Reject,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_defaults() {
        let config = ChainConfig::default();
        assert!(config.active);
        assert!(config.enabled);
        assert_eq!(config.set_policy, SetPolicy::Reject);
    }

    #[test]
    fn test_partial_config_fills_defaults() {
        let config: ChainConfig =
            serde_json::from_value(json!({"set_policy": "append", "enabled": false})).unwrap();
        assert!(config.active);
        assert!(!config.enabled);
        assert_eq!(config.set_policy, SetPolicy::Append);
    }
}
