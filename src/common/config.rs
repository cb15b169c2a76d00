//! Runtime configuration loaded from the environment or a JSON document.

use std::env;

use serde::{Deserialize, Serialize};

use crate::common::error::{BridgeError, BridgeResult};
use crate::platform::FeatureLevel;

/// Snapshot of configuration values consumed by the bridge.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BridgeCfg {
    /// `tracing` filter directive used by [`crate::common::log::init`].
    pub log_filter: String,
    /// Report at most this feature level to the tier resolver.
    pub feature_level_override: Option<FeatureLevel>,
}

impl Default for BridgeCfg {
    fn default() -> Self {
        Self {
            log_filter: "warn".to_string(),
            feature_level_override: None,
        }
    }
}

impl BridgeCfg {
    /// Create a configuration snapshot from the process environment.
    ///
    /// `LB_BRIDGE_CONFIG` may hold a JSON document; `LB_BRIDGE_LOG` and
    /// `LB_BRIDGE_FEATURE_LEVEL` override its keys.
    pub fn load() -> Self {
        Self::from_vars(|key| env::var(key).ok())
    }

    fn from_vars(var: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = match var("LB_BRIDGE_CONFIG") {
            Some(raw) => Self::from_json(&raw).unwrap_or_else(|err| {
                tracing::warn!(%err, "ignoring LB_BRIDGE_CONFIG");
                Self::default()
            }),
            None => Self::default(),
        };
        let log_filter = var("LB_BRIDGE_LOG").unwrap_or(defaults.log_filter);
        let feature_level_override = var("LB_BRIDGE_FEATURE_LEVEL")
            .and_then(|raw| match raw.parse::<FeatureLevel>() {
                Ok(level) => Some(level),
                Err(err) => {
                    tracing::warn!(%raw, %err, "ignoring LB_BRIDGE_FEATURE_LEVEL");
                    None
                }
            })
            .or(defaults.feature_level_override);

        Self {
            log_filter,
            feature_level_override,
        }
    }

    /// Parse a configuration document; absent keys keep their defaults.
    pub fn from_json(raw: &str) -> BridgeResult<Self> {
        serde_json::from_str(raw).map_err(|err| BridgeError::invalid(format!("config: {err}")))
    }
}
