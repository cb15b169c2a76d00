//! Process-wide slot for the active [`Bridge`].
//!
//! Entry points read the slot once per call and work on their own `Arc`, so a
//! reinstall never disturbs calls already in flight.

use std::sync::{Arc, PoisonError, RwLock};

use crate::common::error::{BridgeError, BridgeResult};

use super::Bridge;

static ACTIVE: RwLock<Option<Arc<Bridge>>> = RwLock::new(None);

/// Make `bridge` the target of every entry point, returning the previous one.
pub fn install(bridge: Bridge) -> Option<Arc<Bridge>> {
    let mut slot = ACTIVE.write().unwrap_or_else(PoisonError::into_inner);
    tracing::debug!(platform = ?bridge.platform(), "installing game service");
    slot.replace(Arc::new(bridge))
}

pub fn uninstall() -> Option<Arc<Bridge>> {
    ACTIVE.write().unwrap_or_else(PoisonError::into_inner).take()
}

pub fn current() -> BridgeResult<Arc<Bridge>> {
    ACTIVE
        .read()
        .unwrap_or_else(PoisonError::into_inner)
        .clone()
        .ok_or(BridgeError::NotInstalled)
}
