// lib.rs - leaderboard bridge between a native game service and C callers
pub mod api;
pub mod bridge;
pub mod common;
pub mod leaderboard;
pub mod native;
pub mod platform;
pub mod task;

use std::sync::Arc;

pub use api::handles::{
    ByteBuffer, EntryHandle, EntryListHandle, ErrorHandle, LeaderboardHandle,
    LeaderboardListHandle, PlayerHandle,
};
pub use bridge::Bridge;
pub use common::config::BridgeCfg;
pub use common::{BridgeCode, BridgeError, BridgeResult, NativeError};
pub use native::{GameService, NativeLeaderboard};

/// Install `service` with configuration read from the environment,
/// replacing any previously installed one.
pub fn install_service(service: Arc<dyn GameService>) -> Option<Arc<Bridge>> {
    bridge::install(Bridge::new(service, BridgeCfg::load()))
}
