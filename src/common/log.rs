//! Diagnostic logging through `tracing`.
//!
//! The bridge only emits `debug`/`trace` events about dispatch; failures are
//! always handed to the caller rather than logged away.

use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

use crate::common::config::BridgeCfg;

/// Install a fmt subscriber filtered by `cfg.log_filter`.
///
/// Returns `false` when a global subscriber was already set, which is the
/// normal case when the host installs its own.
pub fn init(cfg: &BridgeCfg) -> bool {
    let filter = EnvFilter::try_new(&cfg.log_filter).unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_ansi(false))
        .try_init()
        .is_ok()
}
