//! The installed native service together with its configuration.

pub mod registry;

use std::sync::Arc;

use crate::common::config::BridgeCfg;
use crate::native::GameService;
use crate::platform::PlatformVersion;

pub use registry::{current, install, uninstall};

pub struct Bridge {
    service: Arc<dyn GameService>,
    cfg: BridgeCfg,
}

impl Bridge {
    pub fn new(service: Arc<dyn GameService>, cfg: BridgeCfg) -> Self {
        Self { service, cfg }
    }

    /// Platform as seen by the tier resolver, after the configured cap.
    pub fn platform(&self) -> PlatformVersion {
        self.service.platform().capped(self.cfg.feature_level_override)
    }

    pub fn service(&self) -> &dyn GameService {
        self.service.as_ref()
    }

    pub fn cfg(&self) -> &BridgeCfg {
        &self.cfg
    }
}
