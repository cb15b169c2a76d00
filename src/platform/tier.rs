//! Capability tier resolution.
//!
//! Every operation carries its own [`Requirement`] and resolves it against the
//! running platform on each call; nothing here is cached.

use super::domain::{FeatureLevel, PlatformFamily, PlatformVersion};

/// Which native code path serves a call.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum Tier {
    /// Tier A: the full modern leaderboard API.
    Modern,
    /// Tier B: emulation on top of the legacy scoring API.
    Legacy,
    /// Tier C: below the legacy floor, nothing may be called.
    Unsupported,
}

impl Tier {
    pub fn as_str(&self) -> &'static str {
        match self {
            Tier::Modern => "modern",
            Tier::Legacy => "legacy",
            Tier::Unsupported => "unsupported",
        }
    }
}

/// Minimum feature level per platform family.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct FamilyLevels {
    pub ios: FeatureLevel,
    pub tvos: FeatureLevel,
    pub macos: FeatureLevel,
}

impl FamilyLevels {
    pub const fn new(ios: FeatureLevel, tvos: FeatureLevel, macos: FeatureLevel) -> Self {
        Self { ios, tvos, macos }
    }

    pub fn for_family(&self, family: PlatformFamily) -> FeatureLevel {
        match family {
            PlatformFamily::Ios => self.ios,
            PlatformFamily::TvOs => self.tvos,
            PlatformFamily::MacOs => self.macos,
        }
    }
}

/// Minimum levels a call site needs for its modern and legacy paths.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct Requirement {
    pub modern: FamilyLevels,
    pub legacy: FamilyLevels,
}

/// Levels shared by every leaderboard operation.
///
/// On tvOS and macOS the legacy floor equals the modern one, so the legacy
/// tier only exists on iOS 12 and 13.
pub const LEADERBOARD_API: Requirement = Requirement {
    modern: FamilyLevels::new(
        FeatureLevel::new(14, 0),
        FeatureLevel::new(14, 0),
        FeatureLevel::new(11, 0),
    ),
    legacy: FamilyLevels::new(
        FeatureLevel::new(12, 0),
        FeatureLevel::new(14, 0),
        FeatureLevel::new(11, 0),
    ),
};

impl Requirement {
    pub fn resolve(&self, platform: PlatformVersion) -> Tier {
        resolve(self, platform)
    }
}

/// Pick the tier for `platform`. Pure and deterministic.
pub fn resolve(requirement: &Requirement, platform: PlatformVersion) -> Tier {
    if platform.level >= requirement.modern.for_family(platform.family) {
        Tier::Modern
    } else if platform.level >= requirement.legacy.for_family(platform.family) {
        Tier::Legacy
    } else {
        Tier::Unsupported
    }
}
