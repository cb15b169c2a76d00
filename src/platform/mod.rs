//! Platform identity and capability tier resolution.

pub mod domain;
pub mod tier;

pub use domain::{FeatureLevel, PlatformFamily, PlatformVersion};
pub use tier::{resolve, FamilyLevels, Requirement, Tier, LEADERBOARD_API};
