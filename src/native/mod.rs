//! Black-box contract of the native social-gaming service.

pub mod domain;

#[cfg(test)]
pub(crate) mod fake;

pub use domain::{
    Completion, EntriesPage, Entry, GameService, LeaderboardRef, LeaderboardType, LegacyQuery,
    LegacyScore, NativeLeaderboard, NativeRange, Player, PlayerEntriesPage, PlayerScope,
    RasterImage, TimeScope,
};
