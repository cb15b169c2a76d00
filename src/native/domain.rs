//! Contract of the platform social-gaming service.
//!
//! A platform crate implements [`GameService`] and [`NativeLeaderboard`] on
//! top of the real SDK. Every asynchronous call hands over a [`Completion`]
//! that the implementation invokes once, on whatever thread it likes.

use std::fmt;
use std::sync::Arc;
use std::time::{Duration, SystemTime};

use crate::common::error::{BridgeError, BridgeResult, NativeError};
use crate::platform::PlatformVersion;

/// One-shot continuation for a native asynchronous call.
pub type Completion<T> = Box<dyn FnOnce(Result<T, NativeError>) + Send + 'static>;

/// Shared reference to a leaderboard owned by the native service.
pub type LeaderboardRef = Arc<dyn NativeLeaderboard>;

/// Whose scores a range query covers. Raw values match the native enum.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum PlayerScope {
    Global = 0,
    FriendsOnly = 1,
}

impl TryFrom<i64> for PlayerScope {
    type Error = BridgeError;

    fn try_from(raw: i64) -> BridgeResult<Self> {
        match raw {
            0 => Ok(PlayerScope::Global),
            1 => Ok(PlayerScope::FriendsOnly),
            other => Err(BridgeError::invalid(format!("player scope {other}"))),
        }
    }
}

/// Time window a query covers. Raw values match the native enum.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum TimeScope {
    Today = 0,
    Week = 1,
    AllTime = 2,
}

impl TryFrom<i64> for TimeScope {
    type Error = BridgeError;

    fn try_from(raw: i64) -> BridgeResult<Self> {
        match raw {
            0 => Ok(TimeScope::Today),
            1 => Ok(TimeScope::Week),
            2 => Ok(TimeScope::AllTime),
            other => Err(BridgeError::invalid(format!("time scope {other}"))),
        }
    }
}

#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
pub enum LeaderboardType {
    #[default]
    Classic = 0,
    Recurring = 1,
}

impl LeaderboardType {
    pub fn raw(self) -> i64 {
        self as i64
    }
}

impl TryFrom<i64> for LeaderboardType {
    type Error = BridgeError;

    fn try_from(raw: i64) -> BridgeResult<Self> {
        match raw {
            0 => Ok(LeaderboardType::Classic),
            1 => Ok(LeaderboardType::Recurring),
            other => Err(BridgeError::invalid(format!("leaderboard type {other}"))),
        }
    }
}

/// Location/length pair as the native range query expects it.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct NativeRange {
    pub location: u64,
    pub length: u64,
}

#[derive(Clone, Debug, Default, Eq, PartialEq, Hash)]
pub struct Player {
    pub game_player_id: String,
    pub team_player_id: String,
    pub alias: String,
    pub display_name: String,
}

/// A ranked participant as produced by the modern range query.
#[derive(Clone, Debug, PartialEq)]
pub struct Entry {
    pub player: Player,
    pub rank: i64,
    pub score: i64,
    pub context: i64,
    pub formatted_score: Option<String>,
    pub date: Option<SystemTime>,
}

/// Payload of the modern range query.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct EntriesPage {
    pub local_player_entry: Option<Entry>,
    pub entries: Vec<Entry>,
    pub total_player_count: i64,
}

/// Payload of the modern per-player query.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PlayerEntriesPage {
    pub local_player_entry: Option<Entry>,
    pub entries: Vec<Entry>,
}

/// Scope and range the legacy API reads from the leaderboard object.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct LegacyQuery {
    pub player_scope: PlayerScope,
    pub time_scope: TimeScope,
    pub range: NativeRange,
}

/// Legacy score record, both as loaded and as reported.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct LegacyScore {
    pub leaderboard_identifier: String,
    pub value: i64,
    pub context: u64,
}

/// Decoded leaderboard artwork, RGBA8, row-major.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RasterImage {
    pub width: u32,
    pub height: u32,
    pub rgba: Vec<u8>,
}

/// A leaderboard object managed by the native service.
///
/// Methods are grouped by the API generation that provides them; callers
/// only reach a method after resolving a tier that offers it.
pub trait NativeLeaderboard: Send + Sync + fmt::Debug {
    // Available on every supported tier.
    fn identifier(&self) -> Option<String>;
    fn title(&self) -> Option<String>;
    fn group_identifier(&self) -> Option<String>;
    fn load_image(&self, done: Completion<Option<RasterImage>>);

    // Modern API.
    fn base_leaderboard_id(&self) -> String;
    fn leaderboard_type(&self) -> LeaderboardType;
    fn start_date(&self) -> Option<SystemTime>;
    fn next_start_date(&self) -> Option<SystemTime>;
    fn duration(&self) -> Duration;
    fn load_previous_occurrence(&self, done: Completion<Option<LeaderboardRef>>);
    fn load_entries(
        &self,
        player_scope: PlayerScope,
        time_scope: TimeScope,
        range: NativeRange,
        done: Completion<EntriesPage>,
    );
    fn load_entries_for_players(
        &self,
        players: &[Player],
        time_scope: TimeScope,
        done: Completion<PlayerEntriesPage>,
    );
    fn submit_score(&self, score: i64, context: i64, player: &Player, done: Completion<()>);

    // Legacy API. The query is object state read by `load_scores`.
    fn set_legacy_query(&self, query: LegacyQuery);
    fn load_scores(&self, done: Completion<Vec<LegacyScore>>);
}

/// Service-level entry points of the native SDK.
pub trait GameService: Send + Sync {
    /// Family and feature level of the running platform.
    fn platform(&self) -> PlatformVersion;

    fn local_player(&self) -> Option<Player>;

    /// Modern bulk fetch; `None` loads every leaderboard of the game.
    fn load_leaderboards(&self, ids: Option<&[String]>, done: Completion<Vec<LeaderboardRef>>);

    /// Legacy bulk fetch, no filter available.
    fn load_all_leaderboards(&self, done: Completion<Vec<LeaderboardRef>>);

    /// Legacy score reporting.
    fn report_scores(&self, scores: Vec<LegacyScore>, done: Completion<()>);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn enum_raw_values_match_native() {
        assert_eq!(PlayerScope::try_from(0).unwrap(), PlayerScope::Global);
        assert_eq!(PlayerScope::try_from(1).unwrap(), PlayerScope::FriendsOnly);
        assert_eq!(TimeScope::try_from(0).unwrap(), TimeScope::Today);
        assert_eq!(TimeScope::try_from(1).unwrap(), TimeScope::Week);
        assert_eq!(TimeScope::try_from(2).unwrap(), TimeScope::AllTime);
        assert_eq!(LeaderboardType::Classic.raw(), 0);
        assert_eq!(LeaderboardType::Recurring.raw(), 1);
    }

    #[test]
    fn out_of_domain_integers_are_rejected() {
        assert!(matches!(PlayerScope::try_from(2), Err(BridgeError::InvalidArgument(_))));
        assert!(matches!(TimeScope::try_from(-1), Err(BridgeError::InvalidArgument(_))));
        assert!(matches!(LeaderboardType::try_from(7), Err(BridgeError::InvalidArgument(_))));
    }
}
