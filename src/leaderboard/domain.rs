//! Canonical request and result shapes, independent of the tier serving them.

use crate::common::error::{BridgeError, BridgeResult};
use crate::native::{Entry, NativeRange, Player, PlayerScope, TimeScope};

/// Inclusive, 1-based rank window.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct RankRange {
    min: u64,
    max: u64,
}

impl RankRange {
    pub fn new(min: i64, max: i64) -> BridgeResult<Self> {
        if min < 1 || max < min {
            return Err(BridgeError::invalid(format!("rank range [{min}, {max}]")));
        }
        Ok(Self {
            min: min as u64,
            max: max as u64,
        })
    }

    pub fn min(&self) -> u64 {
        self.min
    }

    pub fn max(&self) -> u64 {
        self.max
    }

    pub fn to_native(self) -> NativeRange {
        NativeRange {
            location: self.min,
            length: self.max + 1 - self.min,
        }
    }
}

/// Range query exactly as the caller sent it, enums still raw.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct EntriesQuery {
    pub player_scope: i64,
    pub time_scope: i64,
    pub rank_min: i64,
    pub rank_max: i64,
}

/// Validated range query.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct EntriesRequest {
    pub player_scope: PlayerScope,
    pub time_scope: TimeScope,
    pub range: RankRange,
}

impl EntriesQuery {
    pub fn validate(&self) -> BridgeResult<EntriesRequest> {
        Ok(EntriesRequest {
            player_scope: PlayerScope::try_from(self.player_scope)?,
            time_scope: TimeScope::try_from(self.time_scope)?,
            range: RankRange::new(self.rank_min, self.rank_max)?,
        })
    }
}

/// Result of a range query on every tier.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct EntriesResult {
    pub local_player_entry: Option<Entry>,
    pub entries: Vec<Entry>,
    /// Never negative.
    pub total_player_count: i64,
}

/// Result of a per-player query on every tier.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PlayerEntriesResult {
    pub local_player_entry: Option<Entry>,
    pub entries: Vec<Entry>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ScoreSubmission {
    pub score: i64,
    pub context: i64,
    /// Required by the modern path, ignored by the legacy one.
    pub player: Option<Player>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn range_maps_to_location_and_length() {
        let range = RankRange::new(1, 25).unwrap();
        assert_eq!(range.to_native(), NativeRange { location: 1, length: 25 });
        let single = RankRange::new(10, 10).unwrap();
        assert_eq!(single.to_native(), NativeRange { location: 10, length: 1 });
    }

    #[test]
    fn inverted_or_zero_ranges_are_rejected() {
        assert!(RankRange::new(0, 10).is_err());
        assert!(RankRange::new(5, 4).is_err());
        assert!(RankRange::new(-3, 4).is_err());
    }

    #[test]
    fn query_validation_checks_every_field() {
        let ok = EntriesQuery {
            player_scope: 1,
            time_scope: 2,
            rank_min: 1,
            rank_max: 10,
        };
        let request = ok.validate().unwrap();
        assert_eq!(request.player_scope, PlayerScope::FriendsOnly);
        assert_eq!(request.time_scope, TimeScope::AllTime);

        assert!(EntriesQuery { player_scope: 9, ..ok }.validate().is_err());
        assert!(EntriesQuery { time_scope: 3, ..ok }.validate().is_err());
        assert!(EntriesQuery { rank_max: 0, ..ok }.validate().is_err());
    }
}
