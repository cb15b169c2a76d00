//! Mapping of native payloads onto the canonical result shapes.

use std::collections::HashSet;

use crate::native::{EntriesPage, LeaderboardRef, LegacyScore, PlayerEntriesPage};

use super::domain::{EntriesResult, PlayerEntriesResult};

pub fn entries_from_page(page: EntriesPage) -> EntriesResult {
    EntriesResult {
        local_player_entry: page.local_player_entry,
        entries: page.entries,
        total_player_count: page.total_player_count.max(0),
    }
}

/// The legacy API has no entry objects: only the number of loaded scores
/// survives, as the total count.
pub fn entries_from_legacy_scores(scores: Vec<LegacyScore>) -> EntriesResult {
    EntriesResult {
        local_player_entry: None,
        entries: Vec::new(),
        total_player_count: i64::try_from(scores.len()).unwrap_or(i64::MAX),
    }
}

pub fn player_entries_from_page(page: PlayerEntriesPage) -> PlayerEntriesResult {
    PlayerEntriesResult {
        local_player_entry: page.local_player_entry,
        entries: page.entries,
    }
}

/// Keep the leaderboards whose identifier is requested. An absent or empty
/// id set keeps everything; a leaderboard without identifier matches `""`.
pub fn filter_by_ids(all: Vec<LeaderboardRef>, ids: Option<&[String]>) -> Vec<LeaderboardRef> {
    let wanted: HashSet<&str> = match ids {
        Some(ids) if !ids.is_empty() => ids.iter().map(String::as_str).collect(),
        _ => return all,
    };

    all.into_iter()
        .filter(|lb| wanted.contains(lb.identifier().as_deref().unwrap_or("")))
        .collect()
}
