//! Narrow adapters over the legacy scoring API.
//!
//! The legacy range query is configured through fields on the leaderboard
//! object rather than call parameters. [`load_scores_in`] keeps that
//! configure-then-load sequence in one place; two in-flight legacy queries on
//! the same leaderboard still race, and callers must serialize them.

use crate::common::error::{BridgeError, BridgeResult};
use crate::native::{Completion, GameService, LegacyQuery, LegacyScore, NativeLeaderboard};

use super::domain::EntriesRequest;

/// Configure `leaderboard` for `request` and load its scores.
pub fn load_scores_in(
    leaderboard: &dyn NativeLeaderboard,
    request: &EntriesRequest,
    done: Completion<Vec<LegacyScore>>,
) {
    leaderboard.set_legacy_query(LegacyQuery {
        player_scope: request.player_scope,
        time_scope: request.time_scope,
        range: request.range.to_native(),
    });
    leaderboard.load_scores(done);
}

/// Build the legacy record for a submission. Leaderboards without identifier
/// report under `""`.
pub fn score_record(
    leaderboard: &dyn NativeLeaderboard,
    score: i64,
    context: i64,
) -> BridgeResult<LegacyScore> {
    let context = u64::try_from(context)
        .map_err(|_| BridgeError::invalid(format!("legacy score context {context}")))?;
    Ok(LegacyScore {
        leaderboard_identifier: leaderboard.identifier().unwrap_or_default(),
        value: score,
        context,
    })
}

/// Report one legacy score record.
pub fn report_score(service: &dyn GameService, record: LegacyScore, done: Completion<()>) {
    service.report_scores(vec![record], done);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::native::fake::{CallLog, FakeLeaderboard, NativeCall};
    use crate::native::{NativeRange, PlayerScope, TimeScope};
    use crate::leaderboard::domain::RankRange;

    #[test]
    fn query_is_configured_before_loading() {
        let log = CallLog::default();
        let board = FakeLeaderboard::new("weekly", &log);
        let request = EntriesRequest {
            player_scope: PlayerScope::FriendsOnly,
            time_scope: TimeScope::Week,
            range: RankRange::new(11, 20).unwrap(),
        };

        load_scores_in(&board, &request, Box::new(|_| {}));

        let query = LegacyQuery {
            player_scope: PlayerScope::FriendsOnly,
            time_scope: TimeScope::Week,
            range: NativeRange {
                location: 11,
                length: 10,
            },
        };
        assert_eq!(
            log.calls(),
            vec![
                NativeCall::SetLegacyQuery {
                    leaderboard: "weekly".into(),
                    query,
                },
                NativeCall::LoadScores("weekly".into()),
            ]
        );
    }

    #[test]
    fn record_uses_the_legacy_identifier() {
        let log = CallLog::default();
        let mut board = FakeLeaderboard::new("classic", &log);
        let record = score_record(&board, 100, 7).unwrap();
        assert_eq!(
            record,
            LegacyScore {
                leaderboard_identifier: "classic".into(),
                value: 100,
                context: 7,
            }
        );

        board.identifier = None;
        assert_eq!(score_record(&board, 1, 0).unwrap().leaderboard_identifier, "");
    }

    #[test]
    fn negative_context_cannot_become_a_legacy_record() {
        let log = CallLog::default();
        let board = FakeLeaderboard::new("classic", &log);
        assert!(matches!(
            score_record(&board, 1, -1),
            Err(BridgeError::InvalidArgument(_))
        ));
    }
}
