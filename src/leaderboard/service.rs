//! Leaderboard operations, one tier dispatch per call.
//!
//! Every function resolves [`LEADERBOARD_API`] against the platform it is
//! given and then follows that tier's row of the behaviour table. Tier C never
//! touches the native service. Asynchronous operations settle their [`Task`]
//! exactly once, either directly or through the native completion.

use crate::common::error::{BridgeError, BridgeResult};
use crate::common::time;
use crate::native::{
    GameService, LeaderboardRef, LeaderboardType, NativeLeaderboard, Player, RasterImage, TimeScope,
};
use crate::platform::{PlatformVersion, Tier, LEADERBOARD_API};
use crate::task::Task;

use super::domain::{EntriesQuery, EntriesResult, PlayerEntriesResult, ScoreSubmission};
use super::{image, legacy, normalize};

fn tier_for(platform: PlatformVersion, operation: &'static str) -> Tier {
    let tier = LEADERBOARD_API.resolve(platform);
    tracing::trace!(operation, tier = tier.as_str(), "resolved tier");
    tier
}

fn dispatched(operation: &'static str, task_id: i64, tier: Tier) {
    tracing::debug!(operation, task_id, tier = tier.as_str(), "dispatch");
}

pub fn base_leaderboard_id(
    platform: PlatformVersion,
    leaderboard: &dyn NativeLeaderboard,
) -> BridgeResult<Option<String>> {
    match tier_for(platform, "base_leaderboard_id") {
        Tier::Modern => Ok(Some(leaderboard.base_leaderboard_id())),
        Tier::Legacy => Ok(leaderboard.identifier()),
        Tier::Unsupported => Err(BridgeError::unavailable("base_leaderboard_id")),
    }
}

/// Not tier gated.
pub fn title(leaderboard: &dyn NativeLeaderboard) -> Option<String> {
    leaderboard.title()
}

/// Not tier gated.
pub fn group_identifier(leaderboard: &dyn NativeLeaderboard) -> Option<String> {
    leaderboard.group_identifier()
}

pub fn leaderboard_type(
    platform: PlatformVersion,
    leaderboard: &dyn NativeLeaderboard,
) -> BridgeResult<LeaderboardType> {
    match tier_for(platform, "leaderboard_type") {
        Tier::Modern => Ok(leaderboard.leaderboard_type()),
        Tier::Legacy => Ok(LeaderboardType::Classic),
        Tier::Unsupported => Err(BridgeError::unavailable("leaderboard_type")),
    }
}

/// Epoch seconds, `0.0` when absent or not offered by the tier.
pub fn start_date(platform: PlatformVersion, leaderboard: &dyn NativeLeaderboard) -> BridgeResult<f64> {
    match tier_for(platform, "start_date") {
        Tier::Modern => Ok(time::epoch_seconds(leaderboard.start_date())),
        Tier::Legacy => Ok(0.0),
        Tier::Unsupported => Err(BridgeError::unavailable("start_date")),
    }
}

pub fn next_start_date(
    platform: PlatformVersion,
    leaderboard: &dyn NativeLeaderboard,
) -> BridgeResult<f64> {
    match tier_for(platform, "next_start_date") {
        Tier::Modern => Ok(time::epoch_seconds(leaderboard.next_start_date())),
        Tier::Legacy => Ok(0.0),
        Tier::Unsupported => Err(BridgeError::unavailable("next_start_date")),
    }
}

/// Whole seconds, `0` when not offered by the tier.
pub fn duration(platform: PlatformVersion, leaderboard: &dyn NativeLeaderboard) -> BridgeResult<i64> {
    match tier_for(platform, "duration") {
        Tier::Modern => Ok(time::whole_seconds(leaderboard.duration())),
        Tier::Legacy => Ok(0),
        Tier::Unsupported => Err(BridgeError::unavailable("duration")),
    }
}

/// Legacy leaderboards do not recur, so the legacy tier reports "no previous
/// occurrence" as a success.
pub fn load_previous_occurrence(
    platform: PlatformVersion,
    leaderboard: &dyn NativeLeaderboard,
    task: Task<Option<LeaderboardRef>>,
) {
    const OP: &str = "load_previous_occurrence";
    let tier = tier_for(platform, OP);
    dispatched(OP, task.id(), tier);

    match tier {
        Tier::Modern => leaderboard.load_previous_occurrence(task.completion(Ok)),
        Tier::Legacy => task.succeed(None),
        Tier::Unsupported => task.fail(BridgeError::unavailable(OP)),
    }
}

/// Range query. The legacy tier degrades to a count-only result.
pub fn load_entries(
    platform: PlatformVersion,
    leaderboard: &dyn NativeLeaderboard,
    query: EntriesQuery,
    task: Task<EntriesResult>,
) {
    const OP: &str = "load_entries";
    let tier = tier_for(platform, OP);
    dispatched(OP, task.id(), tier);

    match (tier, query.validate()) {
        (Tier::Unsupported, _) => task.fail(BridgeError::unavailable(OP)),
        (_, Err(err)) => task.fail(err),
        (Tier::Modern, Ok(request)) => leaderboard.load_entries(
            request.player_scope,
            request.time_scope,
            request.range.to_native(),
            task.completion(|page| Ok(normalize::entries_from_page(page))),
        ),
        (Tier::Legacy, Ok(request)) => legacy::load_scores_in(
            leaderboard,
            &request,
            task.completion(|scores| Ok(normalize::entries_from_legacy_scores(scores))),
        ),
    }
}

/// Per-player query. The legacy tier has none and succeeds empty.
pub fn load_entries_for_players(
    platform: PlatformVersion,
    leaderboard: &dyn NativeLeaderboard,
    players: &[Player],
    time_scope: i64,
    task: Task<PlayerEntriesResult>,
) {
    const OP: &str = "load_entries_for_players";
    let tier = tier_for(platform, OP);
    dispatched(OP, task.id(), tier);

    match (tier, TimeScope::try_from(time_scope)) {
        (Tier::Unsupported, _) => task.fail(BridgeError::unavailable(OP)),
        (_, Err(err)) => task.fail(err),
        (Tier::Modern, Ok(time_scope)) => leaderboard.load_entries_for_players(
            players,
            time_scope,
            task.completion(|page| Ok(normalize::player_entries_from_page(page))),
        ),
        (Tier::Legacy, Ok(_)) => task.succeed(PlayerEntriesResult::default()),
    }
}

/// Artwork as PNG bytes; `None` when the leaderboard has no image.
///
/// The platform family gate comes first: a family without leaderboard images
/// fails on every tier without calling the native service.
pub fn load_image(
    platform: PlatformVersion,
    leaderboard: &dyn NativeLeaderboard,
    task: Task<Option<Vec<u8>>>,
) {
    const OP: &str = "load_image";
    if !platform.family.supports_leaderboard_images() {
        tracing::debug!(operation = OP, task_id = task.id(), family = ?platform.family, "unsupported family");
        return task.fail(BridgeError::unavailable(OP));
    }
    let tier = tier_for(platform, OP);
    dispatched(OP, task.id(), tier);

    match tier {
        Tier::Modern | Tier::Legacy => leaderboard.load_image(
            task.completion(|raster: Option<RasterImage>| raster.as_ref().map(image::encode_png).transpose()),
        ),
        Tier::Unsupported => task.fail(BridgeError::unavailable(OP)),
    }
}

pub fn submit_score(
    platform: PlatformVersion,
    service: &dyn GameService,
    leaderboard: &dyn NativeLeaderboard,
    submission: ScoreSubmission,
    task: Task<()>,
) {
    const OP: &str = "submit_score";
    let tier = tier_for(platform, OP);
    dispatched(OP, task.id(), tier);

    match tier {
        Tier::Modern => match submission.player {
            Some(player) => leaderboard.submit_score(
                submission.score,
                submission.context,
                &player,
                task.completion(Ok),
            ),
            None => task.fail(BridgeError::invalid("submit_score needs a player")),
        },
        Tier::Legacy => match legacy::score_record(leaderboard, submission.score, submission.context) {
            Ok(record) => legacy::report_score(service, record, task.completion(Ok)),
            Err(err) => task.fail(err),
        },
        Tier::Unsupported => task.fail(BridgeError::unavailable(OP)),
    }
}

/// Discover leaderboards. The modern tier hands `ids` to the native fetch
/// as given; the legacy tier filters client-side and keeps everything for an
/// absent or empty id set.
pub fn load_leaderboards(
    platform: PlatformVersion,
    service: &dyn GameService,
    ids: Option<Vec<String>>,
    task: Task<Vec<LeaderboardRef>>,
) {
    const OP: &str = "load_leaderboards";
    let tier = tier_for(platform, OP);
    dispatched(OP, task.id(), tier);

    match tier {
        Tier::Modern => service.load_leaderboards(ids.as_deref(), task.completion(Ok)),
        Tier::Legacy => service.load_all_leaderboards(
            task.completion(move |all| Ok(normalize::filter_by_ids(all, ids.as_deref()))),
        ),
        Tier::Unsupported => task.fail(BridgeError::unavailable(OP)),
    }
}
