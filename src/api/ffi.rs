//! C-compatible leaderboard entry points.
//!
//! Asynchronous entry points return immediately and later invoke exactly one
//! of their two continuations, tagged with the caller's task id. Synchronous
//! accessors return a null/zero sentinel on failure and report the error to
//! the default error handler.
//!
//! Every pointer argument must be null or valid for the duration of the call;
//! continuation function pointers must never be null.

use std::os::raw::c_char;
use std::ptr;

use crate::bridge::{self, Bridge};
use crate::common::config::BridgeCfg;
use crate::common::error::BridgeResult;
use crate::common::log;
use crate::leaderboard::{service, EntriesQuery, EntriesResult, PlayerEntriesResult, ScoreSubmission};
use crate::native::{LeaderboardRef, NativeLeaderboard};
use crate::platform::PlatformVersion;
use crate::task::{Task, TaskId};

use super::callbacks::{
    self, DefaultErrorCallback, ErrorTaskCallback, ImageTaskCallback, LeaderboardListTaskCallback,
    LeaderboardTaskCallback, LoadEntriesCallback, LoadEntriesForPlayersCallback,
    SuccessTaskCallback,
};
use super::handles::{self, ByteBuffer, LeaderboardHandle, LeaderboardListHandle, PlayerHandle};

/// ABI version to coordinate with the caller.
#[no_mangle]
pub extern "C" fn lb_api_version() -> u32 {
    1
}

/// Install the `tracing` subscriber. Returns `false` if one already exists.
#[no_mangle]
pub extern "C" fn lb_bridge_init() -> bool {
    let cfg = bridge::current()
        .map(|b| b.cfg().clone())
        .unwrap_or_else(|_| BridgeCfg::load());
    log::init(&cfg)
}

/// Set (or clear, with null) the handler that receives failures of
/// synchronous accessors. The handler owns the error handle it receives.
#[no_mangle]
pub extern "C" fn lb_set_default_error_handler(handler: Option<DefaultErrorCallback>) {
    callbacks::set_default_error_handler(handler);
}

/// Authenticated local player, null when unknown.
#[no_mangle]
pub extern "C" fn lb_player_local() -> *mut PlayerHandle {
    match bridge::current() {
        Ok(bridge) => bridge
            .service()
            .local_player()
            .map_or(ptr::null_mut(), PlayerHandle::into_raw),
        Err(err) => {
            callbacks::report_default(err);
            ptr::null_mut()
        }
    }
}

fn or_report<T>(result: BridgeResult<T>, sentinel: T) -> T {
    result.unwrap_or_else(|err| {
        callbacks::report_default(err);
        sentinel
    })
}

unsafe fn read_gated<T>(
    leaderboard: *const LeaderboardHandle,
    read: impl FnOnce(PlatformVersion, &dyn NativeLeaderboard) -> BridgeResult<T>,
) -> BridgeResult<T> {
    let bridge = bridge::current()?;
    let handle = handles::borrow(leaderboard)?;
    read(bridge.platform(), handle.0.as_ref())
}

unsafe fn dispatch<T>(
    leaderboard: *const LeaderboardHandle,
    task: Task<T>,
    op: impl FnOnce(&Bridge, &dyn NativeLeaderboard, Task<T>),
) {
    let bridge = match bridge::current() {
        Ok(bridge) => bridge,
        Err(err) => return task.fail(err),
    };
    match handles::borrow(leaderboard) {
        Ok(handle) => op(&bridge, handle.0.as_ref(), task),
        Err(err) => task.fail(err),
    }
}

/// # Safety
/// `leaderboard` must be null or a live leaderboard handle.
#[no_mangle]
pub unsafe extern "C" fn lb_leaderboard_base_id(leaderboard: *const LeaderboardHandle) -> *mut c_char {
    let id = or_report(read_gated(leaderboard, service::base_leaderboard_id), None);
    handles::opt_string_into_raw(id)
}

/// # Safety
/// `leaderboard` must be null or a live leaderboard handle.
#[no_mangle]
pub unsafe extern "C" fn lb_leaderboard_title(leaderboard: *const LeaderboardHandle) -> *mut c_char {
    let title = or_report(handles::borrow(leaderboard).map(|h| service::title(h.0.as_ref())), None);
    handles::opt_string_into_raw(title)
}

/// # Safety
/// `leaderboard` must be null or a live leaderboard handle.
#[no_mangle]
pub unsafe extern "C" fn lb_leaderboard_group_identifier(
    leaderboard: *const LeaderboardHandle,
) -> *mut c_char {
    let group = or_report(
        handles::borrow(leaderboard).map(|h| service::group_identifier(h.0.as_ref())),
        None,
    );
    handles::opt_string_into_raw(group)
}

/// Raw leaderboard type: 0 classic, 1 recurring.
///
/// # Safety
/// `leaderboard` must be null or a live leaderboard handle.
#[no_mangle]
pub unsafe extern "C" fn lb_leaderboard_type(leaderboard: *const LeaderboardHandle) -> i64 {
    let kind = read_gated(leaderboard, service::leaderboard_type).map(|kind| kind.raw());
    or_report(kind, 0)
}

/// # Safety
/// `leaderboard` must be null or a live leaderboard handle.
#[no_mangle]
pub unsafe extern "C" fn lb_leaderboard_start_date(leaderboard: *const LeaderboardHandle) -> f64 {
    or_report(read_gated(leaderboard, service::start_date), 0.0)
}

/// # Safety
/// `leaderboard` must be null or a live leaderboard handle.
#[no_mangle]
pub unsafe extern "C" fn lb_leaderboard_next_start_date(leaderboard: *const LeaderboardHandle) -> f64 {
    or_report(read_gated(leaderboard, service::next_start_date), 0.0)
}

/// # Safety
/// `leaderboard` must be null or a live leaderboard handle.
#[no_mangle]
pub unsafe extern "C" fn lb_leaderboard_duration(leaderboard: *const LeaderboardHandle) -> i64 {
    or_report(read_gated(leaderboard, service::duration), 0)
}

/// # Safety
/// `leaderboard` must be null or a live leaderboard handle.
#[no_mangle]
pub unsafe extern "C" fn lb_leaderboard_load_previous_occurrence(
    leaderboard: *const LeaderboardHandle,
    task_id: TaskId,
    on_success: LeaderboardTaskCallback,
    on_error: ErrorTaskCallback,
) {
    let task = callbacks::task(task_id, on_error, move |id, previous: Option<LeaderboardRef>| {
        on_success(
            id,
            previous.map_or(ptr::null_mut(), LeaderboardHandle::into_raw),
        )
    });
    dispatch(leaderboard, task, |bridge, lb, task| {
        service::load_previous_occurrence(bridge.platform(), lb, task)
    });
}

/// Load entries ranked `rank_min..=rank_max` (1-based).
///
/// # Safety
/// `leaderboard` must be null or a live leaderboard handle.
#[no_mangle]
#[allow(clippy::too_many_arguments)]
pub unsafe extern "C" fn lb_leaderboard_load_entries(
    leaderboard: *const LeaderboardHandle,
    task_id: TaskId,
    player_scope: i64,
    time_scope: i64,
    rank_min: i64,
    rank_max: i64,
    on_success: LoadEntriesCallback,
    on_error: ErrorTaskCallback,
) {
    let task = callbacks::task(task_id, on_error, move |id, result: EntriesResult| {
        let (local, entries, total) = handles::entries_into_raw(result);
        on_success(id, local, entries, total)
    });
    let query = EntriesQuery {
        player_scope,
        time_scope,
        rank_min,
        rank_max,
    };
    dispatch(leaderboard, task, |bridge, lb, task| {
        service::load_entries(bridge.platform(), lb, query, task)
    });
}

/// # Safety
/// `leaderboard` must be null or a live leaderboard handle; `players` must be
/// null (with `player_count == 0`) or point to `player_count` player handles.
#[no_mangle]
pub unsafe extern "C" fn lb_leaderboard_load_entries_for_players(
    leaderboard: *const LeaderboardHandle,
    task_id: TaskId,
    players: *const *const PlayerHandle,
    player_count: usize,
    time_scope: i64,
    on_success: LoadEntriesForPlayersCallback,
    on_error: ErrorTaskCallback,
) {
    let task = callbacks::task(task_id, on_error, move |id, result: PlayerEntriesResult| {
        let (local, entries) = handles::player_entries_into_raw(result);
        on_success(id, local, entries)
    });
    let players = match handles::read_players(players, player_count) {
        Ok(players) => players,
        Err(err) => return task.fail(err),
    };
    dispatch(leaderboard, task, |bridge, lb, task| {
        service::load_entries_for_players(bridge.platform(), lb, &players, time_scope, task)
    });
}

/// Leaderboard artwork as PNG; the success continuation gets null when the
/// leaderboard has none.
///
/// # Safety
/// `leaderboard` must be null or a live leaderboard handle.
#[no_mangle]
pub unsafe extern "C" fn lb_leaderboard_load_image(
    leaderboard: *const LeaderboardHandle,
    task_id: TaskId,
    on_success: ImageTaskCallback,
    on_error: ErrorTaskCallback,
) {
    let task = callbacks::task(task_id, on_error, move |id, png: Option<Vec<u8>>| {
        let buffer = png.map_or(ptr::null_mut(), |bytes| handles::into_raw(ByteBuffer::from_vec(bytes)));
        on_success(id, buffer)
    });
    dispatch(leaderboard, task, |bridge, lb, task| {
        service::load_image(bridge.platform(), lb, task)
    });
}

/// Submit `score` with `context` for `player`. The legacy path reports for the
/// authenticated player and accepts a null `player`.
///
/// # Safety
/// `leaderboard` and `player` must each be null or a live handle.
#[no_mangle]
pub unsafe extern "C" fn lb_leaderboard_submit_score(
    leaderboard: *const LeaderboardHandle,
    task_id: TaskId,
    score: i64,
    context: i64,
    player: *const PlayerHandle,
    on_success: SuccessTaskCallback,
    on_error: ErrorTaskCallback,
) {
    let task = callbacks::task(task_id, on_error, move |id, ()| on_success(id));
    let submission = ScoreSubmission {
        score,
        context,
        player: player.as_ref().map(|handle| handle.0.clone()),
    };
    dispatch(leaderboard, task, |bridge, lb, task| {
        service::submit_score(bridge.platform(), bridge.service(), lb, submission, task)
    });
}

/// Discover leaderboards. A null `ids` array (with `id_count == 0`) loads all
/// of them. An empty list goes to the native fetch as given on the modern
/// tier and keeps everything on the legacy tier.
///
/// # Safety
/// `ids` must be null (with `id_count == 0`) or point to `id_count`
/// NUL-terminated strings.
#[no_mangle]
pub unsafe extern "C" fn lb_leaderboards_load(
    ids: *const *const c_char,
    id_count: usize,
    task_id: TaskId,
    on_success: LeaderboardListTaskCallback,
    on_error: ErrorTaskCallback,
) {
    let task = callbacks::task(task_id, on_error, move |id, list: Vec<LeaderboardRef>| {
        on_success(id, handles::into_raw(LeaderboardListHandle(list)))
    });
    let ids = match handles::read_id_list(ids, id_count) {
        Ok(ids) => ids,
        Err(err) => return task.fail(err),
    };
    match bridge::current() {
        Ok(bridge) => service::load_leaderboards(bridge.platform(), bridge.service(), ids, task),
        Err(err) => task.fail(err),
    }
}
