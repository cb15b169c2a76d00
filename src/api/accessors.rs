//! Field readers and release functions for transferred handles.
//!
//! Readers return copies; strings they return must be freed with
//! [`lb_string_free`]. A null handle reads as null or zero.

use std::ffi::CString;
use std::os::raw::c_char;
use std::ptr;

use crate::common::time;

use super::handles::{
    self, ByteBuffer, EntryHandle, EntryListHandle, ErrorHandle, LeaderboardHandle,
    LeaderboardListHandle, PlayerHandle,
};

/// # Safety
/// `s` must be null or a string returned by this library, freed once.
#[no_mangle]
pub unsafe extern "C" fn lb_string_free(s: *mut c_char) {
    if !s.is_null() {
        drop(CString::from_raw(s));
    }
}

/// # Safety
/// `buffer` must be null or a buffer handed out by this library, freed once.
#[no_mangle]
pub unsafe extern "C" fn lb_bytes_free(buffer: *mut ByteBuffer) {
    if !buffer.is_null() {
        Box::from_raw(buffer).free();
    }
}

/// # Safety
/// `err` must be null or a live error handle.
#[no_mangle]
pub unsafe extern "C" fn lb_error_code(err: *const ErrorHandle) -> i64 {
    err.as_ref().map_or(0, |e| e.code)
}

/// # Safety
/// `err` must be null or a live error handle.
#[no_mangle]
pub unsafe extern "C" fn lb_error_domain(err: *const ErrorHandle) -> *mut c_char {
    err.as_ref()
        .map_or(ptr::null_mut(), |e| handles::string_into_raw(e.domain.as_str()))
}

/// # Safety
/// `err` must be null or a live error handle.
#[no_mangle]
pub unsafe extern "C" fn lb_error_message(err: *const ErrorHandle) -> *mut c_char {
    err.as_ref()
        .map_or(ptr::null_mut(), |e| handles::string_into_raw(e.message.as_str()))
}

/// # Safety
/// `err` must be null or an error handle owned by the caller.
#[no_mangle]
pub unsafe extern "C" fn lb_error_release(err: *mut ErrorHandle) {
    handles::release(err);
}

/// # Safety
/// `leaderboard` must be null or a leaderboard handle owned by the caller.
#[no_mangle]
pub unsafe extern "C" fn lb_leaderboard_release(leaderboard: *mut LeaderboardHandle) {
    handles::release(leaderboard);
}

/// # Safety
/// `list` must be null or a live leaderboard list handle.
#[no_mangle]
pub unsafe extern "C" fn lb_leaderboard_list_len(list: *const LeaderboardListHandle) -> usize {
    list.as_ref().map_or(0, |l| l.0.len())
}

/// New retained handle to item `index`, null when out of range.
///
/// # Safety
/// `list` must be null or a live leaderboard list handle.
#[no_mangle]
pub unsafe extern "C" fn lb_leaderboard_list_get(
    list: *const LeaderboardListHandle,
    index: usize,
) -> *mut LeaderboardHandle {
    list.as_ref()
        .and_then(|l| l.0.get(index))
        .map_or(ptr::null_mut(), |lb| LeaderboardHandle::into_raw(lb.clone()))
}

/// # Safety
/// `list` must be null or a leaderboard list handle owned by the caller.
#[no_mangle]
pub unsafe extern "C" fn lb_leaderboard_list_release(list: *mut LeaderboardListHandle) {
    handles::release(list);
}

/// # Safety
/// `entry` must be null or a live entry handle.
#[no_mangle]
pub unsafe extern "C" fn lb_entry_rank(entry: *const EntryHandle) -> i64 {
    entry.as_ref().map_or(0, |e| e.0.rank)
}

/// # Safety
/// `entry` must be null or a live entry handle.
#[no_mangle]
pub unsafe extern "C" fn lb_entry_score(entry: *const EntryHandle) -> i64 {
    entry.as_ref().map_or(0, |e| e.0.score)
}

/// # Safety
/// `entry` must be null or a live entry handle.
#[no_mangle]
pub unsafe extern "C" fn lb_entry_context(entry: *const EntryHandle) -> i64 {
    entry.as_ref().map_or(0, |e| e.0.context)
}

/// # Safety
/// `entry` must be null or a live entry handle.
#[no_mangle]
pub unsafe extern "C" fn lb_entry_formatted_score(entry: *const EntryHandle) -> *mut c_char {
    handles::opt_string_into_raw(entry.as_ref().and_then(|e| e.0.formatted_score.clone()))
}

/// Epoch seconds, `0.0` when unknown.
///
/// # Safety
/// `entry` must be null or a live entry handle.
#[no_mangle]
pub unsafe extern "C" fn lb_entry_date(entry: *const EntryHandle) -> f64 {
    time::epoch_seconds(entry.as_ref().and_then(|e| e.0.date))
}

/// New player handle for the entry's player.
///
/// # Safety
/// `entry` must be null or a live entry handle.
#[no_mangle]
pub unsafe extern "C" fn lb_entry_player(entry: *const EntryHandle) -> *mut PlayerHandle {
    entry
        .as_ref()
        .map_or(ptr::null_mut(), |e| PlayerHandle::into_raw(e.0.player.clone()))
}

/// # Safety
/// `entry` must be null or an entry handle owned by the caller.
#[no_mangle]
pub unsafe extern "C" fn lb_entry_release(entry: *mut EntryHandle) {
    handles::release(entry);
}

/// # Safety
/// `list` must be null or a live entry list handle.
#[no_mangle]
pub unsafe extern "C" fn lb_entry_list_len(list: *const EntryListHandle) -> usize {
    list.as_ref().map_or(0, |l| l.0.len())
}

/// Copy of entry `index`, null when out of range.
///
/// # Safety
/// `list` must be null or a live entry list handle.
#[no_mangle]
pub unsafe extern "C" fn lb_entry_list_get(list: *const EntryListHandle, index: usize) -> *mut EntryHandle {
    list.as_ref()
        .and_then(|l| l.0.get(index))
        .map_or(ptr::null_mut(), |e| handles::into_raw(EntryHandle(e.clone())))
}

/// # Safety
/// `list` must be null or an entry list handle owned by the caller.
#[no_mangle]
pub unsafe extern "C" fn lb_entry_list_release(list: *mut EntryListHandle) {
    handles::release(list);
}

/// # Safety
/// `player` must be null or a live player handle.
#[no_mangle]
pub unsafe extern "C" fn lb_player_game_player_id(player: *const PlayerHandle) -> *mut c_char {
    handles::opt_string_into_raw(player.as_ref().map(|p| p.0.game_player_id.clone()))
}

/// # Safety
/// `player` must be null or a live player handle.
#[no_mangle]
pub unsafe extern "C" fn lb_player_team_player_id(player: *const PlayerHandle) -> *mut c_char {
    handles::opt_string_into_raw(player.as_ref().map(|p| p.0.team_player_id.clone()))
}

/// # Safety
/// `player` must be null or a live player handle.
#[no_mangle]
pub unsafe extern "C" fn lb_player_alias(player: *const PlayerHandle) -> *mut c_char {
    handles::opt_string_into_raw(player.as_ref().map(|p| p.0.alias.clone()))
}

/// # Safety
/// `player` must be null or a live player handle.
#[no_mangle]
pub unsafe extern "C" fn lb_player_display_name(player: *const PlayerHandle) -> *mut c_char {
    handles::opt_string_into_raw(player.as_ref().map(|p| p.0.display_name.clone()))
}

/// # Safety
/// `player` must be null or a player handle owned by the caller.
#[no_mangle]
pub unsafe extern "C" fn lb_player_release(player: *mut PlayerHandle) {
    handles::release(player);
}
