//! Ownership transfer across the C boundary.
//!
//! Object-shaped values leave as boxed handles the caller must release with
//! the matching `lb_*_release` function. Strings and byte buffers are deep
//! copies with their own free functions. Nothing handed out aliases native
//! storage the caller could observe changing.

use std::ffi::{CStr, CString};
use std::os::raw::c_char;
use std::ptr;

use crate::common::error::{BridgeError, BridgeResult};
use crate::leaderboard::{EntriesResult, PlayerEntriesResult};
use crate::native::{Entry, LeaderboardRef, Player};

/// Retained reference to a native leaderboard.
pub struct LeaderboardHandle(pub(crate) LeaderboardRef);

impl LeaderboardHandle {
    /// Box `leaderboard` for a caller; used by platform crates that obtain
    /// leaderboards through other means.
    pub fn into_raw(leaderboard: LeaderboardRef) -> *mut LeaderboardHandle {
        into_raw(LeaderboardHandle(leaderboard))
    }
}

pub struct LeaderboardListHandle(pub(crate) Vec<LeaderboardRef>);

pub struct EntryHandle(pub(crate) Entry);

pub struct EntryListHandle(pub(crate) Vec<Entry>);

pub struct PlayerHandle(pub(crate) Player);

impl PlayerHandle {
    pub fn into_raw(player: Player) -> *mut PlayerHandle {
        into_raw(PlayerHandle(player))
    }
}

/// Error delivered to error continuations and the default error handler.
pub struct ErrorHandle {
    pub(crate) code: i64,
    pub(crate) domain: String,
    pub(crate) message: String,
}

impl From<BridgeError> for ErrorHandle {
    fn from(err: BridgeError) -> Self {
        let message = match &err {
            BridgeError::Native(native) => native.message.clone(),
            other => other.to_string(),
        };
        Self {
            code: err.raw_code(),
            domain: err.domain().to_string(),
            message,
        }
    }
}

/// Owned copy of a binary blob. `data` is valid for `len` bytes until
/// released with `lb_bytes_free`.
#[repr(C)]
pub struct ByteBuffer {
    pub data: *mut u8,
    pub len: usize,
}

impl ByteBuffer {
    pub(crate) fn from_vec(bytes: Vec<u8>) -> Self {
        let boxed = bytes.into_boxed_slice();
        let len = boxed.len();
        let data = Box::into_raw(boxed) as *mut u8;
        Self { data, len }
    }

    /// # Safety
    /// `self` must come from [`ByteBuffer::from_vec`] and not be freed yet.
    pub(crate) unsafe fn free(self) {
        if !self.data.is_null() {
            drop(Box::from_raw(ptr::slice_from_raw_parts_mut(self.data, self.len)));
        }
    }
}

pub(crate) fn into_raw<T>(value: T) -> *mut T {
    Box::into_raw(Box::new(value))
}

/// # Safety
/// `ptr` must be null or come from [`into_raw`] with the same `T`, and must
/// not be used afterwards.
pub(crate) unsafe fn release<T>(ptr: *mut T) {
    if !ptr.is_null() {
        drop(Box::from_raw(ptr));
    }
}

/// # Safety
/// `ptr` must be null or point to a live `T` for the duration of `'a`.
pub(crate) unsafe fn borrow<'a, T>(ptr: *const T) -> BridgeResult<&'a T> {
    ptr.as_ref().ok_or_else(|| BridgeError::invalid("null handle"))
}

/// Copy `s` into a caller-owned C string. Interior NULs are dropped.
pub(crate) fn string_into_raw(s: impl Into<Vec<u8>>) -> *mut c_char {
    let cstring = CString::new(s).unwrap_or_else(|err| {
        let mut bytes = err.into_vec();
        bytes.retain(|b| *b != 0);
        CString::new(bytes).unwrap_or_default()
    });
    cstring.into_raw()
}

pub(crate) fn opt_string_into_raw(s: Option<String>) -> *mut c_char {
    s.map_or(ptr::null_mut(), string_into_raw)
}

/// # Safety
/// `ptr` must be null or a NUL-terminated string.
pub(crate) unsafe fn read_str(ptr: *const c_char) -> BridgeResult<String> {
    if ptr.is_null() {
        return Err(BridgeError::invalid("null string"));
    }
    CStr::from_ptr(ptr)
        .to_str()
        .map(str::to_owned)
        .map_err(|_| BridgeError::invalid("string is not UTF-8"))
}

/// Read an optional id list; a null array with no items means "no filter".
///
/// # Safety
/// `ids` must be null (with `count == 0`) or point to `count`
/// NUL-terminated strings.
pub(crate) unsafe fn read_id_list(
    ids: *const *const c_char,
    count: usize,
) -> BridgeResult<Option<Vec<String>>> {
    if ids.is_null() {
        return if count == 0 {
            Ok(None)
        } else {
            Err(BridgeError::invalid("null id array"))
        };
    }
    std::slice::from_raw_parts(ids, count)
        .iter()
        .map(|id| read_str(*id))
        .collect::<BridgeResult<Vec<_>>>()
        .map(Some)
}

/// # Safety
/// `players` must be null (with `count == 0`) or point to `count` live
/// player handles.
pub(crate) unsafe fn read_players(
    players: *const *const PlayerHandle,
    count: usize,
) -> BridgeResult<Vec<Player>> {
    if players.is_null() {
        return if count == 0 {
            Ok(Vec::new())
        } else {
            Err(BridgeError::invalid("null player array"))
        };
    }
    std::slice::from_raw_parts(players, count)
        .iter()
        .map(|p| borrow(*p).map(|handle| handle.0.clone()))
        .collect()
}

fn opt_entry_into_raw(entry: Option<Entry>) -> *mut EntryHandle {
    entry.map_or(ptr::null_mut(), |e| into_raw(EntryHandle(e)))
}

/// Local entry (nullable), entry list (never null) and total count.
pub(crate) fn entries_into_raw(
    result: EntriesResult,
) -> (*mut EntryHandle, *mut EntryListHandle, i64) {
    (
        opt_entry_into_raw(result.local_player_entry),
        into_raw(EntryListHandle(result.entries)),
        result.total_player_count,
    )
}

/// Local entry (nullable) and entry list (never null).
pub(crate) fn player_entries_into_raw(
    result: PlayerEntriesResult,
) -> (*mut EntryHandle, *mut EntryListHandle) {
    (
        opt_entry_into_raw(result.local_player_entry),
        into_raw(EntryListHandle(result.entries)),
    )
}

pub(crate) fn error_into_raw(err: BridgeError) -> *mut ErrorHandle {
    into_raw(ErrorHandle::from(err))
}
