//! C continuation types and the process-wide default error handler.

use std::sync::{PoisonError, RwLock};

use crate::common::error::BridgeError;
use crate::task::{Task, TaskId};

use super::handles::{
    self, ByteBuffer, EntryHandle, EntryListHandle, ErrorHandle, LeaderboardHandle,
    LeaderboardListHandle,
};

/// Receives the task id and an owned error handle.
pub type ErrorTaskCallback = extern "C" fn(TaskId, *mut ErrorHandle);
pub type SuccessTaskCallback = extern "C" fn(TaskId);
/// Nullable owned leaderboard handle.
pub type LeaderboardTaskCallback = extern "C" fn(TaskId, *mut LeaderboardHandle);
pub type LeaderboardListTaskCallback = extern "C" fn(TaskId, *mut LeaderboardListHandle);
/// Local entry (nullable), entry list, total player count.
pub type LoadEntriesCallback = extern "C" fn(TaskId, *mut EntryHandle, *mut EntryListHandle, i64);
/// Local entry (nullable), entry list.
pub type LoadEntriesForPlayersCallback = extern "C" fn(TaskId, *mut EntryHandle, *mut EntryListHandle);
/// PNG bytes, null when the leaderboard has no image.
pub type ImageTaskCallback = extern "C" fn(TaskId, *mut ByteBuffer);
/// Handler for failures of synchronous accessors.
pub type DefaultErrorCallback = extern "C" fn(*mut ErrorHandle);

static DEFAULT_ERROR_HANDLER: RwLock<Option<DefaultErrorCallback>> = RwLock::new(None);

/// Build a task whose error continuation is the C `on_error`.
pub(crate) fn task<T, S>(id: TaskId, on_error: ErrorTaskCallback, on_success: S) -> Task<T>
where
    S: FnOnce(TaskId, T) + Send + 'static,
{
    Task::new(id, on_success, move |id, err: BridgeError| {
        on_error(id, handles::error_into_raw(err))
    })
}

pub(crate) fn set_default_error_handler(handler: Option<DefaultErrorCallback>) {
    *DEFAULT_ERROR_HANDLER
        .write()
        .unwrap_or_else(PoisonError::into_inner) = handler;
}

/// Report a synchronous failure. Without a handler the error can only be
/// logged.
pub(crate) fn report_default(err: BridgeError) {
    let handler = *DEFAULT_ERROR_HANDLER
        .read()
        .unwrap_or_else(PoisonError::into_inner);
    match handler {
        Some(handler) => handler(handles::error_into_raw(err)),
        None => tracing::warn!(%err, "no default error handler installed"),
    }
}
