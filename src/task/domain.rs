//! Tagged one-shot continuations.
//!
//! A [`Task`] is the pending state of one caller request. Settling consumes
//! it, so it reaches `Succeeded` or `Failed` at most once; dropping it while
//! still pending reports [`BridgeError::TaskAbandoned`], so it also reaches a
//! terminal state at least once.

use crate::common::error::{BridgeError, BridgeResult, NativeError};
use crate::native::Completion;

/// Caller-assigned correlation id. Uniqueness is the caller's business.
pub type TaskId = i64;

type SuccessFn<T> = Box<dyn FnOnce(TaskId, T) + Send + 'static>;
type ErrorFn = Box<dyn FnOnce(TaskId, BridgeError) + Send + 'static>;

pub struct Task<T> {
    id: TaskId,
    pending: Option<(SuccessFn<T>, ErrorFn)>,
}

impl<T> Task<T> {
    pub fn new<S, E>(id: TaskId, on_success: S, on_error: E) -> Self
    where
        S: FnOnce(TaskId, T) + Send + 'static,
        E: FnOnce(TaskId, BridgeError) + Send + 'static,
    {
        Self {
            id,
            pending: Some((Box::new(on_success), Box::new(on_error))),
        }
    }

    pub fn id(&self) -> TaskId {
        self.id
    }

    pub fn succeed(self, value: T) {
        self.settle(Ok(value));
    }

    pub fn fail(self, err: BridgeError) {
        self.settle(Err(err));
    }

    /// Invoke exactly one continuation with `result`.
    pub fn settle(mut self, result: BridgeResult<T>) {
        if let Some((on_success, on_error)) = self.pending.take() {
            match result {
                Ok(value) => on_success(self.id, value),
                Err(err) => on_error(self.id, err),
            }
        }
    }
}

impl<T: 'static> Task<T> {
    /// Turn the task into the completion of a native call, shaping the native
    /// payload with `normalize` before the success continuation sees it.
    pub fn completion<N, F>(self, normalize: F) -> Completion<N>
    where
        N: 'static,
        F: FnOnce(N) -> BridgeResult<T> + Send + 'static,
    {
        Box::new(move |result: Result<N, NativeError>| {
            self.settle(result.map_err(BridgeError::from).and_then(normalize))
        })
    }
}

impl<T> Drop for Task<T> {
    fn drop(&mut self) {
        if let Some((_, on_error)) = self.pending.take() {
            tracing::debug!(task_id = self.id, "native completion dropped");
            on_error(self.id, BridgeError::TaskAbandoned { task_id: self.id });
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use super::*;

    type Log = Arc<Mutex<Vec<String>>>;

    fn recording(id: TaskId, log: &Log) -> Task<u32> {
        let ok = log.clone();
        let err = log.clone();
        Task::new(
            id,
            move |id, v: u32| ok.lock().unwrap().push(format!("ok {id} {v}")),
            move |id, e: BridgeError| err.lock().unwrap().push(format!("err {id} {:?}", e.code())),
        )
    }

    #[test]
    fn success_runs_only_the_success_continuation() {
        let log = Log::default();
        recording(7, &log).succeed(3);
        assert_eq!(*log.lock().unwrap(), vec!["ok 7 3"]);
    }

    #[test]
    fn native_error_runs_only_the_error_continuation() {
        let log = Log::default();
        let done = recording(8, &log).completion(|n: u32| Ok(n + 1));
        done(Err(NativeError::new("GKErrorDomain", 3, "offline")));
        assert_eq!(*log.lock().unwrap(), vec!["err 8 NativeService"]);
    }

    #[test]
    fn normalizer_runs_before_success() {
        let log = Log::default();
        let done = recording(9, &log).completion(|n: u32| Ok(n * 10));
        done(Ok(4));
        assert_eq!(*log.lock().unwrap(), vec!["ok 9 40"]);
    }

    #[test]
    fn normalizer_failure_is_an_error_outcome() {
        let log = Log::default();
        let done = recording(10, &log).completion(|_: u32| Err(BridgeError::ImageEncoding("x".into())));
        done(Ok(1));
        assert_eq!(*log.lock().unwrap(), vec!["err 10 ImageEncoding"]);
    }

    #[test]
    fn dropped_completion_is_reported_once() {
        let log = Log::default();
        drop(recording(11, &log).completion(|n: u32| Ok(n)));
        assert_eq!(*log.lock().unwrap(), vec!["err 11 TaskAbandoned"]);
    }
}
