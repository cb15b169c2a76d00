//! Channel-backed task used by tests to observe terminal outcomes.

use std::sync::mpsc::{self, Receiver, TryRecvError};
use std::time::Duration;

use crate::common::error::{BridgeError, BridgeResult};

use super::domain::{Task, TaskId};

pub struct Probe<T> {
    rx: Receiver<(TaskId, BridgeResult<T>)>,
}

pub fn probe<T: Send + 'static>(id: TaskId) -> (Task<T>, Probe<T>) {
    let (tx, rx) = mpsc::channel();
    let err_tx = tx.clone();
    let task = Task::new(
        id,
        move |id, value| {
            let _ = tx.send((id, Ok(value)));
        },
        move |id, err| {
            let _ = err_tx.send((id, Err(err)));
        },
    );
    (task, Probe { rx })
}

impl<T> Probe<T> {
    /// Wait for the single outcome and check nothing else follows.
    pub fn outcome(&self, expected_id: TaskId) -> BridgeResult<T> {
        let (id, result) = self
            .rx
            .recv_timeout(Duration::from_secs(5))
            .expect("task never settled");
        assert_eq!(id, expected_id, "outcome tagged with the wrong id");
        match self.rx.try_recv() {
            Err(TryRecvError::Empty) | Err(TryRecvError::Disconnected) => {}
            Ok(_) => panic!("task settled twice"),
        }
        result
    }

    pub fn success(&self, expected_id: TaskId) -> T {
        match self.outcome(expected_id) {
            Ok(value) => value,
            Err(err) => panic!("expected success, got {err:?}"),
        }
    }

    pub fn error(&self, expected_id: TaskId) -> BridgeError {
        match self.outcome(expected_id) {
            Ok(_) => panic!("expected an error outcome"),
            Err(err) => err,
        }
    }
}
