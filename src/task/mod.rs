//! Async task adapter: one native completion, one tagged terminal outcome.

pub mod domain;

#[cfg(test)]
pub(crate) mod probe;

pub use domain::{Task, TaskId};
