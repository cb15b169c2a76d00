//! Leaderboard operations behind the version-compatibility adapter.
//!
//! `service` holds the per-operation tier tables, `normalize` and `legacy`
//! shape what the two native API generations return.

pub mod domain;
pub mod image;
pub mod legacy;
pub mod normalize;
pub mod service;

pub use domain::{
    EntriesQuery, EntriesRequest, EntriesResult, PlayerEntriesResult, RankRange, ScoreSubmission,
};
