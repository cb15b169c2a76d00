//! Recording in-memory stand-in for the native service, used by tests.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::thread;
use std::time::{Duration, SystemTime};

use crate::common::error::NativeError;
use crate::platform::{FeatureLevel, PlatformFamily, PlatformVersion};

use super::domain::{
    Completion, EntriesPage, GameService, LeaderboardRef, LeaderboardType, LegacyQuery,
    LegacyScore, NativeLeaderboard, NativeRange, Player, PlayerEntriesPage, PlayerScope,
    RasterImage, TimeScope,
};

/// Every call that reached the fake, in order.
#[derive(Clone, Debug, PartialEq)]
pub enum NativeCall {
    LoadLeaderboards(Option<Vec<String>>),
    LoadAllLeaderboards,
    ReportScores(Vec<LegacyScore>),
    LoadPreviousOccurrence(String),
    LoadEntries {
        leaderboard: String,
        player_scope: PlayerScope,
        time_scope: TimeScope,
        range: NativeRange,
    },
    LoadEntriesForPlayers {
        leaderboard: String,
        players: Vec<String>,
        time_scope: TimeScope,
    },
    SetLegacyQuery {
        leaderboard: String,
        query: LegacyQuery,
    },
    LoadScores(String),
    LoadImage(String),
    SubmitScore {
        leaderboard: String,
        score: i64,
        context: i64,
        player: String,
    },
}

#[derive(Clone, Debug, Default)]
pub struct CallLog(Arc<Mutex<Vec<NativeCall>>>);

impl CallLog {
    fn lock(&self) -> MutexGuard<'_, Vec<NativeCall>> {
        self.0.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn record(&self, call: NativeCall) {
        self.lock().push(call);
    }

    pub fn calls(&self) -> Vec<NativeCall> {
        self.lock().clone()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }
}

/// How the fake hands results back.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Delivery {
    Inline,
    Thread,
    /// Drop the completion without calling it.
    Drop,
}

fn deliver<T: Send + 'static>(delivery: Delivery, done: Completion<T>, result: Result<T, NativeError>) {
    match delivery {
        Delivery::Inline => done(result),
        Delivery::Thread => {
            thread::spawn(move || done(result));
        }
        Delivery::Drop => drop(done),
    }
}

pub fn ios(major: u16, minor: u16) -> PlatformVersion {
    PlatformVersion::new(PlatformFamily::Ios, FeatureLevel::new(major, minor))
}

pub fn tvos(major: u16, minor: u16) -> PlatformVersion {
    PlatformVersion::new(PlatformFamily::TvOs, FeatureLevel::new(major, minor))
}

pub fn player(id: &str) -> Player {
    Player {
        game_player_id: id.to_string(),
        team_player_id: format!("T:{id}"),
        alias: format!("{id}-alias"),
        display_name: format!("{id} display"),
    }
}

pub fn entry(id: &str, rank: i64, score: i64) -> crate::native::Entry {
    crate::native::Entry {
        player: player(id),
        rank,
        score,
        context: 0,
        formatted_score: Some(format!("{score} pts")),
        date: None,
    }
}

#[derive(Debug)]
pub struct FakeLeaderboard {
    pub identifier: Option<String>,
    pub base_id: String,
    pub title: Option<String>,
    pub group: Option<String>,
    pub kind: LeaderboardType,
    pub start: Option<SystemTime>,
    pub next_start: Option<SystemTime>,
    pub duration: Duration,
    pub page: EntriesPage,
    pub player_page: PlayerEntriesPage,
    pub legacy_scores: Vec<LegacyScore>,
    pub image: Option<RasterImage>,
    pub previous: Option<LeaderboardRef>,
    pub failure: Option<NativeError>,
    pub delivery: Delivery,
    pub legacy_query: Mutex<Option<LegacyQuery>>,
    log: CallLog,
}

impl FakeLeaderboard {
    pub fn new(id: &str, log: &CallLog) -> Self {
        Self {
            identifier: Some(id.to_string()),
            base_id: format!("{id}.base"),
            title: Some(format!("{id} title")),
            group: None,
            kind: LeaderboardType::Classic,
            start: None,
            next_start: None,
            duration: Duration::ZERO,
            page: EntriesPage::default(),
            player_page: PlayerEntriesPage::default(),
            legacy_scores: Vec::new(),
            image: None,
            previous: None,
            failure: None,
            delivery: Delivery::Inline,
            legacy_query: Mutex::new(None),
            log: log.clone(),
        }
    }

    pub fn shared(self) -> LeaderboardRef {
        Arc::new(self)
    }

    fn name(&self) -> String {
        self.identifier.clone().unwrap_or_default()
    }

    fn respond<T: Send + 'static>(&self, done: Completion<T>, value: T) {
        let result = match &self.failure {
            Some(err) => Err(err.clone()),
            None => Ok(value),
        };
        deliver(self.delivery, done, result);
    }
}

impl NativeLeaderboard for FakeLeaderboard {
    fn identifier(&self) -> Option<String> {
        self.identifier.clone()
    }

    fn title(&self) -> Option<String> {
        self.title.clone()
    }

    fn group_identifier(&self) -> Option<String> {
        self.group.clone()
    }

    fn load_image(&self, done: Completion<Option<RasterImage>>) {
        self.log.record(NativeCall::LoadImage(self.name()));
        self.respond(done, self.image.clone());
    }

    fn base_leaderboard_id(&self) -> String {
        self.base_id.clone()
    }

    fn leaderboard_type(&self) -> LeaderboardType {
        self.kind
    }

    fn start_date(&self) -> Option<SystemTime> {
        self.start
    }

    fn next_start_date(&self) -> Option<SystemTime> {
        self.next_start
    }

    fn duration(&self) -> Duration {
        self.duration
    }

    fn load_previous_occurrence(&self, done: Completion<Option<LeaderboardRef>>) {
        self.log.record(NativeCall::LoadPreviousOccurrence(self.name()));
        self.respond(done, self.previous.clone());
    }

    fn load_entries(
        &self,
        player_scope: PlayerScope,
        time_scope: TimeScope,
        range: NativeRange,
        done: Completion<EntriesPage>,
    ) {
        self.log.record(NativeCall::LoadEntries {
            leaderboard: self.name(),
            player_scope,
            time_scope,
            range,
        });
        self.respond(done, self.page.clone());
    }

    fn load_entries_for_players(
        &self,
        players: &[Player],
        time_scope: TimeScope,
        done: Completion<PlayerEntriesPage>,
    ) {
        self.log.record(NativeCall::LoadEntriesForPlayers {
            leaderboard: self.name(),
            players: players.iter().map(|p| p.game_player_id.clone()).collect(),
            time_scope,
        });
        self.respond(done, self.player_page.clone());
    }

    fn submit_score(&self, score: i64, context: i64, player: &Player, done: Completion<()>) {
        self.log.record(NativeCall::SubmitScore {
            leaderboard: self.name(),
            score,
            context,
            player: player.game_player_id.clone(),
        });
        self.respond(done, ());
    }

    fn set_legacy_query(&self, query: LegacyQuery) {
        self.log.record(NativeCall::SetLegacyQuery {
            leaderboard: self.name(),
            query,
        });
        *self.legacy_query.lock().unwrap_or_else(PoisonError::into_inner) = Some(query);
    }

    fn load_scores(&self, done: Completion<Vec<LegacyScore>>) {
        self.log.record(NativeCall::LoadScores(self.name()));
        self.respond(done, self.legacy_scores.clone());
    }
}

pub struct FakeService {
    pub platform: PlatformVersion,
    pub local: Option<Player>,
    pub leaderboards: Vec<LeaderboardRef>,
    pub failure: Option<NativeError>,
    pub delivery: Delivery,
    log: CallLog,
}

impl FakeService {
    pub fn new(platform: PlatformVersion, log: &CallLog) -> Self {
        Self {
            platform,
            local: Some(player("local")),
            leaderboards: Vec::new(),
            failure: None,
            delivery: Delivery::Inline,
            log: log.clone(),
        }
    }

    fn respond<T: Send + 'static>(&self, done: Completion<T>, value: T) {
        let result = match &self.failure {
            Some(err) => Err(err.clone()),
            None => Ok(value),
        };
        deliver(self.delivery, done, result);
    }
}

impl GameService for FakeService {
    fn platform(&self) -> PlatformVersion {
        self.platform
    }

    fn local_player(&self) -> Option<Player> {
        self.local.clone()
    }

    fn load_leaderboards(&self, ids: Option<&[String]>, done: Completion<Vec<LeaderboardRef>>) {
        self.log.record(NativeCall::LoadLeaderboards(ids.map(<[String]>::to_vec)));
        let selected = self
            .leaderboards
            .iter()
            .filter(|lb| match ids {
                Some(ids) => ids.iter().any(|id| Some(id) == lb.identifier().as_ref()),
                None => true,
            })
            .cloned()
            .collect();
        self.respond(done, selected);
    }

    fn load_all_leaderboards(&self, done: Completion<Vec<LeaderboardRef>>) {
        self.log.record(NativeCall::LoadAllLeaderboards);
        self.respond(done, self.leaderboards.clone());
    }

    fn report_scores(&self, scores: Vec<LegacyScore>, done: Completion<()>) {
        self.log.record(NativeCall::ReportScores(scores));
        self.respond(done, ());
    }
}
