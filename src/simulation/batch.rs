//! Parallel batch runs.
//!
//! Games are spread over rayon's global pool. Game `i` is seeded with
//! `base_seed + i`, so a batch is reproducible whatever the thread count.

use std::sync::Arc;

use rayon::prelude::*;
use tracing::info;

use crate::core::{ParticipantId, ParticipantMap, RaceConfig};
use crate::error::RaceError;
use crate::game::play_game;
use crate::participants::Participant;

/// Configuration for a batch run.
#[derive(Clone, Debug)]
pub struct BatchConfig {
    /// Rules every game is played under.
    pub race: Arc<RaceConfig>,

    /// Number of games to play.
    pub games: u64,

    /// Seed of game 0; game `i` uses `base_seed + i`.
    pub base_seed: u64,
}

impl Default for BatchConfig {
    fn default() -> Self {
        Self {
            race: Arc::new(RaceConfig::standard()),
            games: 1000,
            base_seed: 0,
        }
    }
}

impl BatchConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_race(mut self, race: impl Into<Arc<RaceConfig>>) -> Self {
        self.race = race.into();
        self
    }

    pub fn with_games(mut self, games: u64) -> Self {
        self.games = games;
        self
    }

    pub fn with_base_seed(mut self, seed: u64) -> Self {
        self.base_seed = seed;
        self
    }
}

/// Aggregated results of a batch.
#[derive(Clone, Debug, PartialEq)]
pub struct BatchSummary {
    pub games: u64,

    /// Games each participant finished on the top balance. Tied winners all
    /// count, so the sum can exceed `games`.
    pub wins: ParticipantMap<u64>,

    /// Sum of final balances per participant.
    pub total_balance: ParticipantMap<i64>,

    pub rounds_settled: u64,
}

impl BatchSummary {
    fn empty(participant_count: usize) -> Self {
        Self {
            games: 0,
            wins: ParticipantMap::with_value(participant_count, 0),
            total_balance: ParticipantMap::with_value(participant_count, 0),
            rounds_settled: 0,
        }
    }

    fn merge(mut self, other: Self) -> Self {
        self.games += other.games;
        self.rounds_settled += other.rounds_settled;
        for (p, wins) in other.wins.iter() {
            self.wins[p] += wins;
        }
        for (p, total) in other.total_balance.iter() {
            self.total_balance[p] += total;
        }
        self
    }

    /// Mean final balance of a participant, 0 for an empty batch.
    #[must_use]
    pub fn mean_balance(&self, participant: ParticipantId) -> f64 {
        if self.games == 0 {
            return 0.0;
        }
        self.total_balance[participant] as f64 / self.games as f64
    }

    /// Fraction of games a participant won or shared.
    #[must_use]
    pub fn win_rate(&self, participant: ParticipantId) -> f64 {
        if self.games == 0 {
            return 0.0;
        }
        self.wins[participant] as f64 / self.games as f64
    }
}

/// Play `config.games` games in parallel and aggregate the results.
///
/// `make_participants` builds the seats for one game from that game's seed.
/// The first game to fail aborts the batch with its error.
pub fn run_batch<F>(config: &BatchConfig, make_participants: F) -> Result<BatchSummary, RaceError>
where
    F: Fn(u64) -> Vec<Box<dyn Participant>> + Sync,
{
    let participant_count = config.race.participant_count();

    let summary = (0..config.games)
        .into_par_iter()
        .map(|i| -> Result<BatchSummary, RaceError> {
            let seed = config.base_seed.wrapping_add(i);
            let mut participants = make_participants(seed);
            let outcome = play_game(Arc::clone(&config.race), &mut participants, seed)?;

            let mut game = BatchSummary::empty(participant_count);
            game.games = 1;
            game.rounds_settled = u64::from(outcome.state.rounds_settled());
            for &winner in &outcome.winners {
                game.wins[winner] += 1;
            }
            for (p, &balance) in outcome.state.balances().iter() {
                game.total_balance[p] = balance;
            }
            Ok(game)
        })
        .try_reduce(|| BatchSummary::empty(participant_count), |a, b| Ok(a.merge(b)))?;

    info!(
        games = summary.games,
        rounds = summary.rounds_settled,
        wins = ?summary.wins,
        "batch finished"
    );
    Ok(summary)
}
