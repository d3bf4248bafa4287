//! Game state: the single mutable aggregate of a race.
//!
//! ## Contents
//!
//! - Track (racer stacks and hazards)
//! - Wager ledgers
//! - Per-racer "moved this round" flags
//! - Participant balances
//! - Termination flag and winner set
//! - Turn/round counters and the action history
//! - The game's RNG
//!
//! Only the rules engine mutates a `GameState`. The state carries the
//! game's RNG, so a `&GameState` lets its holder predict upcoming rolls;
//! participants are handed a `GameView` instead.
//!
//! Cloning is cheap enough to snapshot every turn: the configuration is
//! shared through `Arc` and the ledgers and history are persistent `im`
//! vectors.

use std::sync::Arc;

use im::Vector;

use super::action::ActionRecord;
use super::config::{RaceConfig, MAX_ROLL, MIN_ROLL};
use super::participant::{ParticipantId, ParticipantMap};
use super::racer::RacerId;
use super::rng::GameRng;
use super::track::Track;
use super::view::GameView;
use super::wager::WagerBook;
use crate::error::InvariantViolation;

/// Complete state of one game.
#[derive(Clone, Debug)]
pub struct GameState {
    config: Arc<RaceConfig>,

    pub(crate) track: Track,

    pub(crate) wagers: WagerBook,

    /// Indexed by racer; true once the racer moved this round.
    pub(crate) moved: Vec<bool>,

    pub(crate) balances: ParticipantMap<i64>,

    pub(crate) active: bool,

    /// Participants tied on the highest final balance. Empty while active.
    pub(crate) winners: Vec<ParticipantId>,

    /// Executed actions so far.
    pub(crate) turn: u32,

    pub(crate) rounds_settled: u32,

    pub(crate) history: Vector<ActionRecord>,

    pub(crate) rng: GameRng,
}

impl GameState {
    /// Start a game, scattering the racers near the start line.
    ///
    /// Racers are placed one at a time in random order, each on the cell
    /// given by a die roll minus one. Racers landing on the same cell stack
    /// in placement order.
    #[must_use]
    pub fn new(config: impl Into<Arc<RaceConfig>>, seed: u64) -> Self {
        let config = config.into();
        let mut rng = GameRng::new(seed);
        let mut track = Track::new(config.track_len());

        let mut order: Vec<RacerId> = RacerId::all(config.racer_count()).collect();
        rng.shuffle(&mut order);
        for racer in order {
            let cell = usize::from(rng.roll(MIN_ROLL..=MAX_ROLL) - MIN_ROLL);
            track.push(cell, racer);
        }

        Self::assemble(config, track, rng)
    }

    /// Start a game from an explicit track layout.
    ///
    /// Shorter tracks are padded to the configured length. Every racer must
    /// appear exactly once and no racer may start at or past the finish.
    /// Hazards already on the layout must obey the placement rules: none
    /// under a racer, none adjacent, at most one per seated owner.
    pub fn with_track(
        config: impl Into<Arc<RaceConfig>>,
        mut track: Track,
        seed: u64,
    ) -> Result<Self, InvariantViolation> {
        let config = config.into();
        if track.hazard_row_len() != track.len() {
            return Err(InvariantViolation::HazardRowLength {
                cells: track.len(),
                hazards: track.hazard_row_len(),
            });
        }
        if track.len() > config.track_len() {
            return Err(InvariantViolation::TrackLength {
                got: track.len(),
                len: config.track_len(),
            });
        }
        track.pad_to(config.track_len());

        let state = Self::assemble(config, track, GameRng::new(seed));
        state.check_racers()?;
        let finish = state.config.board_size();
        if let Some((cell, stack)) = state
            .track
            .stacks()
            .skip(finish)
            .find(|(_, stack)| !stack.is_empty())
        {
            return Err(InvariantViolation::RacerPastFinish { racer: stack[0], cell });
        }
        state.check_hazards()?;
        Ok(state)
    }

    fn assemble(config: Arc<RaceConfig>, track: Track, rng: GameRng) -> Self {
        Self {
            track,
            wagers: WagerBook::new(),
            moved: vec![false; config.racer_count()],
            balances: ParticipantMap::with_value(
                config.participant_count(),
                config.starting_balance(),
            ),
            active: true,
            winners: Vec::new(),
            turn: 0,
            rounds_settled: 0,
            history: Vector::new(),
            rng,
            config,
        }
    }

    // === Read access ===

    #[must_use]
    pub fn config(&self) -> &RaceConfig {
        &self.config
    }

    /// Shared handle to the configuration.
    #[must_use]
    pub fn config_arc(&self) -> Arc<RaceConfig> {
        Arc::clone(&self.config)
    }

    #[must_use]
    pub fn track(&self) -> &Track {
        &self.track
    }

    #[must_use]
    pub fn wagers(&self) -> &WagerBook {
        &self.wagers
    }

    #[must_use]
    pub fn balances(&self) -> &ParticipantMap<i64> {
        &self.balances
    }

    /// Balance of a participant. Panics on a seat outside the game.
    #[must_use]
    pub fn balance(&self, participant: ParticipantId) -> i64 {
        self.balances[participant]
    }

    /// False once a racer crossed the finish and the game was settled.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Winning participants. Empty while the game is active.
    #[must_use]
    pub fn winners(&self) -> &[ParticipantId] {
        &self.winners
    }

    /// Number of actions executed so far.
    #[must_use]
    pub fn turn(&self) -> u32 {
        self.turn
    }

    /// Number of completed round settlements.
    #[must_use]
    pub fn rounds_settled(&self) -> u32 {
        self.rounds_settled
    }

    /// Whose turn it is: seats act in rotation.
    #[must_use]
    pub fn active_participant(&self) -> ParticipantId {
        ParticipantId::new((self.turn as usize % self.config.participant_count()) as u8)
    }

    #[must_use]
    pub fn history(&self) -> &Vector<ActionRecord> {
        &self.history
    }

    /// Has the racer already moved this round?
    #[must_use]
    pub fn has_moved(&self, racer: RacerId) -> bool {
        self.moved.get(racer.index()).copied().unwrap_or(false)
    }

    /// Racers still to move this round, in id order.
    #[must_use]
    pub fn unmoved_racers(&self) -> Vec<RacerId> {
        RacerId::all(self.config.racer_count())
            .filter(|&r| !self.moved[r.index()])
            .collect()
    }

    /// Copy of the state, RNG included. Not for participants: replaying
    /// moves on it reveals upcoming rolls.
    #[must_use]
    pub fn snapshot(&self) -> Self {
        self.clone()
    }

    /// What a participant may see: everything but the RNG.
    #[must_use]
    pub fn view(&self) -> GameView<'_> {
        GameView::new(self)
    }

    // === Invariants ===

    /// Check that every racer appears on the track exactly once and nothing
    /// else does.
    pub fn check_racers(&self) -> Result<(), InvariantViolation> {
        let racer_count = self.config.racer_count();
        let mut seen = vec![0usize; racer_count];
        for (_, stack) in self.track.stacks() {
            for &racer in stack {
                let slot = seen
                    .get_mut(racer.index())
                    .ok_or(InvariantViolation::StrayRacer(racer))?;
                *slot += 1;
            }
        }
        for (racer, count) in RacerId::all(racer_count).zip(seen) {
            match count {
                1 => {}
                0 => return Err(InvariantViolation::RacerMissing(racer)),
                count => return Err(InvariantViolation::RacerDuplicated { racer, count }),
            }
        }
        Ok(())
    }

    /// Check that hazards sit on empty cells, never side by side, and that
    /// each belongs to a seated participant owning no other.
    pub fn check_hazards(&self) -> Result<(), InvariantViolation> {
        let mut owned = vec![false; self.config.participant_count()];
        let mut previous: Option<usize> = None;
        for (cell, hazard) in self.track.hazards() {
            if self.track.has_racer(cell) {
                return Err(InvariantViolation::HazardUnderRacer { cell });
            }
            if let Some(prev) = previous.filter(|&prev| prev + 1 == cell) {
                return Err(InvariantViolation::HazardsAdjacent { cell: prev, next: cell });
            }
            let slot = owned
                .get_mut(hazard.owner.index())
                .ok_or(InvariantViolation::HazardOwnerUnknown { cell, owner: hazard.owner })?;
            if *slot {
                return Err(InvariantViolation::HazardOwnedTwice(hazard.owner));
            }
            *slot = true;
            previous = Some(cell);
        }
        Ok(())
    }
}
