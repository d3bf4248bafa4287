//! # camel-race
//!
//! Rules engine for a dice-and-betting camel race.
//!
//! Racers advance along a track by die rolls, stacking on each other when
//! they share a cell. Participants take turns choosing between rolling,
//! placing a hazard that nudges whichever racer lands on it, and wagering on
//! the round's leaders or on the race's eventual winner and loser.
//!
//! ## Design Principles
//!
//! 1. **Explicit Configuration**: every quantity (racer count, board size,
//!    payout tables) lives in an immutable `RaceConfig` threaded through
//!    the state. There are no global defaults.
//!
//! 2. **Validate, Then Mutate**: an illegal action is rejected with a typed
//!    error and leaves the state untouched.
//!
//! 3. **Deterministic**: a game is fully determined by its seed and its
//!    participants' choices.
//!
//! ## Modules
//!
//! - `core`: Racer and participant IDs, RNG, configuration, actions, track,
//!   wagers and state
//! - `error`: Rule and invariant violations
//! - `rules`: Legal-move enumeration, action execution, settlement
//! - `participants`: The `Participant` trait and reference strategies
//! - `game`: The single-game driver
//! - `simulation`: Parallel batches of games

pub mod core;
pub mod error;
pub mod rules;
pub mod participants;
pub mod game;
pub mod simulation;

// Re-export commonly used types
pub use crate::core::{
    RacerId, ParticipantId, ParticipantMap,
    GameRng,
    RaceConfig, RaceConfigBuilder, ConfigError,
    Action, ActionKind, ActionRecord, HazardDirection, WagerKind,
    Hazard, Track, Wager, WagerBook,
    GameState, GameView,
};

pub use crate::error::{InvariantViolation, RaceError, RuleViolation};

pub use crate::rules::{
    apply_action, legal_actions, racer_in_nth_place,
    ActionOutcome, GameResult, MoveReport, RoundResult,
};

pub use crate::participants::{AlwaysRoll, Participant, RandomParticipant};

pub use crate::game::{play_game, GameOutcome};

pub use crate::simulation::{run_batch, BatchConfig, BatchSummary};
