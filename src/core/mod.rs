//! Core game types: racers, participants, RNG, configuration, actions,
//! track, wagers, state and the participant view.
//!
//! Nothing here decides legality; that lives in `rules`.

pub mod racer;
pub mod participant;
pub mod rng;
pub mod config;
pub mod action;
pub mod track;
pub mod wager;
pub mod state;
pub mod view;

pub use racer::RacerId;
pub use participant::{ParticipantId, ParticipantMap};
pub use rng::GameRng;
pub use config::{ConfigError, RaceConfig, RaceConfigBuilder, MAX_ROLL, MIN_BOARD_SIZE, MIN_ROLL};
pub use action::{Action, ActionKind, ActionRecord, HazardDirection, InvalidDirection, WagerKind};
pub use track::{Hazard, Stack, Track};
pub use wager::{RacerCommitment, Wager, WagerBook};
pub use state::GameState;
pub use view::GameView;
