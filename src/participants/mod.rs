//! Participants: whoever picks the actions.
//!
//! A participant sees a `GameView` of the state (never the RNG) and the
//! legal set the engine just enumerated, and returns one action. The engine
//! re-checks the choice when it executes it, so a participant returning
//! anything outside `legal` only gets its game aborted.

pub mod random;

pub use random::RandomParticipant;

use crate::core::{Action, GameView, ParticipantId};

/// Strategy for one seat.
pub trait Participant {
    /// Pick one of `legal` for seat `me`.
    fn choose_action(&mut self, me: ParticipantId, view: &GameView<'_>, legal: &[Action]) -> Action;

    /// Short name for logs.
    fn name(&self) -> &str {
        "participant"
    }
}

/// Rolls every turn and never wagers.
#[derive(Clone, Copy, Debug, Default)]
pub struct AlwaysRoll;

impl Participant for AlwaysRoll {
    fn choose_action(&mut self, _me: ParticipantId, _view: &GameView<'_>, _legal: &[Action]) -> Action {
        Action::RollAndMove
    }

    fn name(&self) -> &str {
        "always-roll"
    }
}
