//! The turn loop.
//!
//! Seats act in rotation. Each turn the driver enumerates the active seat's
//! legal actions, asks its participant for one, and executes it. The loop
//! ends when a move carries a racer over the finish; every round strictly
//! shrinks the set of racers still to move, so a game always ends.
//!
//! A rejected action aborts the game: the driver does not re-ask.

use std::sync::Arc;

use tracing::{debug, warn};

use crate::core::{GameState, ParticipantId, RaceConfig};
use crate::error::{InvariantViolation, RaceError};
use crate::participants::Participant;
use crate::rules::{apply_action, legal_actions};

/// Result of a finished game.
#[derive(Clone, Debug)]
pub struct GameOutcome {
    /// Participants tied on the highest final balance.
    pub winners: Vec<ParticipantId>,
    /// State after game settlement.
    pub state: GameState,
}

impl GameOutcome {
    /// Did `participant` finish on the highest balance?
    #[must_use]
    pub fn is_winner(&self, participant: ParticipantId) -> bool {
        self.winners.contains(&participant)
    }
}

/// Play a fresh game seeded with `seed`, one participant per seat.
pub fn play_game(
    config: impl Into<Arc<RaceConfig>>,
    participants: &mut [Box<dyn Participant>],
    seed: u64,
) -> Result<GameOutcome, RaceError> {
    play_from(GameState::new(config, seed), participants)
}

/// Play an already-built state to the end.
pub fn play_from(
    mut state: GameState,
    participants: &mut [Box<dyn Participant>],
) -> Result<GameOutcome, RaceError> {
    let expected = state.config().participant_count();
    if participants.len() != expected {
        return Err(InvariantViolation::SeatCount { got: participants.len(), expected }.into());
    }

    while state.is_active() {
        let seat = state.active_participant();
        let participant = &mut participants[seat.index()];
        let legal = legal_actions(&state, seat)?;
        let action = participant.choose_action(seat, &state.view(), &legal);
        debug!(%seat, participant = participant.name(), %action, turn = state.turn(), "action chosen");

        if let Err(err) = apply_action(&mut state, seat, action) {
            warn!(%seat, %action, error = %err, "aborting game on rejected action");
            return Err(err);
        }
    }

    Ok(GameOutcome {
        winners: state.winners().to_vec(),
        state,
    })
}
