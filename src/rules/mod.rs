//! Rules engine: what may be done, and what doing it does.
//!
//! - `legal`: the legal-move enumerator (read-only)
//! - `movement`, `placement`, `betting`: the move executor, one module per
//!   action family
//! - `settlement`: ranking plus round and game payouts. Settlement is only
//!   ever triggered by the move that ends a round or the game.
//!
//! Every executor validates the whole action before touching the state, so
//! a rejected action leaves the state exactly as it was. `apply_action` is
//! the single entry point drivers use; it also records the action in the
//! game's history.

pub mod betting;
pub mod legal;
pub mod movement;
pub mod placement;
pub mod settlement;

pub use betting::{execute_game_wager, execute_round_wager};
pub use legal::{hazard_cells, legal_actions};
pub use movement::{execute_move, resolve_move, MoveReport};
pub use placement::execute_hazard;
pub use settlement::{racer_in_nth_place, GameResult, RoundResult};

use crate::core::{Action, ActionRecord, GameState, ParticipantId, RacerId};
use crate::error::{RaceError, RuleViolation};

/// What an applied action did.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ActionOutcome {
    Moved(MoveReport),
    HazardPlaced {
        cell: usize,
        /// Cell the participant's hazard was moved away from.
        vacated: Option<usize>,
    },
    WagerPlaced,
}

impl ActionOutcome {
    /// True if this action ended the game.
    #[must_use]
    pub fn ended_game(&self) -> bool {
        matches!(self, ActionOutcome::Moved(report) if report.game_over())
    }
}

/// Execute `action` for `participant` and record it in the history.
///
/// Rejected actions are not recorded and do not advance the turn.
pub fn apply_action(
    state: &mut GameState,
    participant: ParticipantId,
    action: Action,
) -> Result<ActionOutcome, RaceError> {
    let outcome = match action {
        Action::RollAndMove => ActionOutcome::Moved(execute_move(state, participant)?),
        Action::PlaceHazard { direction, cell } => ActionOutcome::HazardPlaced {
            cell,
            vacated: execute_hazard(state, participant, direction, cell)?,
        },
        Action::RoundWager(racer) => {
            execute_round_wager(state, participant, racer)?;
            ActionOutcome::WagerPlaced
        }
        Action::GameWager { kind, racer } => {
            execute_game_wager(state, participant, kind, racer)?;
            ActionOutcome::WagerPlaced
        }
    };

    state.history.push_back(ActionRecord {
        participant,
        action,
        turn: state.turn,
    });
    state.turn += 1;

    Ok(outcome)
}

pub(crate) fn ensure_playable(state: &GameState, participant: ParticipantId) -> Result<(), RuleViolation> {
    if !state.is_active() {
        return Err(RuleViolation::GameFinished);
    }
    if participant.index() >= state.config().participant_count() {
        return Err(RuleViolation::UnknownParticipant(participant));
    }
    Ok(())
}

pub(crate) fn ensure_racer(state: &GameState, racer: RacerId) -> Result<(), RuleViolation> {
    if racer.is_valid(state.config().racer_count()) {
        Ok(())
    } else {
        Err(RuleViolation::UnknownRacer(racer))
    }
}
