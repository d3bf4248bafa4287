//! Racer movement.
//!
//! A roll moves one racer chosen at random among those that have not moved
//! this round, together with every racer stacked on top of it. Landing on a
//! hazard pays the hazard's owner one coin and shifts the destination by the
//! hazard's direction; a backward hazard also flips the moving stack and
//! slides it beneath whatever already stands on the destination.
//!
//! The move that exhausts the round settles it. The move that carries a
//! racer over the finish settles the round (unless that same move already
//! did) and then the game.

use tracing::debug;

use crate::core::{GameState, Hazard, HazardDirection, ParticipantId, RacerId, MAX_ROLL, MIN_ROLL};
use crate::error::{InvariantViolation, RaceError, RuleViolation};

use super::settlement::{settle_game, settle_round, GameResult, RoundEnd, RoundResult};
use super::{ensure_playable, ensure_racer};

/// What a single roll did.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MoveReport {
    pub racer: RacerId,
    pub roll: u8,
    pub from: usize,
    pub to: usize,
    /// Hazard the racer landed on, if any.
    pub hazard: Option<Hazard>,
    /// Placings, if this move ended the round.
    pub round: Option<RoundResult>,
    /// Final standings, if this move ended the game.
    pub game: Option<GameResult>,
}

impl MoveReport {
    #[must_use]
    pub fn round_settled(&self) -> bool {
        self.round.is_some()
    }

    #[must_use]
    pub fn game_over(&self) -> bool {
        self.game.is_some()
    }
}

/// Roll for `participant`: pick an unmoved racer and a die face, then move.
pub fn execute_move(state: &mut GameState, participant: ParticipantId) -> Result<MoveReport, RaceError> {
    ensure_playable(state, participant)?;
    let unmoved = state.unmoved_racers();
    let racer = *state
        .rng
        .choose(&unmoved)
        .ok_or(InvariantViolation::NoRacerLeftToMove)?;
    let roll = state.rng.roll(MIN_ROLL..=MAX_ROLL);
    resolve_move(state, participant, racer, roll)
}

/// Move `racer` by `roll` on behalf of `participant`.
///
/// This is the deterministic half of `execute_move`; the racer and roll are
/// supplied by the caller.
pub fn resolve_move(
    state: &mut GameState,
    participant: ParticipantId,
    racer: RacerId,
    roll: u8,
) -> Result<MoveReport, RaceError> {
    ensure_playable(state, participant)?;
    ensure_racer(state, racer)?;
    if !(MIN_ROLL..=MAX_ROLL).contains(&roll) {
        return Err(RuleViolation::RollOutOfRange { roll, min: MIN_ROLL, max: MAX_ROLL }.into());
    }
    if state.has_moved(racer) {
        return Err(InvariantViolation::RacerAlreadyMoved(racer).into());
    }
    let (from, depth) = state
        .track
        .locate(racer)
        .ok_or(InvariantViolation::RacerMissing(racer))?;

    let landing = from + usize::from(roll);
    let hazard = state.track.hazard(landing);
    let to = match hazard.map(|h| h.direction) {
        Some(HazardDirection::Forward) => landing + 1,
        Some(HazardDirection::Backward) => landing - 1,
        None => landing,
    };
    if to >= state.track.len() {
        return Err(InvariantViolation::TrackOverflow { cell: to, len: state.track.len() }.into());
    }

    state.moved[racer.index()] = true;
    if let Some(h) = hazard {
        state.balances[h.owner] += 1;
    }

    let mut moving = state.track.lift(from, depth);
    if hazard.is_some_and(|h| h.direction == HazardDirection::Backward) {
        moving.reverse();
        state.track.slide_under(to, moving);
    } else {
        state.track.drop_on_top(to, moving);
    }

    state.balances[participant] += 1;
    debug!(%participant, %racer, roll, from, to, hazard = ?hazard, "racer moved");

    let mut round = None;
    if state.moved.iter().all(|&m| m) {
        round = Some(settle_round(state, RoundEnd::AllMoved)?);
    }

    let mut game = None;
    if state.track.any_racer_from(state.config().board_size()) {
        if round.is_none() {
            round = Some(settle_round(state, RoundEnd::Finish)?);
        }
        game = Some(settle_game(state)?);
    }

    Ok(MoveReport {
        racer,
        roll,
        from,
        to,
        hazard,
        round,
        game,
    })
}
