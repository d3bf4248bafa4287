//! Round and game wagers.

use tracing::debug;

use crate::core::{GameState, ParticipantId, RacerId, Wager, WagerKind};
use crate::error::{RaceError, RuleViolation};

use super::{ensure_playable, ensure_racer};

/// Back `racer` to place first or second this round.
///
/// Each racer has as many round wager slots as the first-place payout table
/// has entries.
pub fn execute_round_wager(
    state: &mut GameState,
    participant: ParticipantId,
    racer: RacerId,
) -> Result<(), RaceError> {
    ensure_playable(state, participant)?;
    ensure_racer(state, racer)?;

    let max = state.config().round_wager_slots();
    if state.wagers().round_count(racer) >= max {
        return Err(RuleViolation::RoundWagersExhausted { racer, max }.into());
    }

    state.wagers.push_round(Wager::new(participant, racer));
    debug!(%participant, %racer, "round wager placed");
    Ok(())
}

/// Back `racer` to win or lose the whole race.
///
/// A participant holds at most one game wager per racer, counting both kinds.
pub fn execute_game_wager(
    state: &mut GameState,
    participant: ParticipantId,
    kind: WagerKind,
    racer: RacerId,
) -> Result<(), RaceError> {
    ensure_playable(state, participant)?;
    ensure_racer(state, racer)?;

    if state.wagers().holds_game_wager(participant, racer) {
        return Err(RuleViolation::DuplicateGameWager { owner: participant, racer }.into());
    }

    state.wagers.push_game(kind, Wager::new(participant, racer));
    debug!(%participant, ?kind, %racer, "game wager placed");
    Ok(())
}
