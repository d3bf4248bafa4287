//! Round and game settlement, and the ranking rule both rely on.
//!
//! ## Ranking
//!
//! Racers rank by cell, furthest first, and within a cell by stack height,
//! topmost first. Rank `n` is found by walking cells from the far end of the
//! track and counting racers until the running total reaches `n`.
//!
//! ## Payout tables
//!
//! Every payout table is consumed in placement order: the first correct
//! wager takes entry 0, the next entry 1 and so on. Wagers past the end of a
//! table get the configured fallback.

use tracing::{info, trace};

use crate::core::{GameState, ParticipantId, RacerId, Track, WagerKind};
use crate::error::{InvariantViolation, RaceError};

/// Racer in `n`-th place (1-based).
///
/// ```
/// use camel_race::core::{RacerId, Track};
/// use camel_race::rules::racer_in_nth_place;
///
/// let track = Track::from_stacks(vec![
///     vec![RacerId(0)],
///     vec![],
///     vec![RacerId(1), RacerId(2)],
/// ]);
/// assert_eq!(racer_in_nth_place(&track, 1, 3), Ok(RacerId(2)));
/// assert_eq!(racer_in_nth_place(&track, 2, 3), Ok(RacerId(1)));
/// assert_eq!(racer_in_nth_place(&track, 3, 3), Ok(RacerId(0)));
/// ```
pub fn racer_in_nth_place(
    track: &Track,
    n: usize,
    racer_count: usize,
) -> Result<RacerId, InvariantViolation> {
    let out_of_range = InvariantViolation::RankOutOfRange { n, racers: racer_count };
    if n < 1 || n > racer_count {
        return Err(out_of_range);
    }

    let mut counted = 0;
    for (_, stack) in track.stacks().rev() {
        let wanted = n - counted;
        if stack.len() >= wanted {
            return Ok(stack[stack.len() - wanted]);
        }
        counted += stack.len();
    }

    // Fewer racers on the track than the configured count.
    Err(out_of_range)
}

/// Walks a payout table in placement order.
struct PayoutCursor<'a> {
    table: &'a [i64],
    next: usize,
    fallback: i64,
}

impl<'a> PayoutCursor<'a> {
    fn new(table: &'a [i64], fallback: i64) -> Self {
        Self { table, next: 0, fallback }
    }

    fn take(&mut self) -> i64 {
        let payout = self.table.get(self.next).copied().unwrap_or(self.fallback);
        self.next += 1;
        payout
    }
}

/// Why a round is being settled.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum RoundEnd {
    /// Every racer has moved.
    AllMoved,
    /// A racer crossed the finish mid-round.
    Finish,
}

/// Placings a round was settled against.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RoundResult {
    pub first: RacerId,
    pub second: RacerId,
}

/// Pay out the round ledger, then empty it and reset the moved flags.
///
/// `end` must hold in `state`: every racer moved, or a racer stands past
/// the finish. Settling resets the moved flags, so a second `AllMoved`
/// settlement of the same round is rejected.
pub(crate) fn settle_round(state: &mut GameState, end: RoundEnd) -> Result<RoundResult, RaceError> {
    if !state.active {
        return Err(InvariantViolation::GameAlreadySettled.into());
    }
    let ended = match end {
        RoundEnd::AllMoved => state.moved.iter().all(|&m| m),
        RoundEnd::Finish => state.track.any_racer_from(state.config().board_size()),
    };
    if !ended {
        return Err(InvariantViolation::RoundNotOver.into());
    }
    let config = state.config_arc();
    let first = racer_in_nth_place(&state.track, 1, config.racer_count())?;
    let second = racer_in_nth_place(&state.track, 2, config.racer_count())?;

    let mut first_payouts = PayoutCursor::new(
        config.first_place_round_payout(),
        config.excess_round_wager_payout(),
    );
    let mut second_payouts = PayoutCursor::new(
        config.second_place_round_payout(),
        config.excess_round_wager_payout(),
    );

    for wager in state.wagers.take_round() {
        let payout = if wager.racer.matches(first) {
            first_payouts.take()
        } else if wager.racer.matches(second) {
            second_payouts.take()
        } else {
            config.third_or_worse_round_payout()
        };
        credit(state, wager.owner, payout);
        trace!(owner = %wager.owner, racer = %wager.racer.reveal(), payout, "round wager paid");
    }

    state.moved.iter_mut().for_each(|m| *m = false);
    state.rounds_settled += 1;
    info!(round = state.rounds_settled, %first, %second, "round settled");

    Ok(RoundResult { first, second })
}

/// Final racer standings of a settled game. The winning participants are
/// on the state.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GameResult {
    pub winning_racer: RacerId,
    pub losing_racer: RacerId,
}

/// Settle game wagers, end the game and pick the winning participants.
///
/// Winners are every participant on the maximum balance; ties stand.
pub(crate) fn settle_game(state: &mut GameState) -> Result<GameResult, RaceError> {
    if !state.active {
        return Err(InvariantViolation::GameAlreadySettled.into());
    }

    let config = state.config_arc();
    let winning_racer = racer_in_nth_place(&state.track, 1, config.racer_count())?;
    let losing_racer =
        racer_in_nth_place(&state.track, config.racer_count(), config.racer_count())?;

    for kind in WagerKind::ALL {
        let target = match kind {
            WagerKind::Winner => winning_racer,
            WagerKind::Loser => losing_racer,
        };
        let mut payouts =
            PayoutCursor::new(config.game_end_payout(), config.excess_game_wager_payout());

        for wager in state.wagers.game(kind).clone() {
            let payout = if wager.racer.matches(target) {
                payouts.take()
            } else {
                config.bad_game_end_bet()
            };
            credit(state, wager.owner, payout);
            trace!(owner = %wager.owner, ?kind, racer = %wager.racer.reveal(), payout, "game wager paid");
        }
    }

    state.active = false;
    state.winners = state.balances.argmax();
    info!(
        winner = %winning_racer,
        loser = %losing_racer,
        participants = ?state.winners,
        "game settled"
    );

    Ok(GameResult {
        winning_racer,
        losing_racer,
    })
}

fn credit(state: &mut GameState, participant: ParticipantId, amount: i64) {
    state.balances[participant] += amount;
}
