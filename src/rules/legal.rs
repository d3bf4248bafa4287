//! Legal-move enumeration.
//!
//! Read-only. The returned order carries no meaning.

use rustc_hash::FxHashMap;

use crate::core::{Action, GameState, HazardDirection, ParticipantId, RacerCommitment, RacerId, WagerKind};
use crate::error::{InvariantViolation, RaceError};

use super::ensure_playable;

/// Every action `participant` may take right now.
///
/// Fails with `InvariantViolation::NoRacerLeftToMove` if every racer has
/// moved: the round should have been settled by the move that finished it.
pub fn legal_actions(state: &GameState, participant: ParticipantId) -> Result<Vec<Action>, RaceError> {
    ensure_playable(state, participant)?;
    if state.unmoved_racers().is_empty() {
        return Err(InvariantViolation::NoRacerLeftToMove.into());
    }

    let config = state.config();
    let mut actions = vec![Action::RollAndMove];

    let cells = hazard_cells(state, participant);
    for direction in HazardDirection::ALL {
        actions.extend(cells.iter().map(|&cell| Action::PlaceHazard { direction, cell }));
    }

    let mut round_taken: FxHashMap<RacerCommitment, usize> = FxHashMap::default();
    for wager in state.wagers().round() {
        *round_taken.entry(wager.racer).or_default() += 1;
    }
    let slots = config.round_wager_slots();
    actions.extend(
        RacerId::all(config.racer_count())
            .filter(|&racer| {
                round_taken
                    .get(&RacerCommitment::commit(racer))
                    .copied()
                    .unwrap_or(0)
                    < slots
            })
            .map(Action::RoundWager),
    );

    for kind in WagerKind::ALL {
        actions.extend(
            RacerId::all(config.racer_count())
                .filter(|&racer| !state.wagers().holds_game_wager(participant, racer))
                .map(|racer| Action::GameWager { kind, racer }),
        );
    }

    Ok(actions)
}

/// Cells in `1..board_size` where `participant` could put a hazard.
///
/// A candidate must be free of racers and hazards, and neither neighbour may
/// hold another participant's hazard. The participant's own hazard never
/// blocks a neighbour since it moves away in the same action.
#[must_use]
pub fn hazard_cells(state: &GameState, participant: ParticipantId) -> Vec<usize> {
    let track = state.track();
    (1..state.config().board_size())
        .filter(|&cell| {
            !track.has_racer(cell)
                && track.hazard(cell).is_none()
                && !track.foreign_hazard(cell - 1, participant)
                && !track.foreign_hazard(cell + 1, participant)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{RaceConfig, Track};
    use crate::rules::{execute_game_wager, execute_hazard, execute_round_wager};

    fn r(id: u8) -> RacerId {
        RacerId(id)
    }

    fn p(id: u8) -> ParticipantId {
        ParticipantId::new(id)
    }

    /// Racers on cells 0 and 2, board of 8.
    fn small_state() -> GameState {
        let config = RaceConfig::builder().with_board_size(8).build().unwrap();
        let track = Track::from_stacks(vec![
            vec![r(0), r(1)],
            vec![],
            vec![r(2), r(3), r(4)],
        ]);
        GameState::with_track(config, track, 0).unwrap()
    }

    #[test]
    fn test_fresh_state_counts() {
        let state = small_state();
        let actions = legal_actions(&state, p(0)).unwrap();

        // 1 roll + 2 * 6 hazard cells (1, 3..=7) + 5 round + 10 game
        assert_eq!(actions.len(), 1 + 12 + 5 + 10);
        assert!(actions.contains(&Action::RollAndMove));
        assert!(!actions.contains(&Action::PlaceHazard { direction: HazardDirection::Forward, cell: 2 }));
        assert!(!actions.contains(&Action::PlaceHazard { direction: HazardDirection::Forward, cell: 0 }));
        assert!(!actions.contains(&Action::PlaceHazard { direction: HazardDirection::Forward, cell: 8 }));
    }

    #[test]
    fn test_foreign_hazard_blocks_neighbours_own_does_not() {
        let mut state = small_state();
        execute_hazard(&mut state, p(1), HazardDirection::Forward, 4).unwrap();

        assert_eq!(hazard_cells(&state, p(0)), vec![1, 6, 7]);
        // The owner may shift next to its own hazard but not onto it.
        assert_eq!(hazard_cells(&state, p(1)), vec![1, 3, 5, 6, 7]);
    }

    #[test]
    fn test_round_wager_slots_run_out() {
        let mut state = small_state();
        for owner in 0..3 {
            execute_round_wager(&mut state, p(owner), r(2)).unwrap();
        }

        let actions = legal_actions(&state, p(3)).unwrap();
        assert!(!actions.contains(&Action::RoundWager(r(2))));
        assert!(actions.contains(&Action::RoundWager(r(1))));
    }

    #[test]
    fn test_game_wager_blocks_both_kinds() {
        let mut state = small_state();
        execute_game_wager(&mut state, p(0), WagerKind::Loser, r(3)).unwrap();

        let mine = legal_actions(&state, p(0)).unwrap();
        assert!(!mine.contains(&Action::GameWager { kind: WagerKind::Winner, racer: r(3) }));
        assert!(!mine.contains(&Action::GameWager { kind: WagerKind::Loser, racer: r(3) }));

        let theirs = legal_actions(&state, p(1)).unwrap();
        assert!(theirs.contains(&Action::GameWager { kind: WagerKind::Winner, racer: r(3) }));
    }

    #[test]
    fn test_no_racer_left_is_fatal() {
        let mut state = small_state();
        state.moved = vec![true; 5];

        let err = legal_actions(&state, p(0)).unwrap_err();
        assert_eq!(err, RaceError::Invariant(InvariantViolation::NoRacerLeftToMove));
        assert!(err.is_fatal());
    }
}
