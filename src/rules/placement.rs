//! Hazard placement and relocation.
//!
//! Each participant owns at most one hazard. Placing a hazard while one is
//! already on the track moves it: the old cell is vacated in the same step
//! the new one is filled. The owner's current hazard is ignored by the
//! adjacency check, but re-placing it unchanged is rejected.

use tracing::debug;

use crate::core::{GameState, Hazard, HazardDirection, ParticipantId};
use crate::error::{RaceError, RuleViolation};

use super::ensure_playable;

/// Place or move `participant`'s hazard onto `cell`.
///
/// Returns the cell the hazard was moved away from, if it was already on
/// the track.
pub fn execute_hazard(
    state: &mut GameState,
    participant: ParticipantId,
    direction: HazardDirection,
    cell: usize,
) -> Result<Option<usize>, RaceError> {
    ensure_playable(state, participant)?;
    let track = state.track();
    let previous = track.hazard_of(participant);

    if let Some((old_cell, old)) = previous {
        if old_cell == cell && old.direction == direction {
            return Err(RuleViolation::HazardUnchanged { cell, direction }.into());
        }
    }

    let max = state.config().board_size();
    if cell < 1 || cell > max {
        return Err(RuleViolation::HazardOutOfBounds { cell, max }.into());
    }
    if track.has_racer(cell) {
        return Err(RuleViolation::HazardUnderRacer { cell }.into());
    }
    if [cell - 1, cell, cell + 1]
        .into_iter()
        .any(|c| track.foreign_hazard(c, participant))
    {
        return Err(RuleViolation::HazardCrowded { cell }.into());
    }

    let vacated = previous.map(|(old_cell, _)| old_cell);
    if let Some(old_cell) = vacated {
        state.track.clear_hazard(old_cell);
    }
    state.track.set_hazard(cell, Hazard { direction, owner: participant });
    debug!(%participant, %direction, cell, ?vacated, "hazard placed");

    Ok(vacated)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{RaceConfig, RacerId, Track};

    fn p(id: u8) -> ParticipantId {
        ParticipantId::new(id)
    }

    fn state() -> GameState {
        let track = Track::from_stacks(vec![
            vec![RacerId(0), RacerId(1)],
            vec![RacerId(2)],
            vec![],
            vec![RacerId(3), RacerId(4)],
        ]);
        GameState::with_track(RaceConfig::standard(), track, 0).unwrap()
    }

    #[test]
    fn test_place_then_relocate() {
        let mut state = state();

        assert_eq!(execute_hazard(&mut state, p(0), HazardDirection::Forward, 6), Ok(None));
        assert_eq!(execute_hazard(&mut state, p(0), HazardDirection::Backward, 9), Ok(Some(6)));

        assert!(state.track().hazard(6).is_none());
        assert_eq!(
            state.track().hazard(9),
            Some(Hazard { direction: HazardDirection::Backward, owner: p(0) })
        );
        assert_eq!(state.track().hazards().count(), 1);
    }

    #[test]
    fn test_relocate_next_to_own_hazard() {
        let mut state = state();
        execute_hazard(&mut state, p(0), HazardDirection::Forward, 6).unwrap();

        assert_eq!(execute_hazard(&mut state, p(0), HazardDirection::Forward, 7), Ok(Some(6)));
    }

    #[test]
    fn test_flip_own_hazard_in_place() {
        let mut state = state();
        execute_hazard(&mut state, p(0), HazardDirection::Forward, 6).unwrap();

        assert_eq!(execute_hazard(&mut state, p(0), HazardDirection::Backward, 6), Ok(Some(6)));
        assert_eq!(state.track().hazard(6).map(|h| h.direction), Some(HazardDirection::Backward));
    }

    #[test]
    fn test_unchanged_relocation_rejected() {
        let mut state = state();
        execute_hazard(&mut state, p(0), HazardDirection::Forward, 6).unwrap();
        let before = state.track().clone();

        assert_eq!(
            execute_hazard(&mut state, p(0), HazardDirection::Forward, 6),
            Err(RaceError::Rule(RuleViolation::HazardUnchanged {
                cell: 6,
                direction: HazardDirection::Forward,
            }))
        );
        assert_eq!(state.track(), &before);
    }

    #[test]
    fn test_window_bounds() {
        let mut state = state();

        assert_eq!(
            execute_hazard(&mut state, p(0), HazardDirection::Forward, 0),
            Err(RaceError::Rule(RuleViolation::HazardOutOfBounds { cell: 0, max: 16 }))
        );
        assert_eq!(
            execute_hazard(&mut state, p(0), HazardDirection::Forward, 17),
            Err(RaceError::Rule(RuleViolation::HazardOutOfBounds { cell: 17, max: 16 }))
        );
        assert_eq!(execute_hazard(&mut state, p(0), HazardDirection::Forward, 16), Ok(None));
    }

    #[test]
    fn test_rejections_leave_state_untouched() {
        let mut state = state();
        execute_hazard(&mut state, p(1), HazardDirection::Forward, 8).unwrap();
        execute_hazard(&mut state, p(0), HazardDirection::Forward, 12).unwrap();
        let before = state.track().clone();

        assert_eq!(
            execute_hazard(&mut state, p(0), HazardDirection::Forward, 3),
            Err(RaceError::Rule(RuleViolation::HazardUnderRacer { cell: 3 }))
        );
        for cell in [7, 8, 9] {
            assert_eq!(
                execute_hazard(&mut state, p(0), HazardDirection::Backward, cell),
                Err(RaceError::Rule(RuleViolation::HazardCrowded { cell }))
            );
        }
        assert_eq!(state.track(), &before);
    }

    #[test]
    fn test_finished_game_rejects() {
        let mut state = state();
        state.active = false;

        assert_eq!(
            execute_hazard(&mut state, p(0), HazardDirection::Forward, 6),
            Err(RaceError::Rule(RuleViolation::GameFinished))
        );
    }
}
