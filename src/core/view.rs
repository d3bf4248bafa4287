//! The participant's window onto a game.
//!
//! A `GameView` exposes everything a player at the table could see (the
//! track, ledgers, balances, whose turn it is) but not the game's RNG. A
//! `&GameState` would not do: cloning it clones the RNG, and replaying a
//! roll on the clone reveals the next racer and die face.

use im::Vector;

use super::action::ActionRecord;
use super::config::RaceConfig;
use super::participant::{ParticipantId, ParticipantMap};
use super::racer::RacerId;
use super::state::GameState;
use super::track::Track;
use super::wager::WagerBook;

/// Read-only, RNG-free view of a `GameState`.
#[derive(Clone, Copy, Debug)]
pub struct GameView<'a> {
    state: &'a GameState,
}

impl<'a> GameView<'a> {
    #[must_use]
    pub fn new(state: &'a GameState) -> Self {
        Self { state }
    }

    #[must_use]
    pub fn config(&self) -> &'a RaceConfig {
        self.state.config()
    }

    #[must_use]
    pub fn track(&self) -> &'a Track {
        self.state.track()
    }

    #[must_use]
    pub fn wagers(&self) -> &'a WagerBook {
        self.state.wagers()
    }

    #[must_use]
    pub fn balances(&self) -> &'a ParticipantMap<i64> {
        self.state.balances()
    }

    #[must_use]
    pub fn balance(&self, participant: ParticipantId) -> i64 {
        self.state.balance(participant)
    }

    #[must_use]
    pub fn turn(&self) -> u32 {
        self.state.turn()
    }

    #[must_use]
    pub fn rounds_settled(&self) -> u32 {
        self.state.rounds_settled()
    }

    #[must_use]
    pub fn active_participant(&self) -> ParticipantId {
        self.state.active_participant()
    }

    #[must_use]
    pub fn history(&self) -> &'a Vector<ActionRecord> {
        self.state.history()
    }

    #[must_use]
    pub fn has_moved(&self, racer: RacerId) -> bool {
        self.state.has_moved(racer)
    }

    #[must_use]
    pub fn unmoved_racers(&self) -> Vec<RacerId> {
        self.state.unmoved_racers()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_view_mirrors_state() {
        let state = GameState::new(RaceConfig::standard(), 4);
        let view = state.view();

        assert_eq!(view.track(), state.track());
        assert_eq!(view.balances(), state.balances());
        assert_eq!(view.unmoved_racers(), state.unmoved_racers());
        assert_eq!(view.active_participant(), ParticipantId::new(0));
        assert_eq!(view.config().racer_count(), 5);
    }
}
