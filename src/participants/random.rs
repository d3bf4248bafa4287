//! Uniform random play, grouped by action kind.
//!
//! Choosing uniformly over the flat legal set would make hazard placements
//! dominate, since there are dozens of them against a single roll. Instead
//! the participant first picks one of the kinds on offer, then one action of
//! that kind.

use crate::core::{Action, ActionKind, GameRng, GameView, ParticipantId};

use super::Participant;

/// Picks a random action kind, then a random action of that kind.
#[derive(Clone, Debug)]
pub struct RandomParticipant {
    rng: GameRng,
}

impl RandomParticipant {
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self { rng: GameRng::new(seed) }
    }

    /// Seed from a forked stream of another generator.
    #[must_use]
    pub fn from_rng(rng: &mut GameRng) -> Self {
        Self { rng: rng.fork() }
    }
}

impl Participant for RandomParticipant {
    fn choose_action(&mut self, _me: ParticipantId, _view: &GameView<'_>, legal: &[Action]) -> Action {
        let mut kinds: Vec<ActionKind> = legal.iter().map(Action::kind).collect();
        kinds.sort_unstable();
        kinds.dedup();

        let Some(&kind) = self.rng.choose(&kinds) else {
            return Action::RollAndMove;
        };
        let of_kind: Vec<Action> = legal.iter().copied().filter(|a| a.kind() == kind).collect();
        self.rng.choose(&of_kind).copied().unwrap_or(Action::RollAndMove)
    }

    fn name(&self) -> &str {
        "random"
    }
}
