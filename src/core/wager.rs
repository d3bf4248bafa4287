//! Wagers and the three wager ledgers.
//!
//! A wager commits to a racer through `RacerCommitment`. The commitment can
//! be compared against a candidate racer with `matches` but only settlement
//! reads the racer back out with `reveal`, so ledger bookkeeping never
//! depends on the raw id.
//!
//! Ledgers are `im::Vector`s: snapshots of the state handed to participants
//! share structure with the live ledgers instead of copying them.

use im::Vector;
use serde::{Deserialize, Serialize};

use super::action::WagerKind;
use super::participant::ParticipantId;
use super::racer::RacerId;

/// Opaque commitment to a racer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RacerCommitment(RacerId);

impl RacerCommitment {
    /// Commit to a racer.
    #[must_use]
    pub const fn commit(racer: RacerId) -> Self {
        Self(racer)
    }

    /// Does this commitment name `racer`?
    #[must_use]
    pub fn matches(&self, racer: RacerId) -> bool {
        self.0 == racer
    }

    /// Open the commitment.
    #[must_use]
    pub const fn reveal(&self) -> RacerId {
        self.0
    }
}

/// A single wager held in a ledger.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Wager {
    pub owner: ParticipantId,
    pub racer: RacerCommitment,
}

impl Wager {
    #[must_use]
    pub const fn new(owner: ParticipantId, racer: RacerId) -> Self {
        Self {
            owner,
            racer: RacerCommitment::commit(racer),
        }
    }
}

/// Round, game-winner and game-loser ledgers, each in placement order.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WagerBook {
    round: Vector<Wager>,
    game_winner: Vector<Wager>,
    game_loser: Vector<Wager>,
}

impl WagerBook {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Round wagers placed this round, oldest first.
    #[must_use]
    pub fn round(&self) -> &Vector<Wager> {
        &self.round
    }

    /// Game wagers of one kind, oldest first.
    #[must_use]
    pub fn game(&self, kind: WagerKind) -> &Vector<Wager> {
        match kind {
            WagerKind::Winner => &self.game_winner,
            WagerKind::Loser => &self.game_loser,
        }
    }

    /// Round wager slots already taken on a racer.
    #[must_use]
    pub fn round_count(&self, racer: RacerId) -> usize {
        self.round.iter().filter(|w| w.racer.matches(racer)).count()
    }

    /// Does `owner` hold a winner or loser wager on `racer`?
    #[must_use]
    pub fn holds_game_wager(&self, owner: ParticipantId, racer: RacerId) -> bool {
        self.game_winner
            .iter()
            .chain(self.game_loser.iter())
            .any(|w| w.owner == owner && w.racer.matches(racer))
    }

    pub(crate) fn push_round(&mut self, wager: Wager) {
        self.round.push_back(wager);
    }

    pub(crate) fn push_game(&mut self, kind: WagerKind, wager: Wager) {
        match kind {
            WagerKind::Winner => self.game_winner.push_back(wager),
            WagerKind::Loser => self.game_loser.push_back(wager),
        }
    }

    /// Empty the round ledger, returning what it held.
    pub(crate) fn take_round(&mut self) -> Vector<Wager> {
        std::mem::take(&mut self.round)
    }
}
