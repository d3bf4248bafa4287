//! Participant actions.
//!
//! An action is one of four tagged values:
//! - `RollAndMove`: roll the die; the engine picks which unmoved racer moves
//! - `PlaceHazard`: place or relocate the participant's single hazard
//! - `RoundWager`: take the next round-wager slot on a racer
//! - `GameWager`: bet on the overall winner or loser racer
//!
//! Typed fields make malformed actions unrepresentable; raw directions coming
//! from outside are converted with `HazardDirection::try_from`.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::participant::ParticipantId;
use super::racer::RacerId;

/// Direction of a hazard: forward adds one to the roll, backward subtracts
/// one and slides the moving stack under the destination.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HazardDirection {
    Forward,
    Backward,
}

impl HazardDirection {
    /// Both directions, forward first.
    pub const ALL: [HazardDirection; 2] = [HazardDirection::Forward, HazardDirection::Backward];

    /// Signed adjustment applied to the roll (+1 or -1).
    #[must_use]
    pub const fn delta(self) -> i8 {
        match self {
            HazardDirection::Forward => 1,
            HazardDirection::Backward => -1,
        }
    }
}

/// A raw direction value other than +1 or -1.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
#[error("hazard direction {0} is not +1 or -1")]
pub struct InvalidDirection(pub i8);

impl TryFrom<i8> for HazardDirection {
    type Error = InvalidDirection;

    fn try_from(value: i8) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(HazardDirection::Forward),
            -1 => Ok(HazardDirection::Backward),
            other => Err(InvalidDirection(other)),
        }
    }
}

impl std::fmt::Display for HazardDirection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:+}", self.delta())
    }
}

/// Which end of the final ranking a game wager backs.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WagerKind {
    Winner,
    Loser,
}

impl WagerKind {
    pub const ALL: [WagerKind; 2] = [WagerKind::Winner, WagerKind::Loser];
}

/// A participant's chosen action.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Action {
    RollAndMove,
    PlaceHazard {
        direction: HazardDirection,
        cell: usize,
    },
    RoundWager(RacerId),
    GameWager {
        kind: WagerKind,
        racer: RacerId,
    },
}

/// Coarse grouping of actions, used by participants choosing hierarchically.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ActionKind {
    Roll,
    Hazard,
    RoundWager,
    GameWager,
}

impl Action {
    /// The group this action belongs to.
    #[must_use]
    pub const fn kind(&self) -> ActionKind {
        match self {
            Action::RollAndMove => ActionKind::Roll,
            Action::PlaceHazard { .. } => ActionKind::Hazard,
            Action::RoundWager(_) => ActionKind::RoundWager,
            Action::GameWager { .. } => ActionKind::GameWager,
        }
    }
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Action::RollAndMove => write!(f, "roll"),
            Action::PlaceHazard { direction, cell } => write!(f, "{direction} hazard on {cell}"),
            Action::RoundWager(racer) => write!(f, "round wager on {racer}"),
            Action::GameWager { kind, racer } => write!(f, "game {kind:?} wager on {racer}"),
        }
    }
}

/// An executed action, kept in the game's history.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionRecord {
    /// Who acted.
    pub participant: ParticipantId,

    /// What they did.
    pub action: Action,

    /// Turn number (0-based count of executed actions before this one).
    pub turn: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_direction_from_raw() {
        assert_eq!(HazardDirection::try_from(1), Ok(HazardDirection::Forward));
        assert_eq!(HazardDirection::try_from(-1), Ok(HazardDirection::Backward));
        assert_eq!(HazardDirection::try_from(0), Err(InvalidDirection(0)));
        assert_eq!(HazardDirection::try_from(2), Err(InvalidDirection(2)));
    }

    #[test]
    fn test_direction_delta_display() {
        assert_eq!(HazardDirection::Forward.delta(), 1);
        assert_eq!(HazardDirection::Backward.delta(), -1);
        assert_eq!(format!("{}", HazardDirection::Forward), "+1");
        assert_eq!(format!("{}", HazardDirection::Backward), "-1");
    }

    #[test]
    fn test_action_kind() {
        assert_eq!(Action::RollAndMove.kind(), ActionKind::Roll);
        assert_eq!(
            Action::PlaceHazard { direction: HazardDirection::Forward, cell: 3 }.kind(),
            ActionKind::Hazard
        );
        assert_eq!(Action::RoundWager(RacerId(0)).kind(), ActionKind::RoundWager);
        assert_eq!(
            Action::GameWager { kind: WagerKind::Loser, racer: RacerId(1) }.kind(),
            ActionKind::GameWager
        );
    }

    #[test]
    fn test_action_serialization() {
        let action = Action::GameWager { kind: WagerKind::Winner, racer: RacerId(2) };
        let json = serde_json::to_string(&action).unwrap();
        let deserialized: Action = serde_json::from_str(&json).unwrap();
        assert_eq!(action, deserialized);
    }

    #[test]
    fn test_action_record_serialization() {
        let record = ActionRecord {
            participant: ParticipantId::new(1),
            action: Action::PlaceHazard { direction: HazardDirection::Backward, cell: 7 },
            turn: 12,
        };
        let json = serde_json::to_string(&record).unwrap();
        let deserialized: ActionRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(record, deserialized);
    }
}
