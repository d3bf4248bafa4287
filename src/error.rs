//! Engine error types.
//!
//! Two classes of failure:
//! - `RuleViolation`: a participant asked for something the rules forbid.
//!   Validation always precedes mutation, so the state is untouched.
//! - `InvariantViolation`: the engine or its driver is broken (for example
//!   moves were enumerated after every racer moved without the round being
//!   settled). The game cannot continue.

use thiserror::Error;

use crate::core::{HazardDirection, InvalidDirection, ParticipantId, RacerId};

/// Illegal participant input.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum RuleViolation {
    #[error(transparent)]
    InvalidDirection(#[from] InvalidDirection),
    #[error("hazard cell {cell} outside placement window (1..={max})")]
    HazardOutOfBounds { cell: usize, max: usize },
    #[error("hazard cell {cell} is occupied by a racer")]
    HazardUnderRacer { cell: usize },
    #[error("hazard cell {cell} is occupied by or next to another participant's hazard")]
    HazardCrowded { cell: usize },
    #[error("hazard already sits on cell {cell} facing {direction}")]
    HazardUnchanged { cell: usize, direction: HazardDirection },
    #[error("no round wager slots left on {racer} (max={max})")]
    RoundWagersExhausted { racer: RacerId, max: usize },
    #[error("{owner} already holds a game wager on {racer}")]
    DuplicateGameWager { owner: ParticipantId, racer: RacerId },
    #[error("unknown racer {0}")]
    UnknownRacer(RacerId),
    #[error("unknown participant {0}")]
    UnknownParticipant(ParticipantId),
    #[error("roll {roll} outside the die range ({min}..={max})")]
    RollOutOfRange { roll: u8, min: u8, max: u8 },
    #[error("the game has already finished")]
    GameFinished,
}

/// Broken engine or driver invariant.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum InvariantViolation {
    #[error("all racers have moved but the round was not settled")]
    NoRacerLeftToMove,
    #[error("rank {n} out of range (1..={racers})")]
    RankOutOfRange { n: usize, racers: usize },
    #[error("{0} is not on the track")]
    RacerMissing(RacerId),
    #[error("{racer} appears {count} times on the track")]
    RacerDuplicated { racer: RacerId, count: usize },
    #[error("{0} is not a racer of this game")]
    StrayRacer(RacerId),
    #[error("{0} already moved this round")]
    RacerAlreadyMoved(RacerId),
    #[error("move to cell {cell} overruns the track (len={len})")]
    TrackOverflow { cell: usize, len: usize },
    #[error("track of {got} cells does not fit the board (len={len})")]
    TrackLength { got: usize, len: usize },
    #[error("{racer} starts on cell {cell}, at or past the finish")]
    RacerPastFinish { racer: RacerId, cell: usize },
    #[error("hazard row has {hazards} cells but the track has {cells}")]
    HazardRowLength { cells: usize, hazards: usize },
    #[error("hazard on cell {cell} shares it with a racer")]
    HazardUnderRacer { cell: usize },
    #[error("hazards on adjacent cells {cell} and {next}")]
    HazardsAdjacent { cell: usize, next: usize },
    #[error("{0} owns more than one hazard")]
    HazardOwnedTwice(ParticipantId),
    #[error("hazard on cell {cell} belongs to {owner}, who is not seated")]
    HazardOwnerUnknown { cell: usize, owner: ParticipantId },
    #[error("round settled before it ended")]
    RoundNotOver,
    #[error("game settlement attempted twice")]
    GameAlreadySettled,
    #[error("{got} participants seated for a game of {expected}")]
    SeatCount { got: usize, expected: usize },
}

/// Any failure raised by the rules engine.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum RaceError {
    #[error("illegal action: {0}")]
    Rule(#[from] RuleViolation),
    #[error("engine invariant violated: {0}")]
    Invariant(#[from] InvariantViolation),
}

impl RaceError {
    /// Invariant violations mean the game must be abandoned.
    #[must_use]
    pub fn is_fatal(&self) -> bool {
        matches!(self, RaceError::Invariant(_))
    }
}
