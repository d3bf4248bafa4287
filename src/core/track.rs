//! The race track: racer stacks and hazards.
//!
//! The track is a row of cells. Each cell holds a stack of racers ordered
//! bottom-to-top (index 0 is the bottom) and at most one hazard. The
//! physical track is twice the board length so a finishing racer can
//! overshoot the line without leaving the array.
//!
//! The track only knows how to store and move things; which moves are
//! legal is decided in `rules`.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::action::HazardDirection;
use super::participant::ParticipantId;
use super::racer::RacerId;

/// Racers sharing one cell, bottom first.
///
/// Five racers fit inline, which covers every stack of the standard game.
pub type Stack = SmallVec<[RacerId; 5]>;

/// A placed hazard.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Hazard {
    pub direction: HazardDirection,
    pub owner: ParticipantId,
}

/// Racer stacks and hazards, cell by cell.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Track {
    cells: Vec<Stack>,
    hazards: Vec<Option<Hazard>>,
}

impl Track {
    /// Create an empty track with `len` cells.
    #[must_use]
    pub fn new(len: usize) -> Self {
        Self {
            cells: vec![Stack::new(); len],
            hazards: vec![None; len],
        }
    }

    /// Build a track from explicit stacks, bottom racer first in each.
    ///
    /// ```
    /// use camel_race::core::{RacerId, Track};
    ///
    /// let track = Track::from_stacks(vec![
    ///     vec![RacerId(0)],
    ///     vec![],
    ///     vec![RacerId(1), RacerId(2)],
    /// ]);
    /// assert_eq!(track.locate(RacerId(2)), Some((2, 1)));
    /// ```
    #[must_use]
    pub fn from_stacks(stacks: Vec<Vec<RacerId>>) -> Self {
        let len = stacks.len();
        Self {
            cells: stacks.into_iter().map(Stack::from_vec).collect(),
            hazards: vec![None; len],
        }
    }

    /// Extend with empty cells up to `len`. Never shrinks.
    pub fn pad_to(&mut self, len: usize) {
        if self.cells.len() < len {
            self.cells.resize(len, Stack::new());
            self.hazards.resize(len, None);
        }
    }

    /// Number of cells.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// True for a track without cells.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    // === Racers ===

    /// Racers on a cell, bottom first. Out-of-range cells are empty.
    #[must_use]
    pub fn stack(&self, cell: usize) -> &[RacerId] {
        self.cells.get(cell).map(|s| s.as_slice()).unwrap_or(&[])
    }

    /// True if any racer stands on the cell.
    #[must_use]
    pub fn has_racer(&self, cell: usize) -> bool {
        !self.stack(cell).is_empty()
    }

    /// Iterate over (cell, stack) pairs from the start line forward.
    pub fn stacks(&self) -> impl DoubleEndedIterator<Item = (usize, &[RacerId])> {
        self.cells.iter().enumerate().map(|(i, s)| (i, s.as_slice()))
    }

    /// Cell and stack depth of a racer, `None` if it is not on the track.
    #[must_use]
    pub fn locate(&self, racer: RacerId) -> Option<(usize, usize)> {
        self.cells.iter().enumerate().find_map(|(cell, stack)| {
            stack.iter().position(|&r| r == racer).map(|depth| (cell, depth))
        })
    }

    /// Total racers on the track.
    #[must_use]
    pub fn racer_total(&self) -> usize {
        self.cells.iter().map(Stack::len).sum()
    }

    /// True if any racer stands on `cell` or further.
    #[must_use]
    pub fn any_racer_from(&self, cell: usize) -> bool {
        self.cells.iter().skip(cell).any(|s| !s.is_empty())
    }

    /// Put a racer on top of a cell's stack.
    pub(crate) fn push(&mut self, cell: usize, racer: RacerId) {
        self.cells[cell].push(racer);
    }

    /// Remove the racer at `depth` and everything above it.
    pub(crate) fn lift(&mut self, cell: usize, depth: usize) -> Stack {
        let stack = &mut self.cells[cell];
        let lifted = Stack::from_slice(&stack[depth..]);
        stack.truncate(depth);
        lifted
    }

    /// Place a moving stack on top of the racers already on `cell`.
    pub(crate) fn drop_on_top(&mut self, cell: usize, moving: Stack) {
        self.cells[cell].extend(moving);
    }

    /// Place a moving stack beneath the racers already on `cell`.
    pub(crate) fn slide_under(&mut self, cell: usize, moving: Stack) {
        self.cells[cell].insert_many(0, moving);
    }

    // === Hazards ===

    /// Hazard on a cell, if any. Out-of-range cells have none.
    #[must_use]
    pub fn hazard(&self, cell: usize) -> Option<Hazard> {
        self.hazards.get(cell).copied().flatten()
    }

    /// Where a participant's hazard currently sits.
    #[must_use]
    pub fn hazard_of(&self, owner: ParticipantId) -> Option<(usize, Hazard)> {
        self.hazards
            .iter()
            .enumerate()
            .find_map(|(cell, h)| (*h).filter(|h| h.owner == owner).map(|h| (cell, h)))
    }

    /// Length of the hazard row. Equal to `len()` for any track built
    /// through this API; a deserialised track may disagree.
    #[must_use]
    pub fn hazard_row_len(&self) -> usize {
        self.hazards.len()
    }

    /// Iterate over every placed hazard.
    pub fn hazards(&self) -> impl Iterator<Item = (usize, Hazard)> + '_ {
        self.hazards
            .iter()
            .enumerate()
            .filter_map(|(cell, h)| (*h).map(|h| (cell, h)))
    }

    /// True if the cell holds a hazard owned by anyone but `owner`.
    #[must_use]
    pub fn foreign_hazard(&self, cell: usize, owner: ParticipantId) -> bool {
        self.hazard(cell).is_some_and(|h| h.owner != owner)
    }

    pub(crate) fn set_hazard(&mut self, cell: usize, hazard: Hazard) {
        self.hazards[cell] = Some(hazard);
    }

    pub(crate) fn clear_hazard(&mut self, cell: usize) {
        self.hazards[cell] = None;
    }
}
