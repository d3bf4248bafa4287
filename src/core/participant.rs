//! Participant identification and per-participant storage.
//!
//! ## ParticipantId
//!
//! Seat index of a betting participant, 0-based, up to 255 seats.
//!
//! ## ParticipantMap
//!
//! One value per participant backed by a `Vec`, indexed by `ParticipantId`.
//! Balances live in one of these.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

/// Participant seat index.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct ParticipantId(pub u8);

impl ParticipantId {
    /// Create a new participant ID.
    #[must_use]
    pub const fn new(id: u8) -> Self {
        Self(id)
    }

    /// Get the seat index (0-based).
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Iterate over all seats of a game with `participant_count` participants.
    ///
    /// ```
    /// use camel_race::core::ParticipantId;
    ///
    /// let seats: Vec<_> = ParticipantId::all(4).collect();
    /// assert_eq!(seats.len(), 4);
    /// assert_eq!(seats[3], ParticipantId::new(3));
    /// ```
    pub fn all(participant_count: usize) -> impl Iterator<Item = ParticipantId> {
        (0..participant_count as u8).map(ParticipantId)
    }
}

impl std::fmt::Display for ParticipantId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Participant {}", self.0)
    }
}

/// Per-participant values with O(1) access.
///
/// ```
/// use camel_race::core::{ParticipantId, ParticipantMap};
///
/// let mut balances: ParticipantMap<i64> = ParticipantMap::with_value(4, 2);
/// balances[ParticipantId::new(1)] += 5;
/// assert_eq!(balances[ParticipantId::new(1)], 7);
/// assert_eq!(balances.argmax(), vec![ParticipantId::new(1)]);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ParticipantMap<T> {
    data: Vec<T>,
}

impl<T> ParticipantMap<T> {
    /// Create a map with values from a factory function.
    pub fn new(participant_count: usize, factory: impl Fn(ParticipantId) -> T) -> Self {
        let data = ParticipantId::all(participant_count).map(factory).collect();
        Self { data }
    }

    /// Create a map with every entry set to `value`.
    pub fn with_value(participant_count: usize, value: T) -> Self
    where
        T: Clone,
    {
        Self {
            data: vec![value; participant_count],
        }
    }

    /// Number of participants.
    #[must_use]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// True when the map holds no participants.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Look up a participant, `None` if the seat does not exist.
    #[must_use]
    pub fn get(&self, participant: ParticipantId) -> Option<&T> {
        self.data.get(participant.index())
    }

    /// Iterate over (ParticipantId, &T) pairs.
    pub fn iter(&self) -> impl Iterator<Item = (ParticipantId, &T)> {
        self.data
            .iter()
            .enumerate()
            .map(|(i, v)| (ParticipantId(i as u8), v))
    }

    /// Iterate over values in seat order.
    pub fn values(&self) -> impl Iterator<Item = &T> {
        self.data.iter()
    }
}

impl<T: Ord> ParticipantMap<T> {
    /// Every participant whose value equals the maximum.
    ///
    /// Ties are kept; the result is empty only for an empty map.
    #[must_use]
    pub fn argmax(&self) -> Vec<ParticipantId> {
        let Some(best) = self.data.iter().max() else {
            return Vec::new();
        };
        self.iter()
            .filter(|(_, v)| *v == best)
            .map(|(p, _)| p)
            .collect()
    }
}

impl<T> Index<ParticipantId> for ParticipantMap<T> {
    type Output = T;

    fn index(&self, participant: ParticipantId) -> &Self::Output {
        &self.data[participant.index()]
    }
}

impl<T> IndexMut<ParticipantId> for ParticipantMap<T> {
    fn index_mut(&mut self, participant: ParticipantId) -> &mut Self::Output {
        &mut self.data[participant.index()]
    }
}
