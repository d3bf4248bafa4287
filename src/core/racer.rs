//! Racer identification.
//!
//! Racers are the tokens that move along the track. Every game has a fixed
//! set of `racer_count` racers with ids `0..racer_count`; the count comes
//! from `RaceConfig`, never from a global.
//!
//! ```
//! use camel_race::core::RacerId;
//!
//! let racers: Vec<_> = RacerId::all(5).collect();
//! assert_eq!(racers.len(), 5);
//! assert_eq!(racers[4], RacerId::new(4));
//! assert!(RacerId::new(4).is_valid(5));
//! assert!(!RacerId::new(5).is_valid(5));
//! ```

use serde::{Deserialize, Serialize};

/// Stable identifier of a racer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct RacerId(pub u8);

impl RacerId {
    /// Create a racer ID.
    #[must_use]
    pub const fn new(id: u8) -> Self {
        Self(id)
    }

    /// Get the racer index (0-based).
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Check whether this ID exists in a game with `racer_count` racers.
    #[must_use]
    pub const fn is_valid(self, racer_count: usize) -> bool {
        (self.0 as usize) < racer_count
    }

    /// Iterate over every racer in a game with `racer_count` racers.
    pub fn all(racer_count: usize) -> impl Iterator<Item = RacerId> {
        (0..racer_count as u8).map(RacerId)
    }
}

impl std::fmt::Display for RacerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "c_{}", self.0)
    }
}
