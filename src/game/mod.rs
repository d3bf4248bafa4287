//! Running a single game from start to finish.

pub mod driver;

pub use driver::{play_game, play_from, GameOutcome};
