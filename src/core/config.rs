//! Race configuration.
//!
//! A `RaceConfig` is captured once, before the game starts, and is read-only
//! afterwards: fields are private and there are no setters. The only way to
//! obtain one is `RaceConfigBuilder::build()`, which rejects structurally
//! invalid values. Deserialisation goes through the same builder.
//!
//! ```
//! use camel_race::core::RaceConfig;
//!
//! let config = RaceConfig::builder()
//!     .with_participant_count(3)
//!     .with_board_size(12)
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(config.participant_count(), 3);
//! assert_eq!(config.track_len(), 24);
//! assert_eq!(config.round_wager_slots(), 3);
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Lowest face of the movement die.
pub const MIN_ROLL: u8 = 1;

/// Highest face of the movement die.
pub const MAX_ROLL: u8 = 3;

/// Smallest board that still leaves room for the overshoot past the finish
/// and the neighbour cell of a hazard placed on the finish cell.
pub const MIN_BOARD_SIZE: usize = 4;

/// Rejected configuration values.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("round payouts must have the same length (first={first}, second={second})")]
    MismatchedRoundPayouts { first: usize, second: usize },
    #[error("racer count {0} out of range (2..=255)")]
    RacerCount(usize),
    #[error("participant count {0} out of range (1..=255)")]
    ParticipantCount(usize),
    #[error("board size {got} too small (min={min})")]
    BoardTooSmall { got: usize, min: usize },
}

/// Immutable game configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RaceConfigBuilder", into = "RaceConfigBuilder")]
pub struct RaceConfig {
    racer_count: usize,
    participant_count: usize,
    board_size: usize,
    first_place_round_payout: Vec<i64>,
    second_place_round_payout: Vec<i64>,
    third_or_worse_round_payout: i64,
    excess_round_wager_payout: i64,
    game_end_payout: Vec<i64>,
    excess_game_wager_payout: i64,
    bad_game_end_bet: i64,
    starting_balance: i64,
}

impl RaceConfig {
    /// Start a builder with the standard rules.
    #[must_use]
    pub fn builder() -> RaceConfigBuilder {
        RaceConfigBuilder::default()
    }

    /// The standard 5-racer, 4-participant, 16-cell game.
    #[must_use]
    pub fn standard() -> Self {
        RaceConfigBuilder::default().into_config()
    }

    /// Number of racers.
    #[must_use]
    pub fn racer_count(&self) -> usize {
        self.racer_count
    }

    /// Number of participants.
    #[must_use]
    pub fn participant_count(&self) -> usize {
        self.participant_count
    }

    /// Cells up to the finish line. A racer at or beyond this cell ends the game.
    #[must_use]
    pub fn board_size(&self) -> usize {
        self.board_size
    }

    /// Physical track length, twice the board so finishers can overshoot.
    #[must_use]
    pub fn track_len(&self) -> usize {
        self.board_size * 2
    }

    /// Payouts for round wagers on the round leader, richest first.
    #[must_use]
    pub fn first_place_round_payout(&self) -> &[i64] {
        &self.first_place_round_payout
    }

    /// Payouts for round wagers on the round runner-up.
    #[must_use]
    pub fn second_place_round_payout(&self) -> &[i64] {
        &self.second_place_round_payout
    }

    /// Flat amount for a round wager on any other racer.
    #[must_use]
    pub fn third_or_worse_round_payout(&self) -> i64 {
        self.third_or_worse_round_payout
    }

    /// Paid to round wagers on a placing racer once its table is used up.
    #[must_use]
    pub fn excess_round_wager_payout(&self) -> i64 {
        self.excess_round_wager_payout
    }

    /// Payouts for correct game wagers, in placement order.
    #[must_use]
    pub fn game_end_payout(&self) -> &[i64] {
        &self.game_end_payout
    }

    /// Paid to correct game wagers beyond the payout table.
    #[must_use]
    pub fn excess_game_wager_payout(&self) -> i64 {
        self.excess_game_wager_payout
    }

    /// Amount for an incorrect game wager.
    #[must_use]
    pub fn bad_game_end_bet(&self) -> i64 {
        self.bad_game_end_bet
    }

    /// Balance every participant starts with.
    #[must_use]
    pub fn starting_balance(&self) -> i64 {
        self.starting_balance
    }

    /// Round wagers allowed per racer per round.
    #[must_use]
    pub fn round_wager_slots(&self) -> usize {
        self.first_place_round_payout.len()
    }

    /// Payout for the `index`-th correct game wager (0-based).
    #[must_use]
    pub fn game_wager_payout(&self, index: usize) -> i64 {
        self.game_end_payout
            .get(index)
            .copied()
            .unwrap_or(self.excess_game_wager_payout)
    }
}

impl Default for RaceConfig {
    fn default() -> Self {
        Self::standard()
    }
}

/// Builder for `RaceConfig`. Defaults are the standard rules.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct RaceConfigBuilder {
    pub racer_count: usize,
    pub participant_count: usize,
    pub board_size: usize,
    pub first_place_round_payout: Vec<i64>,
    pub second_place_round_payout: Vec<i64>,
    pub third_or_worse_round_payout: i64,
    pub excess_round_wager_payout: i64,
    pub game_end_payout: Vec<i64>,
    pub excess_game_wager_payout: i64,
    pub bad_game_end_bet: i64,
    pub starting_balance: i64,
}

impl Default for RaceConfigBuilder {
    fn default() -> Self {
        Self {
            racer_count: 5,
            participant_count: 4,
            board_size: 16,
            first_place_round_payout: vec![5, 3, 2],
            second_place_round_payout: vec![1, 1, 1],
            third_or_worse_round_payout: -1,
            excess_round_wager_payout: 0,
            game_end_payout: vec![8, 5, 3],
            excess_game_wager_payout: 1,
            bad_game_end_bet: -1,
            starting_balance: 2,
        }
    }
}

impl RaceConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_racer_count(mut self, count: usize) -> Self {
        self.racer_count = count;
        self
    }

    #[must_use]
    pub fn with_participant_count(mut self, count: usize) -> Self {
        self.participant_count = count;
        self
    }

    #[must_use]
    pub fn with_board_size(mut self, size: usize) -> Self {
        self.board_size = size;
        self
    }

    /// Set both round payout tables. They must have the same length.
    #[must_use]
    pub fn with_round_payouts(mut self, first: Vec<i64>, second: Vec<i64>) -> Self {
        self.first_place_round_payout = first;
        self.second_place_round_payout = second;
        self
    }

    #[must_use]
    pub fn with_third_or_worse_round_payout(mut self, payout: i64) -> Self {
        self.third_or_worse_round_payout = payout;
        self
    }

    #[must_use]
    pub fn with_excess_round_wager_payout(mut self, payout: i64) -> Self {
        self.excess_round_wager_payout = payout;
        self
    }

    #[must_use]
    pub fn with_game_end_payout(mut self, payout: Vec<i64>) -> Self {
        self.game_end_payout = payout;
        self
    }

    #[must_use]
    pub fn with_excess_game_wager_payout(mut self, payout: i64) -> Self {
        self.excess_game_wager_payout = payout;
        self
    }

    #[must_use]
    pub fn with_bad_game_end_bet(mut self, penalty: i64) -> Self {
        self.bad_game_end_bet = penalty;
        self
    }

    #[must_use]
    pub fn with_starting_balance(mut self, balance: i64) -> Self {
        self.starting_balance = balance;
        self
    }

    /// Validate and freeze the configuration.
    pub fn build(self) -> Result<RaceConfig, ConfigError> {
        if self.first_place_round_payout.len() != self.second_place_round_payout.len() {
            return Err(ConfigError::MismatchedRoundPayouts {
                first: self.first_place_round_payout.len(),
                second: self.second_place_round_payout.len(),
            });
        }
        if !(2..=255).contains(&self.racer_count) {
            return Err(ConfigError::RacerCount(self.racer_count));
        }
        if !(1..=255).contains(&self.participant_count) {
            return Err(ConfigError::ParticipantCount(self.participant_count));
        }
        if self.board_size < MIN_BOARD_SIZE {
            return Err(ConfigError::BoardTooSmall {
                got: self.board_size,
                min: MIN_BOARD_SIZE,
            });
        }
        Ok(self.into_config())
    }

    fn into_config(self) -> RaceConfig {
        RaceConfig {
            racer_count: self.racer_count,
            participant_count: self.participant_count,
            board_size: self.board_size,
            first_place_round_payout: self.first_place_round_payout,
            second_place_round_payout: self.second_place_round_payout,
            third_or_worse_round_payout: self.third_or_worse_round_payout,
            excess_round_wager_payout: self.excess_round_wager_payout,
            game_end_payout: self.game_end_payout,
            excess_game_wager_payout: self.excess_game_wager_payout,
            bad_game_end_bet: self.bad_game_end_bet,
            starting_balance: self.starting_balance,
        }
    }
}

impl TryFrom<RaceConfigBuilder> for RaceConfig {
    type Error = ConfigError;

    fn try_from(builder: RaceConfigBuilder) -> Result<Self, Self::Error> {
        builder.build()
    }
}

impl From<RaceConfig> for RaceConfigBuilder {
    fn from(config: RaceConfig) -> Self {
        Self {
            racer_count: config.racer_count,
            participant_count: config.participant_count,
            board_size: config.board_size,
            first_place_round_payout: config.first_place_round_payout,
            second_place_round_payout: config.second_place_round_payout,
            third_or_worse_round_payout: config.third_or_worse_round_payout,
            excess_round_wager_payout: config.excess_round_wager_payout,
            game_end_payout: config.game_end_payout,
            excess_game_wager_payout: config.excess_game_wager_payout,
            bad_game_end_bet: config.bad_game_end_bet,
            starting_balance: config.starting_balance,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_rules() {
        let config = RaceConfig::standard();

        assert_eq!(config.racer_count(), 5);
        assert_eq!(config.participant_count(), 4);
        assert_eq!(config.board_size(), 16);
        assert_eq!(config.track_len(), 32);
        assert_eq!(config.first_place_round_payout(), &[5, 3, 2]);
        assert_eq!(config.second_place_round_payout(), &[1, 1, 1]);
        assert_eq!(config.third_or_worse_round_payout(), -1);
        assert_eq!(config.game_end_payout(), &[8, 5, 3]);
        assert_eq!(config.bad_game_end_bet(), -1);
        assert_eq!(config.starting_balance(), 2);
    }

    #[test]
    fn test_game_wager_payout_falls_back() {
        let config = RaceConfig::standard();

        assert_eq!(config.game_wager_payout(0), 8);
        assert_eq!(config.game_wager_payout(2), 3);
        assert_eq!(config.game_wager_payout(3), 1);
        assert_eq!(config.game_wager_payout(40), 1);
    }

    #[test]
    fn test_mismatched_round_payouts_rejected() {
        let err = RaceConfig::builder()
            .with_round_payouts(vec![5, 3], vec![1])
            .build()
            .unwrap_err();

        assert_eq!(err, ConfigError::MismatchedRoundPayouts { first: 2, second: 1 });
    }

    #[test]
    fn test_counts_rejected() {
        assert_eq!(
            RaceConfig::builder().with_racer_count(1).build().unwrap_err(),
            ConfigError::RacerCount(1)
        );
        assert_eq!(
            RaceConfig::builder().with_participant_count(0).build().unwrap_err(),
            ConfigError::ParticipantCount(0)
        );
        assert!(matches!(
            RaceConfig::builder().with_board_size(3).build(),
            Err(ConfigError::BoardTooSmall { got: 3, .. })
        ));
    }

    #[test]
    fn test_deserialize_validates() {
        let json = r#"{"first_place_round_payout":[5,3,2],"second_place_round_payout":[1]}"#;
        assert!(serde_json::from_str::<RaceConfig>(json).is_err());

        let json = r#"{"board_size":10,"participant_count":2}"#;
        let config: RaceConfig = serde_json::from_str(json).unwrap();
        assert_eq!(config.board_size(), 10);
        assert_eq!(config.participant_count(), 2);
        assert_eq!(config.racer_count(), 5);
    }

    #[test]
    fn test_serde_round_trip() {
        let config = RaceConfig::builder().with_starting_balance(10).build().unwrap();
        let json = serde_json::to_string(&config).unwrap();
        let back: RaceConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config, back);
    }
}
