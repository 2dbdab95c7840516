//! Error types for game operations.

use thiserror::Error;

/// Construction-time configuration errors.
///
/// These are fatal: they abort startup and are never recovered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// Shoe built with zero decks.
    #[error("number of decks must be at least 1")]
    DeckCount,
    /// Player created with an empty name.
    #[error("player name must not be empty")]
    EmptyName,
    /// Player created with a negative chip balance.
    #[error("starting chips must not be negative")]
    NegativeChips,
}

/// Errors that can occur when placing a bet.
///
/// Recovered at the betting prompt; the message is shown and the player is
/// asked again.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum BetError {
    /// Bet amount is zero, negative, or not a finite number.
    #[error("bet must be a positive amount")]
    NonPositive,
    /// Bet amount exceeds the available chips.
    #[error("bet exceeds available chips")]
    InsufficientChips,
}

/// Errors that can occur during player actions.
///
/// Recovered at the action prompt without consuming the turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ActionError {
    /// Double down requested against its eligibility guard.
    #[error("cannot double down on this hand")]
    CannotDouble,
}
