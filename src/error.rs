//! Error types for round transitions.
//!
//! Every invalid transition is rejected with an error and leaves the round
//! and the chip balance untouched. The engine never panics on misuse.

use thiserror::Error;

/// Errors that can occur when placing a bet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum BetError {
    /// The round is not in the betting phase.
    #[error("invalid round state for betting")]
    InvalidState,
    /// A bet has already been placed this round.
    #[error("a bet is already placed")]
    AlreadyPlaced,
    /// Bet amount is zero.
    #[error("bet amount is zero")]
    ZeroBet,
    /// The bet exceeds the available chip balance.
    #[error("insufficient chips")]
    InsufficientChips,
}

/// Errors that can occur when dealing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DealError {
    /// The round is not awaiting a deal.
    #[error("invalid round state for dealing")]
    InvalidState,
    /// No bet has been placed.
    #[error("no bet has been placed")]
    NoBet,
}

/// Errors that can occur on a player action (hit or stand).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ActionError {
    /// The round is not in the playing phase.
    #[error("invalid round state for this action")]
    InvalidState,
}

/// Any rejected round transition, as returned by [`Round::apply`].
///
/// [`Round::apply`]: crate::Round::apply
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum TransitionError {
    /// A bet was rejected.
    #[error(transparent)]
    Bet(#[from] BetError),
    /// A deal was rejected.
    #[error(transparent)]
    Deal(#[from] DealError),
    /// A hit or stand was rejected.
    #[error(transparent)]
    Action(#[from] ActionError),
}
