//! A single-player blackjack round engine.
//!
//! The crate provides a [`Round`] state machine that sequences betting,
//! dealing, player actions, automated dealer play, and settlement, on top
//! of an ace-flexible hand evaluator ([`best_value`]) and an injectable
//! [`CardSource`]. Cards are drawn with replacement from an infinite
//! standard deck, so there is no shoe state to manage.
//!
//! The engine holds no balance or session state of its own: the chip
//! balance is passed into each transition, and the settlement record a
//! finished round produces is handed back for the caller to persist.
//!
//! # Example
//!
//! ```
//! use twentyone::{Action, RandomSource, Round, RoundStatus};
//!
//! let mut round = Round::new();
//! let mut chips = 1000;
//! let mut source = RandomSource::new(42);
//!
//! round.apply(Action::PlaceBet(50), &mut chips, &mut source).unwrap();
//! round.apply(Action::Deal, &mut chips, &mut source).unwrap();
//! round.apply(Action::Stand, &mut chips, &mut source).unwrap();
//!
//! assert!(round.status().is_terminal());
//! assert!(round.last_result().is_some());
//! ```

pub mod card;
pub mod error;
pub mod game;
pub mod hand;
pub mod result;
pub mod source;

// Re-export main types
pub use card::{ALL_RANKS, ALL_SUITS, Card, DECK_SIZE, Rank, Suit};
pub use error::{ActionError, BetError, DealError, TransitionError};
pub use game::dealer::{DEALER_HAND_LIMIT, dealer_play};
pub use game::{Action, Round, RoundStatus};
pub use hand::{Hand, Score, best_value, is_bust};
pub use result::{
    Comparison, HandOutcome, RoundOutcome, Settlement, chips_won, compare_hands, determine_outcome,
};
pub use source::{CardSource, RandomSource, SequenceSource};
