//! Round state machine.
//!
//! A [`Round`] is a plain value driven by explicit transitions. The chip
//! balance and the card source are passed into each transition rather than
//! held by the round, so the engine carries no ambient state and the same
//! round logic serves any storage or session layer.

use serde::{Deserialize, Serialize};

use crate::error::TransitionError;
use crate::hand::{Hand, Score};
use crate::result::Settlement;
use crate::source::CardSource;

mod actions;
mod bet;
pub mod dealer;
pub mod state;

pub use state::{Action, RoundStatus};

/// A single blackjack round.
///
/// Lifecycle: `Idle` → (bet, deal) → `Playing` → `PlayerBust` or, via
/// `Stand`, `RoundEnd`. `Reset` returns a finished round to `Idle`.
///
/// # Example
///
/// ```
/// use twentyone::{Action, Card, Rank, Round, RoundStatus, SequenceSource, Suit};
///
/// let mut round = Round::new();
/// let mut chips = 1000;
/// let mut source = SequenceSource::new(vec![
///     Card::new(Rank::King, Suit::Spades),  // player
///     Card::new(Rank::Nine, Suit::Hearts),  // player
///     Card::new(Rank::Seven, Suit::Clubs),  // dealer
///     Card::new(Rank::Ten, Suit::Diamonds), // dealer draw
/// ]);
///
/// round.apply(Action::PlaceBet(100), &mut chips, &mut source).unwrap();
/// round.apply(Action::Deal, &mut chips, &mut source).unwrap();
/// round.apply(Action::Stand, &mut chips, &mut source).unwrap();
///
/// assert_eq!(round.status(), RoundStatus::RoundEnd);
/// assert_eq!(chips, 1100);
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Round {
    /// The player's hand.
    player: Hand,
    /// The dealer's hand.
    dealer: Hand,
    /// The bet for this round, held from placement until settlement.
    bet: Option<usize>,
    /// Current state.
    status: RoundStatus,
    /// Settlement record, populated once the round reaches a terminal state.
    last_result: Option<Settlement>,
}

impl Round {
    /// Creates a new idle round.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            player: Hand::new(),
            dealer: Hand::new(),
            bet: None,
            status: RoundStatus::Idle,
            last_result: None,
        }
    }

    /// Returns the player's hand.
    #[must_use]
    pub const fn player(&self) -> &Hand {
        &self.player
    }

    /// Returns the dealer's hand.
    #[must_use]
    pub const fn dealer(&self) -> &Hand {
        &self.dealer
    }

    /// Returns the bet held by the round, if one has been placed and the
    /// round has not yet settled.
    #[must_use]
    pub const fn bet(&self) -> Option<usize> {
        self.bet
    }

    /// Returns the current round status.
    #[must_use]
    pub const fn status(&self) -> RoundStatus {
        self.status
    }

    /// Returns the settlement record of a finished round.
    #[must_use]
    pub const fn last_result(&self) -> Option<&Settlement> {
        self.last_result.as_ref()
    }

    /// Computes the player's current score.
    #[must_use]
    pub fn player_score(&self) -> Score {
        self.player.score()
    }

    /// Computes the dealer's current score.
    #[must_use]
    pub fn dealer_score(&self) -> Score {
        self.dealer.score()
    }

    /// Clears the round back to [`RoundStatus::Idle`].
    ///
    /// Hands, bet, and last result are discarded. Resetting mid-round
    /// forfeits an already-deducted bet.
    pub fn reset(&mut self) {
        self.player.clear();
        self.dealer.clear();
        self.bet = None;
        self.status = RoundStatus::Idle;
        self.last_result = None;
    }

    /// Applies an action to the round, the reducer form of the individual
    /// transition methods.
    ///
    /// `chips` is the player's balance: the bet is deducted at placement and
    /// the payout credited at settlement. `source` supplies cards for deals
    /// and dealer play.
    ///
    /// # Errors
    ///
    /// Returns the rejection for any action invalid in the current state;
    /// the round and the balance are left unchanged.
    pub fn apply<S: CardSource>(
        &mut self,
        action: Action,
        chips: &mut usize,
        source: &mut S,
    ) -> Result<(), TransitionError> {
        match action {
            Action::PlaceBet(amount) => self.place_bet(amount, chips)?,
            Action::Deal => self.deal(source)?,
            Action::Hit => {
                self.hit(source)?;
            }
            Action::Stand => self.stand(chips, source)?,
            Action::Reset => self.reset(),
        }
        Ok(())
    }
}
