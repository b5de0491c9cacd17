use crate::error::{BetError, DealError};
use crate::source::CardSource;

use super::{Round, RoundStatus};

impl Round {
    /// Places a bet, deducting it from `chips` immediately.
    ///
    /// # Errors
    ///
    /// Rejects the bet if the round is not idle, a bet is already held,
    /// the amount is zero, or the amount exceeds the balance. The balance
    /// is untouched on rejection.
    pub fn place_bet(&mut self, amount: usize, chips: &mut usize) -> Result<(), BetError> {
        if self.status != RoundStatus::Idle {
            return Err(BetError::InvalidState);
        }
        if self.bet.is_some() {
            return Err(BetError::AlreadyPlaced);
        }
        if amount == 0 {
            return Err(BetError::ZeroBet);
        }
        if amount > *chips {
            return Err(BetError::InsufficientChips);
        }

        *chips -= amount;
        self.bet = Some(amount);

        Ok(())
    }

    /// Deals the opening hands: two cards to the player, one to the dealer.
    ///
    /// A player bust on the opening deal (only reachable with a
    /// non-standard source) settles the round immediately; otherwise the
    /// round moves to [`RoundStatus::Playing`].
    ///
    /// # Errors
    ///
    /// Rejects the deal if the round is not idle or no bet has been placed.
    pub fn deal<S: CardSource>(&mut self, source: &mut S) -> Result<(), DealError> {
        if self.status != RoundStatus::Idle {
            return Err(DealError::InvalidState);
        }
        if self.bet.is_none() {
            return Err(DealError::NoBet);
        }

        self.player.add_card(source.draw());
        self.player.add_card(source.draw());
        self.dealer.add_card(source.draw());

        if self.player.is_bust() {
            self.settle_player_bust();
        } else {
            self.status = RoundStatus::Playing;
        }

        Ok(())
    }
}
