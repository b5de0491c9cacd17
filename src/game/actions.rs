use crate::card::Card;
use crate::error::ActionError;
use crate::result::{HandOutcome, RoundOutcome, Settlement, chips_won, compare_hands};
use crate::source::CardSource;

use super::dealer::dealer_play;
use super::{Round, RoundStatus};

impl Round {
    /// Player action: hit (draw one card).
    ///
    /// Returns the drawn card. A bust settles the round immediately as a
    /// loss of the full bet; the dealer never plays.
    ///
    /// # Errors
    ///
    /// Rejects the action if the round is not in the playing phase.
    pub fn hit<S: CardSource>(&mut self, source: &mut S) -> Result<Card, ActionError> {
        if self.status != RoundStatus::Playing {
            return Err(ActionError::InvalidState);
        }

        let card = source.draw();
        self.player.add_card(card);

        if self.player.is_bust() {
            self.settle_player_bust();
        }

        Ok(card)
    }

    /// Player action: stand.
    ///
    /// Dealer play and settlement run to completion within this call: the
    /// dealer draws to 17 or better, the hands are compared, a winning
    /// natural is classified as blackjack, the payout is credited to
    /// `chips`, and the round ends.
    ///
    /// # Errors
    ///
    /// Rejects the action if the round is not in the playing phase.
    pub fn stand<S: CardSource>(
        &mut self,
        chips: &mut usize,
        source: &mut S,
    ) -> Result<(), ActionError> {
        if self.status != RoundStatus::Playing {
            return Err(ActionError::InvalidState);
        }

        self.status = RoundStatus::DealerPlaying;
        let final_dealer = dealer_play(self.dealer.cards(), source);
        self.dealer.replace(final_dealer);

        self.settle(chips);

        Ok(())
    }

    /// Compares the final hands, credits the payout, and ends the round.
    fn settle(&mut self, chips: &mut usize) {
        let comparison = compare_hands(self.player.cards(), self.dealer.cards());

        // A natural only upgrades a win; a two-sided natural already pushed
        // in the numeric comparison.
        let outcome = if comparison.result == HandOutcome::Win && self.player.is_natural() {
            RoundOutcome::Blackjack
        } else {
            RoundOutcome::from(comparison.result)
        };

        let bet = self.bet.take().unwrap_or(0);
        let delta = chips_won(bet, outcome);

        // A regular win returns the stake doubled; a natural credits the
        // floored 3:2 figure itself; a push returns the stake.
        let payout = match outcome {
            RoundOutcome::Blackjack => bet + bet / 2,
            RoundOutcome::Win => bet * 2,
            RoundOutcome::Push => bet,
            RoundOutcome::Loss => 0,
        };
        *chips += payout;

        self.last_result = Some(Settlement {
            result: outcome,
            player_score: comparison.player,
            dealer_score: comparison.dealer,
            bet,
            chips_won: delta,
        });
        self.status = RoundStatus::RoundEnd;
    }

    /// Settles a busted player hand as a loss of the full bet.
    pub(super) fn settle_player_bust(&mut self) {
        let bet = self.bet.take().unwrap_or(0);

        self.last_result = Some(Settlement {
            result: RoundOutcome::Loss,
            player_score: self.player.score().value,
            dealer_score: self.dealer.score().value,
            bet,
            chips_won: chips_won(bet, RoundOutcome::Loss),
        });
        self.status = RoundStatus::PlayerBust;
    }
}
