//! Round resolution: hand comparison, outcome classification, and payouts.

use serde::{Deserialize, Serialize};

use crate::card::Card;
use crate::hand::best_value;

/// Result of numerically comparing two final hands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HandOutcome {
    /// Player wins (dealer busts or player has the higher value).
    Win,
    /// Player loses (player busts or dealer has the higher value).
    Loss,
    /// Push (tie).
    Push,
}

/// Classified outcome of a settled round.
///
/// Serializes as `"win"`, `"loss"`, `"push"`, or `"blackjack"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RoundOutcome {
    /// Player wins at even money.
    Win,
    /// Player loses the bet.
    Loss,
    /// Push; the bet is returned.
    Push,
    /// Player wins with a natural blackjack, paid 3:2.
    Blackjack,
}

impl From<HandOutcome> for RoundOutcome {
    fn from(outcome: HandOutcome) -> Self {
        match outcome {
            HandOutcome::Win => Self::Win,
            HandOutcome::Loss => Self::Loss,
            HandOutcome::Push => Self::Push,
        }
    }
}

/// Numeric comparison of the final player and dealer hands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Comparison {
    /// The comparison result.
    pub result: HandOutcome,
    /// The player's final hand value.
    pub player: u16,
    /// The dealer's final hand value.
    pub dealer: u16,
}

/// Compares two final hands by value.
///
/// Precedence: a busted player loses regardless of the dealer; otherwise a
/// busted dealer loses; otherwise the higher value wins and equal values
/// push. The comparison is blackjack-agnostic: any two hands scoring 21
/// push, natural or not.
///
/// # Example
///
/// ```
/// use twentyone::{Card, HandOutcome, Rank, Suit, compare_hands};
///
/// let player = [
///     Card::new(Rank::Ten, Suit::Spades),
///     Card::new(Rank::Nine, Suit::Hearts),
/// ];
/// let dealer = [
///     Card::new(Rank::Ten, Suit::Clubs),
///     Card::new(Rank::Eight, Suit::Diamonds),
/// ];
/// let comp = compare_hands(&player, &dealer);
/// assert_eq!(comp.result, HandOutcome::Win);
/// assert_eq!(comp.player, 19);
/// assert_eq!(comp.dealer, 18);
/// ```
#[must_use]
pub fn compare_hands(player: &[Card], dealer: &[Card]) -> Comparison {
    let p = best_value(player).value;
    let d = best_value(dealer).value;

    let result = if p > 21 {
        HandOutcome::Loss
    } else if d > 21 || p > d {
        HandOutcome::Win
    } else if p < d {
        HandOutcome::Loss
    } else {
        HandOutcome::Push
    };

    Comparison {
        result,
        player: p,
        dealer: d,
    }
}

/// Computes the signed net chip delta for a settled round.
///
/// A blackjack pays 3:2 (floored); a regular win pays even money; a push
/// returns the bet; a loss forfeits it.
///
/// # Example
///
/// ```
/// use twentyone::{RoundOutcome, chips_won};
///
/// assert_eq!(chips_won(100, RoundOutcome::Blackjack), 150);
/// assert_eq!(chips_won(100, RoundOutcome::Win), 100);
/// assert_eq!(chips_won(100, RoundOutcome::Push), 0);
/// assert_eq!(chips_won(100, RoundOutcome::Loss), -100);
/// ```
#[must_use]
pub const fn chips_won(bet: usize, outcome: RoundOutcome) -> isize {
    match outcome {
        RoundOutcome::Blackjack => (bet + bet / 2) as isize,
        RoundOutcome::Win => bet as isize,
        RoundOutcome::Push => 0,
        RoundOutcome::Loss => -(bet as isize),
    }
}

/// Classifies a finished round from pre-computed hand facts.
///
/// Two-sided naturals push before anything else; a one-sided natural
/// decides the round; busts are checked next; otherwise the values are
/// compared.
#[must_use]
pub const fn determine_outcome(
    player_score: u16,
    dealer_score: u16,
    player_blackjack: bool,
    dealer_blackjack: bool,
    player_busted: bool,
    dealer_busted: bool,
) -> RoundOutcome {
    if player_blackjack && dealer_blackjack {
        return RoundOutcome::Push;
    }
    if player_blackjack {
        return RoundOutcome::Blackjack;
    }
    if dealer_blackjack {
        return RoundOutcome::Loss;
    }
    if player_busted {
        return RoundOutcome::Loss;
    }
    if dealer_busted {
        return RoundOutcome::Win;
    }
    if player_score > dealer_score {
        RoundOutcome::Win
    } else if player_score < dealer_score {
        RoundOutcome::Loss
    } else {
        RoundOutcome::Push
    }
}

/// Record of a settled round, handed to the persistence layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Settlement {
    /// The classified outcome.
    pub result: RoundOutcome,
    /// The player's final hand value.
    pub player_score: u16,
    /// The dealer's final hand value.
    pub dealer_score: u16,
    /// The bet the round was played for.
    pub bet: usize,
    /// Signed net chip change for the round.
    pub chips_won: isize,
}
