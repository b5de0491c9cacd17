//! Hand representation and ace-flexible scoring.

use serde::{Deserialize, Serialize};

use crate::card::Card;

/// The best score attainable by a hand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Score {
    /// The best non-busting total, or the minimal busting total if every
    /// ace assignment goes over 21.
    pub value: u16,
    /// Whether the total counts an ace as 11. Always `false` for a bust.
    #[serde(rename = "isSoft")]
    pub is_soft: bool,
}

/// Computes the best attainable score for a sequence of cards.
///
/// Every total reachable by choosing each ace as 1 or 11 is tracked, so
/// hands with multiple aces are scored correctly. The best total at or
/// under 21 wins; if none exists the minimal busting total is reported.
///
/// An empty hand scores zero and is not soft.
///
/// # Example
///
/// ```
/// use twentyone::{Card, Rank, Suit, best_value};
///
/// let hand = [
///     Card::new(Rank::Ace, Suit::Spades),
///     Card::new(Rank::Six, Suit::Hearts),
/// ];
/// let score = best_value(&hand);
/// assert_eq!(score.value, 17);
/// assert!(score.is_soft);
/// ```
#[must_use]
pub fn best_value(cards: &[Card]) -> Score {
    let mut totals: Vec<u16> = vec![0];

    for card in cards {
        let mut next = Vec::with_capacity(totals.len() * 2);
        for &total in &totals {
            for &value in card.rank.values() {
                next.push(total + u16::from(value));
            }
        }
        next.sort_unstable();
        next.dedup();
        totals = next;
    }

    // Sorted ascending, so the best non-busting total is the last one <= 21
    // and the minimal busting total is the first element overall.
    if let Some(&best) = totals.iter().rfind(|&&t| t <= 21) {
        // The winning total counts an ace as 11 exactly when the same hand
        // also reaches the total 10 below it with that ace as 1.
        let is_soft = best >= 10 && totals.contains(&(best - 10));
        Score {
            value: best,
            is_soft,
        }
    } else {
        Score {
            value: totals[0],
            is_soft: false,
        }
    }
}

/// Returns whether a sequence of cards is bust (best value over 21).
#[must_use]
pub fn is_bust(cards: &[Card]) -> bool {
    best_value(cards).value > 21
}

/// An ordered sequence of cards in deal order.
///
/// Order does not affect the score but is preserved for display.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Hand {
    cards: Vec<Card>,
}

impl Hand {
    /// Creates a new empty hand.
    #[must_use]
    pub const fn new() -> Self {
        Self { cards: Vec::new() }
    }

    /// Adds a card to the hand.
    pub fn add_card(&mut self, card: Card) {
        self.cards.push(card);
    }

    /// Returns the cards in the hand, in deal order.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Computes the best score for the hand.
    #[must_use]
    pub fn score(&self) -> Score {
        best_value(&self.cards)
    }

    /// Returns whether the hand is bust.
    #[must_use]
    pub fn is_bust(&self) -> bool {
        is_bust(&self.cards)
    }

    /// Returns whether the hand is a natural blackjack (exactly two cards
    /// scoring 21).
    #[must_use]
    pub fn is_natural(&self) -> bool {
        self.cards.len() == 2 && self.score().value == 21
    }

    /// Returns the number of cards in the hand.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the hand is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Removes all cards for a new round.
    pub fn clear(&mut self) {
        self.cards.clear();
    }

    /// Replaces the hand's cards with a played-out sequence.
    pub(crate) fn replace(&mut self, cards: Vec<Card>) {
        self.cards = cards;
    }
}

impl From<Vec<Card>> for Hand {
    fn from(cards: Vec<Card>) -> Self {
        Self { cards }
    }
}
