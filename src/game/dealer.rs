//! Automated dealer play.

use crate::card::Card;
use crate::hand::best_value;
use crate::source::CardSource;

/// Maximum number of cards a dealer hand may grow to.
///
/// Unreachable when drawing from a standard 13-rank deck, but enforced so
/// dealer play terminates even against a misbehaving source.
pub const DEALER_HAND_LIMIT: usize = 12;

/// Plays out the dealer's hand: hit on 16 or below, stand on 17 or better.
///
/// The dealer stands on any total of 17 through 21 and on any bust total,
/// with no soft-17 distinction. Returns the final hand, initial cards
/// included, in draw order.
///
/// # Example
///
/// ```
/// use twentyone::{Card, Rank, SequenceSource, Suit, best_value, dealer_play};
///
/// let initial = [Card::new(Rank::Six, Suit::Spades)];
/// let mut source = SequenceSource::new(vec![
///     Card::new(Rank::Ten, Suit::Hearts),
///     Card::new(Rank::Five, Suit::Clubs),
/// ]);
/// let hand = dealer_play(&initial, &mut source);
/// assert_eq!(best_value(&hand).value, 21);
/// ```
#[must_use]
pub fn dealer_play<S: CardSource>(initial: &[Card], source: &mut S) -> Vec<Card> {
    let mut cards = initial.to_vec();

    while best_value(&cards).value < 17 && cards.len() < DEALER_HAND_LIMIT {
        cards.push(source.draw());
    }

    cards
}
