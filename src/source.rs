//! Card sources.
//!
//! Cards are drawn with replacement from an infinite standard deck, so a
//! source holds no shoe state and can never run out. Sources are injected
//! into the dealer policy and the round state machine, which lets tests
//! supply deterministic sequences.

use std::collections::VecDeque;

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::card::{ALL_RANKS, ALL_SUITS, Card};

/// Produces single cards, independently and uniformly at random over the
/// 52 rank-suit combinations.
pub trait CardSource {
    /// Draws one card.
    fn draw(&mut self) -> Card;
}

/// A uniform random card source backed by a seeded ChaCha RNG.
#[derive(Debug, Clone)]
pub struct RandomSource {
    rng: ChaCha8Rng,
}

impl RandomSource {
    /// Creates a new source with the given seed.
    ///
    /// # Example
    ///
    /// ```
    /// use twentyone::{CardSource, RandomSource};
    ///
    /// let mut source = RandomSource::new(42);
    /// let card = source.draw();
    /// assert!(card.rank.values()[0] >= 1);
    /// ```
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }
}

impl CardSource for RandomSource {
    fn draw(&mut self) -> Card {
        let rank = ALL_RANKS[self.rng.random_range(0..ALL_RANKS.len())];
        let suit = ALL_SUITS[self.rng.random_range(0..ALL_SUITS.len())];
        Card::with_id(rank, suit, self.rng.random())
    }
}

/// A source that replays a fixed sequence of cards.
///
/// Used by tests and demos to script exact deals.
#[derive(Debug, Clone, Default)]
pub struct SequenceSource {
    cards: VecDeque<Card>,
}

impl SequenceSource {
    /// Creates a source that yields the given cards in order.
    #[must_use]
    pub fn new(cards: impl Into<VecDeque<Card>>) -> Self {
        Self {
            cards: cards.into(),
        }
    }

    /// Returns the number of cards left in the sequence.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.cards.len()
    }
}

impl CardSource for SequenceSource {
    /// # Panics
    ///
    /// Panics if the sequence is exhausted.
    fn draw(&mut self) -> Card {
        self.cards
            .pop_front()
            .expect("sequence source is exhausted")
    }
}
