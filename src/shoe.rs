//! The multi-deck shoe cards are drawn from.

use rand::SeedableRng;
use rand::seq::SliceRandom;
use rand_chacha::ChaCha8Rng;

use crate::card::{Card, DECK_SIZE, Suit};
use crate::error::ConfigError;

/// A shuffled, self-replenishing stack of one or more decks.
///
/// Cards are drawn from the back of the vector; the draw order is the
/// shuffle order. An exhausted shoe rebuilds and reshuffles itself before
/// the next draw, so drawing never fails.
#[derive(Debug, Clone)]
pub struct Shoe {
    /// Cards remaining in the shoe, drawn from the back.
    pub cards: Vec<Card>,
    /// Number of decks the shoe is built from.
    decks: u8,
    /// Random number generator used for shuffling.
    rng: ChaCha8Rng,
}

impl Shoe {
    /// Creates a new shuffled shoe with the given seed.
    ///
    /// # Errors
    ///
    /// Returns an error if `decks` is zero.
    pub fn new(decks: u8, seed: u64) -> Result<Self, ConfigError> {
        if decks == 0 {
            return Err(ConfigError::DeckCount);
        }

        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let cards = Self::build(decks, &mut rng);

        Ok(Self { cards, decks, rng })
    }

    /// Builds and shuffles a fresh stack of `decks` decks.
    fn build(decks: u8, rng: &mut ChaCha8Rng) -> Vec<Card> {
        let mut cards = Vec::with_capacity(decks as usize * DECK_SIZE);

        for _ in 0..decks {
            for suit in Suit::ALL {
                for rank in 1..=13 {
                    cards.push(Card::new(suit, rank));
                }
            }
        }

        cards.shuffle(rng);
        cards
    }

    /// Draws one card, rebuilding the shoe first if it is empty.
    pub fn draw(&mut self) -> Card {
        if let Some(card) = self.cards.pop() {
            return card;
        }

        self.cards = Self::build(self.decks, &mut self.rng);
        self.cards
            .pop()
            .expect("a rebuilt shoe holds at least one full deck")
    }

    /// Returns the number of cards remaining.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.cards.len()
    }
}
