//! Hand representation and value queries.

use core::fmt;

use crate::card::Card;

/// An ordered sequence of cards held by a participant.
///
/// All value queries are pure derivations over the card sequence; nothing is
/// cached between calls.
#[derive(Debug, Clone, Default)]
pub struct Hand {
    /// Cards in the hand.
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

    /// Empties the hand for a new round.
    pub fn reset(&mut self) {
        self.cards.clear();
    }

    /// Returns the cards in the hand.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
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

    /// Calculates the `(low, high)` value pair of the hand.
    ///
    /// The low total counts every ace as 1. The high total promotes one ace
    /// to 11 when that still fits under 21; otherwise both totals are equal.
    #[must_use]
    pub fn value(&self) -> (u8, u8) {
        let mut total: u8 = 0;
        let mut aces: u8 = 0;

        for card in &self.cards {
            if card.is_ace() {
                aces += 1;
            } else {
                total = total.saturating_add(card.value());
            }
        }

        let low = total.saturating_add(aces);
        let high = if aces > 0 { low.saturating_add(10) } else { low };

        if high > 21 { (low, low) } else { (low, high) }
    }

    /// Returns the best value of the hand: the high total when it fits under
    /// 21, the low total otherwise.
    #[must_use]
    pub fn best_value(&self) -> u8 {
        let (low, high) = self.value();
        if high <= 21 { high } else { low }
    }

    /// Formats the hand value for display: `"7"`, or `"7/17"` while an ace
    /// can still count as 11.
    #[must_use]
    pub fn display_value(&self) -> String {
        let (low, high) = self.value();
        if low == high {
            low.to_string()
        } else {
            format!("{low}/{high}")
        }
    }

    /// Returns whether the hand is a blackjack (a natural two-card 21).
    #[must_use]
    pub fn is_blackjack(&self) -> bool {
        self.cards.len() == 2 && self.best_value() == 21
    }

    /// Returns whether the hand is bust (over 21).
    #[must_use]
    pub fn is_bust(&self) -> bool {
        self.best_value() > 21
    }

    /// Returns whether the hand is soft (contains an ace counted as 11).
    #[must_use]
    pub fn is_soft(&self) -> bool {
        let (low, high) = self.value();
        high != low
    }

    /// Returns whether the hand may take another card.
    #[must_use]
    pub fn can_hit(&self) -> bool {
        self.best_value() < 21
    }

    /// Returns whether the hand is a pair of equal-ranked cards.
    #[must_use]
    pub fn is_pair(&self) -> bool {
        self.cards.len() == 2 && self.cards[0].rank == self.cards[1].rank
    }
}

impl fmt::Display for Hand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut cards = self.cards.iter();
        if let Some(first) = cards.next() {
            write!(f, "{first}")?;
            for card in cards {
                write!(f, " {card}")?;
            }
        }
        Ok(())
    }
}
