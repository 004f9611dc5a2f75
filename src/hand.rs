//! Hand representation and scoring.

extern crate alloc;

use alloc::vec::Vec;

use crate::card::Card;

/// Legal totals (21 or under) of a hand.
///
/// An ace may count as 1 or 11, so a hand can have two legal totals. They are
/// kept in ascending order; the last one is the best.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Totals {
    /// No legal total.
    Bust,
    /// One or two legal totals, ascending.
    Values(Vec<u8>),
}

impl Totals {
    /// Returns the highest legal total, or `None` on a bust.
    #[must_use]
    pub fn best(&self) -> Option<u8> {
        match self {
            Self::Bust => None,
            Self::Values(values) => values.last().copied(),
        }
    }

    /// Returns the legal totals, empty on a bust.
    #[must_use]
    pub fn values(&self) -> &[u8] {
        match self {
            Self::Bust => &[],
            Self::Values(values) => values,
        }
    }

    /// Returns whether there is no legal total.
    #[must_use]
    pub const fn is_bust(&self) -> bool {
        matches!(self, Self::Bust)
    }
}

/// Standing of a hand.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Evaluation {
    /// Over 21 however the aces are counted.
    Bust,
    /// Still alive below 21.
    LessThan21,
    /// Exactly 21 with more than two cards.
    Has21,
    /// Natural 21 on the first two cards.
    Blackjack,
}

/// Computes the legal totals of `cards`.
///
/// Aces are summed as 1; at most one ace is promoted to 11.
#[must_use]
pub fn totals(cards: &[Card]) -> Totals {
    let low: u32 = cards.iter().map(|card| u32::from(card.value())).sum();
    let has_ace = cards.iter().any(Card::is_ace);

    if low > 21 {
        return Totals::Bust;
    }
    let low = low as u8;

    if has_ace && low + 10 <= 21 {
        Totals::Values(alloc::vec![low, low + 10])
    } else {
        Totals::Values(alloc::vec![low])
    }
}

/// Classifies `cards` by their best total.
#[must_use]
pub fn evaluate(cards: &[Card]) -> Evaluation {
    match totals(cards).best() {
        None => Evaluation::Bust,
        Some(21) if cards.len() == 2 => Evaluation::Blackjack,
        Some(21) => Evaluation::Has21,
        Some(_) => Evaluation::LessThan21,
    }
}

/// A hand of cards held by the player or the dealer.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
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

    /// Returns the cards in the hand.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Turns every face-down card face up.
    pub fn reveal(&mut self) {
        for card in &mut self.cards {
            card.flip_up();
        }
    }

    /// Returns whether any card is still face down.
    #[must_use]
    pub fn has_hidden(&self) -> bool {
        self.cards.iter().any(|card| !card.is_face_up())
    }

    /// Returns the legal totals of the hand.
    #[must_use]
    pub fn totals(&self) -> Totals {
        totals(&self.cards)
    }

    /// Returns the best legal total, or `None` when bust.
    #[must_use]
    pub fn best_total(&self) -> Option<u8> {
        self.totals().best()
    }

    /// Returns the standing of the hand.
    #[must_use]
    pub fn evaluation(&self) -> Evaluation {
        evaluate(&self.cards)
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

    /// Clears the hand for a new round.
    pub fn clear(&mut self) {
        self.cards.clear();
    }
}
