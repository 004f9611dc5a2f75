//! The shoe of undealt cards.

extern crate alloc;

use alloc::collections::VecDeque;
use alloc::vec::Vec;

use rand::Rng;
use rand::seq::SliceRandom;

use crate::card::{Card, DECK_SIZE, Suit};

/// The live sequence of undealt cards for the current round.
///
/// Cards are drawn from the front.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Shoe {
    cards: VecDeque<Card>,
}

impl Shoe {
    /// Builds `decks` full decks and shuffles them with `rng`.
    ///
    /// The same generator state always produces the same order.
    #[must_use]
    pub fn new<R: Rng + ?Sized>(decks: u8, rng: &mut R) -> Self {
        let mut cards = Vec::with_capacity(decks as usize * DECK_SIZE);

        for _ in 0..decks {
            for suit in Suit::ALL {
                for rank in 1..=13 {
                    cards.push(Card::new(suit, rank));
                }
            }
        }

        cards.shuffle(rng);
        Self {
            cards: cards.into(),
        }
    }

    /// Builds a prearranged shoe. The first card is drawn first.
    #[must_use]
    pub fn from_cards(cards: impl IntoIterator<Item = Card>) -> Self {
        Self {
            cards: cards.into_iter().collect(),
        }
    }

    /// Removes and returns the front card.
    pub fn draw(&mut self) -> Option<Card> {
        self.cards.pop_front()
    }

    /// Returns the number of cards remaining.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the shoe is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Returns a copy of the remaining cards in draw order.
    #[must_use]
    pub fn snapshot(&self) -> Vec<Card> {
        self.cards.iter().copied().collect()
    }
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    use super::*;

    #[test]
    fn builds_every_card_per_deck() {
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        let shoe = Shoe::new(2, &mut rng);
        assert_eq!(shoe.len(), 2 * DECK_SIZE);

        let cards = shoe.snapshot();
        for suit in Suit::ALL {
            for rank in 1..=13 {
                let copies = cards
                    .iter()
                    .filter(|c| c.suit == suit && c.rank == rank)
                    .count();
                assert_eq!(copies, 2);
            }
        }
        assert!(cards.iter().all(Card::is_face_up));
    }

    #[test]
    fn same_seed_same_order() {
        let a = Shoe::new(1, &mut ChaCha8Rng::seed_from_u64(11));
        let b = Shoe::new(1, &mut ChaCha8Rng::seed_from_u64(11));
        let c = Shoe::new(1, &mut ChaCha8Rng::seed_from_u64(12));
        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn draws_from_the_front() {
        let first = Card::new(Suit::Clubs, 10);
        let second = Card::new(Suit::Hearts, 2);
        let mut shoe = Shoe::from_cards([first, second]);

        assert_eq!(shoe.draw(), Some(first));
        assert_eq!(shoe.snapshot(), alloc::vec![second]);
        assert_eq!(shoe.draw(), Some(second));
        assert_eq!(shoe.draw(), None);
        assert!(shoe.is_empty());
    }
}
