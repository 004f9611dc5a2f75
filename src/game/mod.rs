//! Game engine and state management.

use alloc::vec::Vec;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::card::Card;
use crate::hand::{Evaluation, Hand, Totals};
use crate::options::GameOptions;
use crate::result::RoundResult;
use crate::shoe::Shoe;

mod actions;
mod bet;
mod dealer;
pub mod state;

pub use state::GameState;

/// A single-player blackjack engine.
///
/// The game owns the shoe, both hands, the account and the round state. The
/// random source is injected so a seeded generator replays the same shoes.
pub struct Game<R = ChaCha8Rng> {
    /// Options the game was created with.
    options: GameOptions,
    /// Cards in the shoe.
    shoe: Shoe,
    /// Player's hand.
    player: Hand,
    /// Dealer's hand. The first card is the hole card.
    dealer: Hand,
    /// Current game state.
    state: GameState,
    /// Account balance.
    account: i64,
    /// Bet staked on each deal.
    bet: i64,
    /// Settlement of the last finished round.
    last_result: Option<RoundResult>,
    /// Random number generator.
    rng: R,
}

impl Game<ChaCha8Rng> {
    /// Creates a new game with the given seed.
    ///
    /// # Example
    ///
    /// ```
    /// use bjcore::{Game, GameOptions, GameState};
    ///
    /// let game = Game::new(GameOptions::default(), 42);
    /// assert_eq!(game.account(), 200);
    /// assert_eq!(game.bet(), 5);
    /// assert_eq!(game.state(), GameState::NotStarted);
    /// ```
    #[must_use]
    pub fn new(options: GameOptions, seed: u64) -> Self {
        Self::with_rng(options, ChaCha8Rng::seed_from_u64(seed))
    }
}

impl<R: Rng> Game<R> {
    /// Creates a new game drawing its shuffles from `rng`.
    ///
    /// The shoe is not built until the first [`deal`](Self::deal).
    #[must_use]
    pub fn with_rng(options: GameOptions, rng: R) -> Self {
        Self {
            options,
            shoe: Shoe::default(),
            player: Hand::new(),
            dealer: Hand::new(),
            state: GameState::NotStarted,
            account: options.account,
            bet: options.bet,
            last_result: None,
            rng,
        }
    }

    /// Draws a card from the shoe.
    fn draw(&mut self) -> Option<Card> {
        self.shoe.draw()
    }

    /// Returns the current game state.
    pub const fn state(&self) -> GameState {
        self.state
    }

    /// Returns the options the game was created with.
    ///
    /// `account` and `bet` here are the starting values; see
    /// [`account`](Self::account) and [`bet`](Self::bet) for the live ones.
    pub const fn options(&self) -> &GameOptions {
        &self.options
    }

    /// Returns the number of decks the shoe is built from.
    pub const fn decks(&self) -> u8 {
        self.options.decks
    }

    /// Returns the number of cards remaining in the shoe.
    pub fn cards_remaining(&self) -> usize {
        self.shoe.len()
    }

    /// Returns a copy of the undealt cards in draw order.
    pub fn shoe(&self) -> Vec<Card> {
        self.shoe.snapshot()
    }

    /// Returns a copy of the player's cards.
    pub fn player_cards(&self) -> Vec<Card> {
        self.player.cards().to_vec()
    }

    /// Returns a copy of the dealer's cards, hole card as currently turned.
    pub fn dealer_cards(&self) -> Vec<Card> {
        self.dealer.cards().to_vec()
    }

    /// Returns the player's legal totals.
    pub fn player_totals(&self) -> Totals {
        self.player.totals()
    }

    /// Returns the dealer's legal totals, counting the hole card.
    pub fn dealer_totals(&self) -> Totals {
        self.dealer.totals()
    }

    /// Returns the standing of the player's hand.
    pub fn player_evaluation(&self) -> Evaluation {
        self.player.evaluation()
    }

    /// Returns the standing of the dealer's hand.
    pub fn dealer_evaluation(&self) -> Evaluation {
        self.dealer.evaluation()
    }

    /// Returns the settlement of the most recently finished round.
    ///
    /// Cleared by the next deal.
    pub const fn last_result(&self) -> Option<&RoundResult> {
        self.last_result.as_ref()
    }
}
