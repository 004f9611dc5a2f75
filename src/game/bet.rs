use tracing::debug;

use crate::error::DealError;
use crate::shoe::Shoe;

use super::{Game, GameState};

/// Cards needed for the opening deal.
const OPENING_CARDS: usize = 4;

impl<R: rand::Rng> Game<R> {
    /// Sets the bet staked on each deal.
    ///
    /// No range check is made. Account arithmetic wraps on `i64` overflow
    /// instead of panicking.
    pub const fn set_bet(&mut self, amount: i64) {
        self.bet = amount;
    }

    /// Returns the bet staked on each deal.
    pub const fn bet(&self) -> i64 {
        self.bet
    }

    /// Sets the account balance.
    pub const fn set_account(&mut self, amount: i64) {
        self.account = amount;
    }

    /// Returns the account balance.
    pub const fn account(&self) -> i64 {
        self.account
    }

    /// Builds and shuffles a fresh shoe, then deals a new round.
    ///
    /// Any round in progress is discarded. See [`deal_from`](Self::deal_from)
    /// for the deal order.
    ///
    /// # Errors
    ///
    /// Returns an error if the game is configured with zero decks.
    pub fn deal(&mut self) -> Result<(), DealError> {
        if self.options.decks == 0 {
            return Err(DealError::NoDecks);
        }

        let shoe = Shoe::new(self.options.decks, &mut self.rng);
        self.deal_from(shoe)
    }

    /// Deals a new round from a prearranged shoe.
    ///
    /// Cards go player (up), dealer (down), player (up), dealer (up). The
    /// game moves to [`GameState::InProgress`] and the bet is taken from the
    /// account, whatever the balance.
    ///
    /// # Errors
    ///
    /// Returns an error if the shoe holds fewer than four cards.
    pub fn deal_from(&mut self, shoe: Shoe) -> Result<(), DealError> {
        if shoe.len() < OPENING_CARDS {
            return Err(DealError::NotEnoughCards);
        }

        self.shoe = shoe;
        self.player.clear();
        self.dealer.clear();
        self.last_result = None;

        let card = self.draw().ok_or(DealError::NotEnoughCards)?;
        self.player.add_card(card);

        // Hole card
        let card = self.draw().ok_or(DealError::NotEnoughCards)?;
        self.dealer.add_card(card.turned_down());

        let card = self.draw().ok_or(DealError::NotEnoughCards)?;
        self.player.add_card(card);

        let card = self.draw().ok_or(DealError::NotEnoughCards)?;
        self.dealer.add_card(card);

        self.state = GameState::InProgress;
        self.account = self.account.wrapping_sub(self.bet);

        debug!(
            bet = self.bet,
            account = self.account,
            remaining = self.shoe.len(),
            "dealt new round"
        );

        Ok(())
    }
}
