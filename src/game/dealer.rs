use alloc::vec::Vec;
use tracing::{debug, info};

use crate::card::Card;
use crate::error::ActionError;
use crate::result::RoundResult;

use super::{Game, GameState};

/// The dealer draws while the best total is at or below this.
const DEALER_DRAWS_TO: u8 = 15;

impl<R: rand::Rng> Game<R> {
    /// Dealer plays their hand according to the rules.
    ///
    /// The dealer reveals the hole card and draws while the best legal total
    /// is 15 or less, standing on any total of 16 or more. Soft and hard
    /// totals are treated alike.
    ///
    /// Returns the cards drawn by the dealer.
    ///
    /// # Errors
    ///
    /// Returns an error if the shoe runs out while the dealer must draw. The
    /// shoe and the dealer's hand are then left as they were, hole card down.
    pub(super) fn dealer_play(&mut self) -> Result<Vec<Card>, ActionError> {
        let mut dealer = self.dealer.clone();
        let mut shoe = self.shoe.clone();
        dealer.reveal();

        let mut drawn_cards = Vec::new();

        while let Some(total) = dealer.best_total() {
            if total > DEALER_DRAWS_TO {
                break;
            }

            let card = shoe.draw().ok_or(ActionError::NoCards)?;
            debug!(total, card = %card, "dealer draws");
            dealer.add_card(card);
            drawn_cards.push(card);
        }

        self.dealer = dealer;
        self.shoe = shoe;
        Ok(drawn_cards)
    }

    /// Compares the hands, credits the account and ends the round.
    pub(super) fn settle(&mut self, dealer_drawn: Vec<Card>) -> RoundResult {
        let player_total = self.player.best_total();
        let dealer_total = self.dealer.best_total();

        let (state, payout) = match (player_total, dealer_total) {
            // Dealer busts, player wins
            (_, None) => (GameState::PlayerWon, self.bet.wrapping_mul(2)),
            (None, Some(_)) => (GameState::DealerWon, 0),
            (Some(player), Some(dealer)) if player > dealer => {
                (GameState::PlayerWon, self.bet.wrapping_mul(2))
            }
            (Some(player), Some(dealer)) if player < dealer => (GameState::DealerWon, 0),
            // Push - return original bet
            (Some(_), Some(_)) => (GameState::Draw, self.bet),
        };

        self.account = self.account.wrapping_add(payout);
        self.finish(RoundResult {
            state,
            bet: self.bet,
            payout,
            player_total,
            dealer_total,
            dealer_drawn,
        })
    }

    /// Records a settled round.
    pub(super) fn finish(&mut self, result: RoundResult) -> RoundResult {
        self.state = result.state;

        info!(
            state = ?result.state,
            payout = result.payout,
            account = self.account,
            player_total = ?result.player_total,
            dealer_total = ?result.dealer_total,
            "round settled"
        );

        self.last_result = Some(result.clone());
        result
    }
}
