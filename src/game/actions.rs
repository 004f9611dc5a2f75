use alloc::vec::Vec;
use tracing::debug;

use crate::card::Card;
use crate::error::ActionError;
use crate::hand::Evaluation;
use crate::result::RoundResult;

use super::{Game, GameState};

impl<R: rand::Rng> Game<R> {
    fn ensure_in_progress(&self) -> Result<(), ActionError> {
        if self.state != GameState::InProgress {
            return Err(ActionError::InvalidState);
        }
        Ok(())
    }

    /// Player action: Hit (draw a card).
    ///
    /// If the player busts, the dealer's hole card is revealed and the round
    /// ends with [`GameState::DealerWon`]; the bet taken at the deal is lost.
    /// Otherwise the round stays in progress.
    ///
    /// Returns the card drawn.
    ///
    /// # Errors
    ///
    /// Returns an error if no round is in progress or the shoe is empty.
    pub fn hit(&mut self) -> Result<Card, ActionError> {
        self.ensure_in_progress()?;

        let card = self.draw().ok_or(ActionError::NoCards)?;
        self.player.add_card(card);
        debug!(card = %card, total = ?self.player.best_total(), "player hits");

        if self.player.evaluation() == Evaluation::Bust {
            self.dealer.reveal();
            self.finish(RoundResult {
                state: GameState::DealerWon,
                bet: self.bet,
                payout: 0,
                player_total: None,
                dealer_total: self.dealer.best_total(),
                dealer_drawn: Vec::new(),
            });
        }

        Ok(card)
    }

    /// Player action: Stand (keep current hand).
    ///
    /// The dealer plays out their hand, then the round is settled: a win pays
    /// twice the bet, a draw returns the bet, a loss pays nothing.
    ///
    /// # Errors
    ///
    /// Returns an error if no round is in progress or the shoe runs out while
    /// the dealer must draw.
    pub fn stand(&mut self) -> Result<RoundResult, ActionError> {
        self.ensure_in_progress()?;

        let drawn = self.dealer_play()?;
        Ok(self.settle(drawn))
    }
}
