//! Round result types for settlement.

extern crate alloc;

use alloc::vec::Vec;

use crate::card::Card;
use crate::game::GameState;

/// Result of a settled round.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoundResult {
    /// Final game state (`PlayerWon`, `DealerWon` or `Draw`).
    pub state: GameState,
    /// The bet that was staked on the round.
    pub bet: i64,
    /// Amount credited back to the account at settlement.
    pub payout: i64,
    /// The player's best total, `None` if bust.
    pub player_total: Option<u8>,
    /// The dealer's best total, `None` if bust.
    pub dealer_total: Option<u8>,
    /// Cards the dealer drew after revealing the hole card.
    pub dealer_drawn: Vec<Card>,
}

impl RoundResult {
    /// Net change to the account over the round (payout minus stake).
    ///
    /// Wraps on overflow, like the account itself.
    #[must_use]
    pub const fn net(&self) -> i64 {
        self.payout.wrapping_sub(self.bet)
    }
}
