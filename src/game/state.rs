//! Game state types.

/// Game state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GameState {
    /// No round has been dealt yet.
    #[default]
    NotStarted,
    /// Cards are dealt and the player may hit or stand.
    InProgress,
    /// Round over, the player won.
    PlayerWon,
    /// Round over, the dealer won (including a player bust).
    DealerWon,
    /// Round over, stake returned.
    Draw,
}

impl GameState {
    /// Returns whether the round has been settled.
    #[must_use]
    pub const fn is_over(self) -> bool {
        matches!(self, Self::PlayerWon | Self::DealerWon | Self::Draw)
    }
}
