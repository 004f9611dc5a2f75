//! Game configuration options.

/// Configuration options for a blackjack game.
///
/// Use the builder pattern to customize options:
///
/// ```
/// use bjcore::GameOptions;
///
/// let options = GameOptions::default()
///     .with_decks(6)
///     .with_account(1_000)
///     .with_bet(25);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GameOptions {
    /// Number of decks in the shoe.
    pub decks: u8,
    /// Starting account balance.
    pub account: i64,
    /// Starting bet for each round.
    pub bet: i64,
}

impl Default for GameOptions {
    fn default() -> Self {
        Self {
            decks: 1,
            account: 200,
            bet: 5,
        }
    }
}

impl GameOptions {
    /// Sets the number of decks.
    ///
    /// # Example
    ///
    /// ```
    /// use bjcore::GameOptions;
    ///
    /// let options = GameOptions::default().with_decks(6);
    /// assert_eq!(options.decks, 6);
    /// ```
    #[must_use]
    pub const fn with_decks(mut self, decks: u8) -> Self {
        self.decks = decks;
        self
    }

    /// Sets the starting account balance.
    ///
    /// # Example
    ///
    /// ```
    /// use bjcore::GameOptions;
    ///
    /// let options = GameOptions::default().with_account(500);
    /// assert_eq!(options.account, 500);
    /// ```
    #[must_use]
    pub const fn with_account(mut self, account: i64) -> Self {
        self.account = account;
        self
    }

    /// Sets the starting bet.
    ///
    /// # Example
    ///
    /// ```
    /// use bjcore::GameOptions;
    ///
    /// let options = GameOptions::default().with_bet(10);
    /// assert_eq!(options.bet, 10);
    /// ```
    #[must_use]
    pub const fn with_bet(mut self, bet: i64) -> Self {
        self.bet = bet;
        self
    }
}
