//! Game configuration options.

/// Configuration options for a game session.
///
/// Use the builder pattern to customize options:
///
/// ```
/// use twentyone::GameOptions;
///
/// let options = GameOptions::default()
///     .with_chips(250.0)
///     .with_decks(6)
///     .with_stand_on_soft_17(false);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct GameOptions {
    /// Starting chip balance.
    pub chips: f64,
    /// Number of decks in the shoe.
    pub decks: u8,
    /// Whether the dealer stands on soft 17.
    pub stand_on_soft_17: bool,
}

impl Default for GameOptions {
    fn default() -> Self {
        Self {
            chips: 1000.0,
            decks: 4,
            stand_on_soft_17: true,
        }
    }
}

impl GameOptions {
    /// Sets the starting chip balance.
    ///
    /// # Example
    ///
    /// ```
    /// use twentyone::GameOptions;
    ///
    /// let options = GameOptions::default().with_chips(500.0);
    /// assert_eq!(options.chips, 500.0);
    /// ```
    #[must_use]
    pub const fn with_chips(mut self, chips: f64) -> Self {
        self.chips = chips;
        self
    }

    /// Sets the number of decks in the shoe.
    ///
    /// # Example
    ///
    /// ```
    /// use twentyone::GameOptions;
    ///
    /// let options = GameOptions::default().with_decks(6);
    /// assert_eq!(options.decks, 6);
    /// ```
    #[must_use]
    pub const fn with_decks(mut self, decks: u8) -> Self {
        self.decks = decks;
        self
    }

    /// Sets whether the dealer stands on soft 17.
    ///
    /// # Example
    ///
    /// ```
    /// use twentyone::GameOptions;
    ///
    /// let options = GameOptions::default().with_stand_on_soft_17(false);
    /// assert_eq!(options.stand_on_soft_17, false);
    /// ```
    #[must_use]
    pub const fn with_stand_on_soft_17(mut self, stand: bool) -> Self {
        self.stand_on_soft_17 = stand;
        self
    }
}
