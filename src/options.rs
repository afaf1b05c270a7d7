//! Table configuration options.

/// Configuration options for a blackjack table.
///
/// Use the builder pattern to customize options:
///
/// ```
/// use bjsolo::TableOptions;
///
/// let options = TableOptions::default()
///     .with_base_bet(10)
///     .with_bet_increment(10)
///     .with_dealer_stand_threshold(16);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TableOptions {
    /// Bet for the first round, and the value the bet resets to when play stops.
    pub base_bet: i64,
    /// Amount the bet grows after a win and shrinks after a loss.
    pub bet_increment: i64,
    /// Fewest cards the deck must hold for a round to start; never below four.
    pub min_cards: usize,
    /// Score at which the dealer stops drawing.
    pub dealer_stand_threshold: u16,
    /// Upper bound (inclusive) of each random per-round shuffle count.
    pub max_shuffle_count: usize,
}

impl Default for TableOptions {
    fn default() -> Self {
        Self {
            base_bet: 5,
            bet_increment: 5,
            min_cards: 4,
            dealer_stand_threshold: 17,
            max_shuffle_count: 4,
        }
    }
}

impl TableOptions {
    /// Sets the base bet.
    ///
    /// # Example
    ///
    /// ```
    /// use bjsolo::TableOptions;
    ///
    /// let options = TableOptions::default().with_base_bet(25);
    /// assert_eq!(options.base_bet, 25);
    /// ```
    #[must_use]
    pub const fn with_base_bet(mut self, bet: i64) -> Self {
        self.base_bet = bet;
        self
    }

    /// Sets the bet increment.
    #[must_use]
    pub const fn with_bet_increment(mut self, increment: i64) -> Self {
        self.bet_increment = increment;
        self
    }

    /// Sets the minimum number of cards needed to start a round.
    ///
    /// Values below the four opening cards behave like four.
    ///
    /// # Example
    ///
    /// ```
    /// use bjsolo::TableOptions;
    ///
    /// let options = TableOptions::default().with_min_cards(10);
    /// assert_eq!(options.min_cards, 10);
    /// ```
    #[must_use]
    pub const fn with_min_cards(mut self, cards: usize) -> Self {
        self.min_cards = cards;
        self
    }

    /// Sets the score at which the dealer stands.
    #[must_use]
    pub const fn with_dealer_stand_threshold(mut self, threshold: u16) -> Self {
        self.dealer_stand_threshold = threshold;
        self
    }

    /// Sets the largest random shuffle count drawn before each round.
    ///
    /// Zero disables the pre-round shuffle.
    #[must_use]
    pub const fn with_max_shuffle_count(mut self, count: usize) -> Self {
        self.max_shuffle_count = count;
        self
    }
}
