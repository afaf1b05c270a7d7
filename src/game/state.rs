//! Round phase types.

/// Phase of the round controller.
///
/// A round moves strictly forward through
/// `Dealing -> PlayerTurn -> DealerReveal -> DealerTurn -> Resolve`, and
/// returns to `Idle` between rounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RoundPhase {
    /// No round in progress.
    Idle,
    /// Shuffling and dealing the opening hands.
    Dealing,
    /// The player draws toward their stand threshold.
    PlayerTurn,
    /// The dealer turns their hidden cards over.
    DealerReveal,
    /// The dealer draws toward the dealer threshold.
    DealerTurn,
    /// Scores are compared and the bet settled.
    Resolve,
}
