//! Deterministic shuffling algorithms.
//!
//! Both shuffles are pure: they read a slice and return a freshly ordered
//! `Vec`, leaving the input untouched. The front of the sequence is the top
//! of the deck.

extern crate alloc;

use alloc::vec::Vec;

/// Named deck reordering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Shuffle {
    /// [`modified_overhand`].
    ModifiedOverhand,
    /// [`mongean`].
    Mongean,
}

impl Shuffle {
    /// Looks up a shuffle by name.
    ///
    /// Only `"modified_overhand"` is recognized; every other name, including
    /// misspellings, falls back to [`Shuffle::Mongean`].
    ///
    /// ```
    /// use bjsolo::Shuffle;
    ///
    /// assert_eq!(Shuffle::from_name("modified_overhand"), Shuffle::ModifiedOverhand);
    /// assert_eq!(Shuffle::from_name("mongean"), Shuffle::Mongean);
    /// assert_eq!(Shuffle::from_name("riffle"), Shuffle::Mongean);
    /// ```
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        if name == "modified_overhand" {
            Self::ModifiedOverhand
        } else {
            Self::Mongean
        }
    }

    /// Applies the shuffle with the given count.
    ///
    /// For the modified overhand the count is the size of the first block and
    /// shrinks by one per pass. For the mongean it is a repeat count.
    #[must_use]
    pub fn apply<T: Clone>(self, cards: &[T], count: usize) -> Vec<T> {
        match self {
            Self::ModifiedOverhand => modified_overhand(cards, count),
            Self::Mongean => (0..count).fold(cards.to_vec(), |acc, _| mongean(&acc)),
        }
    }
}

/// Moves a block of `count` cards from the middle to the top, then repeats
/// with one card fewer until the count reaches zero.
///
/// The block is centered on `len / 2`. When the length is even and the block
/// size odd, the extra card comes from just above the middle, so the block
/// starts one position lower.
///
/// ```
/// use bjsolo::modified_overhand;
///
/// let cards: Vec<u8> = (0..52).collect();
/// let shuffled = modified_overhand(&cards, 1);
/// assert_eq!(shuffled[0], 25);
/// assert_eq!(shuffled[25], 24);
/// assert_eq!(modified_overhand(&cards, 0), cards);
/// ```
#[must_use]
pub fn modified_overhand<T: Clone>(cards: &[T], count: usize) -> Vec<T> {
    let mut work = cards.to_vec();

    for n in (1..=count).rev() {
        let len = work.len();
        let extra = usize::from(len % 2 == 0 && n % 2 == 1);
        let start = (len / 2).saturating_sub(n / 2 + extra);
        let end = (start + n).min(len);

        // Moving [start, end) to the front is a right rotation of the prefix.
        work[..end].rotate_right(end - start);
    }

    work
}

/// Deals alternate cards onto two piles and stacks the reversed odd pile on
/// top of the even pile.
///
/// Twelve applications restore a 52-card deck.
///
/// ```
/// use bjsolo::mongean;
///
/// assert_eq!(mongean(&[0, 1, 2, 3, 4, 5]), vec![5, 3, 1, 0, 2, 4]);
/// ```
#[must_use]
pub fn mongean<T: Clone>(cards: &[T]) -> Vec<T> {
    let odd = cards.iter().skip(1).step_by(2).rev();
    let even = cards.iter().step_by(2);
    odd.chain(even).cloned().collect()
}
