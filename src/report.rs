//! Round reporting and per-game summary files.

extern crate alloc;

use alloc::vec::Vec;

use crate::result::RoundRecord;

/// Receives a record after every resolved round.
pub trait RoundReporter {
    /// Handles one resolved round.
    fn record(&mut self, record: &RoundRecord);
}

/// Discards every record.
impl RoundReporter for () {
    fn record(&mut self, _record: &RoundRecord) {}
}

/// Collects records in memory.
impl RoundReporter for Vec<RoundRecord> {
    fn record(&mut self, record: &RoundRecord) {
        self.push(record.clone());
    }
}

impl<R: RoundReporter + ?Sized> RoundReporter for &mut R {
    fn record(&mut self, record: &RoundRecord) {
        (**self).record(record);
    }
}

/// Hands out sequential game numbers.
///
/// The owner decides the scope of the numbering; nothing is shared between
/// counters.
///
/// ```
/// use bjsolo::GameNumbers;
///
/// let mut numbers = GameNumbers::starting_at(2);
/// assert_eq!(numbers.next_number(), 2);
/// assert_eq!(numbers.next_number(), 3);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameNumbers {
    next: u32,
}

impl GameNumbers {
    /// Creates a counter whose first number is 1.
    #[must_use]
    pub const fn new() -> Self {
        Self::starting_at(1)
    }

    /// Creates a counter whose first number is `first`.
    #[must_use]
    pub const fn starting_at(first: u32) -> Self {
        Self { next: first }
    }

    /// Returns the next number and advances the counter.
    pub const fn next_number(&mut self) -> u32 {
        let number = self.next;
        self.next += 1;
        number
    }
}

impl Default for GameNumbers {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(feature = "std")]
pub use self::file::SummaryWriter;

#[cfg(feature = "std")]
mod file {
    use std::fs::{self, OpenOptions};
    use std::io::{self, Write};
    use std::path::{Path, PathBuf};

    use super::RoundReporter;
    use crate::render::ascii_cards;
    use crate::result::RoundRecord;

    /// Appends each round of one game to `game_summary{N}.txt`.
    ///
    /// Write failures are logged and counted; they never stop the game.
    #[derive(Debug)]
    pub struct SummaryWriter {
        path: PathBuf,
        failures: usize,
    }

    impl SummaryWriter {
        /// Creates a writer for game number `game` inside `dir`.
        ///
        /// The directory is created if needed and an existing summary for the
        /// same number is truncated.
        ///
        /// # Errors
        ///
        /// Returns an error if the directory or file cannot be created.
        pub fn create(dir: impl AsRef<Path>, game: u32) -> io::Result<Self> {
            let dir = dir.as_ref();
            fs::create_dir_all(dir)?;
            let path = dir.join(format!("game_summary{game}.txt"));
            fs::File::create(&path)?;
            Ok(Self { path, failures: 0 })
        }

        /// Returns the summary file path.
        #[must_use]
        pub fn path(&self) -> &Path {
            &self.path
        }

        /// Returns how many rounds could not be written.
        #[must_use]
        pub const fn failures(&self) -> usize {
            self.failures
        }

        fn append(&self, record: &RoundRecord) -> io::Result<()> {
            let mut file = OpenOptions::new().append(true).open(&self.path)?;
            writeln!(file, "ROUND {}", record.round)?;
            writeln!(file, "Player Hand:")?;
            writeln!(file, "{}", ascii_cards(&record.player_hand))?;
            writeln!(file, "Dealer Hand:")?;
            writeln!(file, "{}", ascii_cards(&record.dealer_hand))?;
            writeln!(
                file,
                "Winner of ROUND {}: {}",
                record.round,
                record.outcome.label()
            )?;
            writeln!(file)
        }
    }

    impl RoundReporter for SummaryWriter {
        fn record(&mut self, record: &RoundRecord) {
            if let Err(err) = self.append(record) {
                self.failures += 1;
                log::warn!(
                    "failed to write round {} to {}: {err}",
                    record.round,
                    self.path.display()
                );
            }
        }
    }
}
