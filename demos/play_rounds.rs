//! Plays a batch of rounds and prints the narrated journal.

#![allow(clippy::missing_docs_in_private_items)]

use std::path::PathBuf;
use std::process::ExitCode;

use bjsolo::{Game, GameNumbers, SummaryWriter, TableOptions};
use clap::Parser;

#[derive(Parser)]
#[command(about = "Single-player blackjack against an automated dealer")]
struct Cli {
    /// Starting wallet.
    #[arg(long, default_value_t = 100)]
    wallet: i64,
    /// Number of rounds to play.
    #[arg(long, default_value_t = 5)]
    rounds: u32,
    /// Score at which the player stands.
    #[arg(long, default_value_t = 15)]
    stand: u16,
    /// Seed for the shuffle counts.
    #[arg(long, default_value_t = 20)]
    seed: u64,
    /// Number of games to play, each with its own summary file.
    #[arg(long, default_value_t = 1)]
    games: u32,
    /// Directory for game summaries; skipped when absent.
    #[arg(long)]
    out: Option<PathBuf>,
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    let mut numbers = GameNumbers::new();

    for offset in 0..u64::from(cli.games) {
        let number = numbers.next_number();
        let mut game = Game::new(TableOptions::default(), cli.wallet, cli.seed + offset);

        let result = match &cli.out {
            Some(dir) => match SummaryWriter::create(dir, number) {
                Ok(mut writer) => game.play_rounds(cli.rounds, cli.stand, &mut writer),
                Err(err) => {
                    log::error!("cannot create summary in {}: {err}", dir.display());
                    return ExitCode::FAILURE;
                }
            },
            None => game.play_rounds(cli.rounds, cli.stand, ()),
        };

        println!("=== Game {number} ===");
        println!("{}", game.log());

        match result {
            Ok(summary) => println!(
                "{:?} after {} rounds: wallet {}, bet {}, {} cards left",
                summary.termination,
                summary.rounds_played,
                summary.wallet,
                summary.bet,
                summary.cards_remaining
            ),
            Err(err) => {
                log::error!("game {number} aborted: {err}");
                return ExitCode::FAILURE;
            }
        }
    }

    ExitCode::SUCCESS
}
