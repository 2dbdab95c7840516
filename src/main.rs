//! Command-line entry point.

use std::process::ExitCode;
use std::time::{SystemTime, UNIX_EPOCH};

use clap::Parser;

use twentyone::{Console, Game, GameOptions};

/// A single-player command-line blackjack game.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Args {
    /// Player name.
    #[arg(default_value = "Player")]
    name: String,

    /// Starting chip balance.
    #[arg(long, default_value_t = 1000.0)]
    chips: f64,

    /// Number of decks in the shoe.
    #[arg(long, default_value_t = 4)]
    decks: u8,

    /// Have the dealer hit a soft 17 instead of standing.
    #[arg(long)]
    hit_soft_17: bool,

    /// Shuffle seed; defaults to the system time.
    #[arg(long)]
    seed: Option<u64>,
}

fn main() -> ExitCode {
    let args = Args::parse();

    let seed = args.seed.unwrap_or_else(|| {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_secs()
    });

    let options = GameOptions::default()
        .with_chips(args.chips)
        .with_decks(args.decks)
        .with_stand_on_soft_17(!args.hit_soft_17);

    match Game::new(&args.name, &options, seed, Console::new()) {
        Ok(mut game) => {
            game.play();
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}
