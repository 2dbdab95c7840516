//! A single-player command-line blackjack game.
//!
//! The crate provides a [`Game`] engine that manages the full round flow,
//! including betting, dealing, player decisions, dealer play, and payout,
//! against a dealer following a fixed drawing rule. Presentation is
//! abstracted behind the [`Ui`] trait; [`Console`] is the interactive
//! terminal shell.
//!
//! # Example
//!
//! ```no_run
//! use twentyone::{Console, Game, GameOptions};
//!
//! let options = GameOptions::default();
//! let mut game = Game::new("Player", &options, 42, Console::new())
//!     .expect("valid configuration");
//! game.play();
//! ```

pub mod card;
pub mod console;
pub mod dealer;
pub mod error;
pub mod game;
pub mod hand;
pub mod messages;
pub mod options;
pub mod player;
pub mod shoe;
pub mod ui;

// Re-export main types
pub use card::{Card, DECK_SIZE, Suit};
pub use console::Console;
pub use dealer::Dealer;
pub use error::{ActionError, BetError, ConfigError};
pub use game::{Game, RoundOutcome, determine_outcome};
pub use hand::Hand;
pub use options::GameOptions;
pub use player::Player;
pub use shoe::Shoe;
pub use ui::{Action, Ui};
