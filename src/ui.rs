//! The abstract presentation contract the engine drives.

use crate::hand::Hand;

/// A player decision token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    /// Draw one card.
    Hit,
    /// Keep the current hand.
    Stand,
    /// Double the bet, draw exactly one card, and stop.
    Double,
    /// Split a pair (currently a no-op notice).
    Split,
    /// Leave the table. Recognized as a token, but the decision loop does
    /// not currently offer it; quitting is honored at the betting prompt.
    Quit,
}

impl Action {
    /// Returns the canonical text token for the action.
    #[must_use]
    pub const fn token(self) -> &'static str {
        match self {
            Self::Hit => "hit",
            Self::Stand => "stand",
            Self::Double => "double",
            Self::Split => "split",
            Self::Quit => "quit",
        }
    }
}

/// Presentation and input contract between the round engine and its shell.
///
/// The engine never reads or writes the terminal itself; it is generic over
/// an implementation of this trait. [`Console`](crate::console::Console) is
/// the interactive shell, and tests drive the engine with a scripted double.
pub trait Ui {
    /// Displays a message to the player.
    fn show_message(&mut self, message: &str);

    /// Prompts for a bet and returns the raw input, or the
    /// [`Action::Quit`] token if the player wants to leave.
    fn prompt_bet(&mut self, max_bet: f64) -> String;

    /// Prompts for a decision among the currently legal actions.
    ///
    /// `can_double` and `can_split` control which options are offered.
    fn prompt_action(&mut self, can_double: bool, can_split: bool) -> Action;

    /// Renders both hands. When `reveal_dealer` is false the dealer's hole
    /// card and total must be withheld.
    fn show_hands(&mut self, player: &Hand, dealer: &Hand, reveal_dealer: bool);
}
