//! User-facing message texts.
//!
//! Every message the engine can emit lives here, so the round flow reads as
//! logic and the wording stays in one place.

/// Shown once when a session starts.
pub const WELCOME: &str = "Welcome to the table. Good luck!";
/// Shown when the player quits at the betting prompt.
pub const GOODBYE: &str = "Thanks for playing. Goodbye!";
/// Shown when the chip balance reaches zero.
pub const OUT_OF_CHIPS: &str = "You are out of chips. Game over.";
/// Shown when bet input does not parse as a number.
pub const INVALID_BET: &str = "Please enter a valid bet amount.";
/// Shown when the split action is chosen.
pub const SPLIT_NOT_SUPPORTED: &str = "Splitting is not supported yet.";

/// Shown when the player busts.
pub const PLAYER_BUST: &str = "You bust! Dealer wins.";
/// Shown when the dealer busts.
pub const DEALER_BUST: &str = "Dealer busts! You win.";
/// Shown when only the player has a natural.
pub const PLAYER_BLACKJACK: &str = "Blackjack! You win 3:2.";
/// Shown when only the dealer has a natural.
pub const DEALER_BLACKJACK: &str = "Dealer has blackjack. You lose.";
/// Shown when both opening hands are naturals.
pub const BOTH_BLACKJACK: &str = "Both have blackjack. Push.";
/// Shown on an ordinary tie.
pub const PUSH: &str = "Push. Your bet is returned.";
/// Shown when the player outscores the dealer.
pub const PLAYER_WIN: &str = "You win!";
/// Shown when the dealer outscores the player.
pub const PLAYER_LOSE: &str = "Dealer wins.";

/// Formats the rejection of an unrecognized or ineligible choice.
#[must_use]
pub fn invalid_choice(choice: &str) -> String {
    format!("'{choice}' is not a valid choice right now.")
}

/// Formats the chip balance report shown after settlement.
#[must_use]
pub fn chip_balance(chips: f64) -> String {
    format!("You have {chips} chips.")
}

/// Formats the bet prompt.
#[must_use]
pub fn bet_prompt(max_bet: f64) -> String {
    format!("Place your bet (max {max_bet}) or (q)uit: ")
}
