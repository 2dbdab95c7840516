//! Round engine and session flow.

use crate::dealer::Dealer;
use crate::error::ConfigError;
use crate::messages;
use crate::options::GameOptions;
use crate::player::Player;
use crate::shoe::Shoe;
use crate::ui::{Action, Ui};

pub mod outcome;

pub use outcome::{RoundOutcome, determine_outcome};

/// Cards dealt to each participant at the start of a round.
const OPENING_CARDS: usize = 2;

/// A single-player blackjack session.
///
/// The engine owns the shoe and both participants and drives one
/// betting → dealing → turns → settlement cycle per round, talking to the
/// player only through its [`Ui`].
pub struct Game<U: Ui> {
    /// The shoe cards are drawn from.
    pub shoe: Shoe,
    /// The human player.
    pub player: Player,
    /// The dealer.
    pub dealer: Dealer,
    /// The presentation shell.
    pub ui: U,
}

impl<U: Ui> Game<U> {
    /// Creates a new session with the given seed.
    ///
    /// # Errors
    ///
    /// Returns an error if the name is empty, the starting chips are
    /// negative, or the deck count is zero.
    pub fn new(name: &str, options: &GameOptions, seed: u64, ui: U) -> Result<Self, ConfigError> {
        Ok(Self {
            shoe: Shoe::new(options.decks, seed)?,
            player: Player::new(name, options.chips)?,
            dealer: Dealer::new(options.stand_on_soft_17),
            ui,
        })
    }

    /// Runs the session until the player quits or runs out of chips.
    pub fn play(&mut self) {
        self.ui.show_message(messages::WELCOME);

        while self.player.has_chips() {
            if !self.betting_phase() {
                return;
            }

            self.setup_round();
            self.play_round();
            self.end_round();
        }

        self.ui.show_message(messages::OUT_OF_CHIPS);
    }

    /// Prompts until a valid bet is placed. Returns false if the player
    /// quits instead.
    fn betting_phase(&mut self) -> bool {
        loop {
            let input = self.ui.prompt_bet(self.player.chips());

            if input == Action::Quit.token() {
                self.ui.show_message(messages::GOODBYE);
                return false;
            }

            let Ok(amount) = input.parse::<f64>() else {
                self.ui.show_message(messages::INVALID_BET);
                continue;
            };

            match self.player.place_bet(amount) {
                Ok(()) => return true,
                Err(err) => self.ui.show_message(&err.to_string()),
            }
        }
    }

    /// Resets both hands and deals the opening cards, alternating starting
    /// with the player.
    fn setup_round(&mut self) {
        self.player.hand_mut().reset();
        self.dealer.hand_mut().reset();

        for _ in 0..OPENING_CARDS {
            self.player.hand_mut().add_card(self.shoe.draw());
            self.dealer.hand_mut().add_card(self.shoe.draw());
        }
    }

    /// Plays out both turns. A natural on either side skips straight to
    /// settlement; a player bust skips the dealer.
    fn play_round(&mut self) {
        self.ui
            .show_hands(self.player.hand(), self.dealer.hand(), false);

        if self.player.hand().is_blackjack() || self.dealer.hand().is_blackjack() {
            return;
        }

        if self.player.hand().can_hit() {
            self.player_turn();
        }

        if !self.player.hand().is_bust() {
            self.dealer_turn();
        }
    }

    /// Reveals the dealer, settles the bet, and reports the balance.
    fn end_round(&mut self) {
        self.ui
            .show_hands(self.player.hand(), self.dealer.hand(), true);

        let outcome = determine_outcome(self.player.hand(), self.dealer.hand());
        self.settle(outcome);

        self.ui
            .show_message(&messages::chip_balance(self.player.chips()));
    }

    /// The player's decision loop.
    ///
    /// Ineligible and unrecognized choices are rejected without consuming
    /// the turn. Double exits the loop after its single card regardless of
    /// the resulting total.
    fn player_turn(&mut self) {
        while self.player.hand().can_hit() {
            let action = self
                .ui
                .prompt_action(self.player.can_double(), self.player.can_split());

            match action {
                Action::Hit => self.hit(),
                Action::Stand => break,
                Action::Double if self.player.can_double() => {
                    self.double_down();
                    break;
                }
                Action::Split if self.player.can_split() => self.split(),
                other => self
                    .ui
                    .show_message(&messages::invalid_choice(other.token())),
            }

            self.ui
                .show_hands(self.player.hand(), self.dealer.hand(), false);
        }
    }

    /// The dealer draws under the house rule.
    fn dealer_turn(&mut self) {
        while self.dealer.should_hit() {
            self.dealer.hand_mut().add_card(self.shoe.draw());
        }
    }

    fn hit(&mut self) {
        self.player.hand_mut().add_card(self.shoe.draw());
    }

    fn double_down(&mut self) {
        match self.player.double_bet() {
            Ok(()) => self.hit(),
            Err(err) => self.ui.show_message(&err.to_string()),
        }
    }

    fn split(&mut self) {
        self.ui.show_message(messages::SPLIT_NOT_SUPPORTED);
    }

    /// Applies exactly one payout primitive and one message per outcome.
    fn settle(&mut self, outcome: RoundOutcome) {
        let message = match outcome {
            RoundOutcome::PlayerBust => {
                self.player.lose_bet();
                messages::PLAYER_BUST
            }
            RoundOutcome::DealerBust => {
                self.player.win_bet();
                messages::DEALER_BUST
            }
            RoundOutcome::BothBlackjack => {
                self.player.push_bet();
                messages::BOTH_BLACKJACK
            }
            RoundOutcome::PlayerBlackjack => {
                self.player.win_blackjack();
                messages::PLAYER_BLACKJACK
            }
            RoundOutcome::DealerBlackjack => {
                self.player.lose_bet();
                messages::DEALER_BLACKJACK
            }
            RoundOutcome::Push => {
                self.player.push_bet();
                messages::PUSH
            }
            RoundOutcome::PlayerWin => {
                self.player.win_bet();
                messages::PLAYER_WIN
            }
            RoundOutcome::PlayerLose => {
                self.player.lose_bet();
                messages::PLAYER_LOSE
            }
        };

        self.ui.show_message(message);
    }
}
