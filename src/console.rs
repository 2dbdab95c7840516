//! Interactive terminal implementation of the [`Ui`] contract.

use std::io::{self, Write};

use crate::hand::Hand;
use crate::messages;
use crate::ui::{Action, Ui};

const TITLE: &str = "B L A C K J A C K";
const WIDTH: usize = 45;
const RULE: char = '=';

/// A plain stdin/stdout table renderer.
///
/// Each render clears the screen and redraws a ruled table: the dealer's
/// line on top (hole card shown as `??` until reveal), the player's line
/// below with the hand total right-aligned.
#[derive(Debug, Clone, Copy, Default)]
pub struct Console;

impl Console {
    /// Creates a new console shell.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    fn clear_screen() {
        // ANSI: erase display, home cursor.
        print!("\u{1b}[2J\u{1b}[H");
        let _ = io::stdout().flush();
    }

    fn read_line(prompt: &str) -> String {
        print!("{prompt}");
        let _ = io::stdout().flush();

        let mut input = String::new();
        if io::stdin().read_line(&mut input).is_err() {
            return String::new();
        }
        input.trim().to_lowercase()
    }

    fn rule() -> String {
        RULE.to_string().repeat(WIDTH)
    }

    fn header() {
        println!("{}", Self::rule());
        println!("{TITLE:^WIDTH$}");
        println!("{}", Self::rule());
    }

    /// Lays out one hand line with the value right-aligned to the rule.
    fn hand_line(label: &str, cards: &str, value: &str) -> String {
        let left = format!("{label}{cards}");
        let pad = WIDTH.saturating_sub(left.chars().count() + value.chars().count());
        format!("{left}{}{value}", " ".repeat(pad.max(1)))
    }

    fn dealer_line(dealer: &Hand, reveal: bool) -> String {
        let (cards, value) = if reveal {
            (dealer.to_string(), dealer.best_value().to_string())
        } else {
            let up_card = dealer
                .cards()
                .first()
                .map_or_else(String::new, ToString::to_string);
            (format!("{up_card} ??"), String::new())
        };
        Self::hand_line("Dealer: ", &cards, &value)
    }

    fn player_line(player: &Hand, reveal: bool) -> String {
        let value = if reveal {
            player.best_value().to_string()
        } else {
            player.display_value()
        };
        Self::hand_line("Player: ", &player.to_string(), &value)
    }
}

impl Ui for Console {
    fn show_message(&mut self, message: &str) {
        println!("{message}");
    }

    fn prompt_bet(&mut self, max_bet: f64) -> String {
        let input = Self::read_line(&messages::bet_prompt(max_bet));
        if input == "q" || input == "quit" {
            return Action::Quit.token().to_string();
        }
        input
    }

    fn prompt_action(&mut self, can_double: bool, can_split: bool) -> Action {
        let mut options = vec!["(h)it", "(s)tand"];
        if can_double {
            options.push("(d)ouble");
        }
        if can_split {
            options.push("s(p)lit");
        }
        let prompt = format!("{}: ", options.join(" | "));

        loop {
            let choice = Self::read_line(&prompt);
            match choice.as_str() {
                "h" | "hit" => return Action::Hit,
                "s" | "stand" => return Action::Stand,
                "d" | "double" if can_double => return Action::Double,
                "p" | "split" if can_split => return Action::Split,
                _ => println!("{}", messages::invalid_choice(&choice)),
            }
        }
    }

    fn show_hands(&mut self, player: &Hand, dealer: &Hand, reveal_dealer: bool) {
        Self::clear_screen();
        Self::header();
        println!("{}", Self::dealer_line(dealer, reveal_dealer));
        println!("{}", Self::player_line(player, reveal_dealer));
        println!("{}", Self::rule());
    }
}
