//! This module holds the fixed texts printed during a game and the console they get written to.
//!
//! Every message takes exactly one line. Styling only ever wraps a message, it never changes its
//! text, and it is turned off altogether unless the game is played on a colour terminal.

use std::io::{self, Write};

use console::style;

use crate::score::{Game, Score, Side};

/// The first line printed when the game launches.
pub(crate) const WELCOME: &str = "Welcome! Lets Play Tennis";

/// The line printed once both names have been entered.
pub(crate) const GAME_STARTS: &str = "Game Starts Now!!";

/// The line printed when the key entered during a round isn't one of the accepted ones.
pub(crate) const INVALID_INPUT: &str = "Please enter a valid Input !!";

/// The last line printed, whether the game was won or cancelled.
pub(crate) const GAME_OVER: &str = "Game Over !!";

/// Returns the prompt asking for the name of the player on the given side.
pub(crate) fn name_prompt(side: Side) -> String {
    format!("Please enter Player {side} name: ")
}

/// Returns the instructions shown before every ball.
pub(crate) fn instructions(game: &Game) -> String {
    format!(
        "Please enter who won this Ball, Press [1]: {} / [2]: {} Or Press [C] to stop playing",
        game.player1().name(),
        game.player2().name()
    )
}

/// This struct links together the output the game is written to and whether the messages on it
/// get styled.
pub struct Console<W> {
    /// The sink every line is written to.
    out: W,
    /// Whether `console` styling is applied to the highlighted lines.
    styled: bool,
}

impl<W: Write> Console<W> {
    /// Creates a console over the given output. Pass `false` for `styled` when the output isn't a
    /// colour terminal.
    pub const fn new(out: W, styled: bool) -> Self {
        Self { out, styled }
    }

    /// Gives back the underlying output.
    pub fn into_inner(self) -> W {
        self.out
    }

    /// Writes a plain line.
    pub(crate) fn line(&mut self, text: &str) -> io::Result<()> {
        writeln!(self.out, "{text}")
    }

    /// Writes a line in bold.
    pub(crate) fn bold(&mut self, text: &str) -> io::Result<()> {
        writeln!(self.out, "{}", style(text).bold().force_styling(self.styled))
    }

    /// Writes a line that warns the user about their input.
    pub(crate) fn warn(&mut self, text: &str) -> io::Result<()> {
        writeln!(self.out, "{}", style(text).yellow().force_styling(self.styled))
    }

    /// Writes the score announced after a ball; a win is highlighted more than the other calls.
    pub(crate) fn score(&mut self, score: &Score<'_>) -> io::Result<()> {
        let call = style(score.to_string()).bold().force_styling(self.styled);

        if score.is_win() {
            writeln!(self.out, "{}", call.green())
        } else {
            writeln!(self.out, "{call}")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{instructions, name_prompt, Console};
    use crate::score::{Game, Player, Side};

    #[test]
    fn prompts_name_the_side() {
        assert_eq!(name_prompt(Side::One), "Please enter Player One name: ", "first prompt");
        assert_eq!(name_prompt(Side::Two), "Please enter Player Two name: ", "second prompt");
    }

    #[test]
    fn instructions_name_both_players() {
        let game = Game::new(Player::new("Rob"), Player::new("Bob"));

        assert_eq!(
            instructions(&game),
            "Please enter who won this Ball, Press [1]: Rob / [2]: Bob Or Press [C] to stop playing",
            "instruction line"
        );
    }

    #[test]
    fn unstyled_console_writes_the_exact_text() {
        let game = Game::default();
        let mut console = Console::new(Vec::new(), false);

        assert!(console.bold("Game Over !!").is_ok(), "bold line");
        assert!(console.warn("Please enter a valid Input !!").is_ok(), "warning line");
        assert!(console.score(&game.score()).is_ok(), "score line");

        let output = String::from_utf8(console.into_inner()).unwrap_or_default();
        assert_eq!(
            output,
            "Game Over !!\nPlease enter a valid Input !!\nLove-All\n",
            "no escape codes"
        );
    }

    #[test]
    fn styled_console_wraps_the_text() {
        let mut console = Console::new(Vec::new(), true);

        assert!(console.bold("Game Over !!").is_ok(), "bold line");

        let output = String::from_utf8(console.into_inner()).unwrap_or_default();
        assert!(output.contains("Game Over !!"), "text kept");
        assert_ne!(output, "Game Over !!\n", "escape codes added");
    }
}
