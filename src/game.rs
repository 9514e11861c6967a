//! The game module contains the core parts of the game, except for input handling and the score
//! rules themselves.
//!
//! It contains the `init()` function to parse the command line and start the game on the
//! terminal, as well as the `play()` loop that drives a game over any input and output.

use std::io::{self, BufRead, Write};

use anyhow::Result;
use clap::Parser;
use console::Term;

use crate::input::{take_name, take_round, RoundInput};
use crate::messages::{
    instructions, name_prompt, Console, GAME_OVER, GAME_STARTS, INVALID_INPUT, WELCOME,
};
use crate::score::{Game, Player, Side};

/// This struct holds information about the application when it comes to the command-line argument
/// parser of choice, which is clap.
#[derive(Parser)]
#[command(name = "tennis", version, about)]
#[command(next_line_help = true)]
struct Cli {
    /// Print every message without colours or bold text.
    ///
    /// Styling is already left out whenever the output isn't a colour terminal; this option turns
    /// it off on terminals as well.
    #[arg(long)]
    #[arg(env = "TENNIS_PLAIN")]
    plain: bool,
}

/// This enum holds the ways in which a game can come to an end.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Ending {
    /// The "C" key was pressed.
    Cancelled,
    /// The input ran out before anyone won.
    InputClosed,
    /// One of the players won the game.
    Won,
}

/// This struct holds the result of a game that has been played to its end.
#[derive(Debug)]
pub struct Outcome {
    /// How the game ended.
    pub ending: Ending,
    /// The players with their names and final point counts.
    pub game: Game,
}

/// Initializes the terminal and plays a single game on standard input and output.
///
/// # Errors
///
/// The function may return any one of the following errors:
///
/// - io::Error
/// - tennis_kata::InputError
pub fn init() -> Result<()> {
    let cli = Cli::parse();
    let term = Term::stdout();
    let styled = !cli.plain && term.features().colors_supported();

    if term.is_term() {
        term.set_title("tennis");
    }

    let mut console = Console::new(term, styled);
    let _outcome = play(&mut io::stdin().lock(), &mut console)?;

    Ok(())
}

/// Plays one game, reading the names and the winner of every ball line by line from `input` and
/// writing every message to `console`.
///
/// Nothing more is read from `input` once the game has been won or cancelled.
///
/// # Errors
///
/// Fails when reading or writing fails, or when the input ends before both names are known.
pub fn play<R: BufRead, W: Write>(input: &mut R, console: &mut Console<W>) -> Result<Outcome> {
    console.bold(WELCOME)?;

    // ask for both names in order; whatever the line holds becomes the name
    console.line(&name_prompt(Side::One))?;
    let player1 = Player::new(take_name(input, Side::One)?);
    console.line(&name_prompt(Side::Two))?;
    let player2 = Player::new(take_name(input, Side::Two)?);

    let mut game = Game::new(player1, player2);
    console.line(GAME_STARTS)?;

    // round loop
    let ending = loop {
        // show who can be picked before every ball
        console.line(&instructions(&game))?;

        // an invalid key repeats the round without awarding the ball
        match take_round(input)? {
            Some(RoundInput::Point(side)) => {
                game.score_point(side);

                // announce the score and stop reading once someone has won
                let score = game.score();
                console.score(&score)?;

                if score.is_win() {
                    break Ending::Won;
                }
            }
            Some(RoundInput::Invalid) => console.warn(INVALID_INPUT)?,
            Some(RoundInput::Cancel) => break Ending::Cancelled,
            None => break Ending::InputClosed,
        }
    };

    console.bold(GAME_OVER)?;

    Ok(Outcome { ending, game })
}
