//! The library components of the game. They allow playing a game of tennis on the console, taking
//! input for every ball and announcing the score after it.
//!
//! The starting point of the library is the game.rs file, which contains the main game loop. The
//! score rules live in score.rs and can be used on their own through `compute_score()` or
//! `Game::score()`.

#![expect(
    clippy::cargo_common_metadata,
    reason = "The package has not yet been pushed to a remote."
)]

mod game;
mod input;
mod messages;
mod score;

pub use game::{init, play, Ending, Outcome};
pub use input::InputError;
pub use messages::Console;
pub use score::{compute_score, Call, Game, Player, Score, Side};
