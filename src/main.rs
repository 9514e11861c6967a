//! # tennis
//!
//! This crate keeps the score of a single game of tennis played on the console. Both players'
//! names are asked for first, and then the winner of every ball gets entered until someone wins
//! the game or the game is stopped.
//!
//! After every ball the score is announced the way an umpire would: Love, Fifteen, Thirty, Forty,
//! Deuce, Advantage and finally the winner.

#![expect(
    unused_crate_dependencies,
    reason = "The dependencies are used in the library crate."
)]

use anyhow::Result;
use tennis_kata::init;

fn main() -> Result<()> {
    init()
}
