//! This module contains all functions related to taking input from the user. Input is read one
//! line at a time from any buffered reader, which is standard input when playing and an in-memory
//! buffer in the tests.
//!
//! Specifically, the available functions take a player's name and take the key telling who won
//! the last ball.

use std::io::{self, BufRead};

use crate::score::Side;

/// This enum holds the errors that can come up while reading the user's input.
#[derive(thiserror::Error, Debug)]
pub enum InputError {
    /// Reading from the underlying input failed.
    #[error(transparent)]
    Io(#[from] io::Error),
    /// The input ended while a player's name was still expected.
    #[error("the input ended before the name of Player {0} was entered")]
    NameClosed(Side),
}

/// This enum holds the meaning of a line entered during a round.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub(crate) enum RoundInput {
    /// The "C" key; the game stops.
    Cancel,
    /// Anything that isn't one of the accepted keys.
    Invalid,
    /// The "1" or "2" key; the given player won the ball.
    Point(Side),
}

impl RoundInput {
    /// Interprets a single line entered during a round. The keys are matched exactly, so a
    /// lowercase "c" is not a cancel.
    pub(crate) fn parse(line: &str) -> Self {
        match line {
            "1" => Self::Point(Side::One),
            "2" => Self::Point(Side::Two),
            "C" => Self::Cancel,
            _ => Self::Invalid,
        }
    }
}

/// This function reads a single line and strips the line terminator from it. Bytes that aren't
/// valid UTF-8 are replaced rather than rejected. It returns `None` once the input has been
/// exhausted.
fn read_line<R: BufRead>(input: &mut R) -> Result<Option<String>, InputError> {
    let mut buf = Vec::new();

    if input.read_until(b'\n', &mut buf)? == 0 {
        return Ok(None);
    }

    // accept both unix and windows line endings
    if buf.ends_with(b"\n") {
        let _newline = buf.pop();
        if buf.ends_with(b"\r") {
            let _carriage = buf.pop();
        }
    }

    Ok(Some(String::from_utf8_lossy(&buf).into_owned()))
}

/// This function is in charge of taking the name of the player on the given side. Whatever the
/// line holds becomes the name, including an empty line.
pub(crate) fn take_name<R: BufRead>(input: &mut R, side: Side) -> Result<String, InputError> {
    read_line(input)?.ok_or(InputError::NameClosed(side))
}

/// This function takes the key entered for the current round. `None` means the input ended.
pub(crate) fn take_round<R: BufRead>(input: &mut R) -> Result<Option<RoundInput>, InputError> {
    Ok(read_line(input)?.as_deref().map(RoundInput::parse))
}
