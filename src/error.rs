//! Errors for reading commands. The tree itself never fails: a missing key
//! or a duplicate insert is an ordinary outcome, not an error.

use std::num::ParseIntError;

use thiserror::Error as ThisError;

/// Result alias for the command layer.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Why a line of input could not be turned into a [`Command`](crate::command::Command).
#[derive(Debug, Clone, PartialEq, Eq, ThisError)]
pub enum Error {
    /// The line was blank.
    #[error("empty command")]
    Empty,

    /// The first word isn't a menu choice or command name.
    #[error("unknown command `{0}`")]
    UnknownCommand(String),

    /// The command operates on a key but none was given.
    #[error("`{0}` needs a key")]
    MissingKey(&'static str),

    /// The key wasn't an integer.
    #[error("`{input}` is not an integer key")]
    InvalidKey {
        /// The offending word.
        input: String,
        /// Why it didn't parse.
        #[source]
        source: ParseIntError,
    },

    /// Something followed a complete command.
    #[error("unexpected argument `{0}`")]
    UnexpectedArgument(String),
}
