//! Errors raised while interpreting protocol lines.
//!
//! None of these are fatal. The dispatcher reports them on the log channel,
//! leaves the match state untouched and moves on to the next line. An unknown
//! top-level command is not an error: it is answered on the response channel.

use std::error::Error;
use std::fmt;

use crate::board::board_codec::DecodeError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProtocolError {
    /// The line ended before a required token.
    ///
    /// Payload: the command category and the zero-based index of the missing token.
    MissingToken { command: String, position: usize },

    /// A value that should be a decimal integer was not.
    InvalidInteger { key: String, value: String },

    /// A `field` or `macroboard` value failed to decode.
    Decode { key: String, source: DecodeError },

    UnrecognizedSettingsKey(String),
    UnrecognizedGameKey(String),

    /// `update <target>` for a target other than `game`.
    UnsupportedUpdateTarget(String),

    /// `action <kind>` for a kind other than `move`.
    UnsupportedAction(String),
}

impl fmt::Display for ProtocolError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProtocolError::MissingToken { command, position } => {
                write!(f, "'{command}' command is missing token {position}")
            }
            ProtocolError::InvalidInteger { key, value } => {
                write!(f, "cannot parse value '{value}' for key '{key}' as an integer")
            }
            ProtocolError::Decode { key, source } => {
                write!(f, "cannot decode value for key '{key}': {source}")
            }
            ProtocolError::UnrecognizedSettingsKey(key) => {
                write!(f, "cannot parse settings input with key '{key}'")
            }
            ProtocolError::UnrecognizedGameKey(key) => {
                write!(f, "cannot parse game data input with key '{key}'")
            }
            ProtocolError::UnsupportedUpdateTarget(target) => {
                write!(f, "ignoring update for target '{target}'")
            }
            ProtocolError::UnsupportedAction(kind) => {
                write!(f, "ignoring action request '{kind}'")
            }
        }
    }
}

impl Error for ProtocolError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            ProtocolError::Decode { source, .. } => Some(source),
            _ => None,
        }
    }
}
