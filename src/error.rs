// SPDX-License-Identifier: MPL-2.0
use std::fmt;

#[derive(Debug, Clone)]
pub enum Error {
    Io(String),
    Deck(DeckError),
    Config(String),
}

/// Specific error types for deck loading issues.
#[derive(Debug, Clone)]
pub enum DeckError {
    /// Deck file could not be read.
    Unreadable(String),

    /// Deck file is not valid TOML or is missing required fields.
    Invalid(String),

    /// Deck file parsed but contains no slides.
    Empty,
}

impl fmt::Display for DeckError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DeckError::Unreadable(msg) => write!(f, "Deck file could not be read: {}", msg),
            DeckError::Invalid(msg) => write!(f, "Deck file is invalid: {}", msg),
            DeckError::Empty => write!(f, "Deck contains no slides"),
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(e) => write!(f, "I/O Error: {}", e),
            Error::Deck(e) => write!(f, "Deck Error: {}", e),
            Error::Config(e) => write!(f, "Config Error: {}", e),
        }
    }
}

impl From<DeckError> for Error {
    fn from(err: DeckError) -> Self {
        Error::Deck(err)
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Error::Config(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
