use std::fmt::Display;

use thiserror::Error;

use crate::Position;

/// A lexical or syntactic error, tagged with the line it was raised on.
///
/// The front end never recovers: the first `Error` anywhere in the call
/// chain aborts the parse and propagates to the caller unchanged.
#[derive(Debug, Clone)]
pub struct Error {
    internal_error: ErrorImpl,
    position: Position,
}

impl Error {
    pub fn new(error_impl: ErrorImpl, position: Position) -> Self {
        Error {
            internal_error: error_impl,
            position,
        }
    }

    pub fn get_position(&self) -> &Position {
        &self.position
    }

    pub fn get_error_name(&self) -> &str {
        match &self.internal_error {
            ErrorImpl::UnrecognisedToken { .. } => "UnrecognisedToken",
            ErrorImpl::UnterminatedString => "UnterminatedString",
            ErrorImpl::UnterminatedByteLiteral => "UnterminatedByteLiteral",
            ErrorImpl::UnexpectedToken { .. } => "UnexpectedToken",
            ErrorImpl::UnexpectedTokenDetailed { .. } => "UnexpectedTokenDetailed",
            ErrorImpl::ExpectedType { .. } => "ExpectedType",
            ErrorImpl::InvalidByteLiteral { .. } => "InvalidByteLiteral",
            ErrorImpl::NumberParseError { .. } => "NumberParseError",
        }
    }

    /// True for errors raised while scanning characters into tokens, false
    /// for errors raised while assembling tokens into a tree.
    pub fn is_lex_error(&self) -> bool {
        matches!(
            self.internal_error,
            ErrorImpl::UnrecognisedToken { .. }
                | ErrorImpl::UnterminatedString
                | ErrorImpl::UnterminatedByteLiteral
        )
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} at line {}", self.internal_error, self.position.0)
    }
}

#[derive(Error, Debug, Clone)]
pub enum ErrorImpl {
    #[error("unrecognised character: {token:?}")]
    UnrecognisedToken { token: String },
    #[error("unterminated string literal")]
    UnterminatedString,
    #[error("unterminated byte literal")]
    UnterminatedByteLiteral,
    #[error("unexpected token: '{token}'")]
    UnexpectedToken { token: String },
    #[error("unexpected token ({message}): '{token}'")]
    UnexpectedTokenDetailed { token: String, message: String },
    #[error("expected a type, found '{token}'")]
    ExpectedType { token: String },
    #[error("invalid byte literal: {literal}")]
    InvalidByteLiteral { literal: String },
    #[error("error parsing number: {token:?}")]
    NumberParseError { token: String },
}
