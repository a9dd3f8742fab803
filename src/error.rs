use std::fmt;

use failure::{Backtrace, Context, Fail};

use super::token::{Token, TokenKind};

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug)]
pub struct Error {
    inner: Context<ErrorKind>,
}

#[derive(Debug, Clone, PartialEq, Fail)]
pub enum ErrorKind {
    #[fail(display = "unknown character '{}'", character)]
    Lex { character: char },
    #[fail(display = "expected {}, found {}", expected, found)]
    UnexpectedToken { expected: TokenKind, found: Token },
    #[fail(display = "unexpected end of input")]
    UnexpectedEndOfInput,
    #[fail(display = "expected an expression, found {}", found)]
    InvalidPrimary { found: Token },
    #[fail(display = "invalid number literal '{}'", lexeme)]
    InvalidNumber { lexeme: String },
    #[fail(display = "expression nested deeper than {} levels", limit)]
    NestingTooDeep { limit: usize },
}

impl Error {
    pub fn kind(&self) -> &ErrorKind {
        self.inner.get_context()
    }
}

impl Fail for Error {
    fn cause(&self) -> Option<&dyn Fail> {
        self.inner.cause()
    }

    fn backtrace(&self) -> Option<&Backtrace> {
        self.inner.backtrace()
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.inner, f)
    }
}

impl From<ErrorKind> for Error {
    fn from(kind: ErrorKind) -> Error {
        Error {
            inner: Context::new(kind),
        }
    }
}
