use std::{borrow::Cow, fmt};

#[non_exhaustive]
#[derive(Debug)]
pub enum Error {
    /// A drawing operation was attempted before [`Session::init`](crate::Session::init) succeeded, or after
    /// [`Session::close`](crate::Session::close).
    NotInitialized,
    /// Something which isn't one of the known [`BorderStyle`](crate::BorderStyle)s was turned into one.
    UnknownBorderStyle(String),
    /// Something which isn't one of the known [`Direction`](crate::Direction)s was turned into one.
    UnknownDirection(String),
    /// An `io::Error` occurred, usually while talking to the terminal.
    Io(std::io::Error),
    /// Just directly contains an error message.
    Bare(Cow<'static, str>),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotInitialized => write!(f, "terminal not initialized"),
            Self::UnknownBorderStyle(s) => write!(f, "unknown border style {:?}", s),
            Self::UnknownDirection(s) => write!(f, "unknown direction {:?}", s),
            Self::Io(e) => write!(f, "io error: {}", e),
            Self::Bare(s) => f.write_str(s),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}

impl From<&'static str> for Error {
    fn from(value: &'static str) -> Self {
        Self::Bare(Cow::Borrowed(value))
    }
}

pub type Result<T> = core::result::Result<T, Error>;
