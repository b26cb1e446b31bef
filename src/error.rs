use std::fmt;
use std::io;

#[derive(Debug)]
pub enum Error {
    /// Close was requested but no file is currently open.
    NoOpenFile,
    /// The target path is missing, not a directory, or inaccessible.
    NotADirectory,
    /// Underlying filesystem failure, passed through unmodified.
    Io(io::Error),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::NoOpenFile => write!(f, "no open file to close"),
            Error::NotADirectory => write!(f, "path is not an accessible directory"),
            Error::Io(err) => write!(f, "io error: {err}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Io(err) => Some(err),
            _ => None,
        }
    }
}

impl From<io::Error> for Error {
    fn from(value: io::Error) -> Self {
        Error::Io(value)
    }
}

// Io unwraps to the original error so passthrough failures are never
// double-wrapped when the sink is driven through std::io::Write.
impl From<Error> for io::Error {
    fn from(value: Error) -> Self {
        match value {
            Error::Io(err) => err,
            Error::NoOpenFile => io::Error::new(io::ErrorKind::NotFound, value),
            Error::NotADirectory => io::Error::new(io::ErrorKind::NotADirectory, value),
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
