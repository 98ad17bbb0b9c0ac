//! Renders arbitrary binary trees as multi-line ASCII diagrams.
//!
//! The printer only sees a tree through three accessors: one producing the label of a node and
//! two producing its children. Layout is computed bottom-up: each subtree is turned into a list
//! of rows whose columns are relative to the subtree's center line, and the rows of two sibling
//! subtrees are merged side by side as far apart as their widest overlapping row requires.

mod config;
mod line;
mod printer;

pub use self::config::{PrinterConfig, MAX_HSPACE};
pub use self::line::TreeLine;
pub use self::printer::TreePrinter;

use std::error;
use std::fmt;
use std::io;
use std::result;

/// An error that can occur while configuring a `TreePrinter` or writing a tree.
#[derive(Debug)]
pub enum Error {
    /// The sink failed to accept a row.
    IOError(io::Error),
    /// The horizontal spacing between subtrees must be between 1 and `MAX_HSPACE` columns.
    InvalidHspace(usize),
}

impl From<io::Error> for Error {
    fn from(err: io::Error) -> Error {
        Error::IOError(err)
    }
}

impl error::Error for Error {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        match self {
            Error::IOError(error) => Some(error),
            Error::InvalidHspace(_) => None,
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Error::IOError(error) => write!(f, "{}", error),
            Error::InvalidHspace(hspace) => {
                write!(
                    f,
                    "horizontal spacing must be between 1 and {}, got {}",
                    MAX_HSPACE, hspace,
                )
            },
        }
    }
}

/// Convenience `Result` type for the tree printer.
pub type Result<T> = result::Result<T, Error>;
