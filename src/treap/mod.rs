//! Probabilistic binary search tree where each node also maintains the heap invariant.

mod node;
mod tree;

pub use self::tree::Treap;

use std::error;
use std::fmt;
use std::result;

/// The errors that can arise from querying a treap.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Error {
    /// The treap has no nodes, so there is no value to return.
    EmptyTreap,
}

impl error::Error for Error {
    fn description(&self) -> &str {
        match self {
            Error::EmptyTreap => "Treap is empty.",
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Error::EmptyTreap => write!(f, "Treap is empty."),
        }
    }
}

pub type Result<T> = result::Result<T, Error>;
