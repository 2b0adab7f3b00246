//! Error types for parsing, loading, and running the store
use crate::customer::CustomerId;
use crate::item::Item;
use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// A line of a data file that couldn't be understood
#[derive(Debug, PartialEq, Eq, Error)]
pub enum ParseError {
    /// The record or command code isn't one the store knows
    #[error("unknown code '{0}'")]
    UnknownCode(char),
    /// The line didn't match the expected layout
    ///
    /// This holds the remainder of the line where parsing stopped.
    #[error("malformed input at \"{0}\"")]
    Malformed(String),
}

impl<'a> From<nom::Err<nom::error::Error<&'a str>>> for ParseError {
    fn from(err: nom::Err<nom::error::Error<&'a str>>) -> Self {
        match err {
            nom::Err::Incomplete(_) => ParseError::Malformed(String::new()),
            nom::Err::Error(err) | nom::Err::Failure(err) => {
                ParseError::Malformed(err.input.to_owned())
            }
        }
    }
}

/// A transaction the store refused to carry out
#[derive(Debug, Error)]
pub enum StoreError {
    /// No customer is registered with this id
    #[error("customer ({0}) does not exist")]
    UnknownCustomer(CustomerId),
    /// A customer with this id is already registered
    #[error("customer ({0}) is already registered")]
    DuplicateCustomer(CustomerId),
    /// The item isn't in stock
    #[error("product not in stock: {0}")]
    OutOfStock(Item),
    /// An item was stocked with a quantity of zero
    #[error("zero quantity stocked: {0}")]
    ZeroQuantity(Item),
    /// Writing a report failed
    #[error("failed to write report")]
    Io(#[from] io::Error),
}

/// A data file that couldn't be read
#[derive(Debug, Error)]
pub enum LoadError {
    /// Opening or reading the file failed
    #[error("failed to read {}", .path.display())]
    Io {
        /// The file being read
        path: PathBuf,
        /// The underlying failure
        #[source]
        source: io::Error,
    },
    /// Writing a report while processing the commands failed
    #[error(transparent)]
    Store(#[from] StoreError),
}
