//! Crate-local error type.
//!
//! Every fallible operation in this crate returns `Result<T, Error>`. Most
//! variants name a single offending value so the CLI can print one useful
//! line without the caller needing to inspect the dictionary itself.

use std::fmt;
use std::io;
use std::path::PathBuf;

/// The crate's result alias. Used throughout in place of `std::result::Result`.
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug)]
pub enum Error {
    /// Dictionary path does not exist.
    FileNotFound(PathBuf),
    /// Header version is not a recognised system-dictionary version.
    InvalidVersion(u64),
    /// Header description encodes to more than 256 UTF-8 bytes.
    DescriptionTooLong(usize),
    /// A `Flags` sub-field does not fit its bit width.
    BadFlags { field: &'static str, value: u16 },
    /// A CSV row has fewer than 9 columns.
    TooFewColumns { row: u64, found: usize },
    /// A CSV column holds a value outside its enumerated domain.
    BadEnumValue {
        row: u64,
        column: &'static str,
        value: String,
    },
    /// A numeric CSV column does not fit the target integer width.
    OutOfRange {
        row: u64,
        column: &'static str,
        value: String,
    },
    /// A CSV block mixes more than one `group_id`.
    GroupIdChanged { row: u64, expected: i32, found: i32 },
    /// The caller supplied a group ID whose group does not contain `word`.
    HeadWordMissing { word: String, group_id: i32 },
    /// Underlying I/O failure (file open, mmap, read, write).
    Io(io::Error),
    /// CSV structure the `csv` crate itself rejected.
    Csv(csv::Error),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::FileNotFound(path) => write!(f, "dictionary file not found: {}", path.display()),
            Error::InvalidVersion(v) => write!(f, "unrecognised dictionary version: {v}"),
            Error::DescriptionTooLong(n) => {
                write!(f, "header description is {n} UTF-8 bytes, exceeds 256")
            }
            Error::BadFlags { field, value } => {
                write!(f, "flags field '{field}' does not fit its bit width: {value}")
            }
            Error::TooFewColumns { row, found } => {
                write!(f, "row {row}: expected 9 columns, found {found}")
            }
            Error::BadEnumValue { row, column, value } => {
                write!(f, "row {row}: column '{column}' has invalid value '{value}'")
            }
            Error::OutOfRange { row, column, value } => {
                write!(f, "row {row}: column '{column}' value '{value}' out of range")
            }
            Error::GroupIdChanged {
                row,
                expected,
                found,
            } => write!(
                f,
                "row {row}: group_id changed within a block (expected {expected}, found {found})"
            ),
            Error::HeadWordMissing { word, group_id } => write!(
                f,
                "group {group_id} does not contain the word '{word}'"
            ),
            Error::Io(e) => write!(f, "I/O error: {e}"),
            Error::Csv(e) => write!(f, "CSV error: {e}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Io(e) => Some(e),
            Error::Csv(e) => Some(e),
            _ => None,
        }
    }
}

impl From<io::Error> for Error {
    fn from(e: io::Error) -> Self {
        Error::Io(e)
    }
}

impl From<csv::Error> for Error {
    fn from(e: csv::Error) -> Self {
        Error::Csv(e)
    }
}
