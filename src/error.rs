//! Error types produced while tokenizing and coercing feed files.
use thiserror::Error;

/// A failure while turning the text of one feed file into typed records.
///
/// Every variant is fatal for the record being built. Whether it is also fatal for the
/// whole file is decided by [`crate::config::RowErrorPolicy`].
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TransitError {
    /// A zero-length input was interpreted as a record
    #[error("substring is empty")]
    EmptySubstring,
    /// A closing quote was followed by something other than a comma or the end of the record
    #[error("a comma was expected at byte {0}, but not found")]
    CommaExpected(usize),
    /// A quoted cell was never closed
    #[error("a closing quote was expected, but the record ended")]
    QuoteExpected,
    /// A cell could not be converted to the type of its field
    #[error("'{value}' is not a valid value for field {field}")]
    InvalidFieldType {
        /// Canonical name of the field
        field: &'static str,
        /// The raw cell text
        value: String,
    },
    /// One or more required fields are absent or blank
    #[error("required fields are missing: {}", .0.join(", "))]
    MissingRequiredFields(Vec<&'static str>),
    /// The record does not have one cell per header column
    #[error("the header has {header} fields but the record has {record}")]
    HeaderRecordMismatch {
        /// Number of header columns
        header: usize,
        /// Number of cells in the record
        record: usize,
    },
    /// The color is not given in the RRGGBB format
    #[error("'{0}' is not a valid color; RRGGBB format is expected, without a leading `#`")]
    InvalidColor(String),
}

impl TransitError {
    pub(crate) fn invalid(field: &'static str, value: &str) -> Self {
        TransitError::InvalidFieldType {
            field,
            value: value.to_owned(),
        }
    }
}

/// A record of a file that could not be turned into a typed record.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("record {row}: {source}")]
pub struct RowError {
    /// 1-based logical record number; the header is record 1
    pub row: usize,
    /// What went wrong
    #[source]
    pub source: TransitError,
}

impl RowError {
    pub fn new(row: usize, source: TransitError) -> Self {
        RowError { row, source }
    }
}

/// An error that can occur while loading a whole feed directory.
#[derive(Error, Debug)]
pub enum FeedError {
    /// The given path is not a directory
    #[error("could not read feed: {0} is not a directory")]
    NotADirectory(String),
    /// A file exists but could not be read
    #[error("impossible to read '{file_name}'")]
    Io {
        /// The file that could not be read
        file_name: String,
        /// The underlying error
        #[source]
        source: std::io::Error,
    },
    /// A file was read but one of its records is invalid
    #[error("impossible to parse '{file_name}'")]
    Row {
        /// The file containing the invalid record
        file_name: String,
        /// The failing record
        #[source]
        source: RowError,
    },
}

impl FeedError {
    /// Name of the file the error refers to, when there is one.
    pub fn file_name(&self) -> Option<&str> {
        match self {
            FeedError::NotADirectory(_) => None,
            FeedError::Io { file_name, .. } | FeedError::Row { file_name, .. } => Some(file_name),
        }
    }

    /// The record-level error, when the failure happened while parsing.
    pub fn transit_error(&self) -> Option<&TransitError> {
        match self {
            FeedError::Row { source, .. } => Some(&source.source),
            _ => None,
        }
    }
}
