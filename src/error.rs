// src/error.rs

use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// Failure to extract a typed value from one tab-separated row.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ParseError {
    #[error("column {index} requested but only have {available}")]
    MissingColumn { index: usize, available: usize },

    #[error("column {index} is NULL")]
    Null { index: usize },

    #[error("column {index}: invalid integer {value:?}: {reason}")]
    InvalidInt {
        index: usize,
        value: String,
        reason: String,
    },

    #[error("column {index}: invalid timestamp {value:?}")]
    InvalidTime { index: usize, value: String },
}

#[derive(Error, Debug)]
pub enum Error {
    #[error("{path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{0}")]
    Stream(#[from] std::io::Error),

    #[error("file {entry:?} not found in archive {archive}")]
    EntryNotFound { entry: String, archive: PathBuf },

    #[error("bad row {line:?} in {entry}: {source}")]
    BadRow {
        entry: String,
        line: String,
        #[source]
        source: ParseError,
    },

    #[error("failed decoding {path}: {source}")]
    Decode {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed encoding to {path}: {source}")]
    Encode {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("unknown edit type {0:?}")]
    UnknownEditType(String),

    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}

impl Error {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Error::Io {
            path: path.into(),
            source,
        }
    }

    /// Process exit code for this failure: 2 for a rejected request, 1 for
    /// I/O or data problems.
    pub fn exit_code(&self) -> u8 {
        match self {
            Error::UnknownEditType(_) | Error::InvalidArgument(_) => 2,
            _ => 1,
        }
    }
}
