use std::num::ParseFloatError;
use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to open {}: {source}", path.display())]
    Source {
        path: PathBuf,
        #[source]
        source: niffler::Error,
    },

    /// A data line does not have as many fields as the header names.
    #[error("line {line}: expected {expected} tab-separated fields, found {actual}")]
    FieldCount {
        line: usize,
        expected: usize,
        actual: usize,
    },

    #[error("line {line}: {msg}")]
    Syntax { line: usize, msg: String },

    #[error("failed to write CSV: {0}")]
    Csv(#[from] csv::Error),

    #[error(transparent)]
    Validation(#[from] Invalid),

    #[error("column {0} not found in header")]
    MissingColumn(String),

    /// Rows were read but no `#` header line named their columns.
    #[error("table has {rows} rows but no header line")]
    MissingHeader { rows: usize },

    #[error("genotype {value:?} of sample {sample} has {actual} colon-separated fields, expected {expected}")]
    GenotypeArity {
        sample: String,
        value: String,
        expected: usize,
        actual: usize,
    },

    #[error("{field} value {value:?} is not a number")]
    NotNumeric {
        field: String,
        value: String,
        #[source]
        source: ParseFloatError,
    },
}

/// Rejected caller-supplied parameter.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Invalid {
    #[error("invalid file: {0}")]
    File(String),
    #[error("invalid chromosome: {0:?}")]
    Chromosome(String),
    #[error("invalid nucleotide: {0:?}")]
    Nucleotide(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Format,
    Validation,
    Schema,
    Parse,
}

impl Error {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::Io { .. }
            | Error::Source { .. }
            | Error::FieldCount { .. }
            | Error::Syntax { .. }
            | Error::Csv(_) => ErrorKind::Format,
            Error::Validation(_) => ErrorKind::Validation,
            Error::MissingColumn(_) | Error::MissingHeader { .. } | Error::GenotypeArity { .. } => {
                ErrorKind::Schema
            }
            Error::NotNumeric { .. } => ErrorKind::Parse,
        }
    }
}
