//! Error types for dataset loading.

use crate::sources::DataFile;
use thiserror::Error;

/// Why a data file could not be turned into records.
#[derive(Error, Debug)]
pub enum LoadError {
    /// The bytes are not a readable parquet file
    #[error("Failed to read {file}: {source}")]
    Parquet {
        file: DataFile,
        #[source]
        source: parquet::errors::ParquetError,
    },

    /// A row does not have the expected column types
    #[error("Unexpected row in {file}: {source}")]
    Row {
        file: DataFile,
        #[source]
        source: serde_json::Error,
    },

    /// A row is not a column-name to value object
    #[error("Row {index} of {file} is not a record")]
    NotARecord { file: DataFile, index: usize },
}

/// Type alias for Results using LoadError
pub type Result<T> = std::result::Result<T, LoadError>;
