use crate::error::RegistryError;
use std::io;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ImportError {
    #[error("io error: {0}")]
    Io(#[from] io::Error),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),

    #[error("invalid data on record {record}: {message}")]
    InvalidData { record: usize, message: String },

    /// The registry rejected the definition at `record` (1-based).
    #[error("record {record} rejected: {source}")]
    Registry {
        record: usize,
        #[source]
        source: RegistryError,
    },
}

pub type ImportResult<T> = Result<T, ImportError>;

pub mod file;

pub use file::{load_activities_from_csv, load_activities_from_json, load_activities_from_path};
