use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum IngestError {
    #[error("failed to parse CSV {}: {message}", .path.display())]
    CsvParse { path: PathBuf, message: String },
    #[error("failed to write CSV {}: {message}", .path.display())]
    CsvWrite { path: PathBuf, message: String },
    #[error("invalid feature configuration in {}: {message}", .path.display())]
    Config { path: PathBuf, message: String },
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, IngestError>;
