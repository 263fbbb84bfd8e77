use thiserror::Error;

#[derive(Debug, Error)]
pub enum DataLoadError {
    #[error("dataset file not found: {0}")]
    FileNotFound(std::path::PathBuf),

    #[error("failed to read dataset: {0}")]
    Io(#[from] std::io::Error),

    #[error("malformed dataset: {0}")]
    Csv(#[from] csv::Error),
}
