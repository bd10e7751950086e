use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("pages directory not found: {}", .0.display())]
    MissingDir(PathBuf),
    #[error("failed to create pages directory {}: {source}", path.display())]
    CreateDir { path: PathBuf, source: io::Error },
    #[error("i/o error on {}: {source}", path.display())]
    Io { path: PathBuf, source: io::Error },
}

#[derive(Debug, Error)]
pub enum IndexError {
    /// IDF is undefined over zero documents.
    #[error("corpus is empty, nothing to index")]
    EmptyCorpus,
    #[error(transparent)]
    Store(#[from] StoreError),
    #[error("i/o error on {}: {source}", path.display())]
    Io { path: PathBuf, source: io::Error },
    #[error("malformed index artifact: {0}")]
    Json(#[from] serde_json::Error),
}
