//! Error types for the editor

use thiserror::Error;

#[derive(Error, Debug)]
pub enum EditorError {
    #[error("Mutation error: {0}")]
    Mutation(#[from] crate::mutations::MutationError),

    #[error("Storage error: {0}")]
    Storage(#[from] crate::storage::StorageError),

    #[error("Config error: {0}")]
    Config(#[from] crate::config::ConfigError),

    #[error("Invalid zoom value: {0}")]
    InvalidZoom(f64),

    #[error("Invalid layout: {0}")]
    InvalidLayout(String),
}
