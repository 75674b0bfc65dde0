use thiserror::Error;

/// Common error type shared by the pressroom crates
#[derive(Error, Debug)]
pub enum CommonError {
    #[error("Invalid component id: {0:?}")]
    InvalidId(String),
}
