use thiserror::Error;

/// Errors that can occur while setting up or running a solver.
#[derive(Debug, Error)]
pub enum Error {
    /// The input data was invalid for the requested operation
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// The environment exposes no actions, so "max over actions" is undefined
    #[error("Action space is empty")]
    EmptyActionSpace,
}

/// A specialized Result type for value-iteration operations
pub type Result<T> = std::result::Result<T, Error>;
