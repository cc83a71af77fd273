use thiserror::Error;

/// Core error type shared across DonorBridge crates.
#[derive(Debug, Error)]
pub enum Error {
    /// The tabular input violates structural invariants.
    #[error("invalid table: {0}")]
    InvalidTable(String),
}

/// Convenience alias for results returned by DonorBridge crates.
pub type Result<T> = std::result::Result<T, Error>;
