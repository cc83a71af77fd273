use thiserror::Error;

/// Errors emitted by the generation components.
#[derive(Debug, Error)]
pub enum GenerationError {
    #[error("invalid spec: {0}")]
    InvalidSpec(String),
    #[error("portfolio capacities require {requested} donors but only {available} are available")]
    InsufficientDonors { requested: usize, available: usize },
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),
}
