//! Error types for the glowbook ecosystem.

use thiserror::Error;

/// Errors that can occur in glowbook operations.
#[derive(Error, Debug)]
pub enum GlowbookError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Job not found: {0}")]
    JobNotFound(String),

    #[error("Bid not found: {0}")]
    BidNotFound(String),

    #[error("Provider '{0}' has already bid on this job")]
    DuplicateBid(String),

    #[error("Invalid transition: job is {0}, cannot {1}")]
    InvalidTransition(String, String),

    #[error("Only the posting client may award a bid")]
    NotJobOwner,

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("ICS generation error: {0}")]
    IcsGenerate(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(String),
}

/// Result type alias for glowbook operations.
pub type GlowbookResult<T> = Result<T, GlowbookError>;
