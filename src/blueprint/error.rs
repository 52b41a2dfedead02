//! Blueprint generation errors

use thiserror::Error;

use crate::completion::ServiceError;

#[derive(Error, Debug)]
pub enum GenerationError {
    #[error("Completion service failed: {0}")]
    Service(#[from] ServiceError),

    #[error("Malformed blueprint response: {0}")]
    MalformedResponse(String),

    #[error("A blueprint generation is already in progress")]
    AlreadyGenerating,
}
