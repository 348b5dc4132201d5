//! Error taxonomy for the image API client

pub mod client;
pub mod codes;
pub mod precondition;
pub mod response;

use thiserror::Error;

pub use client::{classify, classify_status, ClientError};
pub use codes::{ErrorKind, STATUS_TABLE};
pub use precondition::PreconditionError;
pub use response::{error_for_status, HttpResponse, ResponseDescriptor};

/// Any error raised by this crate
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// The API answered with a failure status
    #[error(transparent)]
    Client(#[from] ClientError),

    /// Client-side precondition failed before a request was made
    #[error(transparent)]
    Precondition(#[from] PreconditionError),
}
