//! Typed errors for the image API client: classification of failed HTTP
//! responses plus the client-side precondition failures raised before a
//! request is sent.

pub mod catalog;
pub mod config;
pub mod endpoint;
pub mod errors;
pub mod schema;

pub use errors::{
    classify, classify_status, error_for_status, ClientError, Error, ErrorKind, HttpResponse,
    PreconditionError, ResponseDescriptor,
};
