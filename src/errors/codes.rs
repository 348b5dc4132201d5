use serde::{Deserialize, Serialize};
use std::fmt;

/// Error kinds an image API response can be classified into
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorKind {
    /// Malformed data was sent
    BadRequest,

    /// Bad credentials
    Unauthorized,

    /// Credentials don't grant access to this resource
    Forbidden,

    /// Resource does not exist
    NotFound,

    /// Request conflicts with the current state of the resource
    Conflict,

    /// Over the API limits for this time period
    OverLimit,

    /// Internal server error
    InternalServerError,

    /// Server does not support this operation
    NotImplemented,

    /// Service temporarily unavailable
    ServiceUnavailable,

    /// Any status without a more specific kind
    Generic,
}

/// Status code, kind and default message for every kind bound to a status.
///
/// No two entries share a status code.
pub const STATUS_TABLE: [(u16, ErrorKind, &str); 9] = [
    (400, ErrorKind::BadRequest, "Bad request"),
    (401, ErrorKind::Unauthorized, "Unauthorized"),
    (403, ErrorKind::Forbidden, "Forbidden"),
    (404, ErrorKind::NotFound, "Not found"),
    (409, ErrorKind::Conflict, "Conflict"),
    (413, ErrorKind::OverLimit, "Over limit"),
    (500, ErrorKind::InternalServerError, "Internal Server Error"),
    (501, ErrorKind::NotImplemented, "Not Implemented"),
    (503, ErrorKind::ServiceUnavailable, "Service Unavailable"),
];

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::BadRequest => write!(f, "BAD_REQUEST"),
            Self::Unauthorized => write!(f, "UNAUTHORIZED"),
            Self::Forbidden => write!(f, "FORBIDDEN"),
            Self::NotFound => write!(f, "NOT_FOUND"),
            Self::Conflict => write!(f, "CONFLICT"),
            Self::OverLimit => write!(f, "OVER_LIMIT"),
            Self::InternalServerError => write!(f, "INTERNAL_SERVER_ERROR"),
            Self::NotImplemented => write!(f, "NOT_IMPLEMENTED"),
            Self::ServiceUnavailable => write!(f, "SERVICE_UNAVAILABLE"),
            Self::Generic => write!(f, "GENERIC"),
        }
    }
}

impl ErrorKind {
    /// Resolve the kind for an HTTP status, falling back to `Generic`
    pub fn from_status(status: u16) -> Self {
        STATUS_TABLE
            .iter()
            .find(|(code, _, _)| *code == status)
            .map(|(_, kind, _)| *kind)
            .unwrap_or(Self::Generic)
    }

    /// Canonical HTTP status for this kind; `None` for `Generic`
    pub fn status_code(&self) -> Option<u16> {
        match self {
            Self::BadRequest => Some(400),
            Self::Unauthorized => Some(401),
            Self::Forbidden => Some(403),
            Self::NotFound => Some(404),
            Self::Conflict => Some(409),
            Self::OverLimit => Some(413),
            Self::InternalServerError => Some(500),
            Self::NotImplemented => Some(501),
            Self::ServiceUnavailable => Some(503),
            Self::Generic => None,
        }
    }

    /// Message used when an error of this kind is built without one
    pub fn default_message(&self) -> Option<&'static str> {
        STATUS_TABLE
            .iter()
            .find(|(_, kind, _)| kind == self)
            .map(|(_, _, message)| *message)
    }

    pub fn is_generic(&self) -> bool {
        matches!(self, Self::Generic)
    }
}
