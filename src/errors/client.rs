use serde::Serialize;
use thiserror::Error;
use tracing::debug;

use super::codes::ErrorKind;
use super::response::HttpResponse;

/// Error returned to callers when the image API answers with a failure status
///
/// Immutable once built: the builders consume and return a new value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Error)]
#[error("{message} (HTTP {code})")]
pub struct ClientError {
    kind: ErrorKind,
    code: u16,
    message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    details: Option<String>,
}

impl ClientError {
    /// Create the error for `code`, with the kind's default message.
    ///
    /// The kind always comes from the status table, so kind and code never
    /// disagree. Unmapped codes get the `Generic` kind and an empty message.
    pub fn from_status(code: u16) -> Self {
        let kind = ErrorKind::from_status(code);
        Self {
            kind,
            code,
            message: kind.default_message().unwrap_or_default().to_string(),
            details: None,
        }
    }

    /// Replace the message; the status code is left as is.
    ///
    /// An empty message keeps the kind's default.
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        let message = message.into();
        if !message.is_empty() {
            self.message = message;
        }
        self
    }

    /// Attach free-form details
    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }

    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    pub fn code(&self) -> u16 {
        self.code
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn details(&self) -> Option<&str> {
        self.details.as_deref()
    }

    /// 4xx status
    pub fn is_client_error(&self) -> bool {
        (400..500).contains(&self.code)
    }

    /// 5xx status
    pub fn is_server_error(&self) -> bool {
        (500..600).contains(&self.code)
    }
}

/// Build the most specific error for a response's status code.
///
/// Never fails: statuses without a table entry produce the `Generic` kind with
/// the original code and an empty message.
pub fn classify<R: HttpResponse + ?Sized>(response: &R) -> ClientError {
    classify_status(response.status())
}

/// Same as [`classify`] for a bare status code
pub fn classify_status(status: u16) -> ClientError {
    let error = ClientError::from_status(status);
    debug!(status, kind = %error.kind(), "Classified error response");
    error
}
