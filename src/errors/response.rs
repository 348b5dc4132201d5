use serde::{Deserialize, Serialize};

use super::client::{classify, ClientError};

/// Anything that exposes the numeric status of a completed HTTP response
pub trait HttpResponse {
    fn status(&self) -> u16;
}

impl HttpResponse for u16 {
    fn status(&self) -> u16 {
        *self
    }
}

impl HttpResponse for reqwest::StatusCode {
    fn status(&self) -> u16 {
        self.as_u16()
    }
}

impl HttpResponse for reqwest::Response {
    fn status(&self) -> u16 {
        reqwest::Response::status(self).as_u16()
    }
}

/// Response summary for callers that have already read the transport response
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResponseDescriptor {
    /// HTTP status code
    pub status: u16,
    /// Message reported by the server, if any
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    /// Additional context (optional)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ResponseDescriptor {
    pub fn new(status: u16) -> Self {
        Self {
            status,
            ..Self::default()
        }
    }

    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }

    /// Classify by status, then apply the reported message and details
    pub fn into_error(self) -> ClientError {
        let mut error = classify(&self);
        if let Some(message) = self.message.filter(|m| !m.is_empty()) {
            error = error.with_message(message);
        }
        if let Some(details) = self.details {
            error = error.with_details(details);
        }
        error
    }
}

impl HttpResponse for ResponseDescriptor {
    fn status(&self) -> u16 {
        self.status
    }
}

/// Pass responses below 400 through, classify everything else
pub fn error_for_status<R: HttpResponse>(response: R) -> Result<R, ClientError> {
    if response.status() >= 400 {
        Err(classify(&response))
    } else {
        Ok(response)
    }
}
