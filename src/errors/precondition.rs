use thiserror::Error;

/// Failures detected by client code before any request reaches the image API
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PreconditionError {
    /// Invalid command-line invocation
    #[error("{}", describe(.0, "invalid command"))]
    Command(Option<String>),

    /// The active authentication mode cannot look up endpoints from a token
    #[error("{}", describe(.0, "endpoint lookup from an existing token is not supported"))]
    NoTokenLookup(Option<String>),

    /// Service or region missing from the service catalog
    #[error("{}", describe(.0, "could not find service or region in service catalog"))]
    EndpointNotFound(Option<String>),

    /// Schema key missing from the schema registry
    #[error("{}", describe(.0, "could not find schema"))]
    SchemaNotFound(Option<String>),

    /// Endpoint string could not be used
    #[error("{}", describe(.0, "the provided endpoint could not be used"))]
    InvalidEndpoint(Option<String>),
}

fn describe<'a>(message: &'a Option<String>, fallback: &'a str) -> &'a str {
    message.as_deref().unwrap_or(fallback)
}

impl PreconditionError {
    pub fn command(message: impl Into<String>) -> Self {
        Self::Command(Some(message.into()))
    }

    pub fn no_token_lookup(message: impl Into<String>) -> Self {
        Self::NoTokenLookup(Some(message.into()))
    }

    pub fn endpoint_not_found(message: impl Into<String>) -> Self {
        Self::EndpointNotFound(Some(message.into()))
    }

    pub fn schema_not_found(message: impl Into<String>) -> Self {
        Self::SchemaNotFound(Some(message.into()))
    }

    pub fn invalid_endpoint(message: impl Into<String>) -> Self {
        Self::InvalidEndpoint(Some(message.into()))
    }

    /// Message given at the detection site, if any
    pub fn message(&self) -> Option<&str> {
        match self {
            Self::Command(m)
            | Self::NoTokenLookup(m)
            | Self::EndpointNotFound(m)
            | Self::SchemaNotFound(m)
            | Self::InvalidEndpoint(m) => m.as_deref(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_rendering() {
        assert_eq!(PreconditionError::Command(None).to_string(), "invalid command");
        assert_eq!(
            PreconditionError::EndpointNotFound(None).to_string(),
            "could not find service or region in service catalog"
        );
        assert_eq!(
            PreconditionError::SchemaNotFound(None).to_string(),
            "could not find schema"
        );
        assert_eq!(PreconditionError::InvalidEndpoint(None).message(), None);
    }

    #[test]
    fn test_message_rendering() {
        let err = PreconditionError::schema_not_found("schema 'image' is not registered");
        assert_eq!(err.to_string(), "schema 'image' is not registered");
        assert_eq!(err.message(), Some("schema 'image' is not registered"));
        assert!(matches!(err, PreconditionError::SchemaNotFound(_)));
    }

    #[test]
    fn test_kinds_are_distinct() {
        assert_ne!(
            PreconditionError::no_token_lookup("x"),
            PreconditionError::invalid_endpoint("x")
        );
    }
}
