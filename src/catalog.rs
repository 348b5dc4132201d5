use reqwest::Url;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::endpoint::parse_endpoint;
use crate::errors::PreconditionError;

/// One published endpoint in the service catalog
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogEntry {
    pub service_type: String,
    pub region: String,
    pub url: String,
}

/// Service catalog returned alongside an authentication token
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceCatalog {
    #[serde(default)]
    pub entries: Vec<CatalogEntry>,
}

impl ServiceCatalog {
    pub fn new(entries: Vec<CatalogEntry>) -> Self {
        Self { entries }
    }

    /// Find the endpoint published for `service_type` in `region`
    pub fn endpoint_for(&self, service_type: &str, region: &str) -> Result<Url, PreconditionError> {
        let entry = self
            .entries
            .iter()
            .find(|e| e.service_type == service_type && e.region == region)
            .ok_or_else(|| {
                debug!(service_type, region, "No catalog entry");
                PreconditionError::endpoint_not_found(format!(
                    "no '{}' endpoint in region '{}'",
                    service_type, region
                ))
            })?;

        parse_endpoint(&entry.url)
    }
}

/// How the client authenticates
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthMode {
    /// Token with the catalog it was issued with
    Token {
        token: String,
        catalog: ServiceCatalog,
    },
    /// Pre-issued token and nothing else
    BareToken(String),
    /// No authentication
    Anonymous,
}

impl AuthMode {
    /// Resolve a service endpoint through the token's catalog
    pub fn lookup_endpoint(&self, service_type: &str, region: &str) -> Result<Url, PreconditionError> {
        match self {
            Self::Token { catalog, .. } => catalog.endpoint_for(service_type, region),
            Self::BareToken(_) => Err(PreconditionError::no_token_lookup(
                "a bare token carries no service catalog; set an explicit endpoint",
            )),
            Self::Anonymous => Err(PreconditionError::no_token_lookup(
                "anonymous access cannot look up endpoints; set an explicit endpoint",
            )),
        }
    }
}
