use anyhow::{Context, Result};
use reqwest::Url;
use std::env;

use crate::catalog::{AuthMode, ServiceCatalog};
use crate::endpoint::parse_endpoint;
use crate::errors::PreconditionError;

#[derive(Debug, Clone)]
pub struct Config {
    pub endpoint: Option<Url>,
    pub auth_token: Option<String>,
    pub region: String,
    pub service_type: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        // Load .env file if it exists
        dotenvy::dotenv().ok();

        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build from an arbitrary variable source
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let endpoint = lookup("GLANCE_ENDPOINT")
            .filter(|v| !v.trim().is_empty())
            .map(|v| parse_endpoint(&v))
            .transpose()
            .context("GLANCE_ENDPOINT must be an http(s) URL")?;

        Ok(Config {
            endpoint,
            auth_token: lookup("GLANCE_AUTH_TOKEN").filter(|v| !v.is_empty()),
            region: lookup("GLANCE_REGION").unwrap_or_else(|| "RegionOne".to_string()),
            service_type: lookup("GLANCE_SERVICE_TYPE").unwrap_or_else(|| "image".to_string()),
        })
    }

    /// Authentication mode implied by the configured token
    pub fn auth_mode(&self, catalog: Option<ServiceCatalog>) -> AuthMode {
        match (&self.auth_token, catalog) {
            (Some(token), Some(catalog)) => AuthMode::Token {
                token: token.clone(),
                catalog,
            },
            (Some(token), None) => AuthMode::BareToken(token.clone()),
            (None, _) => AuthMode::Anonymous,
        }
    }

    /// Explicit endpoint if configured, otherwise a catalog lookup
    pub fn resolve_endpoint(&self, catalog: Option<ServiceCatalog>) -> Result<Url, PreconditionError> {
        if let Some(endpoint) = &self.endpoint {
            return Ok(endpoint.clone());
        }

        self.auth_mode(catalog)
            .lookup_endpoint(&self.service_type, &self.region)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::CatalogEntry;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| vars.get(key).cloned()
    }

    fn catalog() -> ServiceCatalog {
        ServiceCatalog::new(vec![CatalogEntry {
            service_type: "image".to_string(),
            region: "RegionOne".to_string(),
            url: "https://image.example.com".to_string(),
        }])
    }

    #[test]
    fn test_defaults() {
        let config = Config::from_lookup(lookup(&[])).unwrap();
        assert!(config.endpoint.is_none());
        assert!(config.auth_token.is_none());
        assert_eq!(config.region, "RegionOne");
        assert_eq!(config.service_type, "image");
    }

    #[test]
    fn test_invalid_endpoint() {
        let err = Config::from_lookup(lookup(&[("GLANCE_ENDPOINT", "image.example.com")]))
            .unwrap_err();
        assert!(matches!(
            err.downcast_ref::<PreconditionError>(),
            Some(PreconditionError::InvalidEndpoint(_))
        ));
    }

    #[test]
    fn test_explicit_endpoint_wins() {
        let config = Config::from_lookup(lookup(&[(
            "GLANCE_ENDPOINT",
            "http://localhost:9292/",
        )]))
        .unwrap();
        let url = config.resolve_endpoint(None).unwrap();
        assert_eq!(url.as_str(), "http://localhost:9292/");
    }

    #[test]
    fn test_catalog_lookup_needs_token() {
        let config = Config::from_lookup(lookup(&[])).unwrap();
        assert!(matches!(
            config.resolve_endpoint(Some(catalog())),
            Err(PreconditionError::NoTokenLookup(_))
        ));

        let config = Config::from_lookup(lookup(&[("GLANCE_AUTH_TOKEN", "abc")])).unwrap();
        assert!(matches!(
            config.resolve_endpoint(None),
            Err(PreconditionError::NoTokenLookup(_))
        ));
        let url = config.resolve_endpoint(Some(catalog())).unwrap();
        assert_eq!(url.host_str(), Some("image.example.com"));
    }

    #[test]
    fn test_catalog_region_missing() {
        let config = Config::from_lookup(lookup(&[
            ("GLANCE_AUTH_TOKEN", "abc"),
            ("GLANCE_REGION", "RegionTwo"),
        ]))
        .unwrap();
        assert!(matches!(
            config.resolve_endpoint(Some(catalog())),
            Err(PreconditionError::EndpointNotFound(_))
        ));
    }
}
