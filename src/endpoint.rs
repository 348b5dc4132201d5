use reqwest::Url;
use tracing::debug;

use crate::errors::PreconditionError;

/// Validate an image API endpoint.
///
/// Only absolute `http`/`https` URLs with a host are accepted. Trailing slashes
/// are dropped from the path so request paths can be appended.
pub fn parse_endpoint(raw: &str) -> Result<Url, PreconditionError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(PreconditionError::invalid_endpoint("endpoint is empty"));
    }

    let mut url = Url::parse(trimmed).map_err(|e| {
        debug!(endpoint = %trimmed, error = %e, "Rejected endpoint");
        PreconditionError::invalid_endpoint(format!("'{}' is not a valid URL: {}", trimmed, e))
    })?;

    if !matches!(url.scheme(), "http" | "https") {
        return Err(PreconditionError::invalid_endpoint(format!(
            "'{}' must use http or https, not {}",
            trimmed,
            url.scheme()
        )));
    }

    if url.host_str().map_or(true, str::is_empty) {
        return Err(PreconditionError::invalid_endpoint(format!(
            "'{}' has no host",
            trimmed
        )));
    }

    let path = url.path().trim_end_matches('/').to_string();
    url.set_path(&path);

    Ok(url)
}
