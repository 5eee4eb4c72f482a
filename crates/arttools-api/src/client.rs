use thiserror::Error;
use tracing::debug;

use crate::models::ArtToolRecord;

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("API request failed: {0}")]
    RequestFailed(String),

    #[error("Art tool not found: {0}")]
    NotFound(String),

    #[error("Network error: {0}")]
    NetworkError(#[from] reqwest::Error),

    #[error("JSON parsing failed: {0}")]
    ParseError(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, CatalogError>;

/// Client for the hosted art-tool catalog.
///
/// The API surface is tiny: the collection endpoint and one item by id.
/// No auth, no paging. Retries and caching are deliberately left to
/// callers that want them.
pub struct CatalogClient {
    client: reqwest::Client,
    base_url: String,
}

impl CatalogClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        let mut headers = reqwest::header::HeaderMap::new();
        headers.insert(
            reqwest::header::USER_AGENT,
            reqwest::header::HeaderValue::from_static("arttools/0.1.0"),
        );

        let client = reqwest::Client::builder()
            .default_headers(headers)
            .build()
            .expect("Failed to build HTTP client");

        Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    /// Fetch the whole catalog.
    pub async fn list_art_tools(&self) -> Result<Vec<ArtToolRecord>> {
        let response = self.client.get(&self.base_url).send().await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(CatalogError::RequestFailed(format!(
                "Status {}: {}",
                status, body
            )));
        }

        let body = response.text().await?;
        let records: Vec<ArtToolRecord> = serde_json::from_str(&body)?;
        debug!(count = records.len(), "fetched art tool catalog");
        Ok(records)
    }

    /// Fetch a single catalog item by id.
    pub async fn get_art_tool(&self, id: &str) -> Result<ArtToolRecord> {
        let url = format!("{}/{}", self.base_url, id);
        let response = self.client.get(&url).send().await?;

        if response.status() == 404 {
            return Err(CatalogError::NotFound(id.to_string()));
        }

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(CatalogError::RequestFailed(format!(
                "Status {}: {}",
                status, body
            )));
        }

        let body = response.text().await?;
        let record: ArtToolRecord = serde_json::from_str(&body)?;
        Ok(record)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trailing_slash_is_normalized() {
        let client = CatalogClient::new("https://example.com/api/art-tools/");
        assert_eq!(client.base_url, "https://example.com/api/art-tools");
    }

    #[tokio::test]
    async fn unreachable_catalog_surfaces_as_network_error() {
        // Port 9 (discard) is closed on any sane machine, so the
        // connection is refused without touching the network
        let client = CatalogClient::new("http://127.0.0.1:9/art-tools");

        let err = client.list_art_tools().await.unwrap_err();
        assert!(matches!(err, CatalogError::NetworkError(_)));

        let err = client.get_art_tool("1").await.unwrap_err();
        assert!(matches!(err, CatalogError::NetworkError(_)));
    }
}
