use crate::core::ViewState;
use crate::models::{DetailRecord, ErrorResponse, ListingEntry};
use reqwest::Client;
use std::time::Duration;
use thiserror::Error;

/// Text the list view shows when the listing cannot be loaded
pub const LISTING_FAILED: &str = "Failed to load pokemon list. Please try again.";

/// Text the detail view shows for any failed fetch
pub const DETAIL_FAILED: &str = "Failed to fetch Pokémon details";

/// Errors that can occur when consuming the relay
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("HTTP request failed: {0}")]
    RequestError(#[from] reqwest::Error),

    #[error("relay returned {status}: {message}")]
    Status {
        status: u16,
        message: String,
        error: Option<String>,
    },
}

/// Typed client for the relay's JSON contract
///
/// Used by the list and detail views: one request per navigation, settled
/// into a [`ViewState`].
pub struct CatalogClient {
    base_url: String,
    client: Client,
}

impl CatalogClient {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self, CatalogError> {
        let client = Client::builder().timeout(timeout).build()?;

        Ok(Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            client,
        })
    }

    pub async fn fetch_listing(&self) -> Result<Vec<ListingEntry>, CatalogError> {
        let url = format!("{}/api/pokemons", self.base_url);
        let response = self.client.get(&url).send().await?;
        Self::decode(response).await
    }

    pub async fn fetch_detail(&self, name: &str) -> Result<DetailRecord, CatalogError> {
        let url = format!("{}/api/pokemon/{}", self.base_url, urlencoding::encode(name));
        let response = self.client.get(&url).send().await?;
        Self::decode(response).await
    }

    /// Run the list view's fetch cycle
    pub async fn load_listing(&self) -> ViewState<Vec<ListingEntry>> {
        ViewState::settle(self.fetch_listing().await, |err| {
            tracing::error!("Error fetching pokemon list: {}", err);
            LISTING_FAILED.to_string()
        })
    }

    /// Run the detail view's fetch cycle for `name`
    ///
    /// The relay's own error body is logged, not shown.
    pub async fn load_detail(&self, name: &str) -> ViewState<DetailRecord> {
        ViewState::settle(self.fetch_detail(name).await, |err| {
            tracing::error!("Error fetching pokemon {}: {}", name, err);
            DETAIL_FAILED.to_string()
        })
    }

    async fn decode<T: serde::de::DeserializeOwned>(
        response: reqwest::Response,
    ) -> Result<T, CatalogError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response.json().await?);
        }

        let body = response.json::<ErrorResponse>().await.ok();
        Err(CatalogError::Status {
            status: status.as_u16(),
            message: body.as_ref().map(|b| b.message.clone()).unwrap_or_default(),
            error: body.map(|b| b.error),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_client_creation() {
        let client = CatalogClient::new("http://localhost:5000/", Duration::from_secs(1)).unwrap();
        assert_eq!(client.base_url, "http://localhost:5000");
    }
}
