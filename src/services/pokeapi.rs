use crate::config::UpstreamSettings;
use crate::core::PokemonName;
use crate::models::ListingPage;
use reqwest::Client;
use serde_json::value::RawValue;
use thiserror::Error;

/// Errors that can occur when talking to PokeAPI
#[derive(Debug, Error)]
pub enum PokeApiError {
    #[error("upstream returned status {0}")]
    Status(u16),

    #[error("no response from upstream: {0}")]
    Transport(#[source] reqwest::Error),

    #[error("invalid response format: {0}")]
    InvalidResponse(String),

    #[error("failed to build upstream request: {0}")]
    Request(#[source] reqwest::Error),
}

impl PokeApiError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, PokeApiError::Status(404))
    }
}

impl From<reqwest::Error> for PokeApiError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            PokeApiError::InvalidResponse(err.to_string())
        } else if err.is_builder() {
            PokeApiError::Request(err)
        } else {
            PokeApiError::Transport(err)
        }
    }
}

/// PokeAPI client
///
/// One shared connection pool; every call is a single GET bounded by the
/// configured timeouts.
pub struct PokeApiClient {
    base_url: String,
    list_limit: u32,
    client: Client,
}

impl PokeApiClient {
    pub fn new(settings: &UpstreamSettings) -> Result<Self, PokeApiError> {
        let client = Client::builder()
            .timeout(settings.timeout())
            .connect_timeout(settings.connect_timeout())
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(PokeApiError::Request)?;

        Ok(Self {
            base_url: settings.base_url.trim_end_matches('/').to_string(),
            list_limit: settings.list_limit,
            client,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Fetch the first page of the listing and return its `results` array
    /// exactly as upstream sent it
    pub async fn list(&self) -> Result<Box<RawValue>, PokeApiError> {
        let url = format!("{}/pokemon", self.base_url);

        tracing::debug!("Fetching listing from: {} (limit {})", url, self.list_limit);

        let response = self
            .client
            .get(&url)
            .query(&[("limit", self.list_limit)])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(PokeApiError::Status(status.as_u16()));
        }

        let page: ListingPage = response.json().await?;

        if !page.results_is_array() {
            return Err(PokeApiError::InvalidResponse(
                "listing `results` is not an array".to_string(),
            ));
        }

        tracing::debug!("Fetched listing ({} bytes)", page.results.get().len());

        Ok(page.results)
    }

    /// Fetch the raw detail body for `name`
    ///
    /// The body is returned untouched once it is known to be a JSON object.
    pub async fn detail(&self, name: &PokemonName) -> Result<bytes::Bytes, PokeApiError> {
        let url = format!(
            "{}/pokemon/{}",
            self.base_url,
            urlencoding::encode(name.as_str())
        );

        tracing::debug!("Fetching detail from: {}", url);

        let response = self.client.get(&url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(PokeApiError::Status(status.as_u16()));
        }

        let body = response.bytes().await?;

        serde_json::from_slice::<serde_json::Map<String, serde_json::Value>>(&body).map_err(|e| {
            PokeApiError::InvalidResponse(format!("Failed to parse detail for {}: {}", name, e))
        })?;

        Ok(body)
    }
}
