use std::time::Duration;

use reqwest::Client;

use crate::config::ApiConfig;
use crate::listing::endpoint::ListingRequest;
use crate::listing::error::FetchError;
use crate::listing::types::ListingPayload;

/// HTTP client for listing endpoints.
///
/// The HTTP status is not inspected: Reddit reports failures such as unknown
/// communities as JSON bodies with an `error` field, and those are decoded
/// like any other body.
#[derive(Clone)]
pub struct ListingClient {
    client: Client,
    base_url: String,
}

impl ListingClient {
    pub fn new(api: &ApiConfig) -> Result<Self, FetchError> {
        let client = Client::builder()
            .user_agent(api.user_agent.clone())
            .connect_timeout(Duration::from_secs(u64::from(api.connect_timeout_seconds)))
            .build()?;

        Ok(Self {
            client,
            base_url: api.base_url.clone(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn url_for(&self, request: &ListingRequest) -> String {
        request.url(&self.base_url)
    }

    pub async fn fetch(&self, request: &ListingRequest) -> Result<ListingPayload, FetchError> {
        let url = self.url_for(request);
        tracing::debug!(%url, "fetching listing");

        let response = self.client.get(&url).send().await?;
        let status = response.status();
        let body = response.bytes().await?;
        tracing::debug!(%url, status = status.as_u16(), bytes = body.len(), "listing response");

        ListingPayload::from_slice(&body)
    }
}
