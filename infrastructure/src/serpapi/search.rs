//! Product search backed by SerpApi's Google Shopping engine.
//!
//! Issues one search per suggestion with fixed locale and result-count
//! parameters and normalizes the first entry of `shopping_results` into a
//! [`ProductRecord`]. Entries without any link are unusable and yield
//! "no result".

use adchat_application::ports::product_search::{ProductSearch, SearchError};
use adchat_domain::ProductRecord;
use async_trait::async_trait;
use serde_json::Value;
use tracing::debug;

const DEFAULT_BASE_URL: &str = "https://serpapi.com";

/// [`ProductSearch`] adapter for SerpApi.
pub struct SerpApiSearch {
    client: reqwest::Client,
    api_key: String,
    base_url: String,
}

impl SerpApiSearch {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::builder()
                .timeout(std::time::Duration::from_secs(30))
                .build()
                .expect("Failed to create HTTP client"),
            api_key: api_key.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }

    /// Override the API base URL (tests, proxies).
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }
}

#[async_trait]
impl ProductSearch for SerpApiSearch {
    async fn find_first(&self, query: &str) -> Result<Option<ProductRecord>, SearchError> {
        debug!(query = %query, "shopping search");

        let response = self
            .client
            .get(format!("{}/search", self.base_url))
            .query(&[
                ("engine", "google_shopping"),
                ("q", query),
                ("gl", "us"),
                ("hl", "en"),
                ("num", "10"),
                ("direct_link", "1"),
                ("tbs", "vw:l"),
                ("api_key", self.api_key.as_str()),
            ])
            .send()
            .await
            .map_err(|e| SearchError::Http(e.to_string()))?;

        if !response.status().is_success() {
            return Err(SearchError::Provider(format!(
                "search API returned {}",
                response.status()
            )));
        }

        let body: Value = response
            .json()
            .await
            .map_err(|e| SearchError::MalformedResponse(e.to_string()))?;

        Ok(first_listing(&body))
    }
}

/// Normalize the first usable entry of a SerpApi response.
///
/// Link prefers the direct `link` field over `product_link`; description
/// prefers `snippet` over `description`. No entries or no link yields
/// `None`.
pub fn first_listing(body: &Value) -> Option<ProductRecord> {
    let item = body["shopping_results"].as_array()?.first()?;

    let link = non_empty_str(&item["link"]).or_else(|| non_empty_str(&item["product_link"]))?;
    let name = item["title"].as_str().unwrap_or("");
    let description =
        non_empty_str(&item["snippet"]).or_else(|| non_empty_str(&item["description"]));

    Some(ProductRecord::normalized(
        name,
        link,
        description.unwrap_or(""),
    ))
}

fn non_empty_str(value: &Value) -> Option<&str> {
    value.as_str().filter(|s| !s.is_empty())
}
