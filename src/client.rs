use async_trait::async_trait;
use log::debug;
use reqwest::Client;
use std::time::Duration;

use crate::config::{ApiConfig, BrowserConfig};
use crate::error::FetchError;
use crate::model::{Recipe, SearchResponse};
use crate::pagination::PageWindow;

/// Anything that can answer recipe searches
#[async_trait]
pub trait RecipeSource: Send + Sync {
    /// Get the source name (e.g., "edamam")
    fn source_name(&self) -> &str;

    /// Free-text search
    async fn search(&self, query: &str) -> Result<Vec<Recipe>, FetchError>;

    /// One window of the random listing
    async fn random_page(&self, window: PageWindow) -> Result<Vec<Recipe>, FetchError>;
}

/// HTTP client for the Edamam recipe search endpoint
pub struct EdamamClient {
    client: Client,
    endpoint: String,
    app_id: Option<String>,
    app_key: Option<String>,
    random_query: String,
}

impl EdamamClient {
    pub fn new(config: &ApiConfig, timeout: Option<Duration>) -> Result<Self, reqwest::Error> {
        let timeout = timeout.unwrap_or(Duration::from_secs(30));
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(concat!("cookify/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            client,
            endpoint: format!("{}/search", config.base_url.trim_end_matches('/')),
            app_id: config.app_id.clone(),
            app_key: config.app_key.clone(),
            random_query: config.random_query.clone(),
        })
    }

    pub fn from_config(config: &BrowserConfig) -> Result<Self, reqwest::Error> {
        Self::new(&config.api, Some(Duration::from_secs(config.timeout)))
    }

    async fn fetch(&self, query: &str, window: Option<PageWindow>) -> Result<Vec<Recipe>, FetchError> {
        let app_id = self
            .app_id
            .as_deref()
            .ok_or(FetchError::MissingCredential("app_id"))?;
        let app_key = self
            .app_key
            .as_deref()
            .ok_or(FetchError::MissingCredential("app_key"))?;

        let mut request = self
            .client
            .get(&self.endpoint)
            .query(&[("q", query), ("app_id", app_id), ("app_key", app_key)]);
        if let Some(window) = window {
            request = request.query(&[("from", window.from()), ("to", window.to())]);
        }

        debug!("GET {} q={:?} window={:?}", self.endpoint, query, window);
        let response = request.send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status(status.as_u16()));
        }

        let body = response.text().await?;
        let parsed: SearchResponse = serde_json::from_str(&body)?;
        let recipes = parsed.into_recipes();
        debug!("Received {} recipes", recipes.len());
        Ok(recipes)
    }
}

#[async_trait]
impl RecipeSource for EdamamClient {
    fn source_name(&self) -> &str {
        "edamam"
    }

    async fn search(&self, query: &str) -> Result<Vec<Recipe>, FetchError> {
        self.fetch(query, None).await
    }

    async fn random_page(&self, window: PageWindow) -> Result<Vec<Recipe>, FetchError> {
        self.fetch(&self.random_query, Some(window)).await
    }
}
