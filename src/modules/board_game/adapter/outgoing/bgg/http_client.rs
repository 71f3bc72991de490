use async_trait::async_trait;
use reqwest::{Client, Url};
use std::time::Duration;
use tracing::{debug, warn};

use super::xml::BggXmlParser;
use crate::board_game::application::domain::entities::{BggGame, BggSearchResult};
use crate::board_game::application::ports::outgoing::{BggClient, BggClientError};
use crate::shared::config::BggConfig;

const USER_AGENT: &str = "sbr-backend";

#[derive(Debug, thiserror::Error)]
pub enum BggSetupError {
    #[error("Failed to build HTTP client: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Failed to compile BGG patterns: {0}")]
    Pattern(#[from] regex::Error),
}

/// BGG XML API2 over HTTP. One request per call, no retries.
pub struct BggHttpClient {
    client: Client,
    base_url: String,
    parser: BggXmlParser,
}

impl BggHttpClient {
    pub fn new(config: &BggConfig) -> Result<Self, BggSetupError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            client,
            base_url: config.api_url.trim_end_matches('/').to_string(),
            parser: BggXmlParser::new()?,
        })
    }

    fn endpoint(&self, path: &str, params: &[(&str, String)]) -> Result<Url, BggClientError> {
        Url::parse_with_params(&format!("{}/{}", self.base_url, path), params)
            .map_err(|e| BggClientError::Malformed(format!("invalid BGG url: {e}")))
    }

    async fn get_text(&self, url: Url) -> Result<String, BggClientError> {
        debug!(%url, "Calling BGG");
        let response = self
            .client
            .get(url)
            .header("User-Agent", USER_AGENT)
            .send()
            .await
            .map_err(|e| BggClientError::Unavailable(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            warn!(%status, "BGG returned an error status");
            return Err(BggClientError::Unavailable(format!("status {status}")));
        }

        response
            .text()
            .await
            .map_err(|e| BggClientError::Unavailable(e.to_string()))
    }
}

#[async_trait]
impl BggClient for BggHttpClient {
    async fn fetch_game(&self, bgg_id: i32) -> Result<Option<BggGame>, BggClientError> {
        let url = self.endpoint(
            "thing",
            &[("id", bgg_id.to_string()), ("stats", "1".to_string())],
        )?;
        let xml = self.get_text(url).await?;
        Ok(self.parser.parse_thing(bgg_id, &xml))
    }

    async fn search(&self, query: &str) -> Result<Vec<BggSearchResult>, BggClientError> {
        let url = self.endpoint(
            "search",
            &[("query", query.to_string()), ("type", "boardgame".to_string())],
        )?;
        let xml = self.get_text(url).await?;
        Ok(self.parser.parse_search(&xml))
    }
}
