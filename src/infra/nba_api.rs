//! Thin asynchronous client for the NBA analytics service.

use async_trait::async_trait;
use reqwest::{Client, Url};
use thiserror::Error;
use tracing::debug;

use crate::domain::{AnalyticsPayload, ImpactKey};
use crate::infra::query::AnalyticsSource;
use crate::util::{config::AppConfig, version::user_agent};

const MISSING_PLAYER_PATH: &str = "analytics/missing-player";

#[derive(Debug, Error)]
pub enum NbaApiError {
    #[error("invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),
    #[error("http request error: {0}")]
    Http(#[from] reqwest::Error),
    #[error("api error: {0}")]
    Api(String),
}

#[derive(Clone)]
pub struct NbaApiClient {
    http: Client,
    base_url: Url,
}

impl NbaApiClient {
    pub fn from_config(config: &AppConfig) -> Result<Self, NbaApiError> {
        let http = Client::builder()
            .user_agent(user_agent())
            .timeout(config.request_timeout)
            .build()?;
        Ok(Self {
            http,
            base_url: config.api_base_url.clone(),
        })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    pub async fn analyze_missing_player(
        &self,
        team_id: &str,
        player_id: u32,
    ) -> Result<AnalyticsPayload, NbaApiError> {
        let url = self.missing_player_url(team_id, player_id)?;
        debug!("[nba-api] requesting {url}");

        let response = self.http.get(url).send().await?.error_for_status()?;
        let body = response.text().await?;
        serde_json::from_str(&body)
            .map_err(|err| NbaApiError::Api(format!("unexpected analytics payload: {err}")))
    }

    fn missing_player_url(&self, team_id: &str, player_id: u32) -> Result<Url, NbaApiError> {
        let mut url = self.base_url.join(MISSING_PLAYER_PATH)?;
        url.query_pairs_mut()
            .append_pair("team_id", team_id)
            .append_pair("player_id", &player_id.to_string());
        Ok(url)
    }
}

#[async_trait]
impl AnalyticsSource for NbaApiClient {
    type Error = NbaApiError;

    async fn analyze(&self, key: &ImpactKey) -> Result<AnalyticsPayload, NbaApiError> {
        self.analyze_missing_player(&key.team_id.0, key.player_id.0)
            .await
    }
}
