use async_trait::async_trait;
use reqwest::{Client, Url};
use serde_json::Value;
use tracing::{debug, info};

use crate::chart::{DepthChartEntry, Player, SavePayload};
use crate::config::ApiConfig;
use crate::error::{DepthChartError, Result};
use crate::parser::{parse_depth_chart, parse_roster};

/// The roster service as seen by a depth chart session
#[async_trait]
pub trait RosterApi: Send + Sync {
    async fn fetch_roster(&self, team_id: &str) -> Result<Vec<Player>>;

    /// Saved ranks for the team. A team with no saved chart yields an empty list.
    async fn fetch_depth_chart(&self, team_id: &str) -> Result<Vec<DepthChartEntry>>;

    async fn save_depth_chart(&self, payload: &SavePayload) -> Result<()>;
}

/// reqwest-backed client for the roster service
pub struct HttpRosterApi {
    config: ApiConfig,
    http: Client,
}

impl HttpRosterApi {
    pub fn new(config: ApiConfig) -> Result<Self> {
        let http = Client::builder().timeout(config.timeout).build()?;
        Ok(Self { config, http })
    }

    pub fn config(&self) -> &ApiConfig {
        &self.config
    }

    async fn get_json(&self, url: Url) -> Result<Value> {
        let response = self.http.get(url.clone()).send().await?;
        if !response.status().is_success() {
            return Err(DepthChartError::Status {
                status: response.status(),
                url: url.to_string(),
            });
        }
        Ok(response.json().await?)
    }
}

#[async_trait]
impl RosterApi for HttpRosterApi {
    async fn fetch_roster(&self, team_id: &str) -> Result<Vec<Player>> {
        let url = self.config.team_url(team_id, "roster")?;
        let body = self.get_json(url).await?;
        let roster = parse_roster(&body)?;
        info!(team_id, players = roster.len(), "fetched roster");
        Ok(roster)
    }

    async fn fetch_depth_chart(&self, team_id: &str) -> Result<Vec<DepthChartEntry>> {
        let url = self.config.team_url(team_id, "depth_chart")?;
        let body = match self.get_json(url).await {
            Ok(body) => body,
            Err(DepthChartError::Status { status, .. }) => {
                debug!(team_id, %status, "no saved depth chart");
                return Ok(Vec::new());
            }
            Err(e) => return Err(e),
        };
        let entries = parse_depth_chart(&body)?;
        info!(team_id, entries = entries.len(), "fetched saved depth chart");
        Ok(entries)
    }

    async fn save_depth_chart(&self, payload: &SavePayload) -> Result<()> {
        let url = self.config.team_url(&payload.team_id, "depth_chart_post")?;
        let response = self.http.post(url.clone()).json(payload).send().await?;
        if !response.status().is_success() {
            return Err(DepthChartError::Status {
                status: response.status(),
                url: url.to_string(),
            });
        }
        info!(team_id = %payload.team_id, "saved depth chart");
        Ok(())
    }
}
