use std::time::Duration;
use reqwest::Url;
use crate::error::{DepthChartError, Result};

pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Where the roster service lives. Built once and handed to the client.
#[derive(Debug, Clone)]
pub struct ApiConfig {
    pub base_url: Url,
    pub timeout: Duration,
}

impl ApiConfig {
    pub fn new(base_url: &str) -> Result<Self> {
        let base_url = Url::parse(base_url.trim())
            .map_err(|e| DepthChartError::config(format!("invalid API base URL '{}': {}", base_url, e)))?;
        if base_url.scheme() != "http" && base_url.scheme() != "https" {
            return Err(DepthChartError::config(format!(
                "API base URL must be http or https, got '{}'",
                base_url.scheme()
            )));
        }
        Ok(Self {
            base_url,
            timeout: DEFAULT_TIMEOUT,
        })
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// `{base}/teams/{team_id}/{resource}`, with `team_id` encoded as one path segment
    pub fn team_url(&self, team_id: &str, resource: &str) -> Result<Url> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| DepthChartError::config(format!("'{}' cannot be used as a base URL", self.base_url)))?
            .pop_if_empty()
            .push("teams")
            .push(team_id)
            .push(resource);
        Ok(url)
    }
}
