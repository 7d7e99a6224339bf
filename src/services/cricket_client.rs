//! Client for the external cricket-data API.
//!
//! The upstream service returns loosely structured JSON; we pass match and
//! player payloads through as `serde_json::Value` and let callers decide
//! how much of them to surface.

use secrecy::{ExposeSecret, SecretString};
use serde_json::Value;
use std::time::Duration;
use thiserror::Error;

use crate::config::cricket_api::CricketApiSettings;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Debug, Error)]
pub enum CricketApiError {
    #[error("cricket API request failed: {0}")]
    Request(#[from] reqwest::Error),
    #[error("unexpected cricket API payload: {0}")]
    UnexpectedPayload(String),
}

#[derive(Debug, Clone)]
pub struct CricketApiClient {
    http: reqwest::Client,
    base_url: String,
    api_key: Option<SecretString>,
}

impl CricketApiClient {
    pub fn new(settings: &CricketApiSettings) -> Result<Self, CricketApiError> {
        let http = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()?;

        Ok(Self {
            http,
            base_url: settings.base_url.trim_end_matches('/').to_string(),
            api_key: settings.api_key.clone(),
        })
    }

    async fn get(&self, endpoint: &str) -> Result<Value, CricketApiError> {
        let url = format!("{}/{}", self.base_url, endpoint);
        let mut request = self.http.get(&url).header("Accept", "application/json");

        if let Some(api_key) = &self.api_key {
            request = request.query(&[("apikey", api_key.expose_secret())]);
        }

        let response = request.send().await?.error_for_status()?;
        let payload = response.json::<Value>().await?;
        Ok(payload)
    }

    /// Matches currently in progress, per the upstream feed.
    pub async fn live_matches(&self) -> Result<Vec<Value>, CricketApiError> {
        let payload = self.get("matches").await?;
        matches_with_status(&payload, "live")
    }

    pub async fn upcoming_matches(&self) -> Result<Vec<Value>, CricketApiError> {
        let payload = self.get("matches").await?;
        matches_with_status(&payload, "upcoming")
    }

    pub async fn recent_matches(&self) -> Result<Vec<Value>, CricketApiError> {
        let payload = self.get("matches").await?;
        matches_with_status(&payload, "completed")
    }
}

/// Filter the `data` array of an upstream matches payload by status.
fn matches_with_status(payload: &Value, status: &str) -> Result<Vec<Value>, CricketApiError> {
    let data = payload
        .get("data")
        .and_then(Value::as_array)
        .ok_or_else(|| {
            CricketApiError::UnexpectedPayload("missing `data` array in matches response".into())
        })?;

    Ok(data
        .iter()
        .filter(|m| m.get("status").and_then(Value::as_str) == Some(status))
        .cloned()
        .collect())
}
