//! Scoring Engine Client
//!
//! HTTP client for the risk scoring engine. All knowledge of the engine's
//! two response shapes lives in [`RiskClient::predict`].

use reqwest::{Response, StatusCode};
use serde::de::DeserializeOwned;

use crate::config::Config;
use crate::constants::{HEALTH_PATH, PREDICT_PATH};
use crate::error::{ConsoleError, ConsoleResult};
use crate::models::{ForbiddenBody, HealthStatus, IncidentTelemetry, ScoreResult};

/// Scoring engine API client
#[derive(Debug, Clone)]
pub struct RiskClient {
    config: Config,
    http_client: reqwest::Client,
}

impl RiskClient {
    /// Create new client
    pub fn new(config: Config) -> ConsoleResult<Self> {
        let http_client = reqwest::Client::builder()
            .timeout(config.timeout())
            .build()
            .map_err(|e| ConsoleError::Config(format!("failed to create HTTP client: {}", e)))?;

        Ok(Self { config, http_client })
    }

    /// Submit telemetry and return the scored result
    ///
    /// A 403 is a policy denial, not a failure: the engine nests the scored
    /// result under `detail`. Other 2xx bodies carry it at the top level.
    /// Any other status is a server error and its body is not read.
    pub async fn predict(&self, payload: &IncidentTelemetry) -> ConsoleResult<ScoreResult> {
        let url = self.config.endpoint(PREDICT_PATH);
        tracing::info!("Submitting telemetry to {}", url);

        let response = self.http_client
            .post(&url)
            .json(payload)
            .send()
            .await?;

        let status = response.status();
        tracing::debug!("Engine answered {}", status);

        if status == StatusCode::FORBIDDEN {
            let body: ForbiddenBody = decode(response).await?;
            Ok(body.detail)
        } else if status.is_success() {
            decode(response).await
        } else {
            tracing::error!("Scoring request failed with status {}", status.as_u16());
            Err(ConsoleError::Server(status.as_u16()))
        }
    }

    /// Check engine health
    pub async fn health_check(&self) -> ConsoleResult<HealthStatus> {
        let url = self.config.endpoint(HEALTH_PATH);

        let response = self.http_client
            .get(&url)
            .send()
            .await?;

        if response.status().is_success() {
            decode(response).await
        } else {
            Err(ConsoleError::Server(response.status().as_u16()))
        }
    }
}

/// Read the whole body, then parse it as JSON
async fn decode<T: DeserializeOwned>(response: Response) -> ConsoleResult<T> {
    let bytes = response.bytes().await?;

    let value = serde_json::from_slice::<T>(&bytes)
        .inspect_err(|e| tracing::warn!("Engine body is not a valid result: {}", e))?;
    Ok(value)
}
