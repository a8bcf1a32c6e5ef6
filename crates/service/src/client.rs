//! Async client for feature service layer queries.
//!
//! Knows the World Population 2015 layer out of the box, plus arbitrary
//! layer endpoints via [`FeatureService::Custom`].

use std::time::Duration;

use crate::error::{Result, ServiceError};
use crate::models::{Feature, IdentifyParams, QueryResponse};

// ---------------------------------------------------------------------------
// Service enum
// ---------------------------------------------------------------------------

/// Well-known feature service layers plus custom endpoints.
#[derive(Debug, Clone)]
pub enum FeatureService {
    /// UN World Population Data 2015, layer 0.
    WorldPopulation2015,
    /// Any feature layer endpoint (provide the layer URL, e.g.
    /// `".../arcgis/rest/services/MyData/FeatureServer/0"`).
    Custom(String),
}

impl FeatureService {
    /// Return the layer root URL.
    pub fn layer_url(&self) -> String {
        match self {
            Self::WorldPopulation2015 => {
                "https://services1.arcgis.com/4yjifSiIG17X0gW4/arcgis/rest/services/World_Population_Data_2015_from_UN/FeatureServer/0".to_string()
            }
            Self::Custom(url) => url.trim_end_matches('/').to_string(),
        }
    }

    /// Return the full `GET /query` URL for this layer.
    pub fn query_url(&self) -> String {
        let base = self.layer_url();
        if base.ends_with("/query") {
            base
        } else {
            format!("{}/query", base)
        }
    }
}

// ---------------------------------------------------------------------------
// Options
// ---------------------------------------------------------------------------

/// Configuration for [`FeatureServiceClient`].
pub struct ClientOptions {
    /// Per-request timeout (default 30 s).
    pub request_timeout: Duration,
    /// Maximum retries on transient failures (default 3).
    pub max_retries: u32,
}

impl Default for ClientOptions {
    fn default() -> Self {
        Self {
            request_timeout: Duration::from_secs(30),
            max_retries: 3,
        }
    }
}

// ---------------------------------------------------------------------------
// Client
// ---------------------------------------------------------------------------

/// Async client for point-intersection queries against a feature layer.
pub struct FeatureServiceClient {
    service: FeatureService,
    client: reqwest::Client,
    options: ClientOptions,
}

impl FeatureServiceClient {
    /// Create a new client for the given layer.
    pub fn new(service: FeatureService, options: ClientOptions) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(options.request_timeout)
            .build()
            .map_err(|e| ServiceError::Network(format!("failed to build HTTP client: {e}")))?;

        Ok(Self {
            service,
            client,
            options,
        })
    }

    /// The layer this client is configured for.
    pub fn service(&self) -> &FeatureService {
        &self.service
    }

    /// Run a point-intersection query and return the matching features.
    pub async fn identify(&self, params: &IdentifyParams) -> Result<Vec<Feature>> {
        let url = self.service.query_url();
        tracing::debug!(
            lon = params.lon,
            lat = params.lat,
            tolerance_m = params.tolerance_m,
            "feature query: {url}"
        );

        let request = self.client.get(&url).query(&params.to_query());
        let resp = self.execute_with_retry(request).await?;

        let status = resp.status();
        if !status.is_success() {
            return Err(ServiceError::Network(format!(
                "HTTP {status} querying {url}"
            )));
        }

        let body: QueryResponse = resp
            .json()
            .await
            .map_err(|e| ServiceError::InvalidResponse {
                reason: e.to_string(),
            })?;

        if let Some(fault) = body.error {
            return Err(ServiceError::Service {
                code: fault.code,
                message: fault.message,
            });
        }

        tracing::debug!(hits = body.features.len(), "feature query complete");
        Ok(body.features)
    }

    /// Execute a request with exponential backoff retry on transient errors.
    async fn execute_with_retry(
        &self,
        request: reqwest::RequestBuilder,
    ) -> std::result::Result<reqwest::Response, reqwest::Error> {
        for attempt in 0..self.options.max_retries {
            if attempt > 0 {
                let backoff_ms = 100u64 * 2u64.pow(attempt - 1);
                tracing::warn!(attempt, backoff_ms, "retrying feature query");
                tokio::time::sleep(Duration::from_millis(backoff_ms)).await;
            }

            match request.try_clone() {
                Some(cloned) => match cloned.send().await {
                    Ok(resp) => return Ok(resp),
                    Err(e) if e.is_timeout() || e.is_connect() => continue,
                    Err(e) => return Err(e),
                },
                // Non-clonable request body, single attempt only.
                None => return request.send().await,
            }
        }

        request.send().await
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
