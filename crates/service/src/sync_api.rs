//! Blocking (synchronous) API for GUI worker threads.
//!
//! Wraps the async [`FeatureServiceClient`] with a current-thread Tokio
//! runtime so callers don't need to manage their own async runtime.

use crate::client::{ClientOptions, FeatureService, FeatureServiceClient};
use crate::error::{Result, ServiceError};
use crate::models::{Feature, IdentifyParams};

/// Blocking wrapper around [`FeatureServiceClient`].
pub struct FeatureServiceClientBlocking {
    rt: tokio::runtime::Runtime,
    inner: FeatureServiceClient,
}

impl FeatureServiceClientBlocking {
    /// Create a new blocking client for the given layer.
    pub fn new(service: FeatureService, options: ClientOptions) -> Result<Self> {
        let rt = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .map_err(|e| ServiceError::Network(e.to_string()))?;

        let inner = FeatureServiceClient::new(service, options)?;
        Ok(Self { rt, inner })
    }

    /// Run a point-intersection query (blocking).
    pub fn identify(&self, params: &IdentifyParams) -> Result<Vec<Feature>> {
        self.rt.block_on(self.inner.identify(params))
    }
}

/// One-shot convenience: query a layer at a point and return the features.
pub fn identify_at(
    service: FeatureService,
    params: &IdentifyParams,
    options: ClientOptions,
) -> Result<Vec<Feature>> {
    let client = FeatureServiceClientBlocking::new(service, options)?;
    client.identify(params)
}
