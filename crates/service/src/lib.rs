//! # PopAtlas Service
//!
//! Client for ArcGIS-style feature service REST layers, covering the subset
//! PopAtlas needs: point-intersection ("identify") queries against a layer's
//! `/query` endpoint, with typed attribute extraction for the World
//! Population 2015 dataset.
//!
//! The async [`FeatureServiceClient`] is the primary API; GUI worker threads
//! use the [`blocking`] wrappers so they don't have to manage a runtime.

pub mod attributes;
pub mod client;
pub mod error;
pub mod models;
pub mod sync_api;

pub use attributes::{format_population, summarize, FeatureSummary};
pub use client::{ClientOptions, FeatureService, FeatureServiceClient};
pub use error::{Result, ServiceError};
pub use models::{Feature, IdentifyParams, PointGeometry, QueryResponse};

/// Blocking API re-exported as `blocking` module.
pub mod blocking {
    pub use crate::sync_api::*;
}
