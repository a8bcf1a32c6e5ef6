//! Request and response models for feature service `/query` calls.
//!
//! Lightweight serde models for the ArcGIS REST query protocol, covering the
//! subset PopAtlas needs: point-intersection queries with a search distance,
//! untyped attribute maps, and point geometries. Unknown fields are ignored.

use std::collections::HashMap;

use serde::Deserialize;

// ---------------------------------------------------------------------------
// Query request
// ---------------------------------------------------------------------------

/// Parameters for a point-intersection ("identify") query.
#[derive(Debug, Clone)]
pub struct IdentifyParams {
    /// Query point longitude (WGS-84).
    pub lon: f64,
    /// Query point latitude (WGS-84).
    pub lat: f64,
    /// Search distance around the point, in metres.
    pub tolerance_m: f64,
    /// Maximum number of features to return.
    pub max_results: u32,
    /// Whether to request feature geometries.
    pub return_geometry: bool,
}

impl IdentifyParams {
    /// Create params for a query at the given WGS-84 lon/lat.
    pub fn new(lon: f64, lat: f64) -> Self {
        Self {
            lon,
            lat,
            tolerance_m: 0.0,
            max_results: 5,
            return_geometry: true,
        }
    }

    /// Set the search distance in metres.
    pub fn tolerance_meters(mut self, m: f64) -> Self {
        self.tolerance_m = m;
        self
    }

    /// Set the maximum number of returned features.
    pub fn max_results(mut self, n: u32) -> Self {
        self.max_results = n;
        self
    }

    /// Skip geometries in the response.
    pub fn without_geometry(mut self) -> Self {
        self.return_geometry = false;
        self
    }

    /// Render the params as `GET /query` key/value pairs.
    pub fn to_query(&self) -> Vec<(String, String)> {
        let mut pairs = vec![
            ("f".to_string(), "json".to_string()),
            ("geometry".to_string(), format!("{},{}", self.lon, self.lat)),
            ("geometryType".to_string(), "esriGeometryPoint".to_string()),
            ("inSR".to_string(), "4326".to_string()),
            ("outSR".to_string(), "4326".to_string()),
            (
                "spatialRel".to_string(),
                "esriSpatialRelIntersects".to_string(),
            ),
            ("outFields".to_string(), "*".to_string()),
            (
                "returnGeometry".to_string(),
                self.return_geometry.to_string(),
            ),
            (
                "resultRecordCount".to_string(),
                self.max_results.to_string(),
            ),
        ];

        if self.tolerance_m > 0.0 {
            pairs.push(("distance".to_string(), format!("{:.2}", self.tolerance_m)));
            pairs.push(("units".to_string(), "esriSRUnit_Meter".to_string()));
        }

        pairs
    }
}

// ---------------------------------------------------------------------------
// Response types
// ---------------------------------------------------------------------------

/// Top-level response of a `/query` call.
///
/// A failed call can still arrive as HTTP 200 with an `error` object instead
/// of `features`; the client turns that into [`ServiceError::Service`].
///
/// [`ServiceError::Service`]: crate::error::ServiceError::Service
#[derive(Debug, Clone, Deserialize)]
pub struct QueryResponse {
    #[serde(default)]
    pub features: Vec<Feature>,

    #[serde(rename = "geometryType")]
    pub geometry_type: Option<String>,

    /// Service-level fault, mutually exclusive with `features` in practice.
    pub error: Option<ServiceFault>,
}

/// Error object embedded in an otherwise-successful HTTP response.
#[derive(Debug, Clone, Deserialize)]
pub struct ServiceFault {
    pub code: i64,
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub details: Vec<String>,
}

/// A single returned feature: untyped attributes plus an optional geometry.
#[derive(Debug, Clone, Deserialize)]
pub struct Feature {
    #[serde(default)]
    pub attributes: HashMap<String, serde_json::Value>,
    pub geometry: Option<PointGeometry>,
}

impl Feature {
    /// Look up an attribute by exact name.
    pub fn attribute(&self, name: &str) -> Option<&serde_json::Value> {
        self.attributes.get(name)
    }
}

/// Point geometry in the requested output spatial reference.
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct PointGeometry {
    pub x: f64,
    pub y: f64,
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    const FIXTURE: &str = r#"{
  "objectIdFieldName": "FID",
  "geometryType": "esriGeometryPolygon",
  "spatialReference": {"wkid": 4326, "latestWkid": 4326},
  "features": [
    {
      "attributes": {
        "FID": 38,
        "Country": "Canada",
        "Major_Region": "North America",
        "pop2015": 35000
      },
      "geometry": {"x": -113.712785, "y": 54.6985831}
    },
    {
      "attributes": {
        "FID": 231,
        "Country": "United States of America",
        "Major_Region": "North America",
        "pop2015": 321774
      },
      "geometry": {"x": -98.5, "y": 39.8}
    }
  ]
}"#;

    const FAULT_FIXTURE: &str = r#"{
  "error": {
    "code": 400,
    "message": "Invalid or missing input parameters.",
    "details": ["'geometry' parameter is invalid"]
  }
}"#;

    #[test]
    fn parse_query_response() {
        let resp: QueryResponse = serde_json::from_str(FIXTURE).unwrap();
        assert_eq!(resp.features.len(), 2);
        assert_eq!(resp.geometry_type.as_deref(), Some("esriGeometryPolygon"));
        assert!(resp.error.is_none());
    }

    #[test]
    fn parse_feature_attributes() {
        let resp: QueryResponse = serde_json::from_str(FIXTURE).unwrap();
        let first = &resp.features[0];

        assert_eq!(
            first.attribute("Country").and_then(|v| v.as_str()),
            Some("Canada")
        );
        assert_eq!(
            first.attribute("Major_Region").and_then(|v| v.as_str()),
            Some("North America")
        );
        assert_eq!(
            first.attribute("pop2015").and_then(|v| v.as_i64()),
            Some(35000)
        );
        // Attribute lookup is exact, not case-insensitive.
        assert!(first.attribute("country").is_none());
    }

    #[test]
    fn parse_feature_geometry() {
        let resp: QueryResponse = serde_json::from_str(FIXTURE).unwrap();
        let geom = resp.features[0].geometry.unwrap();
        assert!((geom.x - -113.712785).abs() < 1e-9);
        assert!((geom.y - 54.6985831).abs() < 1e-9);
    }

    #[test]
    fn parse_service_fault() {
        let resp: QueryResponse = serde_json::from_str(FAULT_FIXTURE).unwrap();
        assert!(resp.features.is_empty());
        let fault = resp.error.unwrap();
        assert_eq!(fault.code, 400);
        assert!(fault.message.contains("Invalid"));
        assert_eq!(fault.details.len(), 1);
    }

    #[test]
    fn query_pairs_for_point() {
        let params = IdentifyParams::new(-5.3504789, 36.1440926)
            .tolerance_meters(1200.0)
            .max_results(5);
        let pairs = params.to_query();

        let get = |k: &str| {
            pairs
                .iter()
                .find(|(key, _)| key == k)
                .map(|(_, v)| v.as_str())
        };

        assert_eq!(get("f"), Some("json"));
        assert_eq!(get("geometry"), Some("-5.3504789,36.1440926"));
        assert_eq!(get("geometryType"), Some("esriGeometryPoint"));
        assert_eq!(get("inSR"), Some("4326"));
        assert_eq!(get("outSR"), Some("4326"));
        assert_eq!(get("spatialRel"), Some("esriSpatialRelIntersects"));
        assert_eq!(get("outFields"), Some("*"));
        assert_eq!(get("returnGeometry"), Some("true"));
        assert_eq!(get("resultRecordCount"), Some("5"));
        assert_eq!(get("distance"), Some("1200.00"));
        assert_eq!(get("units"), Some("esriSRUnit_Meter"));
    }

    #[test]
    fn zero_tolerance_omits_distance() {
        let pairs = IdentifyParams::new(0.0, 0.0).to_query();
        assert!(pairs.iter().all(|(k, _)| k != "distance" && k != "units"));
    }
}
