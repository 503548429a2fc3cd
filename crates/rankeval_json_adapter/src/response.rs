//! Upstream response shape.

use serde::Deserialize;
use serde_json::{Map, Value};

/// The recognized upstream response body.
///
/// Only `totalResults` and `documents` are read; unknown fields are
/// ignored, and either field may be absent (defaulting to zero / empty).
#[derive(Debug, Deserialize)]
pub struct JsonSearchResponse {
    #[serde(rename = "totalResults", default)]
    pub total_results: u64,

    #[serde(default)]
    pub documents: Vec<Map<String, Value>>,
}
