//! Normalized query response shared between the harness and platforms.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// The normalized result of a query against a search platform.
///
/// `total_hits` is the total match count reported by the platform, which is
/// not necessarily the number of documents returned — a platform may report
/// thousands of matches while returning a single page.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct QueryOrSearchResponse {
    /// Total matches reported by the platform.
    pub total_hits: u64,

    /// Returned documents, in platform order. Each document is a loosely
    /// typed record; the harness picks out the fields it asked for.
    pub hits: Vec<Map<String, Value>>,
}

impl QueryOrSearchResponse {
    /// Create a response from a hit count and document list.
    pub fn new(total_hits: u64, hits: Vec<Map<String, Value>>) -> Self {
        Self { total_hits, hits }
    }

    /// The degraded response: zero hits, no documents.
    ///
    /// Platforms return this for every failure condition — unknown
    /// collection, transport error, unparsable upstream body — so the
    /// harness's evaluation loop never has to handle an error.
    pub fn empty() -> Self {
        Self::default()
    }
}
