//! The JSON search platform.

use std::collections::HashMap;
use std::path::Path;
use std::sync::RwLock;
use std::time::Duration;

use serde_json::Map;
use tracing::{debug, error, warn};

use rankeval_platform::{QueryOrSearchResponse, SearchPlatform};

use crate::error::{AdapterError, Result};
use crate::query;
use crate::response::JsonSearchResponse;
use crate::settings;

/// Platform name reported to the harness.
const NAME: &str = "JSON Search API";

/// Default outbound request timeout.
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Registry key for a (collection, version) pair, FQDN-shaped.
///
/// Internal convention only — never serialized or sent upstream. Version
/// first so distinct versions of the same collection sort together.
fn fully_qualified_domain_name(collection: &str, version: &str) -> String {
    format!("{version}.{collection}")
}

/// A generic JSON-over-HTTP search platform.
///
/// Holds one base URL per loaded (collection, version) pair and turns each
/// query into a GET against the matching URL. Construct one instance per
/// harness session; the registry tolerates concurrent queries alongside a
/// `load`.
pub struct JsonSearchPlatform {
    base_urls: RwLock<HashMap<String, String>>,
    timeout: Duration,
}

impl JsonSearchPlatform {
    pub fn new() -> Self {
        Self::with_timeout(DEFAULT_TIMEOUT)
    }

    /// Create a platform with a custom outbound request timeout.
    pub fn with_timeout(timeout: Duration) -> Self {
        Self {
            base_urls: RwLock::new(HashMap::new()),
            timeout,
        }
    }

    /// The base URL registered for a (collection, version) pair, if any.
    pub fn endpoint(&self, collection: &str, version: &str) -> Option<String> {
        let key = fully_qualified_domain_name(collection, version);
        self.base_urls.read().unwrap().get(&key).cloned()
    }

    /// Number of registered endpoints.
    pub fn endpoint_count(&self) -> usize {
        self.base_urls.read().unwrap().len()
    }

    /// GET the assembled URL and parse the body as a search response.
    fn fetch(&self, url: &str) -> Result<JsonSearchResponse> {
        let client = reqwest::blocking::Client::builder()
            .timeout(self.timeout)
            .build()
            .map_err(|e| AdapterError::Http(e.to_string()))?;

        let resp = client
            .get(url)
            .send()
            .map_err(|e| AdapterError::Http(e.to_string()))?;

        let status = resp.status();
        if !status.is_success() {
            return Err(AdapterError::Http(format!(
                "status {} from {url}",
                status.as_u16()
            )));
        }

        resp.json::<JsonSearchResponse>()
            .map_err(|e| AdapterError::Http(format!("unparsable body: {e}")))
    }
}

impl Default for JsonSearchPlatform {
    fn default() -> Self {
        Self::new()
    }
}

impl SearchPlatform for JsonSearchPlatform {
    fn load(
        &self,
        _corpus_file: Option<&Path>,
        settings_file: &Path,
        collection: &str,
        version: &str,
    ) {
        // Corpus file is not used by this platform.
        match settings::read_base_url(settings_file) {
            Ok(base_url) => {
                let key = fully_qualified_domain_name(collection, version);
                self.base_urls.write().unwrap().insert(key, base_url);
            }
            Err(AdapterError::Settings(msg)) => {
                warn!("{msg} - skipping configuration");
            }
            Err(e) => {
                error!(
                    "could not read settings from {}: {e}",
                    settings_file.display()
                );
            }
        }
    }

    fn execute_query(
        &self,
        collection: &str,
        version: &str,
        query: &str,
        fields: &[String],
        max_rows: usize,
    ) -> QueryOrSearchResponse {
        let Some(base_url) = self.endpoint(collection, version) else {
            error!(collection, version, "no base URL registered for index");
            return QueryOrSearchResponse::empty();
        };

        debug!("converting query: {query}");
        let params = match query::parse_query(query) {
            Ok(params) => params,
            Err(e) => {
                // The request still goes out, carrying only fields/pageSize.
                error!("cannot convert incoming query string to a parameter map: {e}");
                Map::new()
            }
        };

        let url = query::build_url(&base_url, &params, fields, max_rows);
        debug!("issuing search request: {url}");

        match self.fetch(&url) {
            Ok(response) => QueryOrSearchResponse::new(response.total_results, response.documents),
            Err(e) => {
                error!("search request failed: {e}");
                QueryOrSearchResponse::empty()
            }
        }
    }

    fn name(&self) -> &str {
        NAME
    }

    fn refresh_required(&self) -> bool {
        false
    }

    fn corpora_required(&self) -> bool {
        false
    }

    fn is_search_platform_configuration(&self, _index_name: &str, settings_file: &Path) -> bool {
        settings_file.is_file()
            && settings_file
                .file_name()
                .map(|name| name == settings::SETTINGS_FILE)
                .unwrap_or(false)
    }
}
