//! The platform trait driven by the evaluation harness.

use std::path::Path;

use serde_json::{Map, Value};

use crate::response::QueryOrSearchResponse;

/// A search platform under evaluation.
///
/// The harness holds platforms as `Box<dyn SearchPlatform>` and may drive
/// them from multiple threads, so implementations take `&self` everywhere
/// and use interior mutability for any state written during `load`.
///
/// `load` and `execute_query` are infallible at this boundary: a
/// misconfigured or unreachable platform must degrade to
/// [`QueryOrSearchResponse::empty`] rather than abort the evaluation run.
pub trait SearchPlatform: Send + Sync {
    /// Called once before `start`, with the harness-wide configuration map.
    fn before_start(&self, _configuration: &Map<String, Value>) {}

    /// Start the platform.
    fn start(&self) {}

    /// Called once after `start`, before any `load`.
    fn after_start(&self) {}

    /// Register a (collection, version) pair from its settings file.
    ///
    /// `corpus_file` is `None` for platforms that report
    /// [`corpora_required`](Self::corpora_required) as false. Failures are
    /// logged and leave the pair unregistered; they never surface here.
    fn load(
        &self,
        corpus_file: Option<&Path>,
        settings_file: &Path,
        collection: &str,
        version: &str,
    );

    /// Execute a query against a previously loaded (collection, version)
    /// pair and return the normalized response.
    fn execute_query(
        &self,
        collection: &str,
        version: &str,
        query: &str,
        fields: &[String],
        max_rows: usize,
    ) -> QueryOrSearchResponse;

    /// Called once before `close`.
    fn before_stop(&self) {}

    /// Release any resources held by the platform.
    fn close(&self) {}

    /// Human-readable platform name, used in harness reports.
    fn name(&self) -> &str;

    /// Whether the platform must be refreshed between evaluation runs.
    fn refresh_required(&self) -> bool;

    /// Whether the platform needs a corpus file passed to `load`.
    fn corpora_required(&self) -> bool;

    /// Whether `settings_file` is a configuration this platform owns.
    ///
    /// The harness probes every candidate file under a collection's
    /// configuration directory with this; exactly one platform should
    /// claim each file.
    fn is_search_platform_configuration(&self, index_name: &str, settings_file: &Path) -> bool;
}
