//! JSON-over-HTTP search adapter for the ranking-evaluation harness.
//!
//! The harness drives this adapter through the `rankeval_platform` plugin
//! lifecycle: `load` reads a `settings.json` file and registers a base URL
//! for a (collection, version) pair; `execute_query` translates a JSON
//! query payload plus requested fields and page size into URL query
//! parameters, issues a GET against the registered base URL, and maps the
//! JSON response into a normalized `(total hits, documents)` result.
//!
//! # Degradation policy
//!
//! Nothing in this crate propagates a fatal error to the harness. A missing
//! settings key, an unregistered collection, a malformed query string, a
//! network failure — each degrades to an empty result (or a skipped
//! registration) plus a log line, so one misconfigured endpoint can never
//! abort an evaluation run.

pub mod error;
pub mod platform;
pub mod query;
pub mod response;
pub mod settings;

pub use error::AdapterError;
pub use platform::JsonSearchPlatform;
pub use response::JsonSearchResponse;
