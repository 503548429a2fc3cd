//! Host-facing search platform contract for the ranking-evaluation harness.
//!
//! This crate defines the interface between the evaluation harness and the
//! search platforms it drives. A platform is instantiated once per harness
//! session and walked through a fixed lifecycle:
//!
//! 1. `before_start` / `start` / `after_start`
//! 2. `load` — once per (collection, version) pair at setup time
//! 3. `execute_query` — zero or more times per pair
//! 4. `before_stop` / `close`
//!
//! The harness also asks each platform a small set of capability questions
//! (does it need a refresh between runs, does it need a corpus, does a given
//! settings file belong to it) to decide which platform handles which
//! collection.
//!
//! # Example
//!
//! ```rust
//! use rankeval_platform::QueryOrSearchResponse;
//!
//! let response = QueryOrSearchResponse::empty();
//! assert_eq!(response.total_hits, 0);
//! assert!(response.hits.is_empty());
//! ```

mod platform;
mod response;

pub use platform::SearchPlatform;
pub use response::QueryOrSearchResponse;
