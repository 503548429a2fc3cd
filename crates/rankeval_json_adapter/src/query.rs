//! Query-to-URL translation.
//!
//! The incoming query is an opaque string expected to hold a JSON object;
//! its top-level keys become URL query parameters. Two parameters are
//! always appended after the query-derived ones: `fields` (comma-joined
//! field names) and `pageSize`.

use serde_json::{Map, Value};

use crate::error::Result;

/// Query parameter carrying the comma-joined field names.
pub const FIELDS_PARAM: &str = "fields";

/// Query parameter carrying the requested page size.
pub const PAGE_SIZE_PARAM: &str = "pageSize";

/// Parse the incoming query string as a JSON object.
pub(crate) fn parse_query(query: &str) -> Result<Map<String, Value>> {
    let params: Map<String, Value> = serde_json::from_str(query)?;
    Ok(params)
}

/// A parameter value as it appears on the URL before percent-encoding:
/// a JSON string contributes its raw contents, anything else its JSON text.
fn param_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// Assemble the full request URL from the registered base URL, the parsed
/// query parameters, the field list and the page size.
pub(crate) fn build_url(
    base_url: &str,
    params: &Map<String, Value>,
    fields: &[String],
    max_rows: usize,
) -> String {
    let mut pairs: Vec<String> = params
        .iter()
        .map(|(key, value)| format!("{}={}", key, urlencoding::encode(&param_value(value))))
        .collect();
    pairs.push(format!("{}={}", FIELDS_PARAM, fields.join(",")));
    pairs.push(format!("{}={}", PAGE_SIZE_PARAM, max_rows));
    format!("{}?{}", base_url, pairs.join("&"))
}
