//! Document source arbitration
//!
//! The Discovery document arrives either through a caller-supplied URL,
//! resolved by the [`DocumentFetcher`] collaborator, or directly as
//! already-parsed JSON. Exactly one of the two sources must be supplied;
//! both or neither is a caller-misuse error raised before any translation
//! begins.

use discovery_bridge_common::{BridgeError, Result};
use serde_json::Value;

/// External collaborator that retrieves a Discovery document over HTTP.
///
/// Implementations perform a single GET against the supplied URL and
/// return parsed JSON, or a [`BridgeError::Fetch`] carrying the upstream
/// status code, body, and headers.
#[cfg_attr(test, mockall::automock)]
pub trait DocumentFetcher {
    fn fetch(&self, url: &str) -> Result<Value>;
}

/// Resolve the input document from exactly one of the two sources.
pub fn resolve_document(
    url: Option<&str>,
    inline: Option<Value>,
    fetcher: &dyn DocumentFetcher,
) -> Result<Value> {
    match (url, inline) {
        (Some(_), Some(_)) => Err(BridgeError::Input(
            "Supply either a document URL or an inline document, not both".to_string(),
        )),
        (None, None) => Err(BridgeError::Input(
            "Supply a document URL or an inline document".to_string(),
        )),
        (Some(url), None) => fetcher.fetch(url),
        (None, Some(document)) => Ok(document),
    }
}
