//! Discovery document loading

use super::types::DiscoveryDoc;
use discovery_bridge_common::{BridgeError, Result};
use serde_json::Value;
use std::fs;
use std::path::Path;

/// Google Discovery Document loader
///
/// Reads and parses Google Discovery Documents for services like
/// Cloud Storage, Compute Engine, BigQuery, etc.
pub struct DiscoveryParser {
    /// Loaded Discovery document
    doc: DiscoveryDoc,
}

impl DiscoveryParser {
    /// Load a Discovery document from a file path
    ///
    /// # Example
    /// ```rust,ignore
    /// let parser = DiscoveryParser::from_file("storage-v1.json")?;
    /// ```
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path.as_ref()).map_err(|e| {
            BridgeError::Parse(format!(
                "Failed to read Discovery file {}: {}",
                path.as_ref().display(),
                e
            ))
        })?;

        Self::from_json(&content)
    }

    /// Parse a Discovery document from a JSON string
    pub fn from_json(json: &str) -> Result<Self> {
        let doc: DiscoveryDoc = serde_json::from_str(json)
            .map_err(|e| BridgeError::Parse(format!("Failed to parse Discovery JSON: {}", e)))?;

        Ok(Self { doc })
    }

    /// Build from an already-parsed JSON document
    pub fn from_value(value: Value) -> Result<Self> {
        let doc: DiscoveryDoc = serde_json::from_value(value)
            .map_err(|e| BridgeError::Parse(format!("Failed to parse Discovery JSON: {}", e)))?;

        Ok(Self { doc })
    }

    /// Get reference to the underlying Discovery document
    pub fn doc(&self) -> &DiscoveryDoc {
        &self.doc
    }

    /// Consume the loader and return the Discovery document
    pub fn into_doc(self) -> DiscoveryDoc {
        self.doc
    }
}
