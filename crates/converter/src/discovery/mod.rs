//! Google Discovery Document input handling
//!
//! Google APIs publish "Discovery Documents" that describe REST APIs.
//! The format is based on JSON Schema Draft 3 with Google-specific
//! extensions.
//!
//! ## Discovery Sources
//!
//! - **List all APIs**: `GET https://www.googleapis.com/discovery/v1/apis`
//! - **Get specific API**: `GET https://{service}.googleapis.com/$discovery/rest?version={version}`
//!
//! Examples:
//! - Cloud Storage: `https://storage.googleapis.com/$discovery/rest?version=v1`
//! - Compute Engine: `https://compute.googleapis.com/$discovery/rest?version=v1`
//!
//! The document is either fetched for the caller through the
//! [`DocumentFetcher`] collaborator or supplied directly as parsed JSON;
//! exactly one of the two sources must be given.

mod parser;
mod source;
mod types;

pub use parser::DiscoveryParser;
pub use source::{resolve_document, DocumentFetcher};
pub use types::*;
