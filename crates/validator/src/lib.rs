//! Structural validation for OpenAPI 3.x documents
//!
//! Checks a parsed OpenAPI document against a fixed set of structural
//! rules and reports every applicable finding in a single pass. The
//! validator never mutates its input and never fails on structurally
//! invalid documents; findings are returned as data.
//!
//! ## Usage
//! ```rust
//! use discovery_bridge_validator::{validate, DEFAULT_VERSION_PREFIX};
//! use serde_json::json;
//!
//! let doc = json!({
//!     "openapi": "3.0.3",
//!     "info": {"title": "Example", "version": "1.0.0"},
//!     "servers": [{"url": "https://example.com"}],
//!     "paths": {"/things": {"get": {
//!         "operationId": "listThings",
//!         "responses": {"200": {"description": "OK"}}
//!     }}}
//! });
//! let report = validate(&doc, DEFAULT_VERSION_PREFIX);
//! assert!(report.passed);
//! ```

mod findings;
mod refs;
mod rules;

pub use findings::{Finding, Severity, ValidationReport};
pub use rules::{validate, DEFAULT_VERSION_PREFIX};
