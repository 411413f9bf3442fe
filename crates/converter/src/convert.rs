//! Conversion pipeline
//!
//! Builds the OpenAPI skeleton from document-level metadata, populates
//! components and paths, compacts the assembled tree, and runs the
//! structural validator over the final document.

use crate::compact::compact;
use crate::discovery::DiscoveryDoc;
use crate::openapi::{Components, Info, OpenApiDocument, Server};
use crate::operations::synthesize_paths;
use crate::schema::translate_schema;
use crate::security::security_schemes;
use discovery_bridge_common::Result;
use discovery_bridge_validator::{validate, ValidationReport, DEFAULT_VERSION_PREFIX};
use serde_json::Value;

/// OpenAPI version emitted by the converter
pub const OPENAPI_VERSION: &str = "3.0.3";

/// Result of a conversion: the compacted OpenAPI document plus the
/// validation verdict. Validation findings are never fatal; the caller
/// decides whether `passed == false` should halt a downstream pipeline.
#[derive(Debug, Clone)]
pub struct ConversionOutcome {
    pub document: Value,
    pub report: ValidationReport,
}

/// Convert a Discovery document into an OpenAPI 3.x document.
///
/// The document is fully built and compacted before validation runs, and
/// the validator does not mutate it.
pub fn convert(doc: &DiscoveryDoc) -> Result<ConversionOutcome> {
    let assembled = assemble(doc)?;
    let document = compact(&assembled);
    let report = validate(&document, DEFAULT_VERSION_PREFIX);
    log::debug!(
        "converted '{}': {} errors, {} warnings",
        doc.name.as_deref().unwrap_or("<unnamed>"),
        report.error_count,
        report.warning_count
    );
    Ok(ConversionOutcome { document, report })
}

fn assemble(doc: &DiscoveryDoc) -> Result<Value> {
    let spec = OpenApiDocument {
        openapi: OPENAPI_VERSION.to_string(),
        info: Info {
            title: doc.title.clone().or_else(|| doc.name.clone()),
            version: doc.version.clone(),
            description: doc.description.clone(),
        },
        servers: server_url(doc).map(|url| vec![Server { url }]).unwrap_or_default(),
        paths: synthesize_paths(doc),
        components: Components {
            schemas: doc
                .schemas
                .iter()
                .map(|(name, node)| (name.clone(), translate_schema(node)))
                .collect(),
            security_schemes: security_schemes(doc),
        },
    };
    Ok(serde_json::to_value(spec)?)
}

fn server_url(doc: &DiscoveryDoc) -> Option<String> {
    let url = format!(
        "{}{}",
        doc.root_url.as_deref().unwrap_or_default(),
        doc.service_path.as_deref().unwrap_or_default()
    );
    if url.is_empty() {
        None
    } else {
        Some(url)
    }
}
