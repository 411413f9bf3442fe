//! Discovery to OpenAPI translation engine
//!
//! This crate converts a Google API Discovery document (a JSON description
//! of a REST API's resources, methods, parameters, and schemas) into an
//! OpenAPI 3.x document.
//!
//! ## Pipeline
//!
//! 1. An OpenAPI skeleton is built from document-level metadata.
//! 2. The security scheme injector and schema translator populate
//!    `components`.
//! 3. The path synthesizer walks top-level and resource-nested methods and
//!    emits one operation per method, normalizing parameters and mapping
//!    request/response schemas along the way.
//! 4. The tree compactor prunes null and empty values from the assembled
//!    document.
//! 5. The structural validator runs last and never mutates its input.
//!
//! The whole pipeline is synchronous and a pure function of the input
//! document: malformed Discovery nodes degrade locally to safe defaults
//! instead of failing the conversion.
//!
//! ## Usage
//! ```rust,ignore
//! use discovery_bridge_converter::{convert, DiscoveryParser};
//!
//! let parser = DiscoveryParser::from_file("storage-v1.json")?;
//! let outcome = convert(parser.doc())?;
//! assert!(outcome.report.passed);
//! ```

mod compact;
mod convert;
pub mod discovery;
pub mod openapi;
mod operations;
mod render;
mod schema;
mod security;

pub use compact::compact;
pub use convert::{convert, ConversionOutcome, OPENAPI_VERSION};
pub use discovery::{resolve_document, DiscoveryDoc, DiscoveryParser, DocumentFetcher};
pub use render::{
    render, DocumentChunk, FileDescriptor, RenderMode, RenderedDocument, DEFAULT_CHUNK_SIZE,
};
pub use schema::translate_schema;

/// Bound applied to every recursive tree walk so cyclic or pathologically
/// deep input degrades to a safe default instead of overflowing the stack.
pub(crate) const MAX_DEPTH: usize = 64;
