//! Output rendering
//!
//! Serializes the final, compacted document into one of several transport
//! shapes: the full object plus a pretty-printed string, a minified
//! string, fixed-size byte chunks, or a base64 file descriptor.

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use discovery_bridge_common::Result;
use serde::Serialize;
use serde_json::Value;

/// Default byte budget per chunk in chunked mode
pub const DEFAULT_CHUNK_SIZE: usize = 65_536;

/// A UTF-8 codepoint occupies at most four bytes; smaller chunk budgets
/// could fail to make progress.
const MIN_CHUNK_SIZE: usize = 4;

const JSON_CONTENT_TYPE: &str = "application/json";

/// Transport shape for the rendered document
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderMode {
    /// Full document object plus a pretty-printed JSON string
    Full,
    /// Minified JSON string only
    Minified,
    /// Minified JSON split into fixed-size byte chunks
    Chunked { size: usize },
    /// Single base64 file descriptor
    File,
}

impl RenderMode {
    /// Parse a mode name; an unrecognized name falls back to [`RenderMode::Full`].
    pub fn parse(mode: &str, chunk_size: usize) -> Self {
        match mode {
            "minified" => RenderMode::Minified,
            "chunked" => RenderMode::Chunked { size: chunk_size },
            "file" => RenderMode::File,
            _ => RenderMode::Full,
        }
    }
}

/// One fixed-size piece of the minified document
#[derive(Debug, Clone, Serialize)]
pub struct DocumentChunk {
    pub index: usize,
    pub total: usize,
    pub bytes: usize,
    pub content: String,
}

/// Downloadable file shape for the minified document
#[derive(Debug, Clone, Serialize)]
pub struct FileDescriptor {
    pub filename: String,
    pub content_type: String,
    pub content: String,
}

/// Rendered document in the requested transport shape
#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum RenderedDocument {
    Full { document: Value, pretty: String },
    Minified { minified: String },
    Chunked { chunks: Vec<DocumentChunk> },
    File { file: FileDescriptor },
}

/// Render the document in the requested mode.
pub fn render(document: &Value, mode: RenderMode) -> Result<RenderedDocument> {
    match mode {
        RenderMode::Full => Ok(RenderedDocument::Full {
            document: document.clone(),
            pretty: serde_json::to_string_pretty(document)?,
        }),
        RenderMode::Minified => Ok(RenderedDocument::Minified {
            minified: serde_json::to_string(document)?,
        }),
        RenderMode::Chunked { size } => {
            let minified = serde_json::to_string(document)?;
            Ok(RenderedDocument::Chunked {
                chunks: chunk_string(&minified, size),
            })
        }
        RenderMode::File => {
            let minified = serde_json::to_string(document)?;
            Ok(RenderedDocument::File {
                file: FileDescriptor {
                    filename: filename_for(document),
                    content_type: JSON_CONTENT_TYPE.to_string(),
                    content: STANDARD.encode(minified.as_bytes()),
                },
            })
        }
    }
}

/// Split into chunks of at most `size` bytes, never cutting a multi-byte
/// UTF-8 codepoint.
fn chunk_string(content: &str, size: usize) -> Vec<DocumentChunk> {
    let size = size.max(MIN_CHUNK_SIZE);
    let mut pieces = Vec::new();
    let mut start = 0;
    while start < content.len() {
        let mut end = (start + size).min(content.len());
        while !content.is_char_boundary(end) {
            end -= 1;
        }
        pieces.push(&content[start..end]);
        start = end;
    }

    let total = pieces.len();
    pieces
        .into_iter()
        .enumerate()
        .map(|(index, piece)| DocumentChunk {
            index,
            total,
            bytes: piece.len(),
            content: piece.to_string(),
        })
        .collect()
}

/// Derive a filename from the document title, replacing anything outside
/// ASCII alphanumerics with underscores.
fn filename_for(document: &Value) -> String {
    let title = document
        .get("info")
        .and_then(|info| info.get("title"))
        .and_then(Value::as_str)
        .filter(|title| !title.trim().is_empty())
        .unwrap_or("openapi");
    let sanitized: String = title
        .chars()
        .map(|ch| if ch.is_ascii_alphanumeric() { ch } else { '_' })
        .collect();
    format!("{}.json", sanitized.trim_matches('_'))
}
