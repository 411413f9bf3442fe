//! Path and operation synthesis
//!
//! Walks the collected Discovery method list and produces one OpenAPI
//! operation per method: path normalization, operationId derivation,
//! parameter normalization and deduplication, and request/response
//! mapping. The paths map is built functionally and returned; when two
//! methods collide on the same (path, httpMethod) pair the later one
//! wins.

use crate::discovery::{collect_methods, DiscoveryDoc, DiscoveryMethod, DiscoveryParameter};
use crate::openapi::{
    MediaType, Operation, ParameterObject, RequestBody, ResponseObject, SchemaObject,
};
use crate::schema::translate_schema;
use regex::Regex;
use serde_json::Value;
use std::collections::{BTreeMap, HashSet};

const DEFAULT_HTTP_METHOD: &str = "get";
const JSON_CONTENT_TYPE: &str = "application/json";

/// Synthesize the `paths` mapping from top-level and resource-nested
/// Discovery methods.
pub(crate) fn synthesize_paths(doc: &DiscoveryDoc) -> BTreeMap<String, BTreeMap<String, Operation>> {
    let mut paths: BTreeMap<String, BTreeMap<String, Operation>> = BTreeMap::new();

    for method in collect_methods(doc) {
        let http_method = method
            .http_method
            .as_deref()
            .filter(|m| !m.trim().is_empty())
            .unwrap_or(DEFAULT_HTTP_METHOD)
            .to_lowercase();
        let raw_path = method
            .path
            .clone()
            .or_else(|| method.id.clone())
            .unwrap_or_default();
        let path = normalize_path(&raw_path);
        let operation = build_operation(doc, &method, &path, &http_method);

        let entry = paths.entry(path.clone()).or_default();
        if entry.insert(http_method.clone(), operation).is_some() {
            log::debug!(
                "method '{}' replaced an earlier operation at {http_method} {path}",
                method.method_id
            );
        }
    }

    paths
}

/// Normalize a Discovery path into a template guaranteed to start with a
/// single `/`, with repeated slashes collapsed.
fn normalize_path(raw: &str) -> String {
    let trimmed = raw.trim_start_matches('/');
    let mut path = String::with_capacity(trimmed.len() + 1);
    path.push('/');
    let mut previous_was_slash = true;
    for ch in trimmed.chars() {
        if ch == '/' {
            if !previous_was_slash {
                path.push('/');
            }
            previous_was_slash = true;
        } else {
            path.push(ch);
            previous_was_slash = false;
        }
    }
    path
}

fn build_operation(
    doc: &DiscoveryDoc,
    method: &DiscoveryMethod,
    path: &str,
    http_method: &str,
) -> Operation {
    Operation {
        operation_id: operation_id(doc, method, path, http_method),
        description: method.description.clone(),
        parameters: build_parameters(method, path),
        request_body: build_request_body(method),
        responses: build_responses(method),
    }
}

/// Derive a never-blank operationId: the method's `id` when present
/// (Discovery ids are globally unique and already service-prefixed),
/// else `{doc.name}.{method_id}`, else the bare `method_id`, else a
/// sanitized `{httpMethod}{path}` fallback.
fn operation_id(doc: &DiscoveryDoc, method: &DiscoveryMethod, path: &str, http_method: &str) -> String {
    if let Some(id) = method.id.as_deref().filter(|i| !i.trim().is_empty()) {
        return id.to_string();
    }
    if !method.method_id.trim().is_empty() {
        if let Some(name) = doc.name.as_deref().filter(|n| !n.trim().is_empty()) {
            return format!("{name}.{}", method.method_id);
        }
        return method.method_id.clone();
    }
    format!("{http_method}{}", sanitize_identifier(path))
}

fn sanitize_identifier(path: &str) -> String {
    path.chars()
        .map(|ch| if ch.is_ascii_alphanumeric() { ch } else { '_' })
        .collect()
}

/// Normalize declared parameters, synthesize missing path parameters for
/// `{var}` template placeholders, and deduplicate by (in, name) keeping
/// the first occurrence. Declared parameters are placed first, so a
/// declared parameter always wins over a synthesized one.
fn build_parameters(method: &DiscoveryMethod, path: &str) -> Vec<ParameterObject> {
    let mut parameters: Vec<ParameterObject> = method
        .parameters
        .iter()
        .map(|(name, node)| normalize_parameter(name, node))
        .collect();

    for variable in template_variables(path) {
        let declared = parameters
            .iter()
            .any(|p| p.location == "path" && p.name == variable);
        if !declared {
            parameters.push(ParameterObject {
                name: variable,
                location: "path".to_string(),
                required: true,
                schema: SchemaObject::string(),
            });
        }
    }

    dedupe_parameters(parameters)
}

fn normalize_parameter(name: &str, node: &Value) -> ParameterObject {
    let parameter = DiscoveryParameter::from_value(node);
    let location = match parameter.location.as_deref() {
        Some(loc @ ("path" | "query" | "header")) => loc.to_string(),
        _ => "query".to_string(),
    };

    ParameterObject {
        name: name.to_string(),
        location,
        required: parameter.required,
        schema: SchemaObject {
            schema_type: Some(parameter.param_type.unwrap_or_else(|| "string".to_string())),
            format: parameter.format,
            enum_values: parameter.enum_values,
            ..Default::default()
        },
    }
}

/// Extract `{var}` template placeholders in order of appearance
fn template_variables(path: &str) -> Vec<String> {
    let Ok(pattern) = Regex::new(r"\{([^/{}]+)\}") else {
        return Vec::new();
    };
    pattern
        .captures_iter(path)
        .filter_map(|captures| captures.get(1))
        .map(|variable| variable.as_str().to_string())
        .collect()
}

/// Drop parameters whose (in, name) pair was already seen
pub(crate) fn dedupe_parameters(parameters: Vec<ParameterObject>) -> Vec<ParameterObject> {
    let mut seen = HashSet::new();
    parameters
        .into_iter()
        .filter(|p| seen.insert((p.location.clone(), p.name.clone())))
        .collect()
}

/// Map a Discovery request/response node to a schema: a `$ref` becomes a
/// local components reference, an inline `schema` object is translated,
/// anything else yields no schema.
fn schema_ref_or_inline(node: &Value) -> Option<SchemaObject> {
    let node = node.as_object()?;
    if let Some(name) = node.get("$ref").and_then(Value::as_str) {
        return Some(SchemaObject::reference(name));
    }
    match node.get("schema") {
        Some(schema) if schema.is_object() => Some(translate_schema(schema)),
        _ => None,
    }
}

fn build_request_body(method: &DiscoveryMethod) -> Option<RequestBody> {
    let request = method.request.as_ref()?;
    let mut content = BTreeMap::new();
    content.insert(
        JSON_CONTENT_TYPE.to_string(),
        MediaType {
            schema: schema_ref_or_inline(request),
        },
    );
    Some(RequestBody {
        required: true,
        content,
    })
}

/// Exactly one synthesized "200" response; content is attached only when
/// the Discovery response node yields a schema.
fn build_responses(method: &DiscoveryMethod) -> BTreeMap<String, ResponseObject> {
    let content = method
        .response
        .as_ref()
        .and_then(|response| schema_ref_or_inline(response))
        .map(|schema| {
            let mut content = BTreeMap::new();
            content.insert(
                JSON_CONTENT_TYPE.to_string(),
                MediaType {
                    schema: Some(schema),
                },
            );
            content
        });

    let mut responses = BTreeMap::new();
    responses.insert(
        "200".to_string(),
        ResponseObject {
            description: "OK".to_string(),
            content,
        },
    );
    responses
}
