//! Google Discovery Document type definitions
//!
//! Document-level metadata is typed; `schemas`, `methods`, and `resources`
//! stay as raw JSON maps so that one malformed node degrades the output
//! locally instead of failing the whole parse. Method and parameter nodes
//! are lifted into typed structs with lenient `from_value` constructors
//! that substitute defaults for fields of unexpected shape.

use crate::MAX_DEPTH;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

/// Discovery Document root
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DiscoveryDoc {
    /// API name (e.g., "storage", "compute")
    #[serde(default, deserialize_with = "lenient")]
    pub name: Option<String>,

    /// API title
    #[serde(default, deserialize_with = "lenient")]
    pub title: Option<String>,

    /// API version (e.g., "v1")
    #[serde(default, deserialize_with = "lenient")]
    pub version: Option<String>,

    /// Description
    #[serde(default, deserialize_with = "lenient")]
    pub description: Option<String>,

    /// Root URL (e.g., "<https://storage.googleapis.com/>")
    #[serde(rename = "rootUrl", default, deserialize_with = "lenient")]
    pub root_url: Option<String>,

    /// Service path (e.g., "storage/v1/")
    #[serde(rename = "servicePath", default, deserialize_with = "lenient")]
    pub service_path: Option<String>,

    /// Authentication scopes
    #[serde(default, deserialize_with = "lenient")]
    pub auth: Option<Auth>,

    /// Schemas (data types), kept as raw nodes for defensive translation
    #[serde(default, deserialize_with = "lenient_object")]
    pub schemas: Map<String, Value>,

    /// Methods at root level (rare)
    #[serde(default, deserialize_with = "lenient_object")]
    pub methods: Map<String, Value>,

    /// Resources (collections of methods, possibly nested)
    #[serde(default, deserialize_with = "lenient_object")]
    pub resources: Map<String, Value>,
}

/// Authentication information
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Auth {
    /// OAuth 2.0 configuration
    #[serde(default, deserialize_with = "lenient")]
    pub oauth2: Option<OAuth2>,
}

/// OAuth 2.0 configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OAuth2 {
    /// Scope string to description mapping
    #[serde(default, deserialize_with = "lenient_object")]
    pub scopes: Map<String, Value>,
}

/// Method (API operation), built leniently from a raw Discovery node
#[derive(Debug, Clone, Default)]
pub struct DiscoveryMethod {
    /// Key under which the method appeared in its `methods` mapping
    pub method_id: String,

    /// Method ID (e.g., "storage.buckets.insert")
    pub id: Option<String>,

    /// HTTP path template
    pub path: Option<String>,

    /// HTTP method (GET, POST, PUT, DELETE, PATCH)
    pub http_method: Option<String>,

    /// Description
    pub description: Option<String>,

    /// Declared parameters, name to raw parameter node
    pub parameters: Map<String, Value>,

    /// Request body node (`{$ref}` or `{schema}`)
    pub request: Option<Value>,

    /// Response node (`{$ref}` or `{schema}`)
    pub response: Option<Value>,
}

impl DiscoveryMethod {
    /// Build a method from its raw node. A node of unexpected shape
    /// yields a method carrying only its `method_id`.
    pub fn from_value(method_id: &str, node: &Value) -> Self {
        let mut method = DiscoveryMethod {
            method_id: method_id.to_string(),
            ..Default::default()
        };
        let Some(node) = node.as_object() else {
            return method;
        };

        method.id = string_field(node, "id");
        method.path = string_field(node, "path");
        method.http_method = string_field(node, "httpMethod");
        method.description = string_field(node, "description");
        if let Some(parameters) = node.get("parameters").and_then(Value::as_object) {
            method.parameters = parameters.clone();
        }
        method.request = node.get("request").cloned();
        method.response = node.get("response").cloned();
        method
    }
}

/// Parameter definition, built leniently from a raw Discovery node
#[derive(Debug, Clone, Default)]
pub struct DiscoveryParameter {
    /// Location (path, query, header)
    pub location: Option<String>,

    /// Required flag
    pub required: bool,

    /// Parameter type (string, integer, boolean, ...)
    pub param_type: Option<String>,

    /// Format (e.g., "int32", "date-time")
    pub format: Option<String>,

    /// Enum values
    pub enum_values: Option<Vec<Value>>,
}

impl DiscoveryParameter {
    /// Build a parameter from its raw node; any field of unexpected shape
    /// falls back to its default.
    pub fn from_value(node: &Value) -> Self {
        let Some(node) = node.as_object() else {
            return Self::default();
        };
        Self {
            location: string_field(node, "location"),
            required: truthy(node.get("required")),
            param_type: string_field(node, "type"),
            format: string_field(node, "format"),
            enum_values: node.get("enum").and_then(Value::as_array).cloned(),
        }
    }
}

/// Collect the full method list: root-level `methods` first, then a
/// depth-first walk of `resources`, visiting each resource's own methods
/// before recursing into its nested resources. Each method is tagged with
/// its mapping key as `method_id`.
pub fn collect_methods(doc: &DiscoveryDoc) -> Vec<DiscoveryMethod> {
    let mut methods: Vec<DiscoveryMethod> = doc
        .methods
        .iter()
        .map(|(key, node)| DiscoveryMethod::from_value(key, node))
        .collect();
    collect_from_resources(&doc.resources, &mut methods, 0);
    methods
}

fn collect_from_resources(
    resources: &Map<String, Value>,
    out: &mut Vec<DiscoveryMethod>,
    depth: usize,
) {
    if depth >= MAX_DEPTH {
        return;
    }
    for resource in resources.values() {
        let Some(resource) = resource.as_object() else {
            continue;
        };
        if let Some(methods) = resource.get("methods").and_then(Value::as_object) {
            for (key, node) in methods {
                out.push(DiscoveryMethod::from_value(key, node));
            }
        }
        if let Some(nested) = resource.get("resources").and_then(Value::as_object) {
            collect_from_resources(nested, out, depth + 1);
        }
    }
}

fn string_field(node: &Map<String, Value>, key: &str) -> Option<String> {
    node.get(key).and_then(Value::as_str).map(str::to_string)
}

/// Boolean cast over a raw JSON value: absent, null, and false are false;
/// any other present value is true.
fn truthy(value: Option<&Value>) -> bool {
    match value {
        None | Some(Value::Null) => false,
        Some(Value::Bool(flag)) => *flag,
        Some(_) => true,
    }
}

/// Accept any value for an optional typed field, dropping it on mismatch
fn lenient<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: serde::de::DeserializeOwned,
{
    let value = Value::deserialize(deserializer)?;
    Ok(serde_json::from_value(value).ok())
}

/// Accept any value for an object-mapped field, substituting an empty map
fn lenient_object<'de, D>(deserializer: D) -> Result<Map<String, Value>, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::Object(map) => Ok(map),
        _ => Ok(Map::new()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_collect_methods_walks_nested_resources_depth_first() {
        let doc: DiscoveryDoc = serde_json::from_value(json!({
            "name": "sample",
            "methods": {
                "ping": {"id": "sample.ping", "httpMethod": "GET", "path": "ping"}
            },
            "resources": {
                "things": {
                    "methods": {
                        "get": {"id": "sample.things.get", "httpMethod": "GET", "path": "things/{id}"}
                    },
                    "resources": {
                        "parts": {
                            "methods": {
                                "list": {"id": "sample.things.parts.list", "httpMethod": "GET", "path": "things/{id}/parts"}
                            }
                        }
                    }
                }
            }
        }))
        .unwrap();

        let methods = collect_methods(&doc);
        let ids: Vec<_> = methods.iter().map(|m| m.method_id.as_str()).collect();
        assert_eq!(ids, vec!["ping", "get", "list"]);
    }

    #[test]
    fn test_malformed_method_node_degrades_to_method_id() {
        let method = DiscoveryMethod::from_value("broken", &json!(42));
        assert_eq!(method.method_id, "broken");
        assert!(method.id.is_none());
        assert!(method.parameters.is_empty());
    }

    #[test]
    fn test_parameter_required_is_boolean_cast() {
        assert!(!DiscoveryParameter::from_value(&json!({})).required);
        assert!(!DiscoveryParameter::from_value(&json!({"required": false})).required);
        assert!(!DiscoveryParameter::from_value(&json!({"required": null})).required);
        assert!(DiscoveryParameter::from_value(&json!({"required": true})).required);
        assert!(DiscoveryParameter::from_value(&json!({"required": "yes"})).required);
    }

    #[test]
    fn test_doc_parse_tolerates_malformed_sections() {
        let doc: DiscoveryDoc = serde_json::from_value(json!({
            "name": "sample",
            "title": 7,
            "schemas": "not a map",
            "resources": {"things": "not a resource"}
        }))
        .unwrap();

        assert_eq!(doc.name.as_deref(), Some("sample"));
        assert!(doc.title.is_none());
        assert!(doc.schemas.is_empty());
        assert!(collect_methods(&doc).is_empty());
    }

    #[test]
    fn test_resource_walk_is_depth_bounded() {
        // Build a resource chain deeper than the walk bound.
        let mut node = json!({"methods": {"leaf": {"id": "deep.leaf"}}});
        for _ in 0..(MAX_DEPTH + 8) {
            node = json!({"resources": {"r": node}});
        }
        let doc: DiscoveryDoc =
            serde_json::from_value(json!({"name": "deep", "resources": {"root": node}})).unwrap();

        // The leaf below the bound is dropped rather than overflowing.
        assert!(collect_methods(&doc).is_empty());
    }
}
