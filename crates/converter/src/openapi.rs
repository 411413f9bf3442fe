//! OpenAPI 3.x output model
//!
//! Typed representation of the emitted document. The assembled document
//! is serialized to JSON and then compacted, so optional fields lean on
//! `skip_serializing_if` rather than emitting nulls.

use serde::Serialize;
use serde_json::Value;
use std::collections::BTreeMap;

/// OpenAPI document root
#[derive(Debug, Clone, Serialize)]
pub struct OpenApiDocument {
    /// OpenAPI version (e.g., "3.0.3")
    pub openapi: String,

    /// API metadata
    pub info: Info,

    /// Servers
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub servers: Vec<Server>,

    /// API paths: path template to http-method to operation
    pub paths: BTreeMap<String, BTreeMap<String, Operation>>,

    /// Reusable components
    pub components: Components,
}

/// API information
#[derive(Debug, Clone, Default, Serialize)]
pub struct Info {
    /// API title
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    /// API version
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,

    /// API description
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Server information
#[derive(Debug, Clone, Serialize)]
pub struct Server {
    /// Server URL
    pub url: String,
}

/// HTTP operation
#[derive(Debug, Clone, Serialize)]
pub struct Operation {
    /// Operation ID, never blank
    #[serde(rename = "operationId")]
    pub operation_id: String,

    /// Description
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Parameters, unique by (in, name)
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub parameters: Vec<ParameterObject>,

    /// Request body
    #[serde(rename = "requestBody", skip_serializing_if = "Option::is_none")]
    pub request_body: Option<RequestBody>,

    /// Responses keyed by status code
    pub responses: BTreeMap<String, ResponseObject>,
}

/// Parameter definition
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ParameterObject {
    /// Parameter name
    pub name: String,

    /// Location: path, query, or header
    #[serde(rename = "in")]
    pub location: String,

    /// Required flag
    pub required: bool,

    /// Parameter schema
    pub schema: SchemaObject,
}

/// Request body
#[derive(Debug, Clone, Serialize)]
pub struct RequestBody {
    /// Required flag
    pub required: bool,

    /// Content types
    pub content: BTreeMap<String, MediaType>,
}

/// Response
#[derive(Debug, Clone, Serialize)]
pub struct ResponseObject {
    /// Description
    pub description: String,

    /// Content types
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<BTreeMap<String, MediaType>>,
}

/// Media type
#[derive(Debug, Clone, Serialize)]
pub struct MediaType {
    /// Schema
    #[serde(skip_serializing_if = "Option::is_none")]
    pub schema: Option<SchemaObject>,
}

/// Schema definition or reference
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SchemaObject {
    /// Local reference; when set, every other field is empty
    #[serde(rename = "$ref", skip_serializing_if = "Option::is_none")]
    pub ref_path: Option<String>,

    /// Type: string, number, integer, boolean, array, object
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub schema_type: Option<String>,

    /// Description
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Format (e.g., "int32", "date-time"), used by parameter schemas
    #[serde(skip_serializing_if = "Option::is_none")]
    pub format: Option<String>,

    /// Enum values, copied verbatim from the source
    #[serde(rename = "enum", skip_serializing_if = "Option::is_none")]
    pub enum_values: Option<Vec<Value>>,

    /// Properties (for object type)
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub properties: BTreeMap<String, SchemaObject>,

    /// Items schema (for array type)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub items: Option<Box<SchemaObject>>,

    /// Required property names, copied verbatim from the source
    #[serde(skip_serializing_if = "Option::is_none")]
    pub required: Option<Vec<Value>>,
}

impl SchemaObject {
    /// Local reference of the form `#/components/schemas/<Name>`
    pub fn reference(name: &str) -> Self {
        Self {
            ref_path: Some(format!("#/components/schemas/{name}")),
            ..Default::default()
        }
    }

    /// Defensive default for malformed input nodes
    pub fn object() -> Self {
        Self {
            schema_type: Some("object".to_string()),
            ..Default::default()
        }
    }

    /// Plain string schema, used for synthetic path parameters
    pub fn string() -> Self {
        Self {
            schema_type: Some("string".to_string()),
            ..Default::default()
        }
    }
}

/// Reusable components
#[derive(Debug, Clone, Default, Serialize)]
pub struct Components {
    /// Schemas
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub schemas: BTreeMap<String, SchemaObject>,

    /// Security schemes
    #[serde(
        rename = "securitySchemes",
        skip_serializing_if = "BTreeMap::is_empty"
    )]
    pub security_schemes: BTreeMap<String, SecurityScheme>,
}

/// Security scheme
#[derive(Debug, Clone, Serialize)]
pub struct SecurityScheme {
    /// Scheme type, always "oauth2" here
    #[serde(rename = "type")]
    pub scheme_type: String,

    /// OAuth flows
    pub flows: OAuthFlows,
}

/// OAuth flow set
#[derive(Debug, Clone, Serialize)]
pub struct OAuthFlows {
    /// Authorization code flow
    #[serde(rename = "authorizationCode")]
    pub authorization_code: AuthorizationCodeFlow,
}

/// Authorization code flow
#[derive(Debug, Clone, Serialize)]
pub struct AuthorizationCodeFlow {
    /// Authorization endpoint
    #[serde(rename = "authorizationUrl")]
    pub authorization_url: String,

    /// Token endpoint
    #[serde(rename = "tokenUrl")]
    pub token_url: String,

    /// Scope string to description mapping
    pub scopes: BTreeMap<String, String>,
}
