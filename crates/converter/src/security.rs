//! Security scheme injection
//!
//! A Discovery `auth.oauth2` block maps to a single
//! `components.securitySchemes.oauth2` entry using the Google OAuth2
//! authorization-code endpoints. The scheme is declared but not attached
//! to any operation; per-operation security requirements are out of
//! scope.

use crate::discovery::DiscoveryDoc;
use crate::openapi::{AuthorizationCodeFlow, OAuthFlows, SecurityScheme};
use serde_json::Value;
use std::collections::BTreeMap;

const GOOGLE_AUTHORIZATION_URL: &str = "https://accounts.google.com/o/oauth2/auth";
const GOOGLE_TOKEN_URL: &str = "https://oauth2.googleapis.com/token";

pub(crate) fn security_schemes(doc: &DiscoveryDoc) -> BTreeMap<String, SecurityScheme> {
    let mut schemes = BTreeMap::new();
    let Some(oauth2) = doc.auth.as_ref().and_then(|auth| auth.oauth2.as_ref()) else {
        return schemes;
    };

    let scopes = oauth2
        .scopes
        .iter()
        .map(|(scope, value)| (scope.clone(), stringify_scope(value)))
        .collect();

    schemes.insert(
        "oauth2".to_string(),
        SecurityScheme {
            scheme_type: "oauth2".to_string(),
            flows: OAuthFlows {
                authorization_code: AuthorizationCodeFlow {
                    authorization_url: GOOGLE_AUTHORIZATION_URL.to_string(),
                    token_url: GOOGLE_TOKEN_URL.to_string(),
                    scopes,
                },
            },
        },
    );
    schemes
}

/// Stringify a scope value. Scope values are description strings; real
/// Discovery documents nest them as `{"description": ...}`, so that form
/// is unwrapped before falling back to raw JSON text.
fn stringify_scope(value: &Value) -> String {
    if let Some(description) = value.as_str() {
        return description.to_string();
    }
    if let Some(description) = value.get("description").and_then(Value::as_str) {
        return description.to_string();
    }
    value.to_string()
}
