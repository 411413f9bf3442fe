//! Global `$ref` scan
//!
//! Walks the entire document tree, independent of the paths walk, and
//! checks every node carrying a `$ref` key against the local components
//! reference form. The walk is depth-bounded so cyclic or pathologically
//! deep input cannot overflow the stack.

use crate::findings::Finding;
use regex::Regex;
use serde_json::Value;

/// References must point into the document's own schema components
const LOCAL_REF_PATTERN: &str = r"^#/components/schemas/[^#/]+$";

/// Maximum tree depth the scan will descend
const MAX_DEPTH: usize = 64;

/// Scan every node of `doc` for `$ref` keys and report non-conforming
/// values as warnings naming the slash-joined trail where they occur.
pub(crate) fn scan_refs(doc: &Value, findings: &mut Vec<Finding>) {
    let Ok(pattern) = Regex::new(LOCAL_REF_PATTERN) else {
        return;
    };
    let mut trail = Vec::new();
    walk(doc, &pattern, &mut trail, 0, findings);
}

fn walk(
    node: &Value,
    pattern: &Regex,
    trail: &mut Vec<String>,
    depth: usize,
    findings: &mut Vec<Finding>,
) {
    if depth >= MAX_DEPTH {
        return;
    }
    match node {
        Value::Object(map) => {
            if let Some(reference) = map.get("$ref") {
                let conforming = reference
                    .as_str()
                    .is_some_and(|target| pattern.is_match(target));
                if !conforming {
                    findings.push(Finding::warning(
                        "refs",
                        trail.join("/"),
                        format!(
                            "$ref '{}' is not of the form #/components/schemas/<Name>",
                            render_ref(reference)
                        ),
                    ));
                }
            }
            for (key, value) in map {
                trail.push(key.clone());
                walk(value, pattern, trail, depth + 1, findings);
                trail.pop();
            }
        }
        Value::Array(items) => {
            for (index, item) in items.iter().enumerate() {
                trail.push(index.to_string());
                walk(item, pattern, trail, depth + 1, findings);
                trail.pop();
            }
        }
        _ => {}
    }
}

fn render_ref(reference: &Value) -> String {
    match reference.as_str() {
        Some(target) => target.to_string(),
        None => reference.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn scan(doc: &Value) -> Vec<Finding> {
        let mut findings = Vec::new();
        scan_refs(doc, &mut findings);
        findings
    }

    #[test]
    fn test_conforming_ref_produces_no_finding() {
        let doc = json!({"schema": {"$ref": "#/components/schemas/Thing"}});
        assert!(scan(&doc).is_empty());
    }

    #[test]
    fn test_external_ref_is_warned_with_trail() {
        let doc = json!({
            "paths": {"/a": {"get": {"requestBody": {
                "content": {"application/json": {"schema": {"$ref": "https://example.com/x.json#/Thing"}}}
            }}}}
        });
        let findings = scan(&doc);
        assert_eq!(findings.len(), 1);
        assert_eq!(
            findings[0].context,
            "paths//a/get/requestBody/content/application/json/schema"
        );
    }

    #[test]
    fn test_pointer_into_definitions_is_warned() {
        let doc = json!({"schema": {"$ref": "#/definitions/Thing"}});
        assert_eq!(scan(&doc).len(), 1);
    }

    #[test]
    fn test_non_string_ref_is_warned() {
        let doc = json!({"schema": {"$ref": 42}});
        let findings = scan(&doc);
        assert_eq!(findings.len(), 1);
        assert!(findings[0].message.contains("42"));
    }

    #[test]
    fn test_refs_inside_arrays_carry_index_in_trail() {
        let doc = json!({"allOf": [{"$ref": "#/components/schemas/A"}, {"$ref": "bad"}]});
        let findings = scan(&doc);
        assert_eq!(findings.len(), 1);
        assert_eq!(findings[0].context, "allOf/1");
    }

    #[test]
    fn test_nested_schema_name_must_not_contain_slash() {
        let doc = json!({"schema": {"$ref": "#/components/schemas/A/properties/b"}});
        assert_eq!(scan(&doc).len(), 1);
    }
}
