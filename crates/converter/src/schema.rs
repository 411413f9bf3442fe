//! Schema translation
//!
//! Maps a Discovery schema node to an OpenAPI schema node. Discovery's
//! local `$ref` names a bare schema rather than a JSON pointer, so the
//! rewrite to `#/components/schemas/<Name>` is a pure string-prefix
//! operation.

use crate::openapi::SchemaObject;
use crate::MAX_DEPTH;
use serde_json::Value;

/// Translate a Discovery schema node into an OpenAPI schema.
///
/// Never fails: a node that is not object-shaped, or that sits past the
/// recursion bound, degrades to the `{type: "object"}` default.
pub fn translate_schema(node: &Value) -> SchemaObject {
    translate_at_depth(node, 0)
}

fn translate_at_depth(node: &Value, depth: usize) -> SchemaObject {
    let Some(node) = node.as_object() else {
        return SchemaObject::object();
    };
    if depth >= MAX_DEPTH {
        return SchemaObject::object();
    }

    // A $ref short-circuits everything else the node declares.
    if let Some(name) = node.get("$ref").and_then(Value::as_str) {
        return SchemaObject::reference(name);
    }

    let mut schema = SchemaObject {
        schema_type: node.get("type").and_then(Value::as_str).map(str::to_string),
        description: node
            .get("description")
            .and_then(Value::as_str)
            .map(str::to_string),
        enum_values: node.get("enum").and_then(Value::as_array).cloned(),
        ..Default::default()
    };

    if let Some(properties) = node.get("properties").and_then(Value::as_object) {
        if schema.schema_type.is_none() {
            schema.schema_type = Some("object".to_string());
        }
        for (name, property) in properties {
            schema
                .properties
                .insert(name.clone(), translate_at_depth(property, depth + 1));
        }
    }

    if let Some(items) = node.get("items") {
        schema.schema_type = Some("array".to_string());
        schema.items = Some(Box::new(translate_at_depth(items, depth + 1)));
    }

    if let Some(required) = node.get("required").and_then(Value::as_array) {
        schema.required = Some(required.clone());
    }

    schema
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_non_object_input_defaults_to_object() {
        for node in [json!(null), json!("string"), json!(7), json!([1, 2])] {
            assert_eq!(translate_schema(&node), SchemaObject::object());
        }
    }

    #[test]
    fn test_ref_discards_everything_else() {
        let node = json!({
            "$ref": "Bucket",
            "type": "object",
            "description": "ignored",
            "properties": {"id": {"type": "string"}}
        });
        assert_eq!(translate_schema(&node), SchemaObject::reference("Bucket"));
    }

    #[test]
    fn test_properties_force_object_type() {
        let node = json!({"properties": {"id": {"type": "string"}}});
        let schema = translate_schema(&node);
        assert_eq!(schema.schema_type.as_deref(), Some("object"));
        assert_eq!(
            schema.properties["id"].schema_type.as_deref(),
            Some("string")
        );
    }

    #[test]
    fn test_items_force_array_type() {
        let node = json!({"type": "object", "items": {"type": "string"}});
        let schema = translate_schema(&node);
        assert_eq!(schema.schema_type.as_deref(), Some("array"));
        assert_eq!(
            schema.items.unwrap().schema_type.as_deref(),
            Some("string")
        );
    }

    #[test]
    fn test_enum_and_required_copied_verbatim() {
        let node = json!({
            "type": "string",
            "enum": ["A", "B"],
            "required": ["x", "y"]
        });
        let schema = translate_schema(&node);
        assert_eq!(schema.enum_values, Some(vec![json!("A"), json!("B")]));
        assert_eq!(schema.required, Some(vec![json!("x"), json!("y")]));
    }

    #[test]
    fn test_translation_is_idempotent_for_openapi_shaped_input() {
        let node = json!({
            "type": "object",
            "description": "a thing",
            "properties": {
                "id": {"type": "string"},
                "tags": {"type": "array", "items": {"type": "string"}}
            },
            "required": ["id"]
        });
        let once = serde_json::to_value(translate_schema(&node)).unwrap();
        let twice = serde_json::to_value(translate_schema(&once)).unwrap();
        assert_eq!(once, twice);
    }

    #[test]
    fn test_recursion_bound_degrades_to_object() {
        let mut node = json!({"type": "string"});
        for _ in 0..(MAX_DEPTH + 8) {
            node = json!({"type": "object", "properties": {"inner": node}});
        }
        // Deep translation completes without overflowing the stack.
        let schema = translate_schema(&node);
        assert_eq!(schema.schema_type.as_deref(), Some("object"));
    }
}
