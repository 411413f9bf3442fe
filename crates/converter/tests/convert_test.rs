//! Integration test for Discovery to OpenAPI conversion

use discovery_bridge_converter::{convert, render, DiscoveryParser, RenderMode, RenderedDocument};

#[test]
fn test_convert_sample_resource_method() {
    let discovery_json = r##"{
        "name": "sample",
        "schemas": {
            "Thing": {"type": "object", "properties": {"id": {"type": "string"}}}
        },
        "resources": {
            "things": {
                "methods": {
                    "get": {
                        "id": "sample.getThing",
                        "path": "v1/things/{thingId}",
                        "httpMethod": "GET",
                        "parameters": {
                            "thingId": {"location": "path", "required": true, "type": "string"}
                        }
                    }
                }
            }
        }
    }"##;

    let parser = DiscoveryParser::from_json(discovery_json).unwrap();
    let outcome = convert(parser.doc()).unwrap();
    let operation = &outcome.document["paths"]["/v1/things/{thingId}"]["get"];

    assert_eq!(operation["operationId"], "sample.getThing");

    let parameters = operation["parameters"].as_array().unwrap();
    let path_parameters: Vec<_> = parameters
        .iter()
        .filter(|p| p["in"] == "path")
        .collect();
    assert_eq!(path_parameters.len(), 1);
    assert_eq!(path_parameters[0]["name"], "thingId");
    assert_eq!(path_parameters[0]["required"], true);

    assert_eq!(
        outcome.document["components"]["schemas"]["Thing"]["properties"]["id"]["type"],
        "string"
    );
}

#[test]
fn test_convert_storage_like_document_passes_validation() {
    // Simplified Google Cloud Storage Discovery document
    let discovery_json = r##"{
        "name": "storage",
        "version": "v1",
        "title": "Cloud Storage JSON API",
        "description": "Stores and retrieves potentially large, immutable data objects.",
        "rootUrl": "https://storage.googleapis.com/",
        "servicePath": "storage/v1/",
        "auth": {
            "oauth2": {
                "scopes": {
                    "https://www.googleapis.com/auth/devstorage.full_control": {
                        "description": "Manage your data and permissions in Google Cloud Storage"
                    }
                }
            }
        },
        "schemas": {
            "Bucket": {
                "id": "Bucket",
                "type": "object",
                "description": "A bucket resource",
                "properties": {
                    "id": {"type": "string"},
                    "name": {"type": "string"},
                    "storageClass": {"type": "string", "enum": ["STANDARD", "NEARLINE"]}
                },
                "required": ["name"]
            }
        },
        "resources": {
            "buckets": {
                "methods": {
                    "insert": {
                        "id": "storage.buckets.insert",
                        "path": "b",
                        "httpMethod": "POST",
                        "description": "Creates a new bucket",
                        "parameters": {
                            "project": {"type": "string", "required": true, "location": "query"}
                        },
                        "request": {"$ref": "Bucket"},
                        "response": {"$ref": "Bucket"}
                    },
                    "get": {
                        "id": "storage.buckets.get",
                        "path": "b/{bucket}",
                        "httpMethod": "GET",
                        "parameters": {
                            "bucket": {"type": "string", "required": true, "location": "path"}
                        },
                        "response": {"$ref": "Bucket"}
                    },
                    "delete": {
                        "id": "storage.buckets.delete",
                        "path": "b/{bucket}",
                        "httpMethod": "DELETE",
                        "parameters": {
                            "bucket": {"type": "string", "required": true, "location": "path"}
                        }
                    }
                }
            }
        }
    }"##;

    let parser = DiscoveryParser::from_json(discovery_json).unwrap();
    let outcome = convert(parser.doc()).unwrap();

    assert!(
        outcome.report.passed,
        "unexpected errors: {:?}",
        outcome.report.errors
    );

    let document = &outcome.document;
    assert_eq!(document["openapi"], "3.0.3");
    assert_eq!(
        document["servers"][0]["url"],
        "https://storage.googleapis.com/storage/v1/"
    );

    // Both bucket methods land under distinct (path, method) slots.
    assert_eq!(
        document["paths"]["/b"]["post"]["operationId"],
        "storage.buckets.insert"
    );
    assert_eq!(
        document["paths"]["/b/{bucket}"]["get"]["operationId"],
        "storage.buckets.get"
    );
    assert_eq!(
        document["paths"]["/b/{bucket}"]["delete"]["operationId"],
        "storage.buckets.delete"
    );

    // The request body references the translated component schema.
    assert_eq!(
        document["paths"]["/b"]["post"]["requestBody"]["content"]["application/json"]["schema"]
            ["$ref"],
        "#/components/schemas/Bucket"
    );

    // The delete method has no response schema, so its single 200 carries
    // only a description; the compactor removed the empty content slot.
    let delete_response = &document["paths"]["/b/{bucket}"]["delete"]["responses"]["200"];
    assert_eq!(delete_response["description"], "OK");
    assert!(delete_response.get("content").is_none());

    // OAuth2 scheme is declared but not attached to any operation.
    let scheme = &document["components"]["securitySchemes"]["oauth2"];
    assert_eq!(scheme["type"], "oauth2");
    assert_eq!(
        scheme["flows"]["authorizationCode"]["authorizationUrl"],
        "https://accounts.google.com/o/oauth2/auth"
    );
    assert!(document["paths"]["/b"]["post"].get("security").is_none());
}

#[test]
fn test_rendered_chunks_cover_converted_document() {
    let parser = DiscoveryParser::from_json(
        r##"{"name": "sample", "version": "v1", "methods": {
            "ping": {"id": "sample.ping", "path": "ping", "httpMethod": "GET"}
        }}"##,
    )
    .unwrap();
    let outcome = convert(parser.doc()).unwrap();

    let rendered = render(&outcome.document, RenderMode::Chunked { size: 64 }).unwrap();
    let RenderedDocument::Chunked { chunks } = rendered else {
        panic!("expected chunked rendering");
    };
    let reassembled: String = chunks.iter().map(|c| c.content.as_str()).collect();
    let reparsed: serde_json::Value = serde_json::from_str(&reassembled).unwrap();
    assert_eq!(reparsed, outcome.document);
}
