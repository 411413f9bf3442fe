//! Structural rules for OpenAPI 3.x documents
//!
//! Every rule runs unconditionally and independently; the validator
//! accumulates all applicable findings in one pass instead of stopping
//! at the first error. The only fatal shape is a document that is not a
//! JSON object.

use crate::findings::{Finding, ValidationReport};
use crate::refs::scan_refs;
use serde_json::{Map, Value};

/// Version prefix an OpenAPI document is expected to carry
pub const DEFAULT_VERSION_PREFIX: &str = "3.";

/// HTTP methods recognized under a path item, in check order
const HTTP_METHODS: [&str; 8] = [
    "get", "put", "post", "delete", "options", "head", "patch", "trace",
];

/// Validate an OpenAPI document against the structural rule set.
///
/// Never mutates `doc` and never fails: all findings are returned as
/// data in the [`ValidationReport`]. `passed` is true exactly when no
/// error-severity finding was produced.
pub fn validate(doc: &Value, expected_version_prefix: &str) -> ValidationReport {
    let mut findings = Vec::new();

    let Some(root) = doc.as_object() else {
        findings.push(Finding::error(
            "document",
            "",
            "Document must be a JSON object",
        ));
        return ValidationReport::from_findings(findings);
    };

    check_openapi_version(root, expected_version_prefix, &mut findings);
    check_info(root, &mut findings);
    check_servers(root, &mut findings);
    check_paths(root, &mut findings);
    check_components(root, &mut findings);
    scan_refs(doc, &mut findings);

    ValidationReport::from_findings(findings)
}

/// True when the value is absent, not a string, or only whitespace
fn blank(value: Option<&Value>) -> bool {
    match value.and_then(Value::as_str) {
        Some(s) => s.trim().is_empty(),
        None => true,
    }
}

fn check_openapi_version(
    root: &Map<String, Value>,
    expected_prefix: &str,
    findings: &mut Vec<Finding>,
) {
    let version = root.get("openapi");
    if blank(version) {
        findings.push(Finding::error(
            "openapi",
            "openapi",
            "Missing or blank 'openapi' version field",
        ));
        return;
    }
    let version = version.and_then(Value::as_str).unwrap_or_default();
    if !version.starts_with(expected_prefix) {
        findings.push(Finding::warning(
            "openapi",
            "openapi",
            format!("Version '{version}' does not match expected prefix '{expected_prefix}'"),
        ));
    }
}

fn check_info(root: &Map<String, Value>, findings: &mut Vec<Finding>) {
    let info = root.get("info").and_then(Value::as_object);
    if info.is_none() {
        findings.push(Finding::error("info", "info", "'info' must be an object"));
    }

    // Title and version are checked even when the info object is missing,
    // so a bare document reports every absent metadata field.
    if blank(info.and_then(|i| i.get("title"))) {
        findings.push(Finding::error(
            "info",
            "info/title",
            "Missing or blank 'title'",
        ));
    }
    if blank(info.and_then(|i| i.get("version"))) {
        findings.push(Finding::error(
            "info",
            "info/version",
            "Missing or blank 'version'",
        ));
    }
}

fn check_servers(root: &Map<String, Value>, findings: &mut Vec<Finding>) {
    match root.get("servers") {
        None => {
            findings.push(Finding::warning("servers", "servers", "No servers defined"));
        }
        Some(Value::Array(entries)) if entries.is_empty() => {
            findings.push(Finding::warning("servers", "servers", "No servers defined"));
        }
        Some(Value::Array(entries)) => {
            for (index, entry) in entries.iter().enumerate() {
                let url = entry.as_object().and_then(|e| e.get("url"));
                if entry.as_object().is_none() || blank(url) {
                    findings.push(Finding::error(
                        "servers",
                        format!("servers/{index}"),
                        "Server entry must be an object with a non-blank 'url'",
                    ));
                }
            }
        }
        Some(_) => {
            findings.push(Finding::error(
                "servers",
                "servers",
                "'servers' must be an array",
            ));
        }
    }
}

fn check_paths(root: &Map<String, Value>, findings: &mut Vec<Finding>) {
    let paths = match root.get("paths").and_then(Value::as_object) {
        Some(paths) if !paths.is_empty() => paths,
        _ => {
            findings.push(Finding::error(
                "paths",
                "paths",
                "'paths' must be a non-empty object",
            ));
            return;
        }
    };

    for (path, item) in paths {
        let context = format!("paths/{path}");
        if !path.starts_with('/') {
            findings.push(Finding::error(
                "paths",
                context.clone(),
                format!("Path '{path}' must start with '/'"),
            ));
        }
        let Some(item) = item.as_object() else {
            findings.push(Finding::error(
                "paths",
                context,
                "Path item must be an object",
            ));
            continue;
        };

        for method in HTTP_METHODS {
            if let Some(operation) = item.get(method) {
                check_operation(path, method, operation, findings);
            }
        }
    }
}

fn check_operation(path: &str, method: &str, operation: &Value, findings: &mut Vec<Finding>) {
    let context = format!("paths/{path}/{method}");
    let Some(operation) = operation.as_object() else {
        findings.push(Finding::error(
            "operations",
            context,
            "Operation must be an object",
        ));
        return;
    };

    if blank(operation.get("operationId")) {
        findings.push(Finding::warning(
            "operations",
            context.clone(),
            "Missing or blank 'operationId'",
        ));
    }

    if let Some(parameters) = operation.get("parameters") {
        check_parameters(path, &context, parameters, findings);
    }
    if let Some(request_body) = operation.get("requestBody") {
        check_request_body(&context, request_body, findings);
    }
    check_responses(&context, operation.get("responses"), findings);
}

fn check_parameters(path: &str, context: &str, parameters: &Value, findings: &mut Vec<Finding>) {
    let Some(parameters) = parameters.as_array() else {
        findings.push(Finding::error(
            "parameters",
            format!("{context}/parameters"),
            "'parameters' must be an array",
        ));
        return;
    };

    for (index, parameter) in parameters.iter().enumerate() {
        let parameter_context = format!("{context}/parameters/{index}");
        let Some(parameter) = parameter.as_object() else {
            findings.push(Finding::error(
                "parameters",
                parameter_context,
                "Parameter must be an object",
            ));
            continue;
        };

        let name = parameter.get("name");
        let location = parameter.get("in");
        if blank(name) || blank(location) {
            findings.push(Finding::error(
                "parameters",
                parameter_context.clone(),
                "Parameter must have non-blank 'name' and 'in'",
            ));
        }

        let in_path = location.and_then(Value::as_str) == Some("path");
        let required = parameter.get("required").and_then(Value::as_bool) == Some(true);
        if in_path && !required {
            let name = name.and_then(Value::as_str).unwrap_or("<unnamed>");
            findings.push(Finding::error(
                "parameters",
                parameter_context,
                format!("Path parameter '{name}' of '{path}' must set required=true"),
            ));
        }
    }
}

fn check_request_body(context: &str, request_body: &Value, findings: &mut Vec<Finding>) {
    let content = request_body
        .as_object()
        .and_then(|b| b.get("content"))
        .and_then(Value::as_object);
    if !content.is_some_and(|c| !c.is_empty()) {
        findings.push(Finding::error(
            "requestBody",
            format!("{context}/requestBody"),
            "'requestBody' must be an object with a non-empty 'content' mapping",
        ));
    }
}

fn check_responses(context: &str, responses: Option<&Value>, findings: &mut Vec<Finding>) {
    let responses_context = format!("{context}/responses");
    let responses = match responses.and_then(Value::as_object) {
        Some(responses) if !responses.is_empty() => responses,
        _ => {
            findings.push(Finding::error(
                "responses",
                responses_context,
                "'responses' must be a non-empty object",
            ));
            return;
        }
    };

    for (code, response) in responses {
        let code_context = format!("{responses_context}/{code}");
        if !valid_response_code(code) {
            findings.push(Finding::warning(
                "responses",
                code_context.clone(),
                format!("Response code '{code}' should be 'default' or three digits"),
            ));
        }
        let Some(response) = response.as_object() else {
            findings.push(Finding::error(
                "responses",
                code_context,
                "Response must be an object",
            ));
            continue;
        };
        if let Some(content) = response.get("content") {
            if !content.is_object() {
                findings.push(Finding::error(
                    "responses",
                    format!("{code_context}/content"),
                    "Response 'content' must be an object",
                ));
            }
        }
    }
}

fn valid_response_code(code: &str) -> bool {
    code == "default" || (code.len() == 3 && code.chars().all(|c| c.is_ascii_digit()))
}

fn check_components(root: &Map<String, Value>, findings: &mut Vec<Finding>) {
    let Some(components) = root.get("components") else {
        return;
    };
    let Some(components) = components.as_object() else {
        findings.push(Finding::error(
            "components",
            "components",
            "'components' must be an object",
        ));
        return;
    };

    for section in ["schemas", "securitySchemes"] {
        if let Some(value) = components.get(section) {
            if !value.is_object() {
                findings.push(Finding::error(
                    "components",
                    format!("components/{section}"),
                    format!("'components.{section}' must be an object"),
                ));
            }
        }
    }
}
