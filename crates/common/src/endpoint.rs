//! Input descriptor types
//!
//! In-memory representation of one input record, produced by the loaders
//! and consumed once by the document assemblers. Descriptors are never
//! mutated after creation.

use crate::HttpMethod;
use indexmap::IndexMap;
use serde::Deserialize;

/// One API operation from the JSON endpoint definition file
#[derive(Debug, Clone, Deserialize)]
pub struct EndpointDescriptor {
    /// URL path (e.g., "/api/v1/users")
    #[serde(rename = "apiPath")]
    pub api_path: String,

    /// HTTP method
    #[serde(rename = "httpMethod")]
    pub http_method: HttpMethod,

    /// Query parameter name -> declared type, in input order
    #[serde(rename = "queryParams")]
    #[serde(default)]
    pub query_params: IndexMap<String, String>,

    /// Request body field mapping, absent when the endpoint has no body
    #[serde(rename = "requestBody")]
    #[serde(default)]
    pub request_body: Option<IndexMap<String, FieldDescriptor>>,
}

/// A request-body field: either a primitive type tag or a nested object
///
/// Nesting is arbitrary-depth and tree-shaped by construction, since it
/// originates from static JSON.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum FieldDescriptor {
    /// Primitive type tag (`int`, `Boolean`, `String`, `UUID`, or an
    /// unrecognized pass-through string)
    Scalar(String),

    /// Nested object mapping
    Object(IndexMap<String, FieldDescriptor>),
}

/// One `METHOD:path` line from a URL list file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Route {
    pub method: HttpMethod,
    pub path: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_full_descriptor() {
        let json = r#"{
            "apiPath": "/users",
            "httpMethod": "POST",
            "queryParams": {"id": "UUID", "limit": "int"},
            "requestBody": {"name": "String", "address": {"city": "String"}}
        }"#;

        let endpoint: EndpointDescriptor = serde_json::from_str(json).unwrap();
        assert_eq!(endpoint.api_path, "/users");
        assert_eq!(endpoint.http_method, HttpMethod::Post);

        // Input order is preserved
        let params: Vec<&str> = endpoint.query_params.keys().map(String::as_str).collect();
        assert_eq!(params, vec!["id", "limit"]);

        let body = endpoint.request_body.unwrap();
        assert!(matches!(body.get("name"), Some(FieldDescriptor::Scalar(t)) if t == "String"));
        assert!(matches!(body.get("address"), Some(FieldDescriptor::Object(_))));
    }

    #[test]
    fn test_missing_optional_keys_default_to_absent() {
        let json = r#"{"apiPath": "/ping", "httpMethod": "GET"}"#;

        let endpoint: EndpointDescriptor = serde_json::from_str(json).unwrap();
        assert!(endpoint.query_params.is_empty());
        assert!(endpoint.request_body.is_none());
    }

    #[test]
    fn test_unknown_method_is_rejected() {
        let json = r#"{"apiPath": "/ping", "httpMethod": "FETCH"}"#;

        let result: std::result::Result<EndpointDescriptor, _> = serde_json::from_str(json);
        assert!(result.is_err());
    }
}
