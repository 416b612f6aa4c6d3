//! Serialized document shapes for the two target formats
//!
//! Struct field order here is wire order: both serializers emit struct
//! fields in declaration order and `IndexMap` entries in insertion order,
//! which keeps output deterministic for a given input.

use indexmap::IndexMap;
use serde::Serialize;

/// Operations for one path, keyed by lowercase HTTP method
pub type PathItem<O> = IndexMap<String, O>;

// --- OpenAPI 3.0 (endpoint definition pipeline) ---

/// OpenAPI 3.0 document root
#[derive(Debug, Clone, Serialize)]
pub struct OpenApiDocument {
    pub openapi: String,
    pub info: Info,
    pub paths: IndexMap<String, PathItem<Operation>>,
}

/// API metadata block
#[derive(Debug, Clone, Serialize)]
pub struct Info {
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub version: String,
}

/// One HTTP operation
///
/// `requestBody` is omitted from the wire entirely when absent; a null or
/// empty placeholder is never emitted.
#[derive(Debug, Clone, Serialize)]
pub struct Operation {
    pub summary: String,
    pub parameters: Vec<Parameter>,
    #[serde(rename = "requestBody")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub request_body: Option<RequestBody>,
    pub responses: IndexMap<String, Response>,
}

/// Query parameter projection
#[derive(Debug, Clone, Serialize)]
pub struct Parameter {
    #[serde(rename = "in")]
    pub location: String,
    pub name: String,
    pub schema: Schema,
    pub required: bool,
}

/// Request body wrapper (content -> media type -> schema)
#[derive(Debug, Clone, Serialize)]
pub struct RequestBody {
    pub content: IndexMap<String, MediaType>,
}

/// Media type entry holding one schema
#[derive(Debug, Clone, Serialize)]
pub struct MediaType {
    pub schema: Schema,
}

/// Schema fragment: a (type, format) pair, or an object with properties
#[derive(Debug, Clone, Serialize)]
pub struct Schema {
    #[serde(rename = "type")]
    pub schema_type: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub format: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub properties: Option<IndexMap<String, Schema>>,
}

impl Schema {
    /// Leaf schema with an optional format
    pub fn scalar(schema_type: impl Into<String>, format: Option<String>) -> Self {
        Self {
            schema_type: schema_type.into(),
            format,
            properties: None,
        }
    }

    /// Object schema with nested properties
    pub fn object(properties: IndexMap<String, Schema>) -> Self {
        Self {
            schema_type: "object".to_string(),
            format: None,
            properties: Some(properties),
        }
    }

    /// Bare object schema with no properties listed
    pub fn empty_object() -> Self {
        Self {
            schema_type: "object".to_string(),
            format: None,
            properties: None,
        }
    }
}

/// Response stub
#[derive(Debug, Clone, Serialize)]
pub struct Response {
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<IndexMap<String, MediaType>>,
}

// --- Swagger 2.0 (URL list pipeline) ---

/// Swagger 2.0 document root
#[derive(Debug, Clone, Serialize)]
pub struct SwaggerDocument {
    pub swagger: String,
    pub host: String,
    pub info: SwaggerInfo,
    pub schemes: Vec<String>,
    pub consumes: Vec<String>,
    pub paths: IndexMap<String, PathItem<SwaggerOperation>>,
}

/// Swagger 2.0 metadata block
#[derive(Debug, Clone, Serialize)]
pub struct SwaggerInfo {
    pub title: String,
    pub version: String,
}

/// Constant operation body shared by every imported route
#[derive(Debug, Clone, Serialize)]
pub struct SwaggerOperation {
    #[serde(rename = "Description")]
    pub description: String,
    pub responses: IndexMap<String, serde_json::Value>,
    pub consumes: Vec<String>,
}
