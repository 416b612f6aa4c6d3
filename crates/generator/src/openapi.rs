//! OpenAPI 3.0 document assembly from endpoint descriptors

use crate::document::{
    Info, MediaType, OpenApiDocument, Operation, Parameter, PathItem, RequestBody, Response,
    Schema,
};
use crate::schema::build_properties;
use crate::type_mapper::TypeMapper;
use indexmap::IndexMap;
use swaggerwiz_common::{EndpointDescriptor, Result};

const OPENAPI_VERSION: &str = "3.0.0";
const INFO_TITLE: &str = "SwaggerWiz";
const INFO_DESCRIPTION: &str = "API generated from JSON";
const INFO_VERSION: &str = "1.0.0";
const JSON_MEDIA_TYPE: &str = "application/json";

/// OpenAPI 3.0 generator
///
/// Transforms a list of endpoint descriptors into an OpenAPI 3.0 document:
/// query parameters, request-body schemas, and a fixed response stub set
/// per operation.
pub struct OpenApiGenerator {
    endpoints: Vec<EndpointDescriptor>,
}

impl OpenApiGenerator {
    /// Create a generator from parsed endpoint descriptors
    pub fn new(endpoints: Vec<EndpointDescriptor>) -> Self {
        Self { endpoints }
    }

    /// Assemble the full document
    pub fn generate(&self) -> Result<OpenApiDocument> {
        let mut paths: IndexMap<String, PathItem<Operation>> = IndexMap::new();

        for endpoint in &self.endpoints {
            let operation = build_operation(endpoint)?;
            // Repeated (path, method) pairs: the later record wins
            paths
                .entry(endpoint.api_path.clone())
                .or_default()
                .insert(endpoint.http_method.as_str().to_string(), operation);
        }

        Ok(OpenApiDocument {
            openapi: OPENAPI_VERSION.to_string(),
            info: Info {
                title: INFO_TITLE.to_string(),
                description: Some(INFO_DESCRIPTION.to_string()),
                version: INFO_VERSION.to_string(),
            },
            paths,
        })
    }

    /// Assemble and serialize to YAML, preserving key order
    pub fn to_yaml(&self) -> Result<String> {
        let document = self.generate()?;
        Ok(serde_yaml::to_string(&document)?)
    }
}

fn build_operation(endpoint: &EndpointDescriptor) -> Result<Operation> {
    let parameters = endpoint
        .query_params
        .iter()
        .map(|(name, tag)| {
            let mapped = TypeMapper::map_type(tag);
            Parameter {
                location: "query".to_string(),
                name: name.clone(),
                schema: Schema::scalar(mapped.schema_type, mapped.format),
                // There is no optional-parameter concept in this format
                required: true,
            }
        })
        .collect();

    // An empty body mapping counts as absent: the requestBody key must not
    // appear on the wire at all
    let request_body = match &endpoint.request_body {
        Some(fields) if !fields.is_empty() => {
            let mut content = IndexMap::new();
            content.insert(
                JSON_MEDIA_TYPE.to_string(),
                MediaType {
                    schema: Schema::object(build_properties(fields)?),
                },
            );
            Some(RequestBody { content })
        }
        _ => None,
    };

    Ok(Operation {
        summary: format!(
            "{} {}",
            endpoint.http_method.as_str().to_uppercase(),
            endpoint.api_path
        ),
        parameters,
        request_body,
        responses: fixed_responses(),
    })
}

/// Static response stub set attached to every operation
fn fixed_responses() -> IndexMap<String, Response> {
    let mut success_content = IndexMap::new();
    success_content.insert(
        JSON_MEDIA_TYPE.to_string(),
        MediaType {
            schema: Schema::empty_object(),
        },
    );

    let mut responses = IndexMap::new();
    responses.insert(
        "200".to_string(),
        Response {
            description: "Successful operation".to_string(),
            content: Some(success_content),
        },
    );
    responses.insert(
        "400".to_string(),
        Response {
            description: "Invalid request".to_string(),
            content: None,
        },
    );
    responses.insert(
        "404".to_string(),
        Response {
            description: "Resource not found".to_string(),
            content: None,
        },
    );
    responses
}
