//! Swagger 2.0 document assembly from URL lists

use crate::document::{PathItem, SwaggerDocument, SwaggerInfo, SwaggerOperation};
use indexmap::IndexMap;
use swaggerwiz_common::{Result, Route};

const SWAGGER_VERSION: &str = "2.0";
const INFO_VERSION: &str = "v2";
const JSON_MEDIA_TYPE: &str = "application/json";
const OPERATION_DESCRIPTION: &str = "Imported endpoint";

/// Swagger 2.0 generator
///
/// Transforms a URL list into a Swagger 2.0 document. Every operation
/// shares one constant body; only the (path, method) key varies.
pub struct SwaggerGenerator {
    routes: Vec<Route>,
    title: String,
    host: String,
    protocol: String,
}

impl SwaggerGenerator {
    /// Create a generator from parsed routes and document metadata
    pub fn new(routes: Vec<Route>, title: &str, host: &str, protocol: &str) -> Self {
        Self {
            routes,
            title: title.to_string(),
            host: host.to_string(),
            protocol: protocol.to_string(),
        }
    }

    /// Assemble the full document
    pub fn generate(&self) -> SwaggerDocument {
        let mut paths: IndexMap<String, PathItem<SwaggerOperation>> = IndexMap::new();

        for route in &self.routes {
            // Repeated (path, method) pairs: the later line wins
            paths
                .entry(route.path.clone())
                .or_default()
                .insert(route.method.as_str().to_string(), operation_stub());
        }

        SwaggerDocument {
            swagger: SWAGGER_VERSION.to_string(),
            host: self.host.clone(),
            info: SwaggerInfo {
                title: self.title.clone(),
                version: INFO_VERSION.to_string(),
            },
            schemes: vec![self.protocol.clone()],
            consumes: vec![JSON_MEDIA_TYPE.to_string()],
            paths,
        }
    }

    /// Assemble and serialize as a single-line JSON blob
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(&self.generate())?)
    }
}

fn operation_stub() -> SwaggerOperation {
    SwaggerOperation {
        description: OPERATION_DESCRIPTION.to_string(),
        responses: IndexMap::new(),
        consumes: vec![JSON_MEDIA_TYPE.to_string()],
    }
}
