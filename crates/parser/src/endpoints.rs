//! JSON endpoint definition file parser

use std::fs;
use std::path::Path;
use swaggerwiz_common::{ConvertError, EndpointDescriptor, Result};

/// Endpoint definition file parser
///
/// Reads a JSON file shaped as a list of endpoint objects, each with an
/// `apiPath`, an `httpMethod`, and optional `queryParams` / `requestBody`
/// mappings.
///
/// # Example
/// ```rust,ignore
/// let endpoints = EndpointFile::from_file("endpoints.json")?.into_endpoints();
/// ```
pub struct EndpointFile {
    endpoints: Vec<EndpointDescriptor>,
}

impl EndpointFile {
    /// Load endpoint definitions from a file path
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path.as_ref()).map_err(|e| {
            ConvertError::Parse(format!(
                "Failed to read endpoint file {}: {}",
                path.as_ref().display(),
                e
            ))
        })?;

        Self::from_json(&content)
    }

    /// Parse endpoint definitions from a JSON string
    pub fn from_json(json: &str) -> Result<Self> {
        let endpoints: Vec<EndpointDescriptor> = serde_json::from_str(json)
            .map_err(|e| ConvertError::Parse(format!("Failed to parse endpoint JSON: {e}")))?;

        Ok(Self { endpoints })
    }

    /// Parsed endpoint descriptors, in input order
    pub fn endpoints(&self) -> &[EndpointDescriptor] {
        &self.endpoints
    }

    /// Consume the parser and return the descriptors
    pub fn into_endpoints(self) -> Vec<EndpointDescriptor> {
        self.endpoints
    }
}
