//! Common types and utilities for SwaggerWiz
//!
//! This crate contains the shared data structures, error types, and the
//! HTTP method vocabulary used across the parser, generator, and CLI
//! components.

mod endpoint;
mod method;

pub use endpoint::{EndpointDescriptor, FieldDescriptor, Route};
pub use method::HttpMethod;

use thiserror::Error;

/// Errors that can occur during document conversion
#[derive(Error, Debug)]
pub enum ConvertError {
    #[error("Parse error: {0}")]
    Parse(String),

    #[error("Generation error: {0}")]
    Generation(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

/// Result type for conversion operations
pub type Result<T> = std::result::Result<T, ConvertError>;
