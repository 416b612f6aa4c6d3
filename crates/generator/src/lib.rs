//! Document assembly for SwaggerWiz
//!
//! This crate transforms parsed input descriptors into serialized
//! OpenAPI/Swagger documents:
//!
//! - type/format mapping for the primitive tag vocabulary
//! - recursive request-body schema construction
//! - OpenAPI 3.0 assembly from endpoint descriptors (YAML output)
//! - Swagger 2.0 assembly from URL lists (single-line JSON output)
//! - output writing with a uniform overwrite policy

pub mod document;

mod openapi;
mod schema;
mod swagger;
mod type_mapper;
mod writer;

pub use openapi::OpenApiGenerator;
pub use schema::{build_properties, MAX_BODY_DEPTH};
pub use swagger::SwaggerGenerator;
pub use type_mapper::{MappedType, TypeMapper};
pub use writer::{write_document, WriteOutcome};
