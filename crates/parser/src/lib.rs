//! Input loading for SwaggerWiz
//!
//! This crate reads the two supported input formats into their in-memory
//! descriptors:
//!
//! - a JSON file containing a list of endpoint definitions ([`EndpointFile`])
//! - a plaintext file of `METHOD:path` lines ([`RouteFile`])
//!
//! Loaders are strict about shape (malformed JSON or a colonless route
//! line is an error) and permissive about vocabulary (unknown type tags
//! pass through untouched; that is the generator's concern).

mod endpoints;
mod routes;

pub use endpoints::EndpointFile;
pub use routes::RouteFile;
