//! Recursive request-body schema construction

use crate::document::Schema;
use crate::type_mapper::TypeMapper;
use indexmap::IndexMap;
use swaggerwiz_common::{ConvertError, FieldDescriptor, Result};

/// Nesting limit for request-body objects
///
/// Input is tree-shaped by construction; the bound guards against
/// pathological inputs instead of recursing without limit.
pub const MAX_BODY_DEPTH: usize = 64;

/// Convert a request-body field mapping into an object schema's `properties`
///
/// Nested mappings become `{"type": "object", "properties": ...}` wrappers
/// at every non-leaf level; leaves become (type, format) fragments via the
/// type mapper. Field order follows input order.
pub fn build_properties(
    fields: &IndexMap<String, FieldDescriptor>,
) -> Result<IndexMap<String, Schema>> {
    build_properties_at(fields, 0)
}

fn build_properties_at(
    fields: &IndexMap<String, FieldDescriptor>,
    depth: usize,
) -> Result<IndexMap<String, Schema>> {
    if depth >= MAX_BODY_DEPTH {
        return Err(ConvertError::Generation(format!(
            "Malformed input: request body nested deeper than {MAX_BODY_DEPTH} levels"
        )));
    }

    let mut properties = IndexMap::new();
    for (field, descriptor) in fields {
        let schema = match descriptor {
            FieldDescriptor::Object(nested) => {
                Schema::object(build_properties_at(nested, depth + 1)?)
            }
            FieldDescriptor::Scalar(tag) => {
                let mapped = TypeMapper::map_type(tag);
                Schema::scalar(mapped.schema_type, mapped.format)
            }
        };
        properties.insert(field.clone(), schema);
    }

    Ok(properties)
}
