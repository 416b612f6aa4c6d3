//! Type mapping from declared input types to OpenAPI type/format pairs

/// A mapped (schema type, optional format) pair
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MappedType {
    pub schema_type: String,
    pub format: Option<String>,
}

impl MappedType {
    fn new(schema_type: &str, format: Option<&str>) -> Self {
        Self {
            schema_type: schema_type.to_string(),
            format: format.map(String::from),
        }
    }
}

/// Maps declared parameter and field types to OpenAPI schema pairs
pub struct TypeMapper;

impl TypeMapper {
    /// Map a declared type tag to its OpenAPI (type, format) pair
    ///
    /// Recognized tags follow a fixed table; any other tag passes through
    /// unchanged as the schema type with no format. Unknown tags are never
    /// rejected.
    ///
    /// # Examples
    /// ```
    /// use swaggerwiz_generator::TypeMapper;
    ///
    /// assert_eq!(TypeMapper::map_type("int").schema_type, "integer");
    /// assert_eq!(TypeMapper::map_type("UUID").format.as_deref(), Some("uuid"));
    /// ```
    pub fn map_type(tag: &str) -> MappedType {
        match tag {
            "int" => MappedType::new("integer", None),
            "Boolean" => MappedType::new("boolean", None),
            "String" => MappedType::new("string", None),
            "UUID" => MappedType::new("string", Some("uuid")),
            other => MappedType::new(other, None),
        }
    }
}
