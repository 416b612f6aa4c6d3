//! `METHOD:path` URL list parser

use std::fs;
use std::path::Path;
use swaggerwiz_common::{ConvertError, HttpMethod, Result, Route};

/// URL list file parser
///
/// Each non-blank line is `HTTPMETHOD:path`. The first colon separates
/// method from path, so paths may themselves contain colons, which are
/// preserved. Method and path are lower-cased.
pub struct RouteFile {
    routes: Vec<Route>,
}

impl RouteFile {
    /// Load a URL list from a file path
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path.as_ref()).map_err(|e| {
            ConvertError::Parse(format!(
                "Failed to read URL list {}: {}",
                path.as_ref().display(),
                e
            ))
        })?;

        Self::from_text(&content)
    }

    /// Parse a URL list from text
    pub fn from_text(text: &str) -> Result<Self> {
        let mut routes = Vec::new();

        for (lineno, line) in text.lines().enumerate() {
            let line = line.trim();
            if line.is_empty() {
                continue;
            }

            let (method, path) = line.split_once(':').ok_or_else(|| {
                ConvertError::Parse(format!(
                    "Malformed route on line {}: expected METHOD:path, got {:?}",
                    lineno + 1,
                    line
                ))
            })?;

            let method: HttpMethod = method.trim().parse()?;
            let path = path.trim().to_lowercase();
            routes.push(Route { method, path });
        }

        Ok(Self { routes })
    }

    /// Parsed routes, in input order
    pub fn routes(&self) -> &[Route] {
        &self.routes
    }

    /// Consume the parser and return the routes
    pub fn into_routes(self) -> Vec<Route> {
        self.routes
    }
}
