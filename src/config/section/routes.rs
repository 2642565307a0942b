//! `[routes]` section configuration.
//!
//! Route metadata keyed by path, used by the CLI to simulate navigations.
//!
//! # Example
//!
//! ```toml
//! [routes."/about"]
//! title = "About"
//! description = "Who we are"
//!
//! [routes."/landing"]
//! title = "Acme Widgets"
//! override = true
//! ```

use crate::config::{ConfigDiagnostics, FieldPath};
use crate::meta::RouteMeta;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Route metadata in declaration order.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RoutesConfig(IndexMap<String, RouteMeta>);

impl RoutesConfig {
    const FIELD: FieldPath = FieldPath::new("routes");

    /// Metadata for the route matching `url`.
    ///
    /// Matching is by exact path; query, fragment and a trailing slash are
    /// ignored on both sides.
    pub fn get(&self, url: &str) -> Option<&RouteMeta> {
        let path = route_path(url);
        self.0
            .iter()
            .find(|(key, _)| route_path(key) == path)
            .map(|(_, route)| route)
    }

    pub fn insert(&mut self, path: impl Into<String>, route: RouteMeta) {
        self.0.insert(path.into(), route);
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &RouteMeta)> {
        self.0.iter()
    }

    /// Every route key must be an absolute path.
    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        for path in self.0.keys().filter(|path| !path.starts_with('/')) {
            diag.error_with_hint(
                Self::FIELD.child(path),
                format!("route `{path}` is not an absolute path"),
                format!("use [routes.\"/{path}\"]"),
            );
        }
    }
}

/// Path part of `url` used for route lookup.
///
/// ```
/// use headsync::config::route_path;
///
/// assert_eq!(route_path("/about/?ref=nav#team"), "/about");
/// assert_eq!(route_path("/"), "/");
/// ```
pub fn route_path(url: &str) -> &str {
    let end = url.find(['?', '#']).unwrap_or(url.len());
    let path = &url[..end];
    match path.strip_suffix('/') {
        Some("") | None => path,
        Some(trimmed) => trimmed,
    }
}
