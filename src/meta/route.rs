//! Per-navigation metadata declared on a route.

use super::{OVERRIDE, TITLE};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Route metadata for one navigation.
///
/// # Fields
///
/// | Field      | Type     | Description                                  |
/// |------------|----------|----------------------------------------------|
/// | `disabled` | `bool`   | ignore this declaration, apply defaults only |
/// | `title`    | `String` | page title                                   |
/// | `override` | `bool`   | use `title` verbatim, no app-name composition |
///
/// Every other key is a tag override (`description`, `og:locale`, ...),
/// kept in declaration order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RouteMeta {
    pub disabled: bool,
    pub title: Option<String>,
    #[serde(rename = "override")]
    pub override_title: bool,
    #[serde(flatten)]
    pub tags: IndexMap<String, String>,
}

impl RouteMeta {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn override_title(mut self, override_title: bool) -> Self {
        self.override_title = override_title;
        self
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    pub fn tag(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.tags.insert(key.into(), value.into());
        self
    }

    /// Whether the declaration names `key`, even with an empty value.
    ///
    /// A declared-but-empty key still suppresses the matching default in
    /// the backfill step.
    pub fn declares(&self, key: &str) -> bool {
        match key {
            TITLE => self.title.is_some() || self.tags.contains_key(key),
            OVERRIDE => true,
            _ => self.tags.contains_key(key),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_route_meta_deserialize() {
        let toml = r#"
            title = "About"
            override = true
            description = "About us"
            "og:locale" = "en-US"
        "#;
        let meta: RouteMeta = toml::from_str(toml).unwrap();

        assert_eq!(meta.title.as_deref(), Some("About"));
        assert!(meta.override_title);
        assert!(!meta.disabled);
        let keys: Vec<_> = meta.tags.keys().map(String::as_str).collect();
        assert_eq!(keys, ["description", "og:locale"]);
    }

    #[test]
    fn test_declares_empty_value() {
        let meta = RouteMeta::new().tag("description", "");
        assert!(meta.declares("description"));
        assert!(!meta.declares("author"));
        assert!(!meta.declares("title"));
        assert!(meta.clone().title("x").declares("title"));
    }
}
