//! Reconciler configuration from `meta.toml`.
//!
//! # Module Structure
//!
//! ```text
//! config/
//! ├── section/          # Configuration section definitions
//! │   ├── app           # [app]
//! │   ├── routes        # [routes."/path"]
//! │   └── translations  # [translations]
//! ├── types/            # Utility types
//! │   ├── error         # ConfigError, ConfigDiagnostics
//! │   └── field         # FieldPath
//! └── mod.rs            # MetaConfig (this file)
//! ```
//!
//! # Sections
//!
//! | Section            | Purpose                                       |
//! |--------------------|-----------------------------------------------|
//! | `[app]`            | Application name, URL, title composition      |
//! | `[defaults]`       | Default tag values (and the default title)    |
//! | `[translations]`   | Value transform as a lookup table             |
//! | `[routes."/path"]` | Route metadata fixtures                       |

pub mod section;
pub mod types;
mod util;

use util::find_config_file;

pub use section::{AppConfig, RoutesConfig, TranslationsConfig, route_path};
pub use types::{ConfigDiagnostic, ConfigDiagnostics, ConfigError, FieldPath};

use crate::log;
use crate::meta::{Defaults, RouteMeta, Settings};
use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
};

// ============================================================================
// root configuration
// ============================================================================

/// Root configuration structure representing meta.toml
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MetaConfig {
    /// Absolute path to the config file (internal use only)
    #[serde(skip)]
    pub config_path: PathBuf,

    #[serde(default)]
    pub app: AppConfig,

    #[serde(default)]
    pub defaults: Defaults,

    #[serde(default)]
    pub translations: TranslationsConfig,

    #[serde(default)]
    pub routes: RoutesConfig,
}

impl MetaConfig {
    /// Find, parse and validate the config file.
    ///
    /// A relative `config_name` is searched upward from cwd.
    pub fn load(config_name: &Path) -> Result<Self> {
        let Some(config_path) = find_config_file(config_name) else {
            return Err(ConfigError::Validation(format!(
                "config file `{}` not found",
                config_name.display()
            ))
            .into());
        };

        let mut config = Self::from_path(&config_path)?;
        config.config_path = config_path;
        config.validate()?;
        Ok(config)
    }

    /// Parse configuration from TOML string
    pub fn from_str(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content).map_err(ConfigError::Toml)?;
        Ok(config)
    }

    /// Load configuration from file path with unknown field detection.
    fn from_path(path: &Path) -> Result<Self> {
        let content =
            fs::read_to_string(path).map_err(|err| ConfigError::Io(path.to_path_buf(), err))?;

        let (config, ignored) = Self::parse_with_ignored(&content)?;
        if !ignored.is_empty() {
            Self::print_unknown_fields_warning(&ignored, path);
        }

        Ok(config)
    }

    /// Parse TOML content, collecting any unknown fields.
    fn parse_with_ignored(content: &str) -> Result<(Self, Vec<String>)> {
        let mut ignored = Vec::new();
        let deserializer = toml::Deserializer::new(content);
        let config = serde_ignored::deserialize(deserializer, |path: serde_ignored::Path| {
            ignored.push(path.to_string());
        })
        .map_err(ConfigError::Toml)?;
        Ok((config, ignored))
    }

    fn print_unknown_fields_warning(fields: &[String], path: &Path) {
        let display_path = path
            .file_name()
            .map(|n| n.to_string_lossy())
            .unwrap_or_else(|| path.to_string_lossy());
        log!("warning"; "unknown fields in {}, ignoring:", display_path);
        for field in fields {
            eprintln!("- {}", field);
        }
    }

    /// Validate every section, collecting all errors at once.
    pub fn validate(&self) -> Result<()> {
        let mut diag = ConfigDiagnostics::new();

        self.app.validate(&mut diag);
        self.routes.validate(&mut diag);

        diag.print_warnings();
        diag.into_result()
            .map_err(|e| ConfigError::Diagnostics(e).into())
    }

    /// Reconciler settings described by this config.
    pub fn settings(&self) -> Settings {
        Settings {
            defaults: Some(self.defaults.clone()),
            application_name: self.app.name.clone(),
            application_url: self.app.url.clone(),
            page_title_separator: self.app.title_separator.clone(),
            page_title_positioning: self.app.title_positioning.clone(),
            callback: self.translations.to_callback(),
        }
    }

    /// Route metadata for a navigation to `url`.
    pub fn route_for(&self, url: &str) -> Option<&RouteMeta> {
        self.routes.get(url)
    }
}

// ============================================================================
// tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::meta::PageTitlePositioning;

    const SAMPLE: &str = r#"
[app]
name = "Acme"
url = "https://acme.example/"
title_separator = " - "
title_positioning = "append"

[defaults]
title = "Acme"
description = "Widgets"
"og:locale" = "en-US"
"og:locale:alternate" = "en-US,fr-FR"

[translations]
"Widgets" = "Gadgets"

[routes."/about"]
title = "About"
description = "About us"
"#;

    fn write_config(content: &str) -> (tempfile::TempDir, PathBuf) {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("meta.toml");
        fs::write(&path, content).unwrap();
        (dir, path)
    }

    #[test]
    fn test_from_str_invalid_toml() {
        assert!(MetaConfig::from_str("[app\nname = \"Acme\"").is_err());
    }

    #[test]
    fn test_default_settings() {
        let settings = MetaConfig::default().settings();
        assert_eq!(settings.defaults.as_ref().map(|d| d.len()), Some(0));
        assert_eq!(settings.page_title_positioning, PageTitlePositioning::PrependPageTitle);
        assert!(settings.application_url.is_none());
        assert!(settings.callback.is_none());
    }

    #[test]
    fn test_sample_config() {
        let config = MetaConfig::from_str(SAMPLE).unwrap();
        config.validate().unwrap();

        let keys: Vec<_> = config.defaults.keys().map(String::as_str).collect();
        assert_eq!(keys, ["title", "description", "og:locale", "og:locale:alternate"]);

        let settings = config.settings();
        assert_eq!(settings.application_name.as_deref(), Some("Acme"));
        assert_eq!(settings.page_title_positioning, PageTitlePositioning::AppendPageTitle);
        assert!(settings.callback.is_some());

        let route = config.route_for("/about/").unwrap();
        assert_eq!(route.title.as_deref(), Some("About"));
        assert!(config.route_for("/contact").is_none());
    }

    #[test]
    fn test_unknown_fields_detected() {
        let content = "[app]\nname = \"Acme\"\ncolour = \"red\"\n[unknown_section]\nfield = 1";
        let (config, ignored) = MetaConfig::parse_with_ignored(content).unwrap();

        assert_eq!(config.app.name.as_deref(), Some("Acme"));
        assert!(ignored.iter().any(|f| f.contains("colour")));
        assert!(ignored.iter().any(|f| f.contains("unknown_section")));
    }

    #[test]
    fn test_no_unknown_fields() {
        let (_, ignored) = MetaConfig::parse_with_ignored(SAMPLE).unwrap();
        assert!(ignored.is_empty(), "{ignored:?}");
    }

    #[test]
    fn test_load_from_file() {
        let (_dir, path) = write_config(SAMPLE);
        let config = MetaConfig::load(&path).unwrap();
        assert_eq!(config.config_path, path);
        assert_eq!(config.routes.len(), 1);
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = MetaConfig::load(&dir.path().join("meta.toml")).unwrap_err();
        assert!(err.to_string().contains("not found"));
    }

    #[test]
    fn test_load_reports_all_validation_errors() {
        let (_dir, path) = write_config(
            "[app]\nurl = \"ftp://acme\"\ntitle_positioning = \"middle\"\n[routes.about]\ntitle = \"x\"",
        );
        let err = MetaConfig::load(&path).unwrap_err();
        match err.downcast_ref::<ConfigError>() {
            Some(ConfigError::Diagnostics(diag)) => assert_eq!(diag.len(), 3),
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
