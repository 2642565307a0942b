//! `[app]` section configuration.
//!
//! # Example
//!
//! ```toml
//! [app]
//! name = "Acme"                    # Application name used in titles
//! url = "https://acme.example/"    # Base of the canonical og:url
//! title_separator = " - "          # Between page title and name
//! title_positioning = "prepend"    # append | prepend
//! ```

use crate::config::{ConfigDiagnostics, FieldPath};
use crate::meta::PageTitlePositioning;
use serde::{Deserialize, Serialize};

/// Application-wide title and URL settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub name: Option<String>,

    /// Absolute http(s) URL or a path starting with `/`.
    pub url: Option<String>,

    pub title_separator: Option<String>,

    pub title_positioning: PageTitlePositioning,
}

/// Field paths of `[app]`.
pub struct AppFields {
    pub name: FieldPath,
    pub url: FieldPath,
    pub title_separator: FieldPath,
    pub title_positioning: FieldPath,
}

impl AppConfig {
    pub const FIELDS: AppFields = AppFields {
        name: FieldPath::new("app.name"),
        url: FieldPath::new("app.url"),
        title_separator: FieldPath::new("app.title_separator"),
        title_positioning: FieldPath::new("app.title_positioning"),
    };

    /// Validate app configuration.
    ///
    /// # Checks
    /// - `url` is an http(s) URL with a host, or an absolute path
    /// - `title_positioning` is `append` or `prepend`
    /// - `title_separator` without `name` is reported as a warning
    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        if let Some(url) = self.url.as_deref().filter(|url| !url.starts_with('/')) {
            self.validate_url(url, diag);
        }

        if !self.title_positioning.is_recognized() {
            diag.error_with_hint(
                Self::FIELDS.title_positioning,
                format!("unknown positioning `{}`", self.title_positioning),
                "use \"append\" or \"prepend\"",
            );
        }

        let has_name = self.name.as_deref().is_some_and(|name| !name.is_empty());
        let has_separator = self.title_separator.as_deref().is_some_and(|sep| !sep.is_empty());
        if has_separator && !has_name {
            diag.warn(
                Self::FIELDS.title_separator,
                format!("set without {}, titles are never composed", Self::FIELDS.name),
            );
        }
    }

    fn validate_url(&self, url: &str, diag: &mut ConfigDiagnostics) {
        const HINT: &str = "use format like https://example.com or /base";

        match url::Url::parse(url) {
            Ok(parsed) => {
                if !matches!(parsed.scheme(), "http" | "https") {
                    diag.error_with_hint(
                        Self::FIELDS.url,
                        format!(
                            "scheme '{}' not supported, must be http or https",
                            parsed.scheme()
                        ),
                        HINT,
                    );
                }
                if parsed.host_str().is_none() {
                    diag.error_with_hint(Self::FIELDS.url, "URL must have a valid host", HINT);
                }
            }
            Err(e) => {
                diag.error_with_hint(Self::FIELDS.url, format!("invalid URL: {e}"), HINT);
            }
        }
    }
}
