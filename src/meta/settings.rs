//! Process-wide reconciliation settings.

use super::{MetaError, Transformed};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::{fmt, sync::Arc};

/// Default tag values, iterated in declaration order.
pub type Defaults = IndexMap<String, String>;

/// Value-transform hook (e.g. translation), applied to every title and tag
/// value except `og:locale` and `og:locale:alternate`.
pub type Callback = Arc<dyn Fn(&str) -> Transformed + Send + Sync>;

/// Ordering of page title and application name in the composed title.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum PageTitlePositioning {
    /// `<application name><separator><page title>`
    AppendPageTitle,
    /// `<page title><separator><application name>`
    #[default]
    PrependPageTitle,
    /// Any other configured value; composing a title with it fails.
    Unrecognized(String),
}

impl PageTitlePositioning {
    /// Compose a page title with the application name.
    pub fn compose(
        &self,
        title: &str,
        application_name: &str,
        separator: &str,
    ) -> Result<String, MetaError> {
        match self {
            Self::AppendPageTitle => Ok(format!("{application_name}{separator}{title}")),
            Self::PrependPageTitle => Ok(format!("{title}{separator}{application_name}")),
            Self::Unrecognized(value) => Err(MetaError::Configuration(value.clone())),
        }
    }

    #[inline]
    pub fn is_recognized(&self) -> bool {
        !matches!(self, Self::Unrecognized(_))
    }
}

impl From<String> for PageTitlePositioning {
    /// Accepts `append`/`prepend` and the long forms, in any case and
    /// with `-`/`_` separators (`append-page-title`, `AppendPageTitle`).
    fn from(value: String) -> Self {
        let normalized: String = value
            .chars()
            .filter(|c| !matches!(c, '-' | '_' | ' '))
            .collect::<String>()
            .to_ascii_lowercase();

        match normalized.as_str() {
            "append" | "appendpagetitle" => Self::AppendPageTitle,
            "prepend" | "prependpagetitle" => Self::PrependPageTitle,
            _ => Self::Unrecognized(value),
        }
    }
}

impl From<PageTitlePositioning> for String {
    fn from(value: PageTitlePositioning) -> Self {
        match value {
            PageTitlePositioning::AppendPageTitle => "append".into(),
            PageTitlePositioning::PrependPageTitle => "prepend".into(),
            PageTitlePositioning::Unrecognized(value) => value,
        }
    }
}

impl fmt::Display for PageTitlePositioning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&String::from(self.clone()))
    }
}

/// Settings supplied once when the reconciler is built.
///
/// Only `defaults["og:locale"]` changes afterwards: locale synchronization
/// writes the current locale back in hyphenated form.
#[derive(Clone)]
pub struct Settings {
    pub defaults: Option<Defaults>,
    pub application_name: Option<String>,
    /// Base for the canonical URL; `/` when unset.
    pub application_url: Option<String>,
    pub page_title_separator: Option<String>,
    pub page_title_positioning: PageTitlePositioning,
    pub callback: Option<Callback>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            defaults: Some(Defaults::new()),
            application_name: None,
            application_url: None,
            page_title_separator: None,
            page_title_positioning: PageTitlePositioning::PrependPageTitle,
            callback: None,
        }
    }
}

impl fmt::Debug for Settings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Settings")
            .field("defaults", &self.defaults)
            .field("application_name", &self.application_name)
            .field("application_url", &self.application_url)
            .field("page_title_separator", &self.page_title_separator)
            .field("page_title_positioning", &self.page_title_positioning)
            .field("callback", &self.callback.as_ref().map(|_| "<fn>"))
            .finish()
    }
}

impl Settings {
    pub fn with_callback<F>(mut self, callback: F) -> Self
    where
        F: Fn(&str) -> Transformed + Send + Sync + 'static,
    {
        self.callback = Some(Arc::new(callback));
        self
    }

    pub fn with_default(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.defaults
            .get_or_insert_with(Defaults::new)
            .insert(key.into(), value.into());
        self
    }

    /// Non-empty default for `key`.
    pub fn default_value(&self, key: &str) -> Option<&str> {
        self.defaults
            .as_ref()?
            .get(key)
            .map(String::as_str)
            .filter(|value| !value.is_empty())
    }

    /// Non-empty application name.
    pub fn application_name(&self) -> Option<&str> {
        self.application_name.as_deref().filter(|s| !s.is_empty())
    }

    /// Non-empty title separator.
    pub fn page_title_separator(&self) -> Option<&str> {
        self.page_title_separator
            .as_deref()
            .filter(|s| !s.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compose_append_and_prepend() {
        let append = PageTitlePositioning::AppendPageTitle;
        let prepend = PageTitlePositioning::PrependPageTitle;
        assert_eq!(append.compose("Home", "Acme", " - ").unwrap(), "Acme - Home");
        assert_eq!(prepend.compose("Home", "Acme", " - ").unwrap(), "Home - Acme");
    }

    #[test]
    fn test_compose_unrecognized_fails() {
        let positioning = PageTitlePositioning::from("sideways".to_string());
        let err = positioning.compose("Home", "Acme", " - ").unwrap_err();
        assert!(matches!(err, MetaError::Configuration(ref v) if v == "sideways"));
        assert!(err.to_string().contains("sideways"));
    }

    #[test]
    fn test_positioning_parse_variants() {
        for raw in [
            "append",
            "Append",
            "AppendPageTitle",
            "append-page-title",
            "APPEND_PAGE_TITLE",
        ] {
            assert_eq!(
                PageTitlePositioning::from(raw.to_string()),
                PageTitlePositioning::AppendPageTitle
            );
        }
        assert_eq!(
            PageTitlePositioning::from("prepend".to_string()),
            PageTitlePositioning::PrependPageTitle
        );
        assert!(!PageTitlePositioning::from("10".to_string()).is_recognized());
    }

    #[test]
    fn test_settings_default() {
        let settings = Settings::default();
        assert_eq!(settings.defaults.as_ref().map(Defaults::len), Some(0));
        assert_eq!(
            settings.page_title_positioning,
            PageTitlePositioning::PrependPageTitle
        );
        assert!(settings.callback.is_none());
    }

    #[test]
    fn test_default_value_skips_empty() {
        let settings = Settings::default()
            .with_default("description", "")
            .with_default("author", "me");
        assert_eq!(settings.default_value("description"), None);
        assert_eq!(settings.default_value("author"), Some("me"));
        assert_eq!(settings.default_value("missing"), None);
    }
}
