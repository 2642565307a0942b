//! Title resolution and composition.

use super::{Callback, MetaError, PageTitlePositioning, Resolution, Settings, TITLE};

/// Everything needed to finish a title once its page value is resolved.
///
/// Owns its data so the continuation can run after a deferred resolution.
#[derive(Clone)]
pub(super) struct TitlePlan {
    callback: Option<Callback>,
    default_title: Option<String>,
    composition: Option<Composition>,
}

#[derive(Clone)]
struct Composition {
    application_name: String,
    separator: String,
    positioning: PageTitlePositioning,
}

impl TitlePlan {
    /// Composition applies only without `override` and with both a
    /// separator and an application name configured.
    pub(super) fn new(settings: &Settings, override_title: bool) -> Self {
        let composition = match (
            override_title,
            settings.page_title_separator(),
            settings.application_name(),
        ) {
            (false, Some(separator), Some(application_name)) => Some(Composition {
                application_name: application_name.to_owned(),
                separator: separator.to_owned(),
                positioning: settings.page_title_positioning.clone(),
            }),
            _ => None,
        };

        Self {
            callback: settings.callback.clone(),
            default_title: settings.default_value(TITLE).map(str::to_owned),
            composition,
        }
    }

    fn resolve(&self, value: &str) -> Resolution {
        Resolution::resolve(self.callback.as_deref(), value)
    }

    /// Resolve the page title; an empty page title falls back to the
    /// default title.
    pub(super) fn start(self, title: &str) -> Result<Resolution, MetaError> {
        let page = if title.is_empty() {
            Resolution::verbatim("")
        } else {
            self.resolve(title)
        };
        page.and_then(move |page| self.finish(page))
    }

    fn finish(self, page: Option<String>) -> Result<Resolution, MetaError> {
        match page.filter(|page| !page.is_empty()) {
            Some(page) => self.compose(Some(page)),
            None => {
                let default = match &self.default_title {
                    Some(default) => self.resolve(default),
                    None => Resolution::verbatim(""),
                };
                default.and_then(move |default| self.compose(default))
            }
        }
    }

    fn compose(self, title: Option<String>) -> Result<Resolution, MetaError> {
        let Some(composition) = self.composition.clone() else {
            return Ok(Resolution::Immediate(title));
        };

        self.resolve(&composition.application_name)
            .and_then(move |application_name| {
                match application_name.filter(|name| !name.is_empty()) {
                    Some(name) => composition
                        .positioning
                        .compose(
                            title.as_deref().unwrap_or_default(),
                            &name,
                            &composition.separator,
                        )
                        .map(|full| Resolution::Immediate(Some(full))),
                    None => Ok(Resolution::Immediate(title)),
                }
            })
    }
}
