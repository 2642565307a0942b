//! The metadata reconciler.

use super::{
    MetaError, OG_LOCALE, OG_LOCALE_ALTERNATE, OG_TITLE, OG_URL, OVERRIDE, Resolution, RouteMeta,
    Settings, TITLE,
    cascade::{Cascade, cascades},
    canonical_url,
    locale::{alternates, is_locale_key, to_stored, to_wire},
    title::TitlePlan,
};
use crate::debug;
use crate::head::{DocumentTitle, HeadTags, MetaDefinition, Selector, TagStore, TitleSink};
use futures::{FutureExt, StreamExt, future::BoxFuture, stream::FuturesUnordered};
use rustc_hash::FxHashSet;

/// Where a resolved value lands.
#[derive(Debug, Clone, PartialEq, Eq)]
enum Target {
    Title,
    Tag(String),
}

/// A deferred resolution that has completed.
struct Settled {
    target: Target,
    outcome: Result<Option<String>, MetaError>,
}

/// Keeps the document title and meta tags in line with the current route.
///
/// Immediate values are written as soon as they are resolved. Values coming
/// from an asynchronous transform are queued and written by [`settle`],
/// in completion order. Nothing serializes two overlapping `update` calls:
/// a late value from an earlier navigation still lands (last write wins).
///
/// [`settle`]: MetaService::settle
pub struct MetaService<T = DocumentTitle, S = HeadTags> {
    settings: Settings,
    title: T,
    tags: S,
    /// Keys written at least once. Never cleared.
    seen: FxHashSet<String>,
    pending: FuturesUnordered<BoxFuture<'static, Settled>>,
}

impl MetaService {
    /// Reconciler backed by the in-memory title and tag store.
    pub fn in_memory(settings: Settings) -> Self {
        Self::new(settings, DocumentTitle::new(), HeadTags::new())
    }
}

impl<T: TitleSink, S: TagStore> MetaService<T, S> {
    pub fn new(settings: Settings, title: T, tags: S) -> Self {
        Self {
            settings,
            title,
            tags,
            seen: FxHashSet::default(),
            pending: FuturesUnordered::new(),
        }
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn title_sink(&self) -> &T {
        &self.title
    }

    pub fn tag_store(&self) -> &S {
        &self.tags
    }

    pub fn into_parts(self) -> (Settings, T, S) {
        (self.settings, self.title, self.tags)
    }

    /// Keys marked as written so far.
    pub fn seen_tags(&self) -> &FxHashSet<String> {
        &self.seen
    }

    /// Number of deferred resolutions not yet applied.
    pub fn pending(&self) -> usize {
        self.pending.len()
    }

    // ========================================================================
    // public entry points
    // ========================================================================

    /// Reconcile title and tags for a navigation to `current_url`.
    pub fn update(
        &mut self,
        current_url: &str,
        route: Option<&RouteMeta>,
    ) -> Result<(), MetaError> {
        debug!("meta"; "update {} (route metadata: {})", current_url, route.is_some());

        match route {
            None => {
                let fallback = self
                    .settings
                    .default_value(TITLE)
                    .or_else(|| self.settings.application_name())
                    .unwrap_or_default()
                    .to_owned();
                self.set_title(&fallback, true)?;
            }
            Some(route) if route.disabled => return self.update(current_url, None),
            Some(route) => {
                self.set_title(route.title.as_deref().unwrap_or_default(), route.override_title)?;
                self.apply_route_tags(route)?;
            }
        }

        self.backfill_defaults(route)?;

        let url = canonical_url(self.settings.application_url.as_deref(), current_url);
        self.set_tag(OG_URL, &url)
    }

    /// Set the document title (and `og:title`).
    ///
    /// An empty `title` falls back to the default title. Unless
    /// `override_title` is set, the title is composed with the application
    /// name when both a name and a separator are configured.
    pub fn set_title(&mut self, title: &str, override_title: bool) -> Result<(), MetaError> {
        let resolution = TitlePlan::new(&self.settings, override_title).start(title)?;
        self.dispatch(Target::Title, resolution);
        Ok(())
    }

    /// Set a tag; an empty `value` falls back to the default for `key`.
    ///
    /// `title` is reserved and rejected before anything is resolved.
    pub fn set_tag(&mut self, key: &str, value: &str) -> Result<(), MetaError> {
        if key == TITLE {
            return Err(MetaError::ReservedKey { key: key.to_owned() });
        }

        let value = if value.is_empty() {
            self.settings
                .defaults
                .as_ref()
                .and_then(|defaults| defaults.get(key))
                .cloned()
                .unwrap_or_default()
        } else {
            value.to_owned()
        };

        let resolution = if is_locale_key(key) {
            Resolution::verbatim(value)
        } else {
            Resolution::resolve(self.settings.callback.as_deref(), &value)
        };
        self.dispatch(Target::Tag(key.to_owned()), resolution);
        Ok(())
    }

    /// Remove the first tag matching a `name="..."`/`property="..."` selector.
    pub fn remove_tag(&mut self, selector: &str) -> Result<(), MetaError> {
        let selector: Selector = selector.parse()?;
        self.tags.remove_tag(&selector);
        Ok(())
    }

    /// Apply every queued deferred resolution as it completes.
    ///
    /// A failed resolution leaves its title or tag untouched and its key
    /// unseen. Draining continues past failures; the first one is returned.
    pub async fn settle(&mut self) -> Result<(), MetaError> {
        let mut first_error = None;

        while let Some(Settled { target, outcome }) = self.pending.next().await {
            match outcome {
                Ok(value) => self.apply(target, value),
                Err(err) => {
                    crate::log!("error"; "{:?} not updated: {}", target, err);
                    first_error.get_or_insert(err);
                }
            }
        }

        first_error.map_or(Ok(()), Err)
    }

    // ========================================================================
    // orchestration
    // ========================================================================

    fn apply_route_tags(&mut self, route: &RouteMeta) -> Result<(), MetaError> {
        for (key, value) in &route.tags {
            match key.as_str() {
                TITLE | OVERRIDE => {}
                OG_LOCALE => self.set_tag(key, &to_wire(value))?,
                OG_LOCALE_ALTERNATE => {
                    let current = route.tags.get(OG_LOCALE).map(String::as_str);
                    self.update_locales(current.unwrap_or_default(), value);
                }
                _ => self.set_tag(key, value)?,
            }
        }
        Ok(())
    }

    /// Write defaults the current navigation did not cover.
    ///
    /// With route metadata, a default is skipped when its key was ever
    /// written (the seen set is never cleared) or when the route declares
    /// the key, even with an empty value.
    fn backfill_defaults(&mut self, route: Option<&RouteMeta>) -> Result<(), MetaError> {
        let keys: Vec<String> = match &self.settings.defaults {
            Some(defaults) => defaults.keys().cloned().collect(),
            None => return Ok(()),
        };

        for key in keys {
            let covered =
                route.is_some_and(|route| self.seen.contains(&key) || route.declares(&key));
            if covered || key == TITLE || key == OVERRIDE {
                continue;
            }

            // Read live: locale sync may have rewritten og:locale meanwhile.
            let value = self
                .settings
                .defaults
                .as_ref()
                .and_then(|defaults| defaults.get(&key))
                .cloned()
                .unwrap_or_default();

            match key.as_str() {
                OG_LOCALE => self.set_tag(&key, &to_wire(&value))?,
                OG_LOCALE_ALTERNATE => {
                    let current = route
                        .and_then(|route| route.tags.get(OG_LOCALE))
                        .map(String::as_str)
                        .unwrap_or_default();
                    self.update_locales(current, &value);
                }
                _ => self.set_tag(&key, &value)?,
            }
        }
        Ok(())
    }

    // ========================================================================
    // effects
    // ========================================================================

    fn dispatch(&mut self, target: Target, resolution: Resolution) {
        match resolution {
            Resolution::Immediate(value) => self.apply(target, value),
            Resolution::Deferred(future) => {
                debug!("meta"; "deferred value for {:?}", target);
                self.pending.push(
                    future
                        .map(move |outcome| Settled { target, outcome })
                        .boxed(),
                );
            }
        }
    }

    /// `None` (a null transform result) writes nothing.
    fn apply(&mut self, target: Target, value: Option<String>) {
        match (target, value) {
            (Target::Title, Some(title)) => self.update_title(&title),
            (Target::Tag(key), Some(value)) => self.update_tag(&key, &value),
            (_, None) => {}
        }
    }

    fn update_title(&mut self, title: &str) {
        if title.is_empty() {
            return;
        }
        self.title.set_title(title);
        self.tags.update_tag(MetaDefinition::property(OG_TITLE, title));
    }

    fn update_tag(&mut self, key: &str, value: &str) {
        let content = if key == OG_LOCALE {
            to_wire(value)
        } else {
            value.to_owned()
        };
        self.tags.update_tag(MetaDefinition::for_key(key, content));
        self.seen.insert(key.to_owned());

        for cascade in cascades(key) {
            match *cascade {
                Cascade::Mirror(property) => {
                    self.tags.update_tag(MetaDefinition::property(property, value));
                }
                Cascade::AlternatesFromDefaults => {
                    let available = self
                        .settings
                        .default_value(OG_LOCALE_ALTERNATE)
                        .unwrap_or_default()
                        .to_owned();
                    self.update_locales(value, &available);
                }
                Cascade::AlternatesFromCurrentLocale => {
                    let current = self
                        .tags
                        .get_tag(&Selector::property(OG_LOCALE))
                        .map(|tag| tag.definition.content)
                        .unwrap_or_default();
                    self.update_locales(&current, value);
                }
                Cascade::MarkSeen(other) => {
                    self.seen.insert(other.to_owned());
                }
            }
        }
    }

    /// Replace all `og:locale:alternate` tags.
    ///
    /// An empty `current` falls back to the default locale; a non-empty one
    /// is written back to the defaults in hyphenated form.
    fn update_locales(&mut self, current: &str, available: &str) {
        let current = if current.is_empty() {
            self.settings
                .default_value(OG_LOCALE)
                .unwrap_or_default()
                .to_owned()
        } else {
            current.to_owned()
        };

        if !current.is_empty()
            && let Some(defaults) = self.settings.defaults.as_mut()
        {
            defaults.insert(OG_LOCALE.to_owned(), to_stored(&current));
        }

        for tag in self.tags.get_tags(&Selector::property(OG_LOCALE_ALTERNATE)) {
            self.tags.remove_tag_element(tag.handle);
        }

        if current.is_empty() || available.is_empty() {
            return;
        }

        let alternates = alternates(&current, available);
        debug!("meta"; "locale {} alternates [{}]", current, alternates.join(", "));
        for locale in alternates {
            self.tags
                .add_tag(MetaDefinition::property(OG_LOCALE_ALTERNATE, locale));
        }
    }
}
