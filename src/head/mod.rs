//! Document head collaborators.
//!
//! The reconciler never touches a DOM directly. It talks to two sinks:
//!
//! | Trait        | Role                                             |
//! |--------------|--------------------------------------------------|
//! | `TitleSink`  | receives the composed document title             |
//! | `TagStore`   | get/update/add/remove `<meta>` tags              |
//!
//! `DocumentTitle` and `HeadTags` are in-memory implementations used by
//! the CLI and tests; a browser binding would implement the same traits.

mod selector;
mod store;

pub use selector::Selector;
pub use store::{DocumentTitle, HeadTags};

use serde::Serialize;
use std::fmt;

/// Attribute that identifies a meta tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TagAttr {
    /// `<meta name="...">` (general HTML meta tags)
    Name,
    /// `<meta property="...">` (Open Graph tags)
    Property,
}

impl TagAttr {
    /// Pick the attribute for a tag key: `og:`-prefixed keys are properties.
    #[inline]
    pub fn for_key(key: &str) -> Self {
        if key.starts_with("og:") {
            Self::Property
        } else {
            Self::Name
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Property => "property",
        }
    }
}

impl fmt::Display for TagAttr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A tag to write: identifying attribute, key and content.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MetaDefinition {
    pub attr: TagAttr,
    pub key: String,
    pub content: String,
}

impl MetaDefinition {
    pub fn name(key: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            attr: TagAttr::Name,
            key: key.into(),
            content: content.into(),
        }
    }

    pub fn property(key: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            attr: TagAttr::Property,
            key: key.into(),
            content: content.into(),
        }
    }

    /// Build a definition whose attribute follows the key's `og:` prefix.
    pub fn for_key(key: impl Into<String>, content: impl Into<String>) -> Self {
        let key = key.into();
        Self {
            attr: TagAttr::for_key(&key),
            key,
            content: content.into(),
        }
    }

    /// Selector matching tags with the same identifying attribute.
    pub fn selector(&self) -> Selector {
        Selector::new(self.attr, self.key.clone())
    }
}

/// Opaque identity of a tag inside a `TagStore`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct TagHandle(pub u64);

/// A tag currently held by a `TagStore`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MetaTag {
    pub handle: TagHandle,
    #[serde(flatten)]
    pub definition: MetaDefinition,
}

impl MetaTag {
    #[inline]
    pub fn content(&self) -> &str {
        &self.definition.content
    }
}

/// Receives the document title.
pub trait TitleSink {
    fn set_title(&mut self, title: &str);
}

/// Mutable collection of `<meta>` tags.
///
/// Semantics follow a browser meta service: `update_tag` rewrites the first
/// tag matching the definition's selector (or appends one), `add_tag` always
/// appends.
pub trait TagStore {
    fn update_tag(&mut self, tag: MetaDefinition);

    fn add_tag(&mut self, tag: MetaDefinition) -> TagHandle;

    /// Remove the first tag matching `selector`.
    fn remove_tag(&mut self, selector: &Selector);

    fn remove_tag_element(&mut self, handle: TagHandle);

    fn get_tag(&self, selector: &Selector) -> Option<MetaTag>;

    fn get_tags(&self, selector: &Selector) -> Vec<MetaTag>;
}
