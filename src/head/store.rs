//! In-memory title sink and tag store.

use super::{MetaDefinition, MetaTag, Selector, TagHandle, TagStore, TitleSink};
use crate::utils::html::{escape, escape_attr};
use serde::Serialize;
use std::fmt::Write;

/// Holds the last title written by the reconciler.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DocumentTitle {
    title: Option<String>,
}

impl DocumentTitle {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self) -> Option<&str> {
        self.title.as_deref()
    }

    /// `<title>` element, or an empty string if no title was set.
    pub fn render(&self) -> String {
        self.title
            .as_deref()
            .map(|title| format!("<title>{}</title>", escape(title)))
            .unwrap_or_default()
    }
}

impl TitleSink for DocumentTitle {
    fn set_title(&mut self, title: &str) {
        self.title = Some(title.to_owned());
    }
}

/// Ordered `<meta>` tags, as they would appear in `<head>`.
#[derive(Debug, Clone, Default, Serialize)]
pub struct HeadTags {
    tags: Vec<MetaTag>,
    #[serde(skip)]
    next_handle: u64,
}

impl HeadTags {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.tags.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tags.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &MetaTag> {
        self.tags.iter()
    }

    /// Content of the first tag matching `selector`.
    pub fn content(&self, selector: &Selector) -> Option<&str> {
        self.tags
            .iter()
            .find(|tag| selector.matches(&tag.definition))
            .map(MetaTag::content)
    }

    /// Render all tags as `<meta>` elements, one per line.
    pub fn render(&self) -> String {
        let mut html = String::new();
        for tag in &self.tags {
            let def = &tag.definition;
            writeln!(
                html,
                r#"<meta {}="{}" content="{}">"#,
                def.attr,
                escape_attr(&def.key),
                escape_attr(&def.content)
            )
            .ok();
        }
        html
    }

    fn push(&mut self, definition: MetaDefinition) -> TagHandle {
        let handle = TagHandle(self.next_handle);
        self.next_handle += 1;
        self.tags.push(MetaTag { handle, definition });
        handle
    }
}

impl TagStore for HeadTags {
    fn update_tag(&mut self, tag: MetaDefinition) {
        let selector = tag.selector();
        match self
            .tags
            .iter_mut()
            .find(|existing| selector.matches(&existing.definition))
        {
            Some(existing) => existing.definition = tag,
            None => {
                self.push(tag);
            }
        }
    }

    fn add_tag(&mut self, tag: MetaDefinition) -> TagHandle {
        self.push(tag)
    }

    fn remove_tag(&mut self, selector: &Selector) {
        if let Some(pos) = self
            .tags
            .iter()
            .position(|tag| selector.matches(&tag.definition))
        {
            self.tags.remove(pos);
        }
    }

    fn remove_tag_element(&mut self, handle: TagHandle) {
        self.tags.retain(|tag| tag.handle != handle);
    }

    fn get_tag(&self, selector: &Selector) -> Option<MetaTag> {
        self.tags
            .iter()
            .find(|tag| selector.matches(&tag.definition))
            .cloned()
    }

    fn get_tags(&self, selector: &Selector) -> Vec<MetaTag> {
        self.tags
            .iter()
            .filter(|tag| selector.matches(&tag.definition))
            .cloned()
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_update_tag_replaces_existing() {
        let mut tags = HeadTags::new();
        tags.update_tag(MetaDefinition::name("description", "abc"));
        tags.update_tag(MetaDefinition::name("description", "abc"));
        tags.update_tag(MetaDefinition::name("description", "xyz"));

        assert_eq!(tags.len(), 1);
        assert_eq!(tags.content(&Selector::name("description")), Some("xyz"));
    }

    #[test]
    fn test_name_and_property_are_distinct() {
        let mut tags = HeadTags::new();
        tags.update_tag(MetaDefinition::name("title", "a"));
        tags.update_tag(MetaDefinition::property("title", "b"));
        assert_eq!(tags.len(), 2);
    }

    #[test]
    fn test_add_tag_always_appends() {
        let mut tags = HeadTags::new();
        let first = tags.add_tag(MetaDefinition::property("og:locale:alternate", "fr_FR"));
        let second = tags.add_tag(MetaDefinition::property("og:locale:alternate", "fr_FR"));

        assert_ne!(first, second);
        assert_eq!(tags.get_tags(&Selector::property("og:locale:alternate")).len(), 2);
    }

    #[test]
    fn test_remove_by_handle_and_selector() {
        let mut tags = HeadTags::new();
        let handle = tags.add_tag(MetaDefinition::property("og:locale:alternate", "fr_FR"));
        tags.add_tag(MetaDefinition::property("og:locale:alternate", "de_DE"));
        tags.update_tag(MetaDefinition::name("author", "me"));

        tags.remove_tag_element(handle);
        let alternates = tags.get_tags(&Selector::property("og:locale:alternate"));
        assert_eq!(alternates.len(), 1);
        assert_eq!(alternates[0].content(), "de_DE");

        tags.remove_tag(&Selector::name("author"));
        assert!(tags.get_tag(&Selector::name("author")).is_none());
        assert_eq!(tags.len(), 1);
    }

    #[test]
    fn test_render_escapes_content() {
        let mut tags = HeadTags::new();
        tags.update_tag(MetaDefinition::name("description", "Tom & \"Jerry\""));
        assert_eq!(
            tags.render(),
            "<meta name=\"description\" content=\"Tom &amp; &quot;Jerry&quot;\">\n"
        );

        let mut title = DocumentTitle::new();
        assert_eq!(title.render(), "");
        title.set_title("<Home>");
        assert_eq!(title.render(), "<title>&lt;Home&gt;</title>");
        title.set_title("Bob's \"Place\"");
        assert_eq!(title.render(), "<title>Bob's \"Place\"</title>");
    }
}
