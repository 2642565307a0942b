//! Attribute selectors such as `property="og:locale:alternate"`.

use super::{MetaDefinition, TagAttr};
use crate::meta::MetaError;
use crate::utils::html::parse_attributes;
use std::{fmt, str::FromStr};

/// Matches tags by their identifying attribute.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Selector {
    attr: TagAttr,
    value: String,
}

impl Selector {
    pub fn new(attr: TagAttr, value: impl Into<String>) -> Self {
        Self {
            attr,
            value: value.into(),
        }
    }

    pub fn name(value: impl Into<String>) -> Self {
        Self::new(TagAttr::Name, value)
    }

    pub fn property(value: impl Into<String>) -> Self {
        Self::new(TagAttr::Property, value)
    }

    #[inline]
    pub fn attr(&self) -> TagAttr {
        self.attr
    }

    #[inline]
    pub fn value(&self) -> &str {
        &self.value
    }

    #[inline]
    pub fn matches(&self, tag: &MetaDefinition) -> bool {
        tag.attr == self.attr && tag.key == self.value
    }
}

impl fmt::Display for Selector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}=\"{}\"", self.attr, self.value)
    }
}

impl FromStr for Selector {
    type Err = MetaError;

    /// Parse `name="..."` or `property="..."` (quotes optional).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || MetaError::InvalidSelector(s.to_owned());

        let [(attr, value)]: [(String, String); 1] =
            parse_attributes(s).try_into().map_err(|_| invalid())?;
        if value.is_empty() {
            return Err(invalid());
        }

        match attr.as_str() {
            "name" => Ok(Self::name(value)),
            "property" => Ok(Self::property(value)),
            _ => Err(invalid()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_property_selector() {
        let selector: Selector = r#"property="og:locale:alternate""#.parse().unwrap();
        assert_eq!(selector, Selector::property("og:locale:alternate"));
    }

    #[test]
    fn test_parse_unquoted_name_selector() {
        let selector: Selector = "name=description".parse().unwrap();
        assert_eq!(selector.attr(), TagAttr::Name);
        assert_eq!(selector.value(), "description");
    }

    #[test]
    fn test_parse_rejects_unknown_or_empty() {
        assert!("charset=\"utf-8\"".parse::<Selector>().is_err());
        assert!("name=\"\"".parse::<Selector>().is_err());
        assert!("".parse::<Selector>().is_err());
        assert!("name=a property=b".parse::<Selector>().is_err());
    }

    #[test]
    fn test_display_roundtrips_through_parse() {
        let selector = Selector::property("og:title");
        assert_eq!(selector.to_string(), r#"property="og:title""#);
        assert_eq!(selector.to_string().parse::<Selector>().unwrap(), selector);
    }

    #[test]
    fn test_matches_requires_same_attr() {
        let selector = Selector::name("og:title");
        assert!(!selector.matches(&MetaDefinition::property("og:title", "x")));
        assert!(selector.matches(&MetaDefinition::name("og:title", "x")));
    }
}
