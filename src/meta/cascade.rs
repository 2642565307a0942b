//! Side effects triggered by writing a particular tag key.

use super::{OG_LOCALE, OG_LOCALE_ALTERNATE};

/// One action evaluated after the primary tag write.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum Cascade {
    /// Write the same value to this `og:` property.
    Mirror(&'static str),
    /// Rebuild alternates from the written locale and the default list.
    AlternatesFromDefaults,
    /// Rebuild alternates from the written list and the current `og:locale` tag.
    AlternatesFromCurrentLocale,
    /// Mark another key as seen.
    MarkSeen(&'static str),
}

const CASCADES: &[(&str, &[Cascade])] = &[
    ("description", &[Cascade::Mirror("og:description")]),
    ("author", &[Cascade::Mirror("og:author")]),
    ("publisher", &[Cascade::Mirror("og:publisher")]),
    (
        OG_LOCALE,
        &[
            Cascade::AlternatesFromDefaults,
            Cascade::MarkSeen(OG_LOCALE_ALTERNATE),
        ],
    ),
    (
        OG_LOCALE_ALTERNATE,
        &[
            Cascade::AlternatesFromCurrentLocale,
            Cascade::MarkSeen(OG_LOCALE),
        ],
    ),
];

/// Actions for an exact key match; empty for any other key.
pub(super) fn cascades(key: &str) -> &'static [Cascade] {
    CASCADES
        .iter()
        .find(|(trigger, _)| *trigger == key)
        .map(|(_, actions)| *actions)
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mirrors() {
        assert_eq!(cascades("description"), [Cascade::Mirror("og:description")]);
        assert_eq!(cascades("author"), [Cascade::Mirror("og:author")]);
        assert_eq!(cascades("publisher"), [Cascade::Mirror("og:publisher")]);
    }

    #[test]
    fn test_exact_match_only() {
        assert!(cascades("Description").is_empty());
        assert!(cascades("og:description").is_empty());
        assert!(cascades("keywords").is_empty());
    }

    #[test]
    fn test_locale_pair_marks_each_other_seen() {
        assert!(cascades(OG_LOCALE).contains(&Cascade::MarkSeen(OG_LOCALE_ALTERNATE)));
        assert!(cascades(OG_LOCALE_ALTERNATE).contains(&Cascade::MarkSeen(OG_LOCALE)));
    }
}
