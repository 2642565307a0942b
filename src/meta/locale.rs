//! Locale forms.
//!
//! Tags carry the underscore form (`en_US`); the stored default keeps the
//! hyphenated form (`en-US`).

use super::{OG_LOCALE, OG_LOCALE_ALTERNATE};

/// Locale keys bypass the value transform.
#[inline]
pub(super) fn is_locale_key(key: &str) -> bool {
    key == OG_LOCALE || key == OG_LOCALE_ALTERNATE
}

/// `en-US` -> `en_US`
#[inline]
pub(super) fn to_wire(locale: &str) -> String {
    locale.replace('-', "_")
}

/// `en_US` -> `en-US`
#[inline]
pub(super) fn to_stored(locale: &str) -> String {
    locale.replace('_', "-")
}

/// Alternates to advertise for `current`, in list order, in wire form.
///
/// Entries equal to `current` (after normalization) are dropped; duplicates
/// are kept.
pub(super) fn alternates(current: &str, available: &str) -> Vec<String> {
    let current = to_wire(current);
    available
        .split(',')
        .map(to_wire)
        .filter(|locale| *locale != current)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wire_and_stored_forms() {
        assert_eq!(to_wire("en-US"), "en_US");
        assert_eq!(to_stored("en_US"), "en-US");
        assert_eq!(to_wire("zh-Hans-CN"), "zh_Hans_CN");
    }

    #[test]
    fn test_alternates_exclude_current() {
        assert_eq!(alternates("en-US", "en_US,fr-FR,de-DE"), ["fr_FR", "de_DE"]);
    }

    #[test]
    fn test_alternates_keep_duplicates_and_order() {
        assert_eq!(alternates("en", "fr,de,fr"), ["fr", "de", "fr"]);
    }
}
