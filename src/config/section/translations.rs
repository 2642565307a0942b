//! `[translations]` section configuration.
//!
//! A flat lookup table turned into the value transform: known values are
//! replaced, anything else passes through unchanged.
//!
//! ```toml
//! [translations]
//! "Widgets" = "Gadgets"
//! "About" = "À propos"
//! ```

use crate::meta::{Callback, Transformed};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TranslationsConfig(IndexMap<String, String>);

impl TranslationsConfig {
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Transform callback, or `None` for an empty table.
    pub fn to_callback(&self) -> Option<Callback> {
        if self.0.is_empty() {
            return None;
        }

        let table = self.0.clone();
        let callback: Callback = Arc::new(move |value: &str| {
            Transformed::from(table.get(value).map_or(value, String::as_str))
        });
        Some(callback)
    }
}
