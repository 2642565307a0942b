//! Reconciliation error types.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum MetaError {
    /// `set_tag` was called with the reserved `title` key.
    #[error(
        "attempt to set `{key}` through `set_tag`: `title` is a reserved tag name, use `set_title` instead"
    )]
    ReservedKey { key: String },

    /// Page title positioning outside `append`/`prepend`.
    #[error("invalid page title positioning specified [{0}]")]
    Configuration(String),

    /// The value transform failed to produce a value for `input`.
    #[error("value transform failed for `{input}`")]
    Transform {
        input: String,
        #[source]
        source: anyhow::Error,
    },

    #[error("invalid tag selector `{0}`, expected name=\"...\" or property=\"...\"")]
    InvalidSelector(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reserved_key_names_key_and_alternative() {
        let err = MetaError::ReservedKey {
            key: "title".into(),
        };
        let display = err.to_string();
        assert!(display.contains("`title`"));
        assert!(display.contains("set_title"));
    }

    #[test]
    fn test_transform_error_keeps_source() {
        use std::error::Error as _;

        let err = MetaError::Transform {
            input: "Home".into(),
            source: anyhow::anyhow!("dictionary offline"),
        };
        assert!(err.to_string().contains("Home"));
        assert_eq!(
            err.source().map(ToString::to_string).as_deref(),
            Some("dictionary offline")
        );
    }
}
