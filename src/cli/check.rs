//! Check command implementation.

use anyhow::Result;
use headsync::config::MetaConfig;
use headsync::log;

/// Report a loaded (and therefore validated) config.
pub fn check_config(config: &MetaConfig) -> Result<()> {
    log!(
        "check";
        "{} ok: {} defaults, {} translations, {} routes",
        config.config_path.display(),
        config.defaults.len(),
        config.translations.len(),
        config.routes.len()
    );
    Ok(())
}
