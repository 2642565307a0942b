//! Configuration utility functions.

use std::path::{Path, PathBuf};

/// Find config file by searching upward from the current directory.
///
/// An absolute `config_name` is used as is when it exists. Otherwise starts
/// from cwd and walks up parent directories until finding `config_name`.
///
/// # Example
/// ```text
/// /home/user/app/src/routes/   ← cwd
/// /home/user/app/meta.toml     ← found!
/// ```
pub fn find_config_file(config_name: &Path) -> Option<PathBuf> {
    if config_name.is_absolute() {
        return config_name.exists().then(|| config_name.to_path_buf());
    }

    let cwd = std::env::current_dir().ok()?;
    cwd.ancestors()
        .map(|dir| dir.join(config_name))
        .find(|candidate| candidate.exists())
}
