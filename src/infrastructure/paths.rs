//! Platform path resolution.
//!
//! Resolves where the journal, its log file and its configuration live, and
//! expands `~/` in user-supplied paths.

use std::path::{Path, PathBuf};

const APP_DIR: &str = "jou";

/// Returns the data directory for the journal file and the log.
///
/// Resolves to `<platform data dir>/jou`, e.g. `~/.local/share/jou` on Linux.
/// Falls back to `./.jou` when the platform reports no data directory.
#[must_use]
pub fn data_dir() -> PathBuf {
    dirs::data_dir().map_or_else(|| PathBuf::from(".jou"), |dir| dir.join(APP_DIR))
}

/// Returns the directory holding `config.toml`, if the platform has one.
#[must_use]
pub fn config_dir() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(APP_DIR))
}

/// Default location of the journal file.
#[must_use]
pub fn default_store_path() -> PathBuf {
    data_dir().join("journal.json")
}

/// Default location of the rotating log file.
#[must_use]
pub fn default_log_path() -> PathBuf {
    data_dir().join("jou.log")
}

/// Expands a leading `~` to the home directory.
///
/// Paths without a leading tilde, and all paths when no home directory is
/// known, are returned unchanged.
///
/// # Examples
///
/// ```
/// use jou::infrastructure::expand_tilde;
/// use std::path::Path;
///
/// assert_eq!(expand_tilde("/absolute/path"), Path::new("/absolute/path"));
/// ```
#[must_use]
pub fn expand_tilde(path: impl AsRef<Path>) -> PathBuf {
    let path = path.as_ref();
    let Ok(rest) = path.strip_prefix("~") else {
        return path.to_path_buf();
    };

    dirs::home_dir().map_or_else(|| path.to_path_buf(), |home| home.join(rest))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tilde_prefix_is_expanded_against_home() {
        let Some(home) = dirs::home_dir() else {
            return;
        };
        assert_eq!(expand_tilde("~/notes/journal.json"), home.join("notes/journal.json"));
        assert_eq!(expand_tilde("~"), home);
    }

    #[test]
    fn tilde_inside_a_name_is_left_alone() {
        assert_eq!(expand_tilde("~notes/x"), PathBuf::from("~notes/x"));
        assert_eq!(expand_tilde("relative/~/x"), PathBuf::from("relative/~/x"));
    }

    #[test]
    fn default_paths_share_the_data_dir() {
        assert_eq!(default_store_path().parent(), default_log_path().parent());
    }
}
