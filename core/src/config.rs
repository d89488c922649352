//! Session configuration supplied by the hosting shell.

use std::path::PathBuf;

/// Environment variable overriding the folder a fresh session opens in.
const START_DIR_ENV: &str = "FILEMANAGER_START_DIR";

/// Per-session settings the shell hands to the core when it boots a session.
///
/// Nothing here is persisted; the shell owns user preferences and passes the
/// resolved values in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionConfig {
    /// Folder the session's root navigation frame is seeded from.
    pub start_dir: PathBuf,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self { start_dir: default_start_dir() }
    }
}

impl SessionConfig {
    /// Override the start folder, keeping the remaining defaults.
    pub fn with_start_dir<P: Into<PathBuf>>(mut self, path: P) -> Self {
        self.start_dir = path.into();
        self
    }
}

/// Resolve the folder a fresh session should open: the environment override
/// when set, otherwise the user's home directory, the process working
/// directory, then the filesystem root.
pub fn default_start_dir() -> PathBuf {
    if let Some(dir) = std::env::var_os(START_DIR_ENV) {
        return PathBuf::from(dir);
    }

    directories::UserDirs::new()
        .map(|dirs| dirs.home_dir().to_path_buf())
        .or_else(|| std::env::current_dir().ok())
        .unwrap_or_else(|| PathBuf::from("/"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_start_dir_is_nonempty() {
        let config = SessionConfig::default();
        assert!(!config.start_dir.as_os_str().is_empty());
    }

    #[test]
    fn start_dir_can_be_overridden() {
        let config = SessionConfig::default().with_start_dir("/srv/media");
        assert_eq!(config.start_dir, PathBuf::from("/srv/media"));
    }
}
