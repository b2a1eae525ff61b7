//! File system utilities

use std::path::{Path, PathBuf};

use crate::core::CONFIG_DIR_NAME;
use crate::error::ConfigError;

/// Directory holding the navigator and credential files
pub fn config_dir() -> Result<PathBuf, ConfigError> {
    dirs::config_dir()
        .map(|dir| dir.join(CONFIG_DIR_NAME))
        .ok_or(ConfigError::NoConfigDir)
}

/// Writes `content` to `path`, creating parent directories
pub fn write_config_file(path: &Path, content: &str) -> Result<(), ConfigError> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(|source| ConfigError::Write {
            path: parent.to_path_buf(),
            source,
        })?;
    }
    std::fs::write(path, content).map_err(|source| ConfigError::Write {
        path: path.to_path_buf(),
        source,
    })
}

/// Shortens long names for column display
pub fn shorten_name(name: &str, max_length: usize) -> String {
    if name.chars().count() <= max_length {
        return name.to_string();
    }
    let keep = max_length.saturating_sub(3);
    format!("{}...", name.chars().take(keep).collect::<String>())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shorten_name() {
        assert_eq!(shorten_name("repo", 10), "repo");
        assert_eq!(shorten_name("a-very-long-repository-name", 10), "a-very-...");
    }

    #[test]
    fn test_write_creates_parents() {
        use tempfile::TempDir;
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let path = temp_dir.path().join("nested").join("navigator.toml");

        write_config_file(&path, "pattern = \".*\"\n").unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "pattern = \".*\"\n");
    }
}
