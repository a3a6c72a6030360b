//! Path utilities for sortviz configuration files

use std::path::PathBuf;

/// Config file name inside the config directory
pub const CONFIG_FILENAME: &str = "config.yaml";

/// Get the default config directory
///
/// Returns: `{config_dir}/sortviz` (e.g. `~/.config/sortviz` on Linux)
pub fn default_config_dir() -> PathBuf {
    dirs::config_dir()
        .or_else(dirs::home_dir)
        .unwrap_or_else(|| PathBuf::from("."))
        .join("sortviz")
}

/// Get the default config file path
pub fn default_config_path() -> PathBuf {
    default_config_dir().join(CONFIG_FILENAME)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_dir_ends_with_sortviz() {
        assert!(default_config_dir().ends_with("sortviz"));
    }

    #[test]
    fn test_config_path_includes_filename() {
        assert!(default_config_path().ends_with("sortviz/config.yaml"));
    }
}
