//! Generic configuration I/O utilities

use anyhow::{Context, Result};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::path::Path;

/// Load configuration from a YAML file
///
/// If the file doesn't exist, returns default config.
/// If the file exists but is invalid, logs a warning and returns default config.
pub fn load_config<T>(path: &Path) -> T
where
    T: DeserializeOwned + Default,
{
    log::info!("load_config: Loading from {:?}", path);

    if !path.exists() {
        log::info!("load_config: Config file doesn't exist, using defaults");
        return T::default();
    }

    match std::fs::read_to_string(path) {
        Ok(contents) => match serde_yaml::from_str::<T>(&contents) {
            Ok(config) => {
                log::info!("load_config: Successfully loaded config from {:?}", path);
                config
            }
            Err(e) => {
                log::warn!("load_config: Failed to parse config: {}, using defaults", e);
                T::default()
            }
        },
        Err(e) => {
            log::warn!(
                "load_config: Failed to read config file: {}, using defaults",
                e
            );
            T::default()
        }
    }
}

/// Save configuration to a YAML file, creating parent directories
pub fn save_config<T>(config: &T, path: &Path) -> Result<()>
where
    T: Serialize,
{
    log::info!("save_config: Saving to {:?}", path);

    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create config directory: {:?}", parent))?;
    }

    let yaml = serde_yaml::to_string(config).context("Failed to serialize config to YAML")?;

    std::fs::write(path, yaml)
        .with_context(|| format!("Failed to write config file: {:?}", path))?;

    log::info!("save_config: Config saved successfully");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::VisualizerConfig;

    #[test]
    fn test_load_nonexistent_returns_default() {
        let config: VisualizerConfig = load_config(Path::new("/nonexistent/path/config.yaml"));
        assert_eq!(config, VisualizerConfig::default());
    }

    #[test]
    fn test_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.yaml");

        let mut config = VisualizerConfig::default();
        config.element_count = 12;
        config.pacing.step_delay_ms = 5;
        config.audio.device = Some("hw:1".to_string());

        save_config(&config, &path).unwrap();
        let loaded: VisualizerConfig = load_config(&path);

        assert_eq!(loaded, config);
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.yaml");
        std::fs::write(&path, "element_count: 8\ntone:\n  max_frequency: 4000\n").unwrap();

        let loaded: VisualizerConfig = load_config(&path);
        assert_eq!(loaded.element_count, 8);
        assert_eq!(loaded.tone.max_frequency, 4000);
        assert_eq!(loaded.tone.min_frequency, 2000);
        assert_eq!(loaded.pacing.step_delay_ms, 50);
    }

    #[test]
    fn test_invalid_file_returns_default() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.yaml");
        std::fs::write(&path, "element_count: [not, a, number]").unwrap();

        let loaded: VisualizerConfig = load_config(&path);
        assert_eq!(loaded, VisualizerConfig::default());
    }
}
