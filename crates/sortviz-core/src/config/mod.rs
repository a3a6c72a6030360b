//! Configuration for sortviz
//!
//! - Generic YAML config loading/saving
//! - Standard config path
//! - [`VisualizerConfig`]: element count, tone band, pacing, audio and display
//!
//! # Usage
//!
//! ```ignore
//! use sortviz_core::config::{default_config_path, load_config, VisualizerConfig};
//!
//! let mut config: VisualizerConfig = load_config(&default_config_path());
//! config.validate();
//! ```

mod io;
mod paths;
mod visualizer;

pub use io::{load_config, save_config};
pub use paths::{default_config_dir, default_config_path, CONFIG_FILENAME};
pub use visualizer::{AudioSettings, DisplayConfig, PacingConfig, ToneConfig, VisualizerConfig};
