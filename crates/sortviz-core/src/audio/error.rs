//! Tone output error types

use thiserror::Error;

/// Errors that can occur while opening or feeding the tone output
#[derive(Error, Debug)]
pub enum AudioError {
    /// No audio devices available
    #[error("No audio output devices found")]
    NoDevices,

    /// Failed to get default device
    #[error("Failed to get default audio device: {0}")]
    NoDefaultDevice(String),

    /// Device not found
    #[error("Audio device not found: {0}")]
    DeviceNotFound(String),

    /// Failed to get device configuration
    #[error("Failed to get device config: {0}")]
    ConfigError(String),

    /// Failed to build audio stream
    #[error("Failed to build audio stream: {0}")]
    StreamBuildError(String),

    /// Failed to start/play stream
    #[error("Failed to start audio stream: {0}")]
    StreamPlayError(String),

    /// Unsupported sample format
    #[error("Unsupported sample format: {0}")]
    UnsupportedFormat(String),

    /// The audio thread hasn't drained earlier tone requests yet
    #[error("Tone queue is full")]
    QueueFull,

    /// Audio is disabled or the device failed to open
    #[error("Tone output unavailable")]
    Unavailable,
}

/// Result type for audio operations
pub type AudioResult<T> = Result<T, AudioError>;
