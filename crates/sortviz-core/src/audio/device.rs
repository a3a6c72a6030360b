//! Output device lookup

use cpal::traits::{DeviceTrait, HostTrait};

use super::error::{AudioError, AudioResult};

/// Names of the default host's output devices
pub fn output_device_names() -> AudioResult<Vec<String>> {
    let host = cpal::default_host();
    let devices = host
        .output_devices()
        .map_err(|e| AudioError::ConfigError(e.to_string()))?;
    let names: Vec<String> = devices.filter_map(|d| d.name().ok()).collect();
    if names.is_empty() {
        return Err(AudioError::NoDevices);
    }
    Ok(names)
}

/// Find an output device by name, or the default device when `name` is `None`
pub fn find_output_device(name: Option<&str>) -> AudioResult<cpal::Device> {
    let host = cpal::default_host();
    let Some(name) = name else {
        return host
            .default_output_device()
            .ok_or_else(|| AudioError::NoDefaultDevice("No default output device".to_string()));
    };

    let mut devices = host
        .output_devices()
        .map_err(|e| AudioError::ConfigError(e.to_string()))?;
    devices
        .find(|d| d.name().map(|n| n == name).unwrap_or(false))
        .ok_or_else(|| AudioError::DeviceNotFound(name.to_string()))
}
