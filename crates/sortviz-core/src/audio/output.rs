//! CPAL stream that plays queued tones

use std::time::Duration;

use cpal::traits::{DeviceTrait, StreamTrait};
use cpal::{SampleFormat, Stream, StreamConfig};

use super::device::find_output_device;
use super::error::{AudioError, AudioResult};
use super::voice::ToneVoice;
use crate::config::AudioSettings;
use crate::step::Tone;

/// Pending tone requests the audio thread may lag behind by
pub const TONE_QUEUE_CAPACITY: usize = 16;

/// Tone request as queued for the audio thread
#[derive(Debug, Clone, Copy)]
struct ToneCommand {
    frequency: u32,
    duration_ms: u32,
}

/// Keeps the output stream alive; drop to stop audio
pub struct ToneOutput {
    _stream: Stream,
    producer: rtrb::Producer<ToneCommand>,
    sample_rate: u32,
}

impl ToneOutput {
    /// Open the configured (or default) output device and start the stream
    pub fn start(settings: &AudioSettings) -> AudioResult<Self> {
        if !settings.enabled {
            return Err(AudioError::Unavailable);
        }

        let device = find_output_device(settings.device.as_deref())?;
        let device_name = device.name().unwrap_or_else(|_| "Unknown".to_string());
        log::info!("Using audio device: {}", device_name);

        let supported = device
            .default_output_config()
            .map_err(|e| AudioError::ConfigError(e.to_string()))?;
        if supported.sample_format() != SampleFormat::F32 {
            return Err(AudioError::UnsupportedFormat(format!(
                "{:?}",
                supported.sample_format()
            )));
        }

        let config: StreamConfig = supported.config();
        let sample_rate = config.sample_rate.0;
        let channels = config.channels as usize;
        log::info!("Tone output config: {} channels, {}Hz", channels, sample_rate);

        let (producer, mut consumer) = rtrb::RingBuffer::<ToneCommand>::new(TONE_QUEUE_CAPACITY);
        let mut voice = ToneVoice::new(sample_rate, settings.volume);

        let stream = device
            .build_output_stream(
                &config,
                move |data: &mut [f32], _info: &cpal::OutputCallbackInfo| {
                    // Latest request wins
                    while let Ok(command) = consumer.pop() {
                        voice.trigger(command.frequency, command.duration_ms);
                    }
                    for frame in data.chunks_mut(channels) {
                        let sample = voice.next_sample();
                        for ch in frame.iter_mut() {
                            *ch = sample;
                        }
                    }
                },
                move |err| {
                    log::error!("Tone stream error: {}", err);
                },
                None,
            )
            .map_err(|e| AudioError::StreamBuildError(e.to_string()))?;

        stream
            .play()
            .map_err(|e| AudioError::StreamPlayError(e.to_string()))?;
        log::info!("Tone stream started");

        Ok(Self {
            _stream: stream,
            producer,
            sample_rate,
        })
    }

    /// Queue a tone; never blocks
    pub fn play(&mut self, tone: Tone) -> AudioResult<()> {
        let duration_ms = tone.duration.min(Duration::from_secs(10)).as_millis() as u32;
        self.producer
            .push(ToneCommand {
                frequency: tone.frequency,
                duration_ms,
            })
            .map_err(|_| AudioError::QueueFull)
    }

    pub fn sample_rate(&self) -> u32 {
        self.sample_rate
    }
}
