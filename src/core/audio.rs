use crate::error::{AudioError, AudioResult};
use std::fs;
use std::path::Path;
use std::time::Duration;

/// Checks that every channel has the length of channel 0 and returns it
fn common_length(channels: &[Vec<f32>]) -> AudioResult<usize> {
    let expected = channels.first().map(Vec::len).unwrap_or(0);

    for (channel, samples) in channels.iter().enumerate() {
        if samples.len() != expected {
            return Err(AudioError::ChannelLengthMismatch {
                channel,
                expected,
                got: samples.len(),
            });
        }
    }

    Ok(expected)
}

/// Decoded audio source, stored planar (one sample vector per channel)
#[derive(Debug, Clone, PartialEq)]
pub struct Signal {
    /// Sample rate in Hz (e.g., 44100, 48000)
    sample_rate: u32,
    /// Per-channel samples, nominally in [-1.0, 1.0]
    channels: Vec<Vec<f32>>,
    /// Length of every channel
    frame_count: usize,
}

impl Signal {
    /// Create a signal from per-channel sample vectors
    ///
    /// Samples outside [-1.0, 1.0] are kept as-is; the encoder clamps them.
    pub fn new(sample_rate: u32, channels: Vec<Vec<f32>>) -> AudioResult<Self> {
        if sample_rate == 0 {
            return Err(AudioError::InvalidSampleRate { rate: sample_rate });
        }

        if channels.is_empty() {
            return Err(AudioError::UnsupportedChannelCount { count: 0 });
        }

        let frame_count = common_length(&channels)?;

        Ok(Signal {
            sample_rate,
            channels,
            frame_count,
        })
    }

    /// Get sample rate in Hz
    pub fn sample_rate(&self) -> u32 {
        self.sample_rate
    }

    /// Get number of channels
    pub fn channel_count(&self) -> usize {
        self.channels.len()
    }

    /// Get number of frames (samples per channel)
    pub fn frame_count(&self) -> usize {
        self.frame_count
    }

    /// Get the samples of one channel
    pub fn channel(&self, index: usize) -> Option<&[f32]> {
        self.channels.get(index).map(Vec::as_slice)
    }

    /// Get all channels
    pub fn channels(&self) -> &[Vec<f32>] {
        &self.channels
    }

    /// Duration in seconds
    pub fn duration_secs(&self) -> f64 {
        self.frame_count as f64 / self.sample_rate as f64
    }

    /// Duration of the whole signal
    pub fn duration(&self) -> Duration {
        Duration::from_secs_f64(self.duration_secs())
    }
}

/// A selection within a signal, in seconds
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TimeWindow {
    start_seconds: f64,
    end_seconds: f64,
}

impl TimeWindow {
    /// Create a window. Bounds are checked against a signal by [`TimeWindow::validate`].
    pub fn new(start_seconds: f64, end_seconds: f64) -> Self {
        TimeWindow {
            start_seconds,
            end_seconds,
        }
    }

    /// Window covering the whole signal
    pub fn full(signal: &Signal) -> Self {
        TimeWindow::new(0.0, signal.duration_secs())
    }

    /// Start time in seconds
    pub fn start_seconds(&self) -> f64 {
        self.start_seconds
    }

    /// End time in seconds
    pub fn end_seconds(&self) -> f64 {
        self.end_seconds
    }

    /// Length of the selection in seconds
    pub fn length_secs(&self) -> f64 {
        self.end_seconds - self.start_seconds
    }

    /// Require `0 <= start < end <= duration_secs` with finite bounds
    pub fn validate(&self, duration_secs: f64) -> AudioResult<()> {
        let (start, end) = (self.start_seconds, self.end_seconds);

        let valid = start.is_finite()
            && end.is_finite()
            && start >= 0.0
            && start < end
            && end <= duration_secs;

        if !valid {
            return Err(AudioError::InvalidRange {
                start,
                end,
                duration: duration_secs,
            });
        }

        Ok(())
    }
}

/// Planar samples cut out of a [`Signal`]; owns its memory
#[derive(Debug, Clone, PartialEq)]
pub struct TrimmedBuffer {
    sample_rate: u32,
    channels: Vec<Vec<f32>>,
    frame_count: usize,
}

impl TrimmedBuffer {
    /// Build a buffer directly from planar channels
    ///
    /// Only equal channel lengths are enforced here. Zero channels or zero
    /// frames are rejected by the encoder.
    pub fn from_channels(sample_rate: u32, channels: Vec<Vec<f32>>) -> AudioResult<Self> {
        let frame_count = common_length(&channels)?;

        Ok(TrimmedBuffer {
            sample_rate,
            channels,
            frame_count,
        })
    }

    /// Get sample rate in Hz
    pub fn sample_rate(&self) -> u32 {
        self.sample_rate
    }

    /// Get number of channels
    pub fn channel_count(&self) -> usize {
        self.channels.len()
    }

    /// Get number of frames
    pub fn frame_count(&self) -> usize {
        self.frame_count
    }

    /// Get the samples of one channel
    pub fn channel(&self, index: usize) -> Option<&[f32]> {
        self.channels.get(index).map(Vec::as_slice)
    }

    /// Get all channels
    pub fn channels(&self) -> &[Vec<f32>] {
        &self.channels
    }

    /// Check if the buffer holds no frames
    pub fn is_empty(&self) -> bool {
        self.frame_count == 0
    }

    /// Duration of the buffer
    pub fn duration(&self) -> Duration {
        if self.sample_rate == 0 {
            return Duration::ZERO;
        }
        Duration::from_secs_f64(self.frame_count as f64 / self.sample_rate as f64)
    }
}

/// Complete WAV file bytes (header followed by payload)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncodedContainer {
    bytes: Vec<u8>,
}

impl EncodedContainer {
    pub(crate) fn new(bytes: Vec<u8>) -> Self {
        EncodedContainer { bytes }
    }

    /// Get reference to the bytes
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Get owned bytes (consumes container)
    pub fn into_bytes(self) -> Vec<u8> {
        self.bytes
    }

    /// Total size in bytes
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    /// Check if there are no bytes
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Write the container to a file, replacing any existing file
    pub fn write_to<P: AsRef<Path>>(&self, path: P) -> AudioResult<()> {
        fs::write(path, &self.bytes)?;
        Ok(())
    }
}

impl AsRef<[u8]> for EncodedContainer {
    fn as_ref(&self) -> &[u8] {
        &self.bytes
    }
}
