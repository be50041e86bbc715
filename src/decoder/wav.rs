use super::Decoder;
use crate::core::Signal;
use crate::error::{AudioError, AudioResult};
use hound::{SampleFormat, WavReader};
use log::debug;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

/// Header information of a WAV stream
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContainerInfo {
    /// Sample rate in Hz
    pub sample_rate: u32,
    /// Number of channels
    pub channel_count: u16,
    /// Bits per sample
    pub bits_per_sample: u16,
    /// Whether samples are IEEE floats rather than integers
    pub is_float: bool,
    /// Samples per channel
    pub frame_count: u32,
}

impl ContainerInfo {
    /// Duration in seconds
    pub fn duration_secs(&self) -> f64 {
        if self.sample_rate == 0 {
            return 0.0;
        }
        self.frame_count as f64 / self.sample_rate as f64
    }
}

/// Map an integer sample of the given width to [-1.0, 1.0]
///
/// Inverse of the encoder's asymmetric scaling: negative values divide by
/// `2^(bits-1)`, non-negative by `2^(bits-1) - 1`.
fn int_to_float(value: i32, bits: u16) -> f32 {
    let half = (1i64 << (bits - 1)) as f64;
    if value < 0 {
        (value as f64 / half) as f32
    } else {
        (value as f64 / (half - 1.0)) as f32
    }
}

/// Uncompressed WAV reader producing a planar [`Signal`]
pub struct WavSource<R: Read> {
    reader: WavReader<R>,
}

impl WavSource<BufReader<File>> {
    /// Open a WAV file
    pub fn from_file<P: AsRef<Path>>(path: P) -> AudioResult<Self> {
        let reader = WavReader::open(path)?;
        Ok(WavSource { reader })
    }
}

impl<R: Read> WavSource<R> {
    /// Parse the header of a WAV stream
    pub fn from_reader(source: R) -> AudioResult<Self> {
        let reader = WavReader::new(source)?;
        Ok(WavSource { reader })
    }

    fn read_planar(&mut self, info: &ContainerInfo) -> AudioResult<Vec<Vec<f32>>> {
        let channel_count = info.channel_count as usize;
        let frames = info.frame_count as usize;
        let mut channels: Vec<Vec<f32>> = (0..channel_count)
            .map(|_| Vec::with_capacity(frames))
            .collect();

        // Partial trailing frames are dropped
        let total = frames * channel_count;

        match (info.is_float, info.bits_per_sample) {
            (true, 32) => {
                for (i, sample) in self.reader.samples::<f32>().take(total).enumerate() {
                    channels[i % channel_count].push(sample?);
                }
            }
            (false, bits @ 1..=32) => {
                for (i, sample) in self.reader.samples::<i32>().take(total).enumerate() {
                    channels[i % channel_count].push(int_to_float(sample?, bits));
                }
            }
            (is_float, bits) => {
                return Err(AudioError::UnsupportedFormat(format!(
                    "{}-bit {} samples",
                    bits,
                    if is_float { "float" } else { "integer" }
                )));
            }
        }

        Ok(channels)
    }
}

impl<R: Read> Decoder for WavSource<R> {
    fn info(&self) -> ContainerInfo {
        let spec = self.reader.spec();
        ContainerInfo {
            sample_rate: spec.sample_rate,
            channel_count: spec.channels,
            bits_per_sample: spec.bits_per_sample,
            is_float: spec.sample_format == SampleFormat::Float,
            frame_count: self.reader.duration(),
        }
    }

    fn decode(mut self) -> AudioResult<Signal> {
        let info = self.info();
        debug!(
            "Decoding WAV: {} Hz, {} channels, {}-bit, {} frames",
            info.sample_rate, info.channel_count, info.bits_per_sample, info.frame_count
        );

        if info.channel_count == 0 {
            return Err(AudioError::UnsupportedChannelCount { count: 0 });
        }

        let channels = self.read_planar(&info)?;
        Signal::new(info.sample_rate, channels)
    }
}
