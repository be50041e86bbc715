use std::io;
use thiserror::Error;

/// Result type for audio operations
pub type AudioResult<T> = Result<T, AudioError>;

/// Error types for trimming and encoding audio
#[derive(Error, Debug)]
pub enum AudioError {
    /// IO error (file operations, disk access)
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// Time window is malformed or outside the signal
    #[error("Invalid range: {start}s to {end}s (signal duration {duration}s)")]
    InvalidRange {
        /// Requested start in seconds
        start: f64,
        /// Requested end in seconds
        end: f64,
        /// Duration of the source signal in seconds
        duration: f64,
    },

    /// Time window is valid but covers no whole frame
    #[error("Range {start}s to {end}s contains no frames")]
    EmptyRange {
        /// Requested start in seconds
        start: f64,
        /// Requested end in seconds
        end: f64,
    },

    /// Channel count cannot be represented in the container
    #[error("Unsupported channel count: {count}")]
    UnsupportedChannelCount {
        /// The offending channel count
        count: usize,
    },

    /// Buffer holds no frames
    #[error("Buffer contains no frames")]
    EmptyBuffer,

    /// Invalid sample rate
    #[error("Invalid sample rate: {rate}")]
    InvalidSampleRate {
        /// The invalid sample rate
        rate: u32,
    },

    /// Channels of a planar buffer differ in length
    #[error("Channel {channel} has {got} frames, expected {expected}")]
    ChannelLengthMismatch {
        /// Index of the offending channel
        channel: usize,
        /// Length of channel 0
        expected: usize,
        /// Length of the offending channel
        got: usize,
    },

    /// A header field would overflow its 32-bit slot
    #[error("Container too large: {0}")]
    ContainerTooLarge(String),

    /// Unsupported input format
    #[error("Unsupported audio format: {0}")]
    UnsupportedFormat(String),

    /// Decoding failed
    #[error("Decode error: {0}")]
    DecodeError(String),
}

impl From<hound::Error> for AudioError {
    fn from(err: hound::Error) -> Self {
        match err {
            hound::Error::IoError(e) => AudioError::Io(e),
            hound::Error::Unsupported => {
                AudioError::UnsupportedFormat("WAV variant not supported".to_string())
            }
            e => AudioError::DecodeError(e.to_string()),
        }
    }
}
