//! Audio decoder implementations

pub mod wav;

pub use wav::{ContainerInfo, WavSource};

use crate::core::Signal;
use crate::error::AudioResult;
use std::path::Path;

/// Trait for sources that produce a fully decoded [`Signal`]
pub trait Decoder {
    /// Header information, available before decoding
    fn info(&self) -> ContainerInfo;

    /// Read every sample into memory
    fn decode(self) -> AudioResult<Signal>
    where
        Self: Sized;
}

/// Decode a WAV file from a path
pub fn from_file<P: AsRef<Path>>(path: P) -> AudioResult<Signal> {
    WavSource::from_file(path)?.decode()
}

/// Read only the header of a WAV file
pub fn probe<P: AsRef<Path>>(path: P) -> AudioResult<ContainerInfo> {
    Ok(WavSource::from_file(path)?.info())
}
