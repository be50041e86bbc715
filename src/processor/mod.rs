//! Trim-and-encode pipeline

pub mod trim;

pub use trim::{frame_range, trim};

use crate::core::{EncodedContainer, Signal, TimeWindow};
use crate::encoder::{Encoder, WavEncoder};
use crate::error::AudioResult;
use log::info;

/// Cut `window` out of `signal` and encode it as a 16-bit PCM WAV container
///
/// Either a complete container is returned or an error; nothing partial.
pub fn trim_and_encode(signal: &Signal, window: &TimeWindow) -> AudioResult<EncodedContainer> {
    let trimmed = trim(signal, window)?;
    let container = WavEncoder::new().encode(&trimmed)?;

    info!(
        "Exported {:.3}s..{:.3}s: {} frames x {} channels, {} bytes",
        window.start_seconds(),
        window.end_seconds(),
        trimmed.frame_count(),
        trimmed.channel_count(),
        container.len()
    );

    Ok(container)
}
