//! Audio encoder implementations

pub mod wav;

pub use wav::{WavEncoder, encode_wav, quantize_sample};

use crate::core::{EncodedContainer, TrimmedBuffer};
use crate::error::AudioResult;

/// Trait for audio container encoders
pub trait Encoder {
    /// Serialize a whole buffer into a container
    fn encode(&self, buffer: &TrimmedBuffer) -> AudioResult<EncodedContainer>;
}
