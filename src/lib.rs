#![warn(missing_docs)]

//! # audio-cutter: trim decoded audio into standalone WAV files
//!
//! Takes a decoded, planar multi-channel signal and a time window, cuts the
//! window out and serializes it as a 16-bit linear PCM WAV container.
//!
//! ## Features
//!
//! - **Trim** - Frame-exact slicing by start/end time, truncating boundaries
//! - **Encode** - Canonical 44-byte RIFF/WAVE header, interleaved 16-bit PCM
//! - **Decode** - Uncompressed WAV input for the command-line tool
//!
//! ## Quick Start
//!
//! ```
//! use audio_cutter::{Signal, TimeWindow};
//! use audio_cutter::processor::trim_and_encode;
//!
//! # fn main() -> Result<(), audio_cutter::AudioError> {
//! // Two seconds of silence at 44.1 kHz
//! let signal = Signal::new(44100, vec![vec![0.0; 88200]])?;
//!
//! let wav = trim_and_encode(&signal, &TimeWindow::new(0.5, 1.5))?;
//! assert_eq!(wav.len(), 44 + 44100 * 2);
//! # Ok(())
//! # }
//! ```

/// Core audio types and structures
pub mod core;
/// Error types for audio operations
pub mod error;
/// Audio decoder implementations
pub mod decoder;
/// Audio encoder implementations
pub mod encoder;
/// Trim-and-encode pipeline
pub mod processor;

// Export public types
pub use self::core::{EncodedContainer, Signal, TimeWindow, TrimmedBuffer};
pub use error::{AudioError, AudioResult};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
