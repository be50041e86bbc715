//! Core audio types and structures

/// Signal, time window and buffer types
pub mod audio;

pub use audio::{EncodedContainer, Signal, TimeWindow, TrimmedBuffer};
