use crate::core::{Signal, TimeWindow, TrimmedBuffer};
use crate::error::{AudioError, AudioResult};
use log::debug;
use std::ops::Range;

/// Convert a time in seconds to a frame index, truncating toward zero
fn frame_at(seconds: f64, sample_rate: u32, frame_count: usize) -> usize {
    let frame = (seconds * sample_rate as f64).floor() as usize;
    frame.min(frame_count)
}

/// Validate `window` against `signal` and return the selected frame indices
///
/// Both bounds are truncated (`floor`), so the range never extends past the
/// requested end time.
pub fn frame_range(signal: &Signal, window: &TimeWindow) -> AudioResult<Range<usize>> {
    window.validate(signal.duration_secs())?;

    let start_frame = frame_at(window.start_seconds(), signal.sample_rate(), signal.frame_count());
    // duration * rate can land just under frame_count in floating point
    let end_frame = if window.end_seconds() >= signal.duration_secs() {
        signal.frame_count()
    } else {
        frame_at(window.end_seconds(), signal.sample_rate(), signal.frame_count())
    };

    if end_frame <= start_frame {
        return Err(AudioError::EmptyRange {
            start: window.start_seconds(),
            end: window.end_seconds(),
        });
    }

    Ok(start_frame..end_frame)
}

/// Copy the frames selected by `window` out of every channel of `signal`
///
/// # Example
/// ```
/// use audio_cutter::core::{Signal, TimeWindow};
/// use audio_cutter::processor::trim;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// // 2 seconds of stereo at 8 kHz
/// let signal = Signal::new(8000, vec![vec![0.5; 16000], vec![-0.5; 16000]])?;
///
/// let trimmed = trim(&signal, &TimeWindow::new(0.5, 1.0))?;
///
/// assert_eq!(trimmed.frame_count(), 4000);
/// assert_eq!(trimmed.channel_count(), 2);
/// # Ok(())
/// # }
/// ```
pub fn trim(signal: &Signal, window: &TimeWindow) -> AudioResult<TrimmedBuffer> {
    let range = frame_range(signal, window)?;

    debug!(
        "Trimming frames {}..{} of {} ({} channels @ {} Hz)",
        range.start,
        range.end,
        signal.frame_count(),
        signal.channel_count(),
        signal.sample_rate()
    );

    let channels = signal
        .channels()
        .iter()
        .map(|samples| samples[range.clone()].to_vec())
        .collect();

    TrimmedBuffer::from_channels(signal.sample_rate(), channels)
}
