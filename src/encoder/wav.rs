use crate::core::{EncodedContainer, TrimmedBuffer};
use crate::error::{AudioError, AudioResult};
use log::debug;

/// Size of the RIFF/WAVE header preceding the sample payload
pub const HEADER_LEN: usize = 44;
/// Bit depth of every sample written
pub const BITS_PER_SAMPLE: u16 = 16;

const BYTES_PER_SAMPLE: u64 = (BITS_PER_SAMPLE / 8) as u64;
const FMT_CHUNK_LEN: u32 = 16;
const FORMAT_PCM: u16 = 1;

/// Map a float sample to 16-bit signed PCM
///
/// Negative values scale by 32768 and non-negative by 32767, so -1.0 and 1.0
/// land exactly on `i16::MIN` and `i16::MAX`. Out-of-range input is clamped
/// and NaN becomes silence.
pub fn quantize_sample(sample: f32) -> i16 {
    if sample.is_nan() {
        return 0;
    }

    let s = sample.clamp(-1.0, 1.0);
    if s < 0.0 {
        (s * 32768.0).round() as i16
    } else {
        (s * 32767.0).round() as i16
    }
}

/// Header field values derived from a buffer, all range-checked
struct HeaderFields {
    channels: u16,
    sample_rate: u32,
    byte_rate: u32,
    block_align: u16,
    data_size: u32,
}

impl HeaderFields {
    fn for_buffer(buffer: &TrimmedBuffer) -> AudioResult<Self> {
        let channel_count = buffer.channel_count();
        let channels = match u16::try_from(channel_count) {
            Ok(0) | Err(_) => {
                return Err(AudioError::UnsupportedChannelCount {
                    count: channel_count,
                });
            }
            Ok(n) => n,
        };

        if buffer.frame_count() == 0 {
            return Err(AudioError::EmptyBuffer);
        }

        let sample_rate = buffer.sample_rate();
        let too_large = |field: &str, value: u64| {
            AudioError::ContainerTooLarge(format!("{} of {} does not fit in 32 bits", field, value))
        };

        let block_align = u64::from(channels) * BYTES_PER_SAMPLE;
        let byte_rate = block_align * u64::from(sample_rate);
        let data_size = buffer.frame_count() as u64 * block_align;

        // The RIFF chunk size adds the 36 remaining header bytes on top of the data
        if data_size + 36 > u64::from(u32::MAX) {
            return Err(too_large("data size", data_size));
        }
        let byte_rate = u32::try_from(byte_rate).map_err(|_| too_large("byte rate", byte_rate))?;
        let block_align =
            u16::try_from(block_align).map_err(|_| too_large("block align", block_align))?;

        Ok(HeaderFields {
            channels,
            sample_rate,
            byte_rate,
            block_align,
            data_size: data_size as u32,
        })
    }

    fn write(&self, out: &mut Vec<u8>) {
        // RIFF header
        out.extend_from_slice(b"RIFF");
        out.extend_from_slice(&(36 + self.data_size).to_le_bytes());
        out.extend_from_slice(b"WAVE");

        // fmt sub-chunk
        out.extend_from_slice(b"fmt ");
        out.extend_from_slice(&FMT_CHUNK_LEN.to_le_bytes());
        out.extend_from_slice(&FORMAT_PCM.to_le_bytes());
        out.extend_from_slice(&self.channels.to_le_bytes());
        out.extend_from_slice(&self.sample_rate.to_le_bytes());
        out.extend_from_slice(&self.byte_rate.to_le_bytes());
        out.extend_from_slice(&self.block_align.to_le_bytes());
        out.extend_from_slice(&BITS_PER_SAMPLE.to_le_bytes());

        // data sub-chunk
        out.extend_from_slice(b"data");
        out.extend_from_slice(&self.data_size.to_le_bytes());
    }
}

/// 16-bit linear PCM WAV encoder
///
/// Produces a canonical 44-byte header followed by samples interleaved frame
/// by frame (channel 0 first).
#[derive(Debug, Clone, Copy, Default)]
pub struct WavEncoder;

impl WavEncoder {
    /// Create a new WAV encoder
    pub fn new() -> Self {
        WavEncoder
    }
}

impl super::Encoder for WavEncoder {
    fn encode(&self, buffer: &TrimmedBuffer) -> AudioResult<EncodedContainer> {
        let header = HeaderFields::for_buffer(buffer)?;

        let mut bytes = Vec::with_capacity(HEADER_LEN + header.data_size as usize);
        header.write(&mut bytes);

        let channels = buffer.channels();
        for frame in 0..buffer.frame_count() {
            for channel in channels {
                bytes.extend_from_slice(&quantize_sample(channel[frame]).to_le_bytes());
            }
        }

        debug!(
            "Encoded {} frames x {} channels @ {} Hz into {} bytes",
            buffer.frame_count(),
            header.channels,
            header.sample_rate,
            bytes.len()
        );

        Ok(EncodedContainer::new(bytes))
    }
}

/// Encode a buffer with the default [`WavEncoder`]
pub fn encode_wav(buffer: &TrimmedBuffer) -> AudioResult<EncodedContainer> {
    super::Encoder::encode(&WavEncoder::new(), buffer)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::encoder::Encoder;
    use hound::WavReader;
    use std::io::Cursor;

    fn u16_at(bytes: &[u8], offset: usize) -> u16 {
        u16::from_le_bytes([bytes[offset], bytes[offset + 1]])
    }

    fn u32_at(bytes: &[u8], offset: usize) -> u32 {
        u32::from_le_bytes([
            bytes[offset],
            bytes[offset + 1],
            bytes[offset + 2],
            bytes[offset + 3],
        ])
    }

    fn payload_samples(bytes: &[u8]) -> Vec<i16> {
        bytes[HEADER_LEN..]
            .chunks_exact(2)
            .map(|pair| i16::from_le_bytes([pair[0], pair[1]]))
            .collect()
    }

    #[test]
    fn test_quantize_extremes() {
        assert_eq!(quantize_sample(1.0), 32767);
        assert_eq!(quantize_sample(-1.0), -32768);
        assert_eq!(quantize_sample(0.0), 0);
        assert_eq!(quantize_sample(-0.0), 0);
    }

    #[test]
    fn test_quantize_clamps() {
        assert_eq!(quantize_sample(1.7), 32767);
        assert_eq!(quantize_sample(-3.0), -32768);
        assert_eq!(quantize_sample(f32::INFINITY), 32767);
        assert_eq!(quantize_sample(f32::NEG_INFINITY), -32768);
        assert_eq!(quantize_sample(f32::NAN), 0);
    }

    #[test]
    fn test_quantize_rounds() {
        assert_eq!(quantize_sample(0.5), 16384); // 16383.5
        assert_eq!(quantize_sample(-0.5), -16384);
        assert_eq!(quantize_sample(0.25), 8192); // 8191.75
    }

    #[test]
    fn test_header_layout() {
        let buffer = TrimmedBuffer::from_channels(48000, vec![vec![0.0; 5], vec![0.0; 5]]).unwrap();
        let bytes = encode_wav(&buffer).unwrap().into_bytes();

        assert_eq!(&bytes[0..4], b"RIFF");
        assert_eq!(u32_at(&bytes, 4), 36 + 20);
        assert_eq!(&bytes[8..12], b"WAVE");
        assert_eq!(&bytes[12..16], b"fmt ");
        assert_eq!(u32_at(&bytes, 16), 16);
        assert_eq!(u16_at(&bytes, 20), 1);
        assert_eq!(u16_at(&bytes, 22), 2);
        assert_eq!(u32_at(&bytes, 24), 48000);
        assert_eq!(u32_at(&bytes, 28), 2 * 48000 * 2);
        assert_eq!(u16_at(&bytes, 32), 4);
        assert_eq!(u16_at(&bytes, 34), 16);
        assert_eq!(&bytes[36..40], b"data");
        assert_eq!(u32_at(&bytes, 40), 20);
        assert_eq!(bytes.len(), HEADER_LEN + 20);
    }

    #[test]
    fn test_interleave_order() {
        let left: Vec<f32> = (0..10).map(|i| i as f32 / 100.0).collect();
        let right: Vec<f32> = (0..10).map(|i| -(i as f32) / 100.0).collect();
        let buffer = TrimmedBuffer::from_channels(44100, vec![left.clone(), right.clone()]).unwrap();

        let bytes = WavEncoder::new().encode(&buffer).unwrap().into_bytes();
        assert_eq!(bytes.len() - HEADER_LEN, 10 * 2 * 2);

        let expected: Vec<i16> = left
            .iter()
            .zip(&right)
            .flat_map(|(&l, &r)| [quantize_sample(l), quantize_sample(r)])
            .collect();
        assert_eq!(payload_samples(&bytes), expected);
    }

    #[test]
    fn test_many_channels_keep_plain_header() {
        let buffer = TrimmedBuffer::from_channels(22050, vec![vec![0.5; 3]; 6]).unwrap();
        let bytes = encode_wav(&buffer).unwrap().into_bytes();

        assert_eq!(bytes.len(), HEADER_LEN + 3 * 6 * 2);
        assert_eq!(u16_at(&bytes, 22), 6);
        assert_eq!(u16_at(&bytes, 32), 12);
        assert_eq!(u32_at(&bytes, 28), 6 * 22050 * 2);
    }

    #[test]
    fn test_encode_no_channels() {
        let buffer = TrimmedBuffer::from_channels(44100, Vec::new()).unwrap();
        assert!(matches!(
            encode_wav(&buffer),
            Err(AudioError::UnsupportedChannelCount { count: 0 })
        ));
    }

    #[test]
    fn test_encode_no_frames() {
        let buffer = TrimmedBuffer::from_channels(44100, vec![Vec::new()]).unwrap();
        assert!(matches!(encode_wav(&buffer), Err(AudioError::EmptyBuffer)));
    }

    #[test]
    fn test_encode_byte_rate_overflow() {
        let buffer = TrimmedBuffer::from_channels(u32::MAX, vec![vec![0.0]; 2]).unwrap();
        assert!(matches!(
            encode_wav(&buffer),
            Err(AudioError::ContainerTooLarge(_))
        ));
    }

    #[test]
    fn test_encode_is_deterministic() {
        let buffer =
            TrimmedBuffer::from_channels(8000, vec![vec![0.1, -0.7, 0.33, 0.9]]).unwrap();
        assert_eq!(encode_wav(&buffer).unwrap(), encode_wav(&buffer).unwrap());
    }

    #[test]
    fn test_hound_reads_container() {
        let samples = vec![0.0, 0.5, -0.5, 1.0, -1.0, 0.25];
        let buffer =
            TrimmedBuffer::from_channels(44100, vec![samples.clone(), samples.clone()]).unwrap();
        let container = encode_wav(&buffer).unwrap();

        let mut reader = WavReader::new(Cursor::new(container.into_bytes())).unwrap();
        let spec = reader.spec();
        assert_eq!(spec.sample_rate, 44100);
        assert_eq!(spec.channels, 2);
        assert_eq!(spec.bits_per_sample, 16);
        assert_eq!(spec.sample_format, hound::SampleFormat::Int);
        assert_eq!(reader.duration(), 6);

        let decoded: Vec<i16> = reader.samples::<i16>().map(|s| s.unwrap()).collect();
        let expected: Vec<i16> = samples
            .iter()
            .flat_map(|&s| [quantize_sample(s), quantize_sample(s)])
            .collect();
        assert_eq!(decoded, expected);
    }
}
