//! WAV decoding fallback and ordering of in-flight decodes.
//!
//! The browser's own decoder is tried first; [`decode_wav`] handles files it
//! rejects. Either way the result is downmixed to mono by averaging channels.

use crate::types::{DecodedAudio, Placeholder};
use std::io::Cursor;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DecodeError {
    #[error("Error reading audio file: {0}")]
    Read(String),
    #[error("Error processing audio: {0}")]
    Decode(String),
    #[error("decoded audio contains no samples")]
    Empty,
}

impl DecodeError {
    pub fn placeholder(&self) -> Placeholder {
        match self {
            DecodeError::Read(_) => Placeholder::read_error(),
            DecodeError::Decode(_) | DecodeError::Empty => Placeholder::processing_error(),
        }
    }
}

/// Average interleaved frames down to one channel.
pub fn downmix(interleaved: &[f32], channels: usize) -> Vec<f32> {
    if channels <= 1 {
        return interleaved.to_vec();
    }
    interleaved
        .chunks_exact(channels)
        .map(|frame| frame.iter().sum::<f32>() / channels as f32)
        .collect()
}

/// Average per-channel buffers (as handed out by the platform decoder).
pub fn mix_planar(channels: &[Vec<f32>]) -> Vec<f32> {
    match channels {
        [] => Vec::new(),
        [only] => only.clone(),
        _ => {
            let len = channels.iter().map(Vec::len).min().unwrap_or(0);
            let scale = 1.0 / channels.len() as f32;
            (0..len)
                .map(|i| channels.iter().map(|c| c[i]).sum::<f32>() * scale)
                .collect()
        }
    }
}

impl From<hound::Error> for DecodeError {
    fn from(e: hound::Error) -> Self {
        match e {
            hound::Error::IoError(io) => DecodeError::Read(io.to_string()),
            other => DecodeError::Decode(other.to_string()),
        }
    }
}

/// Decode RIFF/WAVE bytes to mono f32 in [-1, 1].
pub fn decode_wav(bytes: &[u8]) -> Result<DecodedAudio, DecodeError> {
    let mut reader = hound::WavReader::new(Cursor::new(bytes))?;
    let spec = reader.spec();
    let channels = spec.channels.max(1) as usize;

    let interleaved: Vec<f32> = match spec.sample_format {
        hound::SampleFormat::Float => reader
            .samples::<f32>()
            .collect::<Result<Vec<f32>, hound::Error>>()?,
        hound::SampleFormat::Int => {
            let scale = 1.0 / (1u64 << (spec.bits_per_sample.saturating_sub(1))) as f32;
            reader
                .samples::<i32>()
                .map(|s| s.map(|v| v as f32 * scale))
                .collect::<Result<Vec<f32>, hound::Error>>()?
        }
    };

    let samples = downmix(&interleaved, channels);
    if samples.is_empty() {
        return Err(DecodeError::Empty);
    }
    log::debug!(
        "decoded WAV: {} frames, {} ch, {} Hz, {}-bit",
        samples.len(),
        channels,
        spec.sample_rate,
        spec.bits_per_sample
    );
    Ok(DecodedAudio::new(samples, spec.sample_rate, channels as u32))
}

/// Pick the error to report when both decoders fail. The bytes are already
/// in memory at that point, so a read error from the fallback never wins.
pub fn prefer_decode_error(platform: DecodeError, fallback: DecodeError) -> DecodeError {
    match fallback {
        DecodeError::Read(_) => platform,
        other => other,
    }
}

/// Identifies one decode request.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DecodeTicket(u64);

/// Hands out tickets so only the newest decode may publish its result.
#[derive(Clone, Debug, Default)]
pub struct DecodeSequencer {
    latest: u64,
}

impl DecodeSequencer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a new request; every earlier ticket becomes stale.
    pub fn begin(&mut self) -> DecodeTicket {
        self.latest += 1;
        DecodeTicket(self.latest)
    }

    /// Invalidate all outstanding tickets without starting a new one.
    pub fn cancel(&mut self) {
        self.latest += 1;
    }

    pub fn is_current(&self, ticket: DecodeTicket) -> bool {
        ticket.0 == self.latest
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn wav_bytes<S: hound::Sample + Copy>(spec: hound::WavSpec, samples: &[S]) -> Vec<u8> {
        let mut bytes = Vec::new();
        {
            let mut writer = hound::WavWriter::new(Cursor::new(&mut bytes), spec).unwrap();
            for &s in samples {
                writer.write_sample(s).unwrap();
            }
            writer.finalize().unwrap();
        }
        bytes
    }

    #[test]
    fn test_decode_int16_stereo_downmixes() {
        let spec = hound::WavSpec {
            channels: 2,
            sample_rate: 16_000,
            bits_per_sample: 16,
            sample_format: hound::SampleFormat::Int,
        };
        let frames: Vec<i16> = (0..200).map(|i| if i % 2 == 0 { 16384 } else { 0 }).collect();
        let bytes = wav_bytes(spec, &frames);
        let audio = decode_wav(&bytes).unwrap();
        assert_eq!(audio.samples.len(), 100);
        assert_eq!(audio.sample_rate, 16_000);
        assert_eq!(audio.channels, 2);
        assert!(audio.samples.iter().all(|&s| (s - 0.25).abs() < 1e-6));
    }

    #[test]
    fn test_decode_float_mono_passthrough() {
        let spec = hound::WavSpec {
            channels: 1,
            sample_rate: 44_100,
            bits_per_sample: 32,
            sample_format: hound::SampleFormat::Float,
        };
        let bytes = wav_bytes(spec, &[0.5f32, -0.5, 0.25]);
        let audio = decode_wav(&bytes).unwrap();
        assert_eq!(*audio.samples, vec![0.5, -0.5, 0.25]);
    }

    #[test]
    fn test_garbage_is_processing_error() {
        let err = decode_wav(b"definitely not a wav file").unwrap_err();
        assert!(matches!(err, DecodeError::Decode(_)), "{err:?}");
        assert_eq!(err.placeholder(), Placeholder::processing_error());
    }

    #[test]
    fn test_hound_error_mapping() {
        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err = DecodeError::from(hound::Error::IoError(io));
        assert_eq!(err.placeholder(), Placeholder::read_error());

        let err = DecodeError::from(hound::Error::FormatError("no RIFF tag found"));
        assert_eq!(err.placeholder(), Placeholder::processing_error());
        let err = DecodeError::from(hound::Error::Unsupported);
        assert_eq!(err.placeholder(), Placeholder::processing_error());
    }

    #[test]
    fn test_fallback_keeps_platform_decode_error() {
        let platform = DecodeError::Decode("EncodingError".into());
        let fallback = DecodeError::Read("unexpected end of file".into());
        let err = prefer_decode_error(platform.clone(), fallback);
        assert_eq!(err, platform);

        let fallback = DecodeError::Decode("no RIFF tag found".into());
        let err = prefer_decode_error(platform, fallback.clone());
        assert_eq!(err, fallback);
    }

    #[test]
    fn test_empty_wav_is_error() {
        let spec = hound::WavSpec {
            channels: 1,
            sample_rate: 8_000,
            bits_per_sample: 16,
            sample_format: hound::SampleFormat::Int,
        };
        let bytes = wav_bytes::<i16>(spec, &[]);
        assert_eq!(decode_wav(&bytes), Err(DecodeError::Empty));
        assert_eq!(DecodeError::Empty.placeholder(), Placeholder::processing_error());
    }

    #[test]
    fn test_mix_planar_uses_shortest_channel() {
        let mixed = mix_planar(&[vec![1.0, 0.0, 1.0], vec![0.0, 0.0]]);
        assert_eq!(mixed, vec![0.5, 0.0]);
        assert!(mix_planar(&[]).is_empty());
    }

    #[test]
    fn test_sequencer_discards_superseded() {
        let mut seq = DecodeSequencer::new();
        let first = seq.begin();
        let second = seq.begin();
        assert!(!seq.is_current(first));
        assert!(seq.is_current(second));
        seq.cancel();
        assert!(!seq.is_current(second));
    }
}
