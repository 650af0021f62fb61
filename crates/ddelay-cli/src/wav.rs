//! WAV file reading and writing, channel layout preserved.
//!
//! The delay processes channels independently, so unlike a mono effect
//! chain the file is deinterleaved into one buffer per channel and
//! reinterleaved on write, never mixed down.

use hound::{SampleFormat, WavReader, WavWriter};
use std::path::Path;

/// WAV I/O failures.
#[derive(Debug, thiserror::Error)]
pub enum WavError {
    /// Underlying read/write error from the WAV codec.
    #[error("WAV file error: {0}")]
    Wav(#[from] hound::Error),

    /// The file contains no sample frames.
    #[error("audio file has no samples")]
    Empty,
}

/// Result alias for WAV operations.
pub type Result<T> = std::result::Result<T, WavError>;

/// WAV file specification.
#[derive(Debug, Clone, Copy)]
pub struct WavSpec {
    /// Number of audio channels (1 = mono, 2 = stereo).
    pub channels: u16,
    /// Sample rate in Hz.
    pub sample_rate: u32,
    /// Bit depth per sample (16, 24, or 32).
    pub bits_per_sample: u16,
}

impl From<WavSpec> for hound::WavSpec {
    fn from(spec: WavSpec) -> Self {
        hound::WavSpec {
            channels: spec.channels,
            sample_rate: spec.sample_rate,
            bits_per_sample: spec.bits_per_sample,
            sample_format: if spec.bits_per_sample == 32 {
                SampleFormat::Float
            } else {
                SampleFormat::Int
            },
        }
    }
}

/// Read a WAV file into per-channel f32 buffers.
///
/// Integer formats are normalized to [-1, 1]. All channel buffers have
/// equal length; a trailing partial frame is dropped.
pub fn read_wav<P: AsRef<Path>>(path: P) -> Result<(Vec<Vec<f32>>, WavSpec)> {
    let reader = WavReader::open(path)?;
    let hound_spec = reader.spec();
    let spec = WavSpec {
        channels: hound_spec.channels,
        sample_rate: hound_spec.sample_rate,
        bits_per_sample: hound_spec.bits_per_sample,
    };
    let channels = usize::from(spec.channels);

    let interleaved: Vec<f32> = match hound_spec.sample_format {
        SampleFormat::Float => reader
            .into_samples::<f32>()
            .collect::<std::result::Result<Vec<_>, _>>()?,
        SampleFormat::Int => {
            let max_val = (1i32 << (spec.bits_per_sample - 1)) as f32;
            reader
                .into_samples::<i32>()
                .map(|s| s.map(|v| v as f32 / max_val))
                .collect::<std::result::Result<Vec<_>, _>>()?
        }
    };

    let frames = interleaved.len() / channels;
    if frames == 0 {
        return Err(WavError::Empty);
    }

    let mut planar = vec![Vec::with_capacity(frames); channels];
    for frame in interleaved.chunks_exact(channels) {
        for (ch, &sample) in frame.iter().enumerate() {
            planar[ch].push(sample);
        }
    }

    Ok((planar, spec))
}

/// Write per-channel f32 buffers to a WAV file, interleaving frames.
///
/// `spec.bits_per_sample` of 32 writes IEEE float; 16 or 24 write PCM
/// with clipping at full scale.
pub fn write_wav<P: AsRef<Path>>(path: P, channels: &[Vec<f32>], spec: WavSpec) -> Result<()> {
    let mut writer = WavWriter::create(path, hound::WavSpec::from(spec))?;
    let frames = channels.iter().map(Vec::len).min().unwrap_or(0);

    if spec.bits_per_sample == 32 {
        for frame in 0..frames {
            for channel in channels {
                writer.write_sample(channel[frame])?;
            }
        }
    } else {
        let max_val = (1i32 << (spec.bits_per_sample - 1)) as f32;
        for frame in 0..frames {
            for channel in channels {
                let quantized = (channel[frame] * max_val).clamp(-max_val, max_val - 1.0) as i32;
                writer.write_sample(quantized)?;
            }
        }
    }

    writer.finalize()?;
    Ok(())
}
