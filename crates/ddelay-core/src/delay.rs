//! The feedback delay effect: per-channel circular buffers with a
//! feedback write-back path and a retunable delay length.
//!
//! [`FeedbackDelay`] is the whole effect. The host drives it through two
//! operations: [`reinit`](FeedbackDelay::reinit) from a control thread
//! whenever the stream configuration changes, and
//! [`process_sample`](FeedbackDelay::process_sample) from the audio
//! thread, once per sample per channel. The two are never called
//! concurrently; the host quiesces audio before reconfiguring.

#[cfg(not(feature = "std"))]
extern crate alloc;

#[cfg(feature = "std")]
extern crate std as alloc;

use alloc::vec::Vec;

use libm::ceilf;

use crate::error::ConfigError;
use crate::line::DelayLine;
use crate::math::flush_denormal;
use crate::params::DelayParams;

/// Longest supported delay in seconds.
///
/// Sized to cover the full free-mode range (8 × 0.25 s) and a whole note
/// at the default tempo (~1.71 s at 140 BPM). Longer requests — a whole
/// note at a slow host tempo, say — clamp to this.
pub const MAX_DELAY_SECS: f32 = 2.0;

/// Multi-channel feedback delay line.
///
/// Owns one [`DelayLine`] per audio channel. Each processed sample reads
/// the delayed value, writes back `input + delayed * feedback`, and
/// returns the delayed value as the wet output; the caller adds wet onto
/// dry. Channels never read each other's buffers.
///
/// # Example
///
/// ```rust
/// use ddelay_core::{DelayParams, FeedbackDelay, TimeMode, TimeSelector};
///
/// let mut delay = FeedbackDelay::new(1, 48000.0).unwrap();
/// let params = DelayParams {
///     feedback: 0.4,
///     time: TimeSelector::new(2),
///     mode: TimeMode::Free,
/// };
/// let wet = delay.process_sample(0, 1.0, &params);
/// assert_eq!(wet, 0.0); // nothing in the buffer yet
/// ```
#[derive(Debug, Clone)]
pub struct FeedbackDelay {
    sample_rate: f32,
    lines: Vec<DelayLine>,
    clamp_events: u32,
}

impl FeedbackDelay {
    /// Creates a delay configured for `channels` at `sample_rate` Hz.
    ///
    /// Equivalent to constructing and calling [`reinit`](Self::reinit)
    /// once.
    pub fn new(channels: usize, sample_rate: f32) -> Result<Self, ConfigError> {
        let mut delay = Self {
            sample_rate: 0.0,
            lines: Vec::new(),
            clamp_events: 0,
        };
        delay.reinit(channels, sample_rate)?;
        Ok(delay)
    }

    /// Reconfigures for a new channel count and sample rate.
    ///
    /// Call once before processing starts and again whenever the host
    /// reports a configuration change. Buffers are sized for
    /// [`MAX_DELAY_SECS`] at the new rate, cleared to silence, and the
    /// write cursors and diagnostics counter reset. Old buffers are
    /// replaced, never accumulated, so repeated calls are safe.
    ///
    /// Runs on the control thread; this is the only operation that
    /// allocates.
    pub fn reinit(&mut self, channels: usize, sample_rate: f32) -> Result<(), ConfigError> {
        if channels == 0 {
            return Err(ConfigError::InvalidChannelCount(channels));
        }
        if sample_rate <= 0.0 || !sample_rate.is_finite() {
            return Err(ConfigError::InvalidSampleRate(sample_rate));
        }

        // One guard sample past the maximum delay, so MAX_DELAY_SECS
        // itself stays representable after the read-position clamp.
        let capacity = ceilf(MAX_DELAY_SECS * sample_rate) as usize + 1;

        if self.lines.len() == channels && self.lines[0].capacity() == capacity {
            // Same shape as before: just wipe the history.
            for line in &mut self.lines {
                line.clear();
            }
        } else {
            self.lines.clear();
            self.lines.resize_with(channels, || DelayLine::new(capacity));
        }

        self.sample_rate = sample_rate;
        self.clamp_events = 0;

        #[cfg(feature = "tracing")]
        tracing::debug!(channels, sample_rate, capacity, "delay reinit");

        Ok(())
    }

    /// Processes one sample for one channel, returning the wet output.
    ///
    /// Reads the sample `delay` samples back (delay derived fresh from
    /// `params` and clamped to buffer capacity), writes
    /// `input + delayed * feedback` at the cursor, advances the cursor,
    /// and returns the delayed sample. The caller mixes `dry + wet`.
    ///
    /// Real-time safe: no allocation, locks, or panics in release
    /// builds. Out-of-domain feedback and over-capacity delay times are
    /// clamped and counted in [`clamp_events`](Self::clamp_events). An
    /// out-of-range channel index trips a `debug_assert`; in release it
    /// is counted and the call returns silence.
    #[inline]
    pub fn process_sample(&mut self, channel: usize, input: f32, params: &DelayParams) -> f32 {
        debug_assert!(
            channel < self.lines.len(),
            "channel {channel} out of range ({} configured)",
            self.lines.len()
        );
        if channel >= self.lines.len() {
            self.clamp_events = self.clamp_events.wrapping_add(1);
            return 0.0;
        }

        let feedback = params.feedback;
        if !(0.0..=1.0).contains(&feedback) {
            self.clamp_events = self.clamp_events.wrapping_add(1);
        }
        let feedback = feedback.clamp(0.0, 1.0);

        let line = &self.lines[channel];
        let max_delay = line.max_delay() as f32;
        let requested = params.delay_secs() * self.sample_rate;
        if requested > max_delay || requested < 1.0 {
            self.clamp_events = self.clamp_events.wrapping_add(1);
        }
        let delay_samples = requested.clamp(1.0, max_delay);

        let line = &mut self.lines[channel];
        let delayed = line.read(delay_samples);
        line.write(flush_denormal(input + delayed * feedback));
        delayed
    }

    /// Processes a block for one channel, writing wet output into `output`.
    ///
    /// # Panics
    ///
    /// Debug builds assert that `input` and `output` have equal length.
    pub fn process_block(
        &mut self,
        channel: usize,
        input: &[f32],
        output: &mut [f32],
        params: &DelayParams,
    ) {
        debug_assert_eq!(input.len(), output.len());
        for (inp, out) in input.iter().zip(output.iter_mut()) {
            *out = self.process_sample(channel, *inp, params);
        }
    }

    /// Processes a block for one channel in place with the effect's
    /// additive mix: each sample becomes `dry + wet`.
    ///
    /// There is no dry/wet crossfade; the echo sums onto the original
    /// signal.
    pub fn process_in_place(&mut self, channel: usize, buffer: &mut [f32], params: &DelayParams) {
        for sample in buffer.iter_mut() {
            *sample += self.process_sample(channel, *sample, params);
        }
    }

    /// Clears all channel buffers without reallocating.
    ///
    /// Use when playback stops or the effect is bypassed, to keep stale
    /// echoes from surfacing on resume.
    pub fn reset(&mut self) {
        for line in &mut self.lines {
            line.clear();
        }
    }

    /// Configured channel count.
    pub fn channels(&self) -> usize {
        self.lines.len()
    }

    /// Configured sample rate in Hz.
    pub fn sample_rate(&self) -> f32 {
        self.sample_rate
    }

    /// Longest representable delay in samples at the current rate.
    pub fn max_delay_samples(&self) -> usize {
        self.lines.first().map_or(0, DelayLine::max_delay)
    }

    /// Number of clamped or out-of-range inputs seen since the last
    /// [`reinit`](Self::reinit).
    ///
    /// Incremented on the audio thread without blocking; read it from a
    /// control thread between blocks to spot misbehaving hosts.
    pub fn clamp_events(&self) -> u32 {
        self.clamp_events
    }
}
