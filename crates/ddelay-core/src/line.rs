//! Single-channel circular delay buffer.
//!
//! [`DelayLine`] is the storage primitive underneath [`FeedbackDelay`]:
//! a fixed-capacity ring of samples with a write cursor that wraps. Reads
//! are expressed as "n samples ago" relative to the *next* write, so the
//! read-then-write order of a feedback loop lines up with the delay length:
//! an impulse written on call 0 is read back exactly `n` calls later with
//! `read(n)`.
//!
//! Fractional delays are supported via linear interpolation between the
//! two neighboring samples, which keeps tempo-synced delay times (rarely
//! an integer number of samples) free of truncation jitter. Integer delay
//! requests return the stored sample bit-exactly.
//!
//! [`FeedbackDelay`]: crate::delay::FeedbackDelay

#[cfg(not(feature = "std"))]
extern crate alloc;

#[cfg(feature = "std")]
extern crate std as alloc;

use alloc::vec;
use alloc::vec::Vec;

/// Circular sample buffer for one audio channel.
///
/// The buffer is heap-allocated once at construction and never reallocates;
/// no allocation occurs during audio processing.
///
/// # Example
///
/// ```rust
/// use ddelay_core::DelayLine;
///
/// let mut line = DelayLine::new(64);
/// line.write(1.0);
/// for _ in 0..9 {
///     line.write(0.0);
/// }
/// // The impulse now sits 10 samples in the past.
/// assert_eq!(line.read(10.0), 1.0);
/// ```
#[derive(Debug, Clone)]
pub struct DelayLine {
    buffer: Vec<f32>,
    write_pos: usize,
}

impl DelayLine {
    /// Creates a delay line holding `capacity` samples.
    ///
    /// The longest usable delay is `capacity - 1` samples: a delay of
    /// `capacity` would read the slot the next write is about to replace.
    ///
    /// # Panics
    ///
    /// Panics if `capacity < 2`.
    pub fn new(capacity: usize) -> Self {
        assert!(capacity >= 2, "delay line needs at least 2 samples");
        Self {
            buffer: vec![0.0; capacity],
            write_pos: 0,
        }
    }

    /// Reads the sample written `delay_samples` calls ago, counting the
    /// upcoming [`write`](Self::write) as call zero.
    ///
    /// `delay_samples` may be fractional; the result is linearly
    /// interpolated between the two bracketing samples. The value is
    /// clamped to `[1, capacity - 1]` so reads can never outrun the
    /// written history.
    #[inline]
    pub fn read(&self, delay_samples: f32) -> f32 {
        let len = self.buffer.len();
        let clamped = delay_samples.clamp(1.0, (len - 1) as f32);

        let whole = clamped as usize;
        let frac = clamped - whole as f32;

        // Sample written `whole` calls ago lives at write_pos - whole.
        let near = self.buffer[(self.write_pos + len - whole) % len];
        if frac == 0.0 {
            return near;
        }
        let far = self.buffer[(self.write_pos + len - whole - 1) % len];
        near + (far - near) * frac
    }

    /// Stores a sample at the write cursor and advances it, wrapping at
    /// the end of the buffer.
    #[inline]
    pub fn write(&mut self, sample: f32) {
        self.buffer[self.write_pos] = sample;
        self.write_pos = (self.write_pos + 1) % self.buffer.len();
    }

    /// Resets every stored sample to silence and the cursor to the start.
    pub fn clear(&mut self) {
        self.buffer.fill(0.0);
        self.write_pos = 0;
    }

    /// Buffer capacity in samples.
    pub fn capacity(&self) -> usize {
        self.buffer.len()
    }

    /// Longest usable delay in samples (`capacity - 1`).
    pub fn max_delay(&self) -> usize {
        self.buffer.len() - 1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn impulse_returns_after_exact_delay() {
        let mut line = DelayLine::new(32);
        for t in 0..20 {
            let out = line.read(7.0);
            if t == 7 {
                assert_eq!(out, 1.0, "impulse expected at call 7");
            } else {
                assert_eq!(out, 0.0, "unexpected output at call {t}");
            }
            line.write(if t == 0 { 1.0 } else { 0.0 });
        }
    }

    #[test]
    fn delay_of_one_is_previous_write() {
        let mut line = DelayLine::new(8);
        line.write(0.25);
        assert_eq!(line.read(1.0), 0.25);
        line.write(0.5);
        assert_eq!(line.read(1.0), 0.5);
        assert_eq!(line.read(2.0), 0.25);
    }

    #[test]
    fn fractional_read_interpolates() {
        let mut line = DelayLine::new(16);
        // Ramp: 0, 1, 2, 3
        for i in 0..4 {
            line.write(i as f32);
        }
        // 1.5 samples ago sits halfway between 3 (one ago) and 2 (two ago).
        let out = line.read(1.5);
        assert!((out - 2.5).abs() < 1e-6, "expected 2.5, got {out}");
    }

    #[test]
    fn read_wraps_across_buffer_end() {
        let mut line = DelayLine::new(4);
        for i in 0..6 {
            line.write(i as f32);
        }
        // Last three writes were 3, 4, 5; write_pos wrapped twice.
        assert_eq!(line.read(1.0), 5.0);
        assert_eq!(line.read(2.0), 4.0);
        assert_eq!(line.read(3.0), 3.0);
    }

    #[test]
    fn read_clamps_to_history() {
        let mut line = DelayLine::new(8);
        line.write(1.0);
        // Requests beyond capacity-1 clamp instead of wrapping into the
        // slot about to be overwritten.
        assert_eq!(line.read(100.0), line.read(7.0));
        // Sub-sample requests clamp up to one full sample.
        assert_eq!(line.read(0.0), line.read(1.0));
    }

    #[test]
    fn clear_silences_buffer() {
        let mut line = DelayLine::new(8);
        for _ in 0..8 {
            line.write(0.9);
        }
        line.clear();
        for d in 1..8 {
            assert_eq!(line.read(d as f32), 0.0);
        }
    }

    #[test]
    #[should_panic]
    fn capacity_below_two_panics() {
        let _ = DelayLine::new(1);
    }
}
