//! Error types for delay configuration.

/// Rejected configuration passed to [`reinit`](crate::FeedbackDelay::reinit).
///
/// Configuration errors surface synchronously on the control thread;
/// the per-sample path never produces errors, it clamps and counts.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ConfigError {
    /// Channel count must be at least 1.
    InvalidChannelCount(usize),
    /// Sample rate must be finite and greater than zero.
    InvalidSampleRate(f32),
}

impl core::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::InvalidChannelCount(n) => write!(f, "invalid channel count {n}, need >= 1"),
            Self::InvalidSampleRate(sr) => write!(f, "invalid sample rate {sr} Hz, need > 0"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ConfigError {}
