//! Musical timing for tempo-synced delay lengths.
//!
//! Converts note subdivisions into durations at a given tempo. The delay
//! only needs the eight divisions its time selector can reach, ordered
//! from shortest to longest so the selector mapping stays monotonic.

/// Tempo used when the host supplies none.
///
/// Hosts with a transport should pass their own tempo through
/// [`TimeMode::Synced`](crate::TimeMode::Synced) instead.
pub const DEFAULT_TEMPO_BPM: f32 = 140.0;

/// Musical note divisions reachable by the delay time selector.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum NoteDivision {
    /// Thirty-second note (1/8 beat)
    ThirtySecond,
    /// Sixteenth note (1/4 beat)
    Sixteenth,
    /// Eighth note (1/2 beat)
    Eighth,
    /// Quarter note (1 beat)
    #[default]
    Quarter,
    /// Dotted quarter note (1.5 beats)
    DottedQuarter,
    /// Half note (2 beats)
    Half,
    /// Dotted half note (3 beats)
    DottedHalf,
    /// Whole note (4 beats)
    Whole,
}

impl NoteDivision {
    /// Number of beats this division spans.
    pub fn beats(self) -> f32 {
        match self {
            NoteDivision::ThirtySecond => 0.125,
            NoteDivision::Sixteenth => 0.25,
            NoteDivision::Eighth => 0.5,
            NoteDivision::Quarter => 1.0,
            NoteDivision::DottedQuarter => 1.5,
            NoteDivision::Half => 2.0,
            NoteDivision::DottedHalf => 3.0,
            NoteDivision::Whole => 4.0,
        }
    }

    /// Duration in seconds at the given tempo.
    ///
    /// Tempo is floored at 1 BPM so a degenerate host value cannot
    /// produce an infinite duration.
    pub fn to_secs(self, bpm: f32) -> f32 {
        self.beats() * 60.0 / bpm.max(1.0)
    }

    /// Duration in samples at the given tempo and sample rate.
    pub fn to_samples(self, bpm: f32, sample_rate: f32) -> f32 {
        self.to_secs(bpm) * sample_rate
    }

    /// Display label, e.g. `"1/4"` or `"1/4."`.
    pub fn label(self) -> &'static str {
        match self {
            NoteDivision::ThirtySecond => "1/32",
            NoteDivision::Sixteenth => "1/16",
            NoteDivision::Eighth => "1/8",
            NoteDivision::Quarter => "1/4",
            NoteDivision::DottedQuarter => "1/4.",
            NoteDivision::Half => "1/2",
            NoteDivision::DottedHalf => "1/2.",
            NoteDivision::Whole => "1/1",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quarter_note_duration() {
        // At 120 BPM a quarter note is exactly half a second.
        assert!((NoteDivision::Quarter.to_secs(120.0) - 0.5).abs() < 1e-6);
        // At the default 140 BPM it's 60/140 seconds.
        let secs = NoteDivision::Quarter.to_secs(DEFAULT_TEMPO_BPM);
        assert!((secs - 60.0 / 140.0).abs() < 1e-6);
    }

    #[test]
    fn divisions_are_ordered() {
        let all = [
            NoteDivision::ThirtySecond,
            NoteDivision::Sixteenth,
            NoteDivision::Eighth,
            NoteDivision::Quarter,
            NoteDivision::DottedQuarter,
            NoteDivision::Half,
            NoteDivision::DottedHalf,
            NoteDivision::Whole,
        ];
        for pair in all.windows(2) {
            assert!(
                pair[0].beats() < pair[1].beats(),
                "{} should be shorter than {}",
                pair[0].label(),
                pair[1].label()
            );
        }
    }

    #[test]
    fn dotted_divisions() {
        // Dotted half = 3 beats = 1.5s at 120 BPM.
        assert!((NoteDivision::DottedHalf.to_secs(120.0) - 1.5).abs() < 1e-6);
        assert!((NoteDivision::DottedQuarter.beats() - 1.5).abs() < 1e-6);
    }

    #[test]
    fn to_samples_scales_with_rate() {
        // Whole note at 120 BPM = 2s = 96000 samples at 48kHz.
        let samples = NoteDivision::Whole.to_samples(120.0, 48000.0);
        assert!((samples - 96000.0).abs() < 0.5);
    }

    #[test]
    fn degenerate_tempo_is_floored() {
        let secs = NoteDivision::Quarter.to_secs(0.0);
        assert!(secs.is_finite());
        assert!((secs - 60.0).abs() < 1e-3);
    }
}
