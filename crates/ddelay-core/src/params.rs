//! Live parameters and parameter metadata for the feedback delay.
//!
//! The effect exposes exactly three host-automatable parameters: a
//! sync-mode toggle, an eight-step delay time selector, and a feedback
//! amount. [`DelayParams`] carries the
//! live values into every [`process_sample`] call; [`param_descriptors`]
//! describes the same three parameters for introspection (CLI listing,
//! host registration, controller mapping).
//!
//! [`process_sample`]: crate::FeedbackDelay::process_sample

use crate::tempo::{DEFAULT_TEMPO_BPM, NoteDivision};

/// Free-mode seconds per selector step.
///
/// In free-running mode the selector maps linearly onto time:
/// `k` steps = `k * 0.25` seconds, so the full 1..=8 range spans
/// 0.25 s to 2.0 s. The mapping is monotonic by construction.
pub const FREE_STEP_SECS: f32 = 0.25;

/// Eight-step delay time selector, the effect's "Time" control.
///
/// Valid values are 1..=8; the constructor clamps anything else. The
/// selector means different things per [`TimeMode`]: a note division
/// index when synced, a multiple of [`FREE_STEP_SECS`] when free. Both
/// interpretations grow monotonically with the selector value.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TimeSelector(u8);

impl TimeSelector {
    /// Smallest selector step.
    pub const MIN: u8 = 1;
    /// Largest selector step.
    pub const MAX: u8 = 8;

    /// Creates a selector, clamping `steps` into 1..=8.
    pub fn new(steps: u8) -> Self {
        Self(steps.clamp(Self::MIN, Self::MAX))
    }

    /// Raw selector value in 1..=8.
    pub fn get(self) -> u8 {
        self.0
    }

    /// Note division this selector picks in synced mode, shortest first.
    pub fn division(self) -> NoteDivision {
        match self.0 {
            1 => NoteDivision::ThirtySecond,
            2 => NoteDivision::Sixteenth,
            3 => NoteDivision::Eighth,
            4 => NoteDivision::Quarter,
            5 => NoteDivision::DottedQuarter,
            6 => NoteDivision::Half,
            7 => NoteDivision::DottedHalf,
            _ => NoteDivision::Whole,
        }
    }

    /// Duration in seconds this selector picks in free mode.
    pub fn free_secs(self) -> f32 {
        f32::from(self.0) * FREE_STEP_SECS
    }
}

impl Default for TimeSelector {
    /// Selector step 4: a quarter note when synced, one second when free.
    fn default() -> Self {
        Self(4)
    }
}

/// How the time selector is interpreted.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum TimeMode {
    /// Selector is a multiple of [`FREE_STEP_SECS`].
    Free,
    /// Selector is a note division at the given tempo.
    Synced {
        /// Tempo in beats per minute.
        bpm: f32,
    },
}

impl Default for TimeMode {
    fn default() -> Self {
        TimeMode::Synced {
            bpm: DEFAULT_TEMPO_BPM,
        }
    }
}

/// Live parameter values, read fresh on every processed sample.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DelayParams {
    /// Fraction of the delayed signal fed back into the buffer, 0..=1.
    pub feedback: f32,
    /// Delay time selector.
    pub time: TimeSelector,
    /// Tempo-synced or free-running time interpretation.
    pub mode: TimeMode,
}

impl Default for DelayParams {
    /// Feedback 0.5, time 4, sync enabled at the default tempo.
    fn default() -> Self {
        Self {
            feedback: 0.5,
            time: TimeSelector::default(),
            mode: TimeMode::default(),
        }
    }
}

impl DelayParams {
    /// Effective delay duration in seconds under the current mode.
    pub fn delay_secs(&self) -> f32 {
        match self.mode {
            TimeMode::Free => self.time.free_secs(),
            TimeMode::Synced { bpm } => self.time.division().to_secs(bpm),
        }
    }
}

/// Display unit for a parameter descriptor.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ParamUnit {
    /// On/off toggle.
    Toggle,
    /// Integer steps.
    Steps,
    /// Percentage, 0-100.
    Percent,
}

/// Static metadata for one automatable parameter.
#[derive(Clone, Copy, Debug)]
pub struct ParamDescriptor {
    /// Full display name.
    pub name: &'static str,
    /// Abbreviated name for small surfaces.
    pub short_name: &'static str,
    /// Display unit.
    pub unit: ParamUnit,
    /// Minimum plain value.
    pub min: f32,
    /// Maximum plain value.
    pub max: f32,
    /// Default plain value.
    pub default: f32,
}

/// Descriptors for the effect's three parameters, in layout order.
pub fn param_descriptors() -> [ParamDescriptor; 3] {
    [
        ParamDescriptor {
            name: "Timed",
            short_name: "BPM",
            unit: ParamUnit::Toggle,
            min: 0.0,
            max: 1.0,
            default: 1.0,
        },
        ParamDescriptor {
            name: "Delay Time",
            short_name: "Time",
            unit: ParamUnit::Steps,
            min: 1.0,
            max: 8.0,
            default: 4.0,
        },
        ParamDescriptor {
            name: "Feedback",
            short_name: "Feedback",
            unit: ParamUnit::Percent,
            min: 0.0,
            max: 100.0,
            default: 50.0,
        },
    ]
}
