//! Property-based tests for the feedback delay.
//!
//! Uses proptest to verify the invariants that must hold for *any* valid
//! parameter values: finite output, channel isolation, deterministic
//! replay, and clean state after reinit.

use ddelay_core::{DelayParams, FeedbackDelay, TimeMode, TimeSelector};
use proptest::prelude::*;

const SAMPLE_RATE: f32 = 48000.0;

fn arb_params() -> impl Strategy<Value = DelayParams> {
    (
        0.0f32..=1.0,
        1u8..=8,
        prop_oneof![
            Just(TimeMode::Free),
            (40.0f32..=240.0).prop_map(|bpm| TimeMode::Synced { bpm }),
        ],
    )
        .prop_map(|(feedback, steps, mode)| DelayParams {
            feedback,
            time: TimeSelector::new(steps),
            mode,
        })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    /// Finite input and valid parameters never produce NaN or infinity,
    /// even with full feedback.
    #[test]
    fn output_is_finite(
        input in prop::collection::vec(-1.0f32..=1.0, 256),
        params in arb_params(),
    ) {
        let mut delay = FeedbackDelay::new(1, SAMPLE_RATE).unwrap();
        for &sample in &input {
            let wet = delay.process_sample(0, sample, &params);
            prop_assert!(wet.is_finite(), "non-finite wet output {wet}");
        }
    }

    /// With feedback at most 1 the loop cannot grow a bounded input
    /// without bound over a short run.
    #[test]
    fn short_runs_stay_bounded(
        input in prop::collection::vec(-1.0f32..=1.0, 512),
        params in arb_params(),
    ) {
        let mut delay = FeedbackDelay::new(1, SAMPLE_RATE).unwrap();
        for &sample in &input {
            let wet = delay.process_sample(0, sample, &params);
            // 512 samples is at most one buffer revolution: a unity
            // feedback loop can sum at most a handful of passes.
            prop_assert!(wet.abs() <= 64.0, "runaway output {wet}");
        }
    }

    /// Channel 0's output does not depend on what channel 1 receives.
    #[test]
    fn channel_isolation(
        shared in prop::collection::vec(-1.0f32..=1.0, 256),
        other in prop::collection::vec(-1.0f32..=1.0, 256),
        params in arb_params(),
    ) {
        let mut quiet = FeedbackDelay::new(2, SAMPLE_RATE).unwrap();
        let mut noisy = FeedbackDelay::new(2, SAMPLE_RATE).unwrap();

        for (&a, &b) in shared.iter().zip(other.iter()) {
            let lhs = quiet.process_sample(0, a, &params);
            let rhs = noisy.process_sample(0, a, &params);
            noisy.process_sample(1, b, &params);
            prop_assert_eq!(lhs.to_bits(), rhs.to_bits());
        }
    }

    /// Replaying the same call sequence on a fresh instance reproduces
    /// the output bit for bit.
    #[test]
    fn replay_is_deterministic(
        input in prop::collection::vec(-1.0f32..=1.0, 256),
        params in arb_params(),
    ) {
        let mut first = FeedbackDelay::new(1, SAMPLE_RATE).unwrap();
        let mut second = FeedbackDelay::new(1, SAMPLE_RATE).unwrap();
        for &sample in &input {
            let a = first.process_sample(0, sample, &params);
            let b = second.process_sample(0, sample, &params);
            prop_assert_eq!(a.to_bits(), b.to_bits());
        }
    }

    /// After reinit with the same configuration, the instance behaves
    /// like a freshly constructed one.
    #[test]
    fn reinit_matches_fresh_instance(
        noise in prop::collection::vec(-1.0f32..=1.0, 256),
        probe in prop::collection::vec(-1.0f32..=1.0, 256),
        params in arb_params(),
    ) {
        let mut reused = FeedbackDelay::new(1, SAMPLE_RATE).unwrap();
        for &sample in &noise {
            reused.process_sample(0, sample, &params);
        }
        reused.reinit(1, SAMPLE_RATE).unwrap();

        let mut fresh = FeedbackDelay::new(1, SAMPLE_RATE).unwrap();
        for &sample in &probe {
            let a = reused.process_sample(0, sample, &params);
            let b = fresh.process_sample(0, sample, &params);
            prop_assert_eq!(a.to_bits(), b.to_bits());
        }
    }
}
