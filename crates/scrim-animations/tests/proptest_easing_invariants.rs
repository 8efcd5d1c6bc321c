//! Property-based tests for easing curves and interpolation.
//!
//! These tests verify the motion contract:
//!
//! 1. **Clamped input** — progress outside [0.0, 1.0] behaves exactly like
//!    the nearest endpoint.
//!
//! 2. **Bounded output** — every curve except [`Easing::Back`] stays inside
//!    [0.0, 1.0]; `Back` may overshoot, but only up to its fixed bounce.
//!
//! 3. **Monotonic motion** — sampled on an integer grid (so rounding cannot
//!    flip a comparison), every non-overshooting curve is nondecreasing.
//!
//! 4. **Interpolation arithmetic** — `lerp` hits its endpoints exactly and
//!    never leaves the interval for in-range progress. Endpoint inputs are
//!    integer-valued `f64`s so the assertions can use `==`.

use proptest::prelude::*;
use scrim_animations::easing::lerp;
use scrim_animations::Easing;

// ── Strategies ──────────────────────────────────────────────────────────

const CURVES: [Easing; 5] = [
    Easing::Linear,
    Easing::EaseOut,
    Easing::EaseIn,
    Easing::EaseInOut,
    Easing::Back,
];

const SMOOTH: [Easing; 4] = [
    Easing::Linear,
    Easing::EaseOut,
    Easing::EaseIn,
    Easing::EaseInOut,
];

fn curve() -> impl Strategy<Value = Easing> {
    (0usize..CURVES.len()).prop_map(|i| CURVES[i])
}

fn smooth_curve() -> impl Strategy<Value = Easing> {
    (0usize..SMOOTH.len()).prop_map(|i| SMOOTH[i])
}

fn coordinate() -> impl Strategy<Value = f64> {
    (-2000i32..2000).prop_map(f64::from)
}

// ═════════════════════════════════════════════════════════════════════════
// 1. Clamped input
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn input_below_zero_matches_the_start(e in curve(), t in -100.0f64..0.0) {
        prop_assert_eq!(e.apply(t), e.apply(0.0));
    }

    #[test]
    fn input_above_one_matches_the_end(e in curve(), t in 1.0f64..100.0) {
        prop_assert_eq!(e.apply(t), e.apply(1.0));
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 2. Bounded output
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn smooth_curves_stay_in_range(e in smooth_curve(), t in 0.0f64..=1.0) {
        let v = e.apply(t);
        prop_assert!((0.0..=1.0).contains(&v), "{:?} left the range at {}: {}", e, t, v);
    }

    #[test]
    fn back_overshoot_is_bounded(t in 0.0f64..=1.0) {
        // The bounce peaks just under 1.1; endpoints are exact only up to
        // rounding.
        let v = Easing::Back.apply(t);
        prop_assert!(v > -1e-9 && v < 1.11, "Back out of bounds at {}: {}", t, v);
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 3. Monotonic motion
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn smooth_curves_are_nondecreasing(
        e in smooth_curve(),
        a in 0u32..=1000,
        b in 0u32..=1000,
    ) {
        let lo = f64::from(a.min(b)) / 1000.0;
        let hi = f64::from(a.max(b)) / 1000.0;
        prop_assert!(e.apply(lo) <= e.apply(hi));
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 4. Interpolation arithmetic
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn lerp_hits_the_endpoints(a in coordinate(), b in coordinate()) {
        prop_assert_eq!(lerp(a, b, 0.0), a);
        prop_assert_eq!(lerp(a, b, 1.0), b);
    }

    #[test]
    fn lerp_stays_between_its_endpoints(
        a in coordinate(),
        b in coordinate(),
        t in 0.0f64..=1.0,
    ) {
        let v = lerp(a, b, t);
        prop_assert!((a.min(b)..=a.max(b)).contains(&v));
    }

    #[test]
    fn lerp_midpoint_is_the_average(a in coordinate(), b in coordinate()) {
        prop_assert_eq!(lerp(a, b, 0.5), (a + b) / 2.0);
    }
}
