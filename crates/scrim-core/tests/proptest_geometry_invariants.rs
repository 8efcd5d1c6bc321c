//! Property-based tests for inset arithmetic on [`Bounds`] and [`Insets`].
//!
//! These tests verify the layout contract:
//!
//! 1. **Exact arithmetic** — `inset` moves the origin by exactly
//!    (left, top) and shrinks each dimension by exactly the opposing pair's
//!    sum. No rounding, no clamping.
//!
//! 2. **Negatives pass through** — oversized insets produce negative
//!    dimensions rather than being clipped to zero; degenerate boxes are the
//!    caller's to detect.
//!
//! 3. **Identity and inversion** — zero insets are a no-op, and negating an
//!    inset undoes it.
//!
//! 4. **Composition** — applying two insets in sequence equals applying
//!    their sum.
//!
//! Inputs are integer-valued `f64`s so every operation is exact and the
//! assertions can use `==` without an epsilon.

use proptest::prelude::*;
use scrim_core::{Bounds, Insets};

// ── Strategies ──────────────────────────────────────────────────────────

fn bounds() -> impl Strategy<Value = Bounds> {
    (
        -2000i32..2000,
        -2000i32..2000,
        0i32..4000,
        0i32..4000,
    )
        .prop_map(|(x, y, w, h)| Bounds::new(x as f64, y as f64, w as f64, h as f64))
}

fn insets() -> impl Strategy<Value = Insets> {
    (-500i32..500, -500i32..500, -500i32..500, -500i32..500)
        .prop_map(|(t, r, b, l)| Insets::new(t as f64, r as f64, b as f64, l as f64))
}

// ═════════════════════════════════════════════════════════════════════════
// 1. Exact arithmetic
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn inset_applies_exact_arithmetic(b in bounds(), i in insets()) {
        let r = b.inset(i);
        prop_assert_eq!(r.x, b.x + i.left);
        prop_assert_eq!(r.y, b.y + i.top);
        prop_assert_eq!(r.width, b.width - (i.left + i.right));
        prop_assert_eq!(r.height, b.height - (i.top + i.bottom));
    }

    #[test]
    fn inset_never_clamps(b in bounds(), extra in 1i32..1000) {
        // Insets guaranteed to exceed the box dimensions.
        let overshoot = Insets::all(b.width.max(b.height) + extra as f64);
        let r = b.inset(overshoot);
        prop_assert!(r.width < 0.0);
        prop_assert!(r.height < 0.0);
        prop_assert!(r.is_degenerate());
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 2. Identity and inversion
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn zero_insets_are_identity(b in bounds()) {
        prop_assert_eq!(b.inset(Insets::ZERO), b);
    }

    #[test]
    fn negated_insets_invert(b in bounds(), i in insets()) {
        let inverse = Insets::new(-i.top, -i.right, -i.bottom, -i.left);
        prop_assert_eq!(b.inset(i).inset(inverse), b);
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 3. Composition
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn sequential_insets_compose_additively(b in bounds(), a in insets(), c in insets()) {
        let combined = Insets::new(
            a.top + c.top,
            a.right + c.right,
            a.bottom + c.bottom,
            a.left + c.left,
        );
        prop_assert_eq!(b.inset(a).inset(c), b.inset(combined));
    }

    #[test]
    fn sums_match_the_fields(i in insets()) {
        prop_assert_eq!(i.horizontal_sum(), i.left + i.right);
        prop_assert_eq!(i.vertical_sum(), i.top + i.bottom);
    }
}
