#![forbid(unsafe_code)]

//! Easing curves for transition animations.
//!
//! A small, opinionated set. Entrances read best decelerating
//! ([`Easing::EaseOut`]), exits accelerating ([`Easing::EaseIn`]); the rest
//! cover general-purpose motion and one bouncy overshoot.
//!
//! # Invariants
//!
//! - Input progress is clamped to [0.0, 1.0] before the curve is applied
//! - Every curve maps 0.0 to 0.0 and 1.0 to 1.0
//! - Only [`Easing::Back`] can leave the [0.0, 1.0] range in between

/// Easing function applied to linear animation progress.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Easing {
    /// Linear interpolation.
    Linear,
    /// Smooth ease-out (decelerating) - good for entrances.
    #[default]
    EaseOut,
    /// Smooth ease-in (accelerating) - good for exits.
    EaseIn,
    /// Smooth S-curve - good for general transitions.
    EaseInOut,
    /// Slight overshoot then settle - bouncy feel.
    Back,
}

impl Easing {
    /// Apply the easing function to a progress value (0.0 to 1.0).
    pub fn apply(self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Self::Linear => t,
            Self::EaseOut => {
                let inv = 1.0 - t;
                1.0 - inv * inv * inv
            }
            Self::EaseIn => t * t * t,
            Self::EaseInOut => {
                if t < 0.5 {
                    4.0 * t * t * t
                } else {
                    let inv = -2.0 * t + 2.0;
                    1.0 - inv * inv * inv / 2.0
                }
            }
            Self::Back => {
                // Back ease-out: slight overshoot then settle
                let c1 = 1.70158;
                let c3 = c1 + 1.0;
                let t_minus_1 = t - 1.0;
                1.0 + c3 * t_minus_1 * t_minus_1 * t_minus_1 + c1 * t_minus_1 * t_minus_1
            }
        }
    }

    /// Check if this easing can produce values outside 0.0-1.0.
    pub fn can_overshoot(self) -> bool {
        matches!(self, Self::Back)
    }
}

/// Linearly interpolate between two values at an eased progress.
#[inline]
pub fn lerp(from: f64, to: f64, progress: f64) -> f64 {
    from + (to - from) * progress
}
