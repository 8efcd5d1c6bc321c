#![forbid(unsafe_code)]

//! Timing configuration shared by the built-in animation strategies.

use std::time::Duration;

use crate::easing::Easing;

/// Durations and easing curves for one surface's transitions.
///
/// Defaults follow the usual popup feel: a 200ms decelerating entrance and a
/// slightly quicker 150ms accelerating exit.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AnimationTiming {
    /// Duration of the appearing transition.
    pub appear_duration: Duration,
    /// Duration of the disappearing transition.
    pub disappear_duration: Duration,
    /// Easing function for the appearing transition.
    pub appear_easing: Easing,
    /// Easing function for the disappearing transition.
    pub disappear_easing: Easing,
}

impl Default for AnimationTiming {
    fn default() -> Self {
        Self {
            appear_duration: Duration::from_millis(200),
            disappear_duration: Duration::from_millis(150),
            appear_easing: Easing::EaseOut,
            disappear_easing: Easing::EaseIn,
        }
    }
}

impl AnimationTiming {
    /// Create the default timing.
    pub fn new() -> Self {
        Self::default()
    }

    /// Zero-duration timing. Transitions jump straight to their end state.
    pub fn none() -> Self {
        Self {
            appear_duration: Duration::ZERO,
            disappear_duration: Duration::ZERO,
            appear_easing: Easing::Linear,
            disappear_easing: Easing::Linear,
        }
    }

    /// Set the appearing duration.
    pub fn appear_duration(mut self, duration: Duration) -> Self {
        self.appear_duration = duration;
        self
    }

    /// Set the disappearing duration.
    pub fn disappear_duration(mut self, duration: Duration) -> Self {
        self.disappear_duration = duration;
        self
    }

    /// Set the appearing easing function.
    pub fn appear_easing(mut self, easing: Easing) -> Self {
        self.appear_easing = easing;
        self
    }

    /// Set the disappearing easing function.
    pub fn disappear_easing(mut self, easing: Easing) -> Self {
        self.disappear_easing = easing;
        self
    }

    /// Check if both transitions complete instantly.
    pub fn is_instant(&self) -> bool {
        self.appear_duration.is_zero() && self.disappear_duration.is_zero()
    }
}
