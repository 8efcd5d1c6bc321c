#![forbid(unsafe_code)]

//! Scale-with-fade strategy, the classic popup pop.

use scrim_core::{AnimationStrategy, Completion, ContentHandle, SurfaceContext, VisualState};

use crate::driver::animate;
use crate::easing::lerp;
use crate::timing::AnimationTiming;

/// Scales content up from a slightly shrunken state while fading it in, and
/// reverses on the way out.
#[derive(Debug, Clone, PartialEq)]
pub struct ScaleStrategy {
    timing: AnimationTiming,
    start_scale: f64,
}

impl Default for ScaleStrategy {
    fn default() -> Self {
        Self {
            timing: AnimationTiming::default(),
            start_scale: 0.92,
        }
    }
}

impl ScaleStrategy {
    /// Create the default scale strategy.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the timing configuration.
    pub fn timing(mut self, timing: AnimationTiming) -> Self {
        self.timing = timing;
        self
    }

    /// Set the scale the content starts (and ends) at.
    pub fn start_scale(mut self, scale: f64) -> Self {
        self.start_scale = scale.clamp(0.5, 1.0);
        self
    }

    fn hidden(&self) -> VisualState {
        VisualState {
            scale: self.start_scale,
            opacity: 0.0,
            ..VisualState::IDENTITY
        }
    }
}

impl AnimationStrategy for ScaleStrategy {
    fn prepare(&mut self, content: &ContentHandle, _ctx: &SurfaceContext) {
        content.set(self.hidden());
    }

    fn appear(&mut self, content: &ContentHandle, _ctx: &SurfaceContext) -> Completion {
        let content = content.clone();
        let start = self.start_scale;
        animate(
            self.timing.appear_duration,
            self.timing.appear_easing,
            move |p| {
                content.set(VisualState {
                    scale: lerp(start, 1.0, p),
                    opacity: lerp(0.0, 1.0, p),
                    ..VisualState::IDENTITY
                });
            },
        )
    }

    fn disappear(&mut self, content: &ContentHandle, _ctx: &SurfaceContext) -> Completion {
        let content = content.clone();
        let start = self.start_scale;
        animate(
            self.timing.disappear_duration,
            self.timing.disappear_easing,
            move |p| {
                content.set(VisualState {
                    scale: lerp(1.0, start, p),
                    opacity: lerp(1.0, 0.0, p),
                    ..VisualState::IDENTITY
                });
            },
        )
    }

    fn dispose(&mut self, content: &ContentHandle, _ctx: &SurfaceContext) {
        content.reset();
    }

    fn name(&self) -> &str {
        "scale"
    }
}
