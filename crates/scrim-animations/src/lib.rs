#![forbid(unsafe_code)]

//! Animations: easing curves, timing presets, and built-in strategies.
//!
//! # Role in Scrim
//! `scrim-animations` supplies ready-made implementations of
//! [`AnimationStrategy`](scrim_core::AnimationStrategy) so most surfaces
//! never write one by hand.
//!
//! # Primary responsibilities
//! - **Easing**: the curve set transitions interpolate through.
//! - **Timing**: per-surface durations and curve selection with popup-feel
//!   defaults.
//! - **Driver**: the worker-thread frame loop all built-in strategies share.
//! - **Strategies**: [`ScaleStrategy`] (the classic pop), [`FadeStrategy`]
//!   (reduced motion), and [`SlideStrategy`] (edge entrances).
//!
//! # How it fits in the system
//! A strategy is handed to a surface at configuration time; the surface's
//! transition sequencer calls it and blocks on the returned completion. The
//! driver settles that completion from its worker thread, so the sequencer
//! never owns a frame loop.

pub mod driver;
pub mod easing;
pub mod fade;
pub mod scale;
pub mod slide;
pub mod timing;

pub use easing::Easing;
pub use fade::FadeStrategy;
pub use scale::ScaleStrategy;
pub use slide::{SlideFrom, SlideStrategy};
pub use timing::AnimationTiming;
