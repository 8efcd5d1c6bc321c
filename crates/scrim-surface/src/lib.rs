#![forbid(unsafe_code)]

//! Surface lifecycle: the popup surface, its hooks, and its transitions.
//!
//! # Role in Scrim
//! `scrim-surface` owns [`PopupSurface`], the type everything else in the
//! system revolves around. A surface is configured, arranged into bounds,
//! presented through its appearing transition, and eventually dismissed
//! through its disappearing transition.
//!
//! # Primary responsibilities
//! - **Transitions**: the five-step appearing/disappearing sequence (sync
//!   begin hooks, async begin hooks, animation, sync end hooks, async end
//!   hooks) with its failure and re-entrancy rules.
//! - **Hooks**: the ordered [`LifecycleHook`] list and the stage taxonomy
//!   errors report.
//! - **Layout**: padding-aware content bounds and the invalidation rules
//!   around the padding setters.
//! - **Background taps**: the always-fire notifier, the dismissal decision,
//!   and the removal request to the navigation host.
//!
//! # How it fits in the system
//! `scrim-nav` stacks surfaces and drives these transitions; animation
//! strategies from `scrim-animations` (or user code) plug in through
//! [`scrim_core::AnimationStrategy`]. This crate never talks to a renderer;
//! it publishes visual state through the surface's
//! [`ContentHandle`](scrim_core::ContentHandle) and leaves drawing to the
//! embedder.

pub mod error;
pub mod hooks;
pub mod notifier;
pub mod surface;

pub use error::TransitionError;
pub use hooks::{HookError, HookStage, LifecycleHook};
pub use notifier::{Notifier, Subscription};
pub use surface::{DismissPolicy, PopupSurface, SurfaceConfig, TapResponse, TransitionKind};
