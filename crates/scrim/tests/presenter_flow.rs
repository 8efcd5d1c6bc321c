#![forbid(unsafe_code)]

//! Facade-level test driving everything through the `scrim` crate alone.
//!
//! Covers:
//! 1. The prelude carries a full present/dismiss session
//! 2. Unified errors keep the cause and name a recovery action
//! 3. A vetoed dismissal maps to `KeepPresented` and leaves the stack intact
//! 4. Tap outcomes settle their completion through the presenter
//! 5. Resize reaches every presented surface
//!
//! Run:
//!   cargo test -p scrim --test presenter_flow

use std::time::Duration;

use scrim::{
    AnimationTiming, Bounds, HookError, LifecycleHook, PopupSurface, Presenter, RecoveryAction,
    SurfaceConfig, TapOutcome,
};

fn screen() -> Bounds {
    Bounds::new(0.0, 0.0, 400.0, 800.0)
}

fn short() -> AnimationTiming {
    AnimationTiming::new()
        .appear_duration(Duration::from_millis(25))
        .disappear_duration(Duration::from_millis(25))
}

struct Veto;

impl LifecycleHook for Veto {
    fn on_disappearing_begin(
        &mut self,
        _surface: &mut PopupSurface,
    ) -> Result<(), HookError> {
        Err(HookError::new("unsaved changes"))
    }
}

#[test]
fn prelude_drives_a_full_session() {
    use scrim::prelude::*;

    let mut presenter = Presenter::new(screen());
    presenter
        .present(PopupSurface::new(
            SurfaceConfig::new().animation(ScaleStrategy::new().timing(short())),
        ))
        .unwrap();
    presenter
        .present(PopupSurface::new(
            SurfaceConfig::new().animation(FadeStrategy::new().timing(short())),
        ))
        .unwrap();
    assert_eq!(presenter.depth(), 2);

    assert_eq!(presenter.dismiss_all().unwrap(), 2);
    assert!(presenter.is_empty());
}

#[test]
fn errors_name_their_subsystem_and_recovery() {
    let mut presenter = Presenter::new(screen());

    let err = presenter.dismiss_top().unwrap_err();
    assert_eq!(err.error_type(), "stack");
    assert_eq!(err.recovery(), RecoveryAction::DropRequest);
    assert_eq!(err.to_string(), "the popup stack is empty");
}

#[test]
fn vetoed_dismissal_keeps_the_surface() {
    let mut presenter = Presenter::new(screen());
    let id = presenter
        .present(PopupSurface::new(
            SurfaceConfig::new().animated(false).hook(Veto),
        ))
        .unwrap();

    let err = presenter.dismiss(id).unwrap_err();
    assert_eq!(err.recovery(), RecoveryAction::KeepPresented);
    assert!(format!("{err}").contains("unsaved changes"));
    assert_eq!(presenter.depth(), 1);
}

#[test]
fn tap_outcome_settles_through_the_presenter() {
    let mut presenter = Presenter::new(screen());
    let id = presenter
        .present(PopupSurface::new(SurfaceConfig::new().animated(false)))
        .unwrap();

    match presenter.background_tap().unwrap() {
        TapOutcome::Dismissed {
            id: dismissed,
            completion,
        } => {
            assert_eq!(dismissed, id);
            assert_eq!(completion.wait(), Ok(()));
        }
        TapOutcome::Retained => panic!("tap should dismiss"),
    }
    assert!(presenter.is_empty());
    assert_eq!(presenter.service_requests(), 0);
}

#[test]
fn resize_reaches_presented_surfaces() {
    let mut presenter = Presenter::new(screen());
    let id = presenter
        .present(PopupSurface::new(SurfaceConfig::new().animated(false)))
        .unwrap();

    let wide = Bounds::new(0.0, 0.0, 800.0, 400.0);
    presenter.resize(wide);
    let surface = presenter.stack().surface(id).unwrap();
    assert_eq!(surface.bounds(), wide);
}

#[test]
fn module_aliases_reach_the_member_crates() {
    let insets = scrim::core::Insets::all(8.0);
    let bounds = scrim::core::Bounds::from_size(100.0, 100.0).inset(insets);
    assert_eq!(bounds.width, 84.0);

    let _strategy = scrim::animations::SlideStrategy::new();
    let _stack = scrim::nav::PopupStack::new();
    let _config = scrim::surface::SurfaceConfig::new();
}
