//! Benchmark: easing curve evaluation and visual state publication.
//!
//! Run with: `cargo bench -p scrim-animations --bench easing_bench`
//!
//! Easing runs once per frame per animating surface, and every frame ends in
//! a `ContentHandle::set`. Both sit on the 60fps hot path, so the interesting
//! numbers are per-call latency and the cost of the equality gate when the
//! value did not change.

use criterion::{Criterion, black_box, criterion_group, criterion_main};
use scrim_animations::easing::{Easing, lerp};
use scrim_core::{ContentHandle, VisualState};

// ===========================================================================
// Easing curve evaluation
// ===========================================================================

fn bench_easing_apply(c: &mut Criterion) {
    let mut group = c.benchmark_group("easing_apply");

    for (label, easing) in [
        ("linear", Easing::Linear),
        ("ease_out", Easing::EaseOut),
        ("ease_in", Easing::EaseIn),
        ("ease_in_out", Easing::EaseInOut),
        ("back", Easing::Back),
    ] {
        group.bench_function(label, |b| {
            let mut t = 0.0f64;
            b.iter(|| {
                t = (t + 0.013) % 1.0;
                black_box(easing.apply(black_box(t)))
            });
        });
    }

    group.finish();
}

// ===========================================================================
// Full frame: ease + lerp + publish
// ===========================================================================

fn bench_frame_publication(c: &mut Criterion) {
    let mut group = c.benchmark_group("frame_publication");

    // -- Every frame writes a new value --
    group.bench_function("changing_value", |b| {
        let content = ContentHandle::new();
        let mut t = 0.0f64;
        b.iter(|| {
            t = (t + 0.013) % 1.0;
            let p = Easing::EaseOut.apply(t);
            content.set(VisualState {
                scale: lerp(0.92, 1.0, p),
                opacity: lerp(0.0, 1.0, p),
                ..VisualState::IDENTITY
            });
        });
    });

    // -- Repeated identical writes hit the equality gate --
    group.bench_function("unchanged_value", |b| {
        let content = ContentHandle::new();
        content.set(VisualState::IDENTITY);
        b.iter(|| {
            black_box(content.set(VisualState::IDENTITY));
        });
    });

    group.finish();
}

criterion_group!(benches, bench_easing_apply, bench_frame_publication);
criterion_main!(benches);
