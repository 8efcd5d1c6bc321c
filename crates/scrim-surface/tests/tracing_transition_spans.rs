#![forbid(unsafe_code)]

//! Tracing instrumentation tests for surface transitions.
//!
//! Verify the spans and events a surface emits while transitioning: span
//! names, required fields, the recorded duration, and the `scrim.surface`
//! target on spans and events alike.
//!
//! Run:
//!   cargo test -p scrim-surface --test tracing_transition_spans

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use scrim_animations::{AnimationTiming, ScaleStrategy};
use scrim_core::{Completion, NavigationHost, SurfaceId};
use scrim_surface::{HookError, LifecycleHook, PopupSurface, SurfaceConfig};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::registry::LookupSpan;

// ============================================================================
// Test Infrastructure
// ============================================================================

/// A captured span with its metadata.
#[derive(Debug, Clone)]
struct CapturedSpan {
    name: String,
    target: String,
    fields: HashMap<String, String>,
}

/// A captured event with its metadata and parent span.
#[derive(Debug, Clone)]
#[allow(dead_code)]
struct CapturedEvent {
    level: tracing::Level,
    target: String,
    message: String,
    fields: HashMap<String, String>,
    parent_span_name: Option<String>,
}

/// A tracing Layer that captures spans and events.
struct SpanCapture {
    spans: Arc<Mutex<Vec<CapturedSpan>>>,
    events: Arc<Mutex<Vec<CapturedEvent>>>,
    /// Map from span ID to index in spans vec, for updating fields via record().
    span_index: Arc<Mutex<HashMap<u64, usize>>>,
}

impl SpanCapture {
    fn new() -> (Self, CaptureHandle) {
        let spans = Arc::new(Mutex::new(Vec::new()));
        let events = Arc::new(Mutex::new(Vec::new()));

        let handle = CaptureHandle {
            spans: spans.clone(),
            events: events.clone(),
        };

        let layer = Self {
            spans,
            events,
            span_index: Arc::new(Mutex::new(HashMap::new())),
        };

        (layer, handle)
    }
}

/// Handle to read captured spans and events after execution.
struct CaptureHandle {
    spans: Arc<Mutex<Vec<CapturedSpan>>>,
    events: Arc<Mutex<Vec<CapturedEvent>>>,
}

impl CaptureHandle {
    fn spans(&self) -> Vec<CapturedSpan> {
        self.spans.lock().unwrap().clone()
    }

    fn events(&self) -> Vec<CapturedEvent> {
        self.events.lock().unwrap().clone()
    }
}

/// Visitor that extracts span/event fields.
struct FieldVisitor(Vec<(String, String)>);

impl tracing::field::Visit for FieldVisitor {
    fn record_debug(&mut self, field: &tracing::field::Field, value: &dyn std::fmt::Debug) {
        self.0
            .push((field.name().to_string(), format!("{value:?}")));
    }

    fn record_u64(&mut self, field: &tracing::field::Field, value: u64) {
        self.0.push((field.name().to_string(), value.to_string()));
    }

    fn record_i64(&mut self, field: &tracing::field::Field, value: i64) {
        self.0.push((field.name().to_string(), value.to_string()));
    }

    fn record_str(&mut self, field: &tracing::field::Field, value: &str) {
        self.0.push((field.name().to_string(), value.to_string()));
    }

    fn record_bool(&mut self, field: &tracing::field::Field, value: bool) {
        self.0.push((field.name().to_string(), value.to_string()));
    }
}

impl<S> tracing_subscriber::Layer<S> for SpanCapture
where
    S: tracing::Subscriber + for<'a> LookupSpan<'a>,
{
    fn on_new_span(
        &self,
        attrs: &tracing::span::Attributes<'_>,
        id: &tracing::span::Id,
        _ctx: tracing_subscriber::layer::Context<'_, S>,
    ) {
        let mut visitor = FieldVisitor(Vec::new());
        attrs.record(&mut visitor);

        let mut fields: HashMap<String, String> = visitor.0.into_iter().collect();

        // Declared-but-Empty fields show up in the metadata field set only.
        for field in attrs.metadata().fields() {
            fields.entry(field.name().to_string()).or_default();
        }

        let mut spans = self.spans.lock().unwrap();
        let idx = spans.len();
        spans.push(CapturedSpan {
            name: attrs.metadata().name().to_string(),
            target: attrs.metadata().target().to_string(),
            fields,
        });

        self.span_index.lock().unwrap().insert(id.into_u64(), idx);
    }

    fn on_record(
        &self,
        id: &tracing::span::Id,
        values: &tracing::span::Record<'_>,
        _ctx: tracing_subscriber::layer::Context<'_, S>,
    ) {
        let mut visitor = FieldVisitor(Vec::new());
        values.record(&mut visitor);

        let index = self.span_index.lock().unwrap();
        if let Some(&idx) = index.get(&id.into_u64()) {
            let mut spans = self.spans.lock().unwrap();
            if let Some(span) = spans.get_mut(idx) {
                for (k, v) in visitor.0 {
                    span.fields.insert(k, v);
                }
            }
        }
    }

    fn on_event(&self, event: &tracing::Event<'_>, ctx: tracing_subscriber::layer::Context<'_, S>) {
        let mut visitor = FieldVisitor(Vec::new());
        event.record(&mut visitor);

        let fields: HashMap<String, String> = visitor.0.clone().into_iter().collect();
        let message = visitor
            .0
            .iter()
            .find(|(k, _)| k == "message")
            .map(|(_, v)| v.clone())
            .unwrap_or_default();

        let parent_span_name = ctx
            .current_span()
            .id()
            .and_then(|id| ctx.span(id))
            .map(|span_ref| span_ref.name().to_string());

        self.events.lock().unwrap().push(CapturedEvent {
            level: *event.metadata().level(),
            target: event.metadata().target().to_string(),
            message,
            fields,
            parent_span_name,
        });
    }
}

/// Set up a tracing subscriber with span capture and run a closure.
fn with_captured_spans<F>(f: F) -> CaptureHandle
where
    F: FnOnce(),
{
    let (layer, handle) = SpanCapture::new();
    let subscriber = tracing_subscriber::registry()
        .with(tracing_subscriber::filter::LevelFilter::TRACE)
        .with(layer);
    tracing::subscriber::with_default(subscriber, f);
    handle
}

struct FailingBegin;

impl LifecycleHook for FailingBegin {
    fn on_appearing_begin(&mut self, _: &mut PopupSurface) -> Result<(), HookError> {
        Err(HookError::new("content not ready"))
    }
}

struct FakeHost;

impl NavigationHost for FakeHost {
    fn remove_surface(&mut self, _id: SurfaceId) -> Completion {
        Completion::ready()
    }
}

fn plain() -> PopupSurface {
    PopupSurface::new(SurfaceConfig::new().animated(false))
}

// ============================================================================
// Transition Span Tests
// ============================================================================

/// An appearing transition emits one surface.transition span with the
/// surface identity and direction.
#[test]
fn appearing_emits_a_transition_span() {
    let mut surface = PopupSurface::new(
        SurfaceConfig::new().animation(ScaleStrategy::new().timing(AnimationTiming::none())),
    );
    let id = surface.id().get();

    let handle = with_captured_spans(|| {
        surface.appearing().unwrap();
    });

    let spans = handle.spans();
    let span = spans
        .iter()
        .find(|s| s.name == "surface.transition")
        .expect("surface.transition span should exist");

    assert_eq!(span.fields.get("kind").map(String::as_str), Some("appearing"));
    assert_eq!(span.fields.get("surface_id"), Some(&id.to_string()));
    assert_eq!(span.fields.get("animated").map(String::as_str), Some("true"));
}

/// The disappearing direction is visible in the span fields.
#[test]
fn disappearing_span_reflects_the_kind() {
    let mut surface = PopupSurface::new(SurfaceConfig::new().animated(false));

    let handle = with_captured_spans(|| {
        surface.disappearing().unwrap();
    });

    let spans = handle.spans();
    let span = spans
        .iter()
        .find(|s| s.name == "surface.transition")
        .expect("surface.transition span should exist");

    assert_eq!(
        span.fields.get("kind").map(String::as_str),
        Some("disappearing")
    );
    assert_eq!(
        span.fields.get("animated").map(String::as_str),
        Some("false")
    );
}

/// duration_us starts Empty and is recorded by the time the transition
/// completes.
#[test]
fn transition_span_records_its_duration() {
    let mut surface = plain();

    let handle = with_captured_spans(|| {
        surface.appearing().unwrap();
    });

    let spans = handle.spans();
    let span = spans
        .iter()
        .find(|s| s.name == "surface.transition")
        .expect("surface.transition span should exist");

    let duration = span
        .fields
        .get("duration_us")
        .expect("duration_us should be declared");
    assert!(
        duration.parse::<u64>().is_ok(),
        "duration_us should hold a recorded number, got {duration:?}"
    );
}

/// The transition span shares the scrim.surface target with the event
/// stream, so one filter directive covers both.
#[test]
fn transition_span_targets_scrim_surface() {
    let mut surface = plain();

    let handle = with_captured_spans(|| {
        surface.appearing().unwrap();
    });

    let spans = handle.spans();
    let span = spans
        .iter()
        .find(|s| s.name == "surface.transition")
        .expect("surface.transition span should exist");

    assert_eq!(span.target, "scrim.surface");
}

// ============================================================================
// Event Tests
// ============================================================================

/// Successful transitions log a debug event under the scrim.surface target,
/// inside the transition span.
#[test]
fn completion_event_targets_scrim_surface() {
    let mut surface = plain();

    let handle = with_captured_spans(|| {
        surface.appearing().unwrap();
    });

    let events = handle.events();
    let event = events
        .iter()
        .find(|e| e.message == "transition complete")
        .expect("completion event should exist");

    assert_eq!(event.target, "scrim.surface");
    assert_eq!(event.level, tracing::Level::DEBUG);
    assert_eq!(
        event.parent_span_name.as_deref(),
        Some("surface.transition")
    );
    assert_eq!(
        event.fields.get("kind").map(String::as_str),
        Some("appearing")
    );
}

/// Hook failures surface as a warn event carrying the rendered error.
#[test]
fn failed_transition_warns_with_the_error() {
    let mut surface = PopupSurface::new(SurfaceConfig::new().hook(FailingBegin));

    let handle = with_captured_spans(|| {
        assert!(surface.appearing().is_err());
    });

    let events = handle.events();
    let event = events
        .iter()
        .find(|e| e.message == "transition failed")
        .expect("failure event should exist");

    assert_eq!(event.target, "scrim.surface");
    assert_eq!(event.level, tracing::Level::WARN);
    let error = event.fields.get("error").expect("error field should exist");
    assert!(
        error.contains("content not ready"),
        "error should carry the hook message, got {error:?}"
    );
}

/// Background taps log their dismissal decision.
#[test]
fn background_tap_event_carries_the_decision() {
    let mut surface = PopupSurface::with_defaults();
    let mut host = FakeHost;

    let handle = with_captured_spans(|| {
        let _ = surface.send_background_tap(&mut host);
    });

    let events = handle.events();
    let event = events
        .iter()
        .find(|e| e.message == "background tap")
        .expect("tap event should exist");

    assert_eq!(event.target, "scrim.surface");
    assert_eq!(
        event.fields.get("dismiss").map(String::as_str),
        Some("true")
    );
}
