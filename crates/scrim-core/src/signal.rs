#![forbid(unsafe_code)]

//! Single-shot completion signals for suspend-until-done operations.
//!
//! [`CompletionSource`] is the settling side handed to whoever performs the
//! work; [`Completion`] is the waiting side held by the sequencer. A signal
//! settles exactly once — the first `finish`/`fail` wins and later calls are
//! no-ops — and the outcome is a `Result` so failure is observable rather
//! than thrown.
//!
//! # Example
//!
//! ```
//! use scrim_core::signal::CompletionSource;
//!
//! let source = CompletionSource::new();
//! let completion = source.completion();
//!
//! std::thread::spawn(move || {
//!     // perform the transition work...
//!     source.finish();
//! });
//!
//! assert!(completion.wait().is_ok());
//! ```
//!
//! # Failure Modes
//!
//! - A source held open forever stalls `wait()` indefinitely; that is the
//!   contract accepted from whoever supplies the work.
//! - A source dropped without settling resolves its completions with
//!   [`CompletionError::Abandoned`], so a crashed worker cannot strand a
//!   waiter.

use std::fmt;
use std::sync::{Arc, Condvar, Mutex};
use web_time::Duration;

/// Why a completion settled unsuccessfully.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CompletionError {
    /// The settling side reported failure.
    Failed(String),
    /// The source was dropped without settling.
    Abandoned,
}

impl fmt::Display for CompletionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Failed(msg) => write!(f, "completion failed: {msg}"),
            Self::Abandoned => write!(f, "completion abandoned by its source"),
        }
    }
}

impl std::error::Error for CompletionError {}

enum SignalState {
    Pending,
    Settled(Result<(), CompletionError>),
}

struct SignalInner {
    state: Mutex<SignalState>,
    cond: Condvar,
}

impl SignalInner {
    fn settle(&self, outcome: Result<(), CompletionError>) {
        let mut state = self.state.lock().unwrap_or_else(|e| e.into_inner());
        if matches!(*state, SignalState::Pending) {
            *state = SignalState::Settled(outcome);
            self.cond.notify_all();
        }
    }

    fn peek(&self) -> Option<Result<(), CompletionError>> {
        let state = self.state.lock().unwrap_or_else(|e| e.into_inner());
        match &*state {
            SignalState::Pending => None,
            SignalState::Settled(outcome) => Some(outcome.clone()),
        }
    }
}

/// The settling handle for a single-shot completion signal.
///
/// Not cloneable: exactly one party owns the right to settle. Dropping an
/// unsettled source settles the signal with [`CompletionError::Abandoned`].
pub struct CompletionSource {
    inner: Arc<SignalInner>,
}

impl CompletionSource {
    /// Create a new unsettled source.
    pub fn new() -> Self {
        Self {
            inner: Arc::new(SignalInner {
                state: Mutex::new(SignalState::Pending),
                cond: Condvar::new(),
            }),
        }
    }

    /// Obtain a cloneable completion that observes this source's outcome.
    pub fn completion(&self) -> Completion {
        Completion {
            inner: Arc::clone(&self.inner),
        }
    }

    /// Settle successfully. No-op if already settled.
    pub fn finish(&self) {
        self.inner.settle(Ok(()));
    }

    /// Settle with a failure message. No-op if already settled.
    pub fn fail(&self, message: impl Into<String>) {
        self.inner.settle(Err(CompletionError::Failed(message.into())));
    }

    /// Whether the signal has settled (successfully or not).
    pub fn is_settled(&self) -> bool {
        self.inner.peek().is_some()
    }
}

impl Default for CompletionSource {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for CompletionSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CompletionSource")
            .field("settled", &self.is_settled())
            .finish_non_exhaustive()
    }
}

impl Drop for CompletionSource {
    fn drop(&mut self) {
        self.inner.settle(Err(CompletionError::Abandoned));
    }
}

/// The waiting handle for a single-shot completion signal.
///
/// Cheap to clone; every clone observes the same outcome.
#[derive(Clone)]
pub struct Completion {
    inner: Arc<SignalInner>,
}

impl Completion {
    /// A completion that settled successfully before anyone could wait.
    ///
    /// Used by no-op hook defaults and instant transitions.
    pub fn ready() -> Self {
        Self {
            inner: Arc::new(SignalInner {
                state: Mutex::new(SignalState::Settled(Ok(()))),
                cond: Condvar::new(),
            }),
        }
    }

    /// A completion that settled with the given failure message.
    pub fn failed(message: impl Into<String>) -> Self {
        Self {
            inner: Arc::new(SignalInner {
                state: Mutex::new(SignalState::Settled(Err(CompletionError::Failed(
                    message.into(),
                )))),
                cond: Condvar::new(),
            }),
        }
    }

    /// Whether the signal has settled (successfully or not).
    #[inline]
    pub fn is_settled(&self) -> bool {
        self.inner.peek().is_some()
    }

    /// Check the outcome without blocking.
    pub fn try_wait(&self) -> Option<Result<(), CompletionError>> {
        self.inner.peek()
    }

    /// Block until the signal settles and return its outcome.
    pub fn wait(&self) -> Result<(), CompletionError> {
        let mut state = self.inner.state.lock().unwrap_or_else(|e| e.into_inner());
        loop {
            if let SignalState::Settled(outcome) = &*state {
                return outcome.clone();
            }
            state = self
                .inner
                .cond
                .wait(state)
                .unwrap_or_else(|e| e.into_inner());
        }
    }

    /// Block until the signal settles or the timeout elapses.
    ///
    /// Returns `None` on timeout.
    #[must_use]
    pub fn wait_timeout(&self, duration: Duration) -> Option<Result<(), CompletionError>> {
        let mut state = self.inner.state.lock().unwrap_or_else(|e| e.into_inner());
        let start = web_time::Instant::now();
        let mut remaining = duration;
        loop {
            if let SignalState::Settled(outcome) = &*state {
                return Some(outcome.clone());
            }
            let (new_state, result) = self
                .inner
                .cond
                .wait_timeout(state, remaining)
                .unwrap_or_else(|e| e.into_inner());
            state = new_state;
            if let SignalState::Settled(outcome) = &*state {
                return Some(outcome.clone());
            }
            if result.timed_out() {
                return None;
            }
            let elapsed = start.elapsed();
            if elapsed >= duration {
                return None;
            }
            remaining = duration - elapsed;
        }
    }
}

impl fmt::Debug for Completion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Completion")
            .field("settled", &self.is_settled())
            .finish_non_exhaustive()
    }
}
