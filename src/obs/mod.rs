//! Observability boundary.
//!
//! Numeric core logic (parser/eval/project/emit) MUST NOT depend on this
//! module directly — it stays pure and synchronous, as the concurrency model
//! requires. All instrumentation flows through [`record`] from
//! [`crate::interface`], the single allowed bridge between execution logic
//! and metrics state.
//!
//! This crate has no `tracing`/`log` dependency; a small hand-rolled
//! counters aggregate carries the instrumentation instead. This is not a
//! canister, so timestamps come from `std::time::Instant` rather than an
//! IC-specific clock.
use std::cell::RefCell;
use std::time::Instant;

///
/// NumericMetricsEvent
///

#[derive(Clone, Copy, Debug)]
pub enum NumericMetricsEvent {
    ParseOk,
    ParseFault,
    EvalOk,
    EvalFault,
    ProjectOk,
    ProjectFault,
}

///
/// NumericEventState
///

#[derive(Clone, Debug)]
pub struct NumericEventState {
    pub parses_ok: u64,
    pub parses_fault: u64,
    pub evals_ok: u64,
    pub evals_fault: u64,
    pub projects_ok: u64,
    pub projects_fault: u64,
    pub since: Instant,
}

impl Default for NumericEventState {
    fn default() -> Self {
        Self {
            parses_ok: 0,
            parses_fault: 0,
            evals_ok: 0,
            evals_fault: 0,
            projects_ok: 0,
            projects_fault: 0,
            since: Instant::now(),
        }
    }
}

impl NumericEventState {
    #[must_use]
    pub const fn total_faults(&self) -> u64 {
        self.parses_fault + self.evals_fault + self.projects_fault
    }
}

/// Implemented by alternative counters sinks; the default thread-local sink
/// below is the one [`record`] uses unless a caller overrides it.
pub trait NumericMetricsSink {
    fn record(&self, event: NumericMetricsEvent);
}

thread_local! {
    static EVENT_STATE: RefCell<NumericEventState> = RefCell::new(NumericEventState::default());
}

struct ThreadLocalSink;

impl NumericMetricsSink for ThreadLocalSink {
    fn record(&self, event: NumericMetricsEvent) {
        EVENT_STATE.with(|state| {
            let mut state = state.borrow_mut();
            match event {
                NumericMetricsEvent::ParseOk => state.parses_ok += 1,
                NumericMetricsEvent::ParseFault => state.parses_fault += 1,
                NumericMetricsEvent::EvalOk => state.evals_ok += 1,
                NumericMetricsEvent::EvalFault => state.evals_fault += 1,
                NumericMetricsEvent::ProjectOk => state.projects_ok += 1,
                NumericMetricsEvent::ProjectFault => state.projects_fault += 1,
            }
        });
    }
}

/// Record an event against the default thread-local sink.
pub(crate) fn record(event: NumericMetricsEvent) {
    ThreadLocalSink.record(event);
}

/// Snapshot the current thread's counters.
#[must_use]
pub fn numeric_metrics_report() -> NumericEventState {
    EVENT_STATE.with(|state| state.borrow().clone())
}

/// Reset the current thread's counters (test/diagnostic use).
pub fn numeric_metrics_reset() {
    EVENT_STATE.with(|state| *state.borrow_mut() = NumericEventState::default());
}
