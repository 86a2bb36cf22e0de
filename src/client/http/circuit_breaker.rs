//! Circuit breaker guarding an HTTP client.
//!
//! The breaker counts consecutive failures. Once the threshold is reached the circuit opens
//! and every call is rejected until the break duration elapses. The first call afterwards is
//! a trial: success closes the circuit, failure opens it again for another break duration.
//! Calls made while the trial is in flight are rejected. A trial abandoned before reporting
//! an outcome counts as a failure.

use std::{
    sync::{Arc, Mutex, MutexGuard},
    time::Duration,
};

use chrono::{DateTime, Utc};
use dioxus_logger::tracing;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum State {
    Closed { failures: u32 },
    Open { until: DateTime<Utc> },
    HalfOpen,
}

/// Observable state of a [`CircuitBreaker`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CircuitState {
    /// Calls go through.
    Closed,
    /// Calls are rejected.
    Open,
    /// A single trial call is in flight.
    HalfOpen,
}

/// Consecutive-failure circuit breaker shared by every clone of a client.
#[derive(Clone, Debug)]
pub struct CircuitBreaker {
    state: Arc<Mutex<State>>,
    failure_threshold: u32,
    break_duration: chrono::Duration,
}

/// Permission to issue one call, handed out by [`CircuitBreaker::try_acquire`].
///
/// Report the outcome with [`CallPermit::success`] or [`CallPermit::failure`]. Dropping a
/// trial permit without an outcome, e.g. when the request future is cancelled, opens the
/// circuit for another break duration.
#[derive(Debug)]
#[must_use = "a call permit must report the outcome of the call"]
pub struct CallPermit {
    breaker: CircuitBreaker,
    trial: bool,
    settled: bool,
}

impl CallPermit {
    /// Whether this permit admits the trial call of a half-open circuit.
    pub fn is_trial(&self) -> bool {
        self.trial
    }

    /// Reports a call that reached the remote and got a healthy answer.
    pub fn success(mut self) {
        self.settled = true;
        self.breaker.record_success();
    }

    /// Reports a failed call.
    pub fn failure(mut self) {
        self.settled = true;
        self.breaker.record_failure();
    }
}

impl Drop for CallPermit {
    fn drop(&mut self) {
        if self.trial && !self.settled {
            self.breaker.abandon_trial();
        }
    }
}

impl CircuitBreaker {
    /// Creates a closed circuit breaker.
    ///
    /// A threshold of zero is treated as one.
    pub fn new(failure_threshold: u32, break_duration: Duration) -> Self {
        Self {
            state: Arc::new(Mutex::new(State::Closed { failures: 0 })),
            failure_threshold: failure_threshold.max(1),
            break_duration: chrono::Duration::from_std(break_duration)
                .unwrap_or(chrono::Duration::MAX),
        }
    }

    /// Current state.
    ///
    /// An open circuit whose break elapsed reports [`CircuitState::Open`] until the next call.
    pub fn state(&self) -> CircuitState {
        match *self.lock() {
            State::Closed { .. } => CircuitState::Closed,
            State::Open { .. } => CircuitState::Open,
            State::HalfOpen => CircuitState::HalfOpen,
        }
    }

    /// Asks permission to issue a call.
    ///
    /// Returns `None` while the circuit is open or a trial call is in flight.
    pub fn try_acquire(&self) -> Option<CallPermit> {
        let mut state = self.lock();

        let trial = match *state {
            State::Closed { .. } => false,
            State::HalfOpen => return None,
            State::Open { until } => {
                if Utc::now() < until {
                    return None;
                }

                tracing::warn!("Circuit half-open, letting a trial call through");
                *state = State::HalfOpen;
                true
            }
        };

        Some(CallPermit {
            breaker: self.clone(),
            trial,
            settled: false,
        })
    }

    fn record_success(&self) {
        let mut state = self.lock();

        if *state == State::HalfOpen {
            tracing::warn!("Trial call succeeded, circuit closed");
        }

        *state = State::Closed { failures: 0 };
    }

    fn record_failure(&self) {
        let mut state = self.lock();

        let failures = match *state {
            State::Closed { failures } => failures + 1,
            State::HalfOpen => self.failure_threshold,
            // A call admitted before the circuit opened; the break is already running
            State::Open { .. } => return,
        };

        if failures < self.failure_threshold {
            *state = State::Closed { failures };
            return;
        }

        let until = self.break_ends();
        tracing::warn!(
            "Circuit opened after {} consecutive failures, rejecting calls until {}",
            failures,
            until
        );
        *state = State::Open { until };
    }

    fn abandon_trial(&self) {
        let mut state = self.lock();

        if *state != State::HalfOpen {
            return;
        }

        let until = self.break_ends();
        tracing::warn!(
            "Trial call abandoned without an outcome, rejecting calls until {}",
            until
        );
        *state = State::Open { until };
    }

    fn break_ends(&self) -> DateTime<Utc> {
        Utc::now()
            .checked_add_signed(self.break_duration)
            .unwrap_or(DateTime::<Utc>::MAX_UTC)
    }

    fn lock(&self) -> MutexGuard<'_, State> {
        self.state.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}
