//! Single-shot debounce timers.
//!
//! A [`Scheduler`] arms a timer that later hands its [`TimerTicket`] back to
//! the event loop, which feeds it to [`ReorderMachine::on_timer`]. The returned
//! [`TimerHandle`] cancels the timer; a cancelled timer never delivers.
//!
//! [`ReorderMachine::on_timer`]: crate::ReorderMachine::on_timer

use std::fmt::Debug;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use log::trace;
use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;

use crate::column::ColumnIndex;

/// Identity and captured hover target of a scheduled timer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TimerTicket {
    pub id: u64,
    pub column: ColumnIndex,
}

/// Cancels a scheduled timer.
pub trait TimerHandle: Debug {
    fn cancel(&mut self);
}

/// Arms single-shot timers.
pub trait Scheduler {
    type Handle: TimerHandle;

    fn schedule(&mut self, delay: Duration, ticket: TimerTicket) -> Self::Handle;
}

// =============================================================================
// Manual (virtual clock)
// =============================================================================

#[derive(Debug)]
struct ManualTimer {
    deadline: Duration,
    ticket: TimerTicket,
}

#[derive(Debug, Default)]
struct ManualClock {
    now: Duration,
    timers: Vec<ManualTimer>,
    scheduled: usize,
}

/// Deterministic scheduler driven by an explicit virtual clock.
///
/// Clones share the same clock, so a test can keep one clone to advance time
/// while the machine owns another.
#[derive(Debug, Clone, Default)]
pub struct ManualScheduler {
    inner: Arc<Mutex<ManualClock>>,
}

impl ManualScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Advance the clock and return the tickets of every timer that came due,
    /// earliest first.
    pub fn advance(&self, by: Duration) -> Vec<TimerTicket> {
        let Ok(mut clock) = self.inner.lock() else {
            return Vec::new();
        };
        clock.now += by;
        let now = clock.now;

        let mut due: Vec<ManualTimer> = Vec::new();
        let mut i = 0;
        while i < clock.timers.len() {
            if clock.timers[i].deadline <= now {
                due.push(clock.timers.remove(i));
            } else {
                i += 1;
            }
        }
        due.sort_by_key(|t| t.deadline);
        due.into_iter().map(|t| t.ticket).collect()
    }

    /// Advance to the last pending deadline and return every due ticket.
    pub fn run_all(&self) -> Vec<TimerTicket> {
        let remaining = match self.inner.lock() {
            Ok(clock) => clock
                .timers
                .iter()
                .map(|t| t.deadline.saturating_sub(clock.now))
                .max()
                .unwrap_or_default(),
            Err(_) => return Vec::new(),
        };
        self.advance(remaining)
    }

    /// Total number of timers ever scheduled.
    pub fn scheduled_count(&self) -> usize {
        self.inner.lock().map(|c| c.scheduled).unwrap_or(0)
    }

    /// Number of timers armed and not yet fired or cancelled.
    pub fn pending_count(&self) -> usize {
        self.inner.lock().map(|c| c.timers.len()).unwrap_or(0)
    }

    pub fn now(&self) -> Duration {
        self.inner.lock().map(|c| c.now).unwrap_or_default()
    }
}

impl Scheduler for ManualScheduler {
    type Handle = ManualHandle;

    fn schedule(&mut self, delay: Duration, ticket: TimerTicket) -> ManualHandle {
        if let Ok(mut clock) = self.inner.lock() {
            let deadline = clock.now + delay;
            clock.timers.push(ManualTimer { deadline, ticket });
            clock.scheduled += 1;
        }
        ManualHandle {
            clock: self.inner.clone(),
            id: ticket.id,
        }
    }
}

/// Handle to a timer on a [`ManualScheduler`].
#[derive(Debug)]
pub struct ManualHandle {
    clock: Arc<Mutex<ManualClock>>,
    id: u64,
}

impl TimerHandle for ManualHandle {
    fn cancel(&mut self) {
        if let Ok(mut clock) = self.clock.lock() {
            clock.timers.retain(|t| t.ticket.id != self.id);
        }
    }
}

// =============================================================================
// Tokio
// =============================================================================

/// Scheduler backed by the tokio timer wheel.
///
/// Fired tickets arrive on the receiver returned by [`TokioScheduler::new`].
/// Must be used from within a tokio runtime.
#[derive(Debug, Clone)]
pub struct TokioScheduler {
    tx: mpsc::UnboundedSender<TimerTicket>,
}

impl TokioScheduler {
    pub fn new() -> (Self, mpsc::UnboundedReceiver<TimerTicket>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (Self { tx }, rx)
    }
}

impl Scheduler for TokioScheduler {
    type Handle = TokioHandle;

    fn schedule(&mut self, delay: Duration, ticket: TimerTicket) -> TokioHandle {
        let cancel = CancellationToken::new();
        let token = cancel.clone();
        let tx = self.tx.clone();

        tokio::spawn(async move {
            tokio::select! {
                _ = token.cancelled() => {
                    trace!("Timer {} cancelled", ticket.id);
                }
                _ = tokio::time::sleep(delay) => {
                    // Receiver dropped = shutting down
                    let _ = tx.send(ticket);
                }
            }
        });

        TokioHandle { cancel }
    }
}

/// Handle to a timer on a [`TokioScheduler`].
#[derive(Debug)]
pub struct TokioHandle {
    cancel: CancellationToken,
}

impl TimerHandle for TokioHandle {
    fn cancel(&mut self) {
        self.cancel.cancel();
    }
}
