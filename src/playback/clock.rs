// SPDX-License-Identifier: MPL-2.0
//! Frame-pump clock: the periodic tick driving frame delivery.
//!
//! The transport talks to the clock through the [`TransportClock`] port so
//! the state machine can be unit tested against a fake. The production
//! implementation, [`IntervalClock`], is a cancellable tokio task that sends
//! tick signals into a bounded channel.
//!
//! # Backlog policy
//!
//! Ticks are delivered through a channel of capacity one, sent with
//! `try_send`: when the consumer has not finished the previous tick, the new
//! one is dropped rather than queued. Combined with
//! [`MissedTickBehavior::Skip`] on the timer itself, a slow decode degrades to
//! skipped ticks instead of an unbounded backlog.

use std::time::Duration;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;

/// Port for the frame-pump timer consumed by the transport state machine.
pub trait TransportClock {
    /// Begins a repeating tick at `interval`. Idempotent when already
    /// running at the same interval; a different interval restarts the timer.
    fn start(&mut self, interval: Duration);

    /// Halts the tick. Idempotent.
    fn stop(&mut self);

    /// True while the tick task is live.
    fn is_running(&self) -> bool;
}

/// Capacity of the tick channel. One slot: an unconsumed tick means the
/// previous frame request is still in flight, so the next tick is skipped.
pub const TICK_CHANNEL_CAPACITY: usize = 1;

/// Creates the channel pair connecting an [`IntervalClock`] to its consumer.
#[must_use]
pub fn tick_channel() -> (mpsc::Sender<()>, mpsc::Receiver<()>) {
    mpsc::channel(TICK_CHANNEL_CAPACITY)
}

/// Periodic tick backed by a tokio interval task.
///
/// `start` spawns onto the current tokio runtime, so the clock must be
/// driven from within one. Dropping the clock aborts the task, so a session
/// going out of scope on any path releases the timer.
#[derive(Debug)]
pub struct IntervalClock {
    tick_tx: mpsc::Sender<()>,
    task: Option<JoinHandle<()>>,
    interval: Option<Duration>,
}

impl IntervalClock {
    #[must_use]
    pub fn new(tick_tx: mpsc::Sender<()>) -> Self {
        Self {
            tick_tx,
            task: None,
            interval: None,
        }
    }
}

impl TransportClock for IntervalClock {
    fn start(&mut self, interval: Duration) {
        if self.is_running() && self.interval == Some(interval) {
            return;
        }
        self.stop();

        let tx = self.tick_tx.clone();
        let task = tokio::spawn(async move {
            let mut ticker = tokio::time::interval(interval);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);
            // interval() fires immediately; consume the zeroth tick so the
            // first delivered tick lands one interval after start.
            ticker.tick().await;
            loop {
                ticker.tick().await;
                match tx.try_send(()) {
                    Ok(()) | Err(mpsc::error::TrySendError::Full(())) => {}
                    Err(mpsc::error::TrySendError::Closed(())) => break,
                }
            }
        });
        self.task = Some(task);
        self.interval = Some(interval);
    }

    fn stop(&mut self) {
        if let Some(task) = self.task.take() {
            task.abort();
        }
        self.interval = None;
    }

    fn is_running(&self) -> bool {
        self.task.as_ref().is_some_and(|task| !task.is_finished())
    }
}

impl Drop for IntervalClock {
    fn drop(&mut self) {
        self.stop();
    }
}
