//! Live countdowns.
//!
//! [`start_countdown`] recomputes the time remaining on a fixed period and
//! publishes it on a watch channel. The returned [`CountdownHandle`] owns the
//! timer task: stopping or dropping the handle ends it.

use chrono::{DateTime, Utc};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;

use crate::clock::Clock;
use crate::countdown::{TimeRemaining, compute_remaining};

/// Handle to a running countdown timer.
#[derive(Debug)]
pub struct CountdownHandle {
    target: DateTime<Utc>,
    task: JoinHandle<()>,
    rx: watch::Receiver<TimeRemaining>,
}

/// Start refreshing the countdown to `target` every `period`.
///
/// Must be called from within a tokio runtime. Late ticks are skipped rather
/// than replayed; each tick recomputes from `clock.now()`.
pub fn start_countdown(
    target: DateTime<Utc>,
    clock: Arc<dyn Clock>,
    period: Duration,
) -> CountdownHandle {
    let (tx, rx) = watch::channel(compute_remaining(target, clock.now()));

    let task = tokio::spawn(async move {
        let mut interval = tokio::time::interval(period);
        interval.set_missed_tick_behavior(MissedTickBehavior::Skip);
        // The first tick completes immediately and the initial value is already published.
        interval.tick().await;

        loop {
            interval.tick().await;
            if tx.send(compute_remaining(target, clock.now())).is_err() {
                break;
            }
        }
    });

    log::debug!("Started countdown to {} (period {:?})", target, period);

    CountdownHandle { target, task, rx }
}

impl CountdownHandle {
    pub fn target(&self) -> DateTime<Utc> {
        self.target
    }

    /// The most recently published value.
    pub fn current(&self) -> TimeRemaining {
        *self.rx.borrow()
    }

    /// Wait for the next tick and return its value.
    /// Returns `None` once the timer has stopped.
    pub async fn changed(&mut self) -> Option<TimeRemaining> {
        self.rx.changed().await.ok()?;
        Some(*self.rx.borrow_and_update())
    }

    /// An independent receiver for the published values.
    pub fn subscribe(&self) -> watch::Receiver<TimeRemaining> {
        self.rx.clone()
    }

    /// Stop the timer. Equivalent to dropping the handle.
    pub fn stop(self) {}
}

impl Drop for CountdownHandle {
    fn drop(&mut self) {
        self.task.abort();
        log::debug!("Stopped countdown to {}", self.target);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::ManualClock;
    use crate::event::parse_instant;

    fn setup() -> (Arc<ManualClock>, DateTime<Utc>) {
        let now = parse_instant("2024-01-01T00:00:00Z").unwrap();
        let target = parse_instant("2024-01-01T00:00:10Z").unwrap();
        (Arc::new(ManualClock::new(now)), target)
    }

    #[tokio::test(start_paused = true)]
    async fn test_initial_value_is_available_immediately() {
        let (clock, target) = setup();
        let handle = start_countdown(target, clock, Duration::from_secs(1));
        assert_eq!(handle.current().seconds, 10);
        assert_eq!(handle.target(), target);
    }

    #[tokio::test(start_paused = true)]
    async fn test_each_tick_recomputes_from_clock() {
        let (clock, target) = setup();
        let mut handle = start_countdown(target, clock.clone(), Duration::from_secs(1));

        clock.advance(chrono::Duration::seconds(1));
        let next = handle.changed().await.unwrap();
        assert_eq!(next.seconds, 9);

        clock.advance(chrono::Duration::seconds(3));
        let next = handle.changed().await.unwrap();
        assert_eq!(next.seconds, 6);
        assert_eq!(handle.current(), next);
    }

    #[tokio::test(start_paused = true)]
    async fn test_ticks_report_elapsed_after_target() {
        let (clock, target) = setup();
        let mut handle = start_countdown(target, clock.clone(), Duration::from_secs(1));

        clock.advance(chrono::Duration::seconds(30));
        let next = handle.changed().await.unwrap();
        assert_eq!(next, TimeRemaining::elapsed());
    }

    #[tokio::test(start_paused = true)]
    async fn test_stop_releases_timer() {
        let (clock, target) = setup();
        let handle = start_countdown(target, clock, Duration::from_secs(1));
        let mut rx = handle.subscribe();

        handle.stop();

        // The sender lives in the timer task; once it is gone the channel closes.
        assert!(rx.changed().await.is_err());
    }

    #[tokio::test(start_paused = true)]
    async fn test_drop_releases_timer() {
        let (clock, target) = setup();
        let mut rx = {
            let handle = start_countdown(target, clock, Duration::from_secs(1));
            handle.subscribe()
        };
        assert!(rx.changed().await.is_err());
    }
}
