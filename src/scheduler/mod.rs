// SPDX-License-Identifier: MPL-2.0
//! Deferred delivery of notifier events.
//!
//! A [`Scheduler`] accepts an [`Event`] and a delay and hands the event back
//! to the host once the delay has elapsed. Delivery is fire-and-forget;
//! stale events are filtered by the notifier, not cancelled here.
//!
//! - [`ManualScheduler`] - virtual clock advanced by the host (tests, tick-driven hosts)
//! - [`TaskScheduler`] - produces Iced `Task`s that resolve to the event
//! - [`ChannelScheduler`] - sends events through a Tokio channel

mod task;

pub use task::{ChannelScheduler, TaskScheduler};

use crate::notification::Event;
use std::time::Duration;

/// Schedule-once capability.
pub trait Scheduler {
    /// Delivers `event` after `delay`.
    fn schedule_once(&mut self, delay: Duration, event: Event);
}

#[derive(Debug, Clone)]
struct Pending {
    due: Duration,
    seq: u64,
    event: Event,
}

/// Scheduler driven by an explicit virtual clock.
#[derive(Debug, Clone, Default)]
pub struct ManualScheduler {
    now: Duration,
    next_seq: u64,
    pending: Vec<Pending>,
}

impl ManualScheduler {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Time elapsed on the virtual clock.
    #[must_use]
    pub fn now(&self) -> Duration {
        self.now
    }

    /// Number of events waiting to become due.
    #[must_use]
    pub fn pending_count(&self) -> usize {
        self.pending.len()
    }

    /// Moves the clock forward by `elapsed` and returns the events that
    /// became due, earliest first. Events due at the same instant keep their
    /// scheduling order.
    pub fn advance(&mut self, elapsed: Duration) -> Vec<Event> {
        self.now += elapsed;
        let now = self.now;

        let (mut due, waiting): (Vec<Pending>, Vec<Pending>) =
            std::mem::take(&mut self.pending)
                .into_iter()
                .partition(|pending| pending.due <= now);
        self.pending = waiting;

        due.sort_by_key(|pending| (pending.due, pending.seq));
        due.into_iter().map(|pending| pending.event).collect()
    }
}

impl Scheduler for ManualScheduler {
    fn schedule_once(&mut self, delay: Duration, event: Event) {
        self.pending.push(Pending {
            due: self.now + delay,
            seq: self.next_seq,
            event,
        });
        self.next_seq += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::notification::Generation;
    use crate::surface::NodeId;

    fn dismiss(raw: u64) -> Event {
        Event::AutoDismiss {
            parent: NodeId::from_raw(raw),
            generation: Generation::default(),
        }
    }

    #[test]
    fn events_fire_once_after_delay() {
        let mut scheduler = ManualScheduler::new();
        scheduler.schedule_once(Duration::from_secs(2), dismiss(1));

        assert!(scheduler.advance(Duration::from_millis(1999)).is_empty());
        assert_eq!(scheduler.advance(Duration::from_millis(1)), vec![dismiss(1)]);
        assert!(scheduler.advance(Duration::from_secs(10)).is_empty());
        assert_eq!(scheduler.pending_count(), 0);
    }

    #[test]
    fn due_events_are_ordered_by_deadline_then_schedule_order() {
        let mut scheduler = ManualScheduler::new();
        scheduler.schedule_once(Duration::from_secs(3), dismiss(3));
        scheduler.schedule_once(Duration::from_secs(1), dismiss(1));
        scheduler.schedule_once(Duration::from_secs(1), dismiss(2));

        assert_eq!(
            scheduler.advance(Duration::from_secs(5)),
            vec![dismiss(1), dismiss(2), dismiss(3)]
        );
    }

    #[test]
    fn delays_are_relative_to_current_time() {
        let mut scheduler = ManualScheduler::new();
        scheduler.advance(Duration::from_secs(10));
        scheduler.schedule_once(Duration::from_secs(1), dismiss(1));

        assert_eq!(scheduler.now(), Duration::from_secs(10));
        assert!(scheduler.advance(Duration::from_millis(500)).is_empty());
        assert_eq!(scheduler.advance(Duration::from_millis(500)).len(), 1);
    }
}
