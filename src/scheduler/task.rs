// SPDX-License-Identifier: MPL-2.0
//! Runtime-backed schedulers.

use super::Scheduler;
use crate::notification::Event;
use iced::Task;
use std::time::Duration;
use tokio::sync::mpsc;

/// Collects one Iced `Task` per scheduled event.
///
/// After calling into the notifier, the host drains the tasks with
/// [`TaskScheduler::take`] and returns them from its `update`, mapping the
/// resolved [`Event`] into its own message type.
#[derive(Default)]
pub struct TaskScheduler {
    tasks: Vec<Task<Event>>,
}

impl TaskScheduler {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of tasks not yet handed to the runtime.
    #[must_use]
    pub fn pending_count(&self) -> usize {
        self.tasks.len()
    }

    /// Returns all pending tasks as one batch.
    pub fn take(&mut self) -> Task<Event> {
        Task::batch(std::mem::take(&mut self.tasks))
    }
}

impl Scheduler for TaskScheduler {
    fn schedule_once(&mut self, delay: Duration, event: Event) {
        self.tasks
            .push(Task::perform(tokio::time::sleep(delay), move |()| event));
    }
}

/// Sends events through an unbounded Tokio channel once their delay elapses.
#[derive(Debug, Clone)]
pub struct ChannelScheduler {
    handle: tokio::runtime::Handle,
    sender: mpsc::UnboundedSender<Event>,
}

impl ChannelScheduler {
    /// Creates a scheduler spawning its timers on `handle`, and the receiver
    /// the host polls for due events.
    #[must_use]
    pub fn new(handle: tokio::runtime::Handle) -> (Self, mpsc::UnboundedReceiver<Event>) {
        let (sender, receiver) = mpsc::unbounded_channel();
        (Self { handle, sender }, receiver)
    }
}

impl Scheduler for ChannelScheduler {
    fn schedule_once(&mut self, delay: Duration, event: Event) {
        let sender = self.sender.clone();
        self.handle.spawn(async move {
            tokio::time::sleep(delay).await;
            if sender.send(event).is_err() {
                log::debug!("Dropping {:?}: receiver closed", event);
            }
        });
    }
}
