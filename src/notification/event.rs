// SPDX-License-Identifier: MPL-2.0
//! Deferred events routed back to the notifier.

use crate::surface::NodeId;

/// Token identifying one `show` call.
///
/// Every `show` moves the notifier to a new generation; events stamped with
/// an older generation are stale and ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Generation(u64);

impl Generation {
    #[must_use]
    pub fn next(self) -> Self {
        Self(self.0.wrapping_add(1))
    }
}

/// Something that happened after the call that caused it returned.
///
/// Schedulers and surfaces hand these to the host, which passes them to
/// [`Notifier::update`](super::Notifier::update).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    /// The auto-dismiss delay of a `show` call elapsed.
    AutoDismiss {
        parent: NodeId,
        generation: Generation,
    },
    /// The fade-out started by `hide` finished.
    HideFinished {
        parent: NodeId,
        generation: Generation,
    },
    /// The notification was tapped.
    Tapped,
}
