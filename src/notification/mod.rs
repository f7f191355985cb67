// SPDX-License-Identifier: MPL-2.0
//! Single reusable pop-in notification.
//!
//! # Components
//!
//! - [`Notifier`] - owns the overlay and implements show/hide/defaults
//! - [`Toast`] - node handles of the cached overlay
//! - [`ShowOptions`] / [`HideOptions`] - call parameters
//! - [`Event`] - deferred events the host routes back to the notifier
//!
//! # Usage
//!
//! ```
//! use iced_toast::notification::{Notifier, ShowOptions};
//! use iced_toast::scheduler::ManualScheduler;
//! use iced_toast::store::MemoryStore;
//! use iced_toast::surface::RetainedSurface;
//! use std::time::Duration;
//!
//! let mut notifier = Notifier::new(
//!     MemoryStore::new(),
//!     ManualScheduler::new(),
//!     RetainedSurface::new(),
//! );
//! let window = notifier.surface().root();
//!
//! notifier
//!     .show(ShowOptions::new(window).label("Saved").duration(2.0))
//!     .unwrap();
//!
//! // Later, route due events back
//! for event in notifier.scheduler_mut().advance(Duration::from_secs(2)) {
//!     notifier.update(event);
//! }
//! ```

mod controller;
mod event;
mod instance;
mod options;

pub use controller::Notifier;
pub use event::{Event, Generation};
pub use instance::Toast;
pub use options::{HideOptions, ShowOptions, TapHandler};
