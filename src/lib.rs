// SPDX-License-Identifier: MPL-2.0
//! `iced_toast` is a single, reusable pop-in notification for Iced applications.
//!
//! A [`Notifier`](notification::Notifier) owns one overlay showing a label
//! with an optional image or spinner. Repeated `show` calls update the live
//! overlay instead of stacking new ones. Defaults for omitted fields are
//! persisted through a [`SettingsStore`](store::SettingsStore), auto-dismiss
//! timers go through a [`Scheduler`](scheduler::Scheduler), and drawing goes
//! through a [`Surface`](surface::Surface).

#![doc(html_root_url = "https://docs.rs/iced_toast/0.1.0")]

pub mod config;
pub mod error;
pub mod notification;
pub mod scheduler;
pub mod store;
pub mod surface;
