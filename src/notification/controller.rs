// SPDX-License-Identifier: MPL-2.0
//! The notification controller.
//!
//! # Lifecycle
//!
//! ```text
//! Uninitialized --show--> Shown <--show/hide--> Hidden
//!       ^                   |                     |
//!       +----set_defaults---+---------------------+
//! ```
//!
//! The overlay is built on the first `show` and reused by every later one.
//! Changing the defaults discards it so the next `show` rebuilds it with the
//! new size.

use super::event::{Event, Generation};
use super::instance::Toast;
use super::options::{HideOptions, ShowOptions, TapHandler};
use crate::config::{
    is_truthy, is_truthy_number, Defaults, DefaultsPatch, POP_IN_SCALE, STORAGE_KEY,
};
use crate::error::{Error, Result};
use crate::scheduler::Scheduler;
use crate::store::SettingsStore;
use crate::surface::{NodeId, Surface};
use serde_json::Value;
use std::time::Duration;

/// Owns the single notification overlay and its collaborators.
///
/// Every operation reports failures to the `log` facade (prefixed with
/// `Notification/`) and returns them; none of them panic.
pub struct Notifier<S, C, R> {
    store: S,
    scheduler: C,
    surface: R,
    instance: Option<Toast>,
    /// Parent the overlay was last attached to.
    attached_to: Option<NodeId>,
    tap_handler: Option<TapHandler>,
    generation: Generation,
}

impl<S: SettingsStore, C: Scheduler, R: Surface> Notifier<S, C, R> {
    /// Creates a notifier. No overlay is built until the first `show`.
    pub fn new(store: S, scheduler: C, surface: R) -> Self {
        Self {
            store,
            scheduler,
            surface,
            instance: None,
            attached_to: None,
            tap_handler: None,
            generation: Generation::default(),
        }
    }

    /// Displays the notification inside the given parent.
    ///
    /// Builds the overlay on first use, then updates its label, image or
    /// spinner, schedules the auto-dismiss if a duration resolves, attaches it
    /// and plays the pop-in animation. The tap handler of any earlier call is
    /// replaced.
    pub fn show(&mut self, options: ShowOptions) -> Result<()> {
        let result = self.try_show(options);
        report(result)
    }

    /// Like [`show`](Self::show), reading the options from a loosely typed
    /// value.
    pub fn show_value(&mut self, parameters: &Value) -> Result<()> {
        let result = ShowOptions::try_from(parameters).and_then(|options| self.try_show(options));
        report(result)
    }

    /// Fades the notification out and removes it from the given parent.
    ///
    /// The overlay is kept for reuse by the next `show`.
    pub fn hide(&mut self, options: HideOptions) -> Result<()> {
        let result = self.try_hide(options);
        report(result)
    }

    /// Like [`hide`](Self::hide), reading the options from a loosely typed
    /// value.
    pub fn hide_value(&mut self, parameters: &Value) -> Result<()> {
        let result = self
            .initialized()
            .and_then(|_| HideOptions::try_from(parameters))
            .and_then(|options| self.try_hide(options));
        report(result)
    }

    /// Replaces the label text without animation.
    pub fn set_label(&mut self, text: &str) -> Result<()> {
        let result = self.initialized().map(|toast| {
            self.surface.set_text(toast.label(), text);
        });
        report(result)
    }

    /// Returns the stored default for `key`, or `None` if it is unknown or
    /// falsy.
    ///
    /// Persists the fallback record if none is stored yet.
    pub fn get_default(&mut self, key: &str) -> Result<Option<Value>> {
        let result = self.load_defaults().map(|defaults| defaults.get(key));
        report(result)
    }

    /// Returns the stored defaults record, persisting the fallback record if
    /// none is stored yet (or the stored one is unreadable).
    pub fn defaults(&mut self) -> Result<Defaults> {
        let result = self.load_defaults();
        report(result)
    }

    /// Merges `patch` over the stored defaults, persists the result and
    /// discards the overlay so the next `show` rebuilds it.
    ///
    /// Falsy values in the patch are ignored, see [`Defaults::merge`]. An
    /// infinite size or duration fails the call and nothing is persisted.
    pub fn set_defaults(&mut self, patch: DefaultsPatch) -> Result<()> {
        let result = patch.validate().and_then(|()| {
            let current = self.stored_defaults().unwrap_or_default();
            self.replace_defaults(&current.merge(&patch))
        });
        report(result)
    }

    /// Like [`set_defaults`](Self::set_defaults), reading the patch from a
    /// loosely typed value.
    ///
    /// A falsy value (`null`, `false`, `0`, `""`) resets the defaults. A field
    /// of the wrong type fails the call and nothing is persisted.
    pub fn set_defaults_value(&mut self, parameters: &Value) -> Result<()> {
        if !is_truthy(parameters) {
            return self.reset_defaults();
        }
        let result = DefaultsPatch::try_from(parameters).and_then(|patch| {
            let current = self.stored_defaults().unwrap_or_default();
            self.replace_defaults(&current.merge(&patch))
        });
        report(result)
    }

    /// Restores and persists the fallback defaults and discards the overlay.
    pub fn reset_defaults(&mut self) -> Result<()> {
        let result = self.replace_defaults(&Defaults::default());
        report(result)
    }

    /// Routes a deferred event back into the notifier.
    ///
    /// Auto-dismiss and hide completion events from an earlier `show` are
    /// ignored.
    pub fn update(&mut self, event: Event) {
        match event {
            Event::AutoDismiss { parent, generation } => {
                if generation != self.generation {
                    log::debug!("Ignoring stale auto-dismiss");
                    return;
                }
                // Failures are already reported by `hide`
                let _ = self.hide(HideOptions::new(parent));
            }
            Event::HideFinished { parent, generation } => {
                if generation != self.generation {
                    log::debug!("Ignoring stale hide completion");
                    return;
                }
                if let Some(toast) = self.instance {
                    self.surface.set_visible(toast.image(), false);
                    self.surface.set_visible(toast.spinner(), false);
                    self.surface.remove_child(parent, toast.root());
                    if self.attached_to == Some(parent) {
                        self.attached_to = None;
                    }
                }
            }
            Event::Tapped => {
                if let Some(handler) = self.tap_handler.as_mut() {
                    handler();
                }
            }
        }
    }

    /// The cached overlay, if one has been built since the last defaults
    /// change.
    #[must_use]
    pub fn instance(&self) -> Option<&Toast> {
        self.instance.as_ref()
    }

    /// Whether a tap handler is registered.
    #[must_use]
    pub fn has_tap_handler(&self) -> bool {
        self.tap_handler.is_some()
    }

    #[must_use]
    pub fn store(&self) -> &S {
        &self.store
    }

    #[must_use]
    pub fn scheduler(&self) -> &C {
        &self.scheduler
    }

    pub fn scheduler_mut(&mut self) -> &mut C {
        &mut self.scheduler
    }

    #[must_use]
    pub fn surface(&self) -> &R {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut R {
        &mut self.surface
    }

    fn try_show(&mut self, options: ShowOptions) -> Result<()> {
        let ShowOptions {
            parent,
            label,
            spinner,
            image,
            duration,
            on_tap,
        } = options;

        self.check_parent(parent)?;

        let defaults = self.stored_defaults().unwrap_or_default();
        let label = label
            .filter(|label| !label.is_empty())
            .unwrap_or(defaults.label);
        let spinner = spinner.unwrap_or(defaults.spinner);
        let image = image.or(defaults.image);
        let duration = duration.or(defaults.duration);

        self.generation = self.generation.next();
        let toast = match self.instance {
            Some(toast) => toast,
            None => {
                #[allow(clippy::cast_possible_truncation)]
                let toast = Toast::build(&mut self.surface, defaults.size as f32);
                log::debug!("Built notification overlay of size {}", toast.size());
                self.instance = Some(toast);
                toast
            }
        };

        self.surface.set_text(toast.label(), &label);

        match image.as_deref().filter(|image| !image.is_empty()) {
            Some(source) => {
                self.surface.set_image(toast.image(), source);
                self.surface.set_visible(toast.image(), true);
            }
            None if spinner => self.surface.set_visible(toast.spinner(), true),
            None => {}
        }

        if let Some(delay) = duration.and_then(auto_dismiss_delay) {
            log::debug!("Auto-dismissing notification in {:?}", delay);
            self.scheduler.schedule_once(
                delay,
                Event::AutoDismiss {
                    parent,
                    generation: self.generation,
                },
            );
        }

        self.surface.add_child(parent, toast.root());
        self.attached_to = Some(parent);

        self.surface.set_scale(toast.container(), POP_IN_SCALE);
        self.surface.animate(toast.container(), toast.pop_in(), None);

        if self.tap_handler.take().is_some() {
            self.surface.set_tap_listener(toast.root(), false);
        }
        if let Some(handler) = on_tap {
            self.surface.set_tap_listener(toast.root(), true);
            self.tap_handler = Some(handler);
        }

        Ok(())
    }

    fn try_hide(&mut self, options: HideOptions) -> Result<()> {
        let toast = self.initialized()?;
        self.check_parent(options.parent)?;

        self.surface.animate(
            toast.container(),
            Toast::fade_out(),
            Some(Event::HideFinished {
                parent: options.parent,
                generation: self.generation,
            }),
        );
        Ok(())
    }

    /// A parent must be a container outside the overlay itself.
    fn check_parent(&self, parent: NodeId) -> Result<()> {
        let inside_overlay = self
            .instance
            .is_some_and(|toast| self.surface.contains(toast.root(), parent));
        if !self.surface.is_container(parent) || inside_overlay {
            return Err(Error::InvalidParent);
        }
        Ok(())
    }

    fn initialized(&self) -> Result<Toast> {
        self.instance.ok_or(Error::NotInitialized)
    }

    fn load_defaults(&mut self) -> Result<Defaults> {
        if let Some(defaults) = self.stored_defaults() {
            return Ok(defaults);
        }
        let defaults = Defaults::default();
        self.persist(&defaults)?;
        Ok(defaults)
    }

    /// Reads the stored record without writing anything.
    fn stored_defaults(&self) -> Option<Defaults> {
        let blob = self.store.get_string(STORAGE_KEY)?;
        match Defaults::from_json(&blob) {
            Ok(defaults) => Some(defaults),
            Err(error) => {
                log::warn!("Notification/ ignoring unreadable defaults: {}", error);
                None
            }
        }
    }

    fn persist(&mut self, defaults: &Defaults) -> Result<()> {
        let blob = defaults.to_json()?;
        self.store.set_string(STORAGE_KEY, &blob)
    }

    fn replace_defaults(&mut self, defaults: &Defaults) -> Result<()> {
        self.persist(defaults)?;
        self.invalidate();
        Ok(())
    }

    /// Destroys the overlay and drops its tap handler.
    fn invalidate(&mut self) {
        let Some(toast) = self.instance.take() else {
            return;
        };
        self.attached_to = None;
        self.tap_handler = None;
        self.surface.destroy(toast.root());
        self.generation = self.generation.next();
        log::debug!("Discarded notification overlay");
    }
}

/// Converts a truthy duration in seconds into a delay.
///
/// Negative durations fire immediately; non-finite ones never fire.
fn auto_dismiss_delay(seconds: f64) -> Option<Duration> {
    if !is_truthy_number(seconds) {
        return None;
    }
    Duration::try_from_secs_f64(seconds.max(0.0)).ok()
}

fn report<T>(result: Result<T>) -> Result<T> {
    if let Err(error) = &result {
        log::error!("Notification/ {}", error);
    }
    result
}
