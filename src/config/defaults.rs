// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for the notification overlay.
//!
//! This module serves as the single source of truth for the fallback
//! defaults record and the fixed styling of the overlay.
//!
//! # Categories
//!
//! - **Storage**: Key under which the defaults record is persisted
//! - **Fallback**: Values used when no defaults record has been stored
//! - **Style**: Colors, sizes and opacities of the overlay nodes
//! - **Animation**: Pop-in and fade-out timings

use iced::Color;
use std::time::Duration;

// ==========================================================================
// Storage
// ==========================================================================

/// Key of the serialized defaults record in the settings store.
pub const STORAGE_KEY: &str = "iced_toast.notification.defaults";

// ==========================================================================
// Fallback Defaults
// ==========================================================================

/// Width and height of the overlay backdrop.
pub const FALLBACK_SIZE: f64 = 100.0;

/// Label shown when neither the caller nor the stored defaults provide one.
pub const FALLBACK_LABEL: &str = "";

/// Whether the spinner is shown when the caller does not say.
pub const FALLBACK_SPINNER: bool = false;

// ==========================================================================
// Style
// ==========================================================================

/// Backdrop fill (#333).
pub const BACKDROP_COLOR: Color = Color::from_rgb(0.2, 0.2, 0.2);

/// Backdrop opacity.
pub const BACKDROP_OPACITY: f32 = 0.7;

/// Backdrop corner radius.
pub const BACKDROP_RADIUS: f32 = 10.0;

pub const LABEL_COLOR: Color = Color::WHITE;

pub const LABEL_FONT_SIZE: f32 = 11.0;

/// Distance between the label baseline box and the bottom of the backdrop.
pub const LABEL_BOTTOM_INSET: f32 = 5.0;

/// Label drop shadow (#333, one unit down).
pub const LABEL_SHADOW_COLOR: Color = Color::from_rgb(0.2, 0.2, 0.2);
pub const LABEL_SHADOW_OFFSET_Y: f32 = 1.0;

// ==========================================================================
// Animation
// ==========================================================================

/// Scale applied to the container right before the pop-in animation.
pub const POP_IN_SCALE: f32 = 1.5;

/// Scale the pop-in animation settles on.
pub const RESTING_SCALE: f32 = 1.0;

/// Opacity reached by the pop-in animation.
pub const SHOWN_OPACITY: f32 = 1.0;

/// Opacity reached by the fade-out animation.
pub const HIDDEN_OPACITY: f32 = 0.0;

pub const SHOW_ANIMATION: Duration = Duration::from_millis(300);

pub const HIDE_ANIMATION: Duration = Duration::from_millis(200);

// ==========================================================================
// Compile-time Validation
// ==========================================================================

const _: () = {
    assert!(FALLBACK_SIZE > 0.0);
    assert!(BACKDROP_OPACITY > 0.0);
    assert!(BACKDROP_OPACITY <= 1.0);
    assert!(POP_IN_SCALE > RESTING_SCALE);
    assert!(SHOWN_OPACITY > HIDDEN_OPACITY);
    assert!(LABEL_FONT_SIZE > 0.0);
};
