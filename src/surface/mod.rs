// SPDX-License-Identifier: MPL-2.0
//! Rendering capability used by the notifier.
//!
//! The notifier never touches widgets directly. It creates nodes, composes
//! them and starts animations through the [`Surface`] trait, and learns about
//! animation completion through the [`Event`] it attached to the animation.
//!
//! # Components
//!
//! - [`RetainedSurface`] - in-memory scene graph with time-based animations
//! - [`view`] - renders a retained scene as an Iced element
//! - [`Spinner`] - canvas activity indicator used by the view

mod retained;
mod spinner;
mod view;

pub use retained::{Node, RetainedSurface};
pub use spinner::Spinner;
pub use view::view;

use crate::notification::Event;
use iced::Color;
use std::time::Duration;

/// Identifier of a node created by a [`Surface`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(u64);

impl NodeId {
    /// Wraps a raw identifier, e.g. one received from a script bridge.
    #[must_use]
    pub const fn from_raw(raw: u64) -> Self {
        Self(raw)
    }

    #[must_use]
    pub const fn raw(self) -> u64 {
        self.0
    }
}

/// Text styling for label nodes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LabelStyle {
    pub color: Color,
    pub size: f32,
    pub bold: bool,
    pub shadow_color: Color,
    pub shadow_offset_y: f32,
    /// Gap between the label and the bottom edge of its parent.
    pub bottom_inset: f32,
}

/// What a node draws.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum NodeKind {
    /// Holds and stacks children.
    Container,
    /// Filled rounded rectangle.
    Shape { color: Color, radius: f32 },
    /// Activity indicator.
    Spinner,
    /// Image loaded from a path or URL set with [`Surface::set_image`].
    Image,
    Label(LabelStyle),
}

/// Initial attributes of a node.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NodeSpec {
    pub kind: NodeKind,
    /// `None` sizes the node to its content (or fills, for containers).
    pub width: Option<f32>,
    pub height: Option<f32>,
    pub opacity: f32,
    pub visible: bool,
    /// Whether the node can receive taps itself.
    pub touch_enabled: bool,
}

impl NodeSpec {
    #[must_use]
    pub fn new(kind: NodeKind) -> Self {
        Self {
            kind,
            width: None,
            height: None,
            opacity: 1.0,
            visible: true,
            touch_enabled: true,
        }
    }

    #[must_use]
    pub fn container() -> Self {
        Self::new(NodeKind::Container)
    }

    #[must_use]
    pub fn size(mut self, width: f32, height: f32) -> Self {
        self.width = Some(width);
        self.height = Some(height);
        self
    }

    #[must_use]
    pub fn opacity(mut self, opacity: f32) -> Self {
        self.opacity = opacity;
        self
    }

    #[must_use]
    pub fn hidden(mut self) -> Self {
        self.visible = false;
        self
    }

    #[must_use]
    pub fn untouchable(mut self) -> Self {
        self.touch_enabled = false;
        self
    }
}

/// Target state of a timed transition.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Animation {
    pub opacity: f32,
    /// Uniform scale to reach, or `None` to leave the scale alone.
    pub scale: Option<f32>,
    pub duration: Duration,
}

impl Animation {
    #[must_use]
    pub fn fade(opacity: f32, duration: Duration) -> Self {
        Self {
            opacity,
            scale: None,
            duration,
        }
    }

    #[must_use]
    pub fn with_scale(mut self, scale: f32) -> Self {
        self.scale = Some(scale);
        self
    }
}

/// Composable view nodes with timed animations.
///
/// Operations on unknown nodes are ignored.
pub trait Surface {
    /// Creates a detached node.
    fn create(&mut self, spec: NodeSpec) -> NodeId;

    /// Returns whether `node` exists and can hold children.
    fn is_container(&self, node: NodeId) -> bool;

    /// Returns whether `node` is `ancestor` or lies somewhere beneath it.
    fn contains(&self, ancestor: NodeId, node: NodeId) -> bool;

    /// Attaches `child` under `parent`, detaching it from any other parent.
    ///
    /// Refused when `parent` is `child` or one of its descendants.
    fn add_child(&mut self, parent: NodeId, child: NodeId);

    /// Detaches `node` and removes it together with its descendants,
    /// stopping their animations without completing them.
    fn destroy(&mut self, node: NodeId);

    /// Detaches `child` if it is currently attached under `parent`.
    fn remove_child(&mut self, parent: NodeId, child: NodeId);

    fn set_text(&mut self, node: NodeId, text: &str);

    fn set_image(&mut self, node: NodeId, source: &str);

    fn set_visible(&mut self, node: NodeId, visible: bool);

    /// Sets the uniform scale transform immediately.
    fn set_scale(&mut self, node: NodeId, scale: f32);

    /// Starts `animation` on `node`, replacing any animation already running
    /// on it. The replaced animation never completes. When this one does,
    /// `on_complete` is handed back to the host.
    fn animate(&mut self, node: NodeId, animation: Animation, on_complete: Option<Event>);

    /// Enables or disables tap reporting for `node`.
    fn set_tap_listener(&mut self, node: NodeId, listening: bool);
}
