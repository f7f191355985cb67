// SPDX-License-Identifier: MPL-2.0
//! The cached notification overlay.

use crate::config::{
    BACKDROP_COLOR, BACKDROP_OPACITY, BACKDROP_RADIUS, HIDDEN_OPACITY, HIDE_ANIMATION,
    LABEL_BOTTOM_INSET, LABEL_COLOR, LABEL_FONT_SIZE, LABEL_SHADOW_COLOR, LABEL_SHADOW_OFFSET_Y,
    RESTING_SCALE, SHOWN_OPACITY, SHOW_ANIMATION,
};
use crate::surface::{Animation, LabelStyle, NodeId, NodeKind, NodeSpec, Surface};

/// Handles to the nodes making up one notification overlay.
///
/// ```text
/// root (full size, receives taps)
/// └── container (size x size, fades and scales)
///     ├── backdrop
///     ├── spinner (hidden)
///     ├── image (hidden)
///     └── label
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Toast {
    root: NodeId,
    container: NodeId,
    backdrop: NodeId,
    spinner: NodeId,
    image: NodeId,
    label: NodeId,
    size: f32,
    pop_in: Animation,
}

impl Toast {
    /// Creates the overlay nodes on `surface` with a backdrop of `size`.
    pub fn build<R: Surface>(surface: &mut R, size: f32) -> Self {
        let root = surface.create(NodeSpec::container());

        let container = surface.create(
            NodeSpec::container()
                .size(size, size)
                .opacity(HIDDEN_OPACITY)
                .untouchable(),
        );
        surface.add_child(root, container);

        let backdrop = surface.create(
            NodeSpec::new(NodeKind::Shape {
                color: BACKDROP_COLOR,
                radius: BACKDROP_RADIUS,
            })
            .size(size, size)
            .opacity(BACKDROP_OPACITY),
        );
        surface.add_child(container, backdrop);

        let spinner = surface.create(NodeSpec::new(NodeKind::Spinner).hidden().untouchable());
        surface.add_child(container, spinner);

        let image = surface.create(NodeSpec::new(NodeKind::Image).hidden().untouchable());
        surface.add_child(container, image);

        let label = surface.create(NodeSpec::new(NodeKind::Label(LabelStyle {
            color: LABEL_COLOR,
            size: LABEL_FONT_SIZE,
            bold: true,
            shadow_color: LABEL_SHADOW_COLOR,
            shadow_offset_y: LABEL_SHADOW_OFFSET_Y,
            bottom_inset: LABEL_BOTTOM_INSET,
        })));
        surface.add_child(container, label);

        Self {
            root,
            container,
            backdrop,
            spinner,
            image,
            label,
            size,
            pop_in: Animation::fade(SHOWN_OPACITY, SHOW_ANIMATION).with_scale(RESTING_SCALE),
        }
    }

    /// Node attached to (and removed from) the parent.
    #[must_use]
    pub fn root(&self) -> NodeId {
        self.root
    }

    /// Node that fades and scales.
    #[must_use]
    pub fn container(&self) -> NodeId {
        self.container
    }

    #[must_use]
    pub fn backdrop(&self) -> NodeId {
        self.backdrop
    }

    #[must_use]
    pub fn spinner(&self) -> NodeId {
        self.spinner
    }

    #[must_use]
    pub fn image(&self) -> NodeId {
        self.image
    }

    #[must_use]
    pub fn label(&self) -> NodeId {
        self.label
    }

    /// Backdrop size the overlay was built with.
    #[must_use]
    pub fn size(&self) -> f32 {
        self.size
    }

    /// The reusable scale and fade-in transition.
    #[must_use]
    pub fn pop_in(&self) -> Animation {
        self.pop_in
    }

    /// The fade-out transition run by `hide`.
    #[must_use]
    pub fn fade_out() -> Animation {
        Animation::fade(HIDDEN_OPACITY, HIDE_ANIMATION)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::surface::RetainedSurface;

    #[test]
    fn build_composes_overlay_tree() {
        let mut surface = RetainedSurface::new();
        let toast = Toast::build(&mut surface, 120.0);

        let root = surface.node(toast.root()).unwrap();
        assert_eq!(root.children(), &[toast.container()]);
        assert!(root.parent().is_none());

        let container = surface.node(toast.container()).unwrap();
        assert_eq!(
            container.children(),
            &[toast.backdrop(), toast.spinner(), toast.image(), toast.label()]
        );
        assert_eq!(container.opacity(), HIDDEN_OPACITY);
        assert!(!container.touch_enabled());

        let backdrop = surface.node(toast.backdrop()).unwrap();
        assert_eq!(backdrop.width(), Some(120.0));
        assert_eq!(backdrop.height(), Some(120.0));
        assert_eq!(backdrop.opacity(), BACKDROP_OPACITY);
    }

    #[test]
    fn spinner_and_image_start_hidden() {
        let mut surface = RetainedSurface::new();
        let toast = Toast::build(&mut surface, 100.0);

        assert!(!surface.node(toast.spinner()).unwrap().is_visible());
        assert!(!surface.node(toast.image()).unwrap().is_visible());
        assert!(surface.node(toast.label()).unwrap().is_visible());
    }

    #[test]
    fn pop_in_restores_scale_and_opacity() {
        let mut surface = RetainedSurface::new();
        let toast = Toast::build(&mut surface, 100.0);
        let pop_in = toast.pop_in();

        assert_eq!(pop_in.opacity, SHOWN_OPACITY);
        assert_eq!(pop_in.scale, Some(RESTING_SCALE));
        assert_eq!(pop_in.duration, SHOW_ANIMATION);
        assert_eq!(Toast::fade_out().duration, HIDE_ANIMATION);
    }
}
