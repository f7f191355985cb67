// SPDX-License-Identifier: MPL-2.0
//! Iced rendering of a [`RetainedSurface`].
//!
//! Opacity and scale are inherited down the tree. Children of a container
//! are stacked and centered, except labels, which span the full width and
//! sit at the bottom edge.

use super::{NodeId, NodeKind, RetainedSurface, Spinner};
use iced::alignment::{Horizontal, Vertical};
use iced::font::{self, Font};
use iced::widget::image::{Handle, Image};
use iced::widget::{container, mouse_area, text, Container, Stack, Text};
use iced::{Background, Border, Color, Element, Length, Padding, Theme};

/// Renders `node` and its visible descendants.
///
/// `on_tap` is emitted when a node with a tap listener is released.
pub fn view<'a, Message: Clone + 'a>(
    surface: &'a RetainedSurface,
    node: NodeId,
    on_tap: Message,
) -> Element<'a, Message> {
    render(surface, node, 1.0, 1.0, &on_tap)
}

fn render<'a, Message: Clone + 'a>(
    surface: &'a RetainedSurface,
    id: NodeId,
    inherited_opacity: f32,
    inherited_scale: f32,
    on_tap: &Message,
) -> Element<'a, Message> {
    let Some(node) = surface.node(id).filter(|node| node.is_visible()) else {
        return empty();
    };
    let opacity = (inherited_opacity * node.opacity()).clamp(0.0, 1.0);
    let scale = inherited_scale * node.scale();
    let width = scaled_length(node.width(), scale);
    let height = scaled_length(node.height(), scale);

    let element: Element<'a, Message> = match node.kind() {
        NodeKind::Container => {
            let children: Vec<Element<'a, Message>> = node
                .children()
                .iter()
                .map(|child| place(surface, *child, render(surface, *child, opacity, scale, on_tap)))
                .collect();
            Stack::with_children(children)
                .width(fill_if_shrink(width))
                .height(fill_if_shrink(height))
                .into()
        }
        NodeKind::Shape { color, radius } => {
            let fill = with_alpha(color, opacity);
            let radius = radius * scale;
            Container::new(text(""))
                .width(width)
                .height(height)
                .style(move |_theme: &Theme| container::Style {
                    background: Some(Background::Color(fill)),
                    border: Border {
                        radius: radius.into(),
                        ..Border::default()
                    },
                    ..Default::default()
                })
                .into()
        }
        NodeKind::Spinner => Spinner::new(with_alpha(Color::WHITE, opacity), surface.spinner_rotation())
            .size(super::spinner::SPINNER_SIZE * scale)
            .into_element(),
        NodeKind::Image => match node.image() {
            Some(source) => Image::new(Handle::from_path(source))
                .opacity(opacity)
                .into(),
            None => empty(),
        },
        NodeKind::Label(style) => {
            let font = if style.bold {
                Font {
                    weight: font::Weight::Bold,
                    ..Font::DEFAULT
                }
            } else {
                Font::DEFAULT
            };
            let size = style.size * scale;
            let label = |color: Color| {
                Text::new(node.text())
                    .size(size)
                    .font(font)
                    .style(move |_theme: &Theme| text::Style { color: Some(color) })
            };
            let shadow = Container::new(label(with_alpha(style.shadow_color, opacity))).padding(
                Padding {
                    top: style.shadow_offset_y * scale,
                    ..Padding::ZERO
                },
            );
            Stack::new()
                .push(shadow)
                .push(label(with_alpha(style.color, opacity)))
                .into()
        }
    };

    if node.is_listening() {
        mouse_area(element).on_release(on_tap.clone()).into()
    } else {
        element
    }
}

/// Positions a rendered child inside its parent's stack.
fn place<'a, Message: 'a>(
    surface: &RetainedSurface,
    id: NodeId,
    element: Element<'a, Message>,
) -> Element<'a, Message> {
    let (vertical, bottom) = match surface.node(id).map(super::Node::kind) {
        Some(NodeKind::Label(style)) => (Vertical::Bottom, style.bottom_inset),
        _ => (Vertical::Center, 0.0),
    };
    Container::new(element)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(Horizontal::Center)
        .align_y(vertical)
        .padding(Padding {
            bottom,
            ..Padding::ZERO
        })
        .into()
}

fn scaled_length(size: Option<f32>, scale: f32) -> Length {
    size.map_or(Length::Shrink, |size| Length::Fixed((size * scale).max(0.0)))
}

fn fill_if_shrink(length: Length) -> Length {
    if length == Length::Shrink {
        Length::Fill
    } else {
        length
    }
}

fn with_alpha(color: Color, opacity: f32) -> Color {
    Color {
        a: color.a * opacity,
        ..color
    }
}

fn empty<'a, Message: 'a>() -> Element<'a, Message> {
    Container::new(text(""))
        .width(Length::Shrink)
        .height(Length::Shrink)
        .into()
}
