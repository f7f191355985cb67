// SPDX-License-Identifier: MPL-2.0
//! Activity indicator drawn on a canvas.
//!
//! The surface recreates the spinner on every view with the current
//! rotation, so each draw builds a fresh frame.

use iced::widget::canvas::{self, path, Canvas, Geometry, Path, Stroke};
use iced::{mouse, Color, Length, Radians, Rectangle, Renderer, Theme};
use std::f32::consts::{FRAC_PI_2, PI};

/// Diameter of the spinner at scale 1.
pub const SPINNER_SIZE: f32 = 37.0;

const STROKE_WIDTH: f32 = 3.0;
const TRACK_ALPHA: f32 = 0.25;

/// Half-turn arc rotating over a faint circular track.
#[derive(Debug, Clone, Copy)]
pub struct Spinner {
    rotation: f32,
    color: Color,
    size: f32,
}

impl Spinner {
    /// Creates a spinner with the given color and rotation angle (radians).
    #[must_use]
    pub fn new(color: Color, rotation: f32) -> Self {
        Self {
            rotation,
            color,
            size: SPINNER_SIZE,
        }
    }

    #[must_use]
    pub fn size(mut self, size: f32) -> Self {
        self.size = size.max(0.0);
        self
    }

    pub fn into_element<'a, Message: 'a>(self) -> iced::Element<'a, Message> {
        let size = self.size;
        Canvas::new(self)
            .width(Length::Fixed(size))
            .height(Length::Fixed(size))
            .into()
    }

    /// Start and end angles of the arc, starting from the top.
    fn arc_angles(&self) -> (f32, f32) {
        let start = self.rotation - FRAC_PI_2;
        (start, start + PI)
    }
}

impl<Message> canvas::Program<Message> for Spinner {
    type State = ();

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &Renderer,
        _theme: &Theme,
        bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<Geometry> {
        let mut frame = canvas::Frame::new(renderer, bounds.size());
        let center = frame.center();
        let radius = (frame.width().min(frame.height()) / 2.0 - STROKE_WIDTH).max(0.0);

        let track = Color {
            a: self.color.a * TRACK_ALPHA,
            ..self.color
        };
        frame.stroke(
            &Path::circle(center, radius),
            Stroke::default().with_width(STROKE_WIDTH).with_color(track),
        );

        let (start, end) = self.arc_angles();
        let arc = Path::new(|builder| {
            builder.arc(path::Arc {
                center,
                radius,
                start_angle: Radians(start),
                end_angle: Radians(end),
            });
        });
        frame.stroke(
            &arc,
            Stroke::default()
                .with_width(STROKE_WIDTH)
                .with_color(self.color)
                .with_line_cap(canvas::LineCap::Round),
        );

        vec![frame.into_geometry()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn size_is_never_negative() {
        let spinner = Spinner::new(Color::WHITE, 0.0).size(-4.0);
        assert_eq!(spinner.size, 0.0);
    }

    #[test]
    fn default_size_matches_constant() {
        let spinner = Spinner::new(Color::WHITE, 1.0);
        assert_eq!(spinner.size, SPINNER_SIZE);
    }

    #[test]
    fn arc_spans_half_a_turn_from_the_top() {
        let (start, end) = Spinner::new(Color::WHITE, 0.0).arc_angles();
        assert_eq!(start, -FRAC_PI_2);
        assert!((end - start - PI).abs() < f32::EPSILON);

        let (rotated, _) = Spinner::new(Color::WHITE, PI).arc_angles();
        assert!((rotated - FRAC_PI_2).abs() < 1e-6);
    }
}
