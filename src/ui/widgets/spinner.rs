// SPDX-License-Identifier: MPL-2.0
//! In-progress indicator drawn on a Canvas.

use iced::widget::canvas::{self, Canvas, Frame, Geometry, Path, Stroke};
use iced::{mouse, Color, Length, Point, Rectangle, Renderer, Theme};
use std::f32::consts::TAU;

const STROKE_WIDTH: f32 = 2.5;
const ARC_SPAN: f32 = 0.75 * TAU;
const ARC_SEGMENTS: usize = 24;

/// Rotating arc over a faint full circle. The caller owns the rotation angle
/// and advances it on a tick subscription.
pub struct Spinner {
    rotation: f32,
    color: Color,
    size: f32,
}

impl Spinner {
    #[must_use]
    pub fn new(color: Color, rotation: f32, size: f32) -> Self {
        Self {
            rotation,
            color,
            size,
        }
    }

    /// Wraps the spinner in a fixed-size Canvas element.
    pub fn into_element<Message: 'static>(self) -> iced::Element<'static, Message> {
        let size = self.size;
        Canvas::new(self)
            .width(Length::Fixed(size))
            .height(Length::Fixed(size))
            .into()
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
        let mut frame = Frame::new(renderer, bounds.size());
        let center = frame.center();
        let radius = frame.width().min(frame.height()) / 2.0 - STROKE_WIDTH;

        let track = Path::circle(center, radius);
        frame.stroke(
            &track,
            Stroke::default().with_width(STROKE_WIDTH).with_color(Color {
                a: 0.2,
                ..self.color
            }),
        );

        // Approximate the arc with short line segments; the canvas path API
        // has no direct arc-by-angle primitive.
        let mut arc = canvas::path::Builder::new();
        let point_at = |angle: f32| {
            Point::new(
                center.x + radius * angle.cos(),
                center.y + radius * angle.sin(),
            )
        };

        arc.move_to(point_at(self.rotation));
        for i in 1..=ARC_SEGMENTS {
            let angle = self.rotation + ARC_SPAN * (i as f32 / ARC_SEGMENTS as f32);
            arc.line_to(point_at(angle));
        }

        frame.stroke(
            &arc.build(),
            Stroke::default()
                .with_width(STROKE_WIDTH)
                .with_color(self.color)
                .with_line_cap(canvas::LineCap::Round),
        );

        vec![frame.into_geometry()]
    }
}
