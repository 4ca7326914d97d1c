//! The drawing surface contract
//!
//! A surface is whatever the host draws on. It owns the current transform and
//! paint state; the renderer only changes that state through these calls and
//! always puts it back the way it found it.

use crate::types::{Color, PaintStyle, Segment};

/// Drawing target used by [`Draw`](super::Draw).
///
/// All figures are drawn relative to the surface's current origin.
pub trait Surface {
    /// Circle of `radius` centered on the current origin.
    fn draw_circle(&mut self, radius: u32);

    /// Rectangle with its top-left corner on the current origin.
    fn draw_rectangle(&mut self, width: u32, height: u32);

    /// Single point on the current origin.
    fn draw_point(&mut self);

    /// Disconnected line segments, in the current frame.
    fn draw_polyline(&mut self, segments: &[Segment]);

    /// Move the origin by (dx, dy). Translations add up; the negated call undoes one.
    fn translate(&mut self, dx: i32, dy: i32);

    fn stroke_color(&self) -> Color;

    fn set_stroke_color(&mut self, color: Color);

    fn paint_style(&self) -> PaintStyle;

    fn set_paint_style(&mut self, style: PaintStyle);
}

impl<S: Surface + ?Sized> Surface for &mut S {
    fn draw_circle(&mut self, radius: u32) {
        (**self).draw_circle(radius);
    }

    fn draw_rectangle(&mut self, width: u32, height: u32) {
        (**self).draw_rectangle(width, height);
    }

    fn draw_point(&mut self) {
        (**self).draw_point();
    }

    fn draw_polyline(&mut self, segments: &[Segment]) {
        (**self).draw_polyline(segments);
    }

    fn translate(&mut self, dx: i32, dy: i32) {
        (**self).translate(dx, dy);
    }

    fn stroke_color(&self) -> Color {
        (**self).stroke_color()
    }

    fn set_stroke_color(&mut self, color: Color) {
        (**self).set_stroke_color(color);
    }

    fn paint_style(&self) -> PaintStyle {
        (**self).paint_style()
    }

    fn set_paint_style(&mut self, style: PaintStyle) {
        (**self).set_paint_style(style);
    }
}
