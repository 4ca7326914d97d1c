//! Rendering shape trees onto a drawing surface
//!
//! This module is organized into submodules:
//! - `defaults`: Default render settings
//! - `surface`: The [`Surface`] contract hosts implement
//! - `scope`: Save/restore guards around surface state changes
//! - `record`: [`Recorder`], an in-memory surface
//!
//! Rendering is a depth-first, pre-order walk. Combinators change surface
//! state on the way down and restore it on the way back up, so nothing a
//! subtree does is visible to its siblings or to the caller.

pub mod defaults;
pub mod record;
mod scope;
pub mod surface;

pub use record::{Command, Figure, Mark, Recorder};
pub use surface::Surface;

use crate::errors::RenderError;
use crate::log::debug;
use crate::shape::{
    Circle, Fill, Group, Location, Outline, Point, Polygon, Rectangle, Shape, StrokeColor,
};
use crate::types::{PaintStyle, Segment};
use crate::visit::Visitor;

/// Settings for [`render`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderOptions {
    /// Trees deeper than this are rejected before anything is drawn.
    pub max_depth: usize,
    /// Paint style at the root; restored when rendering ends.
    pub base_style: PaintStyle,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            max_depth: defaults::MAX_DEPTH,
            base_style: defaults::BASE_STYLE,
        }
    }
}

impl RenderOptions {
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    pub fn with_base_style(mut self, base_style: PaintStyle) -> Self {
        self.base_style = base_style;
        self
    }
}

/// Render `shape` onto `surface`.
///
/// The tree's depth is checked first, so an oversized tree fails with no
/// calls made on the surface. On success the surface's origin, stroke color
/// and paint style are what they were before the call.
pub fn render<S: Surface + ?Sized>(
    shape: &Shape,
    surface: &mut S,
    options: &RenderOptions,
) -> Result<(), RenderError> {
    shape.check_depth(options.max_depth)?;
    debug!(
        kind = %shape.kind(),
        max_depth = options.max_depth,
        base_style = %options.base_style,
        "rendering shape tree"
    );

    let mut draw = Draw::new(surface);
    let mut root = draw.styled(options.base_style);
    shape.accept(&mut *root);
    Ok(())
}

impl Shape {
    /// Render with [`RenderOptions::default`].
    pub fn render<S: Surface + ?Sized>(&self, surface: &mut S) -> Result<(), RenderError> {
        render(self, surface, &RenderOptions::default())
    }
}

/// Visitor that issues drawing calls for each shape.
///
/// Recurses without a depth check; prefer [`render`] for untrusted trees.
pub struct Draw<'s, S: Surface + ?Sized> {
    surface: &'s mut S,
}

impl<'s, S: Surface + ?Sized> Draw<'s, S> {
    pub fn new(surface: &'s mut S) -> Self {
        Self { surface }
    }
}

impl<S: Surface + ?Sized> Visitor for Draw<'_, S> {
    type Output = ();

    fn on_circle(&mut self, circle: &Circle) {
        self.surface.draw_circle(circle.radius());
    }

    fn on_rectangle(&mut self, rectangle: &Rectangle) {
        self.surface
            .draw_rectangle(rectangle.width(), rectangle.height());
    }

    fn on_polygon(&mut self, polygon: &Polygon) {
        if polygon.points().len() < 2 {
            return;
        }
        let segments: Vec<Segment> = polygon.edges().collect();
        self.surface.draw_polyline(&segments);
    }

    fn on_point(&mut self, _: &Point) {
        self.surface.draw_point();
    }

    fn on_group(&mut self, group: &Group) {
        for shape in group.shapes() {
            shape.accept(self);
        }
    }

    fn on_location(&mut self, location: &Location) {
        let mut scope = self.translated(location.offset());
        location.shape().accept(&mut *scope);
    }

    fn on_stroke_color(&mut self, stroke_color: &StrokeColor) {
        let mut scope = self.colored(stroke_color.color());
        stroke_color.shape().accept(&mut *scope);
    }

    fn on_fill(&mut self, fill: &Fill) {
        let mut scope = self.styled(PaintStyle::FillAndStroke);
        fill.shape().accept(&mut *scope);
    }

    fn on_outline(&mut self, outline: &Outline) {
        let mut scope = self.styled(PaintStyle::Stroke);
        outline.shape().accept(&mut *scope);
    }
}
