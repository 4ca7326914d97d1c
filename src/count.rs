//! Primitive-shape counting

use crate::shape::{
    Circle, Fill, Group, Location, Outline, Point, Polygon, Rectangle, Shape, StrokeColor,
};
use crate::visit::Visitor;

/// Counts the primitive shapes reachable from a shape.
///
/// Each primitive counts once; combinators add nothing of their own.
#[derive(Debug, Clone, Copy, Default)]
pub struct Count;

impl Visitor for Count {
    type Output = usize;

    fn on_circle(&mut self, _: &Circle) -> usize {
        1
    }

    fn on_rectangle(&mut self, _: &Rectangle) -> usize {
        1
    }

    fn on_polygon(&mut self, _: &Polygon) -> usize {
        1
    }

    fn on_point(&mut self, _: &Point) -> usize {
        1
    }

    fn on_group(&mut self, group: &Group) -> usize {
        group.shapes().iter().map(|shape| shape.accept(self)).sum()
    }

    fn on_location(&mut self, location: &Location) -> usize {
        location.shape().accept(self)
    }

    fn on_stroke_color(&mut self, stroke_color: &StrokeColor) -> usize {
        stroke_color.shape().accept(self)
    }

    fn on_fill(&mut self, fill: &Fill) -> usize {
        fill.shape().accept(self)
    }

    fn on_outline(&mut self, outline: &Outline) -> usize {
        outline.shape().accept(self)
    }
}

impl Shape {
    /// Number of primitive shapes in this tree.
    pub fn count(&self) -> usize {
        self.accept(&mut Count)
    }
}
