//! Shape visitor
//!
//! A computation over the shape tree implements [`Visitor`], one handler per
//! variant, and is applied with [`Shape::accept`]. The trait has no default
//! methods: adding a variant to [`Shape`] breaks every visitor until it
//! handles the new case.
//!
//! Handlers decide themselves whether and in which order to recurse, by
//! calling `accept` on the children they are given. The tree is borrowed
//! immutably throughout; any state belongs to the visitor.
//!
//! # Example
//!
//! ```
//! use shapetree::shape::*;
//! use shapetree::visit::Visitor;
//!
//! /// Largest circle radius in a tree.
//! struct MaxRadius;
//!
//! impl Visitor for MaxRadius {
//!     type Output = u32;
//!
//!     fn on_circle(&mut self, c: &Circle) -> u32 { c.radius() }
//!     fn on_rectangle(&mut self, _: &Rectangle) -> u32 { 0 }
//!     fn on_polygon(&mut self, _: &Polygon) -> u32 { 0 }
//!     fn on_point(&mut self, _: &Point) -> u32 { 0 }
//!     fn on_group(&mut self, g: &Group) -> u32 {
//!         g.shapes().iter().map(|s| s.accept(self)).max().unwrap_or(0)
//!     }
//!     fn on_location(&mut self, l: &Location) -> u32 { l.shape().accept(self) }
//!     fn on_stroke_color(&mut self, c: &StrokeColor) -> u32 { c.shape().accept(self) }
//!     fn on_fill(&mut self, f: &Fill) -> u32 { f.shape().accept(self) }
//!     fn on_outline(&mut self, o: &Outline) -> u32 { o.shape().accept(self) }
//! }
//!
//! let shape = Shape::group([Shape::circle(3), Shape::location(1, 1, Shape::circle(8))]);
//! assert_eq!(shape.accept(&mut MaxRadius), 8);
//! ```

use crate::shape::{
    Circle, Fill, Group, Location, Outline, Point, Polygon, Rectangle, Shape, StrokeColor,
};

/// A computation with one handler per shape variant.
pub trait Visitor {
    /// Result produced for each visited shape.
    type Output;

    fn on_circle(&mut self, circle: &Circle) -> Self::Output;

    fn on_rectangle(&mut self, rectangle: &Rectangle) -> Self::Output;

    fn on_polygon(&mut self, polygon: &Polygon) -> Self::Output;

    fn on_point(&mut self, point: &Point) -> Self::Output;

    fn on_group(&mut self, group: &Group) -> Self::Output;

    fn on_location(&mut self, location: &Location) -> Self::Output;

    fn on_stroke_color(&mut self, stroke_color: &StrokeColor) -> Self::Output;

    fn on_fill(&mut self, fill: &Fill) -> Self::Output;

    fn on_outline(&mut self, outline: &Outline) -> Self::Output;
}

impl Shape {
    /// Dispatch to the handler matching this shape's variant.
    pub fn accept<V: Visitor + ?Sized>(&self, visitor: &mut V) -> V::Output {
        match self {
            Shape::Circle(c) => visitor.on_circle(c),
            Shape::Rectangle(r) => visitor.on_rectangle(r),
            Shape::Polygon(p) => visitor.on_polygon(p),
            Shape::Point(p) => visitor.on_point(p),
            Shape::Group(g) => visitor.on_group(g),
            Shape::Location(l) => visitor.on_location(l),
            Shape::StrokeColor(c) => visitor.on_stroke_color(c),
            Shape::Fill(f) => visitor.on_fill(f),
            Shape::Outline(o) => visitor.on_outline(o),
        }
    }
}
