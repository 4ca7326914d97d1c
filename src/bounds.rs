//! Bounding-box calculation
//!
//! The bounding box of a shape is the smallest axis-aligned rectangle that
//! encloses its geometry, expressed as a rectangle placed at an offset from
//! the shape's local origin. Styling combinators have no geometric effect.
//!
//! Edges are computed in 64-bit and saturated back into `i32`/`u32`, so
//! extreme coordinates clamp instead of overflowing.

use std::fmt;

use glam::IVec2;

use crate::shape::{
    Circle, Fill, Group, Location, Outline, Point, Polygon, Rectangle, Shape, StrokeColor,
};
use crate::visit::Visitor;

/// A rectangle anchored at an offset: the typed form of
/// `Location(x, y, Rectangle(width, height))`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Bounds {
    pub offset: IVec2,
    pub rect: Rectangle,
}

impl Bounds {
    /// Zero-size box at the local origin.
    pub const ZERO: Bounds = Bounds::new(0, 0, 0, 0);

    pub const fn new(x: i32, y: i32, width: u32, height: u32) -> Self {
        Bounds {
            offset: IVec2::new(x, y),
            rect: Rectangle::new(width, height),
        }
    }

    /// Build from edge coordinates, clamping into the representable range.
    /// `right`/`bottom` smaller than `left`/`top` give a zero-size box.
    pub fn from_edges(left: i64, top: i64, right: i64, bottom: i64) -> Self {
        let x = clamp_i32(left);
        let y = clamp_i32(top);
        Bounds::new(
            x,
            y,
            clamp_u32(right - i64::from(x)),
            clamp_u32(bottom - i64::from(y)),
        )
    }

    pub fn x(&self) -> i32 {
        self.offset.x
    }

    pub fn y(&self) -> i32 {
        self.offset.y
    }

    pub fn width(&self) -> u32 {
        self.rect.width()
    }

    pub fn height(&self) -> u32 {
        self.rect.height()
    }

    pub fn left(&self) -> i64 {
        i64::from(self.offset.x)
    }

    pub fn top(&self) -> i64 {
        i64::from(self.offset.y)
    }

    pub fn right(&self) -> i64 {
        self.left() + i64::from(self.rect.width())
    }

    pub fn bottom(&self) -> i64 {
        self.top() + i64::from(self.rect.height())
    }

    pub fn is_degenerate(&self) -> bool {
        self.rect.width() == 0 || self.rect.height() == 0
    }

    /// Same box with the offset moved by `by`.
    pub fn translated(self, by: IVec2) -> Bounds {
        Bounds {
            offset: self.offset.saturating_add(by),
            rect: self.rect,
        }
    }

    /// Smallest box enclosing both.
    pub fn union(self, other: Bounds) -> Bounds {
        Bounds::from_edges(
            self.left().min(other.left()),
            self.top().min(other.top()),
            self.right().max(other.right()),
            self.bottom().max(other.bottom()),
        )
    }

    /// Whether `other` lies entirely inside this box (edges may touch).
    pub fn encloses(&self, other: &Bounds) -> bool {
        self.left() <= other.left()
            && self.top() <= other.top()
            && self.right() >= other.right()
            && self.bottom() >= other.bottom()
    }
}

impl Default for Bounds {
    fn default() -> Self {
        Bounds::ZERO
    }
}

impl From<Bounds> for Location {
    fn from(bounds: Bounds) -> Self {
        Location::new(bounds.x(), bounds.y(), bounds.rect)
    }
}

impl From<Bounds> for Shape {
    fn from(bounds: Bounds) -> Self {
        Shape::Location(bounds.into())
    }
}

impl fmt::Display for Bounds {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}x{} at ({},{})",
            self.width(),
            self.height(),
            self.x(),
            self.y()
        )
    }
}

fn clamp_i32(value: i64) -> i32 {
    i32::try_from(value).unwrap_or(if value < 0 { i32::MIN } else { i32::MAX })
}

fn clamp_u32(value: i64) -> u32 {
    u32::try_from(value).unwrap_or(if value < 0 { 0 } else { u32::MAX })
}

/// Computes the [`Bounds`] of a shape.
///
/// A tree with no geometry at all (nothing but empty groups, possibly
/// wrapped) measures as [`Bounds::ZERO`].
#[derive(Debug, Clone, Copy, Default)]
pub struct BoundingBox;

impl Visitor for BoundingBox {
    type Output = Bounds;

    fn on_circle(&mut self, circle: &Circle) -> Bounds {
        Extent.on_circle(circle).unwrap_or_default()
    }

    fn on_rectangle(&mut self, rectangle: &Rectangle) -> Bounds {
        Extent.on_rectangle(rectangle).unwrap_or_default()
    }

    fn on_polygon(&mut self, polygon: &Polygon) -> Bounds {
        Extent.on_polygon(polygon).unwrap_or_default()
    }

    fn on_point(&mut self, point: &Point) -> Bounds {
        Extent.on_point(point).unwrap_or_default()
    }

    fn on_group(&mut self, group: &Group) -> Bounds {
        Extent.on_group(group).unwrap_or_default()
    }

    fn on_location(&mut self, location: &Location) -> Bounds {
        Extent.on_location(location).unwrap_or_default()
    }

    fn on_stroke_color(&mut self, stroke_color: &StrokeColor) -> Bounds {
        Extent.on_stroke_color(stroke_color).unwrap_or_default()
    }

    fn on_fill(&mut self, fill: &Fill) -> Bounds {
        Extent.on_fill(fill).unwrap_or_default()
    }

    fn on_outline(&mut self, outline: &Outline) -> Bounds {
        Extent.on_outline(outline).unwrap_or_default()
    }
}

/// Like [`BoundingBox`], but `None` for a subtree without geometry.
///
/// Empty groups have no extent, so they are left out of a parent group's
/// union instead of stretching it to the origin.
#[derive(Debug, Clone, Copy, Default)]
pub struct Extent;

impl Visitor for Extent {
    type Output = Option<Bounds>;

    fn on_circle(&mut self, circle: &Circle) -> Option<Bounds> {
        let r = i64::from(circle.radius());
        Some(Bounds::from_edges(-r, -r, r, r))
    }

    fn on_rectangle(&mut self, rectangle: &Rectangle) -> Option<Bounds> {
        Some(Bounds {
            offset: IVec2::ZERO,
            rect: *rectangle,
        })
    }

    /// A polygon is geometry even without vertices: it sits at the origin.
    fn on_polygon(&mut self, polygon: &Polygon) -> Option<Bounds> {
        let mut points = polygon.points().iter().map(Point::position);
        let Some(first) = points.next() else {
            return Some(Bounds::ZERO);
        };
        let (min, max) = points.fold((first, first), |(min, max), p| (min.min(p), max.max(p)));
        Some(Bounds::from_edges(
            min.x.into(),
            min.y.into(),
            max.x.into(),
            max.y.into(),
        ))
    }

    fn on_point(&mut self, point: &Point) -> Option<Bounds> {
        Some(Bounds::new(point.x(), point.y(), 0, 0))
    }

    fn on_group(&mut self, group: &Group) -> Option<Bounds> {
        group
            .shapes()
            .iter()
            .filter_map(|shape| shape.accept(self))
            .reduce(Bounds::union)
    }

    fn on_location(&mut self, location: &Location) -> Option<Bounds> {
        let child = location.shape().accept(self)?;
        Some(child.translated(location.offset()))
    }

    fn on_stroke_color(&mut self, stroke_color: &StrokeColor) -> Option<Bounds> {
        stroke_color.shape().accept(self)
    }

    fn on_fill(&mut self, fill: &Fill) -> Option<Bounds> {
        fill.shape().accept(self)
    }

    fn on_outline(&mut self, outline: &Outline) -> Option<Bounds> {
        outline.shape().accept(self)
    }
}

impl Shape {
    /// Smallest axis-aligned box enclosing this shape, relative to its origin.
    pub fn bounding_box(&self) -> Bounds {
        self.accept(&mut BoundingBox)
    }

    /// The bounding box, or `None` when the tree holds no geometry.
    pub fn extent(&self) -> Option<Bounds> {
        self.accept(&mut Extent)
    }
}
