//! The shape tree.
//!
//! A [`Shape`] is either a primitive (circle, rectangle, polygon, point) or a
//! combinator that owns its children (group, location, stroke color, fill,
//! outline). Children are owned through `Box`/`Vec`, so a combinator without
//! a child cannot be constructed and no node is ever shared.
//!
//! Shapes carry no behavior beyond structural accessors. Computations live in
//! visitors (see [`crate::visit`]).

use std::fmt;

use glam::IVec2;

use crate::errors::ShapeError;
use crate::types::{Color, Segment};

/// Variant tag of a [`Shape`], for logging and diagnostics.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ShapeKind {
    Circle,
    Rectangle,
    Polygon,
    Point,
    Group,
    Location,
    StrokeColor,
    Fill,
    Outline,
}

impl ShapeKind {
    pub fn name(self) -> &'static str {
        match self {
            ShapeKind::Circle => "circle",
            ShapeKind::Rectangle => "rectangle",
            ShapeKind::Polygon => "polygon",
            ShapeKind::Point => "point",
            ShapeKind::Group => "group",
            ShapeKind::Location => "location",
            ShapeKind::StrokeColor => "stroke-color",
            ShapeKind::Fill => "fill",
            ShapeKind::Outline => "outline",
        }
    }

    /// Primitives are leaves; everything else wraps child shapes.
    pub fn is_primitive(self) -> bool {
        matches!(
            self,
            ShapeKind::Circle | ShapeKind::Rectangle | ShapeKind::Polygon | ShapeKind::Point
        )
    }
}

impl fmt::Display for ShapeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// ============================================================================
// Primitives
// ============================================================================

/// A circle centered at the local origin
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Circle {
    radius: u32,
}

impl Circle {
    pub const fn new(radius: u32) -> Self {
        Self { radius }
    }

    pub const fn radius(&self) -> u32 {
        self.radius
    }
}

/// A rectangle with its top-left corner at the local origin
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rectangle {
    width: u32,
    height: u32,
}

impl Rectangle {
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    pub const fn width(&self) -> u32 {
        self.width
    }

    pub const fn height(&self) -> u32 {
        self.height
    }
}

/// A zero-extent mark at (x, y)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Point {
    position: IVec2,
}

impl Point {
    pub const fn new(x: i32, y: i32) -> Self {
        Self {
            position: IVec2::new(x, y),
        }
    }

    pub const fn x(&self) -> i32 {
        self.position.x
    }

    pub const fn y(&self) -> i32 {
        self.position.y
    }

    pub const fn position(&self) -> IVec2 {
        self.position
    }
}

impl From<(i32, i32)> for Point {
    fn from((x, y): (i32, i32)) -> Self {
        Point::new(x, y)
    }
}

/// A closed outline through an ordered list of vertices
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Polygon {
    points: Vec<Point>,
}

impl Polygon {
    pub fn new(points: impl IntoIterator<Item = impl Into<Point>>) -> Self {
        Self {
            points: points.into_iter().map(Into::into).collect(),
        }
    }

    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// Edges of the closed outline: each vertex to the next, and the last
    /// back to the first. Fewer than two vertices have no edges.
    pub fn edges(&self) -> impl ExactSizeIterator<Item = Segment> + '_ {
        let n = if self.points.len() < 2 {
            0
        } else {
            self.points.len()
        };
        (0..n).map(move |i| {
            Segment::new(
                self.points[i].position(),
                self.points[(i + 1) % n].position(),
            )
        })
    }
}

// ============================================================================
// Combinators
// ============================================================================

/// An ordered collection of shapes drawn and measured in the same frame
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Group {
    shapes: Vec<Shape>,
}

impl Group {
    pub fn new(shapes: impl IntoIterator<Item = Shape>) -> Self {
        Self {
            shapes: shapes.into_iter().collect(),
        }
    }

    pub fn shapes(&self) -> &[Shape] {
        &self.shapes
    }

    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }
}

/// A child shape placed in a frame translated by (x, y)
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Location {
    offset: IVec2,
    shape: Box<Shape>,
}

impl Location {
    pub fn new(x: i32, y: i32, shape: impl Into<Shape>) -> Self {
        Self {
            offset: IVec2::new(x, y),
            shape: Box::new(shape.into()),
        }
    }

    pub fn x(&self) -> i32 {
        self.offset.x
    }

    pub fn y(&self) -> i32 {
        self.offset.y
    }

    pub fn offset(&self) -> IVec2 {
        self.offset
    }

    pub fn shape(&self) -> &Shape {
        &self.shape
    }
}

/// A child shape whose outline is drawn in `color`
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct StrokeColor {
    color: Color,
    shape: Box<Shape>,
}

impl StrokeColor {
    pub fn new(color: Color, shape: impl Into<Shape>) -> Self {
        Self {
            color,
            shape: Box::new(shape.into()),
        }
    }

    pub fn color(&self) -> Color {
        self.color
    }

    pub fn shape(&self) -> &Shape {
        &self.shape
    }
}

/// A child shape drawn filled as well as stroked
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Fill {
    shape: Box<Shape>,
}

impl Fill {
    pub fn new(shape: impl Into<Shape>) -> Self {
        Self {
            shape: Box::new(shape.into()),
        }
    }

    pub fn shape(&self) -> &Shape {
        &self.shape
    }
}

/// A child shape drawn as an outline only, even inside a [`Fill`]
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Outline {
    shape: Box<Shape>,
}

impl Outline {
    pub fn new(shape: impl Into<Shape>) -> Self {
        Self {
            shape: Box::new(shape.into()),
        }
    }

    pub fn shape(&self) -> &Shape {
        &self.shape
    }
}

// ============================================================================
// Shape
// ============================================================================

/// A node of the shape tree
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Shape {
    Circle(Circle),
    Rectangle(Rectangle),
    Polygon(Polygon),
    Point(Point),
    Group(Group),
    Location(Location),
    StrokeColor(StrokeColor),
    Fill(Fill),
    Outline(Outline),
}

macro_rules! impl_from_variant {
    ($($variant:ident),* $(,)?) => {
        $(
            impl From<$variant> for Shape {
                fn from(inner: $variant) -> Self {
                    Shape::$variant(inner)
                }
            }
        )*
    };
}

impl_from_variant!(
    Circle,
    Rectangle,
    Polygon,
    Point,
    Group,
    Location,
    StrokeColor,
    Fill,
    Outline,
);

impl Shape {
    pub fn circle(radius: u32) -> Shape {
        Circle::new(radius).into()
    }

    pub fn rectangle(width: u32, height: u32) -> Shape {
        Rectangle::new(width, height).into()
    }

    pub fn point(x: i32, y: i32) -> Shape {
        Point::new(x, y).into()
    }

    pub fn polygon(points: impl IntoIterator<Item = impl Into<Point>>) -> Shape {
        Polygon::new(points).into()
    }

    pub fn group(shapes: impl IntoIterator<Item = Shape>) -> Shape {
        Group::new(shapes).into()
    }

    pub fn location(x: i32, y: i32, shape: impl Into<Shape>) -> Shape {
        Location::new(x, y, shape).into()
    }

    pub fn stroke_color(color: Color, shape: impl Into<Shape>) -> Shape {
        StrokeColor::new(color, shape).into()
    }

    pub fn fill(shape: impl Into<Shape>) -> Shape {
        Fill::new(shape).into()
    }

    pub fn outline(shape: impl Into<Shape>) -> Shape {
        Outline::new(shape).into()
    }

    pub fn kind(&self) -> ShapeKind {
        match self {
            Shape::Circle(_) => ShapeKind::Circle,
            Shape::Rectangle(_) => ShapeKind::Rectangle,
            Shape::Polygon(_) => ShapeKind::Polygon,
            Shape::Point(_) => ShapeKind::Point,
            Shape::Group(_) => ShapeKind::Group,
            Shape::Location(_) => ShapeKind::Location,
            Shape::StrokeColor(_) => ShapeKind::StrokeColor,
            Shape::Fill(_) => ShapeKind::Fill,
            Shape::Outline(_) => ShapeKind::Outline,
        }
    }

    pub fn is_primitive(&self) -> bool {
        self.kind().is_primitive()
    }

    /// Direct children, in traversal order. Empty for primitives.
    pub fn children(&self) -> &[Shape] {
        match self {
            Shape::Circle(_) | Shape::Rectangle(_) | Shape::Polygon(_) | Shape::Point(_) => &[],
            Shape::Group(g) => g.shapes(),
            Shape::Location(l) => std::slice::from_ref(l.shape()),
            Shape::StrokeColor(c) => std::slice::from_ref(c.shape()),
            Shape::Fill(f) => std::slice::from_ref(f.shape()),
            Shape::Outline(o) => std::slice::from_ref(o.shape()),
        }
    }

    /// Number of nodes on the longest root-to-leaf path (a lone primitive is 1).
    ///
    /// Walks the tree with an explicit stack, so it is safe to call on trees
    /// too deep for the recursive visitors.
    pub fn depth(&self) -> usize {
        let mut deepest = 0;
        let mut stack = vec![(self, 1usize)];
        while let Some((shape, depth)) = stack.pop() {
            deepest = deepest.max(depth);
            stack.extend(shape.children().iter().map(|child| (child, depth + 1)));
        }
        deepest
    }

    /// Reject trees deeper than `limit` before handing them to a recursive visitor.
    pub fn check_depth(&self, limit: usize) -> Result<(), ShapeError> {
        let depth = self.depth();
        if depth > limit {
            crate::log::warn!(depth, limit, "shape tree exceeds depth limit");
            return Err(ShapeError::TooDeep { depth, limit });
        }
        Ok(())
    }
}

impl fmt::Display for Shape {
    /// Compact s-expression form, e.g. `(location 10 10 (circle 5))`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}", self.kind())?;
        match self {
            Shape::Circle(c) => write!(f, " {}", c.radius())?,
            Shape::Rectangle(r) => write!(f, " {} {}", r.width(), r.height())?,
            Shape::Point(p) => write!(f, " {} {}", p.x(), p.y())?,
            Shape::Polygon(p) => {
                for point in p.points() {
                    write!(f, " ({} {})", point.x(), point.y())?;
                }
            }
            Shape::Location(l) => write!(f, " {} {}", l.x(), l.y())?,
            Shape::StrokeColor(c) => write!(f, " {}", c.color())?,
            Shape::Group(_) | Shape::Fill(_) | Shape::Outline(_) => {}
        }
        for child in self.children() {
            write!(f, " {child}")?;
        }
        f.write_str(")")
    }
}
