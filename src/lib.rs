//! Immutable 2D shape trees and the computations over them.
//!
//! A [`Shape`] is built once from primitives (circles, rectangles, polygons,
//! points) and combinators (groups, locations, stroke colors, fills,
//! outlines), then handed to computations:
//!
//! - [`Shape::count`]: number of primitive shapes
//! - [`Shape::bounding_box`]: smallest enclosing [`Bounds`]
//!   ([`Shape::extent`] when a tree may hold no geometry)
//! - [`render()`] / [`Shape::render`]: drawing calls against a [`Surface`]
//!
//! Each computation is a [`Visitor`]; new ones can be written outside the
//! crate without touching the shape model.
//!
//! ```
//! use shapetree::{Bounds, Color, Recorder, Shape};
//!
//! let shape = Shape::location(
//!     10,
//!     10,
//!     Shape::group([
//!         Shape::stroke_color(Color::RED, Shape::circle(5)),
//!         Shape::fill(Shape::rectangle(20, 10)),
//!     ]),
//! );
//!
//! assert_eq!(shape.count(), 2);
//! assert_eq!(shape.bounding_box(), Bounds::new(5, 5, 25, 15));
//!
//! let mut recorder = Recorder::new();
//! shape.render(&mut recorder)?;
//! assert_eq!(recorder.marks().count(), 2);
//! # Ok::<(), shapetree::RenderError>(())
//! ```

pub mod bounds;
pub mod count;
pub mod errors;
pub mod log;
pub mod render;
pub mod shape;
pub mod types;
pub mod visit;

pub use bounds::{BoundingBox, Bounds, Extent};
pub use count::Count;
pub use errors::{ColorError, RenderError, ShapeError};
pub use glam::IVec2;
pub use render::{Draw, Recorder, RenderOptions, Surface, render};
pub use shape::{
    Circle, Fill, Group, Location, Outline, Point, Polygon, Rectangle, Shape, ShapeKind,
    StrokeColor,
};
pub use types::{Color, PaintStyle, Segment};
pub use visit::Visitor;
