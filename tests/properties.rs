//! Property tests over randomly generated shape trees.

use proptest::prelude::*;
use proptest::test_runner::TestCaseError;
use shapetree::render::Figure;
use shapetree::{
    Bounds, Circle, Color, Fill, Group, IVec2, Location, Outline, PaintStyle, Point, Polygon,
    Recorder, Rectangle, Shape, StrokeColor, Surface, Visitor,
};

// ==================== Strategies ====================

fn arb_color() -> impl Strategy<Value = Color> {
    any::<u32>().prop_map(Color::from_packed)
}

fn arb_paint_style() -> impl Strategy<Value = PaintStyle> {
    prop_oneof![Just(PaintStyle::Stroke), Just(PaintStyle::FillAndStroke)]
}

fn arb_offset() -> impl Strategy<Value = (i32, i32)> {
    (-1000i32..1000, -1000i32..1000)
}

fn arb_leaf() -> impl Strategy<Value = Shape> {
    prop_oneof![
        (0u32..50).prop_map(Shape::circle),
        (0u32..100, 0u32..100).prop_map(|(w, h)| Shape::rectangle(w, h)),
        arb_offset().prop_map(|(x, y)| Shape::point(x, y)),
        prop::collection::vec(arb_offset(), 0..6).prop_map(Shape::polygon),
    ]
}

fn arb_shape() -> impl Strategy<Value = Shape> {
    arb_leaf().prop_recursive(4, 48, 4, |inner| {
        prop_oneof![
            prop::collection::vec(inner.clone(), 0..4).prop_map(Shape::group),
            (arb_offset(), inner.clone()).prop_map(|((x, y), s)| Shape::location(x, y, s)),
            (arb_color(), inner.clone()).prop_map(|(c, s)| Shape::stroke_color(c, s)),
            inner.clone().prop_map(Shape::fill),
            inner.prop_map(Shape::outline),
        ]
    })
}

/// Primitives that produce a drawing call; polygons need at least two points.
struct Drawable;

impl Visitor for Drawable {
    type Output = usize;

    fn on_circle(&mut self, _: &Circle) -> usize {
        1
    }

    fn on_rectangle(&mut self, _: &Rectangle) -> usize {
        1
    }

    fn on_polygon(&mut self, polygon: &Polygon) -> usize {
        usize::from(polygon.points().len() >= 2)
    }

    fn on_point(&mut self, _: &Point) -> usize {
        1
    }

    fn on_group(&mut self, group: &Group) -> usize {
        group.shapes().iter().map(|s| s.accept(self)).sum()
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

fn recorded(shape: &Shape) -> Result<Recorder, TestCaseError> {
    let mut recorder = Recorder::new();
    shape
        .render(&mut recorder)
        .map_err(|e| TestCaseError::fail(e.to_string()))?;
    Ok(recorder)
}

// ==================== Checks ====================

fn check_group_count_is_sum(children: Vec<Shape>) -> Result<(), TestCaseError> {
    let expected: usize = children.iter().map(Shape::count).sum();
    prop_assert_eq!(Shape::group(children).count(), expected);
    Ok(())
}

fn check_combinators_preserve_count(
    shape: Shape,
    (x, y): (i32, i32),
    color: Color,
) -> Result<(), TestCaseError> {
    let count = shape.count();
    prop_assert_eq!(Shape::location(x, y, shape.clone()).count(), count);
    prop_assert_eq!(Shape::stroke_color(color, shape.clone()).count(), count);
    prop_assert_eq!(Shape::fill(shape.clone()).count(), count);
    prop_assert_eq!(Shape::outline(shape).count(), count);
    Ok(())
}

fn check_location_translates_bounds(shape: Shape, (x, y): (i32, i32)) -> Result<(), TestCaseError> {
    let inner = shape.extent();
    let located = Shape::location(x, y, shape.clone());
    let outer = located.extent();
    prop_assert_eq!(outer, inner.map(|b| b.translated(IVec2::new(x, y))));
    match inner {
        Some(inner) => prop_assert_eq!(located.bounding_box().rect, inner.rect),
        None => prop_assert_eq!(located.bounding_box(), Bounds::ZERO),
    }
    prop_assert_eq!(shape.bounding_box(), inner.unwrap_or_default());
    Ok(())
}

fn check_styling_leaves_bounds_alone(shape: Shape, color: Color) -> Result<(), TestCaseError> {
    let bounds = shape.bounding_box();
    prop_assert_eq!(Shape::stroke_color(color, shape.clone()).bounding_box(), bounds);
    prop_assert_eq!(Shape::fill(shape.clone()).bounding_box(), bounds);
    prop_assert_eq!(Shape::outline(shape).bounding_box(), bounds);
    Ok(())
}

fn check_group_encloses_children(children: Vec<Shape>) -> Result<(), TestCaseError> {
    let group = Shape::group(children.clone()).bounding_box();
    for bounds in children.iter().filter_map(Shape::extent) {
        prop_assert!(group.encloses(&bounds), "{group} does not enclose {bounds}");
    }
    Ok(())
}

fn check_empty_groups_add_nothing(
    children: Vec<Shape>,
    at: usize,
    (x, y): (i32, i32),
    wrap: u8,
) -> Result<(), TestCaseError> {
    let empty = Shape::from(Group::default());
    let empty = match wrap % 4 {
        0 => empty,
        1 => Shape::location(x, y, empty),
        2 => Shape::fill(Shape::outline(empty)),
        _ => Shape::stroke_color(Color::RED, Shape::group([empty])),
    };
    let mut padded = children.clone();
    padded.insert(at.min(children.len()), empty);

    let plain = Shape::group(children);
    let padded = Shape::group(padded);
    prop_assert_eq!(padded.bounding_box(), plain.bounding_box());
    prop_assert_eq!(padded.extent(), plain.extent());
    prop_assert_eq!(padded.count(), plain.count());
    Ok(())
}

fn check_computations_are_pure(shape: Shape) -> Result<(), TestCaseError> {
    let snapshot = shape.clone();
    let first = (shape.count(), shape.bounding_box(), recorded(&shape)?);
    let second = (shape.count(), shape.bounding_box(), recorded(&shape)?);
    prop_assert_eq!(first, second);
    prop_assert_eq!(shape, snapshot);
    Ok(())
}

fn check_render_restores_state(
    shape: Shape,
    (x, y): (i32, i32),
    color: Color,
    style: PaintStyle,
) -> Result<(), TestCaseError> {
    let mut recorder = Recorder::with_paint(color, style);
    recorder.translate(x, y);
    let before = (recorder.origin(), color, style);

    shape
        .render(&mut recorder)
        .map_err(|e| TestCaseError::fail(e.to_string()))?;

    prop_assert_eq!(
        (
            recorder.origin(),
            recorder.stroke_color(),
            recorder.paint_style()
        ),
        before
    );
    Ok(())
}

fn check_one_mark_per_drawable_primitive(shape: Shape) -> Result<(), TestCaseError> {
    let recorder = recorded(&shape)?;
    let marks = recorder.marks().count();
    prop_assert_eq!(marks, shape.accept(&mut Drawable));
    prop_assert!(marks <= shape.count());
    Ok(())
}

fn check_location_shifts_marks(shape: Shape, (x, y): (i32, i32)) -> Result<(), TestCaseError> {
    let plain = recorded(&shape)?;
    let moved = recorded(&Shape::location(x, y, shape))?;
    let by = IVec2::new(x, y);

    let plain: Vec<_> = plain.marks().cloned().collect();
    let moved: Vec<_> = moved.marks().cloned().collect();
    prop_assert_eq!(plain.len(), moved.len());
    for (a, b) in plain.iter().zip(&moved) {
        prop_assert_eq!(&a.figure, &b.figure);
        prop_assert_eq!(a.color, b.color);
        prop_assert_eq!(a.style, b.style);
        prop_assert_eq!(a.origin + by, b.origin);
    }
    Ok(())
}

fn check_polygon_bounds_cover_its_edges(points: Vec<(i32, i32)>) -> Result<(), TestCaseError> {
    let shape = Shape::polygon(points.clone());
    let bounds = shape.bounding_box();
    if points.is_empty() {
        prop_assert_eq!(bounds, Bounds::ZERO);
        return Ok(());
    }
    for (x, y) in points {
        prop_assert!(bounds.encloses(&Bounds::new(x, y, 0, 0)));
    }

    let recorder = recorded(&shape)?;
    if let Some(mark) = recorder.marks().next() {
        let Figure::Polyline(segments) = &mark.figure else {
            return Err(TestCaseError::fail("polygon drew something other than a polyline"));
        };
        for segment in segments {
            prop_assert!(bounds.encloses(&Bounds::new(segment.start.x, segment.start.y, 0, 0)));
            prop_assert!(bounds.encloses(&Bounds::new(segment.end.x, segment.end.y, 0, 0)));
        }
    }
    Ok(())
}

proptest! {
    #[test]
    fn group_count_is_sum(children in prop::collection::vec(arb_shape(), 0..5)) {
        check_group_count_is_sum(children)?;
    }

    #[test]
    fn combinators_preserve_count(shape in arb_shape(), offset in arb_offset(), color in arb_color()) {
        check_combinators_preserve_count(shape, offset, color)?;
    }

    #[test]
    fn location_translates_bounds(shape in arb_shape(), offset in arb_offset()) {
        check_location_translates_bounds(shape, offset)?;
    }

    #[test]
    fn styling_leaves_bounds_alone(shape in arb_shape(), color in arb_color()) {
        check_styling_leaves_bounds_alone(shape, color)?;
    }

    #[test]
    fn group_encloses_children(children in prop::collection::vec(arb_shape(), 1..5)) {
        check_group_encloses_children(children)?;
    }

    #[test]
    fn empty_groups_add_nothing(
        children in prop::collection::vec(arb_shape(), 0..5),
        at in 0usize..6,
        offset in arb_offset(),
        wrap in any::<u8>(),
    ) {
        check_empty_groups_add_nothing(children, at, offset, wrap)?;
    }

    #[test]
    fn computations_are_pure(shape in arb_shape()) {
        check_computations_are_pure(shape)?;
    }

    #[test]
    fn render_restores_state(
        shape in arb_shape(),
        origin in arb_offset(),
        color in arb_color(),
        style in arb_paint_style(),
    ) {
        check_render_restores_state(shape, origin, color, style)?;
    }

    #[test]
    fn one_mark_per_drawable_primitive(shape in arb_shape()) {
        check_one_mark_per_drawable_primitive(shape)?;
    }

    #[test]
    fn location_shifts_marks(shape in arb_shape(), offset in arb_offset()) {
        check_location_shifts_marks(shape, offset)?;
    }

    #[test]
    fn polygon_bounds_cover_its_edges(points in prop::collection::vec(arb_offset(), 0..8)) {
        check_polygon_bounds_cover_its_edges(points)?;
    }
}
