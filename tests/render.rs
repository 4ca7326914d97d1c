//! End-to-end rendering of small scenes against the recording surface.

use shapetree::{
    Bounds, Color, PaintStyle, Recorder, RenderError, RenderOptions, Shape, ShapeError,
    render,
};

fn scene() -> Shape {
    Shape::location(
        10,
        20,
        Shape::group([
            Shape::stroke_color(Color::RED, Shape::circle(5)),
            Shape::fill(Shape::rectangle(4, 2)),
            Shape::point(1, 1),
            Shape::polygon([(0, 0), (3, 0), (0, 3)]),
        ]),
    )
}

#[test]
fn scene_transcript() {
    let mut recorder = Recorder::new();
    scene().render(&mut recorder).unwrap();

    insta::assert_snapshot!(recorder.transcript(), @r"
    style stroke
    translate 10 20
    stroke-color #ff0000
    draw circle 5 at (10,20) #ff0000 stroke
    stroke-color #000000
    style fill-and-stroke
    draw rectangle 4x2 at (10,20) #000000 fill-and-stroke
    style stroke
    draw point at (10,20) #000000 stroke
    draw polyline (0,0)-(3,0) (3,0)-(0,3) (0,3)-(0,0) at (10,20) #000000 stroke
    translate -10 -20
    style stroke
    ");
}

#[test]
fn scene_structure() {
    let scene = scene();
    insta::assert_snapshot!(
        scene.to_string(),
        @"(location 10 20 (group (stroke-color #ff0000 (circle 5)) (fill (rectangle 4 2)) (point 1 1) (polygon (0 0) (3 0) (0 3))))"
    );
    assert_eq!(scene.count(), 4);
    assert_eq!(scene.bounding_box(), Bounds::new(5, 15, 10, 10));
    assert_eq!(scene.bounding_box().to_string(), "10x10 at (5,15)");
}

#[test]
fn filled_scene_keeps_caller_paint() {
    let mut recorder = Recorder::with_paint(Color::BLUE, PaintStyle::FillAndStroke);
    let options = RenderOptions::default().with_base_style(PaintStyle::FillAndStroke);
    render(&Shape::outline(Shape::circle(2)), &mut recorder, &options).unwrap();

    insta::assert_snapshot!(recorder.transcript(), @r"
    style fill-and-stroke
    style stroke
    draw circle 2 at (0,0) #0000ff stroke
    style fill-and-stroke
    style fill-and-stroke
    ");
}

#[test]
fn deep_tree_is_reported() {
    let mut shape = Shape::circle(1);
    for _ in 0..20 {
        shape = Shape::outline(shape);
    }
    let mut recorder = Recorder::new();
    let options = RenderOptions::default().with_max_depth(8);

    let err = render(&shape, &mut recorder, &options).unwrap_err();

    insta::assert_snapshot!(err.to_string(), @"shape tree is 21 levels deep, limit is 8");
    assert_eq!(
        err,
        RenderError::Shape(ShapeError::TooDeep {
            depth: 21,
            limit: 8
        })
    );
    assert!(recorder.commands().is_empty());
}

#[test]
fn invalid_color_names_the_input() {
    let err = "chartreuse-ish".parse::<Color>().unwrap_err();
    insta::assert_snapshot!(err.to_string(), @r#"invalid color: "chartreuse-ish""#);
    assert_eq!("#0000FF".parse::<Color>(), Ok(Color::BLUE));
}
