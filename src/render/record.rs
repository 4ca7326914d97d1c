//! In-memory surface that records every call
//!
//! [`Recorder`] keeps the same state a real canvas would (origin, stroke
//! color, paint style) and logs each call as a [`Command`]. Draw commands
//! capture the state in force when they were issued, so a transcript shows
//! exactly where and how each figure would land.

use std::fmt;

use glam::IVec2;

use super::surface::Surface;
use crate::types::{Color, PaintStyle, Segment};

/// A figure as passed to the surface, in the frame of the current origin.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Figure {
    Circle { radius: u32 },
    Rectangle { width: u32, height: u32 },
    Point,
    Polyline(Vec<Segment>),
}

impl fmt::Display for Figure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Figure::Circle { radius } => write!(f, "circle {radius}"),
            Figure::Rectangle { width, height } => write!(f, "rectangle {width}x{height}"),
            Figure::Point => f.write_str("point"),
            Figure::Polyline(segments) => {
                f.write_str("polyline")?;
                for segment in segments {
                    write!(f, " {segment}")?;
                }
                Ok(())
            }
        }
    }
}

/// A figure together with the surface state it was drawn under.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Mark {
    pub figure: Figure,
    /// Absolute position of the local origin.
    pub origin: IVec2,
    pub color: Color,
    pub style: PaintStyle,
}

impl fmt::Display for Mark {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} at ({},{}) {} {}",
            self.figure, self.origin.x, self.origin.y, self.color, self.style
        )
    }
}

/// One call received by a [`Recorder`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Command {
    Translate(IVec2),
    SetStrokeColor(Color),
    SetPaintStyle(PaintStyle),
    Draw(Mark),
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Command::Translate(by) => write!(f, "translate {} {}", by.x, by.y),
            Command::SetStrokeColor(color) => write!(f, "stroke-color {color}"),
            Command::SetPaintStyle(style) => write!(f, "style {style}"),
            Command::Draw(mark) => write!(f, "draw {mark}"),
        }
    }
}

/// A [`Surface`] that draws nothing and remembers everything.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Recorder {
    origin: IVec2,
    color: Color,
    style: PaintStyle,
    commands: Vec<Command>,
}

impl Recorder {
    /// Origin at (0, 0), black stroke, stroke-only style.
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from the given paint state instead of the defaults.
    pub fn with_paint(color: Color, style: PaintStyle) -> Self {
        Self {
            color,
            style,
            ..Self::default()
        }
    }

    /// Current absolute origin.
    pub fn origin(&self) -> IVec2 {
        self.origin
    }

    pub fn commands(&self) -> &[Command] {
        &self.commands
    }

    /// Only the draw commands, in order.
    pub fn marks(&self) -> impl Iterator<Item = &Mark> + '_ {
        self.commands.iter().filter_map(|command| match command {
            Command::Draw(mark) => Some(mark),
            _ => None,
        })
    }

    /// All commands, one per line.
    pub fn transcript(&self) -> String {
        self.commands
            .iter()
            .map(Command::to_string)
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Forget recorded commands, keeping the current state.
    pub fn clear(&mut self) {
        self.commands.clear();
    }

    fn mark(&mut self, figure: Figure) {
        self.commands.push(Command::Draw(Mark {
            figure,
            origin: self.origin,
            color: self.color,
            style: self.style,
        }));
    }
}

impl Surface for Recorder {
    fn draw_circle(&mut self, radius: u32) {
        self.mark(Figure::Circle { radius });
    }

    fn draw_rectangle(&mut self, width: u32, height: u32) {
        self.mark(Figure::Rectangle { width, height });
    }

    fn draw_point(&mut self) {
        self.mark(Figure::Point);
    }

    fn draw_polyline(&mut self, segments: &[Segment]) {
        self.mark(Figure::Polyline(segments.to_vec()));
    }

    fn translate(&mut self, dx: i32, dy: i32) {
        let by = IVec2::new(dx, dy);
        self.origin = self.origin.wrapping_add(by);
        self.commands.push(Command::Translate(by));
    }

    fn stroke_color(&self) -> Color {
        self.color
    }

    fn set_stroke_color(&mut self, color: Color) {
        self.color = color;
        self.commands.push(Command::SetStrokeColor(color));
    }

    fn paint_style(&self) -> PaintStyle {
        self.style
    }

    fn set_paint_style(&mut self, style: PaintStyle) {
        self.style = style;
        self.commands.push(Command::SetPaintStyle(style));
    }
}
