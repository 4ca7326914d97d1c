//! Strongly-typed primitives shared by the shape model and the surfaces.
//!
//! Design goals:
//! - Coordinates are `i32`, dimensions are `u32`, so negative sizes cannot exist
//! - Colors are a packed value, cheap to save and restore
//! - Conversions from strings are fallible and never panic

use std::fmt;
use std::str::FromStr;

use glam::IVec2;

use crate::errors::ColorError;

/// 32-bit color packed as `0xAARRGGBB`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(transparent)]
pub struct Color(u32);

impl Color {
    pub const TRANSPARENT: Color = Color(0x0000_0000);
    pub const BLACK: Color = Color::rgb(0, 0, 0);
    pub const WHITE: Color = Color::rgb(255, 255, 255);
    pub const RED: Color = Color::rgb(255, 0, 0);
    pub const GREEN: Color = Color::rgb(0, 128, 0);
    pub const BLUE: Color = Color::rgb(0, 0, 255);
    pub const YELLOW: Color = Color::rgb(255, 255, 0);
    pub const CYAN: Color = Color::rgb(0, 255, 255);
    pub const MAGENTA: Color = Color::rgb(255, 0, 255);
    pub const ORANGE: Color = Color::rgb(255, 165, 0);
    pub const PURPLE: Color = Color::rgb(128, 0, 128);
    pub const BROWN: Color = Color::rgb(165, 42, 42);
    pub const PINK: Color = Color::rgb(255, 192, 203);
    pub const GRAY: Color = Color::rgb(128, 128, 128);
    pub const LIGHT_GRAY: Color = Color::rgb(211, 211, 211);
    pub const DARK_GRAY: Color = Color::rgb(169, 169, 169);
    pub const SILVER: Color = Color::rgb(192, 192, 192);

    /// Opaque color from red, green and blue channels.
    #[inline]
    pub const fn rgb(r: u8, g: u8, b: u8) -> Color {
        Color::argb(0xff, r, g, b)
    }

    #[inline]
    pub const fn argb(a: u8, r: u8, g: u8, b: u8) -> Color {
        Color(((a as u32) << 24) | ((r as u32) << 16) | ((g as u32) << 8) | b as u32)
    }

    /// Wrap an already packed `0xAARRGGBB` value.
    #[inline]
    pub const fn from_packed(argb: u32) -> Color {
        Color(argb)
    }

    #[inline]
    pub const fn packed(self) -> u32 {
        self.0
    }

    #[inline]
    pub const fn alpha(self) -> u8 {
        (self.0 >> 24) as u8
    }

    #[inline]
    pub const fn red(self) -> u8 {
        (self.0 >> 16) as u8
    }

    #[inline]
    pub const fn green(self) -> u8 {
        (self.0 >> 8) as u8
    }

    #[inline]
    pub const fn blue(self) -> u8 {
        self.0 as u8
    }

    pub const fn is_opaque(self) -> bool {
        self.alpha() == 0xff
    }

    fn named(name: &str) -> Option<Color> {
        let color = match name {
            "black" => Color::BLACK,
            "white" => Color::WHITE,
            "red" => Color::RED,
            "green" => Color::GREEN,
            "blue" => Color::BLUE,
            "yellow" => Color::YELLOW,
            "cyan" => Color::CYAN,
            "magenta" => Color::MAGENTA,
            "orange" => Color::ORANGE,
            "purple" => Color::PURPLE,
            "brown" => Color::BROWN,
            "pink" => Color::PINK,
            "gray" | "grey" => Color::GRAY,
            "lightgray" | "lightgrey" => Color::LIGHT_GRAY,
            "darkgray" | "darkgrey" => Color::DARK_GRAY,
            "silver" => Color::SILVER,
            "transparent" | "none" => Color::TRANSPARENT,
            _ => return None,
        };
        Some(color)
    }
}

impl Default for Color {
    /// Paint starts out opaque black.
    fn default() -> Self {
        Color::BLACK
    }
}

impl FromStr for Color {
    type Err = ColorError;

    /// Accepts `#rrggbb`, `#aarrggbb`, or a basic color name (case-insensitive).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || ColorError::Invalid {
            input: s.to_string(),
        };
        let trimmed = s.trim();

        if let Some(hex) = trimmed.strip_prefix('#') {
            if !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
                return Err(invalid());
            }
            let value = u32::from_str_radix(hex, 16).map_err(|_| invalid())?;
            return match hex.len() {
                6 => Ok(Color(0xff00_0000 | value)),
                8 => Ok(Color(value)),
                _ => Err(invalid()),
            };
        }

        Color::named(&trimmed.to_ascii_lowercase()).ok_or_else(invalid)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_opaque() {
            write!(f, "#{:06x}", self.0 & 0x00ff_ffff)
        } else {
            write!(f, "#{:08x}", self.0)
        }
    }
}

/// How outlines and interiors are painted.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum PaintStyle {
    /// Outline only
    #[default]
    Stroke,
    /// Interior filled, outline stroked
    FillAndStroke,
}

impl PaintStyle {
    /// Whether the interior gets filled (the surface's "fill mode").
    pub fn is_filled(self) -> bool {
        matches!(self, PaintStyle::FillAndStroke)
    }

    pub fn name(self) -> &'static str {
        match self {
            PaintStyle::Stroke => "stroke",
            PaintStyle::FillAndStroke => "fill-and-stroke",
        }
    }
}

impl fmt::Display for PaintStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A straight line between two points, one entry of a polyline.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Segment {
    pub start: IVec2,
    pub end: IVec2,
}

impl Segment {
    pub fn new(start: IVec2, end: IVec2) -> Self {
        Segment { start, end }
    }

    /// The same segment moved by `offset`, wrapping on overflow like the surfaces do.
    pub fn translated(self, offset: IVec2) -> Segment {
        Segment {
            start: self.start.wrapping_add(offset),
            end: self.end.wrapping_add(offset),
        }
    }
}

impl fmt::Display for Segment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "({},{})-({},{})",
            self.start.x, self.start.y, self.end.x, self.end.y
        )
    }
}
