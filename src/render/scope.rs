//! Scoped changes to surface state
//!
//! Each combinator that touches the surface does so through a [`Scope`],
//! which puts the previous state back when it is dropped, including during
//! unwinding.

use std::ops::{Deref, DerefMut};

use glam::IVec2;

use super::Draw;
use super::surface::Surface;
use crate::log::trace;
use crate::types::{Color, PaintStyle};

/// What to undo when the scope ends.
#[derive(Debug, Clone, Copy)]
enum Restore {
    /// Translate back by the negated offset.
    Translation(IVec2),
    StrokeColor(Color),
    PaintStyle(PaintStyle),
}

/// A [`Draw`] borrowed for the duration of one state change.
pub(crate) struct Scope<'a, 's, S: Surface + ?Sized> {
    draw: &'a mut Draw<'s, S>,
    restore: Restore,
}

impl<'s, S: Surface + ?Sized> Draw<'s, S> {
    /// Shift the origin by `offset` until the scope ends.
    pub(crate) fn translated(&mut self, offset: IVec2) -> Scope<'_, 's, S> {
        trace!(dx = offset.x, dy = offset.y, "translate");
        self.surface.translate(offset.x, offset.y);
        Scope {
            draw: self,
            restore: Restore::Translation(offset),
        }
    }

    /// Stroke in `color` until the scope ends.
    pub(crate) fn colored(&mut self, color: Color) -> Scope<'_, 's, S> {
        let saved = self.surface.stroke_color();
        trace!(%color, %saved, "stroke color");
        self.surface.set_stroke_color(color);
        Scope {
            draw: self,
            restore: Restore::StrokeColor(saved),
        }
    }

    /// Paint with `style` until the scope ends.
    pub(crate) fn styled(&mut self, style: PaintStyle) -> Scope<'_, 's, S> {
        let saved = self.surface.paint_style();
        trace!(%style, %saved, "paint style");
        self.surface.set_paint_style(style);
        Scope {
            draw: self,
            restore: Restore::PaintStyle(saved),
        }
    }
}

impl<'s, S: Surface + ?Sized> Deref for Scope<'_, 's, S> {
    type Target = Draw<'s, S>;

    fn deref(&self) -> &Self::Target {
        &*self.draw
    }
}

impl<S: Surface + ?Sized> DerefMut for Scope<'_, '_, S> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut *self.draw
    }
}

impl<S: Surface + ?Sized> Drop for Scope<'_, '_, S> {
    fn drop(&mut self) {
        let surface = &mut *self.draw.surface;
        match self.restore {
            // wrapping_neg keeps i32::MIN its own inverse under wrapping addition
            Restore::Translation(offset) => {
                surface.translate(offset.x.wrapping_neg(), offset.y.wrapping_neg())
            }
            Restore::StrokeColor(color) => surface.set_stroke_color(color),
            Restore::PaintStyle(style) => surface.set_paint_style(style),
        }
    }
}
