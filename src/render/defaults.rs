//! Default render settings

use crate::types::PaintStyle;

/// Deepest shape tree `render` accepts before refusing it.
pub const MAX_DEPTH: usize = 1024;

/// Paint style in force at the root of every render.
pub const BASE_STYLE: PaintStyle = PaintStyle::Stroke;
