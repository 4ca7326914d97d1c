//! Error types with diagnostics using miette
//!
//! Malformed trees cannot be built, so the only failures left are resource
//! limits and bad color strings.

use miette::Diagnostic;
use thiserror::Error;

// ============================================================================
// Shape Errors
// ============================================================================

/// Errors raised by structural checks on a shape tree
#[derive(Error, Diagnostic, Debug, Clone, PartialEq, Eq)]
pub enum ShapeError {
    #[error("shape tree is {depth} levels deep, limit is {limit}")]
    #[diagnostic(
        code(shapetree::shape::too_deep),
        help("flatten nested groups or raise the depth limit")
    )]
    TooDeep { depth: usize, limit: usize },
}

// ============================================================================
// Render Errors
// ============================================================================

/// Errors that occur during rendering
#[derive(Error, Diagnostic, Debug, Clone, PartialEq, Eq)]
pub enum RenderError {
    #[error(transparent)]
    #[diagnostic(transparent)]
    Shape(#[from] ShapeError),
}

// ============================================================================
// Color Errors
// ============================================================================

/// Errors from parsing a color string
#[derive(Error, Diagnostic, Debug, Clone, PartialEq, Eq)]
pub enum ColorError {
    #[error("invalid color: {input:?}")]
    #[diagnostic(
        code(shapetree::color::invalid),
        help("use #rrggbb, #aarrggbb, or a basic color name such as `red`")
    )]
    Invalid { input: String },
}
