//! Core types for menuify.
//!
//! Everything the grid renderer computes with lives here: the viewport it
//! renders into, the margins it subtracts, the rectangle it derives and the
//! border glyph catalog it draws with.

use std::fmt;
use std::str::FromStr;

use crate::error::GridError;

// =============================================================================
// Viewport
// =============================================================================

/// The full character area available for rendering, in columns x rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    /// Create a new viewport.
    pub const fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

impl fmt::Display for Viewport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

// =============================================================================
// Margins
// =============================================================================

/// Insets subtracted from each side of the viewport.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub struct Margins {
    pub left: u16,
    pub right: u16,
    pub top: u16,
    pub bottom: u16,
}

impl Margins {
    /// Same inset on every side.
    pub const fn all(n: u16) -> Self {
        Self {
            left: n,
            right: n,
            top: n,
            bottom: n,
        }
    }

    /// Combined horizontal inset.
    #[inline]
    pub const fn horizontal(&self) -> i32 {
        self.left as i32 + self.right as i32
    }

    /// Combined vertical inset.
    #[inline]
    pub const fn vertical(&self) -> i32 {
        self.top as i32 + self.bottom as i32
    }
}

// =============================================================================
// ContentRect
// =============================================================================

/// The rectangle within the viewport where the border is drawn.
///
/// Derived from a [`Viewport`] and [`Margins`], never stored on the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub struct ContentRect {
    pub x: u16,
    pub y: u16,
    pub width: u16,
    pub height: u16,
}

impl ContentRect {
    /// Create a new content rect.
    pub const fn new(x: u16, y: u16, width: u16, height: u16) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// One past the rightmost column.
    #[inline]
    pub const fn right(&self) -> u32 {
        self.x as u32 + self.width as u32
    }

    /// One past the bottom row.
    #[inline]
    pub const fn bottom(&self) -> u32 {
        self.y as u32 + self.height as u32
    }

    /// Check if this rect lies entirely inside the viewport.
    #[inline]
    pub fn fits_in(&self, viewport: Viewport) -> bool {
        self.right() <= viewport.width as u32 && self.bottom() <= viewport.height as u32
    }
}

impl fmt::Display for ContentRect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}+{}+{}", self.width, self.height, self.x, self.y)
    }
}

/// Layout axis, used to report which content dimension overflowed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    Width,
    Height,
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Width => f.write_str("width"),
            Self::Height => f.write_str("height"),
        }
    }
}

// =============================================================================
// Grid flags (bitflags)
// =============================================================================

bitflags::bitflags! {
    /// Mode switches held by a [`Grid`](crate::Grid).
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct GridFlags: u8 {
        /// Viewport is resolved from the console at render time.
        const AUTO_VIEWPORT = 1 << 0;
        /// A single border style is drawn on all four sides.
        const UNIFORM_BORDER = 1 << 1;
    }
}

// =============================================================================
// Border Style Catalog
// =============================================================================

/// Border style for the grid frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum BorderStyle {
    /// ─ │ ┌ ┐ └ ┘
    Single = 1,
    /// ═ ║ ╔ ╗ ╚ ╝
    Double = 2,
    /// ─ │ ╭ ╮ ╰ ╯
    Rounded = 3,
    /// ━ ┃ ┏ ┓ ┗ ┛
    Bold = 4,
    /// ┄ ┆ ┌ ┐ └ ┘
    Dashed = 5,
    /// · · · · · ·
    Dotted = 6,
    /// - | + + + +
    Ascii = 7,
    /// █ █ █ █ █ █
    Block = 8,
    /// ═ │ ╒ ╕ ╘ ╛ (double horizontal, single vertical)
    DoubleHorz = 9,
    /// ─ ║ ╓ ╖ ╙ ╜ (single horizontal, double vertical)
    DoubleVert = 10,
}

impl BorderStyle {
    /// Every built-in style, in catalog order.
    pub const ALL: [BorderStyle; 10] = [
        Self::Single,
        Self::Double,
        Self::Rounded,
        Self::Bold,
        Self::Dashed,
        Self::Dotted,
        Self::Ascii,
        Self::Block,
        Self::DoubleHorz,
        Self::DoubleVert,
    ];

    /// Catalog identifier for this style.
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Single => "single",
            Self::Double => "double",
            Self::Rounded => "rounded",
            Self::Bold => "bold",
            Self::Dashed => "dashed",
            Self::Dotted => "dotted",
            Self::Ascii => "ascii",
            Self::Block => "block",
            Self::DoubleHorz => "double-horz",
            Self::DoubleVert => "double-vert",
        }
    }

    /// Look a style up by its catalog identifier.
    ///
    /// Matching is exact. Unrecognized names fail with
    /// [`GridError::UnknownStyle`]; there is no fallback style.
    pub fn from_name(name: &str) -> Result<Self, GridError> {
        Self::ALL
            .into_iter()
            .find(|style| style.name() == name)
            .ok_or_else(|| GridError::UnknownStyle(name.to_string()))
    }

    /// Get the glyph table for this style.
    pub const fn glyphs(&self) -> BorderGlyphs {
        let (horizontal, vertical, top_left, top_right, bottom_right, bottom_left) = match self {
            Self::Single => ('─', '│', '┌', '┐', '┘', '└'),
            Self::Double => ('═', '║', '╔', '╗', '╝', '╚'),
            Self::Rounded => ('─', '│', '╭', '╮', '╯', '╰'),
            Self::Bold => ('━', '┃', '┏', '┓', '┛', '┗'),
            Self::Dashed => ('┄', '┆', '┌', '┐', '┘', '└'),
            Self::Dotted => ('·', '·', '·', '·', '·', '·'),
            Self::Ascii => ('-', '|', '+', '+', '+', '+'),
            Self::Block => ('█', '█', '█', '█', '█', '█'),
            Self::DoubleHorz => ('═', '│', '╒', '╕', '╛', '╘'),
            Self::DoubleVert => ('─', '║', '╓', '╖', '╜', '╙'),
        };
        BorderGlyphs {
            top_left,
            top_right,
            bottom_left,
            bottom_right,
            horizontal,
            vertical,
        }
    }
}

impl FromStr for BorderStyle {
    type Err = GridError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s)
    }
}

impl fmt::Display for BorderStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Corner and edge glyphs of one border style.
///
/// `horizontal` serves both the top and bottom edge, `vertical` both sides.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BorderGlyphs {
    pub top_left: char,
    pub top_right: char,
    pub bottom_left: char,
    pub bottom_right: char,
    pub horizontal: char,
    pub vertical: char,
}

// =============================================================================
// Tests
// =============================================================================
