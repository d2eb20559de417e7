//! FrameBuffer, border compositing and the finished RenderBuffer.
//!
//! The FrameBuffer is a viewport-sized 2D grid of characters. The border is
//! drawn into it at the content rectangle's offset, then the grid is flattened
//! into text lines.
//!
//! # Design Decisions
//!
//! - **Flat storage**: Uses `Vec<char>` with row-major indexing.
//! - **One glyph per cell**: Every catalog glyph is a single-column character,
//!   so line length in chars equals the viewport width.
//! - **No partial borders**: A rectangle that cannot hold a full border is an
//!   error, not a clipped drawing.

use std::fmt;

use log::debug;

use crate::error::GridError;
use crate::types::{BorderStyle, ContentRect, Viewport};

// =============================================================================
// FrameBuffer
// =============================================================================

/// A 2D buffer of terminal cells.
///
/// Uses flat storage with row-major indexing: `index = y * width + x`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameBuffer {
    width: u16,
    height: u16,
    cells: Vec<char>,
}

impl FrameBuffer {
    /// Create a blank (all spaces) buffer covering the viewport.
    pub fn new(viewport: Viewport) -> Self {
        let size = viewport.width as usize * viewport.height as usize;
        Self {
            width: viewport.width,
            height: viewport.height,
            cells: vec![' '; size],
        }
    }

    /// Get buffer width.
    #[inline]
    pub fn width(&self) -> u16 {
        self.width
    }

    /// Get buffer height.
    #[inline]
    pub fn height(&self) -> u16 {
        self.height
    }

    /// The viewport this buffer covers.
    #[inline]
    pub fn viewport(&self) -> Viewport {
        Viewport::new(self.width, self.height)
    }

    /// Convert (x, y) to flat index.
    #[inline]
    fn index(&self, x: u16, y: u16) -> usize {
        y as usize * self.width as usize + x as usize
    }

    /// Check if coordinates are in bounds.
    #[inline]
    pub fn in_bounds(&self, x: u16, y: u16) -> bool {
        x < self.width && y < self.height
    }

    /// Get the glyph at a cell (None if out of bounds).
    #[inline]
    pub fn get(&self, x: u16, y: u16) -> Option<char> {
        if self.in_bounds(x, y) {
            Some(self.cells[self.index(x, y)])
        } else {
            None
        }
    }

    /// Set a single cell.
    ///
    /// Returns true if the cell was set.
    pub fn set_cell(&mut self, x: u16, y: u16, glyph: char) -> bool {
        if !self.in_bounds(x, y) {
            return false;
        }
        let idx = self.index(x, y);
        self.cells[idx] = glyph;
        true
    }

    /// Draw a horizontal run of one glyph.
    pub fn draw_hline(&mut self, x: u16, y: u16, length: u16, glyph: char) {
        let end = (x as u32 + length as u32).min(self.width as u32) as u16;
        for col in x..end {
            self.set_cell(col, y, glyph);
        }
    }

    /// Draw a vertical run of one glyph.
    pub fn draw_vline(&mut self, x: u16, y: u16, length: u16, glyph: char) {
        let end = (y as u32 + length as u32).min(self.height as u32) as u16;
        for row in y..end {
            self.set_cell(x, row, glyph);
        }
    }

    /// Draw a uniform border around a rectangle.
    ///
    /// Interior cells are left untouched. Nothing is drawn on error.
    pub fn draw_border(&mut self, rect: ContentRect, style: BorderStyle) -> Result<(), GridError> {
        if rect.width < 2 || rect.height < 2 {
            return Err(GridError::DegenerateRectangle {
                width: rect.width,
                height: rect.height,
            });
        }
        if !rect.fits_in(self.viewport()) {
            return Err(GridError::RectangleOutOfBounds {
                rect,
                viewport: self.viewport(),
            });
        }

        let glyphs = style.glyphs();
        let x2 = rect.x + rect.width - 1;
        let y2 = rect.y + rect.height - 1;
        let inner_w = rect.width - 2;
        let inner_h = rect.height - 2;

        // Top and bottom edges
        self.set_cell(rect.x, rect.y, glyphs.top_left);
        self.draw_hline(rect.x + 1, rect.y, inner_w, glyphs.horizontal);
        self.set_cell(x2, rect.y, glyphs.top_right);

        self.set_cell(rect.x, y2, glyphs.bottom_left);
        self.draw_hline(rect.x + 1, y2, inner_w, glyphs.horizontal);
        self.set_cell(x2, y2, glyphs.bottom_right);

        // Sides
        self.draw_vline(rect.x, rect.y + 1, inner_h, glyphs.vertical);
        self.draw_vline(x2, rect.y + 1, inner_h, glyphs.vertical);

        Ok(())
    }

    /// Get one row as a string.
    pub fn row(&self, y: u16) -> Option<String> {
        if y >= self.height {
            return None;
        }
        let start = self.index(0, y);
        Some(self.cells[start..start + self.width as usize].iter().collect())
    }

    /// Flatten into printable lines.
    pub fn into_render_buffer(self) -> RenderBuffer {
        let lines = (0..self.height).filter_map(|y| self.row(y)).collect();
        RenderBuffer {
            width: self.width,
            lines,
        }
    }
}

// =============================================================================
// Compositor
// =============================================================================

/// Draw `style` around `rect` on a blank viewport-sized canvas.
pub fn composite(
    viewport: Viewport,
    rect: ContentRect,
    style: BorderStyle,
) -> Result<FrameBuffer, GridError> {
    let mut buffer = FrameBuffer::new(viewport);
    buffer.draw_border(rect, style)?;
    debug!("composited {style} border at {rect} in {viewport}");
    Ok(buffer)
}

// =============================================================================
// RenderBuffer
// =============================================================================

/// The finished output of one render: `height` lines of `width` characters.
///
/// Owned by the caller; writing it out is the caller's job.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderBuffer {
    width: u16,
    lines: Vec<String>,
}

impl RenderBuffer {
    /// Character count of every line.
    #[inline]
    pub fn width(&self) -> u16 {
        self.width
    }

    /// Number of lines.
    #[inline]
    pub fn height(&self) -> usize {
        self.lines.len()
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn line(&self, y: usize) -> Option<&str> {
        self.lines.get(y).map(String::as_str)
    }

    /// Glyph at column `x` of line `y`.
    pub fn glyph_at(&self, x: usize, y: usize) -> Option<char> {
        self.line(y)?.chars().nth(x)
    }

    /// Join the lines with `separator`.
    pub fn join(&self, separator: &str) -> String {
        self.lines.join(separator)
    }

    pub fn into_lines(self) -> Vec<String> {
        self.lines
    }
}

impl fmt::Display for RenderBuffer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.join("\n"))
    }
}

impl IntoIterator for RenderBuffer {
    type Item = String;
    type IntoIter = std::vec::IntoIter<String>;

    fn into_iter(self) -> Self::IntoIter {
        self.lines.into_iter()
    }
}

// =============================================================================
// Tests
// =============================================================================
