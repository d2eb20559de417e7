//! Grid - the renderer façade.
//!
//! A `Grid` is a plain configuration aggregate. Setters can be called in any
//! order and any number of times (last write wins); nothing is validated until
//! [`Grid::invoke_render`], which reads the configuration without mutating it.
//!
//! ```
//! use menuify::{BorderStyle, FixedViewport, Grid};
//!
//! let mut grid = Grid::with_source(FixedViewport::new(80, 24));
//! grid.uniform_border(BorderStyle::Rounded)
//!     .margin_left(5)
//!     .margin_right(5)
//!     .margin_top(2)
//!     .margin_bottom(2);
//!
//! let buffer = grid.invoke_render().unwrap();
//! assert_eq!(buffer.height(), 24);
//! assert_eq!(buffer.glyph_at(5, 2), Some('╭'));
//! ```

use std::fmt;

use log::debug;

use crate::error::GridError;
use crate::pipeline::layout::compute_content_rect;
use crate::pipeline::terminal::{resolve_viewport, ConsoleViewport, ViewportSource};
use crate::renderer::buffer::{composite, FrameBuffer, RenderBuffer};
use crate::types::{BorderStyle, ContentRect, GridFlags, Margins, Viewport};

/// Bordered, margin-constrained layout over a console viewport.
pub struct Grid {
    viewport: Viewport,
    margins: Margins,
    border: BorderStyle,
    flags: GridFlags,
    source: Box<dyn ViewportSource>,
}

impl Grid {
    /// Create a grid in console-viewport mode with zero margins and no border.
    pub fn new() -> Self {
        Self::with_source(ConsoleViewport)
    }

    /// Create a grid whose console viewport comes from `source`.
    pub fn with_source(source: impl ViewportSource + 'static) -> Self {
        Self {
            viewport: Viewport::default(),
            margins: Margins::default(),
            border: BorderStyle::Rounded,
            flags: GridFlags::AUTO_VIEWPORT,
            source: Box::new(source),
        }
    }

    // =========================================================================
    // Viewport
    // =========================================================================

    /// Render into a fixed size instead of the console.
    ///
    /// Not validated here; a bad size surfaces at render time.
    pub fn set_viewport(&mut self, width: u16, height: u16) -> &mut Self {
        self.viewport = Viewport::new(width, height);
        self.flags.remove(GridFlags::AUTO_VIEWPORT);
        self
    }

    /// Resolve the viewport from the console on every render.
    pub fn use_console_viewport(&mut self) -> &mut Self {
        self.flags.insert(GridFlags::AUTO_VIEWPORT);
        self
    }

    /// The explicit viewport, or None in console mode.
    pub fn viewport(&self) -> Option<Viewport> {
        (!self.flags.contains(GridFlags::AUTO_VIEWPORT)).then_some(self.viewport)
    }

    // =========================================================================
    // Margins
    // =========================================================================

    pub fn margin_left(&mut self, n: u16) -> &mut Self {
        self.margins.left = n;
        self
    }

    pub fn margin_right(&mut self, n: u16) -> &mut Self {
        self.margins.right = n;
        self
    }

    pub fn margin_top(&mut self, n: u16) -> &mut Self {
        self.margins.top = n;
        self
    }

    pub fn margin_bottom(&mut self, n: u16) -> &mut Self {
        self.margins.bottom = n;
        self
    }

    /// Set all four margins at once.
    pub fn set_margins(&mut self, margins: Margins) -> &mut Self {
        self.margins = margins;
        self
    }

    pub fn margins(&self) -> Margins {
        self.margins
    }

    // =========================================================================
    // Border
    // =========================================================================

    /// Draw `style` on all four sides.
    pub fn uniform_border(&mut self, style: BorderStyle) -> &mut Self {
        self.border = style;
        self.flags.insert(GridFlags::UNIFORM_BORDER);
        self
    }

    /// Draw the catalog style named `name` on all four sides.
    ///
    /// On an unknown name the grid is left unchanged.
    pub fn uniform_border_named(&mut self, name: &str) -> Result<&mut Self, GridError> {
        let style = BorderStyle::from_name(name)?;
        Ok(self.uniform_border(style))
    }

    /// Render without a border.
    pub fn no_border(&mut self) -> &mut Self {
        self.flags.remove(GridFlags::UNIFORM_BORDER);
        self
    }

    /// The border drawn on render, if any.
    pub fn border(&self) -> Option<BorderStyle> {
        self.flags.contains(GridFlags::UNIFORM_BORDER).then_some(self.border)
    }

    pub fn flags(&self) -> GridFlags {
        self.flags
    }

    // =========================================================================
    // Render
    // =========================================================================

    /// Resolve the viewport and compute the content rectangle.
    pub fn content_rect(&self) -> Result<(Viewport, ContentRect), GridError> {
        let viewport = resolve_viewport(self.viewport(), self.source.as_ref())?;
        let rect = compute_content_rect(viewport, self.margins)?;
        Ok((viewport, rect))
    }

    /// Run the full pipeline and return a fresh buffer.
    ///
    /// viewport -> content rect -> border -> lines. Each call is independent.
    pub fn invoke_render(&self) -> Result<RenderBuffer, GridError> {
        let (viewport, rect) = self.content_rect()?;
        debug!("rendering grid: viewport {viewport}, content {rect}");

        let buffer = match self.border() {
            Some(style) => composite(viewport, rect, style)?,
            None => FrameBuffer::new(viewport),
        };
        Ok(buffer.into_render_buffer())
    }
}

impl Default for Grid {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Grid")
            .field("viewport", &self.viewport())
            .field("margins", &self.margins)
            .field("border", &self.border())
            .field("flags", &self.flags)
            .finish_non_exhaustive()
    }
}

// =============================================================================
// Tests
// =============================================================================
