//! Viewport resolution.
//!
//! The console size is an injected capability rather than ambient state, so
//! the grid renders against synthetic sizes in tests and against the real
//! terminal (via crossterm) in the binary.

use std::io;

use crossterm::tty::IsTty;
use log::{debug, warn};

use crate::error::GridError;
use crate::types::Viewport;

// =============================================================================
// Viewport Sources
// =============================================================================

/// Something that can report the hosting console's current size.
pub trait ViewportSource {
    /// Query the current size. Called once per render.
    fn query(&self) -> Result<Viewport, GridError>;
}

/// The terminal attached to standard output.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConsoleViewport;

impl ViewportSource for ConsoleViewport {
    fn query(&self) -> Result<Viewport, GridError> {
        if !io::stdout().is_tty() {
            return Err(GridError::ViewportUnavailable(
                "standard output is not a terminal".to_string(),
            ));
        }

        match crossterm::terminal::size() {
            Ok((width, height)) if width > 0 && height > 0 => Ok(Viewport::new(width, height)),
            Ok((width, height)) => Err(GridError::ViewportUnavailable(format!(
                "console reported an empty size ({width}x{height})"
            ))),
            Err(err) => {
                warn!("terminal size query failed: {err}");
                Err(GridError::ViewportUnavailable(err.to_string()))
            }
        }
    }
}

/// A console of fixed size.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedViewport(pub Viewport);

impl FixedViewport {
    pub const fn new(width: u16, height: u16) -> Self {
        Self(Viewport::new(width, height))
    }
}

impl ViewportSource for FixedViewport {
    fn query(&self) -> Result<Viewport, GridError> {
        Ok(self.0)
    }
}

/// Any closure reporting `Some(size)`, or `None` when no console is attached.
impl<F> ViewportSource for F
where
    F: Fn() -> Option<Viewport>,
{
    fn query(&self) -> Result<Viewport, GridError> {
        self().ok_or_else(|| GridError::ViewportUnavailable("console size unknown".to_string()))
    }
}

// =============================================================================
// Resolution
// =============================================================================

/// Resolve the viewport for one render.
///
/// An explicit viewport is returned unchanged and the source is not consulted.
/// Otherwise the source is queried now, so a resize between configuration and
/// render is picked up.
pub fn resolve_viewport(
    explicit: Option<Viewport>,
    source: &dyn ViewportSource,
) -> Result<Viewport, GridError> {
    match explicit {
        Some(viewport) => Ok(viewport),
        None => {
            let viewport = source.query()?;
            debug!("resolved console viewport {viewport}");
            Ok(viewport)
        }
    }
}

// =============================================================================
// Tests
// =============================================================================
