//! Margin box model.
//!
//! Pure arithmetic: the content rectangle is the viewport minus the four
//! insets. A negative result is an error, never clamped.

use crate::error::GridError;
use crate::types::{Axis, ContentRect, Margins, Viewport};

/// Compute the content rectangle for a viewport and margins.
///
/// Width is checked before height, so when both overflow the error names the
/// width.
pub fn compute_content_rect(
    viewport: Viewport,
    margins: Margins,
) -> Result<ContentRect, GridError> {
    let width = viewport.width as i32 - margins.horizontal();
    if width < 0 {
        return Err(GridError::MarginOverflow {
            axis: Axis::Width,
            value: width,
        });
    }

    let height = viewport.height as i32 - margins.vertical();
    if height < 0 {
        return Err(GridError::MarginOverflow {
            axis: Axis::Height,
            value: height,
        });
    }

    // Both results are within 0..=viewport dimension, so they fit in u16.
    Ok(ContentRect::new(margins.left, margins.top, width as u16, height as u16))
}
