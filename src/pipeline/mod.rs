//! Render pipeline stages ahead of compositing.
//!
//! - `terminal` - Resolve the viewport (explicit or console)
//! - `layout` - Derive the content rectangle from viewport and margins

pub mod layout;
pub mod terminal;

pub use layout::compute_content_rect;
pub use terminal::{resolve_viewport, ConsoleViewport, FixedViewport, ViewportSource};
