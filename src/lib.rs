//! # menuify
//!
//! Terminal grid renderer for platform launcher menus.
//!
//! ## Architecture
//!
//! A [`Grid`] holds configuration only. Each call to [`Grid::invoke_render`]
//! runs the whole pipeline from scratch:
//! ```text
//! ViewportSource → Viewport → compute_content_rect → ContentRect → composite → RenderBuffer
//! ```
//! The console size is injected through [`ViewportSource`], so everything
//! except [`ConsoleViewport`] runs without a terminal.
//!
//! ## Modules
//!
//! - [`types`] - Core types (Viewport, Margins, ContentRect, BorderStyle, etc.)
//! - [`pipeline`] - Viewport resolution and the margin box model
//! - [`renderer`] - FrameBuffer, border compositing, RenderBuffer
//! - [`grid`] - The Grid façade
//! - [`config`] - TOML grid configuration
//! - [`compile`] - Launcher project compiler (batch scripts)

pub mod compile;
pub mod config;
pub mod error;
pub mod grid;
pub mod pipeline;
pub mod renderer;
pub mod types;

// Re-export commonly used items
pub use types::*;

pub use error::{CompileError, ConfigError, GridError};

pub use grid::Grid;

pub use config::{GridConfig, MarginsConfig, ViewportConfig};

pub use pipeline::{
    compute_content_rect, resolve_viewport, ConsoleViewport, FixedViewport, ViewportSource,
};

pub use renderer::{composite, FrameBuffer, RenderBuffer};

pub use compile::{compile, compile_command, Binding, Button, CompiledProject, Project};
