//! Border compositing and output buffers.

pub mod buffer;

pub use buffer::{composite, FrameBuffer, RenderBuffer};
