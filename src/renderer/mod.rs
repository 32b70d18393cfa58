//! Rendering module
//!
//! Drawing primitives are a narrow contract: anything that can fill the
//! target and fill circles can render a frame. A software framebuffer
//! implementation is included for demos and tests.

pub mod canvas;
pub mod draw;
pub mod framebuffer;

pub use canvas::{Canvas, Color, Palette, RenderError};
pub use draw::draw_frame;
pub use framebuffer::Framebuffer;
