//! Surface module
//!
//! The boundary to whatever owns the real window: lifecycle events in,
//! render targets lent out per frame. `LoopDriver` sits on top and runs
//! the update/render loop on its own thread.

pub mod buffer;
pub mod driver;
pub mod provider;

pub use buffer::BufferSurface;
pub use driver::{LoopDriver, Phase};
pub use provider::{SurfaceEvent, SurfaceProvider};
