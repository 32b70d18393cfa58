//! Surface provider contract

use crate::renderer::Canvas;

/// Lifecycle notifications from the component that owns the surface
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SurfaceEvent {
    /// The surface exists and may lend targets.
    Created,
    /// The drawable area changed size.
    Resized { width: u32, height: u32 },
    /// The surface is about to go away; no target may be touched after
    /// this event is handled.
    Destroyed,
}

/// Lends a render target per frame.
///
/// Targets move out on `acquire` and back on `present`, so a target
/// cannot be held across frames by construction. The provider is shared
/// between the render loop thread and the event thread.
pub trait SurfaceProvider: Send + Sync + 'static {
    type Target: Canvas;

    /// Borrow the next drawable target. `None` means the surface cannot
    /// lend a buffer right now and the frame is skipped.
    fn acquire(&self) -> Option<Self::Target>;

    /// Return the target and present whatever was drawn. Called exactly
    /// once per successful `acquire`, even when drawing failed.
    fn present(&self, target: Self::Target);
}
