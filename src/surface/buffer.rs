//! In-memory surface provider
//!
//! Models the lend/return cycle of a real windowing surface with a
//! framebuffer behind a mutex: `acquire` takes the buffer out (`None`
//! while it is lent or before the first resize), `present` puts it back.

use std::sync::Mutex;

use crate::renderer::Framebuffer;

use super::provider::SurfaceProvider;

/// A `SurfaceProvider` backed by a single software framebuffer
#[derive(Debug, Default)]
pub struct BufferSurface {
    slot: Mutex<Option<Framebuffer>>,
}

impl BufferSurface {
    /// Provider with no buffer yet; `acquire` returns `None` until the
    /// first `resize`.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_size(width: u32, height: u32) -> Self {
        Self {
            slot: Mutex::new(Some(Framebuffer::new(width, height))),
        }
    }

    /// Swap in a fresh buffer of the new size. A frame in flight keeps
    /// drawing to the old buffer and is discarded on present.
    pub fn resize(&self, width: u32, height: u32) {
        *self.lock() = Some(Framebuffer::new(width, height));
    }

    /// Drop the buffer; subsequent `acquire` calls return `None`.
    pub fn teardown(&self) {
        *self.lock() = None;
    }

    /// Copy of the most recently presented buffer, for inspection.
    pub fn snapshot(&self) -> Option<Framebuffer> {
        self.lock().clone()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Option<Framebuffer>> {
        self.slot
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
    }
}

impl SurfaceProvider for BufferSurface {
    type Target = Framebuffer;

    fn acquire(&self) -> Option<Framebuffer> {
        self.lock().take()
    }

    fn present(&self, target: Framebuffer) {
        let mut slot = self.lock();
        // A resize while the frame was out wins; the stale frame is
        // dropped instead of clobbering the new buffer.
        if slot.is_none() {
            *slot = Some(target);
        }
    }
}
