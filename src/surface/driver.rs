//! Render loop driver
//!
//! Owns the simulation state and a worker thread that advances and draws
//! it as fast as the surface provider lends targets. Input handlers and
//! the worker contend on one mutex, so update+render is atomic from the
//! input side's point of view.

use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::thread::{self, JoinHandle};

use glam::Vec2;

use crate::renderer::{self, Palette};
use crate::settings::Settings;
use crate::sim::SimState;

use super::provider::{SurfaceEvent, SurfaceProvider};

/// Loop lifecycle, driven by surface events
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// No worker thread; the surface does not exist.
    Stopped,
    /// Worker thread is updating and rendering.
    Running,
    /// Shutdown flag set, waiting for the worker to observe it.
    Stopping,
}

/// State shared between the event side and the worker thread
struct Shared {
    sim: Mutex<SimState>,
    running: AtomicBool,
    frames: AtomicU64,
}

/// Drives the update/render loop against a surface provider.
///
/// Lifecycle events come in through [`handle_event`](Self::handle_event);
/// touch events through the `*_touch` methods. The two may be called from
/// different threads than the loop itself; every shared access goes
/// through one mutex.
pub struct LoopDriver<P: SurfaceProvider> {
    provider: Arc<P>,
    palette: Palette,
    shared: Arc<Shared>,
    worker: Option<JoinHandle<()>>,
    phase: Phase,
}

impl<P: SurfaceProvider> LoopDriver<P> {
    pub fn new(provider: Arc<P>, settings: &Settings) -> Self {
        let sim = SimState::new(settings.resolve_seed(), settings.launch_speed);
        Self {
            provider,
            palette: settings.palette,
            shared: Arc::new(Shared {
                sim: Mutex::new(sim),
                running: AtomicBool::new(false),
                frames: AtomicU64::new(0),
            }),
            worker: None,
            phase: Phase::Stopped,
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Frames rendered and presented without a draw fault.
    pub fn frames(&self) -> u64 {
        self.shared.frames.load(Ordering::Relaxed)
    }

    /// React to a surface lifecycle event.
    pub fn handle_event(&mut self, event: SurfaceEvent) {
        match event {
            SurfaceEvent::Created => self.start(),
            SurfaceEvent::Resized { width, height } => {
                lock_sim(&self.shared.sim).resize(width as f32, height as f32);
            }
            SurfaceEvent::Destroyed => self.stop(),
        }
    }

    fn start(&mut self) {
        if self.phase != Phase::Stopped {
            log::warn!("surface created while loop already {:?}", self.phase);
            return;
        }

        log::debug!("spawning render loop thread");
        self.shared.running.store(true, Ordering::Release);

        let shared = Arc::clone(&self.shared);
        let provider = Arc::clone(&self.provider);
        let palette = self.palette;
        self.worker = Some(thread::spawn(move || run_loop(shared, provider, palette)));
        self.phase = Phase::Running;
    }

    fn stop(&mut self) {
        if self.phase != Phase::Running {
            return;
        }

        self.phase = Phase::Stopping;
        self.shared.running.store(false, Ordering::Release);

        // Block until the worker has observed the flag and exited; the
        // surface must not be torn down while a target could still be
        // touched.
        if let Some(worker) = self.worker.take() {
            if worker.join().is_err() {
                log::error!("render loop thread panicked");
            }
        }

        log::debug!("render loop shut down");
        self.phase = Phase::Stopped;
    }

    /// Touch-down: start tracking `id` at (x, y).
    pub fn add_touch(&self, id: f32, x: f32, y: f32) {
        lock_sim(&self.shared.sim).add_touch(id.into(), Vec2::new(x, y));
    }

    /// Touch-move: mirror the new position of `id`.
    pub fn move_touch(&self, id: f32, x: f32, y: f32) {
        lock_sim(&self.shared.sim).move_touch(id.into(), Vec2::new(x, y));
    }

    /// Touch-up: stop tracking `id`.
    pub fn remove_touch(&self, id: f32) {
        lock_sim(&self.shared.sim).remove_touch(id.into());
    }

    /// Inspect the simulation under the shared lock.
    pub fn with_state<R>(&self, f: impl FnOnce(&SimState) -> R) -> R {
        f(&lock_sim(&self.shared.sim))
    }
}

impl<P: SurfaceProvider> Drop for LoopDriver<P> {
    fn drop(&mut self) {
        // Dropping without a Destroyed event still reaps the worker.
        self.stop();
    }
}

/// Lock the simulation, recovering from poisoning.
///
/// A panic inside one critical section must not take every later frame
/// and input handler down with it.
fn lock_sim(sim: &Mutex<SimState>) -> MutexGuard<'_, SimState> {
    sim.lock().unwrap_or_else(PoisonError::into_inner)
}

fn run_loop<P: SurfaceProvider>(shared: Arc<Shared>, provider: Arc<P>, palette: Palette) {
    log::debug!("render loop started");

    while shared.running.load(Ordering::Acquire) {
        // No target is a skipped frame, not a fault.
        let Some(mut target) = provider.acquire() else {
            thread::yield_now();
            continue;
        };

        let outcome = {
            // Input handlers contend on this lock; hold it for
            // update+draw only, never across acquire/present.
            let mut sim = lock_sim(&shared.sim);
            sim.update();
            renderer::draw_frame(&sim, &palette, &mut target)
        };

        // The target goes back to the provider no matter how the draw
        // went; a dropped frame must not wedge the surface.
        provider.present(target);

        match outcome {
            Ok(()) => {
                shared.frames.fetch_add(1, Ordering::Relaxed);
            }
            Err(err) => log::warn!("frame dropped: {err}"),
        }
    }

    log::debug!("render loop exited");
}
