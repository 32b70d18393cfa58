//! Tap Bounce entry point
//!
//! Stands in for a real windowing platform: brings a software-framebuffer
//! surface up, scripts one touch dragging across the view while the
//! primary ball bounces, then tears the surface down.

use std::path::Path;
use std::sync::Arc;
use std::thread;
use std::time::Duration;

use tap_bounce::Settings;
use tap_bounce::surface::{BufferSurface, LoopDriver, SurfaceEvent};

const VIEW_WIDTH: u32 = 800;
const VIEW_HEIGHT: u32 = 600;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let settings = Settings::load(Path::new("settings.json"));

    let provider = Arc::new(BufferSurface::new());
    let mut driver = LoopDriver::new(Arc::clone(&provider), &settings);

    // Platform lifecycle: the surface appears, then reports its size.
    driver.handle_event(SurfaceEvent::Created);
    provider.resize(VIEW_WIDTH, VIEW_HEIGHT);
    driver.handle_event(SurfaceEvent::Resized {
        width: VIEW_WIDTH,
        height: VIEW_HEIGHT,
    });
    log::info!("surface up at {VIEW_WIDTH}x{VIEW_HEIGHT}");

    // One finger drags across the view while the primary ball bounces.
    driver.add_touch(0.0, 100.0, 100.0);
    for step in 1..=60 {
        let t = step as f32 / 60.0;
        driver.move_touch(0.0, 100.0 + 550.0 * t, 100.0 + 350.0 * t);
        thread::sleep(Duration::from_millis(16));
    }
    driver.remove_touch(0.0);

    driver.with_state(|sim| {
        log::info!(
            "primary ball at ({:.1}, {:.1}), {} active touches",
            sim.primary.pos.x,
            sim.primary.pos.y,
            sim.touch_count()
        );
    });
    log::info!("rendered {} frames", driver.frames());

    driver.handle_event(SurfaceEvent::Destroyed);
}
