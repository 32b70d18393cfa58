//! Tap Bounce - a touch-driven bouncing ball drawing surface
//!
//! Core modules:
//! - `sim`: Simulation state (primary ball physics, touch-tracked balls)
//! - `renderer`: Drawing primitives and a software framebuffer target
//! - `surface`: Surface lifecycle events and the render loop driver
//! - `settings`: Colors and tunables

pub mod renderer;
pub mod settings;
pub mod sim;
pub mod surface;

pub use settings::Settings;

/// Simulation constants
pub mod consts {
    /// Radius shared by the primary ball and every touch-tracked ball
    pub const BALL_RADIUS: f32 = 100.0;
    /// Per-step multiplicative velocity decay for the primary ball
    pub const DAMPING: f32 = 0.99;
    /// Default speed of the primary ball's launch kick (pixels per step)
    pub const LAUNCH_SPEED: f32 = 7.0;
}
