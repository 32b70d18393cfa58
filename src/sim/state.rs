//! Simulation state and core types
//!
//! One always-present primary ball that coasts and bounces, plus a map of
//! touch-tracked balls that mirror active touch contacts.

use std::collections::HashMap;
use std::f32::consts::TAU;

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::bounce;
use crate::consts::{BALL_RADIUS, DAMPING};

/// Identifier for one active touch contact.
///
/// Input sources report pointer ids as floats; hashing raw floats is a
/// footgun, so the id is stored by bit pattern.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TouchId(u32);

impl From<f32> for TouchId {
    fn from(raw: f32) -> Self {
        Self(raw.to_bits())
    }
}

/// A circular moving entity
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Ball {
    pub pos: Vec2,
    pub vel: Vec2,
    pub radius: f32,
}

impl Ball {
    /// New ball at rest. `radius` must be positive.
    pub fn new(pos: Vec2, radius: f32) -> Self {
        debug_assert!(radius > 0.0, "ball radius must be positive");
        Self {
            pos,
            vel: Vec2::ZERO,
            radius,
        }
    }
}

/// Drawable area in pixels. Replaced only on resize events.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Default for Viewport {
    /// Positive placeholder until the first resize event arrives.
    fn default() -> Self {
        Self {
            width: 1.0,
            height: 1.0,
        }
    }
}

impl Viewport {
    pub fn center(&self) -> Vec2 {
        Vec2::new(self.width / 2.0, self.height / 2.0)
    }
}

/// Complete simulation state
///
/// Owned by the surface component and mutated under its lock; nothing in
/// here is shared further.
#[derive(Debug)]
pub struct SimState {
    pub viewport: Viewport,
    pub primary: Ball,
    touches: HashMap<TouchId, Ball>,
    rng: Pcg32,
    launch_speed: f32,
}

impl SimState {
    /// Create a state with the primary ball centered and kicked in a
    /// seeded random direction.
    pub fn new(seed: u64, launch_speed: f32) -> Self {
        let mut state = Self {
            viewport: Viewport::default(),
            primary: Ball::new(Vec2::ZERO, BALL_RADIUS),
            touches: HashMap::new(),
            rng: Pcg32::seed_from_u64(seed),
            launch_speed,
        };
        state.respawn_primary();
        state
    }

    /// Re-center the primary ball and give it a fresh kick.
    pub fn respawn_primary(&mut self) {
        let angle = self.rng.random_range(0.0..TAU);
        let mut ball = Ball::new(self.viewport.center(), BALL_RADIUS);
        ball.vel = Vec2::new(angle.cos(), angle.sin()) * self.launch_speed;
        self.primary = ball;
    }

    /// Adopt a new viewport. The primary ball is re-created from scratch,
    /// as its old position may be meaningless in the new bounds.
    pub fn resize(&mut self, width: f32, height: f32) {
        self.viewport = Viewport { width, height };
        self.respawn_primary();
    }

    /// Start tracking a touch contact. A re-used id overwrites: last
    /// write wins.
    pub fn add_touch(&mut self, id: TouchId, pos: Vec2) {
        self.touches.insert(id, Ball::new(pos, BALL_RADIUS));
    }

    /// Mirror a touch contact's new position.
    ///
    /// Down/move/up ordering is the input source's business; a move for
    /// an id we are not tracking is dropped rather than trusted.
    pub fn move_touch(&mut self, id: TouchId, pos: Vec2) {
        match self.touches.get_mut(&id) {
            Some(ball) => ball.pos = pos,
            None => log::debug!("move for unknown touch {id:?} dropped"),
        }
    }

    /// Stop tracking a touch contact. Idempotent.
    pub fn remove_touch(&mut self, id: TouchId) {
        self.touches.remove(&id);
    }

    /// Advance the primary ball one step: coast, damp, bounce.
    ///
    /// Touch-tracked balls are position mirrors only; they neither coast
    /// nor bounce.
    pub fn update(&mut self) {
        let ball = &mut self.primary;

        ball.pos += ball.vel;
        ball.vel *= DAMPING;

        // At most one edge is corrected per step; a corner hit resolves
        // the other axis on a later step.
        if let Some(edge) = bounce::first_crossed_edge(ball, &self.viewport) {
            bounce::reflect(ball, edge, &self.viewport);
        }
    }

    /// Ball tracked for `id`, if any.
    pub fn touch(&self, id: TouchId) -> Option<&Ball> {
        self.touches.get(&id)
    }

    /// All touch-tracked balls, in no particular order.
    pub fn touches(&self) -> impl Iterator<Item = &Ball> {
        self.touches.values()
    }

    pub fn touch_count(&self) -> usize {
        self.touches.len()
    }
}
