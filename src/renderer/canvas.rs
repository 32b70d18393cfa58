//! Color vocabulary and the drawing-primitive contract

use glam::Vec2;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// An opaque-by-default RGBA color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const WHITE: Self = Self::rgb(255, 255, 255);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// Pack as ARGB8888, the framebuffer's pixel layout.
    pub const fn to_argb8888(self) -> u32 {
        (self.a as u32) << 24 | (self.r as u32) << 16 | (self.g as u32) << 8 | self.b as u32
    }
}

/// Colors for one frame, in the order they are painted
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Palette {
    pub background: Color,
    pub primary: Color,
    pub touch: Color,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            background: Color::rgb(51, 10, 111),
            primary: Color::WHITE,
            touch: Color::rgb(145, 123, 76),
        }
    }
}

/// A draw call failed
#[derive(Debug, Error)]
pub enum RenderError {
    /// The target became invalid between acquire and draw.
    #[error("render target lost")]
    TargetLost,
    #[error("draw failed: {0}")]
    Backend(String),
}

/// Drawing primitives a render target must supply.
///
/// Implementations are not expected to block; the render loop holds the
/// simulation lock while drawing.
pub trait Canvas {
    /// Fill the whole target with one color.
    fn fill(&mut self, color: Color) -> Result<(), RenderError>;

    /// Fill a circle of `radius` centered at `center`.
    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Color) -> Result<(), RenderError>;
}
