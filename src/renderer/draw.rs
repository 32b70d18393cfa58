//! Frame composition

use super::canvas::{Canvas, Palette, RenderError};
use crate::sim::SimState;

/// Draw one frame of the simulation.
///
/// Paint order is fixed: background, primary ball, then every
/// touch-tracked ball on top. Touch balls share one style, so their
/// relative order does not matter.
pub fn draw_frame<C: Canvas + ?Sized>(
    state: &SimState,
    palette: &Palette,
    canvas: &mut C,
) -> Result<(), RenderError> {
    canvas.fill(palette.background)?;

    canvas.fill_circle(state.primary.pos, state.primary.radius, palette.primary)?;

    for ball in state.touches() {
        canvas.fill_circle(ball.pos, ball.radius, palette.touch)?;
    }

    Ok(())
}
