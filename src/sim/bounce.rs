//! Edge collision for the primary ball
//!
//! The viewport is an axis-aligned box; a crossing is resolved by clamping
//! the ball tangent to the edge and flipping the normal velocity
//! component. Reflection is elastic: no energy is lost here beyond the
//! ambient damping applied in `update`.

use super::state::{Ball, Viewport};

/// Viewport edges, in the fixed order crossings are checked.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Edge {
    Right,
    Left,
    Bottom,
    Top,
}

/// First edge the ball has crossed, checked right, left, bottom, top.
///
/// At most one edge is reported per step. When a corner hit violates two
/// bounds at once, only the earlier edge in the order is corrected this
/// step; the other axis resolves on a later one.
pub fn first_crossed_edge(ball: &Ball, viewport: &Viewport) -> Option<Edge> {
    if ball.pos.x + ball.radius > viewport.width {
        Some(Edge::Right)
    } else if ball.pos.x - ball.radius < 0.0 {
        Some(Edge::Left)
    } else if ball.pos.y + ball.radius > viewport.height {
        Some(Edge::Bottom)
    } else if ball.pos.y - ball.radius < 0.0 {
        Some(Edge::Top)
    } else {
        None
    }
}

/// Clamp the ball tangent to `edge` and flip the velocity component
/// normal to it.
pub fn reflect(ball: &mut Ball, edge: Edge, viewport: &Viewport) {
    match edge {
        Edge::Right => {
            ball.pos.x = viewport.width - ball.radius;
            ball.vel.x = -ball.vel.x;
        }
        Edge::Left => {
            ball.pos.x = ball.radius;
            ball.vel.x = -ball.vel.x;
        }
        Edge::Bottom => {
            ball.pos.y = viewport.height - ball.radius;
            ball.vel.y = -ball.vel.y;
        }
        Edge::Top => {
            ball.pos.y = ball.radius;
            ball.vel.y = -ball.vel.y;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec2;

    const VIEW: Viewport = Viewport {
        width: 800.0,
        height: 600.0,
    };

    fn ball_at(x: f32, y: f32, vx: f32, vy: f32) -> Ball {
        let mut ball = Ball::new(Vec2::new(x, y), 100.0);
        ball.vel = Vec2::new(vx, vy);
        ball
    }

    #[test]
    fn test_inside_bounds_is_no_edge() {
        let ball = ball_at(400.0, 300.0, 5.0, 5.0);
        assert_eq!(first_crossed_edge(&ball, &VIEW), None);
    }

    #[test]
    fn test_right_edge_clamp_and_flip() {
        let mut ball = ball_at(710.0, 300.0, 5.0, 2.0);
        assert_eq!(first_crossed_edge(&ball, &VIEW), Some(Edge::Right));
        reflect(&mut ball, Edge::Right, &VIEW);
        assert_eq!(ball.pos, Vec2::new(700.0, 300.0));
        assert_eq!(ball.vel, Vec2::new(-5.0, 2.0));
    }

    #[test]
    fn test_left_edge_clamp_and_flip() {
        let mut ball = ball_at(90.0, 300.0, -5.0, 2.0);
        assert_eq!(first_crossed_edge(&ball, &VIEW), Some(Edge::Left));
        reflect(&mut ball, Edge::Left, &VIEW);
        assert_eq!(ball.pos, Vec2::new(100.0, 300.0));
        assert_eq!(ball.vel, Vec2::new(5.0, 2.0));
    }

    #[test]
    fn test_bottom_edge_clamp_and_flip() {
        let mut ball = ball_at(400.0, 510.0, 2.0, 5.0);
        assert_eq!(first_crossed_edge(&ball, &VIEW), Some(Edge::Bottom));
        reflect(&mut ball, Edge::Bottom, &VIEW);
        assert_eq!(ball.pos, Vec2::new(400.0, 500.0));
        assert_eq!(ball.vel, Vec2::new(2.0, -5.0));
    }

    #[test]
    fn test_top_edge_clamp_and_flip() {
        let mut ball = ball_at(400.0, 90.0, 2.0, -5.0);
        assert_eq!(first_crossed_edge(&ball, &VIEW), Some(Edge::Top));
        reflect(&mut ball, Edge::Top, &VIEW);
        assert_eq!(ball.pos, Vec2::new(400.0, 100.0));
        assert_eq!(ball.vel, Vec2::new(2.0, 5.0));
    }

    #[test]
    fn test_corner_corrects_one_axis_only() {
        // Both the right and bottom bounds are violated; right wins the
        // priority order, so y is left past the bottom bound this step.
        let mut ball = ball_at(710.0, 510.0, 5.0, 5.0);
        let edge = first_crossed_edge(&ball, &VIEW).expect("edge crossed");
        assert_eq!(edge, Edge::Right);
        reflect(&mut ball, edge, &VIEW);
        assert_eq!(ball.pos, Vec2::new(700.0, 510.0));
        assert_eq!(ball.vel, Vec2::new(-5.0, 5.0));
    }

    #[test]
    fn test_edge_priority_order() {
        // A ball wider than the viewport violates right and left at once;
        // right is checked first.
        let small = Viewport {
            width: 150.0,
            height: 600.0,
        };
        let ball = ball_at(75.0, 300.0, 0.0, 0.0);
        assert_eq!(first_crossed_edge(&ball, &small), Some(Edge::Right));
    }
}
