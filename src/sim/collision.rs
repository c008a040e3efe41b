//! Collision detection and response for the rectangular field
//!
//! Everything here is axis-aligned: the ball is treated as its bounding
//! square for obstacle tests, and bounces flip a velocity component while
//! scaling it by the restitution coefficient.

use glam::Vec2;

use super::field::{FieldGeometry, Rect};
use crate::consts::RESTITUTION;

/// Which field edges the ball touched during boundary resolution
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BoundaryHit {
    pub x: bool,
    pub y: bool,
}

impl BoundaryHit {
    pub fn any(&self) -> bool {
        self.x || self.y
    }
}

/// Bounce one velocity component
#[inline]
pub fn reflect_axis(v: f32) -> f32 {
    -v * RESTITUTION
}

/// Strict overlap between the ball's bounding square and a rectangle.
///
/// Touching edges do not count.
pub fn overlaps_rect(ball_pos: Vec2, ball_radius: f32, rect: &Rect) -> bool {
    ball_pos.x + ball_radius > rect.left
        && ball_pos.x - ball_radius < rect.right
        && ball_pos.y + ball_radius > rect.top
        && ball_pos.y - ball_radius < rect.bottom
}

/// Reflect off every overlapping obstacle, in layout order.
///
/// Each overlap bounces both components again; there is no push-out, so a
/// ball lodged in a bar keeps flipping until it drifts free.
pub fn resolve_obstacles(pos: Vec2, vel: &mut Vec2, ball_radius: f32, obstacles: &[Rect]) -> u32 {
    let mut hits = 0;
    for obstacle in obstacles {
        if overlaps_rect(pos, ball_radius, obstacle) {
            vel.x = reflect_axis(vel.x);
            vel.y = reflect_axis(vel.y);
            hits += 1;
        }
    }
    hits
}

/// Bounce off the field edges and clamp the ball back inside.
///
/// X is resolved before Y; each axis reflects at most once per call.
pub fn resolve_boundary(pos: &mut Vec2, vel: &mut Vec2, field: &FieldGeometry) -> BoundaryHit {
    let r = field.ball_radius;
    let mut hit = BoundaryHit::default();

    if pos.x <= r || pos.x >= field.width - r {
        vel.x = reflect_axis(vel.x);
        pos.x = pos.x.clamp(r, field.width - r);
        hit.x = true;
    }
    if pos.y <= r || pos.y >= field.height - r {
        vel.y = reflect_axis(vel.y);
        pos.y = pos.y.clamp(r, field.height - r);
        hit.y = true;
    }

    hit
}
