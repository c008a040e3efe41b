//! Per-sample simulation tick
//!
//! One tilt reading advances the ball by exactly one step. The tick is pure:
//! it reads the current ball and scores and returns the next ball together
//! with whatever events happened, leaving it to the caller to fold those
//! events into the match.

use glam::Vec2;

use super::collision::{resolve_boundary, resolve_obstacles};
use super::field::FieldGeometry;
use super::state::{BallState, GameEvent, MatchState, Side};
use crate::consts::*;

/// Result of advancing one tick
#[derive(Debug, Clone, PartialEq)]
pub struct TickOutcome {
    pub ball: BallState,
    pub events: Vec<GameEvent>,
}

/// Advance the ball by one tilt sample.
///
/// `tilt` is the planar (x, y) part of the accelerometer reading. The caller
/// must not tick a paused or finished match.
pub fn tick(tilt: Vec2, ball: &BallState, scores: &MatchState, field: &FieldGeometry) -> TickOutcome {
    let r = field.ball_radius;
    let mut pos = ball.pos;
    let mut vel = ball.vel;
    let mut events = Vec::new();

    // X tilt is inverted relative to Y to match the sensor mounting
    vel.x -= tilt.x * SENSITIVITY;
    vel.y += tilt.y * SENSITIVITY;

    pos += vel;

    // Goals: each mouth is checked independently, top mouth first
    let mut score_top = scores.score_top;
    let mut score_bottom = scores.score_bottom;

    if pos.y - r <= field.goal_height() && field.goal_top.spans_x(pos.x) {
        score_bottom += 1;
        record_goal(&mut events, Side::Bottom, score_bottom);
        pos = field.center();
        vel = Vec2::ZERO;
    }
    if pos.y + r >= field.height - field.goal_height() && field.goal_bottom.spans_x(pos.x) {
        score_top += 1;
        record_goal(&mut events, Side::Top, score_top);
        pos = field.center();
        vel = Vec2::ZERO;
    }

    let hits = resolve_obstacles(pos, &mut vel, r, &field.obstacles);
    if hits > 1 {
        log::trace!("Ball overlapped {} obstacles in one tick", hits);
    }

    resolve_boundary(&mut pos, &mut vel, field);

    vel *= FRICTION;

    TickOutcome {
        ball: BallState { pos, vel },
        events,
    }
}

fn record_goal(events: &mut Vec<GameEvent>, side: Side, new_score: u32) {
    log::debug!("Goal for {} ({} total)", side.as_str(), new_score);
    events.push(GameEvent::GoalScored { side });
    if new_score >= WIN_SCORE {
        events.push(GameEvent::WinnerDecided { side });
    }
}
