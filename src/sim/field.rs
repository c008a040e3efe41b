//! Playing field geometry
//!
//! The field is a `width` x `height` rectangle with y growing downward. Goal
//! mouths sit centered on the top and bottom edges, and eight obstacle bars
//! are laid out at fixed offsets, mirrored across both center lines.

use glam::Vec2;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::consts::*;

/// Number of obstacle bars on every field
pub const OBSTACLE_COUNT: usize = 8;

/// Obstacle bar size and offsets from the field edges
const BAR_NEAR: (f32, f32) = (150.0, 250.0);
const BAR_FAR: (f32, f32) = (400.0, 500.0);
const BAR_THICKNESS: f32 = 20.0;
const BAR_NEAR_DEPTH: f32 = 200.0;
const BAR_FAR_DEPTH: f32 = 100.0;

#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum FieldError {
    #[error("field dimensions must be positive and finite, got {width}x{height}")]
    InvalidDimensions { width: f32, height: f32 },
    #[error("field {width}x{height} cannot fit a ball of radius {ball_radius}")]
    TooSmall {
        width: f32,
        height: f32,
        ball_radius: f32,
    },
}

/// Axis-aligned rectangle in field coordinates
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub left: f32,
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
}

impl Rect {
    pub fn new(left: f32, top: f32, right: f32, bottom: f32) -> Self {
        debug_assert!(left <= right && top <= bottom, "inverted rect");
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    #[inline]
    pub fn width(&self) -> f32 {
        self.right - self.left
    }

    #[inline]
    pub fn height(&self) -> f32 {
        self.bottom - self.top
    }

    pub fn center(&self) -> Vec2 {
        Vec2::new(
            (self.left + self.right) / 2.0,
            (self.top + self.bottom) / 2.0,
        )
    }

    /// Inclusive horizontal containment
    #[inline]
    pub fn spans_x(&self, x: f32) -> bool {
        x >= self.left && x <= self.right
    }
}

/// Static description of the playing field, derived from its dimensions
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldGeometry {
    pub width: f32,
    pub height: f32,
    pub ball_radius: f32,
    /// Goal mouth on the top edge (bottom player scores here)
    pub goal_top: Rect,
    /// Goal mouth on the bottom edge (top player scores here)
    pub goal_bottom: Rect,
    /// Obstacle bars, in collision order
    pub obstacles: [Rect; OBSTACLE_COUNT],
}

impl FieldGeometry {
    /// Lay out a field of the given size.
    ///
    /// Fails for zero, negative or non-finite dimensions, and for fields
    /// narrower or shorter than the ball.
    pub fn new(width: f32, height: f32) -> Result<Self, FieldError> {
        let valid = |v: f32| v.is_finite() && v > 0.0;
        if !valid(width) || !valid(height) {
            return Err(FieldError::InvalidDimensions { width, height });
        }
        if width < 2.0 * BALL_RADIUS || height < 2.0 * BALL_RADIUS {
            return Err(FieldError::TooSmall {
                width,
                height,
                ball_radius: BALL_RADIUS,
            });
        }

        let goal_width = width * GOAL_WIDTH_FRACTION;
        let goal_left = (width - goal_width) / 2.0;
        let goal_right = goal_left + goal_width;

        let goal_top = Rect::new(goal_left, 0.0, goal_right, GOAL_HEIGHT);
        let goal_bottom = Rect::new(goal_left, height - GOAL_HEIGHT, goal_right, height);

        Ok(Self {
            width,
            height,
            ball_radius: BALL_RADIUS,
            goal_top,
            goal_bottom,
            obstacles: obstacle_layout(width, height),
        })
    }

    /// Ball spawn point
    pub fn center(&self) -> Vec2 {
        Vec2::new(self.width / 2.0, self.height / 2.0)
    }

    /// Depth of each goal mouth from its edge
    #[inline]
    pub fn goal_height(&self) -> f32 {
        self.goal_top.height()
    }

    /// Goal band horizontal extent (shared by both mouths)
    #[inline]
    pub fn goal_span(&self) -> (f32, f32) {
        (self.goal_top.left, self.goal_top.right)
    }

    /// Range the ball center may occupy on each axis
    pub fn ball_bounds(&self) -> (Vec2, Vec2) {
        let r = self.ball_radius;
        (
            Vec2::new(r, r),
            Vec2::new(self.width - r, self.height - r),
        )
    }
}

/// Near bars at depth 200, far bars at depth 100; left half first, then the
/// right-hand mirror. Each half lists top before bottom.
fn obstacle_layout(w: f32, h: f32) -> [Rect; OBSTACLE_COUNT] {
    let bar = |(x0, x1): (f32, f32), top: f32| Rect::new(x0, top, x1, top + BAR_THICKNESS);
    let mirror_x = |(x0, x1): (f32, f32)| (w - x1, w - x0);
    let near_bottom = h - BAR_NEAR_DEPTH - BAR_THICKNESS;
    let far_bottom = h - BAR_FAR_DEPTH - BAR_THICKNESS;

    [
        bar(BAR_NEAR, BAR_NEAR_DEPTH),
        bar(BAR_FAR, BAR_FAR_DEPTH),
        bar(BAR_NEAR, near_bottom),
        bar(BAR_FAR, far_bottom),
        bar(mirror_x(BAR_NEAR), BAR_NEAR_DEPTH),
        bar(mirror_x(BAR_FAR), BAR_FAR_DEPTH),
        bar(mirror_x(BAR_NEAR), near_bottom),
        bar(mirror_x(BAR_FAR), far_bottom),
    ]
}
