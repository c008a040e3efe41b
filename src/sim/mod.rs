//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One tick per tilt sample, no wall-clock timestep
//! - Stable iteration order (obstacles in layout order)
//! - No rendering, audio or platform dependencies

pub mod collision;
pub mod field;
pub mod state;
pub mod tick;

pub use collision::{BoundaryHit, overlaps_rect, reflect_axis, resolve_boundary, resolve_obstacles};
pub use field::{FieldError, FieldGeometry, OBSTACLE_COUNT, Rect};
pub use state::{BallState, GameEvent, MatchPhase, MatchState, Side};
pub use tick::{TickOutcome, tick};
