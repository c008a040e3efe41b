//! Match orchestration
//!
//! `Match` owns the field, ball and score for one game and is the only thing
//! that mutates them. It gates ticks on the match phase, folds tick events
//! into the score, and hands out read-only snapshots for drawing.

use serde::{Deserialize, Serialize};

use crate::input::TiltSample;
use crate::sim::{BallState, FieldError, FieldGeometry, GameEvent, MatchPhase, MatchState, tick};

/// Everything a renderer needs for one frame
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    pub field: FieldGeometry,
    pub ball: BallState,
    pub scores: MatchState,
    pub phase: MatchPhase,
    pub ticks: u64,
}

/// One match between the Top and Bottom players
#[derive(Debug, Clone)]
pub struct Match {
    field: FieldGeometry,
    ball: BallState,
    state: MatchState,
    ticks: u64,
}

impl Match {
    /// Start a match on a field of the given size, ball at the center
    pub fn new(width: f32, height: f32) -> Result<Self, FieldError> {
        let field = FieldGeometry::new(width, height)?;
        log::info!("Match started on {}x{} field", width, height);
        Ok(Self {
            ball: BallState::centered(&field),
            field,
            state: MatchState::new(),
            ticks: 0,
        })
    }

    pub fn field(&self) -> &FieldGeometry {
        &self.field
    }

    pub fn ball(&self) -> &BallState {
        &self.ball
    }

    pub fn state(&self) -> &MatchState {
        &self.state
    }

    pub fn phase(&self) -> MatchPhase {
        self.state.phase()
    }

    /// Ticks simulated since the match (re)started
    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    /// Feed one tilt reading.
    ///
    /// Only advances while playing; paused and finished matches ignore the
    /// reading and report no events.
    pub fn step(&mut self, sample: TiltSample) -> Vec<GameEvent> {
        if self.phase() != MatchPhase::Playing {
            return Vec::new();
        }

        let outcome = tick(sample.xy(), &self.ball, &self.state, &self.field);
        self.ball = outcome.ball;
        self.ticks += 1;

        self.state.apply_tick(&outcome.events);
        if outcome
            .events
            .iter()
            .any(|e| matches!(e, GameEvent::WinnerDecided { .. }))
            && let Some(side) = self.state.winner
        {
            log::info!(
                "{} wins {}-{} after {} ticks",
                side.as_str(),
                self.state.score_top,
                self.state.score_bottom,
                self.ticks
            );
        }

        outcome.events
    }

    /// Returns true if the match was playing and is now paused
    pub fn pause(&mut self) -> bool {
        let changed = self.state.pause();
        if changed {
            log::debug!("Paused at tick {}", self.ticks);
        }
        changed
    }

    /// Returns true if the match was paused and is now playing
    pub fn resume(&mut self) -> bool {
        let changed = self.state.resume();
        if changed {
            log::debug!("Resumed at tick {}", self.ticks);
        }
        changed
    }

    /// Pause button / menu handler
    pub fn toggle_pause(&mut self) -> bool {
        match self.phase() {
            MatchPhase::Playing => self.pause(),
            MatchPhase::Paused => self.resume(),
            MatchPhase::Finished => false,
        }
    }

    /// Re-lay the field after the host view changed size.
    ///
    /// The ball keeps its velocity and is pulled back inside the new bounds.
    /// On error the previous field stays in place.
    pub fn resize(&mut self, width: f32, height: f32) -> Result<(), FieldError> {
        let field = FieldGeometry::new(width, height)?;
        let (min, max) = field.ball_bounds();
        self.ball.pos = self.ball.pos.clamp(min, max);
        self.field = field;
        log::debug!("Field resized to {}x{}", width, height);
        Ok(())
    }

    /// Rematch on the same field
    pub fn restart(&mut self) {
        self.ball = BallState::centered(&self.field);
        self.state = MatchState::new();
        self.ticks = 0;
        log::info!("Match restarted");
    }

    /// Copy of the current state for drawing between ticks
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            field: self.field.clone(),
            ball: self.ball,
            scores: self.state.clone(),
            phase: self.phase(),
            ticks: self.ticks,
        }
    }
}
