//! Ball, match and event types
//!
//! `BallState` is advanced by the physics tick; `MatchState` only changes by
//! folding in the `GameEvent`s a tick produces.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::field::FieldGeometry;

/// A player / goal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    Top,
    Bottom,
}

impl Side {
    pub fn opponent(self) -> Self {
        match self {
            Side::Top => Side::Bottom,
            Side::Bottom => Side::Top,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Side::Top => "Top",
            Side::Bottom => "Bottom",
        }
    }
}

/// Something the presentation layer should react to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    GoalScored { side: Side },
    WinnerDecided { side: Side },
}

/// Current phase of the match
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MatchPhase {
    /// Ticks are delivered
    Playing,
    /// Pause menu is up
    Paused,
    /// A winner has been decided (terminal)
    Finished,
}

/// The single ball
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BallState {
    pub pos: Vec2,
    pub vel: Vec2,
}

impl BallState {
    /// Ball at rest in the middle of the field
    pub fn centered(field: &FieldGeometry) -> Self {
        Self {
            pos: field.center(),
            vel: Vec2::ZERO,
        }
    }

    pub fn at_rest(pos: Vec2) -> Self {
        Self { pos, vel: Vec2::ZERO }
    }

    pub fn speed(&self) -> f32 {
        self.vel.length()
    }
}

/// Score and progress of one match
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchState {
    pub score_top: u32,
    pub score_bottom: u32,
    pub winner: Option<Side>,
    pub paused: bool,
}

impl MatchState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn score(&self, side: Side) -> u32 {
        match side {
            Side::Top => self.score_top,
            Side::Bottom => self.score_bottom,
        }
    }

    pub fn phase(&self) -> MatchPhase {
        if self.winner.is_some() {
            MatchPhase::Finished
        } else if self.paused {
            MatchPhase::Paused
        } else {
            MatchPhase::Playing
        }
    }

    pub fn is_finished(&self) -> bool {
        self.winner.is_some()
    }

    /// Request the pause menu. No effect once finished.
    pub fn pause(&mut self) -> bool {
        if self.phase() != MatchPhase::Playing {
            return false;
        }
        self.paused = true;
        true
    }

    /// Leave the pause menu. No effect once finished.
    pub fn resume(&mut self) -> bool {
        if self.phase() != MatchPhase::Paused {
            return false;
        }
        self.paused = false;
        true
    }

    /// Fold one event into the match
    pub fn apply(&mut self, event: &GameEvent) {
        let open = self.winner.is_none();
        self.fold(event, open);
    }

    /// Fold all events from one tick.
    ///
    /// Goals count if the match was still open when the tick started, so a
    /// win decided earlier in the same tick does not swallow a later goal.
    pub fn apply_tick(&mut self, events: &[GameEvent]) {
        let open = self.winner.is_none();
        for event in events {
            self.fold(event, open);
        }
    }

    fn fold(&mut self, event: &GameEvent, accept_goals: bool) {
        match *event {
            GameEvent::GoalScored { side } => {
                if !accept_goals {
                    log::warn!("Ignoring {} goal after the match was decided", side.as_str());
                    return;
                }
                match side {
                    Side::Top => self.score_top += 1,
                    Side::Bottom => self.score_bottom += 1,
                }
            }
            GameEvent::WinnerDecided { side } => {
                if let Some(previous) = self.winner
                    && previous != side
                {
                    log::warn!(
                        "Winner changed from {} to {}",
                        previous.as_str(),
                        side.as_str()
                    );
                }
                self.winner = Some(side);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_goal_increments_side() {
        let mut state = MatchState::new();
        state.apply(&GameEvent::GoalScored { side: Side::Bottom });
        state.apply(&GameEvent::GoalScored { side: Side::Bottom });
        state.apply(&GameEvent::GoalScored { side: Side::Top });
        assert_eq!(state.score(Side::Bottom), 2);
        assert_eq!(state.score(Side::Top), 1);
        assert_eq!(state.phase(), MatchPhase::Playing);
    }

    #[test]
    fn test_winner_idempotent_and_last_write_wins() {
        let mut state = MatchState::new();
        state.apply(&GameEvent::WinnerDecided { side: Side::Top });
        state.apply(&GameEvent::WinnerDecided { side: Side::Top });
        assert_eq!(state.winner, Some(Side::Top));

        state.apply(&GameEvent::WinnerDecided { side: Side::Bottom });
        assert_eq!(state.winner, Some(Side::Bottom));
        assert_eq!(state.score_top, 0);
        assert_eq!(state.score_bottom, 0);
    }

    #[test]
    fn test_goals_ignored_after_finish() {
        let mut state = MatchState::new();
        state.apply(&GameEvent::WinnerDecided { side: Side::Top });
        state.apply(&GameEvent::GoalScored { side: Side::Bottom });
        assert_eq!(state.score_bottom, 0);
    }

    #[test]
    fn test_same_tick_goals_all_count() {
        let mut state = MatchState {
            score_top: 4,
            score_bottom: 4,
            ..MatchState::new()
        };
        state.apply_tick(&[
            GameEvent::GoalScored { side: Side::Bottom },
            GameEvent::WinnerDecided { side: Side::Bottom },
            GameEvent::GoalScored { side: Side::Top },
            GameEvent::WinnerDecided { side: Side::Top },
        ]);
        assert_eq!((state.score_top, state.score_bottom), (5, 5));
        assert_eq!(state.winner, Some(Side::Top));

        // A later tick's goal is still ignored
        state.apply_tick(&[GameEvent::GoalScored { side: Side::Bottom }]);
        assert_eq!(state.score_bottom, 5);
    }

    #[test]
    fn test_pause_resume_transitions() {
        let mut state = MatchState::new();
        assert!(!state.resume());
        assert!(state.pause());
        assert_eq!(state.phase(), MatchPhase::Paused);
        assert!(!state.pause());
        assert!(state.resume());
        assert_eq!(state.phase(), MatchPhase::Playing);
    }

    #[test]
    fn test_finished_is_terminal() {
        let mut state = MatchState::new();
        state.apply(&GameEvent::WinnerDecided { side: Side::Bottom });
        assert!(!state.pause());
        assert!(!state.resume());
        assert_eq!(state.phase(), MatchPhase::Finished);
    }

    #[test]
    fn test_side_opponent() {
        assert_eq!(Side::Top.opponent(), Side::Bottom);
        assert_eq!(Side::Bottom.opponent(), Side::Top);
    }
}
