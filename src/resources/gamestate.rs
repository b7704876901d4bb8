//! Score and end-of-playthrough state.
//!
//! [`GameState`] only holds data and enforces its own invariants. The
//! side effects that accompany each transition (time scale, UI signals,
//! scene requests) are orchestrated by
//! [`GameFlow`](crate::systems::gamestate::GameFlow).
//!
//! Invariants
//! - the score only grows while neither terminal flag is set
//! - once a terminal flag is set no further terminal transition is accepted;
//!   only a scene reload (which replaces the resource) or
//!   [`GameState::reset_for_restart`] leaves it

use bevy_ecs::prelude::Resource;

#[derive(Resource, Debug, Clone, Default, PartialEq, Eq)]
pub struct GameState {
    score: u32,
    game_over: bool,
    game_win: bool,
}

impl GameState {
    /// Fresh playthrough: score 0, no terminal flag.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn is_game_over(&self) -> bool {
        self.game_over
    }

    pub fn is_game_win(&self) -> bool {
        self.game_win
    }

    /// Gameplay is gated on this: no agent acts once it is true.
    pub fn is_terminal(&self) -> bool {
        self.game_over || self.game_win
    }

    /// Add `points` unless the playthrough has ended. Returns whether the
    /// score changed.
    pub fn add_score(&mut self, points: u32) -> bool {
        if self.is_terminal() {
            return false;
        }
        self.score = self.score.saturating_add(points);
        true
    }

    /// Enter the lost state, wiping the score. Returns false when the
    /// playthrough had already ended.
    pub fn set_game_over(&mut self) -> bool {
        if self.is_terminal() {
            return false;
        }
        self.game_over = true;
        self.score = 0;
        true
    }

    /// Enter the won state; the score is kept. Returns false when the
    /// playthrough had already ended.
    pub fn set_game_win(&mut self) -> bool {
        if self.is_terminal() {
            return false;
        }
        self.game_win = true;
        true
    }

    /// Clear the lost state and the score ahead of a scene reload.
    pub fn reset_for_restart(&mut self) {
        self.game_over = false;
        self.score = 0;
    }
}
