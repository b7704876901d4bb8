//! Game flow: score, end of playthrough, restart and menu.
//!
//! [`GameFlow`] bundles everything a transition touches so that callers (the
//! collision router, the input handler, tests) cannot update the score
//! without also refreshing the display, or end the game without freezing
//! time.

use bevy_ecs::prelude::*;
use bevy_ecs::system::SystemParam;
use log::info;

use crate::components::panel::PanelKind;
use crate::resources::gamestate::GameState;
use crate::resources::input::InputState;
use crate::resources::scene::{CurrentScene, NextScene, Scene};
use crate::resources::worldsignals::WorldSignals;
use crate::resources::worldtime::WorldTime;

/// World signal holding the displayed score.
pub const SCORE_SIGNAL: &str = "score";
/// World flag asking the host loop to exit.
pub const QUIT_FLAG: &str = "quit_game";

#[derive(SystemParam)]
pub struct GameFlow<'w> {
    state: ResMut<'w, GameState>,
    time: ResMut<'w, WorldTime>,
    next_scene: ResMut<'w, NextScene>,
    signals: ResMut<'w, WorldSignals>,
}

impl GameFlow<'_> {
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Add points while the playthrough is running and refresh the display.
    pub fn add_score(&mut self, points: u32) {
        if self.state.add_score(points) {
            publish_game_state(&self.state, &mut self.signals);
        }
    }

    /// Lose: score wiped, time frozen, game-over panel shown.
    pub fn game_over(&mut self) {
        if !self.state.set_game_over() {
            return;
        }
        self.time.freeze();
        publish_game_state(&self.state, &mut self.signals);
        info!("Game over");
    }

    /// Win: score kept, time frozen, win panel shown.
    pub fn game_win(&mut self) {
        if !self.state.set_game_win() {
            return;
        }
        self.time.freeze();
        publish_game_state(&self.state, &mut self.signals);
        info!("Level complete with score {}", self.state.score());
    }

    pub fn go_to_menu(&mut self) {
        self.time.resume();
        self.next_scene.set(Scene::Menu);
    }

    /// Reset the playthrough and reload the game scene.
    pub fn restart_game(&mut self) {
        self.state.reset_for_restart();
        publish_game_state(&self.state, &mut self.signals);
        self.time.resume();
        self.next_scene.set(Scene::Game);
    }

    pub fn quit(&mut self) {
        info!("Quit requested");
        self.signals.set_flag(QUIT_FLAG);
    }
}

/// Mirror the game state into the world signals the display binds to.
pub fn publish_game_state(state: &GameState, signals: &mut WorldSignals) {
    signals.set_integer(SCORE_SIGNAL, state.score() as i32);
    for (kind, on) in [
        (PanelKind::GameOver, state.is_game_over()),
        (PanelKind::GameWin, state.is_game_win()),
    ] {
        if on {
            signals.set_flag(kind.flag());
        } else {
            signals.clear_flag(kind.flag());
        }
    }
}

/// Menu and restart keys.
///
/// Menu: confirm starts a playthrough, back quits. Game: restart reloads the
/// level, back returns to the menu. These work while time is frozen.
pub fn game_flow_input(input: Res<InputState>, scene: Res<CurrentScene>, mut flow: GameFlow) {
    match scene.get() {
        Scene::Menu => {
            if input.confirm.just_pressed {
                flow.restart_game();
            } else if input.back.just_pressed {
                flow.quit();
            }
        }
        Scene::Game => {
            if input.restart.just_pressed {
                flow.restart_game();
            } else if input.back.just_pressed {
                flow.go_to_menu();
            }
        }
        Scene::None => {}
    }
}
