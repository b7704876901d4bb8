//! Game host: world setup, scene enter systems and the frame loop.
//!
//! [`GameApp`] owns the ECS [`World`] and two schedules:
//! - the **physics** schedule, stepped at a fixed rate from an accumulator fed
//!   with `dt * time_scale`, so a frozen world takes no steps at all
//! - the **frame** schedule, run once per frame regardless of time scale
//!
//! Frontends (the headless driver in `main`, the raylib window) only sample
//! input into an [`InputFrame`] and call [`GameApp::frame`].

use bevy_ecs::observer::Observer;
use bevy_ecs::prelude::*;
use log::{debug, info};

use crate::components::dynamictext::DynamicText;
use crate::components::panel::{Panel, PanelKind};
use crate::components::signalbinding::SignalBinding;
use crate::events::scene::{SceneChangeEvent, observe_scene_change_event};
use crate::resources::audio::{AudioSink, setup_audio};
use crate::resources::gameconfig::GameConfig;
use crate::resources::gamestate::GameState;
use crate::resources::input::{InputFrame, InputState};
use crate::resources::level::LevelLayout;
use crate::resources::scene::{CurrentScene, NextScene, Scene};
use crate::resources::systemsstore::SystemsStore;
use crate::resources::worldsignals::WorldSignals;
use crate::resources::worldtime::WorldTime;
use crate::systems::animation::animation_controller;
use crate::systems::audio::{forward_audio_cmds, update_bevy_audio_cmds};
use crate::systems::collision::{collision_detector, player_collision_observer};
use crate::systems::gamestate::{QUIT_FLAG, SCORE_SIGNAL, game_flow_input, publish_game_state};
use crate::systems::goblin::{
    goblin_detection_system, goblin_facing_sync_system, goblin_init_system,
    goblin_motion_system, goblin_patrol_clamp_system,
};
use crate::systems::level::spawn_level;
use crate::systems::movement::movement;
use crate::systems::player::{player_controller, player_init_system};
use crate::systems::scene::{check_pending_scene, scene_is_game};
use crate::systems::signalbinding::{
    update_panel_visibility_system, update_world_signals_binding_system,
};
use crate::systems::time::{set_fixed_delta, update_world_time};

/// Upper bound on physics steps per frame; a long stall drops time instead
/// of spiralling.
const MAX_STEPS_PER_FRAME: u32 = 8;

/// Enter system for the menu scene.
pub fn enter_menu(mut commands: Commands, mut signals: ResMut<WorldSignals>) {
    signals.clear_flag(PanelKind::GameOver.flag());
    signals.clear_flag(PanelKind::GameWin.flag());
    commands.spawn(DynamicText::new("GOBLIN KEEP", 48.0, 40, 60));
    commands.spawn(DynamicText::new(
        "Enter: play    Esc: quit",
        24.0,
        40,
        140,
    ));
    info!("Menu ready");
}

/// Enter system for the game scene: fresh [`GameState`], HUD, panels, level.
pub fn enter_game(
    mut commands: Commands,
    config: Res<GameConfig>,
    level: Res<LevelLayout>,
    mut signals: ResMut<WorldSignals>,
) {
    let state = GameState::new();
    publish_game_state(&state, &mut signals);
    commands.insert_resource(state);

    commands.spawn((
        DynamicText::new("Score: 0", 24.0, 16, 16),
        SignalBinding::new(SCORE_SIGNAL).with_format("Score: {}"),
    ));
    commands.spawn(Panel::new(PanelKind::GameOver, "GAME OVER - R: retry, M: menu"));
    commands.spawn(Panel::new(PanelKind::GameWin, "YOU WIN! - R: play again, M: menu"));

    let spawned = spawn_level(&mut commands, &level, &config);
    info!("Game scene ready ({} level entities)", spawned);
}

/// Schedule run once per frame.
pub fn frame_schedule() -> Schedule {
    let mut schedule = Schedule::default();
    schedule.add_systems(
        (
            game_flow_input,
            (player_init_system, goblin_init_system),
            goblin_detection_system,
            player_controller,
            animation_controller,
            // audio systems must be together
            (update_bevy_audio_cmds, forward_audio_cmds).chain(),
            update_world_signals_binding_system,
            update_panel_visibility_system,
            check_pending_scene,
        )
            .chain(),
    );
    schedule
}

/// Schedule run once per fixed step.
pub fn physics_schedule() -> Schedule {
    let mut schedule = Schedule::default();
    schedule.add_systems(
        (
            goblin_motion_system,
            movement,
            goblin_patrol_clamp_system,
            goblin_facing_sync_system,
            collision_detector,
        )
            .chain()
            .run_if(scene_is_game),
    );
    schedule
}

/// Insert the resources, observers and scene systems the game needs.
pub fn setup_world(
    world: &mut World,
    config: GameConfig,
    level: LevelLayout,
    sink: impl AudioSink + 'static,
) {
    world.insert_resource(WorldTime::default());
    world.insert_resource(WorldSignals::default());
    world.insert_resource(InputState::default());
    world.insert_resource(GameState::new());
    world.insert_resource(CurrentScene::new());
    world.insert_resource(NextScene::new());
    world.insert_resource(config);
    world.insert_resource(level);
    setup_audio(world, sink);

    let mut systems_store = SystemsStore::new();
    systems_store.insert("enter_menu", world.register_system(enter_menu));
    systems_store.insert("enter_game", world.register_system(enter_game));
    world.insert_resource(systems_store);

    world.spawn(Observer::new(observe_scene_change_event));
    world.spawn(Observer::new(player_collision_observer));
    world.flush();
}

/// The running game.
pub struct GameApp {
    pub world: World,
    frame: Schedule,
    physics: Schedule,
    accumulator: f32,
    fixed_dt: f32,
}

impl GameApp {
    pub fn new(config: GameConfig, level: LevelLayout, sink: impl AudioSink + 'static) -> Self {
        let fixed_dt = config.fixed_dt;
        let mut world = World::new();
        setup_world(&mut world, config, level, sink);
        Self {
            world,
            frame: frame_schedule(),
            physics: physics_schedule(),
            accumulator: 0.0,
            fixed_dt,
        }
    }

    /// Load `scene` immediately.
    pub fn start(&mut self, scene: Scene) {
        self.world.resource_mut::<NextScene>().set(scene);
        self.world.trigger(SceneChangeEvent {});
        self.world.flush();
    }

    /// Advance one frame: input edges, due physics steps, then the frame
    /// schedule.
    pub fn frame(&mut self, dt: f32, input: &InputFrame) {
        self.world.resource_mut::<InputState>().update(input);

        let time_scale = self.world.resource::<WorldTime>().time_scale;
        self.accumulator += dt.max(0.0) * time_scale;
        let mut steps = 0;
        while self.accumulator >= self.fixed_dt {
            if steps == MAX_STEPS_PER_FRAME || self.world.resource::<WorldTime>().is_frozen() {
                if steps == MAX_STEPS_PER_FRAME {
                    debug!("Dropping {:.3}s of simulation time", self.accumulator);
                }
                self.accumulator = 0.0;
                break;
            }
            self.step_physics();
            self.accumulator -= self.fixed_dt;
            steps += 1;
        }

        update_world_time(&mut self.world, dt);
        self.frame.run(&mut self.world);
        self.world.clear_trackers();
    }

    /// Run exactly one physics step.
    pub fn step_physics(&mut self) {
        set_fixed_delta(&mut self.world, self.fixed_dt);
        self.physics.run(&mut self.world);
    }

    pub fn should_quit(&self) -> bool {
        self.world.resource::<WorldSignals>().has_flag(QUIT_FLAG)
    }

    pub fn scene(&self) -> Scene {
        self.world.resource::<CurrentScene>().get()
    }

    pub fn game_state(&self) -> &GameState {
        self.world.resource::<GameState>()
    }
}
