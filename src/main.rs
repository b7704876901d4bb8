//! Goblin Keep entry point.
//!
//! A small 2D platformer built on:
//! - **bevy_ecs** for the entity-component-system architecture
//! - **raylib** for the optional window (`--features window`)
//!
//! Without a window the game runs headless for a fixed number of frames with
//! a scripted player, logging what happens. That is enough to watch the
//! goblin AI and the game flow from a terminal:
//!
//! ```sh
//! RUST_LOG=debug cargo run --release -- --frames 900
//! ```

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use log::{error, info, warn};

use goblinkeep::game::GameApp;
use goblinkeep::resources::audio::LogAudioSink;
use goblinkeep::resources::gameconfig::{DEFAULT_CONFIG_PATH, GameConfig};
use goblinkeep::resources::input::InputFrame;
use goblinkeep::resources::level::LevelLayout;
use goblinkeep::resources::scene::Scene;

/// Goblin Keep
#[derive(Parser)]
#[command(version, about = "Collect the coins, dodge the goblin, grab the key.")]
struct Cli {
    /// INI configuration file.
    #[arg(long, value_name = "PATH", default_value = DEFAULT_CONFIG_PATH)]
    config: PathBuf,

    /// Level JSON file (defaults to the embedded level).
    #[arg(long, value_name = "PATH")]
    level: Option<PathBuf>,

    /// Frames to simulate when running headless.
    #[arg(long, value_name = "N", default_value_t = 600)]
    frames: u32,

    /// Open a window instead of running headless.
    #[arg(long)]
    window: bool,
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    let mut config = GameConfig::with_path(&cli.config);
    if let Err(e) = config.load_from_file() {
        warn!("{}; using default configuration", e);
    }

    let level = match &cli.level {
        Some(path) => match LevelLayout::load_from_file(&path.to_string_lossy()) {
            Ok(level) => level,
            Err(e) => {
                error!("Failed to load level {}: {}", path.display(), e);
                return ExitCode::FAILURE;
            }
        },
        None => match LevelLayout::default_level() {
            Ok(level) => level,
            Err(e) => {
                error!("Embedded level is invalid: {}", e);
                return ExitCode::FAILURE;
            }
        },
    };

    if cli.window {
        return run_window(config, level);
    }
    run_headless(config, level, cli.frames);
    ExitCode::SUCCESS
}

/// Hold right and hop every 40 frames.
fn scripted_input(frame: u32) -> InputFrame {
    let input = InputFrame::right();
    if frame % 40 < 2 { input.with_jump() } else { input }
}

fn run_headless(config: GameConfig, level: LevelLayout, frames: u32) {
    let dt = 1.0 / config.target_fps.max(1) as f32;
    let mut app = GameApp::new(config, level, LogAudioSink);
    app.start(Scene::Game);

    let mut ended_at = None;
    for frame in 0..frames {
        app.frame(dt, &scripted_input(frame));
        if app.game_state().is_terminal() {
            ended_at = Some(frame);
            break;
        }
    }

    let state = app.game_state();
    match ended_at {
        Some(frame) if state.is_game_win() => {
            info!("Won after {} frames with score {}", frame + 1, state.score())
        }
        Some(frame) => info!("Game over after {} frames", frame + 1),
        None => info!(
            "Stopped after {} frames, score {}",
            frames,
            state.score()
        ),
    }
}

#[cfg(feature = "window")]
fn run_window(config: GameConfig, level: LevelLayout) -> ExitCode {
    use goblinkeep::systems::render::{render_pass, sample_input};

    let (width, height) = config.window_size();
    let (mut rl, thread) = raylib::init()
        .size(width as i32, height as i32)
        .title("Goblin Keep")
        .build();
    rl.set_target_fps(config.target_fps);
    // Escape goes back to the menu instead of closing the window
    rl.set_exit_key(None);

    let mut app = GameApp::new(config, level, LogAudioSink);
    app.start(Scene::Menu);

    while !rl.window_should_close() && !app.should_quit() {
        let input = sample_input(&rl);
        let dt = rl.get_frame_time();
        app.frame(dt, &input);

        let mut d = rl.begin_drawing(&thread);
        render_pass(&mut app.world, &mut d, 32.0);
    }
    info!("Bye");
    ExitCode::SUCCESS
}

#[cfg(not(feature = "window"))]
fn run_window(_config: GameConfig, _level: LevelLayout) -> ExitCode {
    error!("This build has no window support; rebuild with --features window");
    ExitCode::FAILURE
}
