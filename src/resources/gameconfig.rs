//! Game configuration resource.
//!
//! Manages tunables loaded from an INI configuration file. Provides defaults
//! for safe startup and a loader that overlays the INI file on them.
//!
//! # Configuration File Format
//!
//! ```ini
//! [window]
//! width = 960
//! height = 540
//! target_fps = 60
//!
//! [physics]
//! gravity = 30.0
//! fixed_dt = 0.02
//!
//! [player]
//! move_speed = 5.0
//! jump_force = 15.0
//!
//! [goblin]
//! move_speed = 2.0
//! patrol_distance = 5.0
//! detection_range = 5.0
//! ```

use bevy_ecs::prelude::*;
use configparser::ini::Ini;
use log::info;
use std::path::PathBuf;

/// Default safe values for startup
const DEFAULT_WINDOW_WIDTH: u32 = 960;
const DEFAULT_WINDOW_HEIGHT: u32 = 540;
const DEFAULT_TARGET_FPS: u32 = 60;
const DEFAULT_GRAVITY: f32 = 30.0;
const DEFAULT_FIXED_DT: f32 = 0.02;
const DEFAULT_PLAYER_SPEED: f32 = 5.0;
const DEFAULT_JUMP_FORCE: f32 = 15.0;
const DEFAULT_GOBLIN_SPEED: f32 = 2.0;
const DEFAULT_PATROL_DISTANCE: f32 = 5.0;
const DEFAULT_DETECTION_RANGE: f32 = 5.0;
pub const DEFAULT_CONFIG_PATH: &str = "./config.ini";

/// Game configuration resource.
#[derive(Resource, Debug, Clone, PartialEq)]
pub struct GameConfig {
    /// Window width in pixels.
    pub window_width: u32,
    /// Window height in pixels.
    pub window_height: u32,
    /// Target frames per second.
    pub target_fps: u32,
    /// Downward acceleration applied to dynamic bodies.
    pub gravity: f32,
    /// Length of one physics step in seconds.
    pub fixed_dt: f32,
    pub player_move_speed: f32,
    pub player_jump_force: f32,
    pub goblin_move_speed: f32,
    pub goblin_patrol_distance: f32,
    pub goblin_detection_range: f32,
    /// Path to the configuration file.
    pub config_path: PathBuf,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl GameConfig {
    /// Create a new configuration with safe default values.
    pub fn new() -> Self {
        Self {
            window_width: DEFAULT_WINDOW_WIDTH,
            window_height: DEFAULT_WINDOW_HEIGHT,
            target_fps: DEFAULT_TARGET_FPS,
            gravity: DEFAULT_GRAVITY,
            fixed_dt: DEFAULT_FIXED_DT,
            player_move_speed: DEFAULT_PLAYER_SPEED,
            player_jump_force: DEFAULT_JUMP_FORCE,
            goblin_move_speed: DEFAULT_GOBLIN_SPEED,
            goblin_patrol_distance: DEFAULT_PATROL_DISTANCE,
            goblin_detection_range: DEFAULT_DETECTION_RANGE,
            config_path: PathBuf::from(DEFAULT_CONFIG_PATH),
        }
    }

    /// Create a new configuration with a custom config file path.
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self {
            config_path: path.into(),
            ..Self::new()
        }
    }

    /// Load configuration from the INI file.
    ///
    /// Missing values retain their current (default) values.
    /// Returns an error if the file cannot be read or parsed.
    pub fn load_from_file(&mut self) -> Result<(), String> {
        let mut config = Ini::new();
        config
            .load(&self.config_path)
            .map_err(|e| format!("Failed to load config file: {}", e))?;
        self.apply_ini(&config);

        info!(
            "Loaded config: {}x{} window, fps={}, gravity={}, fixed_dt={}, player speed={} jump={}, goblin speed={} patrol={} range={}",
            self.window_width,
            self.window_height,
            self.target_fps,
            self.gravity,
            self.fixed_dt,
            self.player_move_speed,
            self.player_jump_force,
            self.goblin_move_speed,
            self.goblin_patrol_distance,
            self.goblin_detection_range
        );

        Ok(())
    }

    /// Load configuration from INI text instead of a file.
    pub fn load_from_str(&mut self, text: &str) -> Result<(), String> {
        let mut config = Ini::new();
        config
            .read(text.to_string())
            .map_err(|e| format!("Failed to parse config: {}", e))?;
        self.apply_ini(&config);
        Ok(())
    }

    fn apply_ini(&mut self, config: &Ini) {
        let float = |section: &str, key: &str| {
            config
                .getfloat(section, key)
                .ok()
                .flatten()
                .map(|v| v as f32)
        };

        // [window] section
        if let Some(width) = config.getuint("window", "width").ok().flatten() {
            self.window_width = width as u32;
        }
        if let Some(height) = config.getuint("window", "height").ok().flatten() {
            self.window_height = height as u32;
        }
        if let Some(fps) = config.getuint("window", "target_fps").ok().flatten() {
            self.target_fps = fps as u32;
        }

        // [physics] section
        if let Some(gravity) = float("physics", "gravity") {
            self.gravity = gravity;
        }
        if let Some(dt) = float("physics", "fixed_dt").filter(|dt| *dt > 0.0) {
            self.fixed_dt = dt;
        }

        // [player] section
        if let Some(speed) = float("player", "move_speed") {
            self.player_move_speed = speed;
        }
        if let Some(force) = float("player", "jump_force") {
            self.player_jump_force = force;
        }

        // [goblin] section
        if let Some(speed) = float("goblin", "move_speed") {
            self.goblin_move_speed = speed;
        }
        if let Some(distance) = float("goblin", "patrol_distance") {
            self.goblin_patrol_distance = distance;
        }
        if let Some(range) = float("goblin", "detection_range") {
            self.goblin_detection_range = range;
        }
    }

    /// Get the window size.
    pub fn window_size(&self) -> (u32, u32) {
        (self.window_width, self.window_height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_keys_keep_defaults() {
        let mut config = GameConfig::new();
        config
            .load_from_str("[goblin]\npatrol_distance = 3.5\n")
            .unwrap();
        assert_eq!(config.goblin_patrol_distance, 3.5);
        assert_eq!(config.goblin_move_speed, DEFAULT_GOBLIN_SPEED);
        assert_eq!(config.window_size(), (DEFAULT_WINDOW_WIDTH, DEFAULT_WINDOW_HEIGHT));
    }

    #[test]
    fn all_sections_are_read() {
        let text = "\
[window]
width = 800
height = 600
target_fps = 30
[physics]
gravity = 20
fixed_dt = 0.01
[player]
move_speed = 6
jump_force = 12
[goblin]
move_speed = 1.5
patrol_distance = 4
detection_range = 7
";
        let mut config = GameConfig::new();
        config.load_from_str(text).unwrap();
        assert_eq!(config.window_size(), (800, 600));
        assert_eq!(config.target_fps, 30);
        assert_eq!(config.gravity, 20.0);
        assert_eq!(config.fixed_dt, 0.01);
        assert_eq!(config.player_move_speed, 6.0);
        assert_eq!(config.player_jump_force, 12.0);
        assert_eq!(config.goblin_move_speed, 1.5);
        assert_eq!(config.goblin_patrol_distance, 4.0);
        assert_eq!(config.goblin_detection_range, 7.0);
    }

    #[test]
    fn non_positive_fixed_dt_is_ignored() {
        let mut config = GameConfig::new();
        config.load_from_str("[physics]\nfixed_dt = 0\n").unwrap();
        assert_eq!(config.fixed_dt, DEFAULT_FIXED_DT);
    }

    #[test]
    fn missing_file_is_an_error() {
        let mut config = GameConfig::with_path("./definitely/not/here.ini");
        assert!(config.load_from_file().is_err());
        assert_eq!(config.gravity, DEFAULT_GRAVITY);
    }
}
