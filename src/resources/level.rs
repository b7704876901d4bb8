//! Level layout data.
//!
//! A level is an ASCII grid with a legend, loaded from JSON:
//!
//! ```json
//! {
//!   "offset_x": 0.0,
//!   "offset_y": 0.0,
//!   "cell_size": 1.0,
//!   "grid": [
//!     "            k ",
//!     "  p  c  g   # ",
//!     "##############"
//!   ],
//!   "legend": { "#": "ground", "p": "player", "c": "coin", "g": "goblin", "k": "key" }
//! }
//! ```
//!
//! Row 0 is the top of the level; world space is y-up, so the last row sits
//! at `offset_y`. Characters missing from the legend (spaces) are empty.

use bevy_ecs::prelude::Resource;
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

/// Level shipped with the binary.
pub const DEFAULT_LEVEL_JSON: &str = include_str!("../../assets/levels/level1.json");

/// What a grid cell spawns.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum CellKind {
    Ground,
    Wall,
    Coin,
    Trap,
    Key,
    Goblin,
    Player,
}

#[derive(Resource, Serialize, Deserialize, Debug, Clone)]
pub struct LevelLayout {
    #[serde(default)]
    pub offset_x: f32,
    #[serde(default)]
    pub offset_y: f32,
    #[serde(default = "default_cell_size")]
    pub cell_size: f32,
    pub grid: Vec<String>,
    pub legend: FxHashMap<char, CellKind>,
}

fn default_cell_size() -> f32 {
    1.0
}

impl LevelLayout {
    /// Loads a level from a JSON file at the specified path.
    pub fn load_from_file(path: &str) -> Result<Self, Box<dyn std::error::Error>> {
        let file_content = std::fs::read_to_string(path)?;
        Self::from_json(&file_content)
    }

    pub fn from_json(text: &str) -> Result<Self, Box<dyn std::error::Error>> {
        let layout: LevelLayout = serde_json::from_str(text)?;
        if layout.cell_size <= 0.0 {
            return Err(format!("cell_size must be positive, got {}", layout.cell_size).into());
        }
        Ok(layout)
    }

    /// The embedded default level.
    pub fn default_level() -> Result<Self, Box<dyn std::error::Error>> {
        Self::from_json(DEFAULT_LEVEL_JSON)
    }

    /// Iterate over all defined cells with their world-space centers.
    pub fn iter_cells(&self) -> impl Iterator<Item = (f32, f32, CellKind)> + '_ {
        let rows = self.grid.len();
        self.grid.iter().enumerate().flat_map(move |(row, line)| {
            line.chars().enumerate().filter_map(move |(col, ch)| {
                self.legend.get(&ch).map(|kind| {
                    let x = self.offset_x + (col as f32 * self.cell_size) + (self.cell_size * 0.5);
                    let y = self.offset_y
                        + ((rows - 1 - row) as f32 * self.cell_size)
                        + (self.cell_size * 0.5);
                    (x, y, *kind)
                })
            })
        })
    }

    pub fn count(&self, kind: CellKind) -> usize {
        self.iter_cells().filter(|(_, _, k)| *k == kind).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SMALL: &str = r#"{
        "cell_size": 2.0,
        "grid": ["p c", "==="],
        "legend": { "=": "ground", "p": "player", "c": "coin" }
    }"#;

    #[test]
    fn cells_are_y_up_centers() {
        let level = LevelLayout::from_json(SMALL).unwrap();
        let cells: Vec<_> = level.iter_cells().collect();
        assert_eq!(cells.len(), 5);
        assert!(cells.contains(&(1.0, 3.0, CellKind::Player)));
        assert!(cells.contains(&(5.0, 3.0, CellKind::Coin)));
        assert!(cells.contains(&(3.0, 1.0, CellKind::Ground)));
        assert_eq!(level.count(CellKind::Ground), 3);
    }

    #[test]
    fn rejects_bad_cell_size() {
        let text = r#"{ "cell_size": 0.0, "grid": [], "legend": {} }"#;
        assert!(LevelLayout::from_json(text).is_err());
    }

    #[test]
    fn rejects_unknown_kind() {
        let text = r#"{ "grid": ["x"], "legend": { "x": "lava" } }"#;
        assert!(LevelLayout::from_json(text).is_err());
    }

    #[test]
    fn default_level_has_one_player_and_a_key() {
        let level = LevelLayout::default_level().unwrap();
        assert_eq!(level.count(CellKind::Player), 1);
        assert!(level.count(CellKind::Key) >= 1);
        assert!(level.count(CellKind::Goblin) >= 1);
        assert!(level.count(CellKind::Coin) >= 1);
    }
}
