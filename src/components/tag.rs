//! Gameplay tags and physics layers.
//!
//! [`Tag`] says *what* an entity is for gameplay dispatch (the collision
//! router matches on it). [`Layer`] says which sensor category its collider
//! belongs to; rays and overlap tests filter with a [`LayerMask`].

use bevy_ecs::prelude::Component;

/// Gameplay tag. Tags are mutually exclusive by construction.
#[derive(Component, Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Tag {
    Player,
    Coin,
    Trap,
    Enemy,
    Key,
}

impl Tag {
    pub fn name(&self) -> &'static str {
        match self {
            Tag::Player => "Player",
            Tag::Coin => "Coin",
            Tag::Trap => "Trap",
            Tag::Enemy => "Enemy",
            Tag::Key => "Key",
        }
    }
}

/// Physics layer of a collider.
#[derive(Component, Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Layer {
    Ground,
    Wall,
    Player,
}

impl Layer {
    fn bit(&self) -> u8 {
        match self {
            Layer::Ground => 1 << 0,
            Layer::Wall => 1 << 1,
            Layer::Player => 1 << 2,
        }
    }

    /// Ground and wall geometry block movement.
    pub fn is_solid(&self) -> bool {
        matches!(self, Layer::Ground | Layer::Wall)
    }
}

/// Set of layers a sensor query reports hits for.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct LayerMask(u8);

impl LayerMask {
    pub const GROUND: LayerMask = LayerMask(1 << 0);
    pub const WALL: LayerMask = LayerMask(1 << 1);
    pub const PLAYER: LayerMask = LayerMask(1 << 2);
    pub const SOLID: LayerMask = LayerMask((1 << 0) | (1 << 1));

    pub fn contains(&self, layer: Layer) -> bool {
        self.0 & layer.bit() != 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mask_constants_match_layers() {
        assert!(LayerMask::GROUND.contains(Layer::Ground));
        assert!(!LayerMask::GROUND.contains(Layer::Wall));
        assert!(LayerMask::SOLID.contains(Layer::Wall));
        assert!(!LayerMask::SOLID.contains(Layer::Player));
        assert!(LayerMask::PLAYER.contains(Layer::Player));
        assert!(!LayerMask::PLAYER.contains(Layer::Ground));
    }

    #[test]
    fn tag_names_follow_taxonomy() {
        let names: Vec<&str> = [Tag::Player, Tag::Coin, Tag::Trap, Tag::Enemy, Tag::Key]
            .iter()
            .map(|t| t.name())
            .collect();
        assert_eq!(names, vec!["Player", "Coin", "Trap", "Enemy", "Key"]);
        assert!(Layer::Ground.is_solid());
        assert!(!Layer::Player.is_solid());
    }
}
