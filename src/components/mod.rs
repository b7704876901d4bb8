//! ECS components for entities.
//!
//! Submodules overview:
//! - [`animation`] – selected animation track and a rule-based controller
//! - [`boxcollider`] – axis-aligned collider with ray and circle queries
//! - [`disabled`] – marker for agents that failed initialization
//! - [`dynamictext`] – text component for rendering variable strings
//! - [`goblin`] – patrol/chase enemy agent state
//! - [`mapposition`] – world-space position (pivot) for an entity
//! - [`panel`] – game-over / win overlays
//! - [`player`] – player agent parameters and ground state
//! - [`rigidbody`] – simple kinematic body storing velocity and forces
//! - [`signalbinding`] – binds text to world or entity signals
//! - [`signals`] – per-entity signal storage for cross-system communication
//! - [`sprite`] – 2D sprite; its horizontal flip encodes facing
//! - [`tag`] – gameplay tags, physics layers and layer masks

pub mod animation;
pub mod boxcollider;
pub mod disabled;
pub mod dynamictext;
pub mod goblin;
pub mod mapposition;
pub mod panel;
pub mod player;
pub mod rigidbody;
pub mod signalbinding;
pub mod signals;
pub mod sprite;
pub mod tag;
