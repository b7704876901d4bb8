//! Game systems.
//!
//! This module groups all ECS systems that advance the simulation, drive the
//! agents and refresh the display.
//!
//! Submodules overview
//! - [`animation`] – select animation tracks via rules over entity signals
//! - [`audio`] – advance the audio command queue and hand commands to the sink
//! - [`collision`] – overlap detection and the player's collision router
//! - [`gamestate`] – score, game over/win, restart and menu transitions
//! - [`goblin`] – goblin initialization, detection, patrol/chase motion
//! - [`level`] – spawn entities from a level grid
//! - [`movement`] – integrate rigid bodies and resolve them against solids
//! - [`player`] – player initialization and input-driven control
//! - [`render`] – raylib keyboard sampling and drawing (`window` feature)
//! - [`scene`] – pending scene check and scene run conditions
//! - [`sensors`] – raycast and circle overlap queries over layered colliders
//! - [`signalbinding`] – update texts and panels from signal values
//! - [`time`] – update simulation time and delta

pub mod animation;
pub mod audio;
pub mod collision;
pub mod gamestate;
pub mod goblin;
pub mod level;
pub mod movement;
pub mod player;
#[cfg(feature = "window")]
pub mod render;
pub mod scene;
pub mod sensors;
pub mod signalbinding;
pub mod time;
