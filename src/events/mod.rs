//! Event types and observers used by the game.
//!
//! Submodules:
//! - [`audio`] – fire-and-forget sound commands
//! - [`collision`] – overlap notifications emitted by the collision detector
//! - [`scene`] – scene change notification and the observer that applies it
pub mod audio;
pub mod collision;
pub mod scene;
