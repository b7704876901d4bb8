//! ECS resources made available to systems.
//!
//! Overview
//! - `audio` – injected playback sink and its bridge resource
//! - `gameconfig` – tunables loaded from an INI file
//! - `gamestate` – score and end-of-playthrough flags
//! - `input` – per-frame action state with press/release edges
//! - `level` – JSON grid layout the game scene is built from
//! - `scene` – loaded scene and pending scene requests
//! - `systemsstore` – registry of scene enter systems by name
//! - `worldsignals` – global signals read by the display bindings
//! - `worldtime` – simulation time, delta and the global time scale
pub mod audio;
pub mod gameconfig;
pub mod gamestate;
pub mod input;
pub mod level;
pub mod scene;
pub mod systemsstore;
pub mod worldsignals;
pub mod worldtime;
