//! Marblemaze - a tilt-controlled marble maze built with Bevy
//!
//! This crate provides all game components, resources, and systems organized
//! into modules. A scene is built from an ASCII level map; the player marble
//! is steered by device tilt (or a pointer fallback) through walls, stars,
//! vortexes, and a finish flag.

// Core modules
pub mod constants;
pub mod settings;
pub mod simulation;

// Game logic modules
pub mod contacts;
pub mod input;
pub mod levels;
pub mod player;
pub mod ui;
pub mod world;

// Re-export commonly used types for convenience
pub use constants::*;
pub use contacts::{
    BodyKind, ContactBody, ContactEvents, ContactPair, DeathAnimation, DeathStep, GameState,
    Outcome, Phase, animate_player_death, circles_touch, detect_contacts, game_active,
    resolve_contact, resolve_contacts,
};
pub use input::{
    Gravity, PointerTarget, TiltSensor, capture_pointer, pointer_gravity, tilt_gravity,
    update_gravity,
};
pub use levels::{
    CurrentLevel, Level, LevelDatabase, LevelError, Placement, reload_level, spawn_background,
    spawn_finish, spawn_level, spawn_player, spawn_star, spawn_vortex, spawn_wall, tile_position,
};
pub use player::{Player, Velocity, apply_gravity, apply_velocity, collide_with_walls};
pub use settings::{CurrentSettings, InitSettings, save_settings_system};
pub use simulation::HeadlessAppBuilder;
pub use ui::{
    GameOverText, ScoreText, finish_level, spawn_game_over_text, spawn_score_text,
    update_score_text,
};
pub use world::{
    CollisionProfile, LevelTile, Rotating, Tile, TileKind, Wall, rotate_vortices,
};
