//! Tunable constants for marblemaze
//!
//! All gameplay values are defined here for easy tweaking.

use bevy::prelude::*;

// =============================================================================
// SCENE DIMENSIONS
// =============================================================================

pub const SCENE_WIDTH: f32 = 1024.0;
pub const SCENE_HEIGHT: f32 = 768.0;
pub const SCENE_CENTER: Vec2 = Vec2::new(SCENE_WIDTH / 2.0, SCENE_HEIGHT / 2.0);

// =============================================================================
// TILE GRID
// =============================================================================

pub const TILE_SIZE: f32 = 64.0; // Tile pitch of the level grid
pub const HALF_TILE: f32 = 32.0; // Centering offset within a tile

// =============================================================================
// COLLISION CATEGORIES (power-of-two bits, OR-combinable)
// =============================================================================

pub const CATEGORY_PLAYER: u32 = 1;
pub const CATEGORY_WALL: u32 = 2;
pub const CATEGORY_STAR: u32 = 4;
pub const CATEGORY_VORTEX: u32 = 8;
pub const CATEGORY_FINISH: u32 = 16;
pub const CATEGORY_ALL: u32 = u32::MAX;

// =============================================================================
// PHYSICS CONSTANTS
// =============================================================================

pub const PLAYER_RADIUS: f32 = 32.0; // Marble collision radius
pub const TILE_RADIUS: f32 = 32.0; // Contact radius of star/vortex/finish bodies
pub const GRAVITY_PIXELS_PER_UNIT: f32 = 150.0; // World-pixel acceleration per gravity unit
pub const PLAYER_DAMPING: f32 = 0.6; // Velocity retained after 1 second of coasting
pub const WALL_RESTITUTION: f32 = 0.2; // Bounce kept when hitting a wall (0 = dead stop)
pub const COLLISION_EPSILON: f32 = 1e-4; // Below this separation, push out along the dominant axis

// =============================================================================
// GRAVITY CONTROLLER
// =============================================================================

pub const POINTER_GRAVITY_DIVISOR: f32 = 100.0; // Steering: (pointer - player) / this
pub const TILT_GRAVITY_SCALE: f32 = 50.0; // Accelerometer tilt to gravity units

// =============================================================================
// PLAYER LIFECYCLE
// =============================================================================

pub const PLAYER_SPAWN: Vec2 = Vec2::new(96.0, 672.0);
pub const DEATH_MOVE_DURATION: f32 = 0.25; // Seconds sliding into the vortex
pub const DEATH_SHRINK_DURATION: f32 = 0.25; // Seconds shrinking before removal
pub const DEATH_FINAL_SCALE: f32 = 0.0001; // Near-zero scale at the end of the shrink

// =============================================================================
// VORTEX ANIMATION
// =============================================================================

pub const VORTEX_SPIN_RATE: f32 = std::f32::consts::PI; // Radians per second, perpetual

// =============================================================================
// COLORS
// =============================================================================

pub const BACKGROUND_COLOR: Color = Color::srgb(0.1, 0.12, 0.18);
pub const WALL_COLOR: Color = Color::srgb(0.35, 0.3, 0.25);
pub const PLAYER_COLOR: Color = Color::srgb(0.85, 0.85, 0.9); // Marble silver
pub const STAR_COLOR: Color = Color::srgb(0.95, 0.8, 0.2); // Gold
pub const VORTEX_COLOR: Color = Color::srgb(0.55, 0.2, 0.75); // Purple hazard
pub const FINISH_COLOR: Color = Color::srgb(0.2, 0.75, 0.35); // Goal green

pub const TEXT_PRIMARY: Color = Color::srgb(0.95, 0.9, 0.8); // Bone white/cream

// =============================================================================
// SPRITE SIZES
// =============================================================================

pub const WALL_SPRITE_SIZE: Vec2 = Vec2::new(TILE_SIZE, TILE_SIZE);
pub const PLAYER_SPRITE_SIZE: Vec2 = Vec2::new(PLAYER_RADIUS * 2.0, PLAYER_RADIUS * 2.0);
pub const TILE_SPRITE_SIZE: Vec2 = Vec2::new(TILE_RADIUS * 2.0, TILE_RADIUS * 2.0);

// =============================================================================
// HUD
// =============================================================================

pub const SCORE_TEXT_POS: Vec2 = Vec2::new(110.0, SCENE_HEIGHT - 30.0);
pub const GAME_OVER_TEXT_POS: Vec2 = SCENE_CENTER;

// =============================================================================
// ASSET PATHS
// =============================================================================

pub const LEVELS_DIR: &str = "assets";
