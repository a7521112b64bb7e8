//! Player-related components

use bevy::prelude::*;

/// Marker for the player marble
#[derive(Component)]
pub struct Player;

/// 2D velocity vector
#[derive(Component, Default)]
pub struct Velocity(pub Vec2);
