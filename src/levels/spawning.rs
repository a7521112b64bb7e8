//! Entity factory - turns placements into sprite/physics entities

use bevy::prelude::*;

use crate::constants::*;
use crate::levels::database::Level;
use crate::player::{Player, Velocity};
use crate::world::{CollisionProfile, LevelTile, Rotating, Tile, TileKind, Wall};

/// Spawn a wall tile. Physical collision only; never notifies.
pub fn spawn_wall(commands: &mut Commands, position: Vec2) {
    commands.spawn((
        Sprite::from_color(WALL_COLOR, WALL_SPRITE_SIZE),
        Transform::from_xyz(position.x, position.y, 0.0),
        Tile(TileKind::Wall),
        CollisionProfile::for_tile(TileKind::Wall),
        Wall,
        LevelTile,
    ));
}

/// Spawn a vortex hazard. Spins forever; kills the player on contact.
pub fn spawn_vortex(commands: &mut Commands, position: Vec2) {
    commands.spawn((
        Sprite::from_color(VORTEX_COLOR, TILE_SPRITE_SIZE),
        Transform::from_xyz(position.x, position.y, 0.0),
        Tile(TileKind::Vortex),
        CollisionProfile::for_tile(TileKind::Vortex),
        Rotating(VORTEX_SPIN_RATE),
        LevelTile,
    ));
}

/// Spawn a collectible star
pub fn spawn_star(commands: &mut Commands, position: Vec2) {
    commands.spawn((
        Sprite::from_color(STAR_COLOR, TILE_SPRITE_SIZE),
        Transform::from_xyz(position.x, position.y, 0.0),
        Tile(TileKind::Star),
        CollisionProfile::for_tile(TileKind::Star),
        LevelTile,
    ));
}

/// Spawn the finish flag
pub fn spawn_finish(commands: &mut Commands, position: Vec2) {
    commands.spawn((
        Sprite::from_color(FINISH_COLOR, TILE_SPRITE_SIZE),
        Transform::from_xyz(position.x, position.y, 0.0),
        Tile(TileKind::Finish),
        CollisionProfile::for_tile(TileKind::Finish),
        LevelTile,
    ));
}

/// Spawn the full-screen backdrop at the scene center, behind everything.
/// Survives level reloads.
pub fn spawn_background(commands: &mut Commands) {
    commands.spawn((
        Sprite::from_color(BACKGROUND_COLOR, Vec2::new(SCENE_WIDTH, SCENE_HEIGHT)),
        Transform::from_xyz(SCENE_CENTER.x, SCENE_CENTER.y, -1.0),
    ));
}

/// Spawn the player marble at the spawn point.
/// The only dynamic body in the scene.
pub fn spawn_player(commands: &mut Commands) -> Entity {
    commands
        .spawn((
            Sprite::from_color(PLAYER_COLOR, PLAYER_SPRITE_SIZE),
            Transform::from_xyz(PLAYER_SPAWN.x, PLAYER_SPAWN.y, 1.0),
            Player,
            Velocity::default(),
            CollisionProfile::player(),
        ))
        .id()
}

/// Spawn every placement of a parsed level
pub fn spawn_level(commands: &mut Commands, level: &Level) {
    for placement in &level.placements {
        match placement.kind {
            TileKind::Wall => spawn_wall(commands, placement.position),
            TileKind::Vortex => spawn_vortex(commands, placement.position),
            TileKind::Star => spawn_star(commands, placement.position),
            TileKind::Finish => spawn_finish(commands, placement.position),
            // The parser never emits Empty placements
            TileKind::Empty => {}
        }
    }
}
