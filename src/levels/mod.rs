//! Levels module - database, spawning, and session reload

mod database;
mod spawning;

pub use database::*;
pub use spawning::*;

use bevy::prelude::*;

use crate::contacts::GameState;
use crate::input::Gravity;
use crate::player::Player;
use crate::settings::CurrentSettings;
use crate::ui::{GameOverText, ScoreText, spawn_score_text};
use crate::world::LevelTile;

/// Restart the current level (R) or cycle levels (`[` / `]`).
///
/// Tears the whole scene down and rebuilds it with a fresh `GameState` -
/// a new session, not a transition inside the per-level state machine.
#[allow(clippy::too_many_arguments)]
pub fn reload_level(
    keyboard: Res<ButtonInput<KeyCode>>,
    mut commands: Commands,
    level_db: Res<LevelDatabase>,
    mut current_level: ResMut<CurrentLevel>,
    mut state: ResMut<GameState>,
    mut gravity: ResMut<Gravity>,
    mut settings: ResMut<CurrentSettings>,
    level_tiles: Query<Entity, With<LevelTile>>,
    players: Query<Entity, With<Player>>,
    score_text: Query<Entity, With<ScoreText>>,
    game_over_text: Query<Entity, With<GameOverText>>,
) {
    let restart_pressed = keyboard.just_pressed(KeyCode::KeyR);
    let next_pressed = keyboard.just_pressed(KeyCode::BracketRight);
    let prev_pressed = keyboard.just_pressed(KeyCode::BracketLeft);

    if !restart_pressed && !next_pressed && !prev_pressed {
        return;
    }

    let num_levels = level_db.len() as u32;
    if next_pressed {
        current_level.0 = (current_level.0 % num_levels) + 1;
    } else if prev_pressed {
        current_level.0 = if current_level.0 <= 1 {
            num_levels
        } else {
            current_level.0 - 1
        };
    }

    if next_pressed || prev_pressed {
        settings.settings.level = current_level.0;
        settings.mark_dirty();
    }

    // Tear down the old scene
    for entity in &level_tiles {
        commands.entity(entity).despawn();
    }
    for entity in &players {
        commands.entity(entity).despawn();
    }
    for entity in &score_text {
        commands.entity(entity).despawn();
    }
    for entity in &game_over_text {
        commands.entity(entity).despawn();
    }

    // Fresh session state
    *state = GameState::default();
    gravity.0 = Vec2::ZERO;

    let level_index = (current_level.0 - 1) as usize;
    let Some(level) = level_db.get(level_index) else {
        warn!("Level {} not found, nothing spawned", current_level.0);
        return;
    };

    info!("Loading level {} ({})", current_level.0, level.name);
    spawn_level(&mut commands, level);
    spawn_player(&mut commands);
    spawn_score_text(&mut commands);
}
