//! Input module - pointer capture and the gravity controller
//!
//! Gravity is steered by device tilt when a platform layer feeds the
//! `TiltSensor` resource, and by pointer position otherwise (the
//! editor/simulator fallback). With no input at all the gravity vector keeps
//! its last value - it is never reset to zero mid-run.

use bevy::prelude::*;

use crate::constants::*;
use crate::contacts::{GameState, Phase};
use crate::player::Player;

/// World gravity vector consumed by the physics systems
#[derive(Resource, Default)]
pub struct Gravity(pub Vec2);

/// World-space position of the active pointer (touch or held mouse button),
/// None when nothing is pressed
#[derive(Resource, Default)]
pub struct PointerTarget(pub Option<Vec2>);

/// Accelerometer-style tilt reading, fed by a platform integration.
/// Stays None on desktop builds; the pointer fallback steers instead.
#[derive(Resource, Default)]
pub struct TiltSensor(pub Option<Vec2>);

/// Steering-by-target gravity: pull toward the pointer, scaled down
pub fn pointer_gravity(target: Vec2, player: Vec2) -> Vec2 {
    (target - player) / POINTER_GRAVITY_DIVISOR
}

/// Map device tilt to screen-space gravity: axis swap plus sign flip
pub fn tilt_gravity(accel: Vec2) -> Vec2 {
    Vec2::new(accel.y * -TILT_GRAVITY_SCALE, accel.x * TILT_GRAVITY_SCALE)
}

/// Resolve the active touch or held mouse cursor to world coordinates
pub fn capture_pointer(
    mouse: Res<ButtonInput<MouseButton>>,
    touches: Res<Touches>,
    windows: Query<&Window>,
    camera: Query<(&Camera, &GlobalTransform)>,
    mut pointer: ResMut<PointerTarget>,
) {
    let Ok((camera, camera_transform)) = camera.single() else {
        return;
    };

    // Touch wins over mouse when both are present
    let screen_pos = if let Some(touch) = touches.iter().next() {
        Some(touch.position())
    } else if mouse.pressed(MouseButton::Left) {
        windows.single().ok().and_then(|w| w.cursor_position())
    } else {
        None
    };

    pointer.0 =
        screen_pos.and_then(|pos| camera.viewport_to_world_2d(camera_transform, pos).ok());
}

/// Gravity controller: one pure computation per tick, no blocking.
/// Skipped entirely once the level has finished.
pub fn update_gravity(
    state: Res<GameState>,
    tilt: Res<TiltSensor>,
    pointer: Res<PointerTarget>,
    players: Query<&Transform, With<Player>>,
    mut gravity: ResMut<Gravity>,
) {
    if state.phase == Phase::LevelFinished {
        return;
    }

    if let Some(accel) = tilt.0 {
        gravity.0 = tilt_gravity(accel);
        return;
    }

    if let Some(target) = pointer.0
        && let Ok(player_transform) = players.single()
    {
        gravity.0 = pointer_gravity(target, player_transform.translation.truncate());
    }
    // No pointer: gravity keeps its last value
}
