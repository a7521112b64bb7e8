//! Player physics systems - gravity, integration, wall response
//!
//! Only the player marble is dynamic. A marble carrying a `DeathAnimation`
//! is physically frozen and skipped by every system here.

use bevy::prelude::*;

use crate::constants::*;
use crate::contacts::DeathAnimation;
use crate::input::Gravity;
use crate::player::components::*;
use crate::world::{CollisionProfile, Wall};

/// Accelerate the marble along the current gravity vector
pub fn apply_gravity(
    gravity: Res<Gravity>,
    mut query: Query<&mut Velocity, (With<Player>, Without<DeathAnimation>)>,
    time: Res<Time>,
) {
    for mut velocity in &mut query {
        velocity.0 += gravity.0 * GRAVITY_PIXELS_PER_UNIT * time.delta_secs();
    }
}

/// Integrate velocity into position, with per-second damping
pub fn apply_velocity(
    mut query: Query<(&mut Transform, &mut Velocity), (With<Player>, Without<DeathAnimation>)>,
    time: Res<Time>,
) {
    let dt = time.delta_secs();
    for (mut transform, mut velocity) in &mut query {
        velocity.0 *= PLAYER_DAMPING.powf(dt);
        transform.translation.x += velocity.0.x * dt;
        transform.translation.y += velocity.0.y * dt;
    }
}

/// Push the marble out of wall tiles and reflect its velocity.
///
/// Circle-vs-rect: find the closest point on the wall box to the marble
/// center, push out along that normal, and remove the inward velocity
/// component (keeping a small bounce).
pub fn collide_with_walls(
    mut players: Query<
        (&mut Transform, &mut Velocity, &CollisionProfile),
        (With<Player>, Without<DeathAnimation>),
    >,
    walls: Query<(&Transform, &CollisionProfile), (With<Wall>, Without<Player>)>,
) {
    for (mut player_transform, mut player_velocity, player_profile) in &mut players {
        for (wall_transform, wall_profile) in &walls {
            if player_profile.collision & wall_profile.category == 0 {
                continue;
            }

            let player_pos = player_transform.translation.truncate();
            let wall_pos = wall_transform.translation.truncate();
            let half = WALL_SPRITE_SIZE / 2.0;

            let offset = player_pos - wall_pos;
            let closest = wall_pos + offset.clamp(-half, half);
            let delta = player_pos - closest;
            let dist_sq = delta.length_squared();

            if dist_sq >= PLAYER_RADIUS * PLAYER_RADIUS {
                continue;
            }

            let dist = dist_sq.sqrt();
            let (normal, penetration) = if dist > COLLISION_EPSILON {
                (delta / dist, PLAYER_RADIUS - dist)
            } else {
                // Center inside the box: push out along the dominant axis
                let normal = if offset.x.abs() > offset.y.abs() {
                    Vec2::new(offset.x.signum(), 0.0)
                } else {
                    Vec2::new(0.0, offset.y.signum())
                };
                (normal, PLAYER_RADIUS)
            };

            player_transform.translation.x += normal.x * penetration;
            player_transform.translation.y += normal.y * penetration;

            let inward = player_velocity.0.dot(normal);
            if inward < 0.0 {
                player_velocity.0 -= (1.0 + WALL_RESTITUTION) * inward * normal;
            }
        }
    }
}
