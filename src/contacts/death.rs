//! Vortex death animation and respawn handling
//!
//! The animation is an explicit timer component polled each frame, not a
//! scheduled callback. The respawn-vs-finish decision is captured at contact
//! time inside the component; the completion handler only reads it back, so
//! nothing that happens during the animation window can change the branch.

use bevy::prelude::*;

use crate::constants::*;
use crate::contacts::resolver::{GameState, Phase};
use crate::levels::spawn_player;
use crate::ui::{ScoreText, finish_level};

/// Attached to the player on vortex contact. While present, the player is
/// physically frozen: every physics and detection system skips it.
#[derive(Component, Clone, Copy, Debug)]
pub struct DeathAnimation {
    pub elapsed: f32,
    pub start: Vec2,
    pub vortex: Vec2,
    /// Decided at contact time from the post-decrement score; immutable
    pub respawn: bool,
}

/// Where the animation is at a given elapsed time
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum DeathStep {
    /// Sliding toward the vortex center
    Moving(Vec2),
    /// Shrinking in place; carries the current scale
    Shrinking(f32),
    /// Animation over - remove the shrunk player
    Complete,
}

impl DeathAnimation {
    pub fn new(start: Vec2, vortex: Vec2, respawn: bool) -> Self {
        Self {
            elapsed: 0.0,
            start,
            vortex,
            respawn,
        }
    }

    /// Sample the animation at the current elapsed time
    pub fn step(&self) -> DeathStep {
        if self.elapsed < DEATH_MOVE_DURATION {
            let t = self.elapsed / DEATH_MOVE_DURATION;
            DeathStep::Moving(self.start.lerp(self.vortex, t))
        } else if self.elapsed < DEATH_MOVE_DURATION + DEATH_SHRINK_DURATION {
            let t = (self.elapsed - DEATH_MOVE_DURATION) / DEATH_SHRINK_DURATION;
            DeathStep::Shrinking(1.0 + (DEATH_FINAL_SCALE - 1.0) * t)
        } else {
            DeathStep::Complete
        }
    }
}

/// Advance death animations; on completion either respawn a fresh player at
/// the spawn point or run the finish sequence, per the stored decision.
pub fn animate_player_death(
    mut commands: Commands,
    time: Res<Time>,
    mut state: ResMut<GameState>,
    mut dying: Query<(Entity, &mut Transform, &mut DeathAnimation)>,
    score_text: Query<Entity, With<ScoreText>>,
) {
    for (entity, mut transform, mut anim) in &mut dying {
        anim.elapsed += time.delta_secs();

        match anim.step() {
            DeathStep::Moving(pos) => {
                transform.translation.x = pos.x;
                transform.translation.y = pos.y;
            }
            DeathStep::Shrinking(scale) => {
                transform.translation.x = anim.vortex.x;
                transform.translation.y = anim.vortex.y;
                transform.scale = Vec3::new(scale, scale, 1.0);
            }
            DeathStep::Complete => {
                commands.entity(entity).despawn();
                if anim.respawn {
                    spawn_player(&mut commands);
                    state.phase = Phase::Playing;
                } else {
                    finish_level(&mut commands, &score_text);
                    state.phase = Phase::LevelFinished;
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn moves_then_shrinks_then_completes() {
        let mut anim = DeathAnimation::new(Vec2::new(96.0, 672.0), Vec2::new(224.0, 672.0), true);

        anim.elapsed = 0.125; // Halfway through the move
        assert_eq!(anim.step(), DeathStep::Moving(Vec2::new(160.0, 672.0)));

        anim.elapsed = 0.375; // Halfway through the shrink
        match anim.step() {
            DeathStep::Shrinking(scale) => assert!((scale - 0.5).abs() < 1e-3),
            other => panic!("expected Shrinking, got {other:?}"),
        }

        anim.elapsed = 0.5;
        assert_eq!(anim.step(), DeathStep::Complete);
    }

    #[test]
    fn respawn_decision_is_fixed_at_contact() {
        // The component stores the branch; advancing time never rewrites it
        let mut anim = DeathAnimation::new(Vec2::ZERO, Vec2::ONE, false);
        anim.elapsed = 10.0;
        assert!(!anim.respawn);
        assert_eq!(anim.step(), DeathStep::Complete);
    }
}
