//! Contact resolution state machine
//!
//! The only stateful part of the game. Contacts between the player and a
//! tagged tile drive transitions over `GameState`; wall contacts are purely
//! physical and never arrive here (walls keep a zero contact-test mask).

use bevy::prelude::*;

use crate::contacts::death::DeathAnimation;
use crate::contacts::detection::ContactEvents;
use crate::ui::{ScoreText, finish_level};
use crate::world::TileKind;

/// Level lifecycle phase
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum Phase {
    #[default]
    Playing,
    PlayerDying,
    LevelFinished,
}

/// Session-owned game state. No ambient globals; every mutation goes
/// through `resolve_contact` or the death-animation completion.
#[derive(Resource, Default)]
pub struct GameState {
    pub score: i32,
    pub phase: Phase,
}

impl GameState {
    /// True once the level has ended (win or loss) - the terminal phase
    pub fn is_game_over(&self) -> bool {
        self.phase == Phase::LevelFinished
    }
}

/// Run condition: gameplay systems stop once the level is finished
pub fn game_active(state: Res<GameState>) -> bool {
    state.phase != Phase::LevelFinished
}

/// What the caller must do to the world after a transition
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Outcome {
    /// Despawn the touched star
    RemoveStar,
    /// Freeze the player and start the death animation. The respawn decision
    /// is made here, at contact time, and never re-evaluated afterwards.
    StartDeath { respawn: bool },
    /// Freeze the game and run the finish sequence
    FinishLevel,
    /// Contact arrived outside the Playing phase; nothing happens
    Ignored,
}

/// Apply one player/tile contact to the game state.
///
/// Scoring boundary: after a vortex hit the player respawns iff the
/// decremented score is still >= 0. The losing condition is strictly
/// score < 0 - a score of exactly 0 survives.
pub fn resolve_contact(state: &mut GameState, kind: TileKind) -> Outcome {
    if state.phase != Phase::Playing {
        return Outcome::Ignored;
    }

    match kind {
        TileKind::Star => {
            state.score += 1;
            Outcome::RemoveStar
        }
        TileKind::Vortex => {
            state.score -= 1;
            state.phase = Phase::PlayerDying;
            Outcome::StartDeath {
                respawn: state.score >= 0,
            }
        }
        TileKind::Finish => {
            state.phase = Phase::LevelFinished;
            Outcome::FinishLevel
        }
        // Walls never reach the resolver; Empty is never placed
        TileKind::Wall | TileKind::Empty => Outcome::Ignored,
    }
}

/// Drain the contact queue and apply each resolution to the world
pub fn resolve_contacts(
    mut commands: Commands,
    mut events: ResMut<ContactEvents>,
    mut state: ResMut<GameState>,
    score_text: Query<Entity, With<ScoreText>>,
) {
    for pair in events.drain() {
        let Some((player, tile, kind)) = pair.player_and_tile() else {
            continue;
        };

        match resolve_contact(&mut state, kind) {
            Outcome::RemoveStar => {
                commands.entity(tile.entity).despawn();
            }
            Outcome::StartDeath { respawn } => {
                commands
                    .entity(player.entity)
                    .insert(DeathAnimation::new(player.position, tile.position, respawn));
            }
            Outcome::FinishLevel => {
                finish_level(&mut commands, &score_text);
            }
            Outcome::Ignored => {}
        }
    }
}
