//! HUD components and systems (score display, game-over label)

use bevy::prelude::*;

use crate::constants::*;
use crate::contacts::GameState;

/// Score text component
#[derive(Component)]
pub struct ScoreText;

/// Terminal game-over label, created once when the level ends
#[derive(Component)]
pub struct GameOverText;

/// Spawn the score label near the top-left corner
pub fn spawn_score_text(commands: &mut Commands) {
    commands.spawn((
        Text2d::new("Score: 0"),
        TextFont {
            font_size: 24.0,
            ..default()
        },
        TextLayout::new_with_justify(Justify::Left),
        TextColor(TEXT_PRIMARY),
        Transform::from_xyz(SCORE_TEXT_POS.x, SCORE_TEXT_POS.y, 1.0),
        ScoreText,
    ));
}

/// Spawn the static game-over label at the scene center
pub fn spawn_game_over_text(commands: &mut Commands) {
    commands.spawn((
        Text2d::new("Game over"),
        TextFont {
            font_size: 48.0,
            ..default()
        },
        TextLayout::new_with_justify(Justify::Center),
        TextColor(TEXT_PRIMARY),
        Transform::from_xyz(GAME_OVER_TEXT_POS.x, GAME_OVER_TEXT_POS.y, 1.0),
        GameOverText,
    ));
}

/// Finish sequence: the score label goes away and the terminal game-over
/// label replaces it. No retry UI; only the level reload keys rebuild.
pub fn finish_level(commands: &mut Commands, score_text: &Query<Entity, With<ScoreText>>) {
    for entity in score_text {
        commands.entity(entity).despawn();
    }
    spawn_game_over_text(commands);
}

/// Update the score display
pub fn update_score_text(
    state: Res<GameState>,
    mut text_query: Query<&mut Text2d, With<ScoreText>>,
) {
    let Ok(mut text) = text_query.single_mut() else {
        return;
    };

    text.0 = format!("Score: {}", state.score);
}
