//! End-to-end gameplay flow tests on a headless app
//!
//! Each `app.update()` is one simulation tick (the builder registers the
//! gameplay chain in `Update`). Tests teleport the marble onto a tile and
//! assert the resulting state transition.

use bevy::prelude::*;

use crate::contacts::{DeathAnimation, GameState, Phase};
use crate::input::{Gravity, PointerTarget, TiltSensor};
use crate::levels::{Level, tile_position};
use crate::player::Player;
use crate::simulation::HeadlessAppBuilder;
use crate::ui::GameOverText;
use crate::world::{Tile, TileKind};

/// 3x3 box with one tile of the given kind in the middle
fn boxed_level(center: char) -> Level {
    let text = format!("xxx\nx{center}x\nxxx");
    Level::parse("test", &text).unwrap()
}

fn player_entity(app: &mut App) -> Entity {
    app.world_mut()
        .query_filtered::<Entity, With<Player>>()
        .single(app.world())
        .unwrap()
}

/// Teleport the marble onto the center tile (column 1, row 1)
fn place_player_on_center(app: &mut App) {
    let player = player_entity(app);
    let pos = tile_position(1, 1);
    let mut entity_mut = app.world_mut().entity_mut(player);
    let mut transform = entity_mut.get_mut::<Transform>().unwrap();
    transform.translation.x = pos.x;
    transform.translation.y = pos.y;
}

fn count_tiles(app: &mut App, kind: TileKind) -> usize {
    app.world_mut()
        .query::<&Tile>()
        .iter(app.world())
        .filter(|t| t.0 == kind)
        .count()
}

#[test]
fn star_contact_scores_once_and_removes_the_star() {
    let mut app = HeadlessAppBuilder::new().with_level(boxed_level('s')).build();
    app.update();
    assert_eq!(count_tiles(&mut app, TileKind::Star), 1);

    place_player_on_center(&mut app);
    app.update();

    let state = app.world().resource::<GameState>();
    assert_eq!(state.score, 1);
    assert_eq!(state.phase, Phase::Playing);
    assert_eq!(count_tiles(&mut app, TileKind::Star), 0);

    // The removed star cannot be hit twice
    app.update();
    assert_eq!(app.world().resource::<GameState>().score, 1);
}

#[test]
fn vortex_contact_at_score_zero_ends_the_run() {
    let mut app = HeadlessAppBuilder::new().with_level(boxed_level('v')).build();
    app.update();

    place_player_on_center(&mut app);
    app.update();

    let state = app.world().resource::<GameState>();
    assert_eq!(state.score, -1);
    assert_eq!(state.phase, Phase::PlayerDying);

    let player = player_entity(&mut app);
    let anim = app.world().entity(player).get::<DeathAnimation>().unwrap();
    assert!(!anim.respawn);
}

#[test]
fn vortex_contact_with_banked_score_schedules_a_respawn() {
    let mut app = HeadlessAppBuilder::new().with_level(boxed_level('v')).build();
    app.update();
    app.world_mut().resource_mut::<GameState>().score = 1;

    place_player_on_center(&mut app);
    app.update();

    let state = app.world().resource::<GameState>();
    assert_eq!(state.score, 0);
    assert_eq!(state.phase, Phase::PlayerDying);

    let player = player_entity(&mut app);
    let anim = app.world().entity(player).get::<DeathAnimation>().unwrap();
    assert!(anim.respawn);
}

#[test]
fn completed_death_with_respawn_recreates_the_player_at_spawn() {
    use crate::constants::PLAYER_SPAWN;

    let mut app = HeadlessAppBuilder::new().with_level(boxed_level('v')).build();
    app.update();
    app.world_mut().resource_mut::<GameState>().score = 2;

    place_player_on_center(&mut app);
    app.update();
    assert_eq!(app.world().resource::<GameState>().phase, Phase::PlayerDying);

    // Fast-forward past the move+shrink window; the next tick completes
    let dying = player_entity(&mut app);
    app.world_mut()
        .entity_mut(dying)
        .get_mut::<DeathAnimation>()
        .unwrap()
        .elapsed = 1.0;
    app.update();

    assert_eq!(app.world().resource::<GameState>().phase, Phase::Playing);
    let fresh = player_entity(&mut app);
    assert_ne!(fresh, dying);
    let transform = app.world().entity(fresh).get::<Transform>().unwrap();
    assert_eq!(transform.translation.truncate(), PLAYER_SPAWN);
    assert!(app.world().entity(fresh).get::<DeathAnimation>().is_none());
}

#[test]
fn completed_fatal_death_finishes_the_level_without_a_player() {
    let mut app = HeadlessAppBuilder::new().with_level(boxed_level('v')).build();
    app.update();

    place_player_on_center(&mut app);
    app.update();

    let dying = player_entity(&mut app);
    app.world_mut()
        .entity_mut(dying)
        .get_mut::<DeathAnimation>()
        .unwrap()
        .elapsed = 1.0;
    app.update();

    assert_eq!(app.world().resource::<GameState>().phase, Phase::LevelFinished);
    let players = app
        .world_mut()
        .query::<&Player>()
        .iter(app.world())
        .count();
    assert_eq!(players, 0);

    let labels = app
        .world_mut()
        .query::<&GameOverText>()
        .iter(app.world())
        .count();
    assert_eq!(labels, 1);
}

#[test]
fn finish_contact_ends_the_level_and_swaps_in_the_game_over_label() {
    let mut app = HeadlessAppBuilder::new().with_level(boxed_level('f')).build();
    app.update();
    app.world_mut().resource_mut::<GameState>().score = 3;

    place_player_on_center(&mut app);
    app.update();

    let state = app.world().resource::<GameState>();
    assert_eq!(state.score, 3); // Finish never alters the score
    assert_eq!(state.phase, Phase::LevelFinished);

    let labels = app
        .world_mut()
        .query::<&GameOverText>()
        .iter(app.world())
        .count();
    assert_eq!(labels, 1);
}

#[test]
fn gravity_keeps_its_last_value_without_input() {
    let mut app = HeadlessAppBuilder::new().with_level(boxed_level(' ')).build();
    app.update();

    app.world_mut().resource_mut::<Gravity>().0 = Vec2::new(1.5, -2.0);
    app.update();
    assert_eq!(app.world().resource::<Gravity>().0, Vec2::new(1.5, -2.0));
}

#[test]
fn pointer_steers_gravity_toward_the_target() {
    let mut app = HeadlessAppBuilder::new().with_level(boxed_level(' ')).build();
    app.update();

    let player = player_entity(&mut app);
    let pos = app.world().entity(player).get::<Transform>().unwrap().translation;
    let target = Vec2::new(pos.x + 200.0, pos.y - 100.0);
    app.world_mut().resource_mut::<PointerTarget>().0 = Some(target);
    app.update();

    assert_eq!(app.world().resource::<Gravity>().0, Vec2::new(2.0, -1.0));
}

#[test]
fn tilt_takes_precedence_over_the_pointer() {
    let mut app = HeadlessAppBuilder::new().with_level(boxed_level(' ')).build();
    app.update();

    app.world_mut().resource_mut::<PointerTarget>().0 = Some(Vec2::new(500.0, 500.0));
    app.world_mut().resource_mut::<TiltSensor>().0 = Some(Vec2::new(0.5, -0.2));
    app.update();

    assert_eq!(app.world().resource::<Gravity>().0, Vec2::new(10.0, 25.0));
}
