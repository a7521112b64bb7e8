//! Headless App Builder
//!
//! Provides a reusable builder for creating headless Bevy apps that run the
//! gameplay systems without a window. Used by tests to drive star pickup,
//! vortex death, and finish flows end to end.
//!
//! Unlike the windowed game, the builder registers the gameplay chain in
//! `Update`, so each `app.update()` call is exactly one simulation tick.

use bevy::app::ScheduleRunnerPlugin;
use bevy::prelude::*;
use std::time::Duration;

use crate::contacts::{ContactEvents, GameState, animate_player_death, detect_contacts, resolve_contacts};
use crate::input::{Gravity, PointerTarget, TiltSensor, update_gravity};
use crate::levels::{CurrentLevel, Level, spawn_level, spawn_player};
use crate::player::{apply_gravity, apply_velocity, collide_with_walls};
use crate::world::rotate_vortices;

/// Builder for creating headless Bevy apps
pub struct HeadlessAppBuilder {
    level: Option<Level>,
    fps: f32,
}

impl HeadlessAppBuilder {
    /// Create a new builder with default settings
    pub fn new() -> Self {
        Self {
            level: None,
            fps: 60.0,
        }
    }

    /// Spawn the given level at startup
    pub fn with_level(mut self, level: Level) -> Self {
        self.level = Some(level);
        self
    }

    /// Set the target FPS (default: 60)
    pub fn with_fps(mut self, fps: f32) -> Self {
        self.fps = fps;
        self
    }

    /// Build the app with minimal plugins, gameplay resources, and the full
    /// gameplay system chain in `Update`.
    pub fn build(self) -> App {
        let mut app = App::new();

        app.add_plugins(MinimalPlugins.set(ScheduleRunnerPlugin::run_loop(
            Duration::from_secs_f32(1.0 / self.fps),
        )));

        // Transform plugin for GlobalTransform propagation
        app.add_plugins(bevy::transform::TransformPlugin);

        app.init_resource::<GameState>();
        app.init_resource::<Gravity>();
        app.init_resource::<PointerTarget>();
        app.init_resource::<TiltSensor>();
        app.init_resource::<ContactEvents>();
        app.init_resource::<CurrentLevel>();

        app.add_systems(
            Update,
            (
                update_gravity,
                apply_gravity,
                apply_velocity,
                collide_with_walls,
                detect_contacts,
                resolve_contacts,
                animate_player_death,
                rotate_vortices,
            )
                .chain(),
        );

        let level = self.level;
        app.add_systems(Startup, move |mut commands: Commands| {
            if let Some(level) = &level {
                spawn_level(&mut commands, level);
            }
            spawn_player(&mut commands);
        });

        app
    }
}

impl Default for HeadlessAppBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_creates_app_with_game_resources() {
        let app = HeadlessAppBuilder::new().build();
        assert!(app.world().contains_resource::<GameState>());
        assert!(app.world().contains_resource::<Gravity>());
        assert!(app.world().contains_resource::<ContactEvents>());
    }

    #[test]
    fn startup_spawns_level_and_player() {
        use crate::player::Player;
        use crate::world::Tile;

        let level = Level::parse("t", "xxx\nxsx\nxxx").unwrap();
        let mut app = HeadlessAppBuilder::new().with_level(level).build();
        app.update();

        let tiles = app
            .world_mut()
            .query::<&Tile>()
            .iter(app.world())
            .count();
        assert_eq!(tiles, 9); // 8 walls + 1 star

        let players = app
            .world_mut()
            .query::<&Player>()
            .iter(app.world())
            .count();
        assert_eq!(players, 1);
    }
}
