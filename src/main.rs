//! Marblemaze - a tilt-controlled marble maze built with Bevy
//!
//! Main entry point: app setup and system registration.

use bevy::{camera::ScalingMode, prelude::*};

use marblemaze::{
    ContactEvents, CurrentLevel, CurrentSettings, GameState, Gravity, LevelDatabase, PointerTarget,
    TiltSensor, constants::*, contacts, input, levels, player, save_settings_system, ui, world,
};

fn main() {
    // Check for --level <num> override (1-indexed)
    let args: Vec<String> = std::env::args().collect();
    let level_override = args
        .iter()
        .position(|a| a == "--level")
        .and_then(|i| args.get(i + 1).and_then(|s| s.parse::<u32>().ok()));

    // Load persistent settings (uses defaults if file doesn't exist)
    let current_settings = CurrentSettings::default();
    let loaded_level = level_override.unwrap_or(current_settings.settings.level);

    // Load all bundled levels. Level assets are build-time invariants:
    // a missing file or a bad tile character aborts the program here.
    let level_db = LevelDatabase::load_from_dir(LEVELS_DIR)
        .unwrap_or_else(|e| panic!("failed to load levels: {e}"));

    let start_level = loaded_level.clamp(1, level_db.len() as u32);

    App::new()
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                resolution: bevy::window::WindowResolution::new(
                    SCENE_WIDTH as u32,
                    SCENE_HEIGHT as u32,
                )
                .with_scale_factor_override(1.0),
                title: "Marble Maze".into(),
                resizable: false,
                ..default()
            }),
            ..default()
        }))
        .insert_resource(ClearColor(BACKGROUND_COLOR))
        .insert_resource(level_db)
        .insert_resource(current_settings)
        .insert_resource(CurrentLevel(start_level))
        .init_resource::<GameState>()
        .init_resource::<Gravity>()
        .init_resource::<PointerTarget>()
        .init_resource::<TiltSensor>()
        .init_resource::<ContactEvents>()
        .add_systems(Startup, setup)
        // Gravity controller: pointer capture feeds the steering computation
        .add_systems(
            Update,
            (input::capture_pointer, input::update_gravity)
                .chain()
                .run_if(contacts::game_active),
        )
        // Cosmetic animations and HUD always run
        .add_systems(
            Update,
            (
                world::rotate_vortices,
                contacts::animate_player_death,
                ui::update_score_text,
            ),
        )
        // Session control and settings persistence
        .add_systems(Update, (levels::reload_level, save_settings_system))
        // Physics, detection, and resolution run as one chained tick so a
        // contact fully resolves before the next gravity computation
        .add_systems(
            FixedUpdate,
            (
                player::apply_gravity,
                player::apply_velocity,
                player::collide_with_walls,
                contacts::detect_contacts,
                contacts::resolve_contacts,
            )
                .chain()
                .run_if(contacts::game_active),
        )
        .run();
}

/// Setup the game world
fn setup(
    mut commands: Commands,
    level_db: Res<LevelDatabase>,
    current_level: Res<CurrentLevel>,
) {
    // Camera - orthographic, shows the entire scene.
    // World coordinates match the level grid: origin at the bottom-left.
    commands.spawn((
        Camera2d,
        Transform::from_xyz(SCENE_CENTER.x, SCENE_CENTER.y, 0.0),
        Projection::Orthographic(OrthographicProjection {
            scaling_mode: ScalingMode::FixedVertical {
                viewport_height: SCENE_HEIGHT,
            },
            ..OrthographicProjection::default_2d()
        }),
    ));

    levels::spawn_background(&mut commands);

    let level_index = (current_level.0 as usize).saturating_sub(1);
    let level = level_db
        .get(level_index)
        .expect("Start level out of bounds");
    info!("Loading level {} ({})", current_level.0, level.name);

    levels::spawn_level(&mut commands, level);
    levels::spawn_player(&mut commands);
    ui::spawn_score_text(&mut commands);
}
