//! Bevy 2D viewer
//!
//! Drives the engine once per rendered frame and keeps one circle entity per
//! live body. `BodySprites::entities` is index-aligned with
//! `Engine::bodies()`: spawns append to both, and the slots a step removed
//! are despawned back to front.
//!
//! Left click spawns a body under the cursor, `D` logs the body table.

use bevy::math::primitives::Circle;
use bevy::log::LogPlugin;
use bevy::prelude::*;
use bevy::sprite::{MaterialMesh2dBundle, Mesh2dHandle};
use bevy::window::PrimaryWindow;
use log::{info, warn};

use crate::inspection::debug_table::body_table;
use crate::simulation::scenario::Scenario;
use crate::simulation::states::{Body, Vector};

#[derive(Resource)]
struct ViewerState {
    scenario: Scenario,
}

#[derive(Resource)]
struct BodySprites {
    entities: Vec<Entity>,
    mesh: Mesh2dHandle,
    material: Handle<ColorMaterial>,
}

pub fn run_2d(scenario: Scenario) {
    info!("run_2d: starting Bevy 2D viewer with {} bodies", scenario.engine.len());

    App::new()
        .insert_resource(ViewerState { scenario })
        .add_plugins(
            DefaultPlugins
                .set(WindowPlugin {
                    primary_window: Some(Window {
                        title: "gravsim".into(),
                        ..Default::default()
                    }),
                    ..Default::default()
                })
                // logging goes through the env_logger installed by main
                .disable::<LogPlugin>(),
        )
        .add_systems(Startup, setup_bodies_system)
        .add_systems(
            Update,
            (
                spawn_on_click_system,
                physics_step_system,
                sync_transforms_system,
                debug_table_system,
            )
                .chain(),
        )
        .run();
}

fn setup_bodies_system(
    mut commands: Commands,
    state: Res<ViewerState>,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<ColorMaterial>>,
) {
    let bodies = state.scenario.engine.bodies();

    // Look at the center of the initial bodies
    let center = if bodies.is_empty() {
        Vector::zeros()
    } else {
        bodies.iter().fold(Vector::zeros(), |c, b| c + b.position) / bodies.len() as f64
    };
    let mut camera = Camera2dBundle::default();
    camera.transform.translation.x = center.x as f32;
    camera.transform.translation.y = center.y as f32;
    commands.spawn(camera);

    // One unit circle shared by every body, scaled by radius
    let mesh = Mesh2dHandle(meshes.add(Circle::new(1.0)));
    let material = materials.add(ColorMaterial::from(Color::WHITE));

    let entities = bodies
        .iter()
        .map(|b| spawn_sprite(&mut commands, &mesh, &material, b))
        .collect();

    commands.insert_resource(BodySprites { entities, mesh, material });
}

fn spawn_on_click_system(
    mut commands: Commands,
    buttons: Res<ButtonInput<MouseButton>>,
    windows: Query<&Window, With<PrimaryWindow>>,
    cameras: Query<(&Camera, &GlobalTransform)>,
    mut state: ResMut<ViewerState>,
    mut sprites: ResMut<BodySprites>,
) {
    if !buttons.just_pressed(MouseButton::Left) {
        return;
    }
    let Ok(window) = windows.get_single() else { return };
    let Some(cursor) = window.cursor_position() else { return };
    let Ok((camera, camera_transform)) = cameras.get_single() else { return };
    let Some(world) = camera.viewport_to_world_2d(camera_transform, cursor) else { return };

    let position = Vector::new(world.x as f64, world.y as f64);
    let Scenario { engine, spawner, .. } = &mut state.scenario;

    match spawner.spawn_at(engine, position) {
        Ok(i) => {
            let entity = spawn_sprite(&mut commands, &sprites.mesh, &sprites.material, &engine.bodies()[i]);
            sprites.entities.push(entity);
        }
        Err(err) => warn!("click at ({:.1}, {:.1}) not spawned: {err}", position.x, position.y),
    }
}

fn physics_step_system(
    mut commands: Commands,
    time: Res<Time>,
    mut state: ResMut<ViewerState>,
    mut sprites: ResMut<BodySprites>,
) {
    let Scenario { engine, clock, .. } = &mut state.scenario;

    let dt = clock.tick(time.elapsed_seconds_f64() * 1000.0);
    if let Err(err) = engine.step(dt) {
        warn!("frame skipped: {err}");
        return;
    }

    // Back to front so earlier indices stay valid
    for &i in engine.last_removed().iter().rev() {
        let entity = sprites.entities.remove(i);
        commands.entity(entity).despawn();
    }
}

fn sync_transforms_system(
    state: Res<ViewerState>,
    sprites: Res<BodySprites>,
    mut query: Query<&mut Transform>,
) {
    let bodies = state.scenario.engine.bodies();
    debug_assert_eq!(bodies.len(), sprites.entities.len(), "sprites out of step with bodies");

    for (body, &entity) in bodies.iter().zip(&sprites.entities) {
        if let Ok(mut transform) = query.get_mut(entity) {
            *transform = body_transform(body);
        }
    }
}

fn debug_table_system(keys: Res<ButtonInput<KeyCode>>, state: Res<ViewerState>) {
    if keys.just_pressed(KeyCode::KeyD) {
        let engine = &state.scenario.engine;
        info!("\n{}", body_table(engine.time(), engine.bodies()));
    }
}

fn spawn_sprite(
    commands: &mut Commands,
    mesh: &Mesh2dHandle,
    material: &Handle<ColorMaterial>,
    body: &Body,
) -> Entity {
    commands
        .spawn(MaterialMesh2dBundle {
            mesh: mesh.clone(),
            material: material.clone(),
            transform: body_transform(body),
            ..Default::default()
        })
        .id()
}

fn body_transform(body: &Body) -> Transform {
    Transform::from_xyz(body.position.x as f32, body.position.y as f32, 0.0)
        .with_scale(Vec3::splat(body.radius() as f32))
}
