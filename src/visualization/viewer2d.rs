use bevy::prelude::*;
use bevy::log::LogPlugin;
use bevy::sprite::{MaterialMesh2dBundle, Mesh2dHandle};
use bevy::math::primitives::Circle;

use crate::simulation::scenario::Scenario;

#[derive(Component)]
struct BodyIndex(pub usize);

/// Open a window and drive the scenario: one physics step per fixed tick at
/// `view.steps_per_second`, transforms synced every frame. Returns when the
/// window is closed.
pub fn run_2d(scenario: Scenario) {
    log::info!(
        "starting 2D viewer with {} bodies at {} steps/s",
        scenario.system.bodies.len(),
        scenario.view.steps_per_second
    );

    let steps_per_second = scenario.view.steps_per_second;

    App::new()
        .insert_resource(Time::<Fixed>::from_hz(steps_per_second))
        .insert_resource(ClearColor(Color::BLACK))
        .insert_resource(scenario)
        .add_plugins(
            // logging goes through env_logger, set up in main
            DefaultPlugins.build().disable::<LogPlugin>().set(WindowPlugin {
                primary_window: Some(Window {
                    title: "solsim".into(),
                    resolution: (800.0, 600.0).into(),
                    ..default()
                }),
                ..default()
            }),
        )
        .add_systems(Startup, setup_bodies_system)
        .add_systems(FixedUpdate, physics_step_system)
        .add_systems(Update, sync_transforms_system)
        .run();
}

/// On-screen radius: the base size nudged by order of magnitude of mass
pub fn point_radius(mass: f64, base: f32) -> f32 {
    let magnitude = (mass.log10() / 24.0).clamp(0.5, 2.0);
    base * magnitude as f32
}

fn to_screen(scenario: &Scenario, i: usize) -> Vec2 {
    let b = &scenario.system.bodies[i];
    let scale = scenario.view.scale;
    Vec2::new((b.x.x / scale) as f32, (b.x.y / scale) as f32)
}

fn setup_bodies_system(mut commands: Commands, scenario: Res<Scenario>, mut meshes: ResMut<Assets<Mesh>>, mut materials: ResMut<Assets<ColorMaterial>>) {
    commands.spawn(Camera2dBundle::default());

    for (i, body) in scenario.system.bodies.iter().enumerate() {
        let radius_screen = point_radius(body.m, scenario.view.point_size);
        let pos = to_screen(&scenario, i);

        commands.spawn((
            MaterialMesh2dBundle {
                mesh: Mesh2dHandle(meshes.add(Circle::new(radius_screen))),
                material: materials.add(ColorMaterial::from(Color::WHITE)),
                transform: Transform::from_xyz(pos.x, pos.y, 0.0),
                ..Default::default()
            },
            BodyIndex(i),
        ));
    }
}

fn physics_step_system(mut scenario: ResMut<Scenario>) {
    scenario.step();
}

fn sync_transforms_system(scenario: Res<Scenario>, mut query: Query<(&BodyIndex, &mut Transform)>) {
    for (BodyIndex(i), mut transform) in &mut query {
        if *i < scenario.system.bodies.len() {
            let pos = to_screen(&scenario, *i);
            transform.translation.x = pos.x;
            transform.translation.y = pos.y;
        }
    }
}
