//! Movement domain: debug-only test course.

use avian3d::prelude::*;
use bevy::prelude::*;

use crate::combat::Hazard;
use crate::content::HazardTuning;
use crate::movement::{GameLayer, Ground, ObstacleKind, Wall};

/// A straight run with a wall on each side, one low box to vault, one high
/// box to jump onto and a hazard volume near the end.
pub(crate) fn spawn_test_course(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    hazards: Res<HazardTuning>,
) {
    let ground_color = Color::srgb(0.4, 0.5, 0.4);
    let wall_color = Color::srgb(0.3, 0.3, 0.4);
    let obstacle_color = Color::srgb(0.5, 0.4, 0.3);
    let hazard_color = Color::srgb(0.8, 0.2, 0.2);

    let ground_layers = CollisionLayers::new(GameLayer::Ground, [GameLayer::Player]);
    let wall_layers = CollisionLayers::new(GameLayer::Wall, [GameLayer::Player]);
    let obstacle_layers = CollisionLayers::new(GameLayer::Obstacle, [GameLayer::Player]);

    // Ground
    commands.spawn((
        Ground,
        Mesh3d(meshes.add(Cuboid::new(12.0, 0.2, 80.0))),
        MeshMaterial3d(materials.add(ground_color)),
        Transform::from_xyz(0.0, -0.1, -35.0),
        RigidBody::Static,
        Collider::cuboid(12.0, 0.2, 80.0),
        ground_layers,
    ));

    // Running walls
    for x in [-3.0, 3.0] {
        commands.spawn((
            Wall,
            Mesh3d(meshes.add(Cuboid::new(0.4, 4.0, 20.0))),
            MeshMaterial3d(materials.add(wall_color)),
            Transform::from_xyz(x, 2.0, -20.0),
            RigidBody::Static,
            Collider::cuboid(0.4, 4.0, 20.0),
            wall_layers,
        ));
    }

    // Vaultable box
    commands.spawn((
        ObstacleKind::Low,
        Hazard::obstacle(&hazards),
        Mesh3d(meshes.add(Cuboid::new(2.0, 0.6, 0.6))),
        MeshMaterial3d(materials.add(obstacle_color)),
        Transform::from_xyz(0.0, 0.3, -6.0),
        RigidBody::Static,
        Collider::cuboid(2.0, 0.6, 0.6),
        obstacle_layers,
    ));

    // Tall box, jump only
    commands.spawn((
        ObstacleKind::High,
        Hazard::obstacle(&hazards),
        Mesh3d(meshes.add(Cuboid::new(2.0, 1.2, 1.0))),
        MeshMaterial3d(materials.add(obstacle_color)),
        Transform::from_xyz(0.0, 0.6, -40.0),
        RigidBody::Static,
        Collider::cuboid(2.0, 1.2, 1.0),
        obstacle_layers,
    ));

    // Projectile stand-in
    commands.spawn((
        Hazard::projectile(&hazards),
        Mesh3d(meshes.add(Sphere::new(0.3))),
        MeshMaterial3d(materials.add(hazard_color)),
        Transform::from_xyz(0.0, 1.0, -55.0),
        RigidBody::Static,
        Collider::sphere(0.3),
        Sensor,
        CollisionLayers::new(GameLayer::Hazard, [GameLayer::Player]),
    ));

    info!("Spawned dev test course");
}
