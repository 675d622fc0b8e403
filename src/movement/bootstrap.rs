//! Movement domain: player bootstrap from loaded tuning.

use avian3d::prelude::*;
use bevy::prelude::*;

use crate::combat::Health;
use crate::content::{HealthTuning, StaminaTuning};
use crate::movement::{
    AnimationIntent, GameLayer, GroundContact, MovementController, MovementTuning, Player,
};
use crate::stamina::Stamina;

const PLAYER_RADIUS: f32 = 0.4;

/// Spawn the runner with its controller, pools and physics body. Tuning
/// resources are installed during PreStartup, so they are always present here.
pub(crate) fn spawn_player(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    existing_player: Query<Entity, With<Player>>,
    movement: Res<MovementTuning>,
    stamina: Res<StaminaTuning>,
    health: Res<HealthTuning>,
) {
    if !existing_player.is_empty() {
        info!("Player already exists, skipping spawn");
        return;
    }

    // Capsule sized so its feet sit `body_half_height` below the center.
    let length = ((movement.body_half_height - PLAYER_RADIUS) * 2.0).max(0.0);

    info!(
        "Spawning player: max_speed={}, stamina={}, health={}",
        movement.max_speed, stamina.max, health.max_hp
    );

    commands.spawn((
        // Identity & Movement
        (
            Player,
            MovementController::new(movement.clone()),
            GroundContact::default(),
            AnimationIntent::default(),
        ),
        // Pools
        (Stamina::from_tuning(&stamina), Health::from_tuning(&health)),
        // Rendering
        Mesh3d(meshes.add(Capsule3d::new(PLAYER_RADIUS, length))),
        MeshMaterial3d(materials.add(Color::srgb(0.9, 0.9, 0.9))),
        Transform::from_xyz(0.0, movement.body_half_height + 0.1, 0.0),
        // Physics
        (
            RigidBody::Dynamic,
            Collider::capsule(PLAYER_RADIUS, length),
            LockedAxes::ROTATION_LOCKED,
            LinearVelocity::default(),
            GravityScale(0.0), // gravity is stepped by the controller
            Friction::new(0.0),
            CollisionEventsEnabled,
            CollisionLayers::new(
                GameLayer::Player,
                [
                    GameLayer::Ground,
                    GameLayer::Wall,
                    GameLayer::Obstacle,
                    GameLayer::Hazard,
                ],
            ),
        ),
    ));
}
