//! Movement domain: drives each controller against avian's spatial query.

use avian3d::prelude::*;
use bevy::prelude::*;

use crate::movement::physics::{CharacterMotor, ObstacleHit, PhysicsQuery, RayHit};
use crate::movement::{
    AnimationIntent, FrameContext, GameLayer, GroundContact, MovementController, MovementInput,
    ObstacleKind, Player,
};
use crate::stamina::Stamina;

/// Raycasts through avian, resolving obstacle data for each hit.
struct SpatialPhysics<'a, 'w, 's> {
    spatial: &'a SpatialQuery<'w, 's>,
    filter: SpatialQueryFilter,
    obstacle_at: &'a dyn Fn(Entity) -> Option<ObstacleHit>,
}

impl PhysicsQuery for SpatialPhysics<'_, '_, '_> {
    fn raycast(&self, origin: Vec3, direction: Dir3, max_distance: f32) -> Option<RayHit> {
        let hit = self
            .spatial
            .cast_ray(origin, direction, max_distance, true, &self.filter)?;

        Some(RayHit {
            entity: hit.entity,
            point: origin + *direction * hit.distance,
            normal: hit.normal,
            distance: hit.distance,
            obstacle: (self.obstacle_at)(hit.entity),
        })
    }
}

/// Collects the frame's displacement so it can be handed to the rigid body as
/// a velocity.
struct VelocityMotor {
    grounded: bool,
    displacement: Vec3,
}

impl VelocityMotor {
    fn new(grounded: bool) -> Self {
        Self {
            grounded,
            displacement: Vec3::ZERO,
        }
    }

    fn velocity(&self, dt: f32) -> Vec3 {
        if dt > 0.0 {
            self.displacement / dt
        } else {
            Vec3::ZERO
        }
    }
}

impl CharacterMotor for VelocityMotor {
    fn is_grounded(&self) -> bool {
        self.grounded
    }

    fn move_by(&mut self, displacement: Vec3) {
        self.displacement += displacement;
    }
}

pub(crate) fn drive_controllers(
    time: Res<Time>,
    spatial_query: SpatialQuery,
    mut input: ResMut<MovementInput>,
    obstacles: Query<(&ObstacleKind, &GlobalTransform)>,
    mut players: Query<
        (
            Entity,
            &mut MovementController,
            &mut Transform,
            &GroundContact,
            &mut LinearVelocity,
            &mut AnimationIntent,
            Option<&mut Stamina>,
        ),
        With<Player>,
    >,
) {
    let dt = time.delta_secs();
    let events = input.drain();
    let obstacle_at = |entity: Entity| {
        obstacles
            .get(entity)
            .ok()
            .map(|(kind, transform)| ObstacleHit {
                kind: *kind,
                origin: transform.translation(),
            })
    };

    for (entity, mut controller, mut transform, ground, mut velocity, mut animation, mut stamina) in
        &mut players
    {
        let physics = SpatialPhysics {
            spatial: &spatial_query,
            filter: SpatialQueryFilter::from_mask([
                GameLayer::Ground,
                GameLayer::Wall,
                GameLayer::Obstacle,
            ])
            .with_excluded_entities([entity]),
            obstacle_at: &obstacle_at,
        };
        let mut motor = VelocityMotor::new(ground.grounded);
        let mut ctx = FrameContext {
            physics: &physics,
            motor: &mut motor,
            transform: &mut *transform,
            stamina: stamina.as_deref_mut(),
        };

        for event in &events {
            controller.handle_key(*event, &mut ctx);
        }
        controller.update(dt, &mut ctx);

        velocity.0 = motor.velocity(dt);
        if *animation != *controller.animation() {
            *animation = controller.animation().clone();
        }
        controller.clear_animation_triggers();
    }
}

/// Freeze every player when the run ends. In-flight vaults and dashes are
/// dropped, not finished.
pub(crate) fn halt_players(
    mut players: Query<(&mut MovementController, &mut LinearVelocity), With<Player>>,
) {
    for (mut controller, mut velocity) in &mut players {
        controller.halt();
        velocity.0 = Vec3::ZERO;
    }
}
