//! Movement domain: ground detection.

use avian3d::prelude::*;
use bevy::prelude::*;

use crate::movement::{GameLayer, GroundContact, MovementController, Player};

/// Extra reach below the capsule's feet that still counts as standing.
const GROUND_PROBE_SLACK: f32 = 0.1;

pub(crate) fn detect_ground(
    spatial_query: SpatialQuery,
    mut query: Query<(Entity, &Transform, &MovementController, &mut GroundContact), With<Player>>,
) {
    for (entity, transform, controller, mut contact) in &mut query {
        let filter = SpatialQueryFilter::from_mask([GameLayer::Ground, GameLayer::Obstacle])
            .with_excluded_entities([entity]);
        let half_height = controller.tuning().body_half_height * transform.scale.y;

        let hit = spatial_query.cast_ray(
            transform.translation,
            Dir3::NEG_Y,
            half_height + GROUND_PROBE_SLACK,
            true,
            &filter,
        );

        let was_grounded = contact.grounded;
        contact.grounded = hit.is_some();
        if contact.grounded != was_grounded {
            debug!("Grounded: {}", contact.grounded);
        }
    }
}
