//! Movement domain: forward scan for vaultable geometry.

use bevy::prelude::*;

use crate::movement::physics::{ObstacleHit, PhysicsQuery, heading_from_yaw};

/// Thin forward raycast that reports what obstacle, if any, sits ahead.
#[derive(Debug, Clone, Copy)]
pub struct VaultScan {
    pub range: f32,
}

impl VaultScan {
    pub fn new(range: f32) -> Self {
        Self { range }
    }

    pub fn obstacle_ahead(
        &self,
        physics: &dyn PhysicsQuery,
        position: Vec3,
        yaw_degrees: f32,
    ) -> Option<ObstacleHit> {
        let direction = Dir3::new(heading_from_yaw(yaw_degrees)).ok()?;
        physics
            .raycast(position, direction, self.range)
            .and_then(|hit| hit.obstacle)
    }
}
