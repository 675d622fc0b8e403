//! Movement domain: the physics seams the controller is driven through.
//!
//! The controller never talks to avian directly. Raycasts go through
//! [`PhysicsQuery`] and displacement through [`CharacterMotor`], so the state
//! machine can be stepped against in-memory fakes as easily as against the
//! live spatial query.

use bevy::prelude::*;

use crate::movement::ObstacleKind;

/// Obstacle data resolved from the collider a ray hit.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ObstacleHit {
    pub kind: ObstacleKind,
    /// World-space origin of the obstacle body.
    pub origin: Vec3,
}

/// Closest hit returned by a raycast.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RayHit {
    pub entity: Entity,
    pub point: Vec3,
    pub normal: Vec3,
    pub distance: f32,
    pub obstacle: Option<ObstacleHit>,
}

/// Synchronous ray queries against the latest committed world state.
/// Identical queries within one frame must return identical results.
pub trait PhysicsQuery {
    fn raycast(&self, origin: Vec3, direction: Dir3, max_distance: f32) -> Option<RayHit>;
}

/// Moves the character body against the world.
pub trait CharacterMotor {
    fn is_grounded(&self) -> bool;
    fn move_by(&mut self, displacement: Vec3);
}

/// Which flank a wall was found on: -1 left, 1 right, 0 none.
pub type WallSide = i8;

/// Result of probing both flanks for a wall.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct WallProbe {
    pub side: WallSide,
    pub normal: Vec3,
}

impl WallProbe {
    pub fn found(&self) -> bool {
        self.side != 0
    }
}

/// Facing direction for a yaw in degrees. Forward is -Z at yaw 0.
pub fn heading_from_yaw(yaw_degrees: f32) -> Vec3 {
    Quat::from_rotation_y(yaw_degrees.to_radians()) * Vec3::NEG_Z
}

/// Local right axis for a yaw in degrees.
pub fn right_from_yaw(yaw_degrees: f32) -> Vec3 {
    Quat::from_rotation_y(yaw_degrees.to_radians()) * Vec3::X
}

fn side_direction(yaw_degrees: f32, side: WallSide) -> Option<Dir3> {
    Dir3::new(right_from_yaw(yaw_degrees) * f32::from(side)).ok()
}

/// Probe both flanks. The right side wins when both hit.
pub fn probe_walls(
    physics: &dyn PhysicsQuery,
    position: Vec3,
    yaw_degrees: f32,
    range: f32,
) -> WallProbe {
    for side in [1, -1] {
        let Some(direction) = side_direction(yaw_degrees, side) else {
            continue;
        };
        if let Some(hit) = physics.raycast(position, direction, range) {
            return WallProbe {
                side,
                normal: hit.normal,
            };
        }
    }
    WallProbe::default()
}

/// Test a single flank only. Used while wall running so a noisy probe on the
/// other side cannot end the run.
pub fn check_wall_contact_on_side(
    physics: &dyn PhysicsQuery,
    position: Vec3,
    yaw_degrees: f32,
    range: f32,
    side: WallSide,
) -> bool {
    if side == 0 {
        return false;
    }
    side_direction(yaw_degrees, side)
        .and_then(|direction| physics.raycast(position, direction, range))
        .is_some()
}

/// Yaw (degrees) that runs parallel to a wall.
///
/// The tangent `cross(normal, up)` of a wall on the right already points along
/// the current heading; a wall on the left yields the opposite tangent, so it
/// is negated. Falls back to `current_yaw` when there is no usable normal.
pub fn wall_parallel_yaw(normal: Vec3, side: WallSide, current_yaw: f32) -> f32 {
    if side == 0 {
        return current_yaw;
    }
    let flat = Vec3::new(normal.x, 0.0, normal.z);
    let Some(flat) = flat.try_normalize() else {
        return current_yaw;
    };
    let mut tangent = flat.cross(Vec3::Y).normalize();
    if side == -1 {
        tangent = -tangent;
    }
    (-tangent.x).atan2(-tangent.z).to_degrees()
}
