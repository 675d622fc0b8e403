//! Movement domain: components and physics layers for locomotion.

use avian3d::prelude::*;
use bevy::prelude::*;
use serde::{Deserialize, Serialize};

/// Physics layers for collision filtering
#[derive(PhysicsLayer, Clone, Copy, Debug, Default)]
pub enum GameLayer {
    #[default]
    Default,
    /// Ground surfaces (floors, rooftops)
    Ground,
    /// Runnable wall surfaces
    Wall,
    /// Boxes that can be vaulted or block the way
    Obstacle,
    /// Player character
    Player,
    /// Damaging triggers (projectiles, hazard volumes)
    Hazard,
}

#[derive(Component, Debug)]
pub struct Player;

/// Marker for ground colliders
#[derive(Component, Debug)]
pub struct Ground;

/// Marker for wall colliders
#[derive(Component, Debug)]
pub struct Wall;

/// Obstacle classification read by the vault scan.
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
pub enum ObstacleKind {
    /// Can be vaulted over
    Low,
    /// Blocks vaulting
    High,
}

/// Result of the downward ground probe, refreshed every frame.
#[derive(Component, Debug, Default)]
pub struct GroundContact {
    pub grounded: bool,
}

/// Animation parameters mirrored from the controller for an external animator.
#[derive(Component, Debug, Clone, Default, PartialEq)]
pub struct AnimationIntent {
    pub running: bool,
    pub turning: bool,
    pub sliding: bool,
    /// Horizontal speed as a fraction of max speed.
    pub speed_ratio: f32,
    /// One-shot triggers, set for the frame they happen.
    pub jump: bool,
    pub vault: bool,
}
