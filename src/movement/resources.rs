//! Movement domain: tuning and input resources.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

/// Movement tunables. Distances are in metres, angles in degrees.
#[derive(Resource, Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct MovementTuning {
    pub max_speed: f32,
    pub acceleration: f32,
    /// Degrees per second of yaw at full turn input.
    pub turn_rate: f32,
    pub jump_impulse: f32,
    /// Downward velocity added every airborne frame.
    pub gravity_step: f32,
    /// Vertical velocity held while grounded so the body hugs the floor.
    pub ground_stick_velocity: f32,
    pub dash_distance: f32,
    pub dash_duration: f32,
    pub dash_cooldown: f32,
    pub vault_range: f32,
    /// Height above the feet the vault ray is cast from.
    pub vault_ray_height: f32,
    pub vault_delay: f32,
    pub vault_duration: f32,
    pub vault_forward_offset: f32,
    /// Height of the feet above the obstacle origin at the end of a vault.
    pub vault_clearance: f32,
    /// Distance from the body's center to its feet at unit scale.
    pub body_half_height: f32,
    /// Y scale of the body while sliding.
    pub slide_height: f32,
    pub slide_speed: f32,
    pub wall_probe_range: f32,
    pub lean_angle_max: f32,
    pub lean_speed: f32,
    pub lean_epsilon: f32,
    /// Seconds between accepted hazard hits.
    pub damage_cooldown: f32,
    /// Stamina per second while running or wall running.
    pub run_cost: f32,
    pub jump_cost: f32,
    pub vault_cost: f32,
    pub dash_cost: f32,
    pub slide_cost: f32,
}

impl Default for MovementTuning {
    fn default() -> Self {
        Self {
            max_speed: 5.0,
            acceleration: 1.5,
            turn_rate: 250.0,
            jump_impulse: 8.5,
            gravity_step: 0.5,
            ground_stick_velocity: -0.5,
            dash_distance: 3.0,
            dash_duration: 0.1,
            dash_cooldown: 1.0,
            vault_range: 1.5,
            vault_ray_height: 0.3,
            vault_delay: 0.25,
            vault_duration: 0.5,
            vault_forward_offset: 0.75,
            vault_clearance: 0.5,
            body_half_height: 0.9,
            slide_height: 0.5,
            slide_speed: 2.0,
            wall_probe_range: 0.8,
            lean_angle_max: 25.0,
            lean_speed: 8.0,
            lean_epsilon: 0.5,
            damage_cooldown: 0.05,
            run_cost: 2.0,
            jump_cost: 5.0,
            vault_cost: 10.0,
            dash_cost: 15.0,
            slide_cost: 5.0,
        }
    }
}

/// Abstract movement keys, independent of the physical binding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MovementKey {
    Forward,
    TurnLeft,
    TurnRight,
    Jump,
    Vault,
    Dash,
    Slide,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    Down,
    Up,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MovementKeyEvent {
    pub key: MovementKey,
    pub action: KeyAction,
}

impl MovementKeyEvent {
    pub fn down(key: MovementKey) -> Self {
        Self {
            key,
            action: KeyAction::Down,
        }
    }

    pub fn up(key: MovementKey) -> Self {
        Self {
            key,
            action: KeyAction::Up,
        }
    }
}

/// Key events gathered since the last tick, drained by the controller system.
#[derive(Resource, Debug, Default)]
pub struct MovementInput {
    pub pending: Vec<MovementKeyEvent>,
}

impl MovementInput {
    pub fn drain(&mut self) -> Vec<MovementKeyEvent> {
        std::mem::take(&mut self.pending)
    }
}
