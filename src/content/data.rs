//! Data definitions for tuning loaded from RON files.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::movement::MovementTuning;

/// Top-level layout of `assets/data/tuning.ron`. Every section is optional
/// and falls back to its defaults.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct TuningFile {
    pub schema_version: u32,
    pub movement: MovementTuning,
    pub stamina: StaminaTuning,
    pub health: HealthTuning,
    pub hazards: HazardTuning,
}

#[derive(Resource, Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct StaminaTuning {
    pub max: f32,
    /// Stamina per second once regen kicks in.
    pub regen_rate: f32,
    /// Seconds after the last drain before regen starts.
    pub regen_delay: f32,
}

impl Default for StaminaTuning {
    fn default() -> Self {
        Self {
            max: 100.0,
            regen_rate: 4.0,
            regen_delay: 1.5,
        }
    }
}

#[derive(Resource, Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct HealthTuning {
    pub max_hp: f32,
    pub regen_rate: f32,
    pub regen_delay: f32,
    pub auto_regen: bool,
}

impl Default for HealthTuning {
    fn default() -> Self {
        Self {
            max_hp: 100.0,
            regen_rate: 5.0,
            regen_delay: 3.0,
            auto_regen: true,
        }
    }
}

#[derive(Resource, Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct HazardTuning {
    pub obstacle_damage: f32,
    pub projectile_damage: f32,
}

impl Default for HazardTuning {
    fn default() -> Self {
        Self {
            obstacle_damage: 10.0,
            projectile_damage: 10.0,
        }
    }
}
