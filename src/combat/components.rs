//! Combat domain: health and hazard components.

use bevy::prelude::*;

use crate::content::{HazardTuning, HealthTuning};

/// What a single `take_damage` call did.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct DamageOutcome {
    pub dealt: f32,
    /// Set only on the hit that moved the entity from alive to dead.
    pub killed: bool,
}

/// Hit-point pool. Death is terminal until an explicit `revive`.
#[derive(Component, Debug, Clone)]
pub struct Health {
    current: f32,
    max: f32,
    pub regen_rate: f32,
    pub regen_delay: f32,
    pub auto_regen: bool,
    is_dead: bool,
    time_since_damage: f32,
    regen_active: bool,
}

impl Health {
    pub fn new(max: f32) -> Self {
        let max = max.max(0.0);
        Self {
            current: max,
            max,
            regen_rate: 0.0,
            regen_delay: 0.0,
            auto_regen: false,
            is_dead: false,
            time_since_damage: 0.0,
            regen_active: false,
        }
    }

    pub fn from_tuning(tuning: &HealthTuning) -> Self {
        Self {
            regen_rate: tuning.regen_rate,
            regen_delay: tuning.regen_delay,
            auto_regen: tuning.auto_regen,
            ..Self::new(tuning.max_hp)
        }
    }

    /// Start below full, clamped to `[0, max]`.
    pub fn with_current(mut self, current: f32) -> Self {
        self.current = current.clamp(0.0, self.max);
        self
    }

    pub fn take_damage(&mut self, amount: f32) -> DamageOutcome {
        if self.is_dead {
            return DamageOutcome::default();
        }
        let dealt = amount.max(0.0).min(self.current);
        self.current -= dealt;
        if self.current <= 0.0 {
            self.current = 0.0;
            self.is_dead = true;
            return DamageOutcome {
                dealt,
                killed: true,
            };
        }
        self.time_since_damage = 0.0;
        self.regen_active = false;
        DamageOutcome {
            dealt,
            killed: false,
        }
    }

    pub fn heal(&mut self, amount: f32) -> f32 {
        if self.is_dead {
            return 0.0;
        }
        let actual = amount.max(0.0).min(self.max - self.current);
        self.current += actual;
        actual
    }

    /// Bring a dead entity back, at full health unless `hp` is given.
    pub fn revive(&mut self, hp: Option<f32>) {
        self.is_dead = false;
        self.current = hp.map_or(self.max, |hp| hp.clamp(0.0, self.max));
        self.time_since_damage = 0.0;
        self.regen_active = false;
    }

    /// Passive regeneration: resumes `regen_delay` seconds after the last hit
    /// and stops once full.
    pub fn tick_regen(&mut self, dt: f32) {
        if self.is_dead || !self.auto_regen || self.current >= self.max {
            return;
        }
        self.time_since_damage += dt;
        if !self.regen_active && self.time_since_damage >= self.regen_delay {
            self.regen_active = true;
        }
        if self.regen_active {
            self.current = (self.current + self.regen_rate * dt).min(self.max);
            if self.current >= self.max {
                self.regen_active = false;
            }
        }
    }

    pub fn current(&self) -> f32 {
        self.current
    }

    pub fn max(&self) -> f32 {
        self.max
    }

    pub fn is_dead(&self) -> bool {
        self.is_dead
    }

    pub fn percent(&self) -> f32 {
        if self.max > 0.0 {
            self.current / self.max
        } else {
            0.0
        }
    }
}

/// Anything that hurts the player on contact.
#[derive(Component, Debug, Clone, Copy, PartialEq)]
pub struct Hazard {
    pub damage: f32,
    /// Consumed on an accepted hit (projectiles).
    pub consumable: bool,
}

impl Hazard {
    pub fn obstacle(tuning: &HazardTuning) -> Self {
        Self {
            damage: tuning.obstacle_damage,
            consumable: false,
        }
    }

    pub fn projectile(tuning: &HazardTuning) -> Self {
        Self {
            damage: tuning.projectile_damage,
            consumable: true,
        }
    }
}
