//! Stamina domain: the bounded resource pool gating traversal moves.

use bevy::prelude::*;

use crate::content::StaminaTuning;

/// Bounded stamina pool. `current` always stays inside `[0, max]`.
#[derive(Component, Debug, Clone)]
pub struct Stamina {
    max: f32,
    current: f32,
    total_consumed: f32,
    pub regen_rate: f32,
    pub regen_delay: f32,
    since_last_use: f32,
}

impl Stamina {
    pub fn new(max: f32) -> Self {
        let max = max.max(0.0);
        Self {
            max,
            current: max,
            total_consumed: 0.0,
            regen_rate: 0.0,
            regen_delay: 0.0,
            since_last_use: 0.0,
        }
    }

    pub fn from_tuning(tuning: &StaminaTuning) -> Self {
        Self {
            regen_rate: tuning.regen_rate,
            regen_delay: tuning.regen_delay,
            ..Self::new(tuning.max)
        }
    }

    /// Drain stamina, clamping at zero. Only the amount actually removed
    /// counts toward `total_consumed`.
    pub fn reduce(&mut self, amount: f32) -> f32 {
        let actual = amount.max(0.0).min(self.current);
        self.current -= actual;
        self.total_consumed += actual;
        if amount > 0.0 {
            self.since_last_use = 0.0;
        }
        actual
    }

    pub fn increase(&mut self, amount: f32) -> f32 {
        let actual = amount.max(0.0).min(self.max - self.current);
        self.current += actual;
        actual
    }

    pub fn current(&self) -> f32 {
        self.current
    }

    pub fn max(&self) -> f32 {
        self.max
    }

    /// Monotonic counter of everything ever drained from the pool.
    pub fn total_consumed(&self) -> f32 {
        self.total_consumed
    }

    pub fn is_exhausted(&self) -> bool {
        self.current <= 0.0
    }

    pub fn percent(&self) -> f32 {
        if self.max > 0.0 {
            self.current / self.max
        } else {
            0.0
        }
    }

    /// Passive refill once `regen_delay` seconds have passed since the last drain.
    pub fn tick_regen(&mut self, dt: f32) {
        if self.current >= self.max {
            return;
        }
        self.since_last_use += dt;
        if self.since_last_use >= self.regen_delay {
            self.increase(self.regen_rate * dt);
        }
    }

    /// Restart the regen delay without draining anything.
    pub fn hold_regen(&mut self) {
        self.since_last_use = 0.0;
    }
}
