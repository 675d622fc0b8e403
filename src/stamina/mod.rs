//! Stamina domain: resource pool plugin wiring and public exports.

mod pool;
mod systems;

#[cfg(test)]
mod tests;

pub use pool::Stamina;

use bevy::prelude::*;

use crate::core::GameState;
use crate::movement::MovementSet;
use crate::stamina::systems::regenerate_stamina;

pub struct StaminaPlugin;

impl Plugin for StaminaPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(
            Update,
            regenerate_stamina
                .after(MovementSet)
                .run_if(in_state(GameState::Run)),
        );
    }
}
