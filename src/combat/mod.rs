//! Combat domain: health, hazards, and the death notification.

mod components;
mod events;
mod systems;

#[cfg(test)]
mod tests;

pub use components::{DamageOutcome, Hazard, Health};
pub use events::{HazardContact, PlayerDamagedEvent, PlayerDiedEvent};

use bevy::prelude::*;

use crate::combat::systems::{apply_hazard_contacts, regenerate_health, route_hazard_collisions};
use crate::core::GameState;
use crate::movement::MovementSet;

pub struct CombatPlugin;

impl Plugin for CombatPlugin {
    fn build(&self, app: &mut App) {
        app.add_message::<HazardContact>()
            .add_message::<PlayerDamagedEvent>()
            .add_message::<PlayerDiedEvent>()
            .add_systems(
                Update,
                (route_hazard_collisions, apply_hazard_contacts, regenerate_health)
                    .chain()
                    .after(MovementSet)
                    .run_if(in_state(GameState::Run)),
            );
    }
}
