//! Combat domain: hazard contact and health upkeep systems.

use avian3d::prelude::*;
use bevy::ecs::message::{MessageReader, MessageWriter};
use bevy::prelude::*;

use crate::combat::components::{Hazard, Health};
use crate::combat::events::{HazardContact, PlayerDamagedEvent, PlayerDiedEvent};
use crate::movement::{ContactOutcome, MovementController, Player};

/// Turn raw collision starts into hazard/player contacts, whichever order the
/// pair arrives in.
pub(crate) fn route_hazard_collisions(
    mut collision_events: MessageReader<CollisionStart>,
    mut contacts: MessageWriter<HazardContact>,
    hazards: Query<(), With<Hazard>>,
    players: Query<(), With<Player>>,
) {
    for event in collision_events.read() {
        let pairs = [
            (event.collider1, event.collider2),
            (event.collider2, event.collider1),
        ];

        for (hazard, player) in pairs {
            if hazards.contains(hazard) && players.contains(player) {
                contacts.write(HazardContact { hazard, player });
            }
        }
    }
}

pub(crate) fn apply_hazard_contacts(
    mut commands: Commands,
    mut contacts: MessageReader<HazardContact>,
    mut damage_events: MessageWriter<PlayerDamagedEvent>,
    mut death_events: MessageWriter<PlayerDiedEvent>,
    hazards: Query<&Hazard>,
    mut players: Query<(&mut MovementController, Option<&mut Health>), With<Player>>,
) {
    for contact in contacts.read() {
        let Ok(hazard) = hazards.get(contact.hazard) else {
            continue;
        };
        let Ok((mut controller, mut health)) = players.get_mut(contact.player) else {
            continue;
        };

        let ContactOutcome::Hit {
            damage,
            consume_hazard,
        } = controller.on_hazard_contact(hazard, health.as_deref_mut())
        else {
            continue;
        };

        if consume_hazard {
            commands.entity(contact.hazard).despawn();
        }

        let remaining = health.as_deref().map_or(0.0, Health::current);
        debug!(
            "Hazard hit: damage={:.1}, remaining={:.1}",
            damage.dealt, remaining
        );
        damage_events.write(PlayerDamagedEvent {
            entity: contact.player,
            amount: damage.dealt,
            remaining,
        });

        if damage.killed {
            info!("Player died");
            death_events.write(PlayerDiedEvent {
                entity: contact.player,
            });
        }
    }
}

pub(crate) fn regenerate_health(time: Res<Time>, mut query: Query<&mut Health>) {
    let dt = time.delta_secs();

    for mut health in &mut query {
        health.tick_regen(dt);
    }
}
