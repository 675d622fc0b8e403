//! Combat domain: damage and death notifications.

use bevy::ecs::message::Message;
use bevy::prelude::*;

/// Emitted on an accepted hazard hit.
#[derive(Debug)]
pub struct PlayerDamagedEvent {
    pub entity: Entity,
    pub amount: f32,
    pub remaining: f32,
}

impl Message for PlayerDamagedEvent {}

/// Emitted once, on the hit that kills the player.
#[derive(Debug)]
pub struct PlayerDiedEvent {
    pub entity: Entity,
}

impl Message for PlayerDiedEvent {}

/// A hazard touched a player; routed from physics contacts.
#[derive(Debug, Clone, Copy)]
pub struct HazardContact {
    pub hazard: Entity,
    pub player: Entity,
}

impl Message for HazardContact {}
