//! Movement domain: input sampling for locomotion.

use bevy::prelude::*;

use crate::movement::{MovementInput, MovementKey, MovementKeyEvent};

const BINDINGS: [(MovementKey, KeyCode); 7] = [
    (MovementKey::Forward, KeyCode::KeyW),
    (MovementKey::TurnLeft, KeyCode::KeyA),
    (MovementKey::TurnRight, KeyCode::KeyD),
    (MovementKey::Jump, KeyCode::Space),
    (MovementKey::Vault, KeyCode::KeyF),
    (MovementKey::Dash, KeyCode::KeyE),
    (MovementKey::Slide, KeyCode::KeyS),
];

/// Queue key transitions; the controller consumes them on its next tick.
pub(crate) fn read_input(keyboard: Res<ButtonInput<KeyCode>>, mut input: ResMut<MovementInput>) {
    for (key, code) in BINDINGS {
        if keyboard.just_pressed(code) {
            input.pending.push(MovementKeyEvent::down(key));
        }
        if keyboard.just_released(code) {
            input.pending.push(MovementKeyEvent::up(key));
        }
    }
}
