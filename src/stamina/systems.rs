//! Stamina domain: passive refill.

use bevy::prelude::*;

use crate::movement::{MovementController, Player};
use crate::stamina::Stamina;

pub(crate) fn regenerate_stamina(
    time: Res<Time>,
    mut query: Query<(&mut Stamina, &MovementController), With<Player>>,
) {
    let dt = time.delta_secs();

    for (mut stamina, controller) in &mut query {
        if controller.holds_stamina_regen() {
            stamina.hold_regen();
            continue;
        }
        stamina.tick_regen(dt);
    }
}
