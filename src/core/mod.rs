//! Core domain: run flow plugin wiring and public exports.

mod state;
mod systems;

pub use state::GameState;

use bevy::prelude::*;

use crate::core::systems::{
    follow_player, handle_player_death, setup_scene, transition_to_run,
};
use crate::movement::MovementSet;

/// Camera that trails the player at a fixed offset.
#[derive(Component, Debug)]
pub struct CameraFollow {
    pub offset: Vec3,
    pub move_speed: f32,
}

pub struct CorePlugin;

impl Plugin for CorePlugin {
    fn build(&self, app: &mut App) {
        app.init_state::<GameState>()
            .add_systems(Startup, (setup_scene, transition_to_run))
            .add_systems(Update, handle_player_death.run_if(in_state(GameState::Run)))
            .add_systems(Update, follow_player.after(MovementSet));
    }
}
