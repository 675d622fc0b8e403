//! Movement domain: parkour controller plugin wiring and public exports.

mod bootstrap;
mod components;
mod controller;
#[cfg(feature = "dev-tools")]
mod dev;
mod motion;
pub mod physics;
mod resources;
mod systems;
mod vault;


pub use components::{AnimationIntent, GameLayer, Ground, GroundContact, ObstacleKind, Player, Wall};
pub use controller::{
    ContactOutcome, FrameContext, Intent, MotionFrame, MovementController, MovementState,
    WallRunLock,
};
pub use resources::{KeyAction, MovementInput, MovementKey, MovementKeyEvent, MovementTuning};

use bevy::prelude::*;

use crate::core::GameState;
use crate::movement::bootstrap::spawn_player;
use crate::movement::systems::{detect_ground, drive_controllers, halt_players, read_input};

/// Systems that advance the player's locomotion each frame. Anything reading
/// the player's pose or contacts orders itself after this set.
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub struct MovementSet;

pub struct MovementPlugin;

impl Plugin for MovementPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<MovementInput>()
            .add_systems(Startup, spawn_player)
            .add_systems(
                Update,
                (read_input, detect_ground, drive_controllers)
                    .chain()
                    .in_set(MovementSet)
                    .run_if(in_state(GameState::Run)),
            )
            .add_systems(OnEnter(GameState::GameOver), halt_players);

        #[cfg(feature = "dev-tools")]
        app.add_systems(Startup, dev::spawn_test_course);
    }
}
