//! Movement domain: system modules for locomotion updates.

pub(crate) mod collisions;
pub(crate) mod controller;
pub(crate) mod input;

pub(crate) use collisions::detect_ground;
pub(crate) use controller::{drive_controllers, halt_players};
pub(crate) use input::read_input;
