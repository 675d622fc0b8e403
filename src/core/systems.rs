//! Core domain: run flow, scene setup and camera follow.

use bevy::ecs::message::MessageReader;
use bevy::prelude::*;

use crate::combat::PlayerDiedEvent;
use crate::core::CameraFollow;
use crate::core::state::GameState;
use crate::movement::Player;

pub(crate) fn transition_to_run(mut game_state: ResMut<NextState<GameState>>) {
    game_state.set(GameState::Run);
}

pub(crate) fn setup_scene(mut commands: Commands) {
    let offset = Vec3::new(0.0, 4.0, 8.0);
    commands.spawn((
        Camera3d::default(),
        Transform::from_translation(offset).looking_at(Vec3::ZERO, Vec3::Y),
        CameraFollow {
            offset,
            move_speed: 5.0,
        },
    ));
    commands.spawn((
        DirectionalLight {
            shadows_enabled: true,
            ..default()
        },
        Transform::from_xyz(4.0, 10.0, 4.0).looking_at(Vec3::ZERO, Vec3::Y),
    ));
}

/// Hand the run over to the game-over state on the first death notification.
pub(crate) fn handle_player_death(
    mut death_events: MessageReader<PlayerDiedEvent>,
    mut game_state: ResMut<NextState<GameState>>,
) {
    if let Some(event) = death_events.read().last() {
        info!("Run over: player {:?} died", event.entity);
        game_state.set(GameState::GameOver);
    }
}

pub(crate) fn follow_player(
    time: Res<Time>,
    player: Query<&Transform, (With<Player>, Without<CameraFollow>)>,
    mut cameras: Query<(&mut Transform, &CameraFollow)>,
) {
    let Ok(target) = player.single() else {
        return;
    };
    let dt = time.delta_secs();

    for (mut transform, follow) in &mut cameras {
        let desired = target.translation + follow.offset;
        let t = (follow.move_speed * dt).clamp(0.0, 1.0);
        transform.translation = transform.translation.lerp(desired, t);
        transform.look_at(target.translation, Vec3::Y);
    }
}
