//! Combat domain: unit tests for health and hazard intake.

use bevy::ecs::message::{MessageReader, MessageWriter};
use bevy::prelude::*;

use super::systems::apply_hazard_contacts;
use super::{Hazard, HazardContact, Health, PlayerDamagedEvent, PlayerDiedEvent};
use crate::movement::{MovementController, MovementTuning, Player};

#[test]
fn test_damage_clamps_and_kills_once() {
    let mut health = Health::new(100.0).with_current(30.0);

    let outcome = health.take_damage(40.0);
    assert_eq!(outcome.dealt, 30.0);
    assert!(outcome.killed);
    assert_eq!(health.current(), 0.0);
    assert!(health.is_dead());

    let outcome = health.take_damage(10.0);
    assert_eq!(outcome.dealt, 0.0);
    assert!(!outcome.killed);
    assert_eq!(health.current(), 0.0);
}

#[test]
fn test_dead_cannot_heal() {
    let mut health = Health::new(50.0);
    health.take_damage(50.0);

    assert_eq!(health.heal(20.0), 0.0);
    assert_eq!(health.current(), 0.0);
    assert!(health.is_dead());
}

#[test]
fn test_negative_damage_and_heal_are_ignored() {
    let mut health = Health::new(50.0).with_current(20.0);

    assert_eq!(health.take_damage(-5.0).dealt, 0.0);
    assert_eq!(health.heal(-5.0), 0.0);
    assert_eq!(health.current(), 20.0);
}

#[test]
fn test_heal_clamps_to_max() {
    let mut health = Health::new(50.0).with_current(45.0);

    assert_eq!(health.heal(20.0), 5.0);
    assert_eq!(health.current(), 50.0);
    assert_eq!(health.percent(), 1.0);
}

#[test]
fn test_regen_waits_for_delay_and_stops_at_max() {
    let mut health = Health::new(100.0);
    health.auto_regen = true;
    health.regen_rate = 10.0;
    health.regen_delay = 1.0;
    health.take_damage(15.0);

    health.tick_regen(0.5);
    assert_eq!(health.current(), 85.0);

    health.tick_regen(0.5);
    assert_eq!(health.current(), 90.0);

    health.tick_regen(5.0);
    assert_eq!(health.current(), 100.0);
}

#[test]
fn test_regen_off_while_dead() {
    let mut health = Health::new(10.0);
    health.auto_regen = true;
    health.regen_rate = 10.0;
    health.take_damage(10.0);

    health.tick_regen(10.0);
    assert_eq!(health.current(), 0.0);

    health.revive(Some(4.0));
    assert!(!health.is_dead());
    assert_eq!(health.current(), 4.0);
}

#[derive(Resource, Default)]
struct Outbox(Vec<HazardContact>);

#[derive(Resource, Default)]
struct Tally {
    damaged: usize,
    died: usize,
}

fn flush_outbox(mut outbox: ResMut<Outbox>, mut contacts: MessageWriter<HazardContact>) {
    for contact in outbox.0.drain(..) {
        contacts.write(contact);
    }
}

fn tally_messages(
    mut damaged: MessageReader<PlayerDamagedEvent>,
    mut died: MessageReader<PlayerDiedEvent>,
    mut tally: ResMut<Tally>,
) {
    tally.damaged += damaged.read().count();
    tally.died += died.read().count();
}

fn contact_app() -> App {
    let mut app = App::new();
    app.add_message::<HazardContact>()
        .add_message::<PlayerDamagedEvent>()
        .add_message::<PlayerDiedEvent>()
        .init_resource::<Outbox>()
        .init_resource::<Tally>()
        .add_systems(
            Update,
            (flush_outbox, apply_hazard_contacts, tally_messages).chain(),
        );
    app
}

fn spawn_player(app: &mut App, hp: f32) -> Entity {
    app.world_mut()
        .spawn((
            Player,
            MovementController::new(MovementTuning::default()),
            Health::new(100.0).with_current(hp),
        ))
        .id()
}

#[test]
fn test_lethal_contact_notifies_death_once() {
    let mut app = contact_app();
    let player = spawn_player(&mut app, 30.0);
    let hazard = app
        .world_mut()
        .spawn(Hazard {
            damage: 40.0,
            consumable: false,
        })
        .id();
    let contact = HazardContact { hazard, player };
    app.world_mut().resource_mut::<Outbox>().0 = vec![contact, contact];

    app.update();

    let tally = app.world().resource::<Tally>();
    assert_eq!(tally.damaged, 1);
    assert_eq!(tally.died, 1);
    let health = app.world().get::<Health>(player);
    assert!(health.is_some_and(Health::is_dead));
}

#[test]
fn test_projectile_is_consumed_on_hit() {
    let mut app = contact_app();
    let player = spawn_player(&mut app, 100.0);
    let projectile = app
        .world_mut()
        .spawn(Hazard {
            damage: 10.0,
            consumable: true,
        })
        .id();
    app.world_mut().resource_mut::<Outbox>().0 = vec![HazardContact {
        hazard: projectile,
        player,
    }];

    app.update();

    assert!(app.world().get::<Hazard>(projectile).is_none());
    let health = app.world().get::<Health>(player).map(Health::current);
    assert_eq!(health, Some(90.0));
    assert_eq!(app.world().resource::<Tally>().died, 0);
}

#[test]
fn test_contact_without_health_is_ignored() {
    let mut app = contact_app();
    let player = app
        .world_mut()
        .spawn((Player, MovementController::new(MovementTuning::default())))
        .id();
    let hazard = app
        .world_mut()
        .spawn(Hazard {
            damage: 10.0,
            consumable: true,
        })
        .id();
    app.world_mut().resource_mut::<Outbox>().0 = vec![HazardContact { hazard, player }];

    app.update();

    assert_eq!(app.world().resource::<Tally>().damaged, 0);
    assert!(app.world().get::<Hazard>(hazard).is_some());
}
