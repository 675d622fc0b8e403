//! Movement domain: the authoritative locomotion state machine.
//!
//! One [`MovementController`] per character. Key events are applied as they
//! are drained, then [`MovementController::update`] runs exactly once per
//! frame. Resolution order inside `update` matters:
//!
//! 1. cooldowns and in-flight timed motions advance by `dt`
//! 2. Running / WallRunning fall back to Idle once stamina is gone
//! 3. unless vaulting or dashing, the movement pass runs: gravity, wall-run
//!    entry/exit, speed easing per branch, turning, then integration
//!
//! `is_sliding` and `is_dashing` are modifiers layered on top of
//! [`MovementState`], not states of their own. Slide height and speed capping
//! apply whatever the primary state is.

use bevy::prelude::*;

use crate::combat::{DamageOutcome, Hazard, Health};
use crate::movement::motion::{MotionKind, MotionQueue, TimedMotion};
use crate::movement::physics::{
    CharacterMotor, PhysicsQuery, WallProbe, WallSide, check_wall_contact_on_side,
    heading_from_yaw, probe_walls, wall_parallel_yaw,
};
use crate::movement::resources::{KeyAction, MovementKey, MovementKeyEvent};
use crate::movement::vault::VaultScan;
use crate::movement::{AnimationIntent, MovementTuning, ObstacleKind};
use crate::stamina::Stamina;

/// Below this, easing toward a stop snaps to exactly zero.
const SPEED_EPSILON: f32 = 0.01;

fn lerp(from: f32, to: f32, t: f32) -> f32 {
    from + (to - from) * t
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum MovementState {
    #[default]
    Idle,
    Walking,
    Running,
    Vaulting,
    Turning,
    Jumping,
    Sliding,
    WallRunning,
}

/// Intent derived from held keys.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Intent {
    /// 1 turns left, -1 turns right.
    pub turn_axis: i8,
    pub wants_run: bool,
}

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct MotionFrame {
    pub vertical_velocity: f32,
    pub horizontal_speed: f32,
    /// Rebuilt every movement pass, velocity in world units per second.
    pub movement_vector: Vec3,
}

/// Side and yaw captured once when a wall run starts.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct WallRunLock {
    pub side: WallSide,
    pub yaw: f32,
}

/// Collaborators borrowed for one call into the controller.
pub struct FrameContext<'a> {
    pub physics: &'a dyn PhysicsQuery,
    pub motor: &'a mut dyn CharacterMotor,
    pub transform: &'a mut Transform,
    pub stamina: Option<&'a mut Stamina>,
}

/// What happened when a hazard touched the character.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ContactOutcome {
    Ignored,
    Hit {
        damage: DamageOutcome,
        consume_hazard: bool,
    },
}

#[derive(Component, Debug, Clone)]
pub struct MovementController {
    tuning: MovementTuning,
    state: MovementState,
    intent: Intent,
    turn_left_held: bool,
    turn_right_held: bool,
    motion: MotionFrame,
    wall: WallProbe,
    wall_lock: WallRunLock,
    yaw: f32,
    lean: f32,
    body_scale_y: f32,
    is_sliding: bool,
    is_dashing: bool,
    dash_cooldown_remaining: f32,
    damage_cooldown_remaining: f32,
    motions: MotionQueue,
    animation: AnimationIntent,
}

impl MovementController {
    pub fn new(tuning: MovementTuning) -> Self {
        Self {
            tuning,
            state: MovementState::Idle,
            intent: Intent::default(),
            turn_left_held: false,
            turn_right_held: false,
            motion: MotionFrame::default(),
            wall: WallProbe::default(),
            wall_lock: WallRunLock::default(),
            yaw: 0.0,
            lean: 0.0,
            body_scale_y: 1.0,
            is_sliding: false,
            is_dashing: false,
            dash_cooldown_remaining: 0.0,
            damage_cooldown_remaining: 0.0,
            motions: MotionQueue::default(),
            animation: AnimationIntent::default(),
        }
    }

    pub fn with_yaw(mut self, yaw_degrees: f32) -> Self {
        self.yaw = yaw_degrees;
        self
    }

    pub fn state(&self) -> MovementState {
        self.state
    }

    pub fn intent(&self) -> Intent {
        self.intent
    }

    pub fn motion(&self) -> MotionFrame {
        self.motion
    }

    pub fn wall_lock(&self) -> WallRunLock {
        self.wall_lock
    }

    /// Live wall probe, refreshed on airborne frames.
    pub fn wall_probe(&self) -> WallProbe {
        self.wall
    }

    pub fn yaw(&self) -> f32 {
        self.yaw
    }

    pub fn lean(&self) -> f32 {
        self.lean
    }

    pub fn is_sliding(&self) -> bool {
        self.is_sliding
    }

    pub fn is_dashing(&self) -> bool {
        self.is_dashing
    }

    pub fn dash_cooldown_remaining(&self) -> f32 {
        self.dash_cooldown_remaining
    }

    pub fn can_take_damage(&self) -> bool {
        self.damage_cooldown_remaining <= 0.0
    }

    pub fn tuning(&self) -> &MovementTuning {
        &self.tuning
    }

    pub fn animation(&self) -> &AnimationIntent {
        &self.animation
    }

    /// Clear one-shot animation triggers after they have been published.
    pub fn clear_animation_triggers(&mut self) {
        self.animation.jump = false;
        self.animation.vault = false;
    }

    /// True while stamina is being spent continuously or a timed move is in flight.
    pub fn holds_stamina_regen(&self) -> bool {
        matches!(
            self.state,
            MovementState::Running | MovementState::WallRunning | MovementState::Vaulting
        ) || self.is_dashing
    }

    pub fn handle_key(&mut self, event: MovementKeyEvent, ctx: &mut FrameContext) {
        match event.action {
            KeyAction::Down => self.key_down(event.key, ctx),
            KeyAction::Up => self.key_up(event.key),
        }
    }

    fn key_down(&mut self, key: MovementKey, ctx: &mut FrameContext) {
        if self.state == MovementState::Vaulting || self.is_sliding {
            return;
        }
        let grounded = ctx.motor.is_grounded();

        match key {
            MovementKey::Forward => self.press_forward(ctx.stamina.as_deref(), grounded),
            MovementKey::TurnLeft => {
                self.turn_left_held = true;
                self.refresh_turn_intent();
            }
            MovementKey::TurnRight => {
                self.turn_right_held = true;
                self.refresh_turn_intent();
            }
            MovementKey::Jump if grounded => self.jump(ctx.stamina.as_deref_mut()),
            MovementKey::Vault if grounded => self.vault(ctx),
            MovementKey::Slide if grounded => self.start_slide(ctx.stamina.as_deref_mut()),
            MovementKey::Dash => self.dash(ctx),
            MovementKey::Jump | MovementKey::Vault | MovementKey::Slide => {}
        }
    }

    fn key_up(&mut self, key: MovementKey) {
        match key {
            MovementKey::Forward => {
                if self.state == MovementState::Running {
                    self.set_state(MovementState::Idle);
                } else {
                    self.intent.wants_run = false;
                }
            }
            MovementKey::TurnLeft => {
                self.turn_left_held = false;
                self.refresh_turn_intent();
            }
            MovementKey::TurnRight => {
                self.turn_right_held = false;
                self.refresh_turn_intent();
            }
            MovementKey::Slide if self.is_sliding => self.end_slide(),
            _ => {}
        }
    }

    fn refresh_turn_intent(&mut self) {
        self.intent.turn_axis = if self.turn_left_held {
            1
        } else if self.turn_right_held {
            -1
        } else {
            0
        };
        self.animation.turning = self.intent.turn_axis != 0;
    }

    fn set_state(&mut self, next: MovementState) {
        if self.state != next {
            debug!("Movement state: {:?} -> {:?}", self.state, next);
        }
        self.state = next;

        match next {
            MovementState::Idle => {
                self.intent.wants_run = false;
                self.animation.running = false;
            }
            MovementState::Running => {
                self.intent.wants_run = true;
                self.animation.running = true;
            }
            MovementState::Sliding => {
                self.intent.wants_run = false;
                self.animation.running = false;
                self.animation.sliding = true;
            }
            MovementState::WallRunning => {
                self.animation.running = true;
                self.wall_lock = WallRunLock {
                    side: self.wall.side,
                    yaw: wall_parallel_yaw(self.wall.normal, self.wall.side, self.yaw),
                };
                self.yaw = self.wall_lock.yaw;
                debug!(
                    "Wall run locked: side={}, yaw={:.1}",
                    self.wall_lock.side, self.wall_lock.yaw
                );
            }
            MovementState::Walking
            | MovementState::Vaulting
            | MovementState::Turning
            | MovementState::Jumping => {}
        }
    }

    fn press_forward(&mut self, stamina: Option<&Stamina>, grounded: bool) {
        if stamina.is_some_and(Stamina::is_exhausted) {
            return;
        }
        let on_foot = matches!(
            self.state,
            MovementState::Idle
                | MovementState::Walking
                | MovementState::Turning
                | MovementState::Running
        );
        if grounded && on_foot {
            self.set_state(MovementState::Running);
        } else {
            // Airborne: the landing picks this up.
            self.intent.wants_run = true;
        }
    }

    fn jump(&mut self, stamina: Option<&mut Stamina>) {
        let can_jump_from = matches!(
            self.state,
            MovementState::Idle | MovementState::Running | MovementState::Turning
        );
        if !can_jump_from || self.motion.horizontal_speed == 0.0 {
            return;
        }

        self.set_state(MovementState::Jumping);
        self.animation.jump = true;
        if let Some(stamina) = stamina {
            stamina.reduce(self.tuning.jump_cost);
        }
        self.motion.vertical_velocity =
            self.tuning.jump_impulse * (self.motion.horizontal_speed / self.tuning.max_speed);
    }

    fn vault(&mut self, ctx: &mut FrameContext) {
        if self.state == MovementState::Vaulting || self.is_dashing {
            return;
        }
        let position = ctx.transform.translation;
        let half_height = self.tuning.body_half_height * self.body_scale_y;
        let feet = position - Vec3::Y * half_height;
        let scan = VaultScan::new(self.tuning.vault_range);
        let ray_origin = feet + Vec3::Y * self.tuning.vault_ray_height;
        let Some(obstacle) = scan.obstacle_ahead(ctx.physics, ray_origin, self.yaw) else {
            return;
        };
        if obstacle.kind != ObstacleKind::Low {
            return;
        }

        self.set_state(MovementState::Idle);
        self.turn_left_held = false;
        self.turn_right_held = false;
        self.refresh_turn_intent();
        self.set_state(MovementState::Vaulting);
        self.animation.vault = true;

        let mut destination =
            position + heading_from_yaw(self.yaw) * self.tuning.vault_forward_offset;
        // Feet clear the obstacle origin by `vault_clearance`.
        destination.y = obstacle.origin.y + self.tuning.vault_clearance + half_height;

        if let Some(stamina) = ctx.stamina.as_deref_mut() {
            stamina.reduce(self.tuning.vault_cost);
        }
        self.motions.push(TimedMotion::new(
            MotionKind::Vault,
            destination,
            self.tuning.vault_delay,
            self.tuning.vault_duration,
        ));
        debug!("Vault started toward {:?}", destination);
    }

    fn dash(&mut self, ctx: &mut FrameContext) {
        if self.is_dashing
            || self.dash_cooldown_remaining > 0.0
            || self.state == MovementState::Vaulting
            || self.is_sliding
        {
            return;
        }
        let Some(stamina) = ctx.stamina.as_deref_mut() else {
            return;
        };
        if stamina.current() < self.tuning.dash_cost {
            return;
        }

        self.is_dashing = true;
        stamina.reduce(self.tuning.dash_cost);
        self.dash_cooldown_remaining = self.tuning.dash_cooldown;

        let target =
            ctx.transform.translation + heading_from_yaw(self.yaw) * self.tuning.dash_distance;
        self.motions.push(TimedMotion::new(
            MotionKind::Dash,
            target,
            0.0,
            self.tuning.dash_duration,
        ));
        debug!("Dash started toward {:?}", target);
    }

    fn start_slide(&mut self, stamina: Option<&mut Stamina>) {
        if self.is_sliding || self.state == MovementState::Vaulting {
            return;
        }
        if let Some(stamina) = stamina {
            stamina.reduce(self.tuning.slide_cost);
        }
        self.is_sliding = true;
        self.animation.sliding = true;
    }

    fn end_slide(&mut self) {
        self.is_sliding = false;
        self.set_state(MovementState::Idle);
        self.body_scale_y = 1.0;
        self.animation.sliding = false;
    }

    /// Cancel every in-flight timed motion without running its completion.
    /// A vault in progress ends in Idle; all carried motion is zeroed.
    pub fn halt(&mut self) {
        let cancelled = self.motions.cancel_all();
        if cancelled > 0 {
            debug!("Halted {} in-flight timed motion(s)", cancelled);
        }
        self.is_dashing = false;
        if self.state == MovementState::Vaulting {
            self.set_state(MovementState::Idle);
        }
        self.turn_left_held = false;
        self.turn_right_held = false;
        self.refresh_turn_intent();
        self.intent.wants_run = false;
        self.motion = MotionFrame::default();
    }

    /// Apply a hazard contact to `health`, subject to the damage cooldown.
    pub fn on_hazard_contact(
        &mut self,
        hazard: &Hazard,
        health: Option<&mut Health>,
    ) -> ContactOutcome {
        if !self.can_take_damage() || self.state == MovementState::Vaulting || self.is_sliding {
            return ContactOutcome::Ignored;
        }
        let Some(health) = health else {
            return ContactOutcome::Ignored;
        };

        let damage = health.take_damage(hazard.damage);
        self.damage_cooldown_remaining = self.tuning.damage_cooldown;
        ContactOutcome::Hit {
            damage,
            consume_hazard: hazard.consumable,
        }
    }

    pub fn update(&mut self, dt: f32, ctx: &mut FrameContext) {
        self.damage_cooldown_remaining = (self.damage_cooldown_remaining - dt).max(0.0);
        self.dash_cooldown_remaining = (self.dash_cooldown_remaining - dt).max(0.0);
        for finished in self.motions.advance(dt, &mut ctx.transform.translation) {
            self.finish_motion(finished);
        }

        let exhausted = ctx.stamina.as_deref().is_some_and(Stamina::is_exhausted);
        if exhausted
            && matches!(
                self.state,
                MovementState::Running | MovementState::WallRunning
            )
        {
            self.set_state(MovementState::Idle);
        }

        if self.state != MovementState::Vaulting && !self.is_dashing {
            self.handle_movement(dt, ctx);
        } else {
            self.motion.movement_vector = Vec3::ZERO;
        }

        self.write_pose(ctx.transform);
    }

    fn finish_motion(&mut self, kind: MotionKind) {
        match kind {
            MotionKind::Vault => self.set_state(MovementState::Idle),
            MotionKind::Dash => self.is_dashing = false,
        }
    }

    fn handle_movement(&mut self, dt: f32, ctx: &mut FrameContext) {
        let grounded = ctx.motor.is_grounded();
        let position = ctx.transform.translation;
        let range = self.tuning.wall_probe_range;

        self.apply_gravity(grounded);

        let has_run_stamina = ctx
            .stamina
            .as_deref()
            .is_some_and(|stamina| stamina.current() >= self.tuning.run_cost);

        if self.state == MovementState::Jumping && !grounded {
            self.wall = probe_walls(ctx.physics, position, self.yaw, range);
            if self.wall.found() && has_run_stamina && self.motion.horizontal_speed > 0.0 {
                self.set_state(MovementState::WallRunning);
            }
        }

        if self.state == MovementState::WallRunning {
            // Only the locked side decides the exit.
            self.wall = probe_walls(ctx.physics, position, self.yaw, range);
            let contact = check_wall_contact_on_side(
                ctx.physics,
                position,
                self.yaw,
                range,
                self.wall_lock.side,
            );
            if grounded {
                self.land();
            } else if !contact || !has_run_stamina {
                self.set_state(MovementState::Jumping);
            }
        }

        if self.is_sliding {
            let target = if self.is_locomoting() {
                self.tuning.slide_speed
            } else {
                0.0
            };
            self.ease_speed(target, dt);
            self.body_scale_y = self.tuning.slide_height;
            self.reset_lean(dt);
            self.drain_while_running(ctx.stamina.as_deref_mut(), dt);
        } else if self.state == MovementState::WallRunning {
            self.ease_speed(self.tuning.max_speed, dt);
            self.motion.vertical_velocity = 0.0;
            if let Some(stamina) = ctx.stamina.as_deref_mut() {
                stamina.reduce(self.tuning.run_cost * dt);
            }
            self.yaw = self.wall_lock.yaw;
            self.update_lean(dt);
        } else {
            self.reset_lean(dt);
            let target = if self.is_locomoting() {
                self.tuning.max_speed
            } else {
                0.0
            };
            self.ease_speed(target, dt);
            self.drain_while_running(ctx.stamina.as_deref_mut(), dt);
        }

        self.motion.movement_vector = heading_from_yaw(self.yaw) * self.motion.horizontal_speed
            + Vec3::Y * self.motion.vertical_velocity;
        self.animation.speed_ratio = self.motion.horizontal_speed / self.tuning.max_speed;

        self.turn(grounded, dt);

        if self.motion.movement_vector.length_squared() > 0.0 {
            ctx.motor.move_by(self.motion.movement_vector * dt);
        }
    }

    fn drain_while_running(&self, stamina: Option<&mut Stamina>, dt: f32) {
        if self.state != MovementState::Running {
            return;
        }
        if let Some(stamina) = stamina {
            stamina.reduce(self.tuning.run_cost * dt);
        }
    }

    fn is_locomoting(&self) -> bool {
        matches!(
            self.state,
            MovementState::Running | MovementState::WallRunning | MovementState::Jumping
        )
    }

    fn apply_gravity(&mut self, grounded: bool) {
        if self.state == MovementState::Vaulting || self.is_sliding {
            return;
        }
        if !grounded {
            self.motion.vertical_velocity -= self.tuning.gravity_step;
            return;
        }
        let settled =
            self.motion.vertical_velocity == 0.0 && self.state == MovementState::Jumping;
        if self.motion.vertical_velocity < 0.0 || settled {
            self.land();
        }
    }

    /// Touch down: stick to the floor, then carry on running only if forward is held.
    fn land(&mut self) {
        self.motion.vertical_velocity = self.tuning.ground_stick_velocity;
        if self.intent.wants_run {
            if self.state != MovementState::Running {
                self.set_state(MovementState::Running);
            }
        } else if matches!(
            self.state,
            MovementState::Jumping | MovementState::WallRunning
        ) {
            self.set_state(MovementState::Idle);
        }
    }

    fn ease_speed(&mut self, target: f32, dt: f32) {
        let t = (self.tuning.acceleration * dt).clamp(0.0, 1.0);
        let speed = lerp(self.motion.horizontal_speed, target, t);
        self.motion.horizontal_speed = if target == 0.0 && speed.abs() < SPEED_EPSILON {
            0.0
        } else {
            speed
        };
    }

    fn turn(&mut self, grounded: bool, dt: f32) {
        if !grounded || self.is_sliding || self.intent.turn_axis == 0 {
            return;
        }
        self.yaw += self.tuning.turn_rate * f32::from(self.intent.turn_axis) * dt;
    }

    fn update_lean(&mut self, dt: f32) {
        let target = f32::from(self.wall.side) * self.tuning.lean_angle_max;
        let t = (self.tuning.lean_speed * dt).clamp(0.0, 1.0);
        self.lean = lerp(self.lean, target, t);
    }

    fn reset_lean(&mut self, dt: f32) {
        if self.lean.abs() < self.tuning.lean_epsilon {
            self.lean = 0.0;
            return;
        }
        let t = (self.tuning.lean_speed * dt).clamp(0.0, 1.0);
        self.lean = lerp(self.lean, 0.0, t);
    }

    fn write_pose(&self, transform: &mut Transform) {
        transform.rotation = Quat::from_euler(
            EulerRot::YXZ,
            self.yaw.to_radians(),
            0.0,
            self.lean.to_radians(),
        );
        transform.scale.y = self.body_scale_y;
    }
}
