//! Movement domain: cooperative timed motions (vault and dash).
//!
//! A task waits out its delay, captures the body position, then moves it
//! linearly to the target over `duration`. Nothing here blocks; the owner
//! advances the queue once per frame and reacts to the completions it gets back.

use bevy::prelude::*;

/// What a finished motion should trigger.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MotionKind {
    Vault,
    Dash,
}

#[derive(Debug, Clone)]
pub struct TimedMotion {
    pub kind: MotionKind,
    pub target: Vec3,
    pub delay: f32,
    pub duration: f32,
    elapsed: f32,
    start: Option<Vec3>,
}

impl TimedMotion {
    pub fn new(kind: MotionKind, target: Vec3, delay: f32, duration: f32) -> Self {
        Self {
            kind,
            target,
            delay: delay.max(0.0),
            duration: duration.max(0.0),
            elapsed: 0.0,
            start: None,
        }
    }

    /// Step the task. Returns true once the body has reached the target.
    fn advance(&mut self, dt: f32, translation: &mut Vec3) -> bool {
        self.elapsed += dt;
        if self.elapsed < self.delay {
            return false;
        }
        let start = *self.start.get_or_insert(*translation);
        let moving = self.elapsed - self.delay;
        if self.duration <= 0.0 || moving >= self.duration {
            *translation = self.target;
            return true;
        }
        *translation = start.lerp(self.target, moving / self.duration);
        false
    }
}

#[derive(Debug, Clone, Default)]
pub struct MotionQueue {
    tasks: Vec<TimedMotion>,
}

impl MotionQueue {
    pub fn push(&mut self, motion: TimedMotion) {
        self.tasks.push(motion);
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    pub fn contains(&self, kind: MotionKind) -> bool {
        self.tasks.iter().any(|task| task.kind == kind)
    }

    /// Advance every task by `dt`, returning the kinds that finished this step
    /// in the order they were queued.
    pub fn advance(&mut self, dt: f32, translation: &mut Vec3) -> Vec<MotionKind> {
        let mut finished = Vec::new();
        self.tasks.retain_mut(|task| {
            if task.advance(dt, translation) {
                finished.push(task.kind);
                false
            } else {
                true
            }
        });
        finished
    }

    /// Drop in-flight tasks without reporting them as finished.
    pub fn cancel_all(&mut self) -> usize {
        let cancelled = self.tasks.len();
        self.tasks.clear();
        cancelled
    }
}
