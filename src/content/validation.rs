//! Range checks for loaded tuning values.

use super::data::TuningFile;

/// A tuning value outside its allowed range.
#[derive(Debug)]
pub struct ValidationError {
    pub section: &'static str,
    pub field: &'static str,
    pub value: f32,
    pub expected: &'static str,
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}.{} = {} but must be {}",
            self.section, self.field, self.value, self.expected
        )
    }
}

macro_rules! check {
    ($errors:expr, $section:expr, $field:expr, $value:expr, $ok:expr, $expected:expr) => {
        if !$ok {
            $errors.push(ValidationError {
                section: $section,
                field: $field,
                value: $value,
                expected: $expected,
            });
        }
    };
}

macro_rules! positive {
    ($errors:expr, $section:expr, $owner:expr, $($field:ident),+) => {
        $(check!($errors, $section, stringify!($field), $owner.$field, $owner.$field > 0.0, "> 0");)+
    };
}

macro_rules! non_negative {
    ($errors:expr, $section:expr, $owner:expr, $($field:ident),+) => {
        $(check!($errors, $section, stringify!($field), $owner.$field, $owner.$field >= 0.0, ">= 0");)+
    };
}

/// Validate every section. Returns an empty list when the tuning is usable.
pub fn validate_tuning(tuning: &TuningFile) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    let movement = &tuning.movement;
    positive!(
        errors,
        "movement",
        movement,
        max_speed,
        acceleration,
        turn_rate,
        jump_impulse,
        gravity_step,
        dash_distance,
        dash_duration,
        vault_range,
        vault_duration,
        body_half_height,
        wall_probe_range,
        lean_speed,
        lean_epsilon
    );
    non_negative!(
        errors,
        "movement",
        movement,
        dash_cooldown,
        vault_delay,
        vault_forward_offset,
        vault_ray_height,
        damage_cooldown,
        slide_speed,
        lean_angle_max,
        run_cost,
        jump_cost,
        vault_cost,
        dash_cost,
        slide_cost
    );
    check!(
        errors,
        "movement",
        "ground_stick_velocity",
        movement.ground_stick_velocity,
        movement.ground_stick_velocity < 0.0,
        "< 0"
    );
    check!(
        errors,
        "movement",
        "slide_speed",
        movement.slide_speed,
        movement.slide_speed <= movement.max_speed,
        "<= max_speed"
    );
    check!(
        errors,
        "movement",
        "slide_height",
        movement.slide_height,
        movement.slide_height > 0.0 && movement.slide_height <= 1.0,
        "in (0, 1]"
    );

    let stamina = &tuning.stamina;
    positive!(errors, "stamina", stamina, max);
    non_negative!(errors, "stamina", stamina, regen_rate, regen_delay);

    let health = &tuning.health;
    positive!(errors, "health", health, max_hp);
    non_negative!(errors, "health", health, regen_rate, regen_delay);

    let hazards = &tuning.hazards;
    non_negative!(errors, "hazards", hazards, obstacle_damage, projectile_damage);

    errors
}
