//! Content domain: tuning data loaded from RON at startup.

mod data;
mod loader;
mod validation;

#[cfg(test)]
mod tests;

pub use data::{HazardTuning, HealthTuning, StaminaTuning, TuningFile};
pub use loader::{ContentLoadError, load_tuning, parse_tuning};
pub use validation::{ValidationError, validate_tuning};

use bevy::prelude::*;
use std::path::Path;

/// Location of the tuning file, relative to the working directory.
pub const TUNING_PATH: &str = "assets/data/tuning.ron";

pub struct ContentPlugin;

impl Plugin for ContentPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(PreStartup, load_tuning_content);
    }
}

/// Load, validate and install tuning resources. Any failure falls back to the
/// built-in defaults so the game still starts.
fn load_tuning_content(mut commands: Commands) {
    let tuning = resolve_tuning(Path::new(TUNING_PATH));

    commands.insert_resource(tuning.movement);
    commands.insert_resource(tuning.stamina);
    commands.insert_resource(tuning.health);
    commands.insert_resource(tuning.hazards);
}

pub(crate) fn resolve_tuning(path: &Path) -> TuningFile {
    let tuning = match load_tuning(path) {
        Ok(tuning) => tuning,
        Err(e) => {
            warn!("{}; using default tuning", e);
            return TuningFile::default();
        }
    };

    let errors = validate_tuning(&tuning);
    if !errors.is_empty() {
        for error in &errors {
            warn!("Tuning validation: {}", error);
        }
        warn!(
            "{} tuning error(s) in {}; using default tuning",
            errors.len(),
            path.display()
        );
        return TuningFile::default();
    }

    info!(
        "Loaded tuning from {} (schema v{})",
        path.display(),
        tuning.schema_version
    );
    tuning
}
