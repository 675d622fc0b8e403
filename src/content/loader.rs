//! Loader for RON tuning files at startup.

use ron::Options;
use std::fs;
use std::path::Path;

use super::data::TuningFile;

/// Error type for content loading failures.
#[derive(Debug)]
pub struct ContentLoadError {
    pub file: String,
    pub message: String,
}

impl std::fmt::Display for ContentLoadError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Failed to load {}: {}", self.file, self.message)
    }
}

/// Create RON options with extensions enabled for more flexible parsing.
fn ron_options() -> Options {
    Options::default().with_default_extension(ron::extensions::Extensions::IMPLICIT_SOME)
}

/// Parse tuning from RON text. `source` names the origin in error messages.
pub fn parse_tuning(source: &str, contents: &str) -> Result<TuningFile, ContentLoadError> {
    ron_options()
        .from_str(contents)
        .map_err(|e| ContentLoadError {
            file: source.to_string(),
            message: format!("Parse error: {}", e),
        })
}

/// Load `tuning.ron` from disk.
pub fn load_tuning(path: &Path) -> Result<TuningFile, ContentLoadError> {
    let file_name = path.display().to_string();
    let contents = fs::read_to_string(path).map_err(|e| ContentLoadError {
        file: file_name.clone(),
        message: format!("IO error: {}", e),
    })?;

    parse_tuning(&file_name, &contents)
}
