mod generate;
mod level;
mod modinfo;
mod players;

pub use generate::cmd_generate;
pub use level::cmd_level;
pub use modinfo::cmd_modinfo;
pub use players::cmd_players;

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use modscript_lib::ScriptError;

/// Read a script or record file.
fn read_source(path: &Path) -> Result<String> {
    fs::read_to_string(path).with_context(|| format!("Failed to read {}", path.display()))
}

/// A one-line diagnostic telling the user what kind of mistake the script has.
fn diagnose(err: &ScriptError, path: &Path) -> String {
    match err {
        ScriptError::MissingSection { section } => {
            format!("{} is missing the '{}' section", path.display(), section)
        }
        ScriptError::ExecutionLimit { .. } => format!("{} ran too long and was stopped", path.display()),
        ScriptError::Execution { .. } => format!("{} has an error and could not be run", path.display()),
        ScriptError::Sandbox(_) => "Failed to prepare the script sandbox".to_string(),
    }
}
