//! Implementation of the `modscript level` command.

use std::path::Path;

use anyhow::Result;

use modscript_lib::parse_level_overrides;

use super::{diagnose, read_source};
use crate::output::{emit, to_json};

/// Parse a level overrides script and print it as JSON.
pub fn cmd_level(file: &Path, output: Option<&Path>) -> Result<()> {
    let source = read_source(file)?;
    let level = parse_level_overrides(&source).map_err(|e| {
        let message = diagnose(&e, file);
        anyhow::Error::new(e).context(message)
    })?;

    emit(&to_json(&level)?, output)
}
