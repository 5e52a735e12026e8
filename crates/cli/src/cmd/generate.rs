//! Implementation of the `modscript generate` command.
//!
//! Reads a JSON level record (the output of `modscript level`, possibly edited)
//! and writes a `leveldataoverride.lua` the game can load.

use std::path::Path;

use anyhow::{Context, Result};

use modscript_lib::{Dialect, LevelOverrides, generate_level_overrides};

use super::read_source;
use crate::output::emit;

pub fn cmd_generate(file: &Path, dialect: Dialect, output: Option<&Path>) -> Result<()> {
    let json = read_source(file)?;
    let record: LevelOverrides =
        serde_json::from_str(&json).with_context(|| format!("Failed to parse level record: {}", file.display()))?;

    emit(&generate_level_overrides(&record, dialect), output)
}
