//! Implementation of the `modscript players` command.

use std::path::Path;

use anyhow::Result;

use modscript_lib::playerlist;

use super::read_source;
use crate::output::{emit, to_json};

pub fn cmd_players(file: &Path) -> Result<()> {
    let ids = playerlist::parse(&read_source(file)?);
    emit(&to_json(&ids)?, None)
}
