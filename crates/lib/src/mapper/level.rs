//! Mapping of a returned `leveldataoverride.lua` table onto [`LevelOverrides`].

use mlua::prelude::*;
use tracing::trace;

use crate::consts::RETURN_SECTION;
use crate::error::{Result, ScriptError};
use crate::lua::access::{FieldAccess, as_string, entries, number_list, string_list};
use crate::lua::classify;
use crate::record::{LevelOverrides, OverrideItem};

/// Build [`LevelOverrides`] from the table a level script returns.
pub fn map_level_overrides(root: &LuaValue) -> Result<LevelOverrides> {
  let LuaValue::Table(t) = root else {
    return Err(ScriptError::missing_section(RETURN_SECTION));
  };

  let strings = |key: &str| t.table(key).map(|l| string_list(&l)).unwrap_or_default();

  let overrides = LevelOverrides {
    id: t.string("id"),
    name: t.string("name"),
    desc: t.string("desc"),
    version: t.float("version"),
    location: t.string("location"),
    playstyle: t.string("playstyle"),
    hideminimap: t.boolean("hideminimap"),
    max_playlist_position: t.float("max_playlist_position"),
    min_playlist_position: t.float("min_playlist_position"),
    numrandom_set_pieces: t.int("numrandom_set_pieces"),
    override_level_string: t.boolean("override_level_string"),

    settings_id: t.string("settings_id"),
    settings_name: t.string("settings_name"),
    settings_desc: t.string("settings_desc"),

    worldgen_id: t.string("worldgen_id"),
    worldgen_name: t.string("worldgen_name"),
    worldgen_desc: t.string("worldgen_desc"),

    overrides: t.table("overrides").map(|o| map_overrides(&o)).unwrap_or_default(),
    random_set_pieces: strings("random_set_pieces"),
    required_prefabs: strings("required_prefabs"),
    required_setpieces: strings("required_setpieces"),
    substitutes: strings("substitutes"),
    background_node_range: t
      .table("background_node_range")
      .map(|l| number_list(&l))
      .unwrap_or_default(),
  };

  trace!(id = %overrides.id, overrides = overrides.overrides.len(), "mapped level overrides");
  Ok(overrides)
}

/// Map the free-form `overrides` table. Entries whose value is not a scalar are skipped.
pub fn map_overrides(table: &LuaTable) -> Vec<OverrideItem> {
  entries(table)
    .into_iter()
    .filter_map(|(name, value)| {
      Some(OverrideItem {
        name: as_string(&name)?,
        value: classify(&value)?,
      })
    })
    .collect()
}
