//! Mapping of `modinfo.lua` globals onto [`ModInfo`].

use mlua::prelude::*;
use tracing::{trace, warn};

use crate::consts::OPTIONS_SECTION;
use crate::error::{Result, ScriptError};
use crate::lua::access::{FieldAccess, as_string, entries, string_list};
use crate::lua::classify;
use crate::record::{ModInfo, ModOption, ModOptionItem};

/// Build a [`ModInfo`] from the global table of an executed manifest.
///
/// Fails only when `configuration_options` is absent; a present but empty
/// table yields no options.
pub fn map_mod_info(root: &LuaValue) -> Result<ModInfo> {
  let LuaValue::Table(g) = root else {
    return Err(ScriptError::missing_section("globals"));
  };

  let mut info = ModInfo {
    id: g.string("id"),
    name: g.string("name"),
    description: g.string("description"),
    author: g.string("author"),
    version: g.string("version"),
    forum_thread: g.string("forum_thread"),

    api_version: g.int("api_version"),
    dont_starve_compatible: g.boolean("dont_starve_compatible"),
    reign_of_giants_compatible: g.boolean("reign_of_giants_compatible"),
    shipwrecked_compatible: g.boolean("shipwrecked_compatible"),
    hamlet_compatible: g.boolean("hamlet_compatible"),

    api_version_dst: g.int("api_version_dst"),
    dst_compatible: g.boolean("dst_compatible"),
    all_clients_require_mod: g.boolean("all_clients_require_mod"),
    client_only_mod: g.boolean("client_only_mod"),
    server_only_mod: g.boolean("server_only_mod"),
    forge_compatible: g.boolean("forge_compatible"),

    server_filter_tags: g.table("server_filter_tags").map(|t| string_list(&t)).unwrap_or_default(),
    priority: g.float("priority"),
    icon: g.string("icon"),
    icon_atlas: g.string("icon_atlas"),

    configuration_options: Vec::new(),
  };

  let options = g
    .table(OPTIONS_SECTION)
    .ok_or_else(|| ScriptError::missing_section(OPTIONS_SECTION))?;
  info.configuration_options = map_options(&options);

  trace!(name = %info.name, options = info.configuration_options.len(), "mapped mod info");
  Ok(info)
}

/// Map every table entry of `configuration_options`; other entries are skipped.
pub fn map_options(options: &LuaTable) -> Vec<ModOption> {
  let mut mapped = Vec::new();

  for (index, entry) in entries(options) {
    let option = match entry {
      LuaValue::Table(option) => option,
      other => {
        warn!(
          index = %as_string(&index).unwrap_or_default(),
          kind = other.type_name(),
          "skipping malformed configuration option"
        );
        continue;
      }
    };

    mapped.push(ModOption {
      name: option.string("name"),
      label: option.string("label"),
      hover: option.string("hover"),
      default: classify(&option.value("default")),
      client: option.boolean("client"),
      tags: option.table("tags").map(|t| string_list(&t)).unwrap_or_default(),
      options: option.table("options").map(|t| map_option_items(&t)).unwrap_or_default(),
    });
  }

  mapped
}

/// Map the selectable values of one option.
///
/// An item without a description is described by its data's text.
pub fn map_option_items(items: &LuaTable) -> Vec<ModOptionItem> {
  entries(items)
    .into_iter()
    .filter_map(|(_, item)| match item {
      LuaValue::Table(item) => Some(item),
      _ => None,
    })
    .map(|item| {
      let data = classify(&item.value("data"));
      let mut description = item.string("description");
      if description.is_empty() {
        description = data.as_ref().map(ToString::to_string).unwrap_or_default();
      }
      ModOptionItem { description, data }
    })
    .collect()
}
