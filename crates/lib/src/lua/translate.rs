use mlua::prelude::*;

/// Pick the entry of `alternatives` for `locale`.
///
/// Anything that is not a non-empty table comes back unchanged. Otherwise the
/// entry keyed by `locale` wins, falling back to the first positional entry.
pub fn choose_translation(locale: &str, alternatives: LuaValue) -> LuaResult<LuaValue> {
  let table = match alternatives {
    LuaValue::Table(ref t) if !is_empty(t) => t,
    other => return Ok(other),
  };

  let localized: LuaValue = table.raw_get(locale)?;
  if !localized.is_nil() {
    return Ok(localized);
  }
  table.raw_get(1)
}

fn is_empty(table: &LuaTable) -> bool {
  table.clone().pairs::<LuaValue, LuaValue>().next().is_none()
}

/// Build the `ChooseTranslationTable` callback bound to `locale`.
///
/// ```lua
/// name = ChooseTranslationTable({ "Big Backpack", zh = "大背包" })
/// ```
pub fn create_translation_function(lua: &Lua, locale: &str) -> LuaResult<LuaFunction> {
  let locale = locale.to_string();
  lua.create_function(move |_, alternatives: LuaValue| choose_translation(&locale, alternatives))
}
