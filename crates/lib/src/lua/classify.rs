use mlua::prelude::*;

use crate::record::OptionValue;

/// Classify a scalar by its runtime tag: boolean, then number, then string.
///
/// Tables, functions, `nil` and the rest yield `None`; callers skip such
/// entries. Numeric-looking strings stay strings.
pub fn classify(value: &LuaValue) -> Option<OptionValue> {
  match value {
    LuaValue::Boolean(b) => Some(OptionValue::Bool(*b)),
    LuaValue::Integer(i) => Some(OptionValue::Number(*i as f64)),
    LuaValue::Number(n) => Some(OptionValue::Number(*n)),
    LuaValue::String(s) => Some(OptionValue::String(s.to_string_lossy().into())),
    _ => None,
  }
}
