//! Permissive typed reads over Lua tables.
//!
//! Every getter degrades to the type's zero value when the key is absent or
//! holds something that cannot be converted. Mapping code reads optional
//! keys without checking for them first.

use mlua::prelude::*;

/// Project a value to text. Numbers are rendered, everything else is `None`.
pub fn as_string(value: &LuaValue) -> Option<String> {
  match value {
    LuaValue::String(s) => Some(s.to_string_lossy().into()),
    LuaValue::Integer(i) => Some(i.to_string()),
    LuaValue::Number(n) => Some(n.to_string()),
    _ => None,
  }
}

/// Project a value to a boolean. Only real booleans convert.
pub fn as_bool(value: &LuaValue) -> Option<bool> {
  match value {
    LuaValue::Boolean(b) => Some(*b),
    _ => None,
  }
}

/// Project a value to a float, coercing numeric strings the way Lua does.
pub fn as_f64(value: &LuaValue) -> Option<f64> {
  match value {
    LuaValue::Integer(i) => Some(*i as f64),
    LuaValue::Number(n) => Some(*n),
    LuaValue::String(s) => s.to_str().ok().and_then(|s| s.trim().parse().ok()),
    _ => None,
  }
}

/// Project a value to an integer. Floats are truncated toward zero.
pub fn as_i64(value: &LuaValue) -> Option<i64> {
  match value {
    LuaValue::Integer(i) => Some(*i),
    LuaValue::Number(n) if n.is_finite() => Some(n.trunc() as i64),
    LuaValue::String(s) => {
      let s = s.to_str().ok()?;
      let s = s.trim();
      s.parse::<i64>().ok().or_else(|| s.parse::<f64>().ok().filter(|n| n.is_finite()).map(|n| n.trunc() as i64))
    }
    _ => None,
  }
}

/// Typed getters keyed by field name.
pub trait FieldAccess {
  /// Raw value at `key`, `Nil` when absent or unreadable.
  fn value(&self, key: &str) -> LuaValue;

  fn string(&self, key: &str) -> String {
    as_string(&self.value(key)).unwrap_or_default()
  }

  fn boolean(&self, key: &str) -> bool {
    as_bool(&self.value(key)).unwrap_or_default()
  }

  fn int(&self, key: &str) -> i64 {
    as_i64(&self.value(key)).unwrap_or_default()
  }

  fn float(&self, key: &str) -> f64 {
    as_f64(&self.value(key)).unwrap_or_default()
  }

  /// Nested table at `key`, `None` when absent or not a table.
  fn table(&self, key: &str) -> Option<LuaTable> {
    match self.value(key) {
      LuaValue::Table(t) => Some(t),
      _ => None,
    }
  }
}

impl FieldAccess for LuaTable {
  fn value(&self, key: &str) -> LuaValue {
    self.raw_get::<LuaValue>(key).unwrap_or(LuaValue::Nil)
  }
}

/// Collect every entry of `table` that projects to text, in iteration order.
pub fn string_list(table: &LuaTable) -> Vec<String> {
  values(table).iter().filter_map(as_string).collect()
}

/// Collect every entry of `table` that projects to a number, in iteration order.
pub fn number_list(table: &LuaTable) -> Vec<f64> {
  values(table).iter().filter_map(as_f64).collect()
}

/// Entry values of `table` in the interpreter's iteration order.
pub fn values(table: &LuaTable) -> Vec<LuaValue> {
  entries(table).into_iter().map(|(_, v)| v).collect()
}

/// Key/value pairs of `table` in the interpreter's iteration order.
/// Unreadable pairs are dropped.
pub fn entries(table: &LuaTable) -> Vec<(LuaValue, LuaValue)> {
  table
    .clone()
    .pairs::<LuaValue, LuaValue>()
    .filter_map(|pair| pair.ok())
    .collect()
}
