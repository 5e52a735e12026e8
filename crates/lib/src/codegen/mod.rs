//! Record → script generation.
//!
//! Output is deterministic: fields follow the dialect's order and override
//! entries are sorted by name, so regenerated files diff cleanly.
//!
//! ```lua
//! return {
//!   desc="The standard Don't Starve experience.",
//!   hideminimap=false,
//!   ...
//!   overrides={
//!     alternatehunt="default",
//!   },
//!   ...
//! }
//! ```

pub mod dialect;
pub mod literal;

use tracing::debug;

pub use dialect::{Dialect, LevelField, Literal, UnknownDialect};

use crate::record::{LevelOverrides, OverrideItem};

const INDENT: &str = "  ";

/// Render `record` as a `leveldataoverride.lua` in the given dialect.
pub fn generate_level_overrides(record: &LevelOverrides, dialect: Dialect) -> String {
  let mut out = String::from("return {\n");
  for field in dialect.fields() {
    render_field(&mut out, field.key(), field.read(record));
  }
  out.push_str("}\n");

  debug!(dialect = %dialect, id = %record.id, bytes = out.len(), "generated level overrides");
  out
}

/// Shorthand for [`Dialect::Master`].
pub fn to_master_lua(record: &LevelOverrides) -> String {
  generate_level_overrides(record, Dialect::Master)
}

/// Shorthand for [`Dialect::Cave`].
pub fn to_cave_lua(record: &LevelOverrides) -> String {
  generate_level_overrides(record, Dialect::Cave)
}

fn render_field(out: &mut String, key: &str, value: Literal<'_>) {
  out.push_str(INDENT);
  out.push_str(&literal::key(key));
  out.push('=');
  match value {
    Literal::Str(s) => out.push_str(&literal::string(s)),
    Literal::Bool(b) => out.push_str(&literal::boolean(b)),
    Literal::Number(n) => out.push_str(&literal::number(n)),
    Literal::Strings(items) => render_list(out, items.iter().map(|s| literal::string(s))),
    Literal::Numbers(items) => render_list(out, items.iter().map(|n| literal::number(*n))),
    Literal::Overrides(items) => render_overrides(out, items),
  }
  out.push_str(",\n");
}

fn render_list(out: &mut String, items: impl Iterator<Item = String>) {
  render_block(out, items.collect());
}

fn render_overrides(out: &mut String, items: &[OverrideItem]) {
  let mut sorted: Vec<&OverrideItem> = items.iter().collect();
  sorted.sort_by(|a, b| a.name.cmp(&b.name));
  render_block(
    out,
    sorted
      .into_iter()
      .map(|item| format!("{}={}", literal::key(&item.name), literal::value(&item.value)))
      .collect(),
  );
}

fn render_block(out: &mut String, lines: Vec<String>) {
  if lines.is_empty() {
    out.push_str("{}");
    return;
  }
  out.push_str("{\n");
  for line in lines {
    out.push_str(INDENT);
    out.push_str(INDENT);
    out.push_str(&line);
    out.push_str(",\n");
  }
  out.push_str(INDENT);
  out.push('}');
}
