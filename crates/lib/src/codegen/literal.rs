//! Lua literal formatting.

use crate::record::OptionValue;

const KEYWORDS: &[&str] = &[
  "and", "break", "do", "else", "elseif", "end", "false", "for", "function", "goto", "if", "in", "local", "nil", "not",
  "or", "repeat", "return", "then", "true", "until", "while",
];

/// Double-quoted Lua string literal.
pub fn string(value: &str) -> String {
  let mut out = String::with_capacity(value.len() + 2);
  out.push('"');
  for c in value.chars() {
    match c {
      '\\' => out.push_str("\\\\"),
      '"' => out.push_str("\\\""),
      '\n' => out.push_str("\\n"),
      '\r' => out.push_str("\\r"),
      '\t' => out.push_str("\\t"),
      c if c.is_ascii_control() => out.push_str(&format!("\\{:03}", c as u32)),
      c => out.push(c),
    }
  }
  out.push('"');
  out
}

/// Bare numeric literal. Integral values carry no fractional part.
pub fn number(value: f64) -> String {
  if value.is_nan() {
    "0/0".to_string()
  } else if value.is_infinite() {
    if value > 0.0 { "1/0" } else { "-1/0" }.to_string()
  } else {
    value.to_string()
  }
}

pub fn boolean(value: bool) -> String {
  value.to_string()
}

/// Literal for a classified value, keeping its tag.
pub fn value(value: &OptionValue) -> String {
  match value {
    OptionValue::Bool(b) => boolean(*b),
    OptionValue::Number(n) => number(*n),
    OptionValue::String(s) => string(s),
  }
}

/// Table key: bare when it is a Lua identifier, bracketed otherwise.
pub fn key(name: &str) -> String {
  if is_identifier(name) {
    name.to_string()
  } else {
    format!("[{}]", string(name))
  }
}

fn is_identifier(name: &str) -> bool {
  let mut chars = name.chars();
  let starts_ok = matches!(chars.next(), Some(c) if c == '_' || c.is_ascii_alphabetic());
  starts_ok && chars.all(|c| c == '_' || c.is_ascii_alphanumeric()) && !KEYWORDS.contains(&name)
}
