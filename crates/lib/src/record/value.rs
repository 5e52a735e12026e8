use std::fmt;

use serde::{Deserialize, Serialize};

/// A scalar whose kind was read from the script's runtime tag.
///
/// Option defaults, option item data and level override values all use this:
/// a `false` default must come back out as `false`, never as `"false"`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum OptionValue {
  Bool(bool),
  Number(f64),
  String(String),
}

impl OptionValue {
  pub fn as_bool(&self) -> Option<bool> {
    match self {
      Self::Bool(b) => Some(*b),
      _ => None,
    }
  }

  pub fn as_f64(&self) -> Option<f64> {
    match self {
      Self::Number(n) => Some(*n),
      _ => None,
    }
  }

  pub fn as_str(&self) -> Option<&str> {
    match self {
      Self::String(s) => Some(s),
      _ => None,
    }
  }
}

impl fmt::Display for OptionValue {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      Self::Bool(b) => write!(f, "{}", b),
      Self::Number(n) => write!(f, "{}", n),
      Self::String(s) => f.write_str(s),
    }
  }
}

impl From<bool> for OptionValue {
  fn from(value: bool) -> Self {
    Self::Bool(value)
  }
}

impl From<f64> for OptionValue {
  fn from(value: f64) -> Self {
    Self::Number(value)
  }
}

impl From<&str> for OptionValue {
  fn from(value: &str) -> Self {
    Self::String(value.to_string())
  }
}

impl From<String> for OptionValue {
  fn from(value: String) -> Self {
    Self::String(value)
  }
}
