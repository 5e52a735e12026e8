use serde::{Deserialize, Serialize};

use super::OptionValue;

/// A world's `leveldataoverride.lua`.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LevelOverrides {
  pub id: String,
  pub name: String,
  pub desc: String,
  pub version: f64,
  pub location: String,
  pub playstyle: String,
  pub hideminimap: bool,
  pub max_playlist_position: f64,
  pub min_playlist_position: f64,
  pub numrandom_set_pieces: i64,
  pub override_level_string: bool,

  pub settings_id: String,
  pub settings_name: String,
  pub settings_desc: String,

  pub worldgen_id: String,
  pub worldgen_name: String,
  pub worldgen_desc: String,

  pub overrides: Vec<OverrideItem>,
  pub random_set_pieces: Vec<String>,
  pub required_prefabs: Vec<String>,
  pub required_setpieces: Vec<String>,
  pub substitutes: Vec<String>,
  pub background_node_range: Vec<f64>,
}

impl LevelOverrides {
  /// Look up an override value by name.
  pub fn override_value(&self, name: &str) -> Option<&OptionValue> {
    self.overrides.iter().find(|o| o.name == name).map(|o| &o.value)
  }
}

/// One `name=value` entry of the `overrides` table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OverrideItem {
  pub name: String,
  pub value: OptionValue,
}

impl OverrideItem {
  pub fn new(name: impl Into<String>, value: impl Into<OptionValue>) -> Self {
    Self {
      name: name.into(),
      value: value.into(),
    }
  }
}
