use serde::{Deserialize, Serialize};

use super::OptionValue;

/// Metadata declared by a mod's `modinfo.lua`.
///
/// Field names match the globals the manifest assigns.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ModInfo {
  pub id: String,
  pub name: String,
  pub description: String,
  pub author: String,
  pub version: String,
  pub forum_thread: String,

  // Don't Starve
  pub api_version: i64,
  pub dont_starve_compatible: bool,
  pub reign_of_giants_compatible: bool,
  pub shipwrecked_compatible: bool,
  pub hamlet_compatible: bool,

  // Don't Starve Together
  pub api_version_dst: i64,
  pub dst_compatible: bool,
  pub all_clients_require_mod: bool,
  pub client_only_mod: bool,
  pub server_only_mod: bool,
  pub forge_compatible: bool,

  pub server_filter_tags: Vec<String>,
  pub priority: f64,
  pub icon: String,
  pub icon_atlas: String,

  pub configuration_options: Vec<ModOption>,
}

impl ModInfo {
  /// Find an option by its `name`.
  pub fn option(&self, name: &str) -> Option<&ModOption> {
    self.configuration_options.iter().find(|o| o.name == name)
  }
}

/// One entry of `configuration_options`.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ModOption {
  /// Option key, may be empty for section headers.
  pub name: String,
  pub label: String,
  /// Hover tooltip.
  pub hover: String,
  pub default: Option<OptionValue>,
  pub client: bool,
  pub tags: Vec<String>,
  pub options: Vec<ModOptionItem>,
}

/// One selectable value of a [`ModOption`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModOptionItem {
  #[serde(default)]
  pub description: String,
  pub data: Option<OptionValue>,
}
