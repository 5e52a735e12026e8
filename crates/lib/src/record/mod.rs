//! Typed configuration records.
//!
//! Records are plain owned data: nothing in here refers back into the
//! interpreter that produced them, so they outlive the sandbox and can be
//! sent across threads.

mod level;
mod modinfo;
mod value;

use serde::{Deserialize, Serialize};

pub use level::{LevelOverrides, OverrideItem};
pub use modinfo::{ModInfo, ModOption, ModOptionItem};
pub use value::OptionValue;

/// Which record shape a script describes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RecordKind {
  /// `modinfo.lua`: sets globals.
  ModInfo,
  /// `leveldataoverride.lua`: returns a table.
  LevelOverrides,
}

/// Either record shape.
///
/// Serialize-only: both shapes accept any object once defaults fill the gaps,
/// so an untagged deserialize could not tell them apart.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ConfigRecord {
  ModInfo(ModInfo),
  LevelOverrides(LevelOverrides),
}

impl ConfigRecord {
  pub fn kind(&self) -> RecordKind {
    match self {
      Self::ModInfo(_) => RecordKind::ModInfo,
      Self::LevelOverrides(_) => RecordKind::LevelOverrides,
    }
  }
}

impl From<ModInfo> for ConfigRecord {
  fn from(value: ModInfo) -> Self {
    Self::ModInfo(value)
  }
}

impl From<LevelOverrides> for ConfigRecord {
  fn from(value: LevelOverrides) -> Self {
    Self::LevelOverrides(value)
  }
}
