//! Dialect descriptors: which fields a generated script carries, and in what order.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::record::{LevelOverrides, OverrideItem};

/// Every field a level overrides script can carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LevelField {
  BackgroundNodeRange,
  Desc,
  HideMiniMap,
  Id,
  Location,
  MaxPlaylistPosition,
  MinPlaylistPosition,
  Name,
  NumRandomSetPieces,
  OverrideLevelString,
  Overrides,
  PlayStyle,
  RandomSetPieces,
  RequiredPrefabs,
  RequiredSetPieces,
  SettingsDesc,
  SettingsId,
  SettingsName,
  Substitutes,
  Version,
  WorldGenDesc,
  WorldGenId,
  WorldGenName,
}

impl LevelField {
  /// Script key of the field.
  pub fn key(self) -> &'static str {
    match self {
      Self::BackgroundNodeRange => "background_node_range",
      Self::Desc => "desc",
      Self::HideMiniMap => "hideminimap",
      Self::Id => "id",
      Self::Location => "location",
      Self::MaxPlaylistPosition => "max_playlist_position",
      Self::MinPlaylistPosition => "min_playlist_position",
      Self::Name => "name",
      Self::NumRandomSetPieces => "numrandom_set_pieces",
      Self::OverrideLevelString => "override_level_string",
      Self::Overrides => "overrides",
      Self::PlayStyle => "playstyle",
      Self::RandomSetPieces => "random_set_pieces",
      Self::RequiredPrefabs => "required_prefabs",
      Self::RequiredSetPieces => "required_setpieces",
      Self::SettingsDesc => "settings_desc",
      Self::SettingsId => "settings_id",
      Self::SettingsName => "settings_name",
      Self::Substitutes => "substitutes",
      Self::Version => "version",
      Self::WorldGenDesc => "worldgen_desc",
      Self::WorldGenId => "worldgen_id",
      Self::WorldGenName => "worldgen_name",
    }
  }

  /// The record's value for this field.
  pub fn read(self, record: &LevelOverrides) -> Literal<'_> {
    match self {
      Self::BackgroundNodeRange => Literal::Numbers(&record.background_node_range),
      Self::Desc => Literal::Str(&record.desc),
      Self::HideMiniMap => Literal::Bool(record.hideminimap),
      Self::Id => Literal::Str(&record.id),
      Self::Location => Literal::Str(&record.location),
      Self::MaxPlaylistPosition => Literal::Number(record.max_playlist_position),
      Self::MinPlaylistPosition => Literal::Number(record.min_playlist_position),
      Self::Name => Literal::Str(&record.name),
      Self::NumRandomSetPieces => Literal::Number(record.numrandom_set_pieces as f64),
      Self::OverrideLevelString => Literal::Bool(record.override_level_string),
      Self::Overrides => Literal::Overrides(&record.overrides),
      Self::PlayStyle => Literal::Str(&record.playstyle),
      Self::RandomSetPieces => Literal::Strings(&record.random_set_pieces),
      Self::RequiredPrefabs => Literal::Strings(&record.required_prefabs),
      Self::RequiredSetPieces => Literal::Strings(&record.required_setpieces),
      Self::SettingsDesc => Literal::Str(&record.settings_desc),
      Self::SettingsId => Literal::Str(&record.settings_id),
      Self::SettingsName => Literal::Str(&record.settings_name),
      Self::Substitutes => Literal::Strings(&record.substitutes),
      Self::Version => Literal::Number(record.version),
      Self::WorldGenDesc => Literal::Str(&record.worldgen_desc),
      Self::WorldGenId => Literal::Str(&record.worldgen_id),
      Self::WorldGenName => Literal::Str(&record.worldgen_name),
    }
  }
}

/// A field value borrowed from a record, ready to be rendered.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Literal<'a> {
  Str(&'a str),
  Bool(bool),
  Number(f64),
  Strings(&'a [String]),
  Numbers(&'a [f64]),
  Overrides(&'a [OverrideItem]),
}

const MASTER_FIELDS: &[LevelField] = &[
  LevelField::Desc,
  LevelField::HideMiniMap,
  LevelField::Id,
  LevelField::Location,
  LevelField::MaxPlaylistPosition,
  LevelField::MinPlaylistPosition,
  LevelField::Name,
  LevelField::NumRandomSetPieces,
  LevelField::OverrideLevelString,
  LevelField::Overrides,
  LevelField::PlayStyle,
  LevelField::RandomSetPieces,
  LevelField::RequiredPrefabs,
  LevelField::RequiredSetPieces,
  LevelField::SettingsDesc,
  LevelField::SettingsId,
  LevelField::SettingsName,
  LevelField::Substitutes,
  LevelField::Version,
  LevelField::WorldGenDesc,
  LevelField::WorldGenId,
  LevelField::WorldGenName,
];

const CAVE_FIELDS: &[LevelField] = &[
  LevelField::BackgroundNodeRange,
  LevelField::Desc,
  LevelField::HideMiniMap,
  LevelField::Id,
  LevelField::Location,
  LevelField::MaxPlaylistPosition,
  LevelField::MinPlaylistPosition,
  LevelField::Name,
  LevelField::NumRandomSetPieces,
  LevelField::OverrideLevelString,
  LevelField::Overrides,
  LevelField::PlayStyle,
  LevelField::RandomSetPieces,
  LevelField::RequiredPrefabs,
  LevelField::RequiredSetPieces,
  LevelField::SettingsDesc,
  LevelField::SettingsId,
  LevelField::SettingsName,
  LevelField::Substitutes,
  LevelField::Version,
  LevelField::WorldGenDesc,
  LevelField::WorldGenId,
  LevelField::WorldGenName,
];

/// Flavour of `leveldataoverride.lua` to generate.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Dialect {
  /// Overworld shard.
  #[default]
  Master,
  /// Caves shard; additionally carries `background_node_range`.
  Cave,
}

impl Dialect {
  pub const ALL: [Dialect; 2] = [Dialect::Master, Dialect::Cave];

  /// Fields in output order.
  pub fn fields(self) -> &'static [LevelField] {
    match self {
      Self::Master => MASTER_FIELDS,
      Self::Cave => CAVE_FIELDS,
    }
  }

  pub fn name(self) -> &'static str {
    match self {
      Self::Master => "master",
      Self::Cave => "cave",
    }
  }
}

impl fmt::Display for Dialect {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.name())
  }
}

/// Error returned when a dialect name is not recognised.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown dialect '{0}', expected 'master' or 'cave'")]
pub struct UnknownDialect(pub String);

impl FromStr for Dialect {
  type Err = UnknownDialect;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    Self::ALL
      .into_iter()
      .find(|d| d.name().eq_ignore_ascii_case(s))
      .ok_or_else(|| UnknownDialect(s.to_string()))
  }
}
