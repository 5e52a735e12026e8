//! Script → record mapping.
//!
//! Each entry point runs the script in a fresh [`Sandbox`](crate::lua::Sandbox)
//! and copies the result out before the interpreter is torn down.

mod level;
mod modinfo;

pub use level::{map_level_overrides, map_overrides};
pub use modinfo::{map_mod_info, map_option_items, map_options};

use crate::consts::{LEVEL_OVERRIDES_CHUNK, MODINFO_CHUNK};
use crate::error::Result;
use crate::lua::sandbox::{self, Root, SandboxOptions};
use crate::record::{ConfigRecord, LevelOverrides, ModInfo, RecordKind};

/// Parse a `modinfo.lua` with an empty folder name and locale.
pub fn parse_mod_info(source: &str) -> Result<ModInfo> {
  parse_mod_info_with(source, &SandboxOptions::default())
}

/// Parse a `modinfo.lua` with the given sandbox bindings.
///
/// ```ignore
/// let options = SandboxOptions::new()
///   .with_folder_name("workshop-1274919201")
///   .with_locale("zh");
/// let info = parse_mod_info_with(&source, &options)?;
/// ```
pub fn parse_mod_info_with(source: &str, options: &SandboxOptions) -> Result<ModInfo> {
  sandbox::run(source, MODINFO_CHUNK, Root::Globals, options, |root| map_mod_info(&root))
}

/// Parse a `leveldataoverride.lua` with default sandbox options.
pub fn parse_level_overrides(source: &str) -> Result<LevelOverrides> {
  parse_level_overrides_with(source, &SandboxOptions::default())
}

pub fn parse_level_overrides_with(source: &str, options: &SandboxOptions) -> Result<LevelOverrides> {
  sandbox::run(source, LEVEL_OVERRIDES_CHUNK, Root::Returned, options, |root| {
    map_level_overrides(&root)
  })
}

/// Parse `source` as the given kind of record.
pub fn parse_record(kind: RecordKind, source: &str, options: &SandboxOptions) -> Result<ConfigRecord> {
  match kind {
    RecordKind::ModInfo => parse_mod_info_with(source, options).map(ConfigRecord::from),
    RecordKind::LevelOverrides => parse_level_overrides_with(source, options).map(ConfigRecord::from),
  }
}
