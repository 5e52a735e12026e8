//! modscript: typed access to Lua configuration scripts of a moddable game.
//!
//! Two directions are supported:
//!
//! - **parse**: run a script (`modinfo.lua`, `leveldataoverride.lua`) in a
//!   sandboxed interpreter and map the resulting tables onto typed records.
//! - **generate**: render a [`LevelOverrides`] record back into a script the
//!   game can load, in the `master` or `cave` dialect.
//!
//! ```ignore
//! use modscript_lib::{Dialect, generate_level_overrides, parse_level_overrides};
//!
//! let level = parse_level_overrides(&source)?;
//! let regenerated = generate_level_overrides(&level, Dialect::Master);
//! ```

pub mod codegen;
pub mod consts;
pub mod error;
pub mod lua;
pub mod mapper;
pub mod playerlist;
pub mod record;

pub use codegen::{Dialect, generate_level_overrides, to_cave_lua, to_master_lua};
pub use error::{Result, ScriptError};
pub use lua::SandboxOptions;
pub use mapper::{
  parse_level_overrides, parse_level_overrides_with, parse_mod_info, parse_mod_info_with, parse_record,
};
pub use record::{
  ConfigRecord, LevelOverrides, ModInfo, ModOption, ModOptionItem, OptionValue, OverrideItem, RecordKind,
};
