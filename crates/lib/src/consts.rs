/// Global holding the package directory name, e.g. `workshop-1274919201`.
pub const FOLDER_NAME_GLOBAL: &str = "folder_name";
/// Global holding the locale the host is loading the script for, e.g. `zh`.
pub const LOCALE_GLOBAL: &str = "locale";
/// Global callback scripts use to pick a localized variant of a table.
pub const TRANSLATION_GLOBAL: &str = "ChooseTranslationTable";

/// Base-library functions removed from the sandbox because they read files.
pub const REMOVED_BASE_FUNCTIONS: &[&str] = &["dofile", "loadfile"];
/// Base functions that can catch errors and are wrapped to keep the budget fatal.
pub const PROTECTED_CALLS: &[&str] = &["pcall", "xpcall"];

/// Instructions a single script may execute before it is aborted.
/// Real manifests finish in a few thousand instructions.
pub const DEFAULT_INSTRUCTION_LIMIT: u64 = 10_000_000;

/// Bytes a single sandbox may allocate.
pub const DEFAULT_MEMORY_LIMIT: usize = 64 * 1024 * 1024;

/// How often (in VM instructions) the budget hook runs.
pub const HOOK_INTERVAL: u32 = 1_000;

pub const MODINFO_CHUNK: &str = "modinfo.lua";
pub const LEVEL_OVERRIDES_CHUNK: &str = "leveldataoverride.lua";

/// Top-level table every mod manifest must define.
pub const OPTIONS_SECTION: &str = "configuration_options";
/// Pseudo-section name used when an overrides script returns no table.
pub const RETURN_SECTION: &str = "return value";
