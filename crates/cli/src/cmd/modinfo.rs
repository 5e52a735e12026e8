//! Implementation of the `modscript modinfo` command.

use std::path::Path;

use anyhow::Result;
use tracing::debug;

use modscript_lib::{SandboxOptions, parse_mod_info_with};

use super::{diagnose, read_source};
use crate::output::{emit, to_json};

/// Parse a mod manifest and print it as JSON.
///
/// Without `--folder-name`, the manifest sees the name of the directory
/// containing it, which is what the game passes for installed mods.
pub fn cmd_modinfo(file: &Path, locale: &str, folder_name: Option<String>, output: Option<&Path>) -> Result<()> {
    let source = read_source(file)?;

    let folder_name = folder_name.unwrap_or_else(|| {
        file
            .parent()
            .and_then(Path::file_name)
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default()
    });
    debug!(folder_name = %folder_name, locale = %locale, "parsing mod info");

    let options = SandboxOptions::new().with_folder_name(folder_name).with_locale(locale);
    let info = parse_mod_info_with(&source, &options).map_err(|e| {
        let message = diagnose(&e, file);
        anyhow::Error::new(e).context(message)
    })?;

    emit(&to_json(&info)?, output)
}
