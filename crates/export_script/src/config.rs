// crates/export_script/src/config.rs

use std::env;
use std::path::PathBuf;

use anyhow::{bail, Result};
use clap::ArgMatches;
use export_ingame_script::ExportConfig;

/// Environment variable naming the directory that holds the script projects.
pub const SCRIPTS_ROOT_VAR: &str = "SCRIPTS_ROOT";

/// Environment variable naming the directory the game loads local scripts
/// from.
pub const DESTINATION_ROOT_VAR: &str = "DESTINATION_ROOT";

/// Builds the immutable root configuration from CLI flags, falling back to
/// the environment. Both roots must already exist; the exporter only creates
/// the per-project subdirectory below the destination root.
pub fn resolve(matches: &ArgMatches) -> Result<ExportConfig> {
    let scripts_root = root_setting(matches, "scripts_root", SCRIPTS_ROOT_VAR)?;
    let destination_root = root_setting(matches, "destination_root", DESTINATION_ROOT_VAR)?;
    Ok(ExportConfig {
        scripts_root,
        destination_root,
    })
}

fn root_setting(matches: &ArgMatches, flag: &str, var: &str) -> Result<PathBuf> {
    let value = match matches.get_one::<String>(flag) {
        Some(value) => value.clone(),
        None => match env::var(var) {
            Ok(value) if !value.is_empty() => value,
            _ => bail!(
                "--{} is not given and ${} is not set",
                flag.replace('_', "-"),
                var
            ),
        },
    };
    let root = PathBuf::from(value);
    if !root.is_dir() {
        bail!("{} dir {} does not exist", flag.replace('_', "-"), root.display());
    }
    Ok(root)
}
