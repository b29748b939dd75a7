// crates/export_script/src/main.rs

use std::path::Path;

use anyhow::{Context, Result};
use clap::{Arg, Command};

use export_ingame_script::export_script;

mod config;

fn main() -> Result<()> {
    let matches = Command::new("export_script")
        .version("0.1.0")
        .about("Copies the ingame part of a script project into the game's local scripts dir")
        .arg(
            Arg::new("project")
                .value_name("PROJECT_DIR")
                .help("Path whose final component names the script project"),
        )
        .arg(
            Arg::new("scripts_root")
                .long("scripts-root")
                .num_args(1)
                .help("Dir containing the script projects (defaults to $SCRIPTS_ROOT)"),
        )
        .arg(
            Arg::new("destination_root")
                .long("destination-root")
                .num_args(1)
                .help("Dir the ingame scripts are exported into (defaults to $DESTINATION_ROOT)"),
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .help("Enable debug logging")
                .action(clap::ArgAction::SetTrue),
        )
        .get_matches();

    init_logging(*matches.get_one::<bool>("verbose").unwrap());

    let project_id = matches
        .get_one::<String>("project")
        .and_then(|arg| project_dir_name(arg));
    let Some(project_id) = project_id else {
        println!("There is no script project dir specified.");
        return Ok(());
    };
    println!("{project_id}");

    let config = config::resolve(&matches).context("Failed to resolve export roots")?;
    export_script(&config, &project_id)
        .with_context(|| format!("Failed to export project {project_id}"))?;

    println!("Exported {}", config.destination_path(&project_id).display());
    Ok(())
}

/// Derives the project name from the path argument: its final normal
/// component. Trailing separators are tolerated; `.` or `..` yield `None`.
fn project_dir_name(arg: &str) -> Option<String> {
    Path::new(arg)
        .file_name()
        .and_then(|name| name.to_str())
        .map(|name| name.to_string())
}

fn init_logging(verbose: bool) {
    let default_filter = if verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();
}

#[cfg(test)]
mod tests {
    use super::project_dir_name;

    #[test]
    fn takes_the_final_path_component() {
        assert_eq!(project_dir_name("work/scripts/Doors").as_deref(), Some("Doors"));
        assert_eq!(project_dir_name("Doors").as_deref(), Some("Doors"));
    }

    #[test]
    fn tolerates_a_trailing_separator() {
        assert_eq!(project_dir_name("work/scripts/Doors/").as_deref(), Some("Doors"));
    }

    #[test]
    fn rejects_paths_without_a_usable_component() {
        assert_eq!(project_dir_name("."), None);
        assert_eq!(project_dir_name(".."), None);
        assert_eq!(project_dir_name("/"), None);
    }
}
