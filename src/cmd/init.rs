//! Scaffold a new Java application project.
//!
//! Missing inputs are resolved in order: CLI flag, interactive prompt (when
//! attached to a TTY), then config/defaults.

use anyhow::Result;
use colored::Colorize;
use std::path::Path;

use jdevtools::config::Config;
use jdevtools::platform::OsType;
use jdevtools::scaffold::{self, ScaffoldOptions};
use jdevtools::ui::{self, colors};

pub fn cmd_init(
    name: Option<String>,
    group_id: Option<String>,
    app_version: Option<String>,
    minimal: bool,
    force: bool,
) -> Result<()> {
    let config = Config::load()?;
    let interactive = name.is_none() && atty::is(atty::Stream::Stdin);

    let name = match name {
        Some(name) => name,
        None if interactive => dialoguer::Input::new()
            .with_prompt("Project name")
            .default(detect_project_name())
            .interact_text()?,
        None => detect_project_name(),
    };

    let group_id = match group_id {
        Some(group_id) => group_id,
        None if interactive => dialoguer::Input::new()
            .with_prompt("Maven group id")
            .default(config.project.group_id.clone())
            .interact_text()?,
        None => config.project.group_id.clone(),
    };

    let mut opts = ScaffoldOptions::new(name, group_id);
    if let Some(version) = app_version {
        opts.version = version;
    }
    opts.minimal = minimal;
    opts.force = force;

    let created = scaffold::scaffold_project(Path::new("."), &opts, OsType::detect(), &config)?;

    println!(
        "{} Initialized {} ({}:{}:{})",
        colors::success("✓"),
        opts.name.bold(),
        opts.group_id,
        opts.name,
        opts.version
    );
    if !ui::is_quiet() {
        for path in &created {
            println!("  {} {}", colors::success("+"), path.display());
        }
        println!();
        println!("{}", colors::heading("Next steps:"));
        println!("  1. Run {} to compile and test", colors::identifier("mvn test"));
        println!(
            "  2. Run {} to build a native image",
            colors::identifier("mvn clean package native:compile")
        );
    }

    Ok(())
}

/// Default project name: the current directory's basename.
fn detect_project_name() -> String {
    std::env::current_dir()
        .ok()
        .and_then(|dir| dir.file_name().map(|name| name.to_string_lossy().into_owned()))
        .unwrap_or_else(|| "my-app".to_string())
}
