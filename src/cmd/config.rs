//! Show and validate the resolved jdevtools configuration.

use anyhow::Result;

use jdevtools::config::Config;
use jdevtools::coords;
use jdevtools::ui::colors;

pub fn cmd_config(validate: bool) -> Result<()> {
    let config = Config::load()?;

    println!("{}", colors::heading("project"));
    println!("  name:                  {}", config.project.name);
    println!("  group_id:              {}", config.project.group_id);
    println!("  artifact_id:           {}", config.project.artifact_id);
    println!("  version:               {}", config.project.version);

    println!("{}", colors::heading("defaults"));
    println!("  java_release:          {}", config.defaults.java_release);
    println!("  native_plugin_version: {}", config.defaults.native_plugin_version);
    match config.defaults.main_class.as_deref() {
        Some(main_class) => println!("  main_class:            {main_class}"),
        None => println!("  main_class:            {}", colors::secondary("(unset)")),
    }

    println!("{}", colors::heading("packaging"));
    println!("  rpm_group:             {}", config.packaging.rpm_group);
    println!("  packager:              {}", config.packaging.packager);
    println!("  install_prefix:        {}", config.packaging.install_prefix);

    if validate {
        coords::validate_group_id(&config.project.group_id)?;
        coords::validate_artifact_id(&config.project.artifact_id)?;
        coords::validate_version(&config.project.version)?;
        println!();
        println!("{} Configuration is valid", colors::success("✓"));
    }

    Ok(())
}
