//! Generate a Maven POM with native-image and packaging support.

use anyhow::{Context, Result};
use std::fs;
use std::path::PathBuf;

use jdevtools::config::Config;
use jdevtools::platform::OsType;
use jdevtools::pom;
use jdevtools::ui::{self, colors};

pub fn cmd_dispatch(existing: Option<&str>, output: &str, os_override: Option<&str>) -> Result<()> {
    let config = Config::load()?;
    let os = os_override
        .map(OsType::from_identifier)
        .unwrap_or_else(OsType::detect);

    let mut generated = pom::generate(&config, os);
    if os.supports_native_packaging() && !ui::is_quiet() {
        println!("Added Linux-specific packaging plugins (RPM and DEB)");
    }

    if let Some(raw_path) = existing {
        let existing_path = PathBuf::from(shellexpand::tilde(raw_path).to_string());
        // A nonexistent --existing path simply means there is nothing to merge
        if existing_path.exists() {
            let content = fs::read_to_string(&existing_path)
                .with_context(|| format!("Failed to read {}", existing_path.display()))?;
            match pom::parse_pom(&content) {
                Ok(parsed) => pom::apply_existing(&mut generated, &parsed),
                Err(err) => ui::warn(&format!("Could not merge with existing POM: {err:#}")),
            }
        }
    }

    let output_path = PathBuf::from(shellexpand::tilde(output).to_string());
    let xml = pom::render_pom(&generated)?;
    fs::write(&output_path, xml)
        .with_context(|| format!("Failed to write {}", output_path.display()))?;

    println!(
        "Generated POM file: {}",
        colors::identifier(&output_path.display().to_string())
    );
    if !ui::is_quiet() {
        println!("Platform: {os}");
        println!("Native image support: enabled");
        print_next_steps(&config, os);
    }

    Ok(())
}

fn print_next_steps(config: &Config, os: OsType) {
    println!();
    println!("{}", colors::heading("Next steps:"));
    println!("  1. Review and customize the generated POM file");
    if let Some(main_class) = config.defaults.main_class.as_deref() {
        println!("  2. Confirm the main class: {}", colors::identifier(main_class));
    } else {
        println!("  2. Set the mainClass property for native image generation");
    }
    println!(
        "  3. Run {} to build a native image",
        colors::identifier("mvn clean package native:compile")
    );
    if os.supports_native_packaging() {
        println!(
            "  4. Run {} to create an RPM package",
            colors::identifier("mvn rpm:rpm")
        );
        println!(
            "  5. Run {} to create a DEB package",
            colors::identifier("mvn jdeb:jdeb")
        );
    }
}
