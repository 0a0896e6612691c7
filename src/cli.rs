//! CLI argument definitions for jdevtools.

use clap::{Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "jdevtools")]
#[command(version)]
#[command(about = "Curated dev tools for building native Java apps", long_about = None)]
#[command(
    after_help = "GETTING STARTED:\n    jdevtools init              Scaffold a new Java project\n    jdevtools dispatch          Generate a native-image ready pom.xml\n\n    Run 'jdevtools dispatch --existing pom.xml --output pom-new.xml' to\n    upgrade an existing project without losing its coordinates."
)]
pub struct Cli {
    /// Suppress all non-essential output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Generate a Maven POM with native-image and packaging support
    ///
    /// The generated POM always carries the GraalVM native-maven-plugin.
    /// On Linux it also gets RPM and DEB packaging plugins. When an
    /// existing POM is given, its coordinates, properties, and
    /// dependencies are preserved.
    Dispatch {
        /// Path to an existing POM file to merge with
        #[arg(long, value_name = "POM")]
        existing: Option<String>,
        /// Output path for the generated POM file
        #[arg(long, default_value = "pom.xml", value_name = "PATH")]
        output: String,
        /// Override the detected operating system (linux, mac, windows)
        #[arg(long, value_name = "OS")]
        os: Option<String>,
    },
    /// Scaffold a new Java application project
    ///
    /// Creates pom.xml, an App class with a version accessor, a JUnit
    /// test, and project config. Prompts for missing values when run
    /// interactively.
    Init {
        /// Project name (doubles as the Maven artifact id)
        name: Option<String>,
        /// Maven group id for the project
        #[arg(long, value_name = "GROUP")]
        group_id: Option<String>,
        /// Initial application version
        #[arg(long, value_name = "VERSION")]
        app_version: Option<String>,
        /// Only create the POM, sources, and config; skip extras
        #[arg(long)]
        minimal: bool,
        /// Overwrite existing project files
        #[arg(long)]
        force: bool,
    },
    /// Show the resolved configuration
    Config {
        /// Validate the configured Maven coordinates
        #[arg(long)]
        validate: bool,
    },
    /// Show version information
    Version {
        /// Include git commit and build date
        #[arg(long)]
        verbose: bool,
    },
    /// Generate a man page
    Man {
        /// Directory to write jdevtools.1 into (default: current directory)
        #[arg(long, value_name = "DIR")]
        out_dir: Option<PathBuf>,
    },
    /// Generate shell completion script
    Completion {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}
