//! # JDevtools - native Java app tooling
//!
//! JDevtools is a set of curated dev tools for building native applications
//! in Core Java. Its centerpiece is the `dispatch` command, which generates
//! Maven POM files wired for GraalVM native-image builds and, on Linux,
//! RPM/DEB packaging.
//!
//! ## Core Concepts
//!
//! - **POM generation**: A base POM with native-image support, merged with
//!   an existing `pom.xml` when one is provided
//! - **Scaffolding**: `jdevtools init` lays out a complete Java project
//!   skeleton (sources, tests, POM, config)
//! - **Config**: Project settings live in `.jdevtools/config.md` and merge
//!   over a global config
//!
//! ## Modules
//!
//! - [`pom`] - POM model, XML rendering, parsing, and merge logic
//! - [`scaffold`] - Java project skeleton generation
//! - [`config`] - Configuration management for jdevtools projects
//! - [`coords`] - Maven coordinate validation and Java package derivation
//! - [`platform`] - Operating system classification
//!
//! ## Example
//!
//! ```no_run
//! use jdevtools::config::Config;
//! use jdevtools::platform::OsType;
//! use jdevtools::pom;
//!
//! let config = Config::load().expect("Failed to load config");
//! let generated = pom::generate(&config, OsType::detect());
//! let xml = pom::render_pom(&generated).expect("Failed to render POM");
//! std::fs::write("pom.xml", xml).expect("Failed to write POM");
//! ```

// Re-export all public modules
pub mod config;
pub mod coords;
pub mod platform;
pub mod pom;
pub mod scaffold;
pub mod templates;
pub mod ui;

/// Default path constants for the jdevtools directory structure.
pub mod paths {
    /// Directory containing project-local state: `.jdevtools`
    pub const CONFIG_DIR: &str = ".jdevtools";
    /// Project configuration file: `.jdevtools/config.md`
    pub const CONFIG_FILE: &str = ".jdevtools/config.md";
}

/// The tool version, as baked into the crate at build time.
///
/// This is the single source of truth for the version reported by
/// `jdevtools version` and stamped into scaffolded projects.
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_is_current_release() {
        assert_eq!(version(), "1.0.0");
    }

    #[test]
    fn test_version_is_semver_shaped() {
        let re = regex::Regex::new(r"^\d+\.\d+\.\d+$").unwrap();
        assert!(
            re.is_match(version()),
            "version {} is not MAJOR.MINOR.PATCH",
            version()
        );
    }
}
