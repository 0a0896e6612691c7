use anyhow::{Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

use crate::paths;

/// Resolved jdevtools configuration.
///
/// Loaded from YAML frontmatter in `.jdevtools/config.md`, merged over the
/// global config at `~/.config/jdevtools/config.md`. Every field has a
/// default, so running in a directory with no config at all is fine.
#[derive(Debug)]
pub struct Config {
    pub project: ProjectConfig,
    pub defaults: DefaultsConfig,
    pub packaging: PackagingConfig,
}

#[derive(Debug)]
pub struct ProjectConfig {
    /// Human-facing project name (defaults to the artifact id)
    pub name: String,
    pub group_id: String,
    pub artifact_id: String,
    pub version: String,
}

#[derive(Debug)]
pub struct DefaultsConfig {
    /// Java release targeted by maven.compiler.source/target
    pub java_release: String,
    /// Version of the GraalVM native-maven-plugin to pin
    pub native_plugin_version: String,
    /// Fully-qualified main class for native-image; rendered as the
    /// `${mainClass}` placeholder when unset
    pub main_class: Option<String>,
}

#[derive(Debug)]
pub struct PackagingConfig {
    /// RPM package group
    pub rpm_group: String,
    /// Packager name stamped into RPM metadata
    pub packager: String,
    /// Install prefix for DEB payloads
    pub install_prefix: String,
}

fn default_group_id() -> String {
    "com.example".to_string()
}

fn default_artifact_id() -> String {
    "my-app".to_string()
}

fn default_version() -> String {
    "1.0-SNAPSHOT".to_string()
}

fn default_java_release() -> String {
    "11".to_string()
}

fn default_native_plugin_version() -> String {
    "0.9.28".to_string()
}

fn default_rpm_group() -> String {
    "Applications/Development".to_string()
}

fn default_packager() -> String {
    "JDevtools".to_string()
}

fn default_install_prefix() -> String {
    "/usr/share".to_string()
}

impl Default for Config {
    fn default() -> Self {
        PartialConfig::default().merge_with(PartialConfig::default())
    }
}

impl Config {
    /// Load merged configuration from the default global and project paths.
    pub fn load() -> Result<Self> {
        Self::load_merged_from(global_config_path().as_deref(), Path::new(paths::CONFIG_FILE))
    }

    /// Load merged configuration from specified global and project config paths.
    /// Project config values override global config values; missing files
    /// contribute nothing.
    pub fn load_merged_from(global_path: Option<&Path>, project_path: &Path) -> Result<Self> {
        let global_config = global_path
            .filter(|p| p.exists())
            .map(PartialConfig::load_from)
            .transpose()?
            .unwrap_or_default();

        let project_config = if project_path.exists() {
            PartialConfig::load_from(project_path)?
        } else {
            PartialConfig::default()
        };

        Ok(global_config.merge_with(project_config))
    }
}

/// Returns the path to the global config file at ~/.config/jdevtools/config.md
pub fn global_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("jdevtools/config.md"))
}

/// Partial config for merging - all fields optional
#[derive(Debug, Deserialize, Default)]
struct PartialConfig {
    pub project: Option<PartialProjectConfig>,
    pub defaults: Option<PartialDefaultsConfig>,
    pub packaging: Option<PartialPackagingConfig>,
}

#[derive(Debug, Deserialize, Default)]
struct PartialProjectConfig {
    pub name: Option<String>,
    pub group_id: Option<String>,
    pub artifact_id: Option<String>,
    pub version: Option<String>,
}

#[derive(Debug, Deserialize, Default)]
struct PartialDefaultsConfig {
    pub java_release: Option<String>,
    pub native_plugin_version: Option<String>,
    pub main_class: Option<String>,
}

#[derive(Debug, Deserialize, Default)]
struct PartialPackagingConfig {
    pub rpm_group: Option<String>,
    pub packager: Option<String>,
    pub install_prefix: Option<String>,
}

impl PartialConfig {
    fn load_from(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config from {}", path.display()))?;

        Self::parse(&content)
    }

    fn parse(content: &str) -> Result<Self> {
        let frontmatter =
            extract_frontmatter(content).context("Failed to extract frontmatter from config")?;

        serde_yaml::from_str(&frontmatter).context("Failed to parse config frontmatter")
    }

    /// Merge this global config with a project config, returning the merged result.
    /// Values from the project config take precedence over global.
    fn merge_with(self, project: PartialConfig) -> Config {
        let global_project = self.project.unwrap_or_default();
        let global_defaults = self.defaults.unwrap_or_default();
        let global_packaging = self.packaging.unwrap_or_default();
        let project_project = project.project.unwrap_or_default();
        let project_defaults = project.defaults.unwrap_or_default();
        let project_packaging = project.packaging.unwrap_or_default();

        let artifact_id = project_project
            .artifact_id
            .or(global_project.artifact_id)
            .unwrap_or_else(default_artifact_id);

        Config {
            project: ProjectConfig {
                // Project value > global value > default
                name: project_project
                    .name
                    .or(global_project.name)
                    .unwrap_or_else(|| artifact_id.clone()),
                group_id: project_project
                    .group_id
                    .or(global_project.group_id)
                    .unwrap_or_else(default_group_id),
                artifact_id,
                version: project_project
                    .version
                    .or(global_project.version)
                    .unwrap_or_else(default_version),
            },
            defaults: DefaultsConfig {
                java_release: project_defaults
                    .java_release
                    .or(global_defaults.java_release)
                    .unwrap_or_else(default_java_release),
                native_plugin_version: project_defaults
                    .native_plugin_version
                    .or(global_defaults.native_plugin_version)
                    .unwrap_or_else(default_native_plugin_version),
                main_class: project_defaults.main_class.or(global_defaults.main_class),
            },
            packaging: PackagingConfig {
                rpm_group: project_packaging
                    .rpm_group
                    .or(global_packaging.rpm_group)
                    .unwrap_or_else(default_rpm_group),
                packager: project_packaging
                    .packager
                    .or(global_packaging.packager)
                    .unwrap_or_else(default_packager),
                install_prefix: project_packaging
                    .install_prefix
                    .or(global_packaging.install_prefix)
                    .unwrap_or_else(default_install_prefix),
            },
        }
    }
}

/// Extract YAML frontmatter between `---` markers
fn extract_frontmatter(content: &str) -> Option<String> {
    let content = content.trim();

    if !content.starts_with("---") {
        return None;
    }

    let rest = &content[3..];
    rest.find("---").map(|end| rest[..end].to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_parse_config() {
        let content = r#"---
project:
  name: demo
  group_id: dev.rishon
  artifact_id: demo-app
  version: 2.1.0

defaults:
  java_release: "17"
---

# Config
"#;
        let partial = PartialConfig::parse(content).unwrap();
        let config = PartialConfig::default().merge_with(partial);

        assert_eq!(config.project.name, "demo");
        assert_eq!(config.project.group_id, "dev.rishon");
        assert_eq!(config.project.artifact_id, "demo-app");
        assert_eq!(config.project.version, "2.1.0");
        assert_eq!(config.defaults.java_release, "17");
        // Untouched sections fall back to defaults
        assert_eq!(config.defaults.native_plugin_version, "0.9.28");
        assert_eq!(config.packaging.packager, "JDevtools");
    }

    #[test]
    fn test_defaults_match_generator_constants() {
        let config = Config::default();
        assert_eq!(config.project.group_id, "com.example");
        assert_eq!(config.project.artifact_id, "my-app");
        assert_eq!(config.project.name, "my-app");
        assert_eq!(config.project.version, "1.0-SNAPSHOT");
        assert_eq!(config.defaults.java_release, "11");
        assert_eq!(config.defaults.native_plugin_version, "0.9.28");
        assert!(config.defaults.main_class.is_none());
        assert_eq!(config.packaging.rpm_group, "Applications/Development");
        assert_eq!(config.packaging.install_prefix, "/usr/share");
    }

    #[test]
    fn test_name_defaults_to_artifact_id() {
        let content = "---\nproject:\n  artifact_id: tooling\n---\n";
        let partial = PartialConfig::parse(content).unwrap();
        let config = PartialConfig::default().merge_with(partial);
        assert_eq!(config.project.name, "tooling");
    }

    #[test]
    fn test_missing_frontmatter_is_an_error() {
        assert!(PartialConfig::parse("just a markdown file").is_err());
    }

    #[test]
    fn test_load_merged_project_overrides_global() {
        let dir = TempDir::new().unwrap();
        let global = dir.path().join("global.md");
        let project = dir.path().join("config.md");

        fs::write(
            &global,
            "---\nproject:\n  group_id: dev.global\ndefaults:\n  java_release: \"21\"\n---\n",
        )
        .unwrap();
        fs::write(&project, "---\nproject:\n  group_id: dev.project\n---\n").unwrap();

        let config = Config::load_merged_from(Some(&global), &project).unwrap();
        assert_eq!(config.project.group_id, "dev.project");
        // Global value survives where the project is silent
        assert_eq!(config.defaults.java_release, "21");
    }

    #[test]
    fn test_load_merged_missing_files_yield_defaults() {
        let dir = TempDir::new().unwrap();
        let config =
            Config::load_merged_from(Some(&dir.path().join("nope.md")), &dir.path().join("also-nope.md"))
                .unwrap();
        assert_eq!(config.project.artifact_id, "my-app");
    }

    #[test]
    fn test_extract_frontmatter() {
        assert_eq!(
            extract_frontmatter("---\nkey: value\n---\nbody").as_deref(),
            Some("\nkey: value\n")
        );
        assert!(extract_frontmatter("no frontmatter here").is_none());
    }
}
