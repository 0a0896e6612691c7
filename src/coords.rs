//! Maven coordinate validation and Java package derivation.
//!
//! Coordinates flow in from the CLI and from config files, so every value
//! is validated before it lands in a generated POM or a Java source file.

use anyhow::{bail, Result};
use regex::Regex;

/// Validate a Maven group id (e.g. `com.example`, `org.graalvm.buildtools`).
pub fn validate_group_id(group_id: &str) -> Result<()> {
    if group_id.is_empty() {
        bail!("Group id cannot be empty");
    }

    let re = Regex::new(r"^[A-Za-z0-9_-]+(\.[A-Za-z0-9_-]+)*$").unwrap();
    if !re.is_match(group_id) {
        bail!(
            "Invalid group id '{}': expected dot-separated segments of letters, digits, '-' or '_'",
            group_id
        );
    }

    Ok(())
}

/// Validate a Maven artifact id (e.g. `my-app`, `native-maven-plugin`).
pub fn validate_artifact_id(artifact_id: &str) -> Result<()> {
    if artifact_id.is_empty() {
        bail!("Artifact id cannot be empty");
    }

    let re = Regex::new(r"^[A-Za-z0-9._-]+$").unwrap();
    if !re.is_match(artifact_id) {
        bail!(
            "Invalid artifact id '{}': only letters, digits, '.', '-' and '_' are allowed",
            artifact_id
        );
    }

    Ok(())
}

/// Validate a project version string (e.g. `1.0.0`, `1.0-SNAPSHOT`).
pub fn validate_version(version: &str) -> Result<()> {
    if version.is_empty() {
        bail!("Version cannot be empty");
    }

    if version.chars().any(char::is_whitespace) {
        bail!("Invalid version '{}': whitespace is not allowed", version);
    }

    Ok(())
}

/// Derive the Java package for a project from its Maven coordinates.
///
/// The artifact id is lowercased and stripped to alphanumerics so it forms
/// a legal package segment (`my-app` becomes `myapp`). An artifact id with
/// no usable characters falls back to the group id alone.
pub fn java_package(group_id: &str, artifact_id: &str) -> String {
    let mut segment: String = artifact_id
        .to_lowercase()
        .chars()
        .filter(|c| c.is_ascii_alphanumeric())
        .collect();

    // Java identifiers cannot start with a digit
    if segment.chars().next().is_some_and(|c| c.is_ascii_digit()) {
        segment.insert(0, '_');
    }

    if segment.is_empty() {
        group_id.to_lowercase()
    } else {
        format!("{}.{}", group_id.to_lowercase(), segment)
    }
}

/// Map a Java package to its source-tree directory path (`a.b.c` -> `a/b/c`).
pub fn package_path(package: &str) -> String {
    package.replace('.', "/")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_group_id_accepts_common_forms() {
        assert!(validate_group_id("com.example").is_ok());
        assert!(validate_group_id("dev.rishon").is_ok());
        assert!(validate_group_id("org.graalvm.buildtools").is_ok());
        assert!(validate_group_id("io").is_ok());
    }

    #[test]
    fn test_validate_group_id_rejects_bad_forms() {
        assert!(validate_group_id("").is_err());
        assert!(validate_group_id("com..example").is_err());
        assert!(validate_group_id(".com.example").is_err());
        assert!(validate_group_id("com.example.").is_err());
        assert!(validate_group_id("com example").is_err());
    }

    #[test]
    fn test_validate_artifact_id() {
        assert!(validate_artifact_id("my-app").is_ok());
        assert!(validate_artifact_id("jdeb").is_ok());
        assert!(validate_artifact_id("rpm-maven-plugin").is_ok());
        assert!(validate_artifact_id("commons.io").is_ok());

        assert!(validate_artifact_id("").is_err());
        assert!(validate_artifact_id("my app").is_err());
        assert!(validate_artifact_id("my/app").is_err());
    }

    #[test]
    fn test_validate_version() {
        assert!(validate_version("1.0.0").is_ok());
        assert!(validate_version("1.0-SNAPSHOT").is_ok());

        assert!(validate_version("").is_err());
        assert!(validate_version("1.0 beta").is_err());
    }

    #[test]
    fn test_java_package_strips_artifact_punctuation() {
        assert_eq!(java_package("com.example", "my-app"), "com.example.myapp");
        assert_eq!(java_package("dev.rishon", "jdevtools"), "dev.rishon.jdevtools");
        assert_eq!(java_package("Com.Example", "My.App"), "com.example.myapp");
    }

    #[test]
    fn test_java_package_leading_digit() {
        assert_eq!(java_package("com.example", "2048-game"), "com.example._2048game");
    }

    #[test]
    fn test_java_package_empty_segment_falls_back_to_group() {
        assert_eq!(java_package("com.example", "---"), "com.example");
    }

    #[test]
    fn test_package_path() {
        assert_eq!(package_path("dev.rishon.jdevtools"), "dev/rishon/jdevtools");
        assert_eq!(package_path("app"), "app");
    }
}
