//! Java project skeleton generation for `jdevtools init`.
//!
//! Lays out a Maven-shaped project: a POM wired for native-image builds, an
//! application class with a version accessor, a JUnit test for it, ignores,
//! and the project's jdevtools config.

use anyhow::{bail, Context, Result};
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use crate::config::Config;
use crate::coords;
use crate::paths;
use crate::platform::OsType;
use crate::pom::{self, Pom, XmlNode};
use crate::templates;

/// JUnit Jupiter version pinned into scaffolded POMs.
const JUNIT_VERSION: &str = "5.10.0";

/// Inputs for a project scaffold. The name doubles as the Maven artifact id.
#[derive(Debug, Clone)]
pub struct ScaffoldOptions {
    pub name: String,
    pub group_id: String,
    pub version: String,
    /// Skip the optional extras (.gitignore)
    pub minimal: bool,
    /// Overwrite files that already exist
    pub force: bool,
}

impl ScaffoldOptions {
    pub fn new(name: impl Into<String>, group_id: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            group_id: group_id.into(),
            version: "1.0.0".to_string(),
            minimal: false,
            force: false,
        }
    }
}

/// Create a Java project skeleton under `root`. Returns the paths written,
/// in creation order.
pub fn scaffold_project(root: &Path, opts: &ScaffoldOptions, os: OsType, config: &Config) -> Result<Vec<PathBuf>> {
    coords::validate_artifact_id(&opts.name)?;
    coords::validate_group_id(&opts.group_id)?;
    coords::validate_version(&opts.version)?;

    let package = coords::java_package(&opts.group_id, &opts.name);
    let package_dir = coords::package_path(&package);

    let pom_path = root.join("pom.xml");
    let app_path = root.join("src/main/java").join(&package_dir).join("App.java");
    let test_path = root.join("src/test/java").join(&package_dir).join("AppTest.java");

    if !opts.force {
        for path in [&pom_path, &app_path, &test_path] {
            if path.exists() {
                bail!("{} already exists (use --force to overwrite)", path.display());
            }
        }
    }

    let mut vars = HashMap::new();
    vars.insert("name".to_string(), opts.name.clone());
    vars.insert("group_id".to_string(), opts.group_id.clone());
    vars.insert("artifact_id".to_string(), opts.name.clone());
    vars.insert("version".to_string(), opts.version.clone());
    vars.insert("package".to_string(), package.clone());

    let mut created = Vec::new();

    let pom = project_pom(opts, &package, os, config);
    write_file(&pom_path, &pom::render_pom(&pom)?, &mut created)?;

    write_file(&app_path, &templates::render(templates::APP_JAVA, &vars), &mut created)?;
    write_file(
        &test_path,
        &templates::render(templates::APP_TEST_JAVA, &vars),
        &mut created,
    )?;

    if !opts.minimal {
        write_file(&root.join(".gitignore"), templates::GITIGNORE, &mut created)?;
    }

    write_file(
        &root.join(paths::CONFIG_FILE),
        &templates::render(templates::CONFIG_MD, &vars),
        &mut created,
    )?;

    Ok(created)
}

/// The POM for a freshly scaffolded project: explicit coordinates, a known
/// main class, and the JUnit test dependency.
fn project_pom(opts: &ScaffoldOptions, package: &str, os: OsType, config: &Config) -> Pom {
    let mut pom = Pom::with_coordinates(&opts.group_id, &opts.name, &opts.version, &config.defaults);
    pom.name = Some(opts.name.clone());

    pom.dependencies.push(XmlNode::with_children(
        "dependency",
        vec![
            XmlNode::leaf("groupId", "org.junit.jupiter"),
            XmlNode::leaf("artifactId", "junit-jupiter"),
            XmlNode::leaf("version", JUNIT_VERSION),
            XmlNode::leaf("scope", "test"),
        ],
    ));

    pom.plugins
        .push(pom::native_image_plugin(Some(&format!("{package}.App"))));
    if os.supports_native_packaging() {
        pom.plugins.push(pom::rpm_plugin(&config.packaging));
        pom.plugins.push(pom::deb_plugin(&config.packaging));
    }

    pom
}

fn write_file(path: &Path, content: &str, created: &mut Vec<PathBuf>) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory {}", parent.display()))?;
    }
    fs::write(path, content).with_context(|| format!("Failed to write {}", path.display()))?;
    created.push(path.to_path_buf());
    Ok(())
}
