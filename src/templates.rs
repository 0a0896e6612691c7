//! Embedded file templates for project scaffolding.
//!
//! Templates use `{{variable}}` placeholders substituted at render time.
//! Unknown placeholders are left in place so a half-filled template is
//! visible in the output rather than silently blanked.

use regex::Regex;
use std::collections::HashMap;

/// Java application class with a version accessor.
pub const APP_JAVA: &str = include_str!("../templates/app.java");

/// JUnit 5 test exercising the application class.
pub const APP_TEST_JAVA: &str = include_str!("../templates/app-test.java");

/// Standard ignores for a Maven project.
pub const GITIGNORE: &str = include_str!("../templates/gitignore");

/// Project config file recording the chosen coordinates.
pub const CONFIG_MD: &str = include_str!("../templates/config.md");

/// Substitute `{{variable}}` placeholders in a template.
pub fn render(template: &str, variables: &HashMap<String, String>) -> String {
    let re = Regex::new(r"\{\{(\w+)\}\}").unwrap();

    re.replace_all(template, |caps: &regex::Captures| {
        let var_name = &caps[1];
        match variables.get(var_name) {
            Some(value) => value.clone(),
            // Keep the placeholder if no value was provided
            None => caps[0].to_string(),
        }
    })
    .to_string()
}
