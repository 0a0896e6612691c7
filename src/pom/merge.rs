//! Merge semantics for combining an existing POM with a generated one.
//!
//! The existing project's identity wins: coordinates, name, and description
//! replace the generated defaults. Properties only fill gaps (a generated
//! property is never overwritten), and every existing dependency is carried
//! over.

use super::{ExistingPom, Pom};

/// Fold an existing POM's identity, properties, and dependencies into a
/// generated POM.
pub fn apply_existing(pom: &mut Pom, existing: &ExistingPom) {
    if let Some(group_id) = &existing.group_id {
        pom.group_id = group_id.clone();
    }
    if let Some(artifact_id) = &existing.artifact_id {
        pom.artifact_id = artifact_id.clone();
    }
    if let Some(version) = &existing.version {
        pom.version = version.clone();
    }
    if existing.name.is_some() {
        pom.name = existing.name.clone();
    }
    if existing.description.is_some() {
        pom.description = existing.description.clone();
    }

    for (name, value) in &existing.properties {
        let already_set = pom.properties.iter().any(|(existing_name, _)| existing_name == name);
        if !already_set {
            pom.properties.push((name.clone(), value.clone()));
        }
    }

    pom.dependencies.extend(existing.dependencies.iter().cloned());
}
