//! Extraction of dynamic-dependency declarations from a project's live state.

use std::collections::BTreeMap;

use crate::build::Build;
use crate::dependency::Dependency;
use crate::project::ProjectId;

/// Produce the per-configuration dynamic-dependency mapping for a project.
///
/// The shape matches the extension as declared, restricted to configurations
/// that actually exist on the project. Both the override engine and the model
/// exporter consume this shape.
pub fn dynamic_dependencies(build: &Build, id: ProjectId) -> BTreeMap<String, Vec<Dependency>> {
    let project = build.project(id);
    project
        .dynamic_dependencies
        .iter()
        .filter(|(name, _)| project.configurations.contains_key(*name))
        .map(|(name, deps)| (name.clone(), deps.clone()))
        .collect()
}
