//! Conversion of a build's project tree into exported model snapshots.

use lokal_core::build::Build;
use lokal_core::dynamic::dynamic_dependencies;
use lokal_core::project::ProjectId;
use lokal_util::errors::{LokalError, LokalResult};
use tracing::debug;

use crate::model::ProjectModel;

/// The fixed model-type identifier external tooling requests the snapshot by.
pub const MODEL_NAME: &str = "lokal.ProjectModel";

/// Returns `true` if this builder produces the named model type.
pub fn can_build(model_name: &str) -> bool {
    model_name == MODEL_NAME
}

/// Build the snapshot tree, starting from the build's root project.
///
/// Fails with [`LokalError::MissingGroup`] if any project in the tree lacks a
/// non-empty group coordinate; coordinate-based matching is meaningless
/// without one.
pub fn build_model(build: &Build) -> LokalResult<ProjectModel> {
    convert(build, build.root())
}

fn convert(build: &Build, id: ProjectId) -> LokalResult<ProjectModel> {
    let project = build.project(id);
    let mut children = project
        .children()
        .iter()
        .map(|&child| convert(build, child))
        .collect::<LokalResult<Vec<_>>>()?;
    children.sort_by(|a, b| a.path.cmp(&b.path));

    if project.group.trim().is_empty() {
        return Err(LokalError::MissingGroup {
            project_dir: project.project_dir.display().to_string(),
        }
        .into());
    }

    let dynamic = dynamic_dependencies(build, id);
    debug!(project = %project.path, configurations = dynamic.len(), "collected dynamic dependencies");

    Ok(ProjectModel {
        path: project.path.clone(),
        group: project.group.clone(),
        name: project.name.clone(),
        version: project.version.clone(),
        dynamic_dependencies: dynamic,
        children,
        project_dir: project.project_dir.display().to_string(),
    })
}
