use std::collections::HashMap;

use crate::build::Build;
use crate::project::ProjectId;

/// Mapping from `group:name` coordinates to local projects.
///
/// Built once before any override processing begins, covering every project
/// in the tree, and read-only thereafter. This is what decides whether an
/// external dependency coordinate is actually a project of the current build.
#[derive(Debug, Clone)]
pub struct ProjectIndex {
    by_coordinate: HashMap<String, ProjectId>,
}

impl ProjectIndex {
    /// Index every project in the build. Projects with an empty group are
    /// left out; they cannot be matched by coordinate.
    pub fn build(build: &Build) -> Self {
        let mut by_coordinate = HashMap::new();
        for (id, project) in build.projects() {
            if project.group.is_empty() {
                continue;
            }
            by_coordinate.insert(project.coordinate_key(), id);
        }
        Self { by_coordinate }
    }

    pub fn get(&self, group: &str, name: &str) -> Option<ProjectId> {
        self.by_coordinate.get(&format!("{group}:{name}")).copied()
    }

    pub fn len(&self) -> usize {
        self.by_coordinate.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_coordinate.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::project::Project;

    #[test]
    fn indexes_whole_tree() {
        let mut build = Build::new();
        let root = build.add_root(Project::new(":", "g", "root", "1.0"));
        build.add_project(root, Project::new(":a", "g", "a", "1.0"));
        build.add_project(root, Project::new(":b", "other", "b", "1.0"));

        let index = ProjectIndex::build(&build);
        assert_eq!(index.len(), 3);
        assert!(index.get("g", "a").is_some());
        assert!(index.get("other", "b").is_some());
        assert!(index.get("g", "b").is_none());
    }

    #[test]
    fn skips_projects_without_group() {
        let mut build = Build::new();
        build.add_root(Project::new(":", "", "root", "1.0"));
        let index = ProjectIndex::build(&build);
        assert!(index.is_empty());
    }
}
