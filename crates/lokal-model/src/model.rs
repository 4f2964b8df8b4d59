use std::collections::BTreeMap;
use std::hash::{Hash, Hasher};

use lokal_core::dependency::Dependency;
use serde::{Deserialize, Serialize};

/// An immutable snapshot of one project in the tree.
///
/// Identity (equality and hashing) is defined over `(path, group, name,
/// children)` only. Version and dynamic-dependency contents are deliberately
/// excluded, so structurally-unchanged snapshots compare equal across
/// incidental version bumps.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectModel {
    pub path: String,
    pub group: String,
    pub name: String,
    pub version: String,
    pub dynamic_dependencies: BTreeMap<String, Vec<Dependency>>,
    /// Child snapshots, sorted by path.
    pub children: Vec<ProjectModel>,
    pub project_dir: String,
}

impl PartialEq for ProjectModel {
    fn eq(&self, other: &Self) -> bool {
        self.path == other.path
            && self.group == other.group
            && self.name == other.name
            && self.children == other.children
    }
}

impl Eq for ProjectModel {}

impl Hash for ProjectModel {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.path.hash(state);
        self.group.hash(state);
        self.name.hash(state);
        self.children.hash(state);
    }
}

impl std::fmt::Display for ProjectModel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "ProjectModel{{path='{}'}}", self.path)
    }
}
