use std::collections::BTreeMap;
use std::path::PathBuf;

use crate::configuration::Configuration;
use crate::dependency::Dependency;

/// Where a project is in the host's configuration lifecycle.
///
/// A project's configurations are not guaranteed to exist or be final until
/// its own build script has run to completion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EvaluationState {
    Unevaluated,
    Evaluated,
}

/// Opaque handle to a project inside a [`Build`](crate::build::Build) arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ProjectId(pub(crate) usize);

/// A node in the build's module hierarchy.
///
/// Identified uniquely by `(group, name)` coordinates and positioned in the
/// tree by `path`. The `dynamic_dependencies` map is the per-project
/// extension: for each configuration name, the dependency declarations the
/// user marked as candidates for local-project substitution.
#[derive(Debug, Clone)]
pub struct Project {
    pub path: String,
    pub group: String,
    pub name: String,
    pub version: String,
    pub project_dir: PathBuf,
    pub configurations: BTreeMap<String, Configuration>,
    pub dynamic_dependencies: BTreeMap<String, Vec<Dependency>>,
    /// Host-owned gate: whether the override behavior is applied to this
    /// project and not explicitly disabled.
    pub overrides_enabled: bool,
    pub(crate) state: EvaluationState,
    pub(crate) children: Vec<ProjectId>,
}

impl Project {
    pub fn new(path: &str, group: &str, name: &str, version: &str) -> Self {
        Self {
            path: path.to_string(),
            group: group.to_string(),
            name: name.to_string(),
            version: version.to_string(),
            project_dir: PathBuf::new(),
            configurations: BTreeMap::new(),
            dynamic_dependencies: BTreeMap::new(),
            overrides_enabled: true,
            state: EvaluationState::Unevaluated,
            children: Vec::new(),
        }
    }

    pub fn with_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.project_dir = dir.into();
        self
    }

    pub fn with_configuration(mut self, configuration: Configuration) -> Self {
        self.configurations
            .insert(configuration.name.clone(), configuration);
        self
    }

    /// Declare dynamic dependencies for a configuration.
    pub fn with_dynamic_dependencies(
        mut self,
        configuration: &str,
        dependencies: Vec<Dependency>,
    ) -> Self {
        self.dynamic_dependencies
            .insert(configuration.to_string(), dependencies);
        self
    }

    /// `group:name` identifier, the key used by the project index.
    pub fn coordinate_key(&self) -> String {
        format!("{}:{}", self.group, self.name)
    }

    pub fn state(&self) -> EvaluationState {
        self.state
    }

    pub fn children(&self) -> &[ProjectId] {
        &self.children
    }
}

impl std::fmt::Display for Project {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "project '{}'", self.path)
    }
}
