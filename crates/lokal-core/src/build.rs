use tracing::trace;

use crate::configuration::Configuration;
use crate::project::{EvaluationState, Project, ProjectId};

/// A one-shot continuation fired when a project finishes evaluating.
type Continuation = Box<dyn FnOnce(&mut Build, ProjectId)>;

/// The build host's view of a multi-project build: an arena-owned, rooted,
/// acyclic project tree plus the evaluation-lifecycle observer.
///
/// All mutation happens on the host's single sequential configuration-phase
/// callback sequence; there is no engine-level parallelism.
pub struct Build {
    projects: Vec<Project>,
    /// Continuations waiting for a project to finish evaluating, keyed by
    /// arena slot.
    pending: Vec<Vec<Continuation>>,
    root: Option<ProjectId>,
}

impl Build {
    pub fn new() -> Self {
        Self {
            projects: Vec::new(),
            pending: Vec::new(),
            root: None,
        }
    }

    /// Add the root project. Panics in debug builds if a root already exists;
    /// the host constructs exactly one tree per build.
    pub fn add_root(&mut self, project: Project) -> ProjectId {
        debug_assert!(self.root.is_none(), "build already has a root project");
        let id = self.push(project);
        self.root = Some(id);
        id
    }

    /// Add a child project under `parent`.
    pub fn add_project(&mut self, parent: ProjectId, project: Project) -> ProjectId {
        let id = self.push(project);
        self.projects[parent.0].children.push(id);
        id
    }

    fn push(&mut self, project: Project) -> ProjectId {
        let id = ProjectId(self.projects.len());
        self.projects.push(project);
        self.pending.push(Vec::new());
        id
    }

    pub fn root(&self) -> ProjectId {
        self.root.expect("build has no root project")
    }

    pub fn project(&self, id: ProjectId) -> &Project {
        &self.projects[id.0]
    }

    pub fn project_mut(&mut self, id: ProjectId) -> &mut Project {
        &mut self.projects[id.0]
    }

    /// Iterate over every project in the tree in arena order.
    pub fn projects(&self) -> impl Iterator<Item = (ProjectId, &Project)> {
        self.projects
            .iter()
            .enumerate()
            .map(|(i, p)| (ProjectId(i), p))
    }

    /// Look up a configuration by name on a project.
    pub fn configuration(&self, id: ProjectId, name: &str) -> Option<&Configuration> {
        self.projects[id.0].configurations.get(name)
    }

    pub fn configuration_mut(&mut self, id: ProjectId, name: &str) -> Option<&mut Configuration> {
        self.projects[id.0].configurations.get_mut(name)
    }

    pub fn is_evaluated(&self, id: ProjectId) -> bool {
        self.projects[id.0].state == EvaluationState::Evaluated
    }

    /// Register a one-shot continuation to run once `id` finishes evaluating.
    ///
    /// If the project is already evaluated the continuation runs immediately,
    /// so callers never need to branch on the state themselves.
    pub fn after_evaluate<F>(&mut self, id: ProjectId, continuation: F)
    where
        F: FnOnce(&mut Build, ProjectId) + 'static,
    {
        if self.is_evaluated(id) {
            continuation(self, id);
        } else {
            self.pending[id.0].push(Box::new(continuation));
        }
    }

    /// Transition a project to the evaluated state and run its pending
    /// continuations in registration order. Idempotent: a second call on the
    /// same project does nothing.
    pub fn mark_evaluated(&mut self, id: ProjectId) {
        if self.is_evaluated(id) {
            return;
        }
        self.projects[id.0].state = EvaluationState::Evaluated;
        let continuations = std::mem::take(&mut self.pending[id.0]);
        if !continuations.is_empty() {
            trace!(
                project = %self.projects[id.0].path,
                count = continuations.len(),
                "running deferred continuations"
            );
        }
        for continuation in continuations {
            continuation(self, id);
        }
    }
}

impl Default for Build {
    fn default() -> Self {
        Self::new()
    }
}
