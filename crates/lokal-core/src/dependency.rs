use serde::{Deserialize, Serialize};

/// The version assigned to every project-to-project override dependency.
///
/// This is `i16::MAX` rendered as a string. Because it sorts higher than any
/// real published version, the host's conflict resolution always prefers the
/// spliced project dependency over the external declaration it shadows. The
/// same value doubles as a marker on incoming dynamic-dependency
/// declarations: a declaration carrying exactly this version is "already a
/// local override" and is excluded from re-probing.
///
/// Known design smell: this is an implicit protocol overloading the version
/// field. An artifact genuinely published at version `32767` would be
/// misidentified as an override. An explicit tag on the declaration would be
/// the clean fix; the sentinel is kept for compatibility with build scripts
/// that already emit it.
pub const LOCAL_PROJECT_VERSION: &str = "32767";

/// A dependency entry in a configuration.
///
/// Equality is structural over the discriminating fields of each variant;
/// the override engine relies on this for duplicate detection.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Dependency {
    External(ExternalDependency),
    Project(ProjectDependency),
}

/// A dependency on an external artifact, identified by Maven-style
/// coordinates.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ExternalDependency {
    pub group: String,
    pub name: String,
    pub version: String,
}

/// A dependency on another project in the same build, addressed by project
/// path and target configuration name.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ProjectDependency {
    pub path: String,
    pub configuration: String,
}

impl Dependency {
    /// Shorthand for an external dependency.
    pub fn external(group: &str, name: &str, version: &str) -> Self {
        Self::External(ExternalDependency {
            group: group.to_string(),
            name: name.to_string(),
            version: version.to_string(),
        })
    }

    /// Shorthand for a project dependency.
    pub fn project(path: &str, configuration: &str) -> Self {
        Self::Project(ProjectDependency {
            path: path.to_string(),
            configuration: configuration.to_string(),
        })
    }

    /// Returns `true` if this declaration already points at a local override
    /// (it carries the [`LOCAL_PROJECT_VERSION`] sentinel).
    pub fn is_local_override(&self) -> bool {
        match self {
            Self::External(dep) => dep.version == LOCAL_PROJECT_VERSION,
            Self::Project(_) => true,
        }
    }
}

impl ExternalDependency {
    /// `group:name` identifier (without version), the coordinate key used by
    /// the project index.
    pub fn key(&self) -> String {
        format!("{}:{}", self.group, self.name)
    }
}

impl std::fmt::Display for Dependency {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::External(dep) => write!(f, "{}:{}:{}", dep.group, dep.name, dep.version),
            Self::Project(dep) => write!(f, "project {} ({})", dep.path, dep.configuration),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn structural_equality_for_project_dependencies() {
        let a = Dependency::project(":lib", "default");
        let b = Dependency::project(":lib", "default");
        let c = Dependency::project(":lib", "runtime");
        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn sentinel_marks_local_override() {
        assert!(Dependency::external("g", "a", LOCAL_PROJECT_VERSION).is_local_override());
        assert!(!Dependency::external("g", "a", "1.0").is_local_override());
        assert!(Dependency::project(":lib", "default").is_local_override());
    }

    #[test]
    fn display_forms() {
        assert_eq!(Dependency::external("g", "a", "1.0").to_string(), "g:a:1.0");
        assert_eq!(
            Dependency::project(":lib", "default").to_string(),
            "project :lib (default)"
        );
    }
}
