use serde::{Deserialize, Serialize};

use crate::dependency::Dependency;

/// A transitive dependency excluded from resolution of a configuration.
///
/// A `None` module excludes the whole group.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExcludeRule {
    pub group: String,
    #[serde(default)]
    pub module: Option<String>,
}

impl ExcludeRule {
    pub fn group(group: &str) -> Self {
        Self {
            group: group.to_string(),
            module: None,
        }
    }

    pub fn module(group: &str, module: &str) -> Self {
        Self {
            group: group.to_string(),
            module: Some(module.to_string()),
        }
    }

    /// Returns `true` if this rule excludes the given coordinates.
    pub fn matches(&self, group: &str, name: &str) -> bool {
        self.group == group && self.module.as_deref().map(|m| m == name).unwrap_or(true)
    }
}

/// A named, ordered collection of dependency entries on a project.
///
/// The real dependency set of a configuration is only ever appended to.
/// Probe copies created with [`Configuration::copy_without_dependencies`]
/// are disposable and must never be attached back to a project.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Configuration {
    pub name: String,
    pub dependencies: Vec<Dependency>,
    #[serde(default)]
    pub excludes: Vec<ExcludeRule>,
}

impl Configuration {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            dependencies: Vec::new(),
            excludes: Vec::new(),
        }
    }

    /// Append a dependency entry. Existing entries are never removed or
    /// reordered.
    pub fn add_dependency(&mut self, dependency: Dependency) {
        self.dependencies.push(dependency);
    }

    /// Returns `true` if a structurally-equal entry is already present.
    pub fn contains(&self, dependency: &Dependency) -> bool {
        self.dependencies.iter().any(|d| d == dependency)
    }

    /// Create a disposable probe copy: same name and resolution policy
    /// (exclude rules), empty dependency set.
    ///
    /// Copying the real configuration rather than creating a fresh one keeps
    /// inherited policy identical to what the real resolution would see.
    pub fn copy_without_dependencies(&self) -> Self {
        Self {
            name: self.name.clone(),
            dependencies: Vec::new(),
            excludes: self.excludes.clone(),
        }
    }

    /// Returns `true` if resolution of this configuration excludes the given
    /// coordinates.
    pub fn excluded(&self, group: &str, name: &str) -> bool {
        self.excludes.iter().any(|rule| rule.matches(group, name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn probe_copy_inherits_policy_but_not_dependencies() {
        let mut config = Configuration::new("compile");
        config.add_dependency(Dependency::external("g", "a", "1.0"));
        config.excludes.push(ExcludeRule::group("org.banned"));

        let probe = config.copy_without_dependencies();
        assert_eq!(probe.name, "compile");
        assert!(probe.dependencies.is_empty());
        assert!(probe.excluded("org.banned", "anything"));
    }

    #[test]
    fn exclude_rule_scoping() {
        let rule = ExcludeRule::module("g", "a");
        assert!(rule.matches("g", "a"));
        assert!(!rule.matches("g", "b"));
        assert!(ExcludeRule::group("g").matches("g", "b"));
    }

    #[test]
    fn contains_is_structural() {
        let mut config = Configuration::new("compile");
        config.add_dependency(Dependency::project(":lib", "default"));
        assert!(config.contains(&Dependency::project(":lib", "default")));
        assert!(!config.contains(&Dependency::project(":lib", "runtime")));
    }
}
