//! The `Resolver` trait and the in-memory lenient resolver.

use std::collections::HashSet;

use lokal_core::configuration::Configuration;
use lokal_core::dependency::Dependency;
use tracing::trace;

use crate::node::ResolvedNode;
use crate::repository::{ModuleRef, Repository};

/// The host resolution engine, seen from Lokal's side.
///
/// Resolution is lenient: requested first-level dependencies that cannot be
/// resolved are silently omitted rather than failing the operation. Some of
/// them are expected to be unresolvable in steady state, because previously
/// applied overrides leave declarations pointing at versions that no longer
/// exist externally.
pub trait Resolver {
    fn resolve_lenient(&self, configuration: &Configuration) -> Vec<ResolvedNode>;
}

/// A [`Resolver`] backed by an in-memory [`Repository`].
///
/// Resolves exactly the requested versions; conflict semantics belong to the
/// host engine this stands in for. Honors the configuration's exclude rules
/// and guards against dependency cycles per resolution path.
#[derive(Debug, Clone)]
pub struct MemoryResolver {
    repository: Repository,
}

impl MemoryResolver {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    fn resolve_ref(
        &self,
        configuration: &Configuration,
        module: &ModuleRef,
        path: &mut HashSet<String>,
    ) -> Option<ResolvedNode> {
        if configuration.excluded(&module.group, &module.name) {
            trace!(module = %format!("{}:{}", module.group, module.name), "excluded by configuration policy");
            return None;
        }
        let descriptor = self
            .repository
            .get(&module.group, &module.name, &module.version)?;

        let key = format!("{}:{}", module.group, module.name);
        if !path.insert(key.clone()) {
            // Already on the current resolution path; cut the cycle.
            return None;
        }
        let children = descriptor
            .dependencies
            .iter()
            .filter_map(|child| self.resolve_ref(configuration, child, path))
            .collect();
        path.remove(&key);

        Some(ResolvedNode {
            group: descriptor.group.clone(),
            name: descriptor.name.clone(),
            version: descriptor.version.clone(),
            configuration: descriptor.configuration.clone(),
            children,
        })
    }
}

impl Resolver for MemoryResolver {
    fn resolve_lenient(&self, configuration: &Configuration) -> Vec<ResolvedNode> {
        let mut forest = Vec::new();
        for dependency in &configuration.dependencies {
            let Dependency::External(external) = dependency else {
                continue;
            };
            let module = ModuleRef {
                group: external.group.clone(),
                name: external.name.clone(),
                version: external.version.clone(),
            };
            let mut path = HashSet::new();
            match self.resolve_ref(configuration, &module, &mut path) {
                Some(node) => forest.push(node),
                None => {
                    trace!(dependency = %external.key(), "unresolvable, dropped leniently");
                }
            }
        }
        forest
    }
}
