//! Probe resolution and the splice walk.

use lokal_core::build::Build;
use lokal_core::dependency::Dependency;
use lokal_core::index::ProjectIndex;
use lokal_core::project::ProjectId;
use lokal_resolver::node::ResolvedNode;
use lokal_resolver::resolver::Resolver;
use lokal_util::errors::{LokalError, LokalResult};
use tracing::{debug, trace};

/// Apply transitive overrides to one project.
///
/// For each `(configuration, declared dynamic dependencies)` pair on the
/// project: build a probe copy of the configuration populated with the
/// declarations that are not already local overrides, resolve it leniently,
/// and walk the resolved graph splicing project dependencies for every module
/// that matches a project in `index`.
///
/// A declaration against a configuration that does not exist on the project
/// is a fatal misconfiguration ([`LokalError::ConfigurationNotFound`]).
pub fn apply_overrides(
    build: &mut Build,
    project: ProjectId,
    index: &ProjectIndex,
    resolver: &dyn Resolver,
) -> LokalResult<()> {
    if !build.project(project).overrides_enabled {
        return Ok(());
    }
    let declared = build.project(project).dynamic_dependencies.clone();
    for (configuration_name, dependencies) in declared {
        let Some(configuration) = build.configuration(project, &configuration_name) else {
            return Err(LokalError::ConfigurationNotFound {
                project: build.project(project).path.clone(),
                configuration: configuration_name,
            }
            .into());
        };

        // The probe is a copy of the real configuration so that inherited
        // resolution policy matches exactly; its dependency set is replaced
        // with the declarations still pointing at external artifacts.
        let mut probe = configuration.copy_without_dependencies();
        for dependency in dependencies {
            if !dependency.is_local_override() {
                probe.add_dependency(dependency);
            }
        }

        // Lenient on purpose: previously overridden dependencies may refer to
        // locally assigned versions that no longer resolve externally.
        for resolved in resolver.resolve_lenient(&probe) {
            splice_overrides(build, project, &configuration_name, resolved.children, index);
        }
    }
    Ok(())
}

/// Depth-first walk over the transitive dependencies of a resolved
/// first-level module.
///
/// A node matching a local project gets a splice scheduled against it and its
/// subtree is not descended into: the project dependency carries its own
/// transitive closure through the target build. A node with no local match
/// is a genuine external library, so the hunt continues in its children.
fn splice_overrides(
    build: &mut Build,
    source: ProjectId,
    configuration_name: &str,
    nodes: Vec<ResolvedNode>,
    index: &ProjectIndex,
) {
    for node in nodes {
        match index.get(&node.group, &node.name) {
            Some(target) => {
                // The target's configurations are only final once its own
                // build script has run; the observer runs the splice
                // immediately if that already happened.
                let source_configuration = configuration_name.to_string();
                let target_configuration = node.configuration.clone();
                build.after_evaluate(target, move |build, target| {
                    splice(
                        build,
                        source,
                        &source_configuration,
                        target,
                        &target_configuration,
                    );
                });
            }
            None => {
                splice_overrides(build, source, configuration_name, node.children, index);
            }
        }
    }
}

/// Append a project dependency on `target` to the source configuration,
/// unless a structurally-equal entry is already present.
fn splice(
    build: &mut Build,
    source: ProjectId,
    source_configuration: &str,
    target: ProjectId,
    target_configuration: &str,
) {
    let target_project = build.project(target);
    // Some ecosystem-convention configuration names (e.g. "master") don't
    // exist on every project; those resolve to nothing and are skipped.
    if !target_project
        .configurations
        .contains_key(target_configuration)
    {
        trace!(
            project = %target_project.path,
            configuration = target_configuration,
            "target configuration not found, skipping splice"
        );
        return;
    }
    let candidate = Dependency::project(&target_project.path, target_configuration);

    let Some(configuration) = build.configuration_mut(source, source_configuration) else {
        return;
    };
    // The same project dependency may already be present, either spliced by
    // an earlier override or declared directly by the user.
    if configuration.contains(&candidate) {
        trace!(dependency = %candidate, "override already present");
        return;
    }
    debug!(dependency = %candidate, configuration = source_configuration, "adding override project dependency");
    configuration.add_dependency(candidate);
}
