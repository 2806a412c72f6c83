//! Generation plan: the concrete instantiation of a style for one run.
//!
//! A plan is computed once per invocation, holds no state across runs, and
//! is pure data — no I/O happens until the orchestrator walks it.

use std::path::{Path, PathBuf};

use crate::domain::error::DomainError;
use crate::domain::layer::LayerSpec;
use crate::domain::style::ArchitectureStyle;
use crate::domain::{graph, registry};

/// The ordered, name-resolved plan for one generation run.
#[derive(Debug, Clone)]
pub struct GenerationPlan {
    pub style: ArchitectureStyle,
    pub solution_name: String,
    pub base_path: PathBuf,
    /// Projects in generation order — a valid topological order of the
    /// style's layer graph (every project follows the projects it
    /// references).
    pub projects: Vec<PlannedProject>,
}

/// One layer resolved against a concrete solution name and base path.
#[derive(Debug, Clone)]
pub struct PlannedProject {
    pub layer: &'static LayerSpec,
    /// `{solutionName}{suffix}`, e.g. `Acme.Core`.
    pub project_name: String,
    /// `{basePath}/{projectName}`.
    pub project_dir: PathBuf,
}

impl GenerationPlan {
    /// Resolve a plan for `style` rooted at `base_path`.
    ///
    /// Validates the solution name, orders the style's layers via the
    /// dependency graph, and resolves concrete project names and paths.
    pub fn resolve(
        style: ArchitectureStyle,
        base_path: &Path,
        solution_name: &str,
    ) -> Result<Self, DomainError> {
        validate_solution_name(solution_name)?;

        let ordered = graph::order(registry::layers_for(style))?;

        let projects = ordered
            .into_iter()
            .map(|layer| {
                let project_name = format!("{solution_name}{}", layer.suffix);
                let project_dir = base_path.join(&project_name);
                PlannedProject {
                    layer,
                    project_name,
                    project_dir,
                }
            })
            .collect();

        Ok(Self {
            style,
            solution_name: solution_name.to_string(),
            base_path: base_path.to_path_buf(),
            projects,
        })
    }

    /// Path of the project file for a referenced layer, as passed to the
    /// build tool when wiring project references:
    /// `{base}/{solution}{suffix}/{solution}{suffix}.csproj`.
    pub fn referenced_project_file(&self, suffix: &str) -> PathBuf {
        let project_name = format!("{}{suffix}", self.solution_name);
        self.base_path
            .join(&project_name)
            .join(format!("{project_name}.csproj"))
    }
}

fn validate_solution_name(name: &str) -> Result<(), DomainError> {
    let invalid = |reason: &str| DomainError::InvalidSolutionName {
        name: name.to_string(),
        reason: reason.to_string(),
    };

    if name.is_empty() {
        return Err(invalid("name cannot be empty"));
    }
    if name.starts_with('.') {
        return Err(invalid("name cannot start with '.'"));
    }
    if name.contains('/') || name.contains('\\') {
        return Err(invalid("name cannot contain path separators"));
    }
    if name.chars().any(char::is_whitespace) {
        return Err(invalid("name cannot contain whitespace"));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nlayer_plan_resolves_names_and_paths() {
        let plan =
            GenerationPlan::resolve(ArchitectureStyle::NLayer, Path::new("/tmp/out"), "Acme")
                .unwrap();

        let names: Vec<_> = plan.projects.iter().map(|p| p.project_name.as_str()).collect();
        assert_eq!(
            names,
            [
                "Acme.Core",
                "Acme.Entities",
                "Acme.DataAccess",
                "Acme.Business",
                "Acme.API"
            ]
        );
        assert_eq!(
            plan.projects[0].project_dir,
            PathBuf::from("/tmp/out/Acme.Core")
        );
    }

    #[test]
    fn onion_plan_resolves_names() {
        let plan =
            GenerationPlan::resolve(ArchitectureStyle::Onion, Path::new("."), "Shop").unwrap();
        let names: Vec<_> = plan.projects.iter().map(|p| p.project_name.as_str()).collect();
        assert_eq!(
            names,
            [
                "Shop.Domain",
                "Shop.Application",
                "Shop.Infrastructure",
                "Shop.Persistence",
                "Shop.API"
            ]
        );
    }

    #[test]
    fn referenced_project_file_points_into_sibling_project() {
        let plan =
            GenerationPlan::resolve(ArchitectureStyle::NLayer, Path::new("/base"), "Acme").unwrap();
        assert_eq!(
            plan.referenced_project_file(".Core"),
            PathBuf::from("/base/Acme.Core/Acme.Core.csproj")
        );
    }

    #[test]
    fn every_reference_resolves_to_an_earlier_project() {
        for style in ArchitectureStyle::all() {
            let plan = GenerationPlan::resolve(style, Path::new("/b"), "S").unwrap();
            for (i, project) in plan.projects.iter().enumerate() {
                for reference in project.layer.project_refs {
                    let j = plan
                        .projects
                        .iter()
                        .position(|p| p.layer.suffix == *reference)
                        .unwrap();
                    assert!(j < i, "{style}: {reference} after {}", project.project_name);
                }
            }
        }
    }

    #[test]
    fn empty_name_is_rejected() {
        let result = GenerationPlan::resolve(ArchitectureStyle::NLayer, Path::new("."), "");
        assert!(matches!(
            result,
            Err(DomainError::InvalidSolutionName { .. })
        ));
    }

    #[test]
    fn names_with_separators_are_rejected() {
        for name in ["a/b", "a\\b", ".hidden", "has space"] {
            let result = GenerationPlan::resolve(ArchitectureStyle::Onion, Path::new("."), name);
            assert!(result.is_err(), "expected rejection for {name:?}");
        }
    }

    #[test]
    fn dotted_names_are_allowed() {
        // `Acme.Shop` was accepted by the original tool; the namespace root
        // then derives to `Acme`.
        assert!(GenerationPlan::resolve(ArchitectureStyle::NLayer, Path::new("."), "Acme.Shop").is_ok());
    }
}
