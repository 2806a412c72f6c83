//! Recording build-tool fake for testing.

use std::{
    collections::HashSet,
    path::{Path, PathBuf},
    sync::{Arc, Mutex},
};

use archgen_core::{
    application::{
        ApplicationError,
        ports::{BuildTool, ToolAction},
    },
    domain::{PackageRef, ProjectKind},
    error::ArchgenResult,
};

/// One recorded build-tool invocation, in call order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ToolCall {
    CreateSolution {
        base_path: PathBuf,
        solution_name: String,
    },
    CreateProject {
        project_dir: PathBuf,
        kind: ProjectKind,
    },
    AddProjectToSolution {
        base_path: PathBuf,
        project_dir: PathBuf,
    },
    AddPackageReference {
        project_name: String,
        package: PackageRef,
    },
    AddProjectReference {
        project_name: String,
        referenced_project_file: PathBuf,
    },
}

impl ToolCall {
    pub fn action(&self) -> ToolAction {
        match self {
            Self::CreateSolution { .. } => ToolAction::CreateSolution,
            Self::CreateProject { .. } => ToolAction::CreateProject,
            Self::AddProjectToSolution { .. } => ToolAction::AddProjectToSolution,
            Self::AddPackageReference { .. } => ToolAction::AddPackageReference,
            Self::AddProjectReference { .. } => ToolAction::AddProjectReference,
        }
    }
}

/// Build-tool fake that records every call and can be scripted to fail.
///
/// Failures are keyed by `(action, needle)`: a call fails when its subject
/// (project name, package name, or solution name) contains the needle.
/// Calls are recorded whether or not they fail.
#[derive(Debug, Clone, Default)]
pub struct RecordingBuildTool {
    calls: Arc<Mutex<Vec<ToolCall>>>,
    failures: Arc<Mutex<HashSet<(ToolAction, String)>>>,
}

impl RecordingBuildTool {
    pub fn new() -> Self {
        Self::default()
    }

    /// Script a failure: any `action` call whose subject contains `needle`
    /// returns an error.
    pub fn fail_on(self, action: ToolAction, needle: impl Into<String>) -> Self {
        self.failures
            .lock()
            .unwrap()
            .insert((action, needle.into()));
        self
    }

    /// All recorded calls, in order.
    pub fn calls(&self) -> Vec<ToolCall> {
        self.calls.lock().unwrap().clone()
    }

    /// Recorded calls of one action kind, in order.
    pub fn calls_of(&self, action: ToolAction) -> Vec<ToolCall> {
        self.calls()
            .into_iter()
            .filter(|c| c.action() == action)
            .collect()
    }

    fn record(&self, call: ToolCall, subject: &str) -> ArchgenResult<()> {
        let action = call.action();
        self.calls.lock().unwrap().push(call);

        let scripted = self
            .failures
            .lock()
            .unwrap()
            .iter()
            .any(|(a, needle)| *a == action && subject.contains(needle.as_str()));

        if scripted {
            Err(ApplicationError::ToolFailure {
                action,
                subject: subject.to_string(),
                reason: "scripted failure".into(),
            }
            .into())
        } else {
            Ok(())
        }
    }
}

impl BuildTool for RecordingBuildTool {
    fn create_solution(&self, base_path: &Path, solution_name: &str) -> ArchgenResult<()> {
        self.record(
            ToolCall::CreateSolution {
                base_path: base_path.to_path_buf(),
                solution_name: solution_name.to_string(),
            },
            solution_name,
        )
    }

    fn create_project(&self, project_dir: &Path, kind: ProjectKind) -> ArchgenResult<()> {
        let subject = project_dir.display().to_string();
        self.record(
            ToolCall::CreateProject {
                project_dir: project_dir.to_path_buf(),
                kind,
            },
            &subject,
        )
    }

    fn add_project_to_solution(&self, base_path: &Path, project_dir: &Path) -> ArchgenResult<()> {
        let subject = project_dir.display().to_string();
        self.record(
            ToolCall::AddProjectToSolution {
                base_path: base_path.to_path_buf(),
                project_dir: project_dir.to_path_buf(),
            },
            &subject,
        )
    }

    fn add_package_reference(
        &self,
        _project_dir: &Path,
        project_name: &str,
        package: &PackageRef,
    ) -> ArchgenResult<()> {
        let subject = format!("{project_name} {}", package.name);
        self.record(
            ToolCall::AddPackageReference {
                project_name: project_name.to_string(),
                package: *package,
            },
            &subject,
        )
    }

    fn add_project_reference(
        &self,
        _project_dir: &Path,
        project_name: &str,
        referenced_project_file: &Path,
    ) -> ArchgenResult<()> {
        let subject = format!("{project_name} {}", referenced_project_file.display());
        self.record(
            ToolCall::AddProjectReference {
                project_name: project_name.to_string(),
                referenced_project_file: referenced_project_file.to_path_buf(),
            },
            &subject,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn records_calls_in_order() {
        let tool = RecordingBuildTool::new();
        tool.create_solution(Path::new("/b"), "Acme").unwrap();
        tool.create_project(Path::new("/b/Acme.Core"), ProjectKind::Library)
            .unwrap();

        let calls = tool.calls();
        assert_eq!(calls.len(), 2);
        assert_eq!(calls[0].action(), ToolAction::CreateSolution);
        assert_eq!(calls[1].action(), ToolAction::CreateProject);
    }

    #[test]
    fn scripted_failure_still_records() {
        let tool =
            RecordingBuildTool::new().fail_on(ToolAction::AddPackageReference, "EntityFramework");
        let result = tool.add_package_reference(
            Path::new("/b/Acme.DataAccess"),
            "Acme.DataAccess",
            &PackageRef::new("Microsoft.EntityFrameworkCore", "7.0.0"),
        );
        assert!(result.is_err());
        assert_eq!(tool.calls().len(), 1);
    }

    #[test]
    fn unrelated_calls_do_not_fail() {
        let tool = RecordingBuildTool::new().fail_on(ToolAction::CreateProject, ".API");
        assert!(
            tool.create_project(Path::new("/b/Acme.Core"), ProjectKind::Library)
                .is_ok()
        );
        assert!(
            tool.create_project(Path::new("/b/Acme.API"), ProjectKind::Api)
                .is_err()
        );
    }
}
