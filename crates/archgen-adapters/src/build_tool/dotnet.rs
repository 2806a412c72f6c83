//! `dotnet` CLI adapter.
//!
//! Each port method shells out to the .NET SDK and blocks until the process
//! exits. No timeout is enforced — an unresponsive `dotnet` stalls the run.
//! A non-zero exit status (or a failure to spawn the process at all) maps to
//! [`ApplicationError::ToolFailure`]; the orchestrator decides which of
//! those are fatal.

use std::path::Path;
use std::process::Command;

use tracing::debug;

use archgen_core::{
    application::{
        ApplicationError,
        ports::{BuildTool, ToolAction},
    },
    domain::{PackageRef, ProjectKind},
    error::ArchgenResult,
};

/// Production build-tool adapter wrapping the `dotnet` CLI.
#[derive(Debug, Clone)]
pub struct DotnetCli {
    binary: String,
}

impl DotnetCli {
    /// Create an adapter invoking `dotnet` from `PATH`.
    pub fn new() -> Self {
        Self {
            binary: "dotnet".into(),
        }
    }

    /// Override the binary name/path (tests, non-standard installs).
    pub fn with_binary(binary: impl Into<String>) -> Self {
        Self {
            binary: binary.into(),
        }
    }

    /// Run one `dotnet` invocation and map its outcome.
    fn run(
        &self,
        action: ToolAction,
        subject: &str,
        working_dir: Option<&Path>,
        args: &[&str],
    ) -> ArchgenResult<()> {
        debug!(%action, subject, ?args, "invoking {}", self.binary);

        let mut command = Command::new(&self.binary);
        command.args(args);
        if let Some(dir) = working_dir {
            command.current_dir(dir);
        }

        let failure = |reason: String| ApplicationError::ToolFailure {
            action,
            subject: subject.to_string(),
            reason,
        };

        // Capture output so the tool's own chatter doesn't interleave with
        // ours; stderr is surfaced in the error on failure.
        let output = command
            .output()
            .map_err(|e| failure(format!("failed to spawn '{}': {e}", self.binary)))?;

        if output.status.success() {
            Ok(())
        } else {
            let stderr = String::from_utf8_lossy(&output.stderr);
            let stderr = stderr.trim();
            let reason = match (output.status.code(), stderr.is_empty()) {
                (Some(code), true) => format!("exit status {code}"),
                (Some(code), false) => format!("exit status {code}: {stderr}"),
                (None, _) => "terminated by signal".to_string(),
            };
            Err(failure(reason).into())
        }
    }
}

impl Default for DotnetCli {
    fn default() -> Self {
        Self::new()
    }
}

impl BuildTool for DotnetCli {
    fn create_solution(&self, base_path: &Path, solution_name: &str) -> ArchgenResult<()> {
        self.run(
            ToolAction::CreateSolution,
            solution_name,
            Some(base_path),
            &["new", "sln", "-n", solution_name],
        )
    }

    fn create_project(&self, project_dir: &Path, kind: ProjectKind) -> ArchgenResult<()> {
        let template = match kind {
            ProjectKind::Library => "classlib",
            ProjectKind::Api => "webapi",
        };
        let dir = path_str(project_dir);
        self.run(
            ToolAction::CreateProject,
            &dir,
            None,
            &["new", template, "-o", &dir],
        )
    }

    fn add_project_to_solution(&self, base_path: &Path, project_dir: &Path) -> ArchgenResult<()> {
        let dir = path_str(project_dir);
        self.run(
            ToolAction::AddProjectToSolution,
            &dir,
            Some(base_path),
            &["sln", "add", &dir],
        )
    }

    fn add_package_reference(
        &self,
        project_dir: &Path,
        project_name: &str,
        package: &PackageRef,
    ) -> ArchgenResult<()> {
        let project_file = path_str(&project_dir.join(format!("{project_name}.csproj")));
        self.run(
            ToolAction::AddPackageReference,
            &format!("{project_name} -> {}", package.name),
            None,
            &[
                "add",
                &project_file,
                "package",
                package.name,
                "--version",
                package.version,
            ],
        )
    }

    fn add_project_reference(
        &self,
        project_dir: &Path,
        project_name: &str,
        referenced_project_file: &Path,
    ) -> ArchgenResult<()> {
        let project_file = path_str(&project_dir.join(format!("{project_name}.csproj")));
        let referenced = path_str(referenced_project_file);
        self.run(
            ToolAction::AddProjectReference,
            &format!("{project_name} -> {referenced}"),
            None,
            &["add", &project_file, "reference", &referenced],
        )
    }
}

fn path_str(path: &Path) -> String {
    path.display().to_string()
}
