//! Application ports (traits) for external dependencies.
//!
//! In hexagonal architecture, ports define interfaces that the application
//! needs from the outside world. Adapters in `archgen-adapters` implement
//! these.
//!
//! ## Port Types
//!
//! - **Driven (Output) Ports**: Called by application, implemented by
//!   infrastructure
//!   - `Filesystem`: directory/file operations + namespace derivation
//!   - `BuildTool`: blocking invocations of the external build tool
//!
//! - **Driving (Input) Ports**: Called by external world, implemented by
//!   application (defined in the CLI layer)

use std::fmt;
use std::path::Path;

use crate::domain::{PackageRef, ProjectKind};
use crate::error::ArchgenResult;

/// Port for filesystem operations.
///
/// Implemented by:
/// - `archgen_adapters::filesystem::LocalFilesystem` (production)
/// - `archgen_adapters::filesystem::MemoryFilesystem` (testing)
pub trait Filesystem: Send + Sync {
    /// Check if a directory exists.
    fn directory_exists(&self, path: &Path) -> bool;

    /// Create a directory and all parent directories.
    fn create_dir_all(&self, path: &Path) -> ArchgenResult<()>;

    /// Write content to a file, overwriting any previous content.
    fn write_file(&self, path: &Path, content: &str) -> ArchgenResult<()>;

    /// Derive the namespace root from a project directory: the folder's base
    /// name up to its first `.` (`Acme.Core` → `Acme`).
    ///
    /// # Errors
    ///
    /// `ApplicationError::NamespaceDerivation` if the folder name contains
    /// no `.` — the original tool left this undefined; here it is an
    /// explicit error.
    fn namespace_root(&self, project_dir: &Path) -> ArchgenResult<String>;
}

/// Port for the external build tool.
///
/// Every call is a blocking request/response: the orchestrator issues the
/// request and waits for completion before proceeding. No timeout is
/// enforced.
///
/// Implemented by:
/// - `archgen_adapters::build_tool::DotnetCli` (production)
/// - `archgen_adapters::build_tool::RecordingBuildTool` (testing)
pub trait BuildTool: Send + Sync {
    /// Create a solution file named `solution_name` under `base_path`.
    fn create_solution(&self, base_path: &Path, solution_name: &str) -> ArchgenResult<()>;

    /// Create a project of the given kind at `project_dir`.
    fn create_project(&self, project_dir: &Path, kind: ProjectKind) -> ArchgenResult<()>;

    /// Register the project at `project_dir` with the solution at
    /// `base_path`.
    fn add_project_to_solution(&self, base_path: &Path, project_dir: &Path) -> ArchgenResult<()>;

    /// Attach a versioned package reference to the project.
    fn add_package_reference(
        &self,
        project_dir: &Path,
        project_name: &str,
        package: &PackageRef,
    ) -> ArchgenResult<()>;

    /// Attach a project reference to the project file at
    /// `referenced_project_file` (which must already exist on disk).
    fn add_project_reference(
        &self,
        project_dir: &Path,
        project_name: &str,
        referenced_project_file: &Path,
    ) -> ArchgenResult<()>;
}

/// Which build-tool operation an error or recorded call belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ToolAction {
    CreateSolution,
    CreateProject,
    AddProjectToSolution,
    AddPackageReference,
    AddProjectReference,
}

impl fmt::Display for ToolAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::CreateSolution => "create-solution",
            Self::CreateProject => "create-project",
            Self::AddProjectToSolution => "add-project-to-solution",
            Self::AddPackageReference => "add-package-reference",
            Self::AddProjectReference => "add-project-reference",
        };
        f.write_str(s)
    }
}
