//! Generation Service - main application orchestrator.
//!
//! Drives end-to-end generation for a chosen style:
//! 1. Ensure the base directory exists
//! 2. Create the solution via the build tool
//! 3. Resolve the generation plan (ordered layers, names, paths)
//! 4. Per layer: directory → project → solution registration → references →
//!    boilerplate files
//!
//! Layers are processed strictly sequentially in plan order; a project
//! reference can only be attached once the referenced project's file exists
//! on disk. Reference attachment is best-effort (logged and skipped on
//! failure); every other step aborts the run. There is no rollback — a
//! failed run leaves whatever was completed on disk.

use std::path::Path;

use tracing::{info, instrument, warn};

use crate::{
    application::ports::{BuildTool, Filesystem},
    domain::{ArchitectureStyle, GenerationPlan, PlannedProject, RenderContext, render},
    error::ArchgenResult,
};

/// Outcome of a successful generation run, for display by the caller.
#[derive(Debug, Clone, Default)]
pub struct GenerationReport {
    pub solution_name: String,
    pub projects: Vec<ProjectReport>,
    /// Count of package/project-reference attachments that failed and were
    /// skipped. Generation still succeeded; the solution may need manual
    /// reference fixes.
    pub skipped_references: usize,
}

/// One generated project and the boilerplate files written into it.
#[derive(Debug, Clone)]
pub struct ProjectReport {
    pub project_name: String,
    pub project_dir: std::path::PathBuf,
    pub files: Vec<std::path::PathBuf>,
}

/// Main generation service.
///
/// Owns the driven ports and walks a [`GenerationPlan`] against them.
pub struct GenerationService {
    filesystem: Box<dyn Filesystem>,
    build_tool: Box<dyn BuildTool>,
}

impl GenerationService {
    /// Create a new generation service with the given adapters.
    pub fn new(filesystem: Box<dyn Filesystem>, build_tool: Box<dyn BuildTool>) -> Self {
        Self {
            filesystem,
            build_tool,
        }
    }

    /// Generate a full solution skeleton.
    #[instrument(
        skip_all,
        fields(style = %style, solution = %solution_name, base = %base_path.display())
    )]
    pub fn generate(
        &self,
        style: ArchitectureStyle,
        base_path: &Path,
        solution_name: &str,
    ) -> ArchgenResult<GenerationReport> {
        info!("Generating {} architecture", style.display_name());

        if !self.filesystem.directory_exists(base_path) {
            self.filesystem.create_dir_all(base_path)?;
        }

        self.build_tool.create_solution(base_path, solution_name)?;

        let plan = GenerationPlan::resolve(style, base_path, solution_name)?;

        let mut report = GenerationReport {
            solution_name: solution_name.to_string(),
            ..Default::default()
        };

        for project in &plan.projects {
            let project_report = self.generate_project(&plan, project, &mut report)?;
            report.projects.push(project_report);
        }

        info!(
            projects = report.projects.len(),
            skipped_references = report.skipped_references,
            "Generation completed"
        );
        Ok(report)
    }

    // -------------------------------------------------------------------------
    // Internal Helpers
    // -------------------------------------------------------------------------

    /// Run one layer through its full step sequence.
    ///
    /// Directory, project creation, and solution registration failures
    /// abort the run; reference wiring failures are recorded and skipped.
    #[instrument(skip_all, fields(project = %project.project_name))]
    fn generate_project(
        &self,
        plan: &GenerationPlan,
        project: &PlannedProject,
        report: &mut GenerationReport,
    ) -> ArchgenResult<ProjectReport> {
        let dir = &project.project_dir;

        self.filesystem.create_dir_all(dir)?;
        self.build_tool.create_project(dir, project.layer.kind)?;
        self.build_tool
            .add_project_to_solution(&plan.base_path, dir)?;

        report.skipped_references += self.attach_references(plan, project);

        let files = self.write_boilerplate(plan, project)?;

        info!(files = files.len(), "Project generated");
        Ok(ProjectReport {
            project_name: project.project_name.clone(),
            project_dir: dir.clone(),
            files,
        })
    }

    /// Attach package and project references, best-effort.
    ///
    /// Returns the number of attachments that failed. Failures are logged
    /// with the offending identifiers and generation continues — preserved
    /// behaviour from the original tool.
    fn attach_references(&self, plan: &GenerationPlan, project: &PlannedProject) -> usize {
        let mut skipped = 0;

        for package in project.layer.package_refs {
            if let Err(e) = self.build_tool.add_package_reference(
                &project.project_dir,
                &project.project_name,
                package,
            ) {
                warn!(
                    project = %project.project_name,
                    package = %package,
                    error = %e,
                    "Failed to add package reference, continuing"
                );
                skipped += 1;
            }
        }

        for suffix in project.layer.project_refs {
            let referenced = plan.referenced_project_file(suffix);
            if let Err(e) = self.build_tool.add_project_reference(
                &project.project_dir,
                &project.project_name,
                &referenced,
            ) {
                warn!(
                    project = %project.project_name,
                    reference = %referenced.display(),
                    error = %e,
                    "Failed to add project reference, continuing"
                );
                skipped += 1;
            }
        }

        skipped
    }

    /// Render and write the layer's boilerplate files.
    fn write_boilerplate(
        &self,
        plan: &GenerationPlan,
        project: &PlannedProject,
    ) -> ArchgenResult<Vec<std::path::PathBuf>> {
        let namespace = self.filesystem.namespace_root(&project.project_dir)?;
        let ctx = RenderContext::new(namespace);

        for subdir in project.layer.scaffold_dirs {
            self.filesystem
                .create_dir_all(&project.project_dir.join(subdir))?;
        }

        let mut written = Vec::new();
        for file in render::render_layer(plan.style, project.layer.boilerplate, &ctx) {
            let path = project.project_dir.join(&file.path);
            self.filesystem.write_file(&path, &file.content)?;
            written.push(file.path);
        }
        Ok(written)
    }
}
