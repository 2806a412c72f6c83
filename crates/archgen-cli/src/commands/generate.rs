//! Implementation of the `archgen nlayer` / `archgen onion` commands.
//!
//! Responsibility: translate CLI arguments into a generation request, call
//! the core generation service, and display results. No scaffolding logic
//! lives here.

use tracing::{debug, info, instrument};

use archgen_adapters::{DotnetCli, LocalFilesystem};
use archgen_core::{
    application::GenerationService,
    domain::{ArchitectureStyle, GenerationPlan, RenderContext, render_layer},
};

use crate::{
    cli::{GenerateArgs, global::GlobalArgs},
    config::AppConfig,
    error::{CliError, CliResult},
    output::OutputManager,
};

/// The placeholder used when neither the CLI nor the config names a
/// solution. Mirrors the original tool's default.
const PLACEHOLDER_NAME: &str = "MyProject";

/// Execute a generate subcommand for the given style.
///
/// Dispatch sequence:
/// 1. Resolve the solution name (argument → config default → placeholder)
/// 2. Resolve the base path (`--output` → current directory)
/// 3. Early-exit with a plan preview if `--dry-run`
/// 4. Execute generation via `GenerationService`
/// 5. Print the confirmation and created-file listing
#[instrument(skip_all, fields(style = %style))]
pub fn execute(
    style: ArchitectureStyle,
    args: GenerateArgs,
    global: GlobalArgs,
    config: AppConfig,
    output: OutputManager,
) -> CliResult<()> {
    let solution_name = resolve_solution_name(&args, &config);
    validate_solution_name(&solution_name)?;

    let base_path = match args.output {
        Some(dir) => dir,
        None => std::env::current_dir()?,
    };

    debug!(
        solution = %solution_name,
        base = %base_path.display(),
        dry_run = args.dry_run,
        "Generation request resolved"
    );

    output.header(&format!(
        "Generating {} architecture in {}",
        style.display_name(),
        base_path.display()
    ))?;
    output.print(&format!("Solution name: {solution_name}"))?;

    if args.dry_run {
        return dry_run(style, &base_path, &solution_name, &output);
    }

    let filesystem = Box::new(LocalFilesystem::new());
    let build_tool = Box::new(DotnetCli::new());
    let service = GenerationService::new(filesystem, build_tool);

    info!(solution = %solution_name, "Generation started");
    let report = service
        .generate(style, &base_path, &solution_name)
        .map_err(CliError::Core)?;
    info!(solution = %solution_name, "Generation completed");

    output.success(&format!(
        "{} architecture generated successfully!",
        style.display_name()
    ))?;

    if !global.quiet {
        output.print("")?;
        output.print("Created structure:")?;
        for project in &report.projects {
            output.print(&format!("- {}", project.project_name))?;
            for file in &project.files {
                output.print(&format!("  * {}", file.display()))?;
            }
        }
    }

    if report.skipped_references > 0 {
        output.warning(&format!(
            "{} reference(s) could not be attached; wire them manually or re-run",
            report.skipped_references
        ))?;
    }

    Ok(())
}

// ── Name resolution ───────────────────────────────────────────────────────────

fn resolve_solution_name(args: &GenerateArgs, config: &AppConfig) -> String {
    args.name
        .clone()
        .or_else(|| config.defaults.solution_name.clone())
        .unwrap_or_else(|| PLACEHOLDER_NAME.to_string())
}

fn validate_solution_name(name: &str) -> CliResult<()> {
    let invalid = |reason: &str| CliError::InvalidSolutionName {
        name: name.into(),
        reason: reason.into(),
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
    Ok(())
}

// ── Dry run ───────────────────────────────────────────────────────────────────

/// Describe what a run would create without touching the filesystem or the
/// build tool.
fn dry_run(
    style: ArchitectureStyle,
    base_path: &std::path::Path,
    solution_name: &str,
    output: &OutputManager,
) -> CliResult<()> {
    let plan = GenerationPlan::resolve(style, base_path, solution_name).map_err(|e| {
        CliError::Core(e.into())
    })?;

    output.info(&format!(
        "Dry run: would create solution '{solution_name}' with {} projects",
        plan.projects.len()
    ))?;

    // The namespace root a real run derives from the project folder is, by
    // construction, the solution name up to its first dot.
    let namespace = solution_name
        .split('.')
        .next()
        .unwrap_or(solution_name)
        .to_string();
    let ctx = RenderContext::new(namespace);

    for project in &plan.projects {
        output.print(&format!(
            "- {} ({})",
            project.project_name, project.layer.kind
        ))?;
        for package in project.layer.package_refs {
            output.print(&format!("  + package {package}"))?;
        }
        for suffix in project.layer.project_refs {
            output.print(&format!("  + reference {solution_name}{suffix}"))?;
        }
        for file in render_layer(style, project.layer.boilerplate, &ctx) {
            output.print(&format!("  * {}", file.path.display()))?;
        }
    }

    Ok(())
}

// ── Tests ─────────────────────────────────────────────────────────────────────
