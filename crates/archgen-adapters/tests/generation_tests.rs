//! End-to-end generation tests: core orchestrator against the in-memory
//! filesystem and the recording build tool.

use std::path::Path;

use archgen_adapters::{MemoryFilesystem, RecordingBuildTool, ToolCall};
use archgen_core::{
    application::{Filesystem, GenerationService, ports::ToolAction},
    domain::{ArchitectureStyle, ProjectKind},
};

fn service_with(
    fs: MemoryFilesystem,
    tool: RecordingBuildTool,
) -> GenerationService {
    GenerationService::new(Box::new(fs), Box::new(tool))
}

#[test]
fn nlayer_generates_five_nonempty_projects() {
    let fs = MemoryFilesystem::new();
    let tool = RecordingBuildTool::new();
    let service = service_with(fs.clone(), tool.clone());

    let report = service
        .generate(ArchitectureStyle::NLayer, Path::new("/out"), "Acme")
        .unwrap();

    assert_eq!(report.projects.len(), 5);
    for suffix in [".Core", ".Entities", ".DataAccess", ".Business", ".API"] {
        let dir = Path::new("/out").join(format!("Acme{suffix}"));
        assert!(fs.directory_exists(&dir), "{suffix} dir missing");
        assert!(
            !fs.files_under(&dir).is_empty(),
            "{suffix} has no boilerplate files"
        );
    }
}

#[test]
fn nlayer_writes_expected_boilerplate_paths() {
    let fs = MemoryFilesystem::new();
    let service = service_with(fs.clone(), RecordingBuildTool::new());

    service
        .generate(ArchitectureStyle::NLayer, Path::new("/out"), "Acme")
        .unwrap();

    for expected in [
        "/out/Acme.Core/Interfaces/IEntity.cs",
        "/out/Acme.Core/Interfaces/IRepository.cs",
        "/out/Acme.Entities/Models/BaseEntity.cs",
        "/out/Acme.DataAccess/Repositories/BaseRepository.cs",
        "/out/Acme.Business/Services/BaseService.cs",
        "/out/Acme.API/Controllers/BaseController.cs",
    ] {
        assert!(
            fs.read_file(Path::new(expected)).is_some(),
            "missing {expected}"
        );
    }
}

#[test]
fn onion_writes_expected_boilerplate_paths() {
    let fs = MemoryFilesystem::new();
    let service = service_with(fs.clone(), RecordingBuildTool::new());

    service
        .generate(ArchitectureStyle::Onion, Path::new("/out"), "Shop")
        .unwrap();

    for expected in [
        "/out/Shop.Domain/Entities/BaseEntity.cs",
        "/out/Shop.Domain/Interfaces/IRepository.cs",
        "/out/Shop.Application/Interfaces/IService.cs",
        "/out/Shop.Application/Services/BaseService.cs",
        "/out/Shop.Infrastructure/Services/EmailService.cs",
        "/out/Shop.Persistence/Repositories/BaseRepository.cs",
        "/out/Shop.Persistence/Contexts/ApplicationDbContext.cs",
        "/out/Shop.API/Controllers/BaseController.cs",
    ] {
        assert!(
            fs.read_file(Path::new(expected)).is_some(),
            "missing {expected}"
        );
    }

    // The DTOs extension point exists even though nothing is written there.
    assert!(fs.directory_exists(Path::new("/out/Shop.Application/DTOs")));
}

#[test]
fn rendered_content_is_namespaced_without_placeholders() {
    let fs = MemoryFilesystem::new();
    let service = service_with(fs.clone(), RecordingBuildTool::new());

    service
        .generate(ArchitectureStyle::NLayer, Path::new("/out"), "Acme")
        .unwrap();

    let repository = fs
        .read_file(Path::new("/out/Acme.Core/Interfaces/IRepository.cs"))
        .unwrap();
    assert!(repository.contains("namespace Acme.Core.Interfaces"));
    assert!(!repository.contains("{{"));

    let controller = fs
        .read_file(Path::new("/out/Acme.API/Controllers/BaseController.cs"))
        .unwrap();
    assert!(controller.contains("namespace Acme.API.Controllers"));
    assert!(controller.contains("BaseService<T> _service"));
}

#[test]
fn build_tool_call_sequence_is_sequential_per_layer() {
    let tool = RecordingBuildTool::new();
    let service = service_with(MemoryFilesystem::new(), tool.clone());

    service
        .generate(ArchitectureStyle::NLayer, Path::new("/out"), "Acme")
        .unwrap();

    let calls = tool.calls();
    assert_eq!(calls[0].action(), ToolAction::CreateSolution);

    // Per project: create-project, add-to-solution, then references, with
    // the next project only starting after the previous finished.
    let creates: Vec<usize> = calls
        .iter()
        .enumerate()
        .filter(|(_, c)| c.action() == ToolAction::CreateProject)
        .map(|(i, _)| i)
        .collect();
    assert_eq!(creates.len(), 5);
    for window in creates.windows(2) {
        let (start, end) = (window[0], window[1]);
        assert_eq!(calls[start + 1].action(), ToolAction::AddProjectToSolution);
        // Every call between two creates belongs to the first project's
        // reference wiring.
        for call in &calls[start + 2..end] {
            assert!(matches!(
                call.action(),
                ToolAction::AddPackageReference | ToolAction::AddProjectReference
            ));
        }
    }
}

#[test]
fn api_project_uses_api_template_kind() {
    let tool = RecordingBuildTool::new();
    let service = service_with(MemoryFilesystem::new(), tool.clone());

    service
        .generate(ArchitectureStyle::Onion, Path::new("/out"), "Shop")
        .unwrap();

    for call in tool.calls_of(ToolAction::CreateProject) {
        let ToolCall::CreateProject { project_dir, kind } = call else {
            unreachable!()
        };
        let expected = if project_dir.ends_with("Shop.API") {
            ProjectKind::Api
        } else {
            ProjectKind::Library
        };
        assert_eq!(kind, expected, "{}", project_dir.display());
    }
}

#[test]
fn project_references_target_csproj_files_of_earlier_projects() {
    let tool = RecordingBuildTool::new();
    let service = service_with(MemoryFilesystem::new(), tool.clone());

    service
        .generate(ArchitectureStyle::NLayer, Path::new("/out"), "Acme")
        .unwrap();

    let mut created: Vec<String> = Vec::new();
    for call in tool.calls() {
        match call {
            ToolCall::CreateProject { project_dir, .. } => {
                created.push(project_dir.display().to_string());
            }
            ToolCall::AddProjectReference {
                referenced_project_file,
                ..
            } => {
                assert_eq!(
                    referenced_project_file.extension().and_then(|e| e.to_str()),
                    Some("csproj")
                );
                let referenced_dir = referenced_project_file
                    .parent()
                    .unwrap()
                    .display()
                    .to_string();
                assert!(
                    created.contains(&referenced_dir),
                    "{referenced_dir} referenced before creation"
                );
            }
            _ => {}
        }
    }
}

#[test]
fn package_reference_failure_does_not_stop_generation() {
    let fs = MemoryFilesystem::new();
    let tool = RecordingBuildTool::new()
        .fail_on(ToolAction::AddPackageReference, "Acme.Business");
    let service = service_with(fs.clone(), tool.clone());

    let report = service
        .generate(ArchitectureStyle::NLayer, Path::new("/out"), "Acme")
        .unwrap();

    assert_eq!(report.skipped_references, 1);
    // Business files still written, API layer still processed.
    assert!(
        fs.read_file(Path::new("/out/Acme.Business/Services/BaseService.cs"))
            .is_some()
    );
    assert!(
        fs.read_file(Path::new("/out/Acme.API/Controllers/BaseController.cs"))
            .is_some()
    );
}

#[test]
fn project_creation_failure_is_fatal_and_leaves_partial_output() {
    let fs = MemoryFilesystem::new();
    let tool = RecordingBuildTool::new().fail_on(ToolAction::CreateProject, "Acme.DataAccess");
    let service = service_with(fs.clone(), tool.clone());

    let result = service.generate(ArchitectureStyle::NLayer, Path::new("/out"), "Acme");
    assert!(result.is_err());

    // No rollback: earlier layers remain on disk, later layers never ran.
    assert!(
        fs.read_file(Path::new("/out/Acme.Core/Interfaces/IEntity.cs"))
            .is_some()
    );
    assert!(fs.files_under(Path::new("/out/Acme.Business")).is_empty());
}

#[test]
fn rerun_into_same_target_overwrites_cleanly() {
    let fs = MemoryFilesystem::new();
    let service = service_with(fs.clone(), RecordingBuildTool::new());

    service
        .generate(ArchitectureStyle::NLayer, Path::new("/out"), "Acme")
        .unwrap();
    let first = fs.list_files();

    service
        .generate(ArchitectureStyle::NLayer, Path::new("/out"), "Acme")
        .unwrap();
    let second = fs.list_files();

    assert_eq!(first, second, "re-run must be idempotent for same inputs");
}

#[test]
fn both_styles_share_the_api_suffix_but_not_its_packages() {
    let tool = RecordingBuildTool::new();
    let service = service_with(MemoryFilesystem::new(), tool.clone());
    service
        .generate(ArchitectureStyle::NLayer, Path::new("/n"), "A")
        .unwrap();

    let nlayer_api_packages: Vec<String> = tool
        .calls_of(ToolAction::AddPackageReference)
        .into_iter()
        .filter_map(|c| match c {
            ToolCall::AddPackageReference {
                project_name,
                package,
            } if project_name == "A.API" => Some(package.name.to_string()),
            _ => None,
        })
        .collect();
    assert!(
        nlayer_api_packages.contains(&"Microsoft.AspNetCore.Mvc.Core".to_string()),
        "{nlayer_api_packages:?}"
    );

    let tool = RecordingBuildTool::new();
    let service = service_with(MemoryFilesystem::new(), tool.clone());
    service
        .generate(ArchitectureStyle::Onion, Path::new("/o"), "A")
        .unwrap();

    let onion_api_packages: Vec<String> = tool
        .calls_of(ToolAction::AddPackageReference)
        .into_iter()
        .filter_map(|c| match c {
            ToolCall::AddPackageReference {
                project_name,
                package,
            } if project_name == "A.API" => Some(package.name.to_string()),
            _ => None,
        })
        .collect();
    assert!(
        onion_api_packages.contains(&"Microsoft.AspNetCore.Mvc.Abstractions".to_string()),
        "{onion_api_packages:?}"
    );
}
