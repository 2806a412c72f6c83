//! Template Registry: the authoritative layer tables for both styles.
//!
//! Process-wide, read-only constants. `layers_for` is total and pure — both
//! styles are statically defined with exactly five layers each, so there is
//! no error path.
//!
//! Declaration order doubles as generation order: each table is written so
//! that every layer appears after all layers it references. `graph::order`
//! re-verifies that property instead of trusting it, so a future style with
//! a bad table fails loudly rather than generating dangling references.

use crate::domain::layer::{Boilerplate, LayerSpec};
use crate::domain::style::{ArchitectureStyle, PackageRef, ProjectKind};

// Package constants shared between layers. Versions are part of the
// generated projects' contract — bump them deliberately.
const DEPENDENCY_INJECTION: PackageRef =
    PackageRef::new("Microsoft.Extensions.DependencyInjection", "7.0.0");
const EF_CORE: PackageRef = PackageRef::new("Microsoft.EntityFrameworkCore", "7.0.0");
const EF_CORE_SQLSERVER: PackageRef =
    PackageRef::new("Microsoft.EntityFrameworkCore.SqlServer", "7.0.0");
const EF_CORE_DESIGN: PackageRef =
    PackageRef::new("Microsoft.EntityFrameworkCore.Design", "7.0.0");
const ASPNET_MVC_CORE: PackageRef = PackageRef::new("Microsoft.AspNetCore.Mvc.Core", "7.0.0");
const ASPNET_MVC_ABSTRACTIONS: PackageRef =
    PackageRef::new("Microsoft.AspNetCore.Mvc.Abstractions", "2.2.0");

/// N-Layer: Core ← Entities ← DataAccess ← Business ← API.
pub const NLAYER_LAYERS: [LayerSpec; 5] = [
    LayerSpec {
        suffix: ".Core",
        kind: ProjectKind::Library,
        package_refs: &[DEPENDENCY_INJECTION],
        project_refs: &[],
        scaffold_dirs: &["Interfaces"],
        boilerplate: &[Boilerplate::EntityMarker, Boilerplate::RepositoryContract],
    },
    LayerSpec {
        suffix: ".Entities",
        kind: ProjectKind::Library,
        package_refs: &[],
        project_refs: &[".Core"],
        scaffold_dirs: &["Models"],
        boilerplate: &[Boilerplate::BaseEntity],
    },
    LayerSpec {
        suffix: ".DataAccess",
        kind: ProjectKind::Library,
        package_refs: &[EF_CORE, EF_CORE_SQLSERVER],
        project_refs: &[".Core", ".Entities"],
        scaffold_dirs: &["Repositories"],
        boilerplate: &[Boilerplate::BaseRepository],
    },
    LayerSpec {
        suffix: ".Business",
        kind: ProjectKind::Library,
        package_refs: &[DEPENDENCY_INJECTION],
        project_refs: &[".Core", ".Entities", ".DataAccess"],
        scaffold_dirs: &["Services"],
        boilerplate: &[Boilerplate::BaseService],
    },
    LayerSpec {
        suffix: ".API",
        kind: ProjectKind::Api,
        package_refs: &[ASPNET_MVC_CORE, EF_CORE_DESIGN],
        project_refs: &[".Core", ".Business", ".DataAccess", ".Entities"],
        scaffold_dirs: &["Controllers"],
        boilerplate: &[Boilerplate::BaseController],
    },
];

/// Onion: Domain ← Application ← {Infrastructure, Persistence} ← API.
pub const ONION_LAYERS: [LayerSpec; 5] = [
    LayerSpec {
        suffix: ".Domain",
        kind: ProjectKind::Library,
        package_refs: &[DEPENDENCY_INJECTION],
        project_refs: &[],
        scaffold_dirs: &["Entities", "Interfaces"],
        boilerplate: &[Boilerplate::BaseEntity, Boilerplate::RepositoryContract],
    },
    LayerSpec {
        suffix: ".Application",
        kind: ProjectKind::Library,
        package_refs: &[DEPENDENCY_INJECTION, EF_CORE],
        project_refs: &[".Domain"],
        scaffold_dirs: &["Interfaces", "Services", "DTOs"],
        boilerplate: &[Boilerplate::ServiceContract, Boilerplate::BaseService],
    },
    LayerSpec {
        suffix: ".Infrastructure",
        kind: ProjectKind::Library,
        package_refs: &[EF_CORE, EF_CORE_SQLSERVER],
        project_refs: &[".Domain", ".Application"],
        scaffold_dirs: &["Services"],
        boilerplate: &[Boilerplate::EmailService],
    },
    LayerSpec {
        suffix: ".Persistence",
        kind: ProjectKind::Library,
        package_refs: &[EF_CORE, EF_CORE_SQLSERVER],
        project_refs: &[".Domain", ".Application"],
        scaffold_dirs: &["Repositories", "Contexts"],
        boilerplate: &[Boilerplate::BaseRepository, Boilerplate::DataContext],
    },
    LayerSpec {
        suffix: ".API",
        kind: ProjectKind::Api,
        package_refs: &[ASPNET_MVC_ABSTRACTIONS, EF_CORE_DESIGN],
        project_refs: &[".Domain", ".Application", ".Infrastructure", ".Persistence"],
        scaffold_dirs: &["Controllers"],
        boilerplate: &[Boilerplate::BaseController],
    },
];

/// The ordered layer table for a style.
pub fn layers_for(style: ArchitectureStyle) -> &'static [LayerSpec] {
    match style {
        ArchitectureStyle::NLayer => &NLAYER_LAYERS,
        ArchitectureStyle::Onion => &ONION_LAYERS,
    }
}
