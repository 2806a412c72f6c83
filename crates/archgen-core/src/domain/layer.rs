//! Layer metadata: what one project-level unit of a style looks like.
//!
//! A [`LayerSpec`] is declarative data, not behavior. The registry owns the
//! actual tables; the graph module orders them; the renderer turns each
//! [`Boilerplate`] id into concrete source text.

use std::fmt;

use crate::domain::style::{PackageRef, ProjectKind};

/// One layer within an architecture style.
///
/// All fields are `'static` — layer specs are process-wide constants declared
/// in `registry.rs` and never constructed at runtime.
///
/// Invariants (checked by `graph::validate_edges`, exercised in tests):
/// - `project_refs` never contains the layer's own `suffix`
/// - every entry in `project_refs` is the suffix of another layer in the
///   same style's table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LayerSpec {
    /// Suffix appended to the solution name to form the project name
    /// (e.g. `.Core` → `Acme.Core`).
    pub suffix: &'static str,

    /// Which build-tool project template the layer is created from.
    pub kind: ProjectKind,

    /// Third-party package references, attached in declaration order.
    pub package_refs: &'static [PackageRef],

    /// Suffixes of other layers this layer references. These are the edges
    /// of the style's dependency graph.
    pub project_refs: &'static [&'static str],

    /// Subdirectories created inside the project before boilerplate is
    /// written (`Interfaces`, `Models`, ... — including folders the
    /// boilerplate leaves empty, such as Onion's `DTOs`).
    pub scaffold_dirs: &'static [&'static str],

    /// Boilerplate files this layer owns, rendered in declaration order.
    pub boilerplate: &'static [Boilerplate],
}

impl LayerSpec {
    /// Layer name without the leading dot, for display (`Core`, `API`).
    pub fn name(&self) -> &'static str {
        self.suffix.trim_start_matches('.')
    }
}

impl fmt::Display for LayerSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Identifier for one boilerplate file a layer must render.
///
/// The same id can render differently per style (e.g. [`Self::BaseController`]
/// has an N-Layer variant bound to the concrete base service and an Onion
/// variant bound to the service interface). The mapping to paths and source
/// text lives in `render/`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Boilerplate {
    /// Marker interface with the integer identifier property (`IEntity`).
    EntityMarker,
    /// Generic repository interface: CRUD + predicate-based find.
    RepositoryContract,
    /// Abstract base entity with creation/update timestamps.
    BaseEntity,
    /// Generic service interface (Onion's `IService<T>`).
    ServiceContract,
    /// Abstract generic base service delegating to a repository.
    BaseService,
    /// Concrete generic repository backed by a data context.
    BaseRepository,
    /// The EF Core `DbContext` seed (Onion persistence).
    DataContext,
    /// Example auxiliary service interface + no-op implementation.
    EmailService,
    /// Abstract generic REST base controller.
    BaseController,
}
