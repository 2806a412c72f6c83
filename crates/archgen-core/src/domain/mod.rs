//! Core domain layer for ArchGen.
//!
//! This module contains pure business logic with ZERO external dependencies.
//! All I/O and process-spawning concerns are handled via ports (traits)
//! defined in the application layer.
//!
//! ## Hexagonal Architecture Compliance
//!
//! - **No async**: Domain logic is synchronous
//! - **No I/O**: No filesystem, network, or external calls
//! - **No external crates**: Only std library + thiserror/serde derives
//! - **Immutable data**: Layer tables are process-wide constants

pub mod error;
pub mod graph;
pub mod layer;
pub mod plan;
pub mod registry;
pub mod render;
pub mod style;

// Re-exports for convenience
pub use error::{DomainError, ErrorCategory};
pub use layer::{Boilerplate, LayerSpec};
pub use plan::{GenerationPlan, PlannedProject};
pub use registry::layers_for;
pub use render::{RenderContext, RenderedFile, render, render_layer};
pub use style::{ArchitectureStyle, PackageRef, ProjectKind};
