//! ArchGen Core - Hexagonal Architecture Implementation
//!
//! This crate provides the domain and application layers for the ArchGen
//! solution scaffolding tool, following hexagonal (ports and adapters)
//! architecture.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │          archgen-cli (CLI)              │
//! │     (Implements Driving Ports)          │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Application Services            │
//! │          (GenerationService)            │
//! │         Orchestrates Use Cases          │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │      Application Ports (Traits)         │
//! │     (Driven: Filesystem, BuildTool)     │
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │    archgen-adapters (Infrastructure)    │
//! │  (LocalFilesystem, DotnetCli, fakes)    │
//! └─────────────────────────────────────────┘
//!                    │
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │        Domain Layer (Pure Logic)        │
//! │  (Registry, Graph, Plan, Rendering)     │
//! │        No External Dependencies         │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,no_run
//! use archgen_core::{application::GenerationService, domain::ArchitectureStyle};
//! # fn adapters() -> (
//! #     Box<dyn archgen_core::application::Filesystem>,
//! #     Box<dyn archgen_core::application::BuildTool>,
//! # ) { unimplemented!() }
//!
//! let (filesystem, build_tool) = adapters();
//! let service = GenerationService::new(filesystem, build_tool);
//! let report = service
//!     .generate(ArchitectureStyle::NLayer, "./out".as_ref(), "Acme")
//!     .unwrap();
//! println!("created {} projects", report.projects.len());
//! ```

// Re-export domain layer (stable, well-defined API)
pub mod domain;

// Re-export application layer (orchestration logic)
pub mod application;

// Re-export error types
pub mod error;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{
        GenerationReport, GenerationService,
        ports::{BuildTool, Filesystem, ToolAction},
    };
    pub use crate::domain::{
        ArchitectureStyle, Boilerplate, GenerationPlan, LayerSpec, PackageRef, PlannedProject,
        ProjectKind, RenderContext, RenderedFile,
    };
    pub use crate::error::{ArchgenError, ArchgenResult};
}

// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
