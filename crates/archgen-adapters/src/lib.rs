//! Infrastructure adapters for ArchGen.
//!
//! This crate implements the ports defined in
//! `archgen-core::application::ports`. It contains all external dependencies
//! and I/O operations.

pub mod build_tool;
pub mod filesystem;

// Re-export commonly used adapters
pub use build_tool::{DotnetCli, RecordingBuildTool, ToolCall};
pub use filesystem::{LocalFilesystem, MemoryFilesystem};
